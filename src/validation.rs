//! Caller-side input validation.
//!
//! The engines themselves fail fast with a single [`crate::SimError`]; this
//! module is the tolerant boundary in front of them. It checks structural
//! integrity of raw inputs and reports *all* problems at once:
//! - Duplicate process IDs
//! - Zero burst times
//! - Out-of-range head position or request cylinders
//!
//! It also hosts the free-text request-queue parser, which silently drops
//! malformed and out-of-range entries — partial tolerance is a caller
//! choice, never an engine behavior.

use std::collections::HashSet;

use crate::models::{DiskWorkload, ProcessRecord};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two processes share the same ID.
    DuplicateId,
    /// A process requires zero CPU time.
    ZeroBurst,
    /// The disk has no cylinders.
    ZeroDiskSize,
    /// The head starts outside the address space.
    HeadOutOfRange,
    /// A request addresses a cylinder outside the address space.
    RequestOutOfRange,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a process set before scheduling.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(records: &[ProcessRecord]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for p in records {
        if !ids.insert(p.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }
        if p.burst_time == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroBurst,
                format!("Process '{}' has zero burst time", p.id),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a disk workload before seek planning.
pub fn validate_workload(workload: &DiskWorkload) -> ValidationResult {
    let mut errors = Vec::new();

    if workload.disk_size == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::ZeroDiskSize,
            "Disk size must be at least 1",
        ));
    } else {
        if workload.head_position >= workload.disk_size {
            errors.push(ValidationError::new(
                ValidationErrorKind::HeadOutOfRange,
                format!(
                    "Head position {} outside disk of size {}",
                    workload.head_position, workload.disk_size
                ),
            ));
        }
        for &r in &workload.requests {
            if r >= workload.disk_size {
                errors.push(ValidationError::new(
                    ValidationErrorKind::RequestOutOfRange,
                    format!("Request cylinder {} outside disk of size {}", r, workload.disk_size),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Parses a comma-separated request queue, silently dropping entries that
/// are not integers or fall outside `0..disk_size`.
///
/// # Example
///
/// ```
/// use schedsim::validation::parse_request_queue;
///
/// let requests = parse_request_queue("98, 183, x, 250, 37", 200);
/// assert_eq!(requests, vec![98, 183, 37]);
/// ```
pub fn parse_request_queue(text: &str, disk_size: u32) -> Vec<u32> {
    text.split(',')
        .filter_map(|part| part.trim().parse::<u32>().ok())
        .filter(|&r| r < disk_size)
        .collect()
}
