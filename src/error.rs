//! Engine error taxonomy.
//!
//! Both engines fail fast on malformed input: the whole call is rejected
//! and no partial simulation state escapes. Empty inputs are not errors —
//! they yield defined no-op results.

use thiserror::Error;

/// An input the engines refuse to simulate.
///
/// There are no retryable failure modes: the engines are pure deterministic
/// computations, so every failure is a caller-input problem.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimError {
    /// Two processes share the same ID.
    #[error("duplicate process ID '{0}'")]
    DuplicateProcessId(String),

    /// A process requires zero CPU time.
    #[error("process '{0}' has zero burst time")]
    ZeroBurst(String),

    /// The disk has no cylinders.
    #[error("disk size must be at least 1")]
    ZeroDiskSize,

    /// The head starts outside the address space.
    #[error("head position {head} outside disk of size {disk_size}")]
    HeadOutOfRange {
        /// Offending head position.
        head: u32,
        /// Address-space size.
        disk_size: u32,
    },

    /// A request addresses a cylinder outside the address space.
    #[error("request cylinder {request} outside disk of size {disk_size}")]
    RequestOutOfRange {
        /// Offending request cylinder.
        request: u32,
        /// Address-space size.
        disk_size: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let e = SimError::HeadOutOfRange {
            head: 250,
            disk_size: 200,
        };
        assert_eq!(e.to_string(), "head position 250 outside disk of size 200");
        assert_eq!(
            SimError::ZeroBurst("P3".into()).to_string(),
            "process 'P3' has zero burst time"
        );
    }
}
