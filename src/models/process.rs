//! Process models.
//!
//! A process is the unit of work scheduled on the CPU: it arrives at some
//! time, needs a fixed burst of CPU time, and carries a priority.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5

use serde::{Deserialize, Serialize};

/// A process submitted to the CPU scheduler.
///
/// Immutable input: the engine works on internal copies and never mutates
/// the records it is given.
///
/// # Time Representation
/// All times are in abstract, unitless ticks relative to t=0. The consumer
/// defines what one tick means.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessRecord {
    /// Unique process identifier.
    pub id: String,
    /// Tick at which the process becomes schedulable.
    pub arrival_time: u32,
    /// Total CPU ticks required (must be >= 1).
    pub burst_time: u32,
    /// Scheduling priority. Lower value = scheduled first.
    pub priority: i32,
}

impl ProcessRecord {
    /// Creates a new process record.
    pub fn new(id: impl Into<String>, arrival_time: u32, burst_time: u32, priority: i32) -> Self {
        Self {
            id: id.into(),
            arrival_time,
            burst_time,
            priority,
        }
    }
}

/// The finished state of a scheduled process.
///
/// Produced once, when the process's last tick executes; the timing fields
/// never change afterwards.
///
/// # Invariants
/// - `turnaround_time == completion_time - arrival_time`
/// - `waiting_time == turnaround_time - burst_time`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessOutcome {
    /// Process identifier.
    pub id: String,
    /// Tick at which the process became schedulable.
    pub arrival_time: u32,
    /// Total CPU ticks the process required.
    pub burst_time: u32,
    /// Scheduling priority (lower = scheduled first).
    pub priority: i32,
    /// Tick at which the last unit of work finished.
    pub completion_time: u32,
    /// `completion_time - arrival_time`.
    pub turnaround_time: u32,
    /// `turnaround_time - burst_time`: ticks spent ready but not running.
    pub waiting_time: u32,
}

impl ProcessOutcome {
    /// Derives the outcome for a record completing at `completion_time`.
    pub(crate) fn derive(record: &ProcessRecord, completion_time: u32) -> Self {
        let turnaround_time = completion_time - record.arrival_time;
        Self {
            id: record.id.clone(),
            arrival_time: record.arrival_time,
            burst_time: record.burst_time,
            priority: record.priority,
            completion_time,
            turnaround_time,
            waiting_time: turnaround_time - record.burst_time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_new() {
        let p = ProcessRecord::new("P1", 0, 4, 2);
        assert_eq!(p.id, "P1");
        assert_eq!(p.arrival_time, 0);
        assert_eq!(p.burst_time, 4);
        assert_eq!(p.priority, 2);
    }

    #[test]
    fn test_outcome_derive() {
        let p = ProcessRecord::new("P2", 1, 3, 1);
        let o = ProcessOutcome::derive(&p, 4);
        assert_eq!(o.completion_time, 4);
        assert_eq!(o.turnaround_time, 3);
        assert_eq!(o.waiting_time, 0);
    }

    #[test]
    fn test_outcome_invariants() {
        let p = ProcessRecord::new("P1", 2, 5, 3);
        let o = ProcessOutcome::derive(&p, 14);
        assert_eq!(o.turnaround_time, o.completion_time - o.arrival_time);
        assert_eq!(o.waiting_time, o.turnaround_time - o.burst_time);
    }

    #[test]
    fn test_record_serde_roundtrip() {
        let p = ProcessRecord::new("P1", 0, 4, 2);
        let json = serde_json::to_string(&p).unwrap();
        let back: ProcessRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }
}
