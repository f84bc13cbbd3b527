//! CPU scheduling engine and metrics.
//!
//! # Algorithm
//!
//! [`PriorityScheduler`] implements preemptive priority scheduling with a
//! first-come-first-served tie-break, stepping discrete time one tick at a
//! time.
//!
//! # Metrics
//!
//! [`ScheduleStats`] computes average waiting time, average turnaround time,
//! makespan, and CPU utilization from a completed run.
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2015), "Modern Operating Systems", Ch. 2.4

mod priority;
mod stats;

pub use priority::PriorityScheduler;
pub use stats::ScheduleStats;
