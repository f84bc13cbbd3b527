//! Schedule quality metrics.
//!
//! Computes the standard per-run indicators from a completed schedule.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Waiting Time | mean(turnaround - burst) |
//! | Avg Turnaround Time | mean(completion - arrival) |
//! | Makespan | Latest block end time |
//! | CPU Utilization | busy_time / makespan |
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.2

use serde::{Deserialize, Serialize};

use crate::models::CpuSchedule;

/// Aggregate performance indicators for one scheduler run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleStats {
    /// Arithmetic mean of per-process waiting times.
    pub avg_waiting_time: f64,
    /// Arithmetic mean of per-process turnaround times.
    pub avg_turnaround_time: f64,
    /// Latest block end time (ticks).
    pub makespan: u32,
    /// Ticks the CPU spent executing processes.
    pub busy_time: u32,
    /// `busy_time / makespan` (0.0 for an empty run).
    pub cpu_utilization: f64,
}

impl ScheduleStats {
    /// Computes stats from a completed schedule.
    pub fn calculate(schedule: &CpuSchedule) -> Self {
        let n = schedule.processes.len();
        let (avg_waiting_time, avg_turnaround_time) = if n == 0 {
            (0.0, 0.0)
        } else {
            let total_waiting: u32 = schedule.processes.iter().map(|p| p.waiting_time).sum();
            let total_turnaround: u32 = schedule.processes.iter().map(|p| p.turnaround_time).sum();
            (
                f64::from(total_waiting) / n as f64,
                f64::from(total_turnaround) / n as f64,
            )
        };

        let makespan = schedule.makespan();
        let busy_time = schedule.busy_time();
        let cpu_utilization = if makespan == 0 {
            0.0
        } else {
            f64::from(busy_time) / f64::from(makespan)
        };

        Self {
            avg_waiting_time,
            avg_turnaround_time,
            makespan,
            busy_time,
            cpu_utilization,
        }
    }
}
