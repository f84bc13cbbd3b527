//! CPU schedule (solution) model.
//!
//! A [`CpuSchedule`] is the complete result of one scheduler run: the Gantt
//! timeline plus the finished state of every input process.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.3

use serde::{Deserialize, Serialize};

use super::ProcessOutcome;

/// One contiguous interval during which a single process (or nothing)
/// occupied the CPU without interruption.
///
/// A preemption and later resumption of the same process yields two separate
/// blocks; blocks are never merged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GanttBlock {
    /// Owning process, or `None` for an explicit idle interval.
    pub process_id: Option<String>,
    /// Tick at which the interval begins (inclusive).
    pub start_time: u32,
    /// Tick at which the interval ends (exclusive). Always > `start_time`.
    pub end_time: u32,
}

impl GanttBlock {
    /// Creates a block attributed to a process.
    pub fn run(process_id: impl Into<String>, start_time: u32, end_time: u32) -> Self {
        Self {
            process_id: Some(process_id.into()),
            start_time,
            end_time,
        }
    }

    /// Creates an explicit idle block.
    pub fn idle(start_time: u32, end_time: u32) -> Self {
        Self {
            process_id: None,
            start_time,
            end_time,
        }
    }

    /// Whether this block records idle CPU time.
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.process_id.is_none()
    }

    /// Interval length (end - start) in ticks.
    #[inline]
    pub fn duration(&self) -> u32 {
        self.end_time - self.start_time
    }
}

/// A complete CPU schedule: Gantt timeline plus per-process outcomes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CpuSchedule {
    /// Timeline blocks in increasing `start_time` order.
    pub blocks: Vec<GanttBlock>,
    /// Finished state of every input process, in input order.
    pub processes: Vec<ProcessOutcome>,
}

impl CpuSchedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Latest end time across all blocks (ticks). Zero when empty.
    pub fn makespan(&self) -> u32 {
        self.blocks.iter().map(|b| b.end_time).max().unwrap_or(0)
    }

    /// Total ticks the CPU spent executing processes (idle blocks excluded).
    pub fn busy_time(&self) -> u32 {
        self.blocks
            .iter()
            .filter(|b| !b.is_idle())
            .map(|b| b.duration())
            .sum()
    }

    /// Returns all blocks attributed to a given process.
    pub fn blocks_for(&self, process_id: &str) -> Vec<&GanttBlock> {
        self.blocks
            .iter()
            .filter(|b| b.process_id.as_deref() == Some(process_id))
            .collect()
    }

    /// Finds the finished state of a given process.
    pub fn outcome_for(&self, process_id: &str) -> Option<&ProcessOutcome> {
        self.processes.iter().find(|p| p.id == process_id)
    }

    /// Which process holds the CPU at tick `time`, if any.
    pub fn running_at(&self, time: u32) -> Option<&str> {
        self.blocks
            .iter()
            .find(|b| b.start_time <= time && time < b.end_time)
            .and_then(|b| b.process_id.as_deref())
    }

    /// Number of timeline blocks.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }
}
