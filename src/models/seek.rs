//! Disk seek models.
//!
//! A [`DiskWorkload`] describes the head position, the cylinder address
//! space, and the pending requests; a [`SeekPlan`] is the full head path
//! computed for it.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 11.2

use serde::{Deserialize, Serialize};

/// One head movement between two cylinder addresses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeekStep {
    /// Cylinder the head moves from.
    pub from: u32,
    /// Cylinder the head moves to.
    pub to: u32,
    /// `|to - from|`.
    pub distance: u32,
    /// True only for the wraparound move from the top of the disk back to
    /// cylinder 0. The jump services no request but its distance still
    /// counts toward the total.
    pub is_jump: bool,
}

impl SeekStep {
    /// Creates a step that services (or sweeps toward) a cylinder.
    pub fn seek(from: u32, to: u32) -> Self {
        Self {
            from,
            to,
            distance: from.abs_diff(to),
            is_jump: false,
        }
    }

    /// Creates the wraparound jump back to cylinder 0.
    pub fn jump(from: u32) -> Self {
        Self {
            from,
            to: 0,
            distance: from,
            is_jump: true,
        }
    }
}

/// Input to the disk seek engine.
///
/// Cylinders are numbered `0..disk_size`. The engine never mutates the
/// workload it is given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiskWorkload {
    /// Cylinder the head starts at.
    pub head_position: u32,
    /// Number of cylinders (addresses run `0..disk_size`).
    pub disk_size: u32,
    /// Pending request cylinders, in arrival order.
    pub requests: Vec<u32>,
}

impl DiskWorkload {
    /// Creates a workload with an empty request queue.
    pub fn new(head_position: u32, disk_size: u32) -> Self {
        Self {
            head_position,
            disk_size,
            requests: Vec::new(),
        }
    }

    /// Replaces the request queue.
    pub fn with_requests(mut self, requests: Vec<u32>) -> Self {
        self.requests = requests;
        self
    }

    /// Appends a single request.
    pub fn with_request(mut self, cylinder: u32) -> Self {
        self.requests.push(cylinder);
        self
    }
}

/// The complete head path for one workload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeekPlan {
    /// Head movements in execution order. Continuous path:
    /// `steps[i].to == steps[i+1].from`.
    pub steps: Vec<SeekStep>,
    /// Sum of every step's distance, jump included.
    pub total_distance: u32,
}

impl SeekPlan {
    /// Number of head movements.
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Cylinder the head ends at, if any step was taken.
    pub fn final_position(&self) -> Option<u32> {
        self.steps.last().map(|s| s.to)
    }
}
