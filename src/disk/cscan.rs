//! Circular-SCAN (C-SCAN) disk seek planner.
//!
//! # Algorithm
//!
//! 1. Partition requests into `right` (>= head) and `left` (< head), each
//!    sorted ascending.
//! 2. Service `right` in ascending order.
//! 3. Sweep to the last cylinder if there is room left to traverse.
//! 4. If `left` is non-empty, jump back to cylinder 0 (servicing nothing;
//!    the jump distance still counts) and service `left` ascending.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 11.2.4

use tracing::{debug, trace};

use crate::error::SimError;
use crate::models::{DiskWorkload, SeekPlan, SeekStep};

/// C-SCAN seek planner.
///
/// Stateless per invocation; the workload is never mutated.
///
/// # Example
///
/// ```
/// use schedsim::disk::CScanScheduler;
/// use schedsim::models::DiskWorkload;
///
/// let workload = DiskWorkload::new(50, 200).with_requests(vec![98, 37]);
/// let plan = CScanScheduler::new().plan(&workload).unwrap();
/// assert_eq!(plan.final_position(), Some(37));
/// ```
#[derive(Debug, Clone, Default)]
pub struct CScanScheduler;

impl CScanScheduler {
    /// Creates a new planner.
    pub fn new() -> Self {
        Self
    }

    /// Computes the full seek path for a workload.
    ///
    /// An empty request queue is valid and yields a zero-step plan.
    /// Out-of-range inputs reject the whole call; silent filtering of bad
    /// requests belongs to the caller-side boundary
    /// ([`crate::validation::parse_request_queue`]).
    pub fn plan(&self, workload: &DiskWorkload) -> Result<SeekPlan, SimError> {
        if workload.disk_size == 0 {
            return Err(SimError::ZeroDiskSize);
        }
        if workload.head_position >= workload.disk_size {
            return Err(SimError::HeadOutOfRange {
                head: workload.head_position,
                disk_size: workload.disk_size,
            });
        }
        if let Some(&bad) = workload
            .requests
            .iter()
            .find(|&&r| r >= workload.disk_size)
        {
            return Err(SimError::RequestOutOfRange {
                request: bad,
                disk_size: workload.disk_size,
            });
        }
        if workload.requests.is_empty() {
            return Ok(SeekPlan::default());
        }

        let head = workload.head_position;
        let last_cylinder = workload.disk_size - 1;

        // Set semantics: duplicate cylinders are serviced once.
        let mut sorted = workload.requests.clone();
        sorted.sort_unstable();
        sorted.dedup();

        // A request at exactly the head position belongs to the right side.
        let split = sorted.partition_point(|&r| r < head);
        let (left, right) = sorted.split_at(split);

        debug!(
            head,
            disk_size = workload.disk_size,
            right = right.len(),
            left = left.len(),
            "planning C-SCAN sweep"
        );

        let mut steps: Vec<SeekStep> = Vec::new();
        let mut position = head;

        for &cylinder in right {
            steps.push(SeekStep::seek(position, cylinder));
            position = cylinder;
        }

        // Reach the physical end of the disk even with no pending request
        // there.
        if position < last_cylinder {
            steps.push(SeekStep::seek(position, last_cylinder));
            position = last_cylinder;
        }

        if !left.is_empty() {
            trace!(from = position, "wraparound jump");
            steps.push(SeekStep::jump(position));
            position = 0;
            for &cylinder in left {
                steps.push(SeekStep::seek(position, cylinder));
                position = cylinder;
            }
        }

        let total_distance = steps.iter().map(|s| s.distance).sum();
        debug!(steps = steps.len(), total_distance, "plan complete");
        Ok(SeekPlan {
            steps,
            total_distance,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario_b() -> DiskWorkload {
        DiskWorkload::new(50, 200).with_requests(vec![98, 183, 37, 122, 14, 124, 65, 67])
    }

    #[test]
    fn test_scenario_b_path_and_distance() {
        let plan = CScanScheduler::new().plan(&scenario_b()).unwrap();

        let path: Vec<(u32, u32)> = plan.steps.iter().map(|s| (s.from, s.to)).collect();
        assert_eq!(
            path,
            vec![
                (50, 65),
                (65, 67),
                (67, 98),
                (98, 122),
                (122, 124),
                (124, 183),
                (183, 199),
                (199, 0),
                (0, 14),
                (14, 37),
            ]
        );

        // Literal arithmetic sum, jump included.
        assert_eq!(
            plan.total_distance,
            15 + 2 + 31 + 24 + 2 + 59 + 16 + 199 + 14 + 23
        );
        assert_eq!(plan.total_distance, 385);

        // Exactly one jump, and it lands on cylinder 0.
        let jumps: Vec<&SeekStep> = plan.steps.iter().filter(|s| s.is_jump).collect();
        assert_eq!(jumps.len(), 1);
        assert_eq!(jumps[0].from, 199);
        assert_eq!(jumps[0].to, 0);
    }

    #[test]
    fn test_path_continuity() {
        let plan = CScanScheduler::new().plan(&scenario_b()).unwrap();
        for pair in plan.steps.windows(2) {
            assert_eq!(pair[0].to, pair[1].from);
        }
        let sum: u32 = plan.steps.iter().map(|s| s.distance).sum();
        assert_eq!(sum, plan.total_distance);
    }

    #[test]
    fn test_final_position_is_last_left_request() {
        let plan = CScanScheduler::new().plan(&scenario_b()).unwrap();
        assert_eq!(plan.final_position(), Some(37));
    }

    #[test]
    fn test_scenario_c_empty_queue() {
        let plan = CScanScheduler::new()
            .plan(&DiskWorkload::new(50, 200))
            .unwrap();
        assert_eq!(plan.step_count(), 0);
        assert_eq!(plan.total_distance, 0);
    }

    #[test]
    fn test_no_left_requests_no_jump() {
        // Everything is at or to the right of the head: sweep to the end,
        // but never jump back.
        let workload = DiskWorkload::new(50, 200).with_requests(vec![60, 120]);
        let plan = CScanScheduler::new().plan(&workload).unwrap();

        assert!(plan.steps.iter().all(|s| !s.is_jump));
        assert_eq!(plan.final_position(), Some(199));
        assert_eq!(plan.total_distance, 10 + 60 + 79);
    }

    #[test]
    fn test_request_at_head_belongs_right() {
        let workload = DiskWorkload::new(50, 100).with_requests(vec![50, 10]);
        let plan = CScanScheduler::new().plan(&workload).unwrap();

        // 50 is serviced first (zero-distance step), not after the jump.
        assert_eq!(plan.steps[0], SeekStep::seek(50, 50));
        assert_eq!(plan.final_position(), Some(10));
    }

    #[test]
    fn test_head_at_last_cylinder_skips_end_sweep() {
        let workload = DiskWorkload::new(99, 100).with_requests(vec![99, 5]);
        let plan = CScanScheduler::new().plan(&workload).unwrap();

        let path: Vec<(u32, u32)> = plan.steps.iter().map(|s| (s.from, s.to)).collect();
        assert_eq!(path, vec![(99, 99), (99, 0), (0, 5)]);
        assert_eq!(plan.total_distance, 99 + 5);
    }

    #[test]
    fn test_duplicate_requests_serviced_once() {
        let workload = DiskWorkload::new(0, 100).with_requests(vec![30, 30, 60]);
        let plan = CScanScheduler::new().plan(&workload).unwrap();
        let targets: Vec<u32> = plan.steps.iter().map(|s| s.to).collect();
        assert_eq!(targets, vec![30, 60, 99]);
    }

    #[test]
    fn test_zero_disk_size_rejected() {
        let workload = DiskWorkload::new(0, 0);
        assert_eq!(
            CScanScheduler::new().plan(&workload),
            Err(SimError::ZeroDiskSize)
        );
    }

    #[test]
    fn test_head_out_of_range_rejected() {
        let workload = DiskWorkload::new(200, 200);
        assert_eq!(
            CScanScheduler::new().plan(&workload),
            Err(SimError::HeadOutOfRange {
                head: 200,
                disk_size: 200
            })
        );
    }

    #[test]
    fn test_out_of_range_request_rejected() {
        let workload = DiskWorkload::new(50, 200).with_requests(vec![98, 250]);
        assert_eq!(
            CScanScheduler::new().plan(&workload),
            Err(SimError::RequestOutOfRange {
                request: 250,
                disk_size: 200
            })
        );
    }

    #[test]
    fn test_workload_not_mutated() {
        let workload = scenario_b();
        let before = workload.clone();
        CScanScheduler::new().plan(&workload).unwrap();
        assert_eq!(workload, before);
    }
}
