//! Lazy replay of already-computed results.
//!
//! Both engines run start-to-finish synchronously; animation pacing is a
//! presentation concern. These iterators let a presentation layer reveal a
//! finished result one step at a time and abandon it at any point — they
//! borrow immutable results, so nothing can be corrupted mid-replay.

use crate::models::{CpuSchedule, SeekPlan};

/// CPU occupancy at one tick of the timeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineFrame<'a> {
    /// The tick this frame describes.
    pub time: u32,
    /// Process holding the CPU during `[time, time+1)`, if any.
    pub running: Option<&'a str>,
}

/// Tick-by-tick iterator over a finished CPU schedule.
#[derive(Debug, Clone)]
pub struct TimelineReplay<'a> {
    schedule: &'a CpuSchedule,
    time: u32,
    makespan: u32,
}

impl<'a> Iterator for TimelineReplay<'a> {
    type Item = TimelineFrame<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.time >= self.makespan {
            return None;
        }
        let frame = TimelineFrame {
            time: self.time,
            running: self.schedule.running_at(self.time),
        };
        self.time += 1;
        Some(frame)
    }
}

/// Head position after one seek step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadFrame {
    /// Index of the step just taken.
    pub step: usize,
    /// Cylinder the head now rests at.
    pub position: u32,
    /// Whether the step was the wraparound jump.
    pub is_jump: bool,
}

/// Step-by-step iterator over a finished seek plan.
#[derive(Debug, Clone)]
pub struct SeekReplay<'a> {
    plan: &'a SeekPlan,
    step: usize,
}

impl Iterator for SeekReplay<'_> {
    type Item = HeadFrame;

    fn next(&mut self) -> Option<Self::Item> {
        let s = self.plan.steps.get(self.step)?;
        let frame = HeadFrame {
            step: self.step,
            position: s.to,
            is_jump: s.is_jump,
        };
        self.step += 1;
        Some(frame)
    }
}

impl CpuSchedule {
    /// Replays the timeline one tick at a time, from 0 to makespan.
    pub fn replay(&self) -> TimelineReplay<'_> {
        TimelineReplay {
            schedule: self,
            time: 0,
            makespan: self.makespan(),
        }
    }
}

impl SeekPlan {
    /// Replays the head path one step at a time.
    pub fn replay(&self) -> SeekReplay<'_> {
        SeekReplay {
            plan: self,
            step: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::disk::CScanScheduler;
    use crate::models::{DiskWorkload, ProcessRecord};
    use crate::scheduler::PriorityScheduler;

    #[test]
    fn test_timeline_replay_covers_every_tick() {
        let records = vec![
            ProcessRecord::new("P1", 0, 2, 2),
            ProcessRecord::new("P2", 1, 1, 1),
        ];
        let schedule = PriorityScheduler::new().schedule(&records).unwrap();
        let frames: Vec<_> = schedule.replay().collect();

        assert_eq!(frames.len(), schedule.makespan() as usize);
        assert_eq!(frames[0].running, Some("P1"));
        assert_eq!(frames[1].running, Some("P2")); // preemption tick
        assert_eq!(frames[2].running, Some("P1"));
    }

    #[test]
    fn test_timeline_replay_reports_idle_ticks() {
        let records = vec![ProcessRecord::new("P1", 2, 1, 1)];
        let schedule = PriorityScheduler::new().schedule(&records).unwrap();
        let frames: Vec<_> = schedule.replay().collect();

        assert_eq!(frames[0].running, None);
        assert_eq!(frames[1].running, None);
        assert_eq!(frames[2].running, Some("P1"));
    }

    #[test]
    fn test_seek_replay_tracks_head() {
        let workload = DiskWorkload::new(50, 100).with_requests(vec![70, 20]);
        let plan = CScanScheduler::new().plan(&workload).unwrap();
        let frames: Vec<_> = plan.replay().collect();

        // 50→70, 70→99 (end sweep), 99→0 (jump), 0→20.
        let positions: Vec<u32> = frames.iter().map(|f| f.position).collect();
        assert_eq!(positions, vec![70, 99, 0, 20]);
        assert!(frames[2].is_jump);
    }

    #[test]
    fn test_replay_can_be_abandoned() {
        let plan = CScanScheduler::new()
            .plan(&DiskWorkload::new(50, 100).with_requests(vec![70, 20]))
            .unwrap();

        let mut replay = plan.replay();
        assert!(replay.next().is_some());
        drop(replay);

        // The plan is untouched; a fresh replay starts over.
        assert_eq!(plan.replay().count(), plan.step_count());
    }

    #[test]
    fn test_empty_results_replay_nothing() {
        assert_eq!(CpuSchedule::new().replay().count(), 0);
        assert_eq!(SeekPlan::default().replay().count(), 0);
    }
}
