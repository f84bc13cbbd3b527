//! Simulation domain models.
//!
//! Core data types for both engines: inputs are plain records, outputs are
//! append-only step sequences plus derived per-entity metrics.
//!
//! # Engine Mappings
//!
//! | schedsim | CPU engine | Disk engine |
//! |----------|-----------|-------------|
//! | Input | `ProcessRecord` | `DiskWorkload` |
//! | Step | `GanttBlock` | `SeekStep` |
//! | Result | `CpuSchedule` | `SeekPlan` |

mod gantt;
mod process;
mod seek;

pub use gantt::{CpuSchedule, GanttBlock};
pub use process::{ProcessOutcome, ProcessRecord};
pub use seek::{DiskWorkload, SeekPlan, SeekStep};
