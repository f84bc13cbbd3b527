//! Discrete-event simulation engines for classic OS scheduling.
//!
//! Two independent, stateless computation engines: preemptive priority CPU
//! scheduling and circular-SCAN (C-SCAN) disk seek planning. Both are pure
//! functions of their inputs — no hidden state, fully reproducible — and
//! return complete result sets synchronously. Presentation concerns
//! (rendering, pacing, input forms) live outside this crate; [`replay`]
//! offers lazy iteration over finished results for consumers that reveal
//! them incrementally.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `ProcessRecord`, `GanttBlock`,
//!   `CpuSchedule`, `DiskWorkload`, `SeekStep`, `SeekPlan`
//! - **`scheduler`**: Preemptive priority CPU engine and run metrics
//! - **`disk`**: C-SCAN seek engine
//! - **`validation`**: Caller-side input boundary (collect-all checks,
//!   free-text queue parsing with silent filtering)
//! - **`replay`**: Lazy tick-by-tick / step-by-step replay of results
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts"
//! - Tanenbaum & Bos (2015), "Modern Operating Systems"

mod error;

pub mod disk;
pub mod models;
pub mod replay;
pub mod scheduler;
pub mod validation;

pub use error::SimError;
