//! Disk seek engine.
//!
//! [`CScanScheduler`] plans head movement under the circular-SCAN policy:
//! service in the increasing direction only, sweep to the last cylinder,
//! then wrap back to 0 before servicing the remainder.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 11

mod cscan;

pub use cscan::CScanScheduler;
