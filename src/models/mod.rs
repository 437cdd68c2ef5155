//! Simulation domain models.
//!
//! Plain data types shared by the engines: configuration values accepted by
//! constructors, and the immutable result values returned by every run.
//!
//! # Domain Mappings
//!
//! | u-ossched | Disk | Memory | CPU |
//! |-----------|------|--------|-----|
//! | Request | Cylinder | Page reference | Process |
//! | State | Head position | Resident frames | Ready queue |
//! | Cost | Head movement | Page faults | Waiting time |
//! | Result | `SeekResult` | `ReplacementResult` | `WaitReport` |

mod disk;
mod memory;
mod process;

pub use disk::{Cylinder, DiskConfig, HeadState, SeekResult, SweepDirection};
pub use memory::{AccessOutcome, MemoryConfig, PageId, ReplacementResult};
pub use process::{Process, ProcessConfig, WaitReport};
