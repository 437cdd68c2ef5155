//! Operating-systems scheduling policies for teaching and analysis.
//!
//! Replays a pre-recorded request sequence through a classic policy and
//! reports its aggregate cost. Nothing here touches real hardware: the disk,
//! the frames and the ready queue are all simulated.
//!
//! # Modules
//!
//! - **`disk`**: Head scheduling (FCFS, SSTF, LOOK, C-LOOK) → total head movement
//! - **`memory`**: Page replacement (FIFO, OPT, LRU) → page fault count
//! - **`process`**: CPU scheduling (FCFS, SJF, priority, round-robin) → waiting time
//! - **`models`**: Configuration and result types
//! - **`validation`**: Configuration checks (positive cylinders, frames, quantum)
//! - **`workload`**: Seeded random request and reference sequences
//!
//! # Architecture
//!
//! Engines hold only validated configuration and run through `&self`. Every
//! call returns an immutable result value, so repeated or interleaved calls
//! on one engine never influence each other. Parsing textual input is left
//! to the caller; engines consume integer slices.
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts"
//! - Belady (1966), "A Study of Replacement Algorithms for a Virtual-Storage Computer"

pub mod disk;
pub mod error;
pub mod memory;
pub mod models;
pub mod process;
pub mod validation;
pub mod workload;

pub use error::{Error, Result};
