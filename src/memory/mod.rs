//! Page replacement.
//!
//! Provides replacement policies (FIFO, OPT, LRU) and a
//! [`MemoryScheduler`] that runs them over a page reference string with a
//! fixed number of frames.
//!
//! # Usage
//!
//! ```
//! use u_ossched::memory::{MemoryScheduler, ReplacementAlgorithm};
//!
//! let references = [1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5];
//!
//! let three = MemoryScheduler::new(3).unwrap();
//! let four = MemoryScheduler::new(4).unwrap();
//!
//! // Belady's anomaly: more frames, more FIFO faults
//! assert_eq!(three.fifo(&references).fault_count(), 9);
//! assert_eq!(four.fifo(&references).fault_count(), 10);
//! assert_eq!(three.run(ReplacementAlgorithm::Lru, &references).fault_count(), 10);
//! ```
//!
//! # References
//!
//! - Belady (1966), "A Study of Replacement Algorithms for a Virtual-Storage Computer"
//! - Belady, Nelson & Shedler (1969), "An Anomaly in Space-Time Characteristics
//!   of Certain Programs Running in a Paging Machine"

mod engine;
mod fifo;
mod lru;
mod opt;

pub use engine::MemoryScheduler;
pub use fifo::Fifo;
pub use lru::Lru;
pub use opt::Opt;

use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};
use std::num::NonZeroUsize;
use std::str::FromStr;

use crate::error::Error;
use crate::models::{PageId, ReplacementResult};

/// A page replacement policy.
///
/// Implementations simulate a whole reference string in one pass. All
/// bookkeeping (queues, resident sets, recency maps) lives inside one call.
pub trait ReplacementPolicy: Send + Sync + Debug {
    /// Policy name (e.g., "LRU").
    fn name(&self) -> &'static str;

    /// Runs the reference string through `capacity` frames.
    fn simulate(&self, capacity: NonZeroUsize, references: &[PageId]) -> ReplacementResult;

    /// Policy description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// Built-in replacement policies, selectable at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplacementAlgorithm {
    /// First-in, first-out.
    Fifo,
    /// Belady's optimal replacement.
    Opt,
    /// Least recently used.
    Lru,
}

impl ReplacementAlgorithm {
    /// Every built-in policy, in canonical order.
    pub const ALL: [ReplacementAlgorithm; 3] = [
        ReplacementAlgorithm::Fifo,
        ReplacementAlgorithm::Opt,
        ReplacementAlgorithm::Lru,
    ];

    /// The policy implementation for this algorithm.
    pub fn policy(self) -> &'static dyn ReplacementPolicy {
        match self {
            ReplacementAlgorithm::Fifo => &Fifo,
            ReplacementAlgorithm::Opt => &Opt,
            ReplacementAlgorithm::Lru => &Lru,
        }
    }
}

impl fmt::Display for ReplacementAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.policy().name())
    }
}

impl FromStr for ReplacementAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fifo" => Ok(ReplacementAlgorithm::Fifo),
            "opt" | "optimal" | "belady" => Ok(ReplacementAlgorithm::Opt),
            "lru" => Ok(ReplacementAlgorithm::Lru),
            _ => Err(Error::UnknownAlgorithm(s.to_string())),
        }
    }
}
