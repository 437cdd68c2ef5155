//! Disk head scheduling.
//!
//! Provides seek-ordering policies (FCFS, SSTF, LOOK, C-LOOK) and a
//! [`DiskScheduler`] that walks the head across the resulting service order
//! and reports total movement.
//!
//! # Usage
//!
//! ```
//! use u_ossched::disk::{DiskScheduler, SeekAlgorithm};
//!
//! let disk = DiskScheduler::new(200, 53, 53).unwrap();
//! let requests = [98, 183, 37, 122, 14, 124, 65, 67];
//!
//! assert_eq!(disk.fcfs(&requests).total_movement(), 640);
//! assert_eq!(disk.run(SeekAlgorithm::Sstf, &requests).total_movement(), 236);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 11.2
//! - Denning (1967), "Effects of Scheduling on File Memory Operations"

mod engine;
pub mod policies;

pub use engine::DiskScheduler;
pub use policies::{CLook, Fcfs, Look, Sstf};

use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};
use std::str::FromStr;

use crate::error::Error;
use crate::models::{Cylinder, HeadState};

/// A policy that decides the order in which pending requests are serviced.
///
/// Policies are pure: the returned order must be a permutation of
/// `requests`, and the engine derives all costs from it.
pub trait SeekPolicy: Send + Sync + Debug {
    /// Policy name (e.g., "SSTF").
    fn name(&self) -> &'static str;

    /// Returns the requests in service order, starting from `head`.
    fn service_order(&self, head: &HeadState, requests: &[Cylinder]) -> Vec<Cylinder>;

    /// Policy description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// Built-in seek policies, selectable at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeekAlgorithm {
    /// First-come, first-served.
    Fcfs,
    /// Shortest seek time first.
    Sstf,
    /// Elevator sweep without wraparound.
    Look,
    /// Circular elevator sweep.
    CLook,
}

impl SeekAlgorithm {
    /// Every built-in policy, in canonical order.
    pub const ALL: [SeekAlgorithm; 4] = [
        SeekAlgorithm::Fcfs,
        SeekAlgorithm::Sstf,
        SeekAlgorithm::Look,
        SeekAlgorithm::CLook,
    ];

    /// The policy implementation for this algorithm.
    pub fn policy(self) -> &'static dyn SeekPolicy {
        match self {
            SeekAlgorithm::Fcfs => &Fcfs,
            SeekAlgorithm::Sstf => &Sstf,
            SeekAlgorithm::Look => &Look,
            SeekAlgorithm::CLook => &CLook,
        }
    }
}

impl fmt::Display for SeekAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.policy().name())
    }
}

impl FromStr for SeekAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fcfs" => Ok(SeekAlgorithm::Fcfs),
            "sstf" => Ok(SeekAlgorithm::Sstf),
            "look" => Ok(SeekAlgorithm::Look),
            "clook" | "c-look" | "c_look" => Ok(SeekAlgorithm::CLook),
            _ => Err(Error::UnknownAlgorithm(s.to_string())),
        }
    }
}
