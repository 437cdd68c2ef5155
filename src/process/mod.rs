//! CPU process scheduling.
//!
//! Computes per-process and average waiting times of a ready queue under
//! FCFS, SJF, priority and round-robin scheduling. All processes are ready
//! at t=0 and run their next CPU burst only; no I/O or arrivals are modelled.
//!
//! This module is independent of the disk and page engines.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.3

mod scheduler;

pub use scheduler::ProcessScheduler;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Built-in CPU scheduling policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessAlgorithm {
    /// First-come, first-served.
    Fcfs,
    /// Shortest job first (non-preemptive).
    Sjf,
    /// Lowest priority value first (non-preemptive).
    Priority,
    /// Round-robin with a fixed quantum.
    RoundRobin,
}

impl ProcessAlgorithm {
    /// Every built-in policy, in canonical order.
    pub const ALL: [ProcessAlgorithm; 4] = [
        ProcessAlgorithm::Fcfs,
        ProcessAlgorithm::Sjf,
        ProcessAlgorithm::Priority,
        ProcessAlgorithm::RoundRobin,
    ];

    /// Short policy name.
    pub fn name(self) -> &'static str {
        match self {
            ProcessAlgorithm::Fcfs => "FCFS",
            ProcessAlgorithm::Sjf => "SJF",
            ProcessAlgorithm::Priority => "PRIORITY",
            ProcessAlgorithm::RoundRobin => "RR",
        }
    }
}

impl fmt::Display for ProcessAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ProcessAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fcfs" => Ok(ProcessAlgorithm::Fcfs),
            "sjf" => Ok(ProcessAlgorithm::Sjf),
            "priority" => Ok(ProcessAlgorithm::Priority),
            "rr" | "round-robin" | "round_robin" => Ok(ProcessAlgorithm::RoundRobin),
            _ => Err(Error::UnknownAlgorithm(s.to_string())),
        }
    }
}
