//! CPU process models.
//!
//! A process is described only by its next CPU burst and its priority;
//! arrival times are not modelled (every process is ready at t=0).

use serde::{Deserialize, Serialize};

/// A process waiting in the ready queue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Process identifier.
    pub id: String,
    /// Length of the next CPU burst (time units).
    pub burst: i64,
    /// Scheduling priority (lower value = runs first).
    pub priority: i32,
}

impl Process {
    /// Creates a process with priority 0.
    pub fn new(id: impl Into<String>, burst: i64) -> Self {
        Self {
            id: id.into(),
            burst,
            priority: 0,
        }
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }
}

/// Process scheduler configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessConfig {
    /// Round-robin time slice (must be positive).
    pub quantum: i64,
}

impl ProcessConfig {
    /// Default round-robin quantum.
    pub const DEFAULT_QUANTUM: i64 = 4;

    /// Sets the quantum.
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.quantum = quantum;
        self
    }
}

impl Default for ProcessConfig {
    fn default() -> Self {
        Self {
            quantum: Self::DEFAULT_QUANTUM,
        }
    }
}

/// Waiting times produced by one process scheduling run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaitReport {
    /// Name of the policy that produced this report.
    pub policy: String,
    /// Waiting time per process, indexed like the input queue.
    pub waits: Vec<i64>,
    /// Mean waiting time (0.0 for an empty queue).
    pub average_wait: f64,
}

impl WaitReport {
    pub(crate) fn new(policy: &str, waits: Vec<i64>) -> Self {
        let average_wait = if waits.is_empty() {
            0.0
        } else {
            waits.iter().map(|&w| w as f64).sum::<f64>() / waits.len() as f64
        };
        Self {
            policy: policy.to_string(),
            waits,
            average_wait,
        }
    }

    /// Mean waiting time.
    pub fn average_wait(&self) -> f64 {
        self.average_wait
    }

    /// Sum of all waiting times, saturating at `i64::MAX`.
    pub fn total_wait(&self) -> i64 {
        self.waits.iter().fold(0, |total, &w| total.saturating_add(w))
    }
}
