//! Error types.
//!
//! Every error in this crate is a configuration problem detected before a
//! simulation starts. Once an engine is constructed, its runs are total.

use thiserror::Error;

/// Errors raised while configuring an engine or selecting a policy.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Disk geometry must contain at least one cylinder.
    #[error("cylinder count must be positive, got {0}")]
    InvalidCylinderCount(i64),
    /// The resident set must hold at least one frame.
    #[error("frame capacity must be positive, got {0}")]
    InvalidFrameCapacity(i64),
    /// A process cannot have a negative CPU burst.
    #[error("process '{id}' has negative burst {burst}")]
    InvalidBurst {
        /// Offending process.
        id: String,
        /// Its burst length.
        burst: i64,
    },
    /// Round-robin needs a positive time slice.
    #[error("round-robin quantum must be positive, got {0}")]
    InvalidQuantum(i64),
    /// A generated workload was requested with impossible dimensions.
    #[error("invalid workload: {0}")]
    InvalidWorkload(String),
    /// No policy is registered under the given name.
    #[error("unknown algorithm: {0}")]
    UnknownAlgorithm(String),
}

/// Crate result alias.
pub type Result<T> = std::result::Result<T, Error>;
