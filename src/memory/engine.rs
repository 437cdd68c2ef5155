//! Page replacement engine.

use log::debug;
use std::num::NonZeroUsize;

use super::{Fifo, Lru, Opt, ReplacementAlgorithm, ReplacementPolicy};
use crate::error::{Error, Result};
use crate::models::{MemoryConfig, PageId, ReplacementResult};
use crate::validation::{first_error, validate_memory_config};

/// Simulates a bounded set of physical frames.
///
/// Holds only the validated frame capacity. Each run builds its own resident
/// set and returns an immutable [`ReplacementResult`]; fault counts never
/// accumulate across runs.
///
/// # Example
/// ```
/// use u_ossched::memory::MemoryScheduler;
///
/// let memory = MemoryScheduler::new(3).unwrap();
/// let references = [1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5];
///
/// let opt = memory.opt(&references);
/// let lru = memory.lru(&references);
/// assert!(opt.fault_count() <= lru.fault_count());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryScheduler {
    frames: NonZeroUsize,
}

impl MemoryScheduler {
    /// Creates an engine with `frames` physical frames.
    ///
    /// # Errors
    /// [`Error::InvalidFrameCapacity`] if `frames` is not positive.
    pub fn new(frames: i64) -> Result<Self> {
        Self::from_config(&MemoryConfig::new(frames))
    }

    /// Creates an engine from a configuration value.
    pub fn from_config(config: &MemoryConfig) -> Result<Self> {
        first_error(validate_memory_config(config))?;
        let frames = usize::try_from(config.frames)
            .ok()
            .and_then(NonZeroUsize::new)
            .ok_or(Error::InvalidFrameCapacity(config.frames))?;
        Ok(Self { frames })
    }

    /// Frame capacity.
    pub fn frames(&self) -> usize {
        self.frames.get()
    }

    /// First-in, first-out replacement.
    pub fn fifo(&self, references: &[PageId]) -> ReplacementResult {
        self.run_policy(&Fifo, references)
    }

    /// Belady's optimal replacement.
    pub fn opt(&self, references: &[PageId]) -> ReplacementResult {
        self.run_policy(&Opt, references)
    }

    /// Least recently used replacement.
    pub fn lru(&self, references: &[PageId]) -> ReplacementResult {
        self.run_policy(&Lru, references)
    }

    /// Runs a built-in policy selected at runtime.
    pub fn run(&self, algorithm: ReplacementAlgorithm, references: &[PageId]) -> ReplacementResult {
        self.run_policy(algorithm.policy(), references)
    }

    /// Runs every built-in policy on the same reference string.
    pub fn run_all(&self, references: &[PageId]) -> Vec<ReplacementResult> {
        ReplacementAlgorithm::ALL
            .iter()
            .map(|&algorithm| self.run(algorithm, references))
            .collect()
    }

    /// Runs any policy, including user-defined ones.
    pub fn run_policy(
        &self,
        policy: &dyn ReplacementPolicy,
        references: &[PageId],
    ) -> ReplacementResult {
        let result = policy.simulate(self.frames, references);
        debug!(
            "{}: {} references, {} frames, {} faults",
            policy.name(),
            references.len(),
            self.frames,
            result.fault_count()
        );
        result
    }
}
