//! Page replacement models.

use serde::{Deserialize, Serialize};

/// A logical page identifier. No range constraint applies.
pub type PageId = i64;

/// Page replacement configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryConfig {
    /// Number of physical frames (must be positive).
    pub frames: i64,
}

impl MemoryConfig {
    /// Creates a configuration with the given frame count.
    pub fn new(frames: i64) -> Self {
        Self { frames }
    }
}

/// What happened on a single page reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccessOutcome {
    /// The page was already resident.
    Hit,
    /// Page fault served by a free frame.
    Admitted,
    /// Page fault that forced `evicted` out of the resident set.
    Replaced {
        /// The page that lost its frame.
        evicted: PageId,
    },
}

impl AccessOutcome {
    /// Whether this access was a page fault.
    pub fn is_fault(&self) -> bool {
        !matches!(self, AccessOutcome::Hit)
    }
}

/// Outcome of one page replacement run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplacementResult {
    /// Name of the policy that produced this result.
    pub policy: String,
    /// Frame capacity the run used.
    pub capacity: usize,
    /// Number of page faults.
    pub fault_count: usize,
    /// Number of hits.
    pub hit_count: usize,
    /// Outcome of each reference, in reference order.
    pub outcomes: Vec<AccessOutcome>,
    /// Pages resident when the run ended.
    pub resident: Vec<PageId>,
}

impl ReplacementResult {
    /// Builds a result from per-reference outcomes.
    pub(crate) fn from_outcomes(
        policy: &str,
        capacity: usize,
        outcomes: Vec<AccessOutcome>,
        resident: Vec<PageId>,
    ) -> Self {
        let fault_count = outcomes.iter().filter(|o| o.is_fault()).count();
        Self {
            policy: policy.to_string(),
            capacity,
            fault_count,
            hit_count: outcomes.len() - fault_count,
            outcomes,
            resident,
        }
    }

    /// Number of page faults.
    pub fn fault_count(&self) -> usize {
        self.fault_count
    }

    /// Number of references processed.
    pub fn reference_count(&self) -> usize {
        self.outcomes.len()
    }

    /// Number of faults that evicted a resident page.
    pub fn eviction_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, AccessOutcome::Replaced { .. }))
            .count()
    }

    /// Pages evicted during the run, in eviction order.
    pub fn evicted_pages(&self) -> Vec<PageId> {
        self.outcomes
            .iter()
            .filter_map(|o| match o {
                AccessOutcome::Replaced { evicted } => Some(*evicted),
                _ => None,
            })
            .collect()
    }

    /// Fraction of references that hit (0.0 for an empty run).
    pub fn hit_ratio(&self) -> f64 {
        if self.outcomes.is_empty() {
            0.0
        } else {
            self.hit_count as f64 / self.outcomes.len() as f64
        }
    }
}
