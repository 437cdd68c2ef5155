//! First-In, First-Out replacement.
//!
//! Evicts the page that has been resident the longest, regardless of how
//! recently it was used. Hits do not change the eviction order.
//!
//! # Complexity
//! O(1) per reference (hash set lookup, queue push/pop).

use log::trace;
use std::collections::{HashSet, VecDeque};
use std::num::NonZeroUsize;

use super::ReplacementPolicy;
use crate::models::{AccessOutcome, PageId, ReplacementResult};

/// FIFO replacement policy.
///
/// Subject to Belady's anomaly: adding frames can increase the fault count.
#[derive(Debug, Clone, Copy)]
pub struct Fifo;

impl ReplacementPolicy for Fifo {
    fn name(&self) -> &'static str {
        "FIFO"
    }

    fn simulate(&self, capacity: NonZeroUsize, references: &[PageId]) -> ReplacementResult {
        let capacity = capacity.get();
        // Never more residents than references
        let bound = capacity.min(references.len());
        let mut resident: HashSet<PageId> = HashSet::with_capacity(bound);
        let mut arrivals: VecDeque<PageId> = VecDeque::with_capacity(bound);
        let mut outcomes = Vec::with_capacity(references.len());

        for &page in references {
            if resident.contains(&page) {
                outcomes.push(AccessOutcome::Hit);
                continue;
            }

            let outcome = if resident.len() < capacity {
                AccessOutcome::Admitted
            } else {
                match arrivals.pop_front() {
                    Some(evicted) => {
                        resident.remove(&evicted);
                        trace!("FIFO: evict {} for {}", evicted, page);
                        AccessOutcome::Replaced { evicted }
                    }
                    None => AccessOutcome::Admitted,
                }
            };

            resident.insert(page);
            arrivals.push_back(page);
            outcomes.push(outcome);
        }

        ReplacementResult::from_outcomes(self.name(), capacity, outcomes, arrivals.into())
    }

    fn description(&self) -> &'static str {
        "First-In, First-Out"
    }
}
