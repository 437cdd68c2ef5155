//! Least Recently Used replacement.
//!
//! Tracks the position of the most recent reference to every resident page
//! and evicts the page with the oldest one. Positions are unique, so the
//! victim is never ambiguous.
//!
//! # Complexity
//! O(F) per eviction (linear scan of the recency map), O(1) per hit.

use log::trace;
use std::collections::HashMap;
use std::num::NonZeroUsize;

use super::ReplacementPolicy;
use crate::models::{AccessOutcome, PageId, ReplacementResult};

/// LRU replacement policy.
///
/// A stack algorithm: never exhibits Belady's anomaly.
#[derive(Debug, Clone, Copy)]
pub struct Lru;

impl ReplacementPolicy for Lru {
    fn name(&self) -> &'static str {
        "LRU"
    }

    fn simulate(&self, capacity: NonZeroUsize, references: &[PageId]) -> ReplacementResult {
        let capacity = capacity.get();
        // Keys are the resident set; values the last reference position
        let mut last_use: HashMap<PageId, usize> =
            HashMap::with_capacity(capacity.min(references.len()));
        let mut outcomes = Vec::with_capacity(references.len());

        for (i, &page) in references.iter().enumerate() {
            let outcome = if last_use.contains_key(&page) {
                AccessOutcome::Hit
            } else if last_use.len() < capacity {
                AccessOutcome::Admitted
            } else {
                let least_recent = last_use
                    .iter()
                    .min_by_key(|&(_, &position)| position)
                    .map(|(&p, _)| p);
                match least_recent {
                    Some(evicted) => {
                        last_use.remove(&evicted);
                        trace!("LRU: evict {} for {} at {}", evicted, page, i);
                        AccessOutcome::Replaced { evicted }
                    }
                    None => AccessOutcome::Admitted,
                }
            };

            last_use.insert(page, i);
            outcomes.push(outcome);
        }

        // Least recently used first
        let mut resident: Vec<(PageId, usize)> = last_use.into_iter().collect();
        resident.sort_by_key(|&(_, position)| position);
        let resident = resident.into_iter().map(|(page, _)| page).collect();

        ReplacementResult::from_outcomes(self.name(), capacity, outcomes, resident)
    }

    fn description(&self) -> &'static str {
        "Least Recently Used"
    }
}
