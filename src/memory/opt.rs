//! Belady's optimal replacement (OPT / MIN).
//!
//! On a fault with every frame occupied, evicts the resident page whose next
//! reference lies farthest in the future. A page that is never referenced
//! again is evicted immediately. OPT needs the whole reference string up
//! front, so it is a yardstick for online policies rather than something an
//! operating system can run.
//!
//! # Algorithm
//!
//! For each fault at position `i` with full frames:
//! 1. Scan the resident frames in slot order.
//! 2. For each page, find its first occurrence in `references[i + 1..]`.
//! 3. The first page with no occurrence is the victim.
//! 4. Otherwise the victim is the page with the largest next occurrence
//!    (first one wins on equal distance).
//! 5. The incoming page takes over the victim's slot.
//!
//! # Complexity
//! O(F·n) per eviction for F frames and n references, O(F·n²) overall.
//! Teaching-scale inputs keep the naive lookahead cheap enough.
//!
//! # Reference
//! Belady (1966), "A Study of Replacement Algorithms for a Virtual-Storage Computer"

use log::trace;
use std::num::NonZeroUsize;

use super::ReplacementPolicy;
use crate::models::{AccessOutcome, PageId, ReplacementResult};

/// Optimal (clairvoyant) replacement policy.
///
/// No policy produces fewer faults on the same reference string and
/// capacity.
#[derive(Debug, Clone, Copy)]
pub struct Opt;

impl ReplacementPolicy for Opt {
    fn name(&self) -> &'static str {
        "OPT"
    }

    fn simulate(&self, capacity: NonZeroUsize, references: &[PageId]) -> ReplacementResult {
        let capacity = capacity.get();
        let mut frames: Vec<PageId> = Vec::with_capacity(capacity.min(references.len()));
        let mut outcomes = Vec::with_capacity(references.len());

        for (i, &page) in references.iter().enumerate() {
            if frames.contains(&page) {
                outcomes.push(AccessOutcome::Hit);
                continue;
            }

            if frames.len() < capacity {
                frames.push(page);
                outcomes.push(AccessOutcome::Admitted);
                continue;
            }

            let slot = victim_slot(&frames, &references[i + 1..]);
            let evicted = std::mem::replace(&mut frames[slot], page);
            trace!("OPT: evict {} for {} at {}", evicted, page, i);
            outcomes.push(AccessOutcome::Replaced { evicted });
        }

        ReplacementResult::from_outcomes(self.name(), capacity, outcomes, frames)
    }

    fn description(&self) -> &'static str {
        "Belady's optimal replacement"
    }
}

/// Picks the frame slot whose page is needed farthest in the future.
fn victim_slot(frames: &[PageId], future: &[PageId]) -> usize {
    let mut victim = 0;
    let mut farthest: Option<usize> = None;

    for (slot, &page) in frames.iter().enumerate() {
        match future.iter().position(|&p| p == page) {
            // Never used again
            None => return slot,
            Some(next) => {
                if farthest.map_or(true, |f| next > f) {
                    farthest = Some(next);
                    victim = slot;
                }
            }
        }
    }

    victim
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frames(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn test_textbook_string() {
        let references = [7, 0, 1, 2, 0, 3, 0, 4, 2, 3, 0, 3, 2, 1, 2, 0, 1, 7, 0, 1];
        assert_eq!(Opt.simulate(frames(3), &references).fault_count(), 9);
    }

    #[test]
    fn test_belady_string() {
        let references = [1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5];
        let result = Opt.simulate(frames(3), &references);
        assert_eq!(result.fault_count(), 7);
        assert_eq!(result.hit_count, 5);
        assert_eq!(result.evicted_pages(), vec![3, 4, 1, 3]);
    }

    #[test]
    fn test_victim_farthest_next_use() {
        // 1 next at 2, 2 next at 0, 3 next at 1
        assert_eq!(victim_slot(&[1, 2, 3], &[2, 3, 1]), 0);
        assert_eq!(victim_slot(&[2, 3, 1], &[2, 3, 1]), 2);
    }

    #[test]
    fn test_victim_never_used_again() {
        // 3 is never used again; the first such page wins
        assert_eq!(victim_slot(&[1, 3, 4], &[1, 1]), 1);
        assert_eq!(victim_slot(&[1, 2], &[]), 0);
    }

    #[test]
    fn test_slot_reuse() {
        let result = Opt.simulate(frames(2), &[1, 2, 3, 1]);
        // 2 never returns; 3 takes its slot
        assert_eq!(result.resident, vec![1, 3]);
        assert_eq!(result.fault_count(), 3);
    }

    #[test]
    fn test_capacity_beyond_references() {
        let result = Opt.simulate(frames(usize::MAX), &[1, 2, 1]);
        assert_eq!(result.fault_count(), 2);
        assert_eq!(result.capacity, usize::MAX);
    }

    #[test]
    fn test_no_eviction_when_capacity_suffices() {
        let result = Opt.simulate(frames(5), &[1, 2, 1, 3, 2, 3]);
        assert_eq!(result.fault_count(), 3);
        assert_eq!(result.eviction_count(), 0);
    }
}
