//! Built-in seek policies.
//!
//! # Categories
//!
//! - **Arrival order**: FCFS
//! - **Greedy**: SSTF
//! - **Sweep**: LOOK, C-LOOK
//!
//! Sweep policies never travel past the outermost pending request, unlike
//! SCAN/C-SCAN which run to the physical end of the disk.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 11.2

use super::SeekPolicy;
use crate::models::{Cylinder, HeadState, SweepDirection};

/// First-Come, First-Served.
///
/// Services requests in arrival order. Fair, but makes no attempt to
/// reduce head travel.
#[derive(Debug, Clone, Copy)]
pub struct Fcfs;

impl SeekPolicy for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn service_order(&self, _head: &HeadState, requests: &[Cylinder]) -> Vec<Cylinder> {
        requests.to_vec()
    }

    fn description(&self) -> &'static str {
        "First-Come, First-Served"
    }
}

/// Shortest Seek Time First.
///
/// Greedy nearest neighbor: always services the pending request closest to
/// the head. Ties go to the request that appears first in the input.
///
/// # Complexity
/// O(n²): one linear scan of the pending requests per serviced request.
#[derive(Debug, Clone, Copy)]
pub struct Sstf;

impl SeekPolicy for Sstf {
    fn name(&self) -> &'static str {
        "SSTF"
    }

    fn service_order(&self, head: &HeadState, requests: &[Cylinder]) -> Vec<Cylinder> {
        let mut visited = vec![false; requests.len()];
        let mut order = Vec::with_capacity(requests.len());
        let mut current = head.current;

        for _ in 0..requests.len() {
            let mut nearest: Option<(usize, u64)> = None;
            for (i, &request) in requests.iter().enumerate() {
                if visited[i] {
                    continue;
                }
                let distance = current.abs_diff(request);
                // Strict comparison keeps the first minimum
                if nearest.map_or(true, |(_, best)| distance < best) {
                    nearest = Some((i, distance));
                }
            }

            let Some((index, _)) = nearest else {
                break;
            };
            visited[index] = true;
            current = requests[index];
            order.push(current);
        }

        order
    }

    fn description(&self) -> &'static str {
        "Shortest Seek Time First"
    }
}

/// LOOK (elevator).
///
/// Sweeps in the direction of the last head motion, servicing every request
/// on that side, then reverses once and services the rest. The direction is
/// derived once from the head state and never re-derived.
///
/// Requests at or below the head form the lower partition; requests strictly
/// above it form the upper one. When nothing lies above the head, every
/// request is in the lower partition and is serviced descending, whatever the
/// initial direction.
#[derive(Debug, Clone, Copy)]
pub struct Look;

impl SeekPolicy for Look {
    fn name(&self) -> &'static str {
        "LOOK"
    }

    fn service_order(&self, head: &HeadState, requests: &[Cylinder]) -> Vec<Cylinder> {
        let sorted = sorted(requests);
        let (lower, upper) = partition(&sorted, head.current);

        match head.direction() {
            SweepDirection::Down => lower.iter().rev().chain(upper).copied().collect(),
            SweepDirection::Up => upper.iter().chain(lower.iter().rev()).copied().collect(),
        }
    }

    fn description(&self) -> &'static str {
        "LOOK elevator sweep"
    }
}

/// Circular LOOK.
///
/// Always sweeps upward: services requests above the head in ascending
/// order, then jumps back to the lowest pending request and continues
/// upward. The jump is charged as ordinary head movement.
#[derive(Debug, Clone, Copy)]
pub struct CLook;

impl SeekPolicy for CLook {
    fn name(&self) -> &'static str {
        "CLOOK"
    }

    fn service_order(&self, head: &HeadState, requests: &[Cylinder]) -> Vec<Cylinder> {
        let sorted = sorted(requests);
        let (lower, upper) = partition(&sorted, head.current);
        upper.iter().chain(lower).copied().collect()
    }

    fn description(&self) -> &'static str {
        "Circular LOOK sweep"
    }
}

fn sorted(requests: &[Cylinder]) -> Vec<Cylinder> {
    let mut sorted = requests.to_vec();
    sorted.sort_unstable();
    sorted
}

/// Splits ascending requests at the first one strictly above `current`.
fn partition(sorted: &[Cylinder], current: Cylinder) -> (&[Cylinder], &[Cylinder]) {
    let split = sorted.partition_point(|&request| request <= current);
    sorted.split_at(split)
}
