//! Cross-policy properties checked over seeded random workloads.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use u_ossched::disk::{DiskScheduler, SeekAlgorithm};
use u_ossched::memory::{MemoryScheduler, ReplacementAlgorithm};
use u_ossched::models::{Cylinder, HeadState, SweepDirection};
use u_ossched::workload::{local_references, random_references, random_requests};

const TRIALS: u64 = 200;

fn walk_cost(start: Cylinder, order: &[Cylinder]) -> u64 {
    let mut current = start;
    let mut total = 0;
    for &c in order {
        total += current.abs_diff(c);
        current = c;
    }
    total
}

fn sorted(values: &[Cylinder]) -> Vec<Cylinder> {
    let mut v = values.to_vec();
    v.sort_unstable();
    v
}

#[test]
fn test_fcfs_is_walk_in_input_order() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..TRIALS {
        let head = rng.random_range(0..200);
        let count = rng.random_range(0..30);
        let requests = random_requests(&mut rng, count, 200).unwrap();
        let disk = DiskScheduler::new(200, head, head).unwrap();
        let result = disk.fcfs(&requests);
        assert_eq!(result.total_movement(), walk_cost(head, &requests));
        assert_eq!(result.service_order, requests);
    }
}

#[test]
fn test_seek_orders_are_permutations() {
    let mut rng = StdRng::seed_from_u64(12);
    for _ in 0..TRIALS {
        let current = rng.random_range(0..500);
        let previous = rng.random_range(0..500);
        let count = rng.random_range(0..40);
        let requests = random_requests(&mut rng, count, 500).unwrap();
        let disk = DiskScheduler::new(500, current, previous).unwrap();

        for result in disk.run_all(&requests) {
            assert_eq!(sorted(&result.service_order), sorted(&requests), "{}", result.policy);
            assert_eq!(
                result.total_movement(),
                walk_cost(current, &result.service_order),
                "{}",
                result.policy
            );
            let expected_final = result.service_order.last().copied().unwrap_or(current);
            assert_eq!(result.final_head_position(), expected_final);
        }
    }
}

#[test]
fn test_look_reverses_at_most_once() {
    let mut rng = StdRng::seed_from_u64(13);
    for _ in 0..TRIALS {
        let current = rng.random_range(0..100);
        let previous = rng.random_range(0..100);
        let requests = random_requests(&mut rng, 25, 100).unwrap();
        let disk = DiskScheduler::new(100, current, previous).unwrap();
        let result = disk.run(SeekAlgorithm::Look, &requests);

        let mut path = vec![current];
        path.extend(&result.service_order);
        let reversals = path
            .windows(2)
            .map(|w| (w[1] - w[0]).signum())
            .filter(|&s| s != 0)
            .collect::<Vec<_>>()
            .windows(2)
            .filter(|w| w[0] != w[1])
            .count();
        assert!(reversals <= 1, "{:?}", path);

        // First move follows the head's direction when possible
        let direction = HeadState::new(current, previous).direction();
        let has_upper = requests.iter().any(|&r| r > current);
        if let Some(&first) = result.service_order.first() {
            if direction == SweepDirection::Up && has_upper {
                assert!(first > current);
            } else {
                assert!(first <= current || !requests.iter().any(|&r| r <= current));
            }
        }
    }
}

#[test]
fn test_sstf_never_worse_first_step() {
    let mut rng = StdRng::seed_from_u64(14);
    for _ in 0..TRIALS {
        let head = rng.random_range(0..200);
        let count = rng.random_range(1..20);
        let requests = random_requests(&mut rng, count, 200).unwrap();
        let disk = DiskScheduler::new(200, head, head).unwrap();
        let result = disk.sstf(&requests);
        let nearest = requests.iter().map(|&r| head.abs_diff(r)).min().unwrap();
        assert_eq!(head.abs_diff(result.service_order[0]), nearest);
    }
}

#[test]
fn test_opt_is_optimal() {
    let mut rng = StdRng::seed_from_u64(21);
    for _ in 0..TRIALS {
        let frames = rng.random_range(1..6);
        let length = rng.random_range(0..60);
        let references = random_references(&mut rng, length, 9).unwrap();
        let memory = MemoryScheduler::new(frames).unwrap();

        let opt = memory.opt(&references).fault_count();
        assert!(opt <= memory.fifo(&references).fault_count(), "{:?}", references);
        assert!(opt <= memory.lru(&references).fault_count(), "{:?}", references);
    }
}

#[test]
fn test_opt_is_optimal_with_locality() {
    let mut rng = StdRng::seed_from_u64(22);
    for _ in 0..50 {
        let references = local_references(&mut rng, 200, 30, 4, 0.9).unwrap();
        let memory = MemoryScheduler::new(4).unwrap();
        let opt = memory.run(ReplacementAlgorithm::Opt, &references).fault_count();
        assert!(opt <= memory.run(ReplacementAlgorithm::Lru, &references).fault_count());
        assert!(opt <= memory.run(ReplacementAlgorithm::Fifo, &references).fault_count());
    }
}

#[test]
fn test_lru_and_opt_have_no_anomaly() {
    let mut rng = StdRng::seed_from_u64(23);
    for _ in 0..TRIALS {
        let references = random_references(&mut rng, 40, 7).unwrap();
        for algorithm in [ReplacementAlgorithm::Lru, ReplacementAlgorithm::Opt] {
            let mut previous = usize::MAX;
            for frames in 1..=7 {
                let faults = MemoryScheduler::new(frames)
                    .unwrap()
                    .run(algorithm, &references)
                    .fault_count();
                assert!(faults <= previous, "{} at {} frames", algorithm, frames);
                previous = faults;
            }
        }
    }
}

#[test]
fn test_enough_frames_fault_once_per_page() {
    let mut rng = StdRng::seed_from_u64(24);
    for _ in 0..TRIALS {
        let length = rng.random_range(0..50);
        let references = random_references(&mut rng, length, 10).unwrap();
        let distinct = references.iter().collect::<HashSet<_>>().len();
        let frames = distinct.max(1) as i64 + rng.random_range(0..3);
        let memory = MemoryScheduler::new(frames).unwrap();
        for result in memory.run_all(&references) {
            assert_eq!(result.fault_count(), distinct, "{}", result.policy);
        }
    }
}

#[test]
fn test_results_bounded_and_consistent() {
    let mut rng = StdRng::seed_from_u64(25);
    for _ in 0..TRIALS {
        let frames = rng.random_range(1..5);
        let references = random_references(&mut rng, 30, 8).unwrap();
        let memory = MemoryScheduler::new(frames).unwrap();
        for result in memory.run_all(&references) {
            assert!(result.resident.len() <= frames as usize);
            let unique: HashSet<_> = result.resident.iter().collect();
            assert_eq!(unique.len(), result.resident.len());
            assert_eq!(result.fault_count() + result.hit_count, references.len());
        }
    }
}

#[test]
fn test_belady_anomaly_scenario() {
    let references = [1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5];
    let three = MemoryScheduler::new(3).unwrap();
    let four = MemoryScheduler::new(4).unwrap();
    assert_eq!(three.fifo(&references).fault_count(), 9);
    assert_eq!(four.fifo(&references).fault_count(), 10);
    assert_eq!(three.lru(&references).fault_count(), 10);
}

#[test]
fn test_disk_scenarios() {
    let textbook = [98, 183, 37, 122, 14, 124, 65, 67];
    let disk = DiskScheduler::new(200, 53, 53).unwrap();
    assert_eq!(disk.sstf(&textbook).total_movement(), 236);
    assert_eq!(disk.fcfs(&textbook).total_movement(), 640);

    let disk = DiskScheduler::new(200, 50, 40).unwrap();
    let requests = [55, 30, 70, 10, 90];
    assert_eq!(disk.look(&requests).total_movement(), 120);
    assert_eq!(disk.clook(&requests).total_movement(), 140);
}

#[test]
fn test_capacity_far_beyond_reference_string() {
    let mut rng = StdRng::seed_from_u64(26);
    for frames in [1_000_000_000, i64::MAX] {
        let memory = MemoryScheduler::new(frames).unwrap();
        let references = random_references(&mut rng, 40, 12).unwrap();
        let distinct = references.iter().collect::<HashSet<_>>().len();
        for result in memory.run_all(&references) {
            assert_eq!(result.fault_count(), distinct, "{}", result.policy);
            assert_eq!(result.eviction_count(), 0);
        }
    }
}

#[test]
fn test_extreme_cylinder_addresses() {
    let extremes = [i64::MIN, -1, 0, 1, i64::MAX];
    for &current in &extremes {
        for &previous in &extremes {
            let disk = DiskScheduler::new(200, current, previous).unwrap();
            for result in disk.run_all(&extremes) {
                assert_eq!(sorted(&result.service_order), sorted(&extremes), "{}", result.policy);
                let expected = result
                    .service_order
                    .iter()
                    .scan(current, |at, &c| {
                        let step = at.abs_diff(c);
                        *at = c;
                        Some(step)
                    })
                    .fold(0u64, |total, step| total.saturating_add(step));
                assert_eq!(result.total_movement(), expected, "{}", result.policy);
            }
        }
    }
}
