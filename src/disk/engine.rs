//! Disk head simulation engine.
//!
//! Walks the head across the service order chosen by a [`SeekPolicy`] and
//! accumulates the absolute distance of every move.

use log::{debug, trace};

use super::{CLook, Fcfs, Look, SeekAlgorithm, SeekPolicy, Sstf};
use crate::error::Result;
use crate::models::{Cylinder, DiskConfig, HeadState, SeekResult};
use crate::validation::{first_error, validate_disk_config};

/// Simulates a movable disk head.
///
/// The scheduler holds only its validated configuration. Every run starts
/// from the configured head state and returns an immutable [`SeekResult`];
/// no totals carry over between runs, so calls on one instance are
/// independent and order-insensitive.
///
/// # Example
/// ```
/// use u_ossched::disk::DiskScheduler;
///
/// let disk = DiskScheduler::new(200, 50, 40).unwrap();
/// let requests = [55, 30, 70, 10, 90];
///
/// assert_eq!(disk.look(&requests).total_movement(), 120);
/// assert_eq!(disk.clook(&requests).total_movement(), 140);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiskScheduler {
    cylinders: i64,
    head: HeadState,
}

impl DiskScheduler {
    /// Creates a scheduler.
    ///
    /// # Errors
    /// [`Error::InvalidCylinderCount`](crate::Error::InvalidCylinderCount)
    /// if `cylinders` is not positive.
    pub fn new(cylinders: i64, current: Cylinder, previous: Cylinder) -> Result<Self> {
        Self::from_config(&DiskConfig::new(cylinders).with_head(current, previous))
    }

    /// Creates a scheduler from a configuration value.
    pub fn from_config(config: &DiskConfig) -> Result<Self> {
        first_error(validate_disk_config(config))?;
        Ok(Self {
            cylinders: config.cylinders,
            head: config.head(),
        })
    }

    /// Number of cylinders on the simulated disk.
    pub fn cylinders(&self) -> i64 {
        self.cylinders
    }

    /// Head state every run starts from.
    pub fn head(&self) -> HeadState {
        self.head
    }

    /// First-come, first-served.
    pub fn fcfs(&self, requests: &[Cylinder]) -> SeekResult {
        self.run_policy(&Fcfs, requests)
    }

    /// Shortest seek time first.
    pub fn sstf(&self, requests: &[Cylinder]) -> SeekResult {
        self.run_policy(&Sstf, requests)
    }

    /// LOOK elevator sweep.
    pub fn look(&self, requests: &[Cylinder]) -> SeekResult {
        self.run_policy(&Look, requests)
    }

    /// Circular LOOK sweep.
    pub fn clook(&self, requests: &[Cylinder]) -> SeekResult {
        self.run_policy(&CLook, requests)
    }

    /// Runs a built-in policy selected at runtime.
    pub fn run(&self, algorithm: SeekAlgorithm, requests: &[Cylinder]) -> SeekResult {
        self.run_policy(algorithm.policy(), requests)
    }

    /// Runs every built-in policy on the same requests.
    pub fn run_all(&self, requests: &[Cylinder]) -> Vec<SeekResult> {
        SeekAlgorithm::ALL
            .iter()
            .map(|&algorithm| self.run(algorithm, requests))
            .collect()
    }

    /// Runs any policy, including user-defined ones.
    pub fn run_policy(&self, policy: &dyn SeekPolicy, requests: &[Cylinder]) -> SeekResult {
        let service_order = policy.service_order(&self.head, requests);

        let mut current = self.head.current;
        let mut total_movement: u64 = 0;
        for &request in &service_order {
            let distance = current.abs_diff(request);
            trace!("{}: {} -> {} ({})", policy.name(), current, request, distance);
            total_movement = total_movement.saturating_add(distance);
            current = request;
        }

        debug!(
            "{}: {} requests from cylinder {}, total movement {}",
            policy.name(),
            requests.len(),
            self.head.current,
            total_movement
        );

        SeekResult {
            policy: policy.name().to_string(),
            final_head_position: current,
            total_movement,
            service_order,
        }
    }
}
