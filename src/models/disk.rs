//! Disk head models.
//!
//! A disk is a linear address space of cylinders traversed by a single
//! movable head. Cost is measured as total head travel.

use serde::{Deserialize, Serialize};

/// A cylinder (track) address.
///
/// Addresses are signed so that any integer request can be simulated; the
/// configured cylinder count is informational and never enforced.
pub type Cylinder = i64;

/// Direction of a sweep across the cylinders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SweepDirection {
    /// Toward higher cylinder addresses.
    Up,
    /// Toward lower cylinder addresses.
    Down,
}

impl SweepDirection {
    /// Derives the direction of travel between two head positions.
    ///
    /// A head that moved toward lower addresses keeps going down; a head that
    /// moved up or did not move at all goes up.
    pub fn from_motion(previous: Cylinder, current: Cylinder) -> Self {
        if current < previous {
            SweepDirection::Down
        } else {
            SweepDirection::Up
        }
    }
}

/// Position of the disk head when a simulation starts.
///
/// `previous` is the last serviced cylinder before `current`. It is consulted
/// once, to pick the initial sweep direction, and never updated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadState {
    /// Cylinder under the head.
    pub current: Cylinder,
    /// Cylinder serviced before `current`.
    pub previous: Cylinder,
}

impl HeadState {
    /// Creates a head state.
    pub fn new(current: Cylinder, previous: Cylinder) -> Self {
        Self { current, previous }
    }

    /// Initial sweep direction implied by the last head motion.
    pub fn direction(&self) -> SweepDirection {
        SweepDirection::from_motion(self.previous, self.current)
    }
}

/// Disk scheduler configuration.
///
/// # Example
/// ```
/// use u_ossched::models::DiskConfig;
///
/// let config = DiskConfig::new(200).with_head(50, 40);
/// assert_eq!(config.cylinders, 200);
/// assert_eq!(config.current, 50);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiskConfig {
    /// Number of cylinders on the disk (must be positive).
    pub cylinders: i64,
    /// Initial head position.
    #[serde(default)]
    pub current: Cylinder,
    /// Head position before `current`.
    #[serde(default)]
    pub previous: Cylinder,
}

impl DiskConfig {
    /// Creates a configuration with the head parked at cylinder 0.
    pub fn new(cylinders: i64) -> Self {
        Self {
            cylinders,
            current: 0,
            previous: 0,
        }
    }

    /// Sets the current and previous head positions.
    pub fn with_head(mut self, current: Cylinder, previous: Cylinder) -> Self {
        self.current = current;
        self.previous = previous;
        self
    }

    /// Head state described by this configuration.
    pub fn head(&self) -> HeadState {
        HeadState::new(self.current, self.previous)
    }
}

/// Outcome of one disk scheduling run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeekResult {
    /// Name of the policy that produced this result.
    pub policy: String,
    /// Head position after the last request was serviced.
    pub final_head_position: Cylinder,
    /// Sum of absolute head movements, saturating at `u64::MAX`.
    pub total_movement: u64,
    /// Requests in the order they were serviced.
    pub service_order: Vec<Cylinder>,
}

impl SeekResult {
    /// Total head movement.
    pub fn total_movement(&self) -> u64 {
        self.total_movement
    }

    /// Head position after the run.
    pub fn final_head_position(&self) -> Cylinder {
        self.final_head_position
    }

    /// Number of requests serviced.
    pub fn request_count(&self) -> usize {
        self.service_order.len()
    }

    /// Mean movement per serviced request (0.0 for an empty run).
    pub fn average_seek(&self) -> f64 {
        if self.service_order.is_empty() {
            0.0
        } else {
            self.total_movement as f64 / self.service_order.len() as f64
        }
    }
}
