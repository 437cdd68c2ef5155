//! Configuration validation.
//!
//! Checks engine configuration before any request is processed. Detects:
//! - Non-positive cylinder counts
//! - Non-positive frame capacities
//! - Non-positive round-robin quanta
//! - Negative CPU bursts
//!
//! Request sequences themselves are never validated here: any integer is a
//! legal cylinder or page, and malformed text is rejected upstream by the
//! parser that produced the sequence.

use crate::error::Error;
use crate::models::{DiskConfig, MemoryConfig, Process, ProcessConfig};

/// Validation result: every detected problem, or `Ok(())`.
pub type ValidationResult = Result<(), Vec<Error>>;

/// Validates a disk scheduler configuration.
///
/// The head positions are not checked against the cylinder count: the range
/// is informational only.
pub fn validate_disk_config(config: &DiskConfig) -> ValidationResult {
    let mut errors = Vec::new();

    if config.cylinders <= 0 {
        errors.push(Error::InvalidCylinderCount(config.cylinders));
    }

    finish(errors)
}

/// Validates a page replacement configuration.
pub fn validate_memory_config(config: &MemoryConfig) -> ValidationResult {
    let mut errors = Vec::new();

    if config.frames <= 0 {
        errors.push(Error::InvalidFrameCapacity(config.frames));
    }

    finish(errors)
}

/// Validates a process scheduler configuration.
pub fn validate_process_config(config: &ProcessConfig) -> ValidationResult {
    let mut errors = Vec::new();

    if config.quantum <= 0 {
        errors.push(Error::InvalidQuantum(config.quantum));
    }

    finish(errors)
}

/// Validates a ready queue: every burst must be non-negative.
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    let errors = processes
        .iter()
        .filter(|p| p.burst < 0)
        .map(|p| Error::InvalidBurst {
            id: p.id.clone(),
            burst: p.burst,
        })
        .collect();

    finish(errors)
}

/// Validates a whole simulation setup at once, collecting every problem.
pub fn validate_all(
    disk: &DiskConfig,
    memory: &MemoryConfig,
    process: &ProcessConfig,
) -> ValidationResult {
    let mut errors = Vec::new();
    for result in [
        validate_disk_config(disk),
        validate_memory_config(memory),
        validate_process_config(process),
    ] {
        if let Err(mut errs) = result {
            errors.append(&mut errs);
        }
    }
    finish(errors)
}

/// Collapses a collected list into the first error, for fail-fast callers.
pub(crate) fn first_error(result: ValidationResult) -> crate::Result<()> {
    match result {
        Ok(()) => Ok(()),
        Err(mut errors) => Err(errors.swap_remove(0)),
    }
}

fn finish(errors: Vec<Error>) -> ValidationResult {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
