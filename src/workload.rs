//! Random workload generation.
//!
//! Produces request and reference sequences for experiments such as
//! comparing policies over many inputs or hunting for Belady's anomaly.
//! Generators take any [`rand::Rng`], so a seeded RNG yields a reproducible
//! workload.
//!
//! # Example
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use u_ossched::workload::random_requests;
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let requests = random_requests(&mut rng, 10, 200).unwrap();
//! assert_eq!(requests.len(), 10);
//! assert!(requests.iter().all(|&c| (0..200).contains(&c)));
//! ```

use rand::Rng;

use crate::error::{Error, Result};
use crate::models::{Cylinder, PageId};

/// Generates `count` uniformly distributed cylinder requests in `[0, cylinders)`.
///
/// # Errors
/// [`Error::InvalidCylinderCount`] if `cylinders` is not positive.
pub fn random_requests<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    cylinders: i64,
) -> Result<Vec<Cylinder>> {
    if cylinders <= 0 {
        return Err(Error::InvalidCylinderCount(cylinders));
    }
    Ok((0..count).map(|_| rng.random_range(0..cylinders)).collect())
}

/// Generates a reference string of `length` pages drawn from `0..distinct_pages`.
///
/// # Errors
/// [`Error::InvalidWorkload`] if pages are requested from an empty page set.
pub fn random_references<R: Rng + ?Sized>(
    rng: &mut R,
    length: usize,
    distinct_pages: usize,
) -> Result<Vec<PageId>> {
    if distinct_pages == 0 && length > 0 {
        return Err(Error::InvalidWorkload(format!(
            "cannot draw {length} references from zero pages"
        )));
    }
    Ok((0..length)
        .map(|_| rng.random_range(0..distinct_pages) as PageId)
        .collect())
}

/// Generates a reference string with locality of reference.
///
/// Each reference stays inside a working set of `window` consecutive pages
/// with probability `locality`; otherwise the working set jumps to a random
/// position. Useful to show LRU approaching OPT on realistic traces.
///
/// # Errors
/// [`Error::InvalidWorkload`] if `window` is zero or larger than
/// `distinct_pages`, or `locality` lies outside `0.0..=1.0`.
pub fn local_references<R: Rng + ?Sized>(
    rng: &mut R,
    length: usize,
    distinct_pages: usize,
    window: usize,
    locality: f64,
) -> Result<Vec<PageId>> {
    if window == 0 || window > distinct_pages {
        return Err(Error::InvalidWorkload(format!(
            "window {window} must be in 1..={distinct_pages}"
        )));
    }
    if !(0.0..=1.0).contains(&locality) {
        return Err(Error::InvalidWorkload(format!(
            "locality {locality} must be in 0.0..=1.0"
        )));
    }

    let last_base = distinct_pages - window;
    let mut base = 0;
    let mut references = Vec::with_capacity(length);
    for _ in 0..length {
        if !rng.random_bool(locality) {
            base = rng.random_range(0..=last_base);
        }
        references.push((base + rng.random_range(0..window)) as PageId);
    }
    Ok(references)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_requests_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let requests = random_requests(&mut rng, 500, 200).unwrap();
        assert_eq!(requests.len(), 500);
        assert!(requests.iter().all(|&c| (0..200).contains(&c)));
    }

    #[test]
    fn test_requests_reproducible() {
        let a = random_requests(&mut StdRng::seed_from_u64(1), 20, 1000).unwrap();
        let b = random_requests(&mut StdRng::seed_from_u64(1), 20, 1000).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_requests_invalid_cylinders() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            random_requests(&mut rng, 5, 0),
            Err(Error::InvalidCylinderCount(0))
        );
    }

    #[test]
    fn test_references_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let references = random_references(&mut rng, 300, 8).unwrap();
        assert_eq!(references.len(), 300);
        assert!(references.iter().all(|&p| (0..8).contains(&p)));
    }

    #[test]
    fn test_references_from_empty_page_set() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(random_references(&mut rng, 3, 0).is_err());
        assert_eq!(random_references(&mut rng, 0, 0), Ok(Vec::new()));
    }

    #[test]
    fn test_local_references_window() {
        let mut rng = StdRng::seed_from_u64(9);
        // Full locality never leaves the first window
        let references = local_references(&mut rng, 200, 50, 5, 1.0).unwrap();
        assert!(references.iter().all(|&p| (0..5).contains(&p)));

        let references = local_references(&mut rng, 200, 50, 5, 0.5).unwrap();
        assert!(references.iter().all(|&p| (0..50).contains(&p)));
    }

    #[test]
    fn test_local_references_invalid() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(local_references(&mut rng, 10, 5, 0, 0.9).is_err());
        assert!(local_references(&mut rng, 10, 5, 6, 0.9).is_err());
        assert!(local_references(&mut rng, 10, 5, 2, 1.5).is_err());
    }
}
