//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`domain`] — Builders for observations, series, and samples.
//! - [`fs`] — On-disk price files and per-exchange input trees.

pub mod domain;
pub mod fs;

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Deterministic RNG for window-sampling tests.
#[must_use]
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
