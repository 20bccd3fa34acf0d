//! Sigmascan - batch stock-price outlier detection.
//!
//! Scans a directory tree of per-instrument price files (one file per
//! ticker, grouped into per-exchange folders), draws one random
//! contiguous window of observations from each file, and flags the
//! prices that deviate from the window mean by more than two population
//! standard deviations. Every processed input file yields one annotated
//! result file under a timestamp-named output root.
//!
//! # Modules
//!
//! - [`config`] - Configuration loading from TOML files
//! - [`domain`] - Observation, series, sample, and outlier-record types
//! - [`sampler`] - Random contiguous window selection over a series
//! - [`detector`] - Two-sigma outlier detection over a sample
//! - [`feed`] - Delimited price-file reading and result writing
//! - [`app`] - Batch orchestration across exchange folders
//! - [`cli`] - Command-line surface
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use sigmascan::domain::{Observation, Series};
//! use sigmascan::{detector, sampler};
//!
//! let series = Series::new(
//!     (0..60)
//!         .map(|i| Observation {
//!             instrument_id: "ACME".into(),
//!             timestamp: format!("2024-01-01 00:{i:02}:00"),
//!             price: 100.0,
//!         })
//!         .collect(),
//! );
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(7);
//! let sample = sampler::sample_window(&series, 30, &mut rng)?;
//! let outliers = detector::detect(&sample)?;
//! assert!(outliers.is_empty());
//! # Ok::<(), sigmascan::error::Error>(())
//! ```

pub mod app;
pub mod cli;
pub mod config;
pub mod detector;
pub mod domain;
pub mod error;
pub mod feed;
pub mod sampler;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
