//! Builders for domain primitives used across the test suites.

use crate::domain::{Observation, Sample, Series};

/// Observation with synthetic identifiers derived from the row index.
#[must_use]
pub fn obs(index: usize, price: f64) -> Observation {
    Observation {
        instrument_id: "TEST".to_string(),
        timestamp: format!("2024-01-01 00:00:{index:02}"),
        price,
    }
}

/// Series holding one observation per price, in order.
#[must_use]
pub fn series_of(prices: &[f64]) -> Series {
    Series::new(
        prices
            .iter()
            .enumerate()
            .map(|(i, &price)| obs(i, price))
            .collect(),
    )
}

/// Sample holding one observation per price, in order.
#[must_use]
pub fn sample_of(prices: &[f64]) -> Sample {
    Sample::from_observations(
        prices
            .iter()
            .enumerate()
            .map(|(i, &price)| obs(i, price))
            .collect(),
    )
}
