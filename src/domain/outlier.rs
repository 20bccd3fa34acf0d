//! Annotated rows emitted for each flagged observation.

use serde::Serialize;

/// One flagged observation with its derived sample statistics.
///
/// Field order matches the six-column output row:
/// `instrument_id, timestamp, price, sample_mean, deviation,
/// pct_over_threshold`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutlierRecord {
    pub instrument_id: String,
    pub timestamp: String,
    pub price: f64,
    /// Sample mean rounded to two decimals; identical across every record
    /// derived from the same sample.
    pub sample_mean: f64,
    /// `price - sample_mean`, rounded to two decimals. Taken from the
    /// rounded mean, not the raw one.
    pub deviation: f64,
    /// How far `|deviation|` exceeds the two-sigma threshold, in percent.
    pub pct_over_threshold: f64,
}
