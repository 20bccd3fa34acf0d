//! Two-sigma outlier detection over a sampled window.

use crate::domain::{round2, OutlierRecord, Sample, SampleStats};
use crate::error::DetectError;

/// How many population standard deviations a price must deviate from the
/// sample mean before it is flagged.
const SIGMA_MULTIPLIER: f64 = 2.0;

/// Flag every observation whose price deviates from the sample mean by
/// more than two population standard deviations.
///
/// Records come back in their original sample order, each annotated with
/// the rounded sample mean, the deviation from that rounded mean, and how
/// far the deviation exceeds the threshold in percent. A sample with zero
/// variance (including a singleton sample) has no outliers and
/// short-circuits before any division by the threshold.
///
/// # Errors
///
/// [`DetectError::EmptySample`] when the sample has no observations.
pub fn detect(sample: &Sample) -> Result<Vec<OutlierRecord>, DetectError> {
    let prices: Vec<f64> = sample.prices().collect();
    let stats = SampleStats::of(&prices).ok_or(DetectError::EmptySample)?;

    if stats.std_dev == 0.0 {
        return Ok(Vec::new());
    }

    let threshold = SIGMA_MULTIPLIER * stats.std_dev;
    let sample_mean = round2(stats.mean);

    let records = sample
        .observations()
        .iter()
        .filter(|obs| (obs.price - stats.mean).abs() > threshold)
        .map(|obs| {
            // Deviation is taken from the already-rounded mean, and the
            // percentage from the rounded deviation.
            let deviation = round2(obs.price - sample_mean);
            let pct_over_threshold = round2(100.0 * (deviation.abs() / threshold - 1.0));
            OutlierRecord {
                instrument_id: obs.instrument_id.clone(),
                timestamp: obs.timestamp.clone(),
                price: obs.price,
                sample_mean,
                deviation,
                pct_over_threshold,
            }
        })
        .collect();

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit;

    #[test]
    fn flags_the_single_spike_with_its_statistics() {
        // Nine 10s and one 100: mean 19, population std 27, threshold 54.
        let mut prices = vec![10.0; 9];
        prices.push(100.0);
        let sample = testkit::domain::sample_of(&prices);

        let records = detect(&sample).unwrap();

        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.price, 100.0);
        assert_eq!(record.sample_mean, 19.0);
        assert_eq!(record.deviation, 81.0);
        assert_eq!(record.pct_over_threshold, 50.0);
    }

    #[test]
    fn a_price_exactly_on_the_threshold_is_not_an_outlier() {
        // Four 0s and one 5: mean 1, population std 2. The 5 deviates by
        // exactly 2*std = 4, and the rule is strictly greater-than.
        let sample = testkit::domain::sample_of(&[0.0, 0.0, 0.0, 0.0, 5.0]);

        assert!(detect(&sample).unwrap().is_empty());
    }

    #[test]
    fn zero_variance_sample_yields_no_outliers() {
        let sample = testkit::domain::sample_of(&[5.0; 5]);
        assert!(detect(&sample).unwrap().is_empty());
    }

    #[test]
    fn singleton_sample_yields_no_outliers() {
        let sample = testkit::domain::sample_of(&[123.45]);
        assert!(detect(&sample).unwrap().is_empty());
    }

    #[test]
    fn empty_sample_is_rejected() {
        let sample = testkit::domain::sample_of(&[]);
        assert_eq!(detect(&sample).unwrap_err(), DetectError::EmptySample);
    }
}
