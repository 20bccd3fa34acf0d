//! Population statistics over a sample of prices.

/// Mean and population standard deviation of one sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleStats {
    pub mean: f64,
    pub std_dev: f64,
}

impl SampleStats {
    /// Compute over a price slice. Returns `None` for an empty slice.
    ///
    /// The variance divisor is `n`, not `n - 1`: these are population
    /// statistics over the whole sample, not an estimator.
    #[must_use]
    pub fn of(prices: &[f64]) -> Option<Self> {
        if prices.is_empty() {
            return None;
        }
        let n = prices.len() as f64;
        let mean = prices.iter().sum::<f64>() / n;
        let variance = prices.iter().map(|p| (p - mean).powi(2)).sum::<f64>() / n;
        Some(Self {
            mean,
            std_dev: variance.sqrt(),
        })
    }
}

/// Round to two decimal places, half away from zero.
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn population_divisor_is_n() {
        // Nine 10s and one 100: mean 19, variance (9*81 + 81*81)/10 = 729.
        let mut prices = vec![10.0; 9];
        prices.push(100.0);
        let stats = SampleStats::of(&prices).unwrap();
        assert_eq!(stats.mean, 19.0);
        assert_eq!(stats.std_dev, 27.0);
    }

    #[test]
    fn empty_slice_has_no_stats() {
        assert!(SampleStats::of(&[]).is_none());
    }

    #[test]
    fn singleton_has_zero_std_dev() {
        let stats = SampleStats::of(&[42.5]).unwrap();
        assert_eq!(stats.mean, 42.5);
        assert_eq!(stats.std_dev, 0.0);
    }

    #[test]
    fn round2_rounds_half_away_from_zero() {
        assert_eq!(round2(19.005000001), 19.01);
        assert_eq!(round2(-19.005000001), -19.01);
        assert_eq!(round2(81.0), 81.0);
        assert_eq!(round2(50.004), 50.0);
    }
}
