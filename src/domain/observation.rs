//! Price observations and the series/sample containers built from them.

use serde::{Deserialize, Serialize};

/// A single price observation read from an exchange feed file.
///
/// `instrument_id` and `timestamp` are opaque pass-through identifiers
/// preserved verbatim into output; only `price` enters the statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub instrument_id: String,
    pub timestamp: String,
    pub price: f64,
}

/// Full ordered observation history for one instrument file.
///
/// Consecutiveness is defined by position in the sequence, not by the
/// timestamp values.
#[derive(Debug, Clone, Default)]
pub struct Series {
    observations: Vec<Observation>,
}

impl Series {
    #[must_use]
    pub fn new(observations: Vec<Observation>) -> Self {
        Self { observations }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Observation] {
        &self.observations
    }
}

/// Fixed-length contiguous sub-sequence of a [`Series`].
///
/// Owns a copy of the windowed observations; the source series is left
/// untouched.
#[derive(Debug, Clone)]
pub struct Sample {
    observations: Vec<Observation>,
}

impl Sample {
    #[must_use]
    pub fn from_observations(observations: Vec<Observation>) -> Self {
        Self { observations }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    #[must_use]
    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    /// Prices in sample order.
    pub fn prices(&self) -> impl Iterator<Item = f64> + '_ {
        self.observations.iter().map(|obs| obs.price)
    }
}
