//! Core domain types: price observations and outlier annotation.

mod observation;
mod outlier;
mod stats;

pub use observation::{Observation, Sample, Series};
pub use outlier::OutlierRecord;
pub use stats::{round2, SampleStats};
