//! Random contiguous window selection over a price series.

use rand::Rng;

use crate::domain::{Sample, Series};
use crate::error::SampleError;

/// Draw one uniformly random contiguous window of `window` observations.
///
/// Every valid start position in `[0, len - window]` is equally likely,
/// so every window of that size has the same chance of selection. The
/// random source is supplied by the caller: production code passes
/// [`rand::thread_rng`], tests a seeded [`rand::rngs::StdRng`].
///
/// # Errors
///
/// - [`SampleError::EmptySeries`] when the series has no observations.
/// - [`SampleError::InsufficientData`] when the series is shorter than
///   the requested window.
pub fn sample_window<R: Rng + ?Sized>(
    series: &Series,
    window: usize,
    rng: &mut R,
) -> Result<Sample, SampleError> {
    if series.is_empty() {
        return Err(SampleError::EmptySeries);
    }
    let len = series.len();
    if len < window {
        return Err(SampleError::InsufficientData { len, window });
    }

    let start = rng.gen_range(0..=len - window);
    Ok(Sample::from_observations(
        series.as_slice()[start..start + window].to_vec(),
    ))
}
