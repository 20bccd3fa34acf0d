//! Integration tests for random window sampling.

use std::collections::HashSet;

use sigmascan::error::SampleError;
use sigmascan::sampler::sample_window;
use sigmascan::testkit;

#[test]
fn every_draw_is_a_contiguous_window_within_bounds() {
    // Strictly increasing prices so the window contents expose the start
    // index that was drawn.
    let prices: Vec<f64> = (0..100).map(|i| i as f64).collect();
    let series = testkit::domain::series_of(&prices);
    let mut rng = testkit::seeded_rng(42);

    for _ in 0..500 {
        let sample = sample_window(&series, 30, &mut rng).unwrap();
        assert_eq!(sample.len(), 30);

        let start = sample.observations()[0].price as usize;
        assert!(start <= 70, "start {start} exceeds len - window");
        for (offset, obs) in sample.observations().iter().enumerate() {
            assert_eq!(obs.price, (start + offset) as f64);
        }
    }
}

#[test]
fn draws_cover_the_whole_start_range() {
    let prices: Vec<f64> = (0..40).map(|i| i as f64).collect();
    let series = testkit::domain::series_of(&prices);
    let mut rng = testkit::seeded_rng(7);

    let mut seen = HashSet::new();
    for _ in 0..2000 {
        let sample = sample_window(&series, 30, &mut rng).unwrap();
        seen.insert(sample.observations()[0].price as usize);
    }

    // Eleven possible starts; 2000 seeded draws reach every one.
    assert_eq!(seen, (0..=10).collect::<HashSet<_>>());
}

#[test]
fn a_series_shorter_than_the_window_is_insufficient() {
    let series = testkit::domain::series_of(&vec![1.0; 29]);
    let mut rng = testkit::seeded_rng(1);

    assert_eq!(
        sample_window(&series, 30, &mut rng).unwrap_err(),
        SampleError::InsufficientData {
            len: 29,
            window: 30
        }
    );
}

#[test]
fn an_empty_series_is_its_own_failure() {
    let series = testkit::domain::series_of(&[]);
    let mut rng = testkit::seeded_rng(1);

    assert_eq!(
        sample_window(&series, 30, &mut rng).unwrap_err(),
        SampleError::EmptySeries
    );
}

#[test]
fn the_source_series_is_left_untouched() {
    let prices: Vec<f64> = (0..50).map(|i| i as f64).collect();
    let series = testkit::domain::series_of(&prices);
    let before = series.as_slice().to_vec();
    let mut rng = testkit::seeded_rng(3);

    let _ = sample_window(&series, 30, &mut rng).unwrap();

    assert_eq!(series.as_slice(), &before[..]);
}
