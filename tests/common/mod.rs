//! Shared test fixtures for integration tests.

#![allow(dead_code)]

use forecast_compare::SeriesAligner;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Seed shared by all randomized tests.
pub const SEED: u64 = 42;

/// Number of random cases per property.
pub const CASES: usize = 200;

/// The worked example: a perfect forecast three steps ahead.
///
/// Returns `(actual, predicted)` where `predicted[i] == actual[i + 3]`
/// wherever both exist.
pub fn ramp_pair() -> (Vec<f64>, Vec<f64>) {
    let actual = (0..7).map(f64::from).collect();
    let predicted = (3..10).map(f64::from).collect();
    (actual, predicted)
}

/// Aligner over [`ramp_pair`] with the given horizon.
pub fn ramp_aligner(horizon: i64) -> SeriesAligner {
    let (actual, predicted) = ramp_pair();
    SeriesAligner::new(&actual, &predicted, horizon).expect("ramp pair is valid")
}

/// Seeded RNG for reproducible property checks.
pub fn rng() -> StdRng {
    StdRng::seed_from_u64(SEED)
}

/// Random series of `len` values in `[-100, 100)`.
pub fn random_series(rng: &mut StdRng, len: usize) -> Vec<f64> {
    (0..len).map(|_| rng.random_range(-100.0..100.0)).collect()
}

/// Builds a prediction that forecasts `actual` perfectly `horizon` steps ahead.
///
/// The last `horizon` values lie beyond the observed range and are filled
/// with arbitrary noise.
pub fn shifted_forecast(rng: &mut StdRng, actual: &[f64], horizon: usize) -> Vec<f64> {
    let mut predicted: Vec<f64> = actual[horizon..].to_vec();
    predicted.extend((0..horizon).map(|_| rng.random_range(1000.0..2000.0)));
    predicted
}
