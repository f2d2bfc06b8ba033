//! Horizon alignment of an actual series against its forecast.
//!
//! Convention: `predicted[i]` is the forecast for `actual[i + horizon]`. The
//! first `horizon` samples of `actual` therefore have no prediction, and the
//! last `horizon` samples of `predicted` lie beyond the observed range.
//!
//! ```text
//! actual    = [0, 1, 2, 3, 4, 5, 6]
//! horizon   = 3
//! predicted = [3, 4, 5, 6, 7, 8, 9]   // perfect forecast
//! ```

use tracing::debug;

use crate::error::{AlignError, Result};
use crate::series::SeriesInput;

/// An immutable actual/predicted pair with its forecast horizon.
///
/// Construct with [`SeriesAligner::new`]; both invariants (equal lengths and
/// `0 <= horizon <= len`) hold for the lifetime of the value.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesAligner {
    actual: Vec<f64>,
    predicted: Vec<f64>,
    horizon: usize,
}

/// Horizon-compensated view where `actual[i]` and `predicted[i]` refer to the
/// same nominal time point.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CommonView {
    /// `actual[horizon..]`.
    pub actual: Vec<f64>,
    /// `predicted[..len - horizon]`.
    pub predicted: Vec<f64>,
}

impl SeriesAligner {
    /// Flattens both inputs and validates them against each other.
    ///
    /// # Arguments
    ///
    /// * `actual` - Observed series, any nesting of numbers
    /// * `predicted` - Forecast series, same number of values as `actual`
    /// * `horizon` - Steps ahead of its input that each prediction lies
    ///
    /// # Errors
    ///
    /// * [`AlignError::ShapeMismatch`] if the flattened lengths differ, whatever the horizon
    /// * [`AlignError::HorizonRange`] if `horizon < 0` or `horizon > len`
    pub fn new<A, P>(actual: &A, predicted: &P, horizon: i64) -> Result<Self>
    where
        A: SeriesInput + ?Sized,
        P: SeriesInput + ?Sized,
    {
        let actual = actual.flatten();
        let predicted = predicted.flatten();

        if actual.len() != predicted.len() {
            return Err(AlignError::ShapeMismatch {
                actual: actual.len(),
                predicted: predicted.len(),
            });
        }

        let len = actual.len();
        let horizon = usize::try_from(horizon)
            .ok()
            .filter(|h| *h <= len)
            .ok_or(AlignError::HorizonRange { horizon, len })?;

        debug!(len, horizon, "series aligner built");

        Ok(Self {
            actual,
            predicted,
            horizon,
        })
    }

    /// The flattened actual series.
    pub fn actual(&self) -> &[f64] {
        &self.actual
    }

    /// The flattened predicted series.
    pub fn predicted(&self) -> &[f64] {
        &self.predicted
    }

    pub fn horizon(&self) -> usize {
        self.horizon
    }

    /// Number of samples in each series.
    pub fn len(&self) -> usize {
        self.actual.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actual.is_empty()
    }

    /// Returns the samples both series cover, `len - horizon` of each.
    ///
    /// Drops the first `horizon` actual samples (nothing predicts them) and
    /// the last `horizon` predictions (they forecast past the end of
    /// `actual`). With a perfect forecast the two halves are equal.
    pub fn common_points(&self) -> CommonView {
        if self.horizon == 0 {
            return CommonView {
                actual: self.actual.clone(),
                predicted: self.predicted.clone(),
            };
        }

        let n = self.len();
        CommonView {
            actual: self.actual[self.horizon..].to_vec(),
            predicted: self.predicted[..n - self.horizon].to_vec(),
        }
    }
}

impl CommonView {
    pub fn len(&self) -> usize {
        self.actual.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actual.is_empty()
    }

    /// Iterates `(actual, predicted)` pairs for the same time point.
    pub fn pairs(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.actual
            .iter()
            .copied()
            .zip(self.predicted.iter().copied())
    }

    /// True when every prediction equals the value it forecasts.
    #[allow(clippy::float_cmp)]
    pub fn is_exact_match(&self) -> bool {
        self.pairs().all(|(a, p)| a == p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp() -> (Vec<f64>, Vec<f64>) {
        (
            vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
            vec![3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0],
        )
    }

    #[test]
    fn perfect_forecast_common_points_coincide() {
        let (actual, predicted) = ramp();
        let aligner = SeriesAligner::new(&actual, &predicted, 3).expect("valid pair");
        let view = aligner.common_points();
        assert_eq!(view.actual, vec![3.0, 4.0, 5.0, 6.0]);
        assert_eq!(view.predicted, vec![3.0, 4.0, 5.0, 6.0]);
        assert!(view.is_exact_match());
    }

    #[test]
    fn zero_horizon_returns_inputs_unchanged() {
        let (actual, predicted) = ramp();
        let aligner = SeriesAligner::new(&actual, &predicted, 0).expect("valid pair");
        let view = aligner.common_points();
        assert_eq!(view.actual, actual);
        assert_eq!(view.predicted, predicted);
        assert!(!view.is_exact_match());
    }

    #[test]
    fn full_horizon_leaves_nothing_in_common() {
        let (actual, predicted) = ramp();
        let aligner = SeriesAligner::new(&actual, &predicted, 7).expect("horizon == len is valid");
        let view = aligner.common_points();
        assert!(view.is_empty());
        assert!(view.predicted.is_empty());
    }

    #[test]
    fn shape_mismatch_reported_for_any_horizon() {
        let actual = [1.0_f64, 2.0, 3.0, 4.0, 5.0];
        let predicted = [1.0_f64, 2.0, 3.0, 4.0];
        for horizon in [-3, 0, 2, 5, 99] {
            let err = SeriesAligner::new(&actual, &predicted, horizon).unwrap_err();
            assert_eq!(
                err,
                AlignError::ShapeMismatch {
                    actual: 5,
                    predicted: 4
                }
            );
        }
    }

    #[test]
    fn horizon_out_of_range_rejected() {
        let (actual, predicted) = ramp();
        for horizon in [-1, 8] {
            let err = SeriesAligner::new(&actual, &predicted, horizon).unwrap_err();
            assert_eq!(err, AlignError::HorizonRange { horizon, len: 7 });
        }
    }

    #[test]
    fn nested_inputs_are_flattened_before_validation() {
        let actual: Vec<Vec<i32>> = vec![vec![0, 1], vec![2, 3]];
        let predicted = [[1.0_f32, 2.0, 3.0, 4.0]];
        let aligner = SeriesAligner::new(&actual, &predicted, 1).expect("four values each");
        assert_eq!(aligner.actual(), &[0.0, 1.0, 2.0, 3.0]);
        assert_eq!(aligner.predicted(), &[1.0, 2.0, 3.0, 4.0]);
        assert!(aligner.common_points().is_exact_match());
    }

    #[test]
    fn empty_series_with_zero_horizon() {
        let empty: Vec<f64> = Vec::new();
        let aligner = SeriesAligner::new(&empty, &empty, 0).expect("empty pair is valid");
        assert!(aligner.is_empty());
        assert!(aligner.common_points().is_empty());
    }

    #[test]
    fn common_points_is_a_fresh_copy() {
        let (actual, predicted) = ramp();
        let aligner = SeriesAligner::new(&actual, &predicted, 2).expect("valid pair");
        let mut first = aligner.common_points();
        first.actual.clear();
        let second = aligner.common_points();
        assert_eq!(second.len(), 5);
        assert_eq!(aligner.actual(), actual.as_slice());
    }
}
