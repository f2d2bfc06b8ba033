//! Error types for series alignment.

/// Errors raised while building an aligner or parsing series input.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum AlignError {
    /// Actual and predicted series differ in length after flattening.
    #[error("actual and predicted should have same length (actual={actual}, predicted={predicted})")]
    ShapeMismatch { actual: usize, predicted: usize },

    /// Horizon lies outside `[0, len]`.
    #[error("horizon must be in range: [0, {len}], got {horizon}")]
    HorizonRange { horizon: i64, len: usize },

    /// A token in a textual series is not a number.
    #[error("invalid number in series: \"{token}\"")]
    Parse { token: String },
}

pub type Result<T> = std::result::Result<T, AlignError>;
