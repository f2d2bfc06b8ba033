//! Normalization of numeric input into flat one-dimensional series.
//!
//! Anything built from numbers, slices, arrays and vectors (nested to any
//! depth) can be handed to the aligner. Flattening walks the nesting
//! depth-first, so a rectangular `Vec<Vec<f64>>` comes out in row-major order.

use crate::error::{AlignError, Result};

/// Numeric input that can be flattened into a one-dimensional series.
pub trait SeriesInput {
    /// Appends every value of `self` to `out`, in order.
    fn flatten_into(&self, out: &mut Vec<f64>);

    /// Returns the values of `self` as a fresh flat vector.
    fn flatten(&self) -> Vec<f64> {
        let mut out = Vec::new();
        self.flatten_into(&mut out);
        out
    }
}

macro_rules! scalar_input {
    ($($t:ty),*) => {
        $(
            impl SeriesInput for $t {
                fn flatten_into(&self, out: &mut Vec<f64>) {
                    out.push(f64::from(*self));
                }
            }
        )*
    };
}

scalar_input!(f64, f32, i32, u32, i16, u16, i8, u8);

// i64/usize have no lossless `From` into f64.
impl SeriesInput for i64 {
    #[allow(clippy::cast_precision_loss)]
    fn flatten_into(&self, out: &mut Vec<f64>) {
        out.push(*self as f64);
    }
}

impl SeriesInput for usize {
    #[allow(clippy::cast_precision_loss)]
    fn flatten_into(&self, out: &mut Vec<f64>) {
        out.push(*self as f64);
    }
}

impl<T: SeriesInput> SeriesInput for [T] {
    fn flatten_into(&self, out: &mut Vec<f64>) {
        for item in self {
            item.flatten_into(out);
        }
    }
}

impl<T: SeriesInput, const N: usize> SeriesInput for [T; N] {
    fn flatten_into(&self, out: &mut Vec<f64>) {
        self.as_slice().flatten_into(out);
    }
}

impl<T: SeriesInput> SeriesInput for Vec<T> {
    fn flatten_into(&self, out: &mut Vec<f64>) {
        self.as_slice().flatten_into(out);
    }
}

impl<T: SeriesInput + ?Sized> SeriesInput for &T {
    fn flatten_into(&self, out: &mut Vec<f64>) {
        (**self).flatten_into(out);
    }
}

/// Parses a comma and/or whitespace separated list of numbers.
///
/// Empty tokens (e.g. a trailing comma) are skipped.
///
/// # Errors
///
/// Returns [`AlignError::Parse`] for the first token that is not a number.
pub fn parse_series(text: &str) -> Result<Vec<f64>> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token.parse::<f64>().map_err(|_| AlignError::Parse {
                token: token.to_string(),
            })
        })
        .collect()
}
