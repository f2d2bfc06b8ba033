//! Horizon-aware comparison of an actual series against its forecast.

pub mod align;
pub mod cli;
pub mod error;
pub mod render;
pub mod series;
/// Chart styling and label configuration.
pub mod style;
#[cfg(feature = "tui")]
pub mod tui;

pub use align::{CommonView, SeriesAligner};
pub use error::{AlignError, Result};
pub use render::{Alignment, Axes, Figure, LineSeries, RenderRequest};
pub use series::SeriesInput;
pub use style::{ChartStyle, Labels, LegendCorner, SeriesColor, StyleConfig};
