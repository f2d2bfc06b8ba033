//! Chart construction for an aligned actual/predicted pair.
//!
//! Rendering produces a [`Figure`]: a backend-agnostic description of one
//! set of axes holding both line series. Drawing it is left to a plotting
//! backend (see the `tui` feature); nothing here writes files or opens a
//! display.

use tracing::debug;

use crate::align::SeriesAligner;
use crate::style::{ChartStyle, Labels, LegendCorner, SeriesColor};

/// Temporal placement of the predicted series relative to the actual one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    /// Predictions sit at the time point they forecast (`x + horizon`).
    #[default]
    TimeAligned,
    /// Predictions sit over the inputs they were computed from. A naive
    /// "repeat the last value" forecaster coincides with the actual curve.
    Overlap,
}

impl Alignment {
    pub fn from_overlap(overlap: bool) -> Self {
        if overlap {
            Self::Overlap
        } else {
            Self::TimeAligned
        }
    }

    /// Title used when the request does not set one.
    pub fn default_title(self) -> &'static str {
        match self {
            Self::TimeAligned => "Predictions vs actual",
            Self::Overlap => "Prediction skewed to check naive forecast",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Self::TimeAligned => Self::Overlap,
            Self::Overlap => Self::TimeAligned,
        }
    }
}

/// Display parameters for a single render call.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RenderRequest {
    /// First index of the original series to display.
    pub begin: usize,
    /// One past the last index to display; `None` means the full length.
    pub end: Option<usize>,
    pub alignment: Alignment,
    pub labels: Labels,
    /// Overrides the alignment's default title when set and non-empty.
    pub title: Option<String>,
    /// Appended to whichever title is used.
    pub title_suffix: String,
}

impl RenderRequest {
    pub fn range(mut self, begin: usize, end: Option<usize>) -> Self {
        self.begin = begin;
        self.end = end;
        self
    }

    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn overlap(self, overlap: bool) -> Self {
        self.alignment(Alignment::from_overlap(overlap))
    }

    pub fn labels(mut self, labels: Labels) -> Self {
        self.labels = labels;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn title_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.title_suffix = suffix.into();
        self
    }

    /// Resolves the final title: explicit title or mode default, plus suffix.
    pub fn resolved_title(&self) -> String {
        let base = self
            .title
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or(self.alignment.default_title());
        format!("{base}{}", self.title_suffix)
    }
}

/// One labeled line on the axes.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSeries {
    pub label: String,
    pub color: SeriesColor,
    /// `(x, y)` points in drawing order.
    pub points: Vec<(f64, f64)>,
}

impl LineSeries {
    /// Horizontal extent of the series, `None` when it has no points.
    pub fn x_range(&self) -> Option<(f64, f64)> {
        let first = self.points.first()?.0;
        let last = self.points.last()?.0;
        Some((first, last))
    }
}

/// A single set of axes with both series plotted on it.
#[derive(Debug, Clone, PartialEq)]
pub struct Axes {
    pub x_label: String,
    pub y_label: String,
    pub grid: bool,
    pub legend_position: LegendCorner,
    /// Actual series first, predicted second.
    pub series: Vec<LineSeries>,
}

impl Axes {
    /// Horizontal bounds spanning every series, at least one unit wide.
    pub fn x_bounds(&self) -> [f64; 2] {
        let xs = self.series.iter().flat_map(|s| s.points.iter().map(|&(x, _)| x));
        let lo = xs.clone().fold(f64::INFINITY, f64::min);
        let hi = xs.fold(f64::NEG_INFINITY, f64::max);
        if !lo.is_finite() || !hi.is_finite() {
            return [0.0, 1.0];
        }
        [lo, hi.max(lo + 1.0)]
    }

    /// Vertical bounds spanning every series with 10% padding.
    pub fn y_bounds(&self) -> [f64; 2] {
        let ys = self.series.iter().flat_map(|s| s.points.iter().map(|&(_, y)| y));
        let min = ys.clone().fold(f64::INFINITY, f64::min);
        let max = ys.fold(f64::NEG_INFINITY, f64::max);
        if !min.is_finite() || !max.is_finite() {
            return [-1.0, 1.0];
        }
        let range = (max - min).max(0.1);
        let pad = range * 0.1;
        [min - pad, max + pad]
    }

    pub fn actual(&self) -> Option<&LineSeries> {
        self.series.first()
    }

    pub fn predicted(&self) -> Option<&LineSeries> {
        self.series.get(1)
    }
}

/// A titled figure holding one set of axes.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub title: String,
    pub axes: Axes,
}

#[allow(clippy::cast_precision_loss)]
fn plot_points(values: &[f64], begin: usize, end: usize, x_offset: usize) -> Vec<(f64, f64)> {
    values[begin..end]
        .iter()
        .enumerate()
        .map(|(i, &y)| ((begin + i + x_offset) as f64, y))
        .collect()
}

impl SeriesAligner {
    /// Renders both series on a single set of axes.
    ///
    /// `begin`/`end` index the original (untrimmed) series. They are not
    /// validated: both are clamped to the series length, and an inverted
    /// range yields empty series.
    ///
    /// # Arguments
    ///
    /// * `request` - Range, alignment mode, labels and title
    /// * `style` - Colors, legend corner and grid
    ///
    /// # Returns
    ///
    /// A [`Figure`] ready to be drawn by a plotting backend.
    pub fn render(&self, request: &RenderRequest, style: &ChartStyle) -> Figure {
        let n = self.len();
        let end = request.end.unwrap_or(n).min(n);
        let begin = request.begin.min(end);

        let x_offset = match request.alignment {
            Alignment::TimeAligned => self.horizon(),
            Alignment::Overlap => 0,
        };

        let actual = LineSeries {
            label: request.labels.actual.clone(),
            color: style.actual_color,
            points: plot_points(self.actual(), begin, end, 0),
        };
        let predicted = LineSeries {
            label: request.labels.predicted.clone(),
            color: style.predicted_color,
            points: plot_points(self.predicted(), begin, end, x_offset),
        };

        debug!(
            alignment = ?request.alignment,
            begin,
            end,
            points = end - begin,
            "rendered comparison figure"
        );

        Figure {
            title: request.resolved_title(),
            axes: Axes {
                x_label: request.labels.x.clone(),
                y_label: request.labels.y.clone(),
                grid: style.grid,
                legend_position: style.legend_position,
                series: vec![actual, predicted],
            },
        }
    }
}
