//! Mapping from chart style configuration to terminal colors and layout.

use ratatui::style::Color;
use ratatui::widgets::LegendPosition;

use crate::style::{LegendCorner, SeriesColor};

/// Grid line color.
pub const GRID_COLOR: Color = Color::DarkGray;
/// Header bar foreground.
pub const HEADER_FG: Color = Color::White;
/// Header bar background.
pub const HEADER_BG: Color = Color::DarkGray;
/// Footer help text color.
pub const FOOTER_FG: Color = Color::DarkGray;
/// Status line color when the common view matches exactly.
pub const MATCH_COLOR: Color = Color::Green;

/// Number of interior grid lines per axis.
const GRID_DIVISIONS: u32 = 4;

pub fn series_color(color: SeriesColor) -> Color {
    match color {
        SeriesColor::Green => Color::Green,
        SeriesColor::Red => Color::Red,
        SeriesColor::Blue => Color::Blue,
        SeriesColor::Cyan => Color::Cyan,
        SeriesColor::Magenta => Color::Magenta,
        SeriesColor::Yellow => Color::Yellow,
        SeriesColor::White => Color::White,
        SeriesColor::Gray => Color::Gray,
    }
}

pub fn legend_position(corner: LegendCorner) -> LegendPosition {
    match corner {
        LegendCorner::UpperRight => LegendPosition::TopRight,
        LegendCorner::UpperLeft => LegendPosition::TopLeft,
        LegendCorner::LowerRight => LegendPosition::BottomRight,
        LegendCorner::LowerLeft => LegendPosition::BottomLeft,
    }
}

/// Two-point line segments forming a grid over the given bounds.
pub fn grid_lines(x_bounds: [f64; 2], y_bounds: [f64; 2]) -> Vec<[(f64, f64); 2]> {
    let [x_lo, x_hi] = x_bounds;
    let [y_lo, y_hi] = y_bounds;
    let step = |lo: f64, hi: f64, i: u32| lo + (hi - lo) * f64::from(i) / f64::from(GRID_DIVISIONS);

    let mut lines = Vec::with_capacity(2 * (GRID_DIVISIONS as usize - 1));
    for i in 1..GRID_DIVISIONS {
        let y = step(y_lo, y_hi, i);
        lines.push([(x_lo, y), (x_hi, y)]);
        let x = step(x_lo, x_hi, i);
        lines.push([(x, y_lo), (x, y_hi)]);
    }
    lines
}
