//! TOML-based chart styling and label configuration.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;

/// Line colors available to both series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesColor {
    Green,
    Red,
    Blue,
    Cyan,
    Magenta,
    Yellow,
    White,
    Gray,
}

/// Corner of the axes the legend is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegendCorner {
    #[default]
    UpperRight,
    UpperLeft,
    LowerRight,
    LowerLeft,
}

/// Fixed visual styling of a comparison chart.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartStyle {
    /// Color of the actual series.
    pub actual_color: SeriesColor,
    /// Color of the predicted series.
    pub predicted_color: SeriesColor,
    /// Legend anchor.
    pub legend_position: LegendCorner,
    /// Whether grid lines are drawn.
    pub grid: bool,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            actual_color: SeriesColor::Green,
            predicted_color: SeriesColor::Red,
            legend_position: LegendCorner::UpperRight,
            grid: true,
        }
    }
}

/// Series and axis labels.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Labels {
    /// Legend entry for the actual series.
    pub actual: String,
    /// Legend entry for the predicted series.
    pub predicted: String,
    /// Horizontal axis title.
    pub x: String,
    /// Vertical axis title.
    pub y: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            actual: "actual".to_string(),
            predicted: "prediction".to_string(),
            x: "time (steps)".to_string(),
            y: "value".to_string(),
        }
    }
}

/// Top-level style file: `[style]` and `[labels]` tables, both optional.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleConfig {
    pub style: ChartStyle,
    pub labels: Labels,
}

/// Configuration error with field path and constraint description.
#[derive(Debug)]
pub struct ConfigError {
    /// Dotted field path (e.g., `"labels.actual"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "config error: {}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

impl StyleConfig {
    /// Parses a style file from disk.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError {
            field: "style".to_string(),
            message: format!("cannot read \"{}\": {e}", path.display()),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a style file from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError {
            field: "toml".to_string(),
            message: e.to_string(),
        })
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Returns an empty vector if configuration is valid.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if self.style.actual_color == self.style.predicted_color {
            errors.push(ConfigError {
                field: "style.predicted_color".into(),
                message: "must differ from style.actual_color".into(),
            });
        }
        if self.labels.actual.trim().is_empty() {
            errors.push(ConfigError {
                field: "labels.actual".into(),
                message: "must not be empty".into(),
            });
        }
        if self.labels.predicted.trim().is_empty() {
            errors.push(ConfigError {
                field: "labels.predicted".into(),
                message: "must not be empty".into(),
            });
        }

        errors
    }
}
