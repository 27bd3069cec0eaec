//! Chart configuration: every static parameter of the screen as plain data.
//!
//! `ChartConfig::default()` is the stock fever chart. A JSON file may override
//! any subset of fields; missing fields keep their default.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::axis::{AxisSpec, MAX_LABEL_COUNT};
use crate::chart::Interaction;
use crate::color::{BLUE, GRAY, ORANGE, RED, Rgba, WHITE};
use crate::dataset::{SeriesStyle, ValueLabelStyle};
use crate::format::LabelFormatter;
use crate::viz::types::{LegendSpec, LimitLabelPosition};

/// Date shown above every time-of-day tick unless overridden.
pub const DEFAULT_DATE: &str = "01-05";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid {axis} axis: {reason}")]
    Axis { axis: &'static str, reason: String },
    #[error("invalid limit line {label:?}: {reason}")]
    LimitLine { label: String, reason: String },
}

/// One threshold on the temperature axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LimitLineSpec {
    pub value: f64,
    pub label: String,
    pub color: Rgba,
}

impl LimitLineSpec {
    pub fn new(value: f64, label: impl Into<String>, color: Rgba) -> Self {
        Self {
            value,
            label: label.into(),
            color,
        }
    }
}

/// Styling shared by all limit lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LimitLineStyle {
    pub line_width: f64,
    pub label_position: LimitLabelPosition,
    pub x_offset: f64,
    pub y_offset: f64,
    pub font_size: f64,
}

impl Default for LimitLineStyle {
    fn default() -> Self {
        Self {
            line_width: 0.5,
            label_position: LimitLabelPosition::LeftTop,
            x_offset: -3.0,
            y_offset: 8.0,
            font_size: 10.0,
        }
    }
}

/// Clinical severity bands, highest first.
///
/// The hypothermia line sits at 96 while its label reads 95; both are shown as given.
pub fn fever_limit_lines() -> Vec<LimitLineSpec> {
    vec![
        LimitLineSpec::new(102.2, "Moderate Fever(102.2)", RED),
        LimitLineSpec::new(100.4, "Low grade Fever(100.4)", ORANGE),
        LimitLineSpec::new(99.5, "Mild Fever(99.5)", BLUE),
        LimitLineSpec::new(96.0, "Hypothermia(95)", GRAY),
    ]
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub background: Rgba,
    pub interaction: Interaction,
    pub left_axis: AxisSpec,
    pub right_axis: AxisSpec,
    pub x_axis: AxisSpec,
    pub legend: LegendSpec,
    pub limit_lines: Vec<LimitLineSpec>,
    pub limit_line_style: LimitLineStyle,
    pub series_style: SeriesStyle,
    pub value_labels: ValueLabelStyle,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            background: WHITE,
            interaction: Interaction::default(),
            left_axis: AxisSpec::temperature(),
            right_axis: AxisSpec::volume(),
            x_axis: AxisSpec::time_of_day(DEFAULT_DATE),
            legend: LegendSpec::default(),
            limit_lines: fever_limit_lines(),
            limit_line_style: LimitLineStyle::default(),
            series_style: SeriesStyle::default(),
            value_labels: ValueLabelStyle::default(),
        }
    }
}

impl ChartConfig {
    /// Parse a (possibly partial) JSON config and validate it.
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let cfg: ChartConfig = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Set the date printed on time-of-day ticks. Other x formatters are left alone.
    pub fn with_date(mut self, date: &str) -> Self {
        if let LabelFormatter::TimeOfDay { date: d } = &mut self.x_axis.formatter {
            *d = date.to_string();
        }
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, axis) in [
            ("left", &self.left_axis),
            ("right", &self.right_axis),
            ("x", &self.x_axis),
        ] {
            validate_axis(name, axis)?;
        }
        for line in &self.limit_lines {
            if !line.value.is_finite() {
                return Err(ConfigError::LimitLine {
                    label: line.label.clone(),
                    reason: "threshold must be finite".into(),
                });
            }
        }
        Ok(())
    }
}

fn validate_axis(axis: &'static str, spec: &AxisSpec) -> Result<(), ConfigError> {
    let fail = |reason: String| Err(ConfigError::Axis { axis, reason });
    if !spec.minimum.is_finite() || !spec.maximum.is_finite() {
        return fail("bounds must be finite".into());
    }
    if spec.minimum >= spec.maximum {
        return fail(format!(
            "minimum {} must be below maximum {}",
            spec.minimum, spec.maximum
        ));
    }
    if spec.label_count == 0 || spec.label_count > MAX_LABEL_COUNT {
        return fail(format!(
            "label_count {} must be within 1..={MAX_LABEL_COUNT}",
            spec.label_count
        ));
    }
    if let Some(g) = spec.granularity
        && !(g.is_finite() && g > 0.0)
    {
        return fail(format!("granularity {g} must be positive"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg = ChartConfig::from_json_str(r##"{"background": "#F0F0F0"}"##).unwrap();
        assert_eq!(cfg.background, Rgba::rgb(0xF0, 0xF0, 0xF0));
        assert_eq!(cfg.left_axis, AxisSpec::temperature());
        assert_eq!(cfg.limit_lines.len(), 4);
    }

    #[test]
    fn default_config_round_trips() {
        let cfg = ChartConfig::default();
        let s = serde_json::to_string(&cfg).unwrap();
        assert_eq!(ChartConfig::from_json_str(&s).unwrap(), cfg);
    }

    #[test]
    fn with_date_only_touches_time_formatter() {
        let cfg = ChartConfig::default().with_date("12-31");
        assert_eq!(
            cfg.x_axis.formatter,
            LabelFormatter::TimeOfDay {
                date: "12-31".into()
            }
        );
        assert_eq!(cfg.left_axis.formatter, LabelFormatter::Fahrenheit);
    }
}
