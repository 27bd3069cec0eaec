//! Data adapter: labelled, coloured points → scatter data sets.

use serde::{Deserialize, Serialize};

use crate::color::{self, BLACK, Rgba, WHITE};
use crate::format::LabelFormatter;
use crate::models::{Point, SeriesDescriptor};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScatterShape {
    Circle,
    Square,
    Triangle,
    Cross,
    X,
}

/// Visual constants applied to every data set, independent of the data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesStyle {
    pub shape: ScatterShape,
    /// Marker diameter in points.
    pub shape_size: f64,
    /// Radius of the hole punched into circle markers; 0 draws a solid marker.
    pub hole_radius: f64,
    /// Hex string resolved through the colour capability, like series colours.
    pub hole_color: String,
    pub draw_highlight_indicators: bool,
}

impl Default for SeriesStyle {
    fn default() -> Self {
        Self {
            shape: ScatterShape::Circle,
            shape_size: 6.0,
            hole_radius: 1.5,
            hole_color: WHITE.to_hex(),
            draw_highlight_indicators: false,
        }
    }
}

/// Styling for the per-point value annotations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueLabelStyle {
    pub font_size: f64,
    pub text_color: Rgba,
    pub formatter: LabelFormatter,
}

impl Default for ValueLabelStyle {
    fn default() -> Self {
        Self {
            font_size: 10.0,
            text_color: BLACK,
            formatter: LabelFormatter::OneDecimal,
        }
    }
}

/// A named, coloured collection of points drawn with one marker style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterDataSet {
    pub label: String,
    pub entries: Vec<Point>,
    pub color: Rgba,
    pub shape: ScatterShape,
    pub shape_size: f64,
    pub hole_radius: f64,
    pub hole_color: Rgba,
    pub draw_highlight_indicators: bool,
    pub draw_values: bool,
}

impl ScatterDataSet {
    /// Data set with the library defaults; callers restyle it afterwards.
    pub fn new(entries: Vec<Point>, label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            entries,
            color: BLACK,
            shape: ScatterShape::Square,
            shape_size: 10.0,
            hole_radius: 0.0,
            hole_color: WHITE,
            draw_highlight_indicators: true,
            draw_values: true,
        }
    }

    pub fn apply_style(&mut self, style: &SeriesStyle, resolve_color: impl Fn(&str) -> Rgba) {
        self.shape = style.shape;
        self.shape_size = style.shape_size;
        self.hole_radius = style.hole_radius;
        self.hole_color = resolve_color(&style.hole_color);
        self.draw_highlight_indicators = style.draw_highlight_indicators;
    }
}

/// Everything the chart draws as data: the sets plus shared value-label styling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterData {
    pub data_sets: Vec<ScatterDataSet>,
    pub value_labels: ValueLabelStyle,
}

impl ScatterData {
    pub fn new(data_sets: Vec<ScatterDataSet>) -> Self {
        Self {
            data_sets,
            value_labels: ValueLabelStyle::default(),
        }
    }

    pub fn entry_count(&self) -> usize {
        self.data_sets.iter().map(|s| s.entries.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entry_count() == 0
    }
}

/// Build one single-point data set per descriptor, in input order.
///
/// Colours (series and hole) go through `resolve_color`; how it treats bad
/// strings is up to the caller.
pub fn build_scatter_data(
    values: &[SeriesDescriptor],
    style: &SeriesStyle,
    value_labels: &ValueLabelStyle,
    resolve_color: impl Fn(&str) -> Rgba,
) -> ScatterData {
    let data_sets = values
        .iter()
        .map(|v| {
            let mut set = ScatterDataSet::new(vec![v.value], v.label.clone());
            set.apply_style(style, &resolve_color);
            set.color = resolve_color(&v.color);
            set
        })
        .collect();
    ScatterData {
        data_sets,
        value_labels: value_labels.clone(),
    }
}

/// [`build_scatter_data`] with the total colour parser.
pub fn build_scatter_data_default(
    values: &[SeriesDescriptor],
    style: &SeriesStyle,
    value_labels: &ValueLabelStyle,
) -> ScatterData {
    build_scatter_data(values, style, value_labels, color::color_from_string)
}
