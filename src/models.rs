use serde::{Deserialize, Serialize};

/// One measurement: `x` is the hour of day in `[0, 24]`, `y` the measured value (°F).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Input row for the data adapter: one labelled, coloured point.
///
/// `color` stays a string here; it is resolved when the data set is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesDescriptor {
    pub value: Point,
    pub label: String,
    pub color: String,
}

impl SeriesDescriptor {
    pub fn new(
        value: impl Into<Point>,
        label: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            color: color.into(),
        }
    }
}

/// Flat CSV row (`x,y,label,color`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesRow {
    pub x: f64,
    pub y: f64,
    pub label: String,
    pub color: String,
}

impl From<SeriesRow> for SeriesDescriptor {
    fn from(r: SeriesRow) -> Self {
        Self {
            value: Point::new(r.x, r.y),
            label: r.label,
            color: r.color,
        }
    }
}

/// The series shown when no input file is given.
pub fn demo_series() -> Vec<SeriesDescriptor> {
    vec![SeriesDescriptor::new((10.0, 101.3), "Amber", "#355E3B")]
}
