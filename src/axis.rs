//! Axis settings and tick placement.
//!
//! Axes have fixed domains; ticks are placed on a "nice" interval derived from
//! the domain, the requested label count and an optional granularity.

use serde::{Deserialize, Serialize};

use crate::color::{BLACK, CLEAR, Rgba};
use crate::format::LabelFormatter;

/// Upper bound on labels per axis; larger counts are clamped.
pub const MAX_LABEL_COUNT: usize = 25;

/// Static description of one chart axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisSpec {
    pub minimum: f64,
    pub maximum: f64,
    /// Approximate number of labels; the interval is derived from it.
    pub label_count: usize,
    /// Smallest allowed tick interval; `None` disables the floor.
    pub granularity: Option<f64>,
    pub draw_grid_lines: bool,
    pub label_color: Rgba,
    pub axis_line_color: Rgba,
    pub label_font_size: f64,
    /// Extra distance between the axis and its labels, in points.
    #[serde(default)]
    pub label_offset: f64,
    pub formatter: LabelFormatter,
}

impl AxisSpec {
    /// Left axis: body temperature in °F.
    pub fn temperature() -> Self {
        Self {
            minimum: 90.0,
            maximum: 108.0,
            label_count: 10,
            granularity: Some(1.0),
            draw_grid_lines: false,
            label_color: BLACK,
            axis_line_color: CLEAR,
            label_font_size: 10.0,
            label_offset: 0.0,
            formatter: LabelFormatter::Fahrenheit,
        }
    }

    /// Right axis: volume in ml.
    pub fn volume() -> Self {
        Self {
            minimum: 0.0,
            maximum: 27.0,
            label_count: 13,
            granularity: Some(1.0),
            draw_grid_lines: false,
            label_color: BLACK,
            axis_line_color: CLEAR,
            label_font_size: 10.0,
            label_offset: 0.0,
            formatter: LabelFormatter::Millilitre,
        }
    }

    /// X axis: hours of the day, labels prefixed with `date`.
    pub fn time_of_day(date: &str) -> Self {
        Self {
            minimum: 0.0,
            maximum: 24.0,
            label_count: 6,
            granularity: None,
            draw_grid_lines: true,
            label_color: BLACK,
            axis_line_color: CLEAR,
            label_font_size: 10.0,
            label_offset: 16.0,
            formatter: LabelFormatter::TimeOfDay {
                date: date.to_string(),
            },
        }
    }

    pub fn range(&self) -> f64 {
        self.maximum - self.minimum
    }

    pub fn tick_values(&self) -> Vec<f64> {
        compute_tick_values(
            self.minimum,
            self.maximum,
            self.label_count,
            self.granularity,
        )
    }

    /// Ticks paired with their formatted label (possibly empty).
    pub fn tick_labels(&self) -> Vec<(f64, String)> {
        self.tick_values()
            .into_iter()
            .map(|v| (v, self.formatter.format(v)))
            .collect()
    }
}

/// Round to one significant digit, e.g. 1.8 → 2, 0.34 → 0.3, 27 → 30.
pub fn round_to_significant(v: f64) -> f64 {
    if !v.is_finite() || v == 0.0 {
        return v;
    }
    let pw = 1 - v.abs().log10().ceil() as i32;
    // Divide by positive powers of ten instead of multiplying by 0.1 so whole results stay exact.
    if pw >= 0 {
        let m = 10f64.powi(pw);
        (v * m).round() / m
    } else {
        let m = 10f64.powi(-pw);
        (v / m).round() * m
    }
}

/// Smallest `f64` strictly greater than `v` (for finite `v`).
fn next_up(v: f64) -> f64 {
    if v.is_nan() || v == f64::INFINITY {
        return v;
    }
    if v == 0.0 {
        return f64::from_bits(1);
    }
    let bits = v.to_bits();
    if v > 0.0 {
        f64::from_bits(bits + 1)
    } else {
        f64::from_bits(bits - 1)
    }
}

/// Tick positions for a fixed `[min, max]` domain.
///
/// Returns an empty list for degenerate input: zero label count, an empty or
/// inverted domain, or non-finite bounds.
pub fn compute_tick_values(
    min: f64,
    max: f64,
    label_count: usize,
    granularity: Option<f64>,
) -> Vec<f64> {
    let range = max - min;
    if label_count == 0 || !range.is_finite() || range <= 0.0 {
        return Vec::new();
    }

    let label_count = label_count.min(MAX_LABEL_COUNT);
    let mut interval = round_to_significant(range / label_count as f64);
    if let Some(g) = granularity
        && g.is_finite()
        && interval < g
    {
        interval = g;
    }
    if interval <= 0.0 {
        return Vec::new();
    }

    // A leading digit above 5 looks odd on an axis; jump to the next power of ten.
    let magnitude = 10f64.powf(interval.log10().floor());
    if (interval / magnitude) as i64 > 5 {
        interval = (10.0 * magnitude).floor();
    }

    let first = (min / interval).ceil() * interval;
    let last = next_up((max / interval).floor() * interval);

    let mut ticks = Vec::new();
    let mut i = 0usize;
    loop {
        let v = first + i as f64 * interval;
        if v > last {
            break;
        }
        // Avoid printing "-0".
        ticks.push(if v == 0.0 { 0.0 } else { v });
        i += 1;
    }
    ticks
}
