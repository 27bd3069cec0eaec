//! Tick and value label formatters.
//!
//! All formatters are total: they always return a `String`, and `""` means
//! "draw no label at this tick". Note the deliberate asymmetry:
//! - temperature and volume ticks **truncate** toward zero,
//! - time-of-day ticks **round** to the nearest hour (halves away from zero).
//!
//! The asymmetry decides which grid positions carry a label.

use serde::{Deserialize, Serialize};

/// Unit appended to temperature ticks.
pub const FAHRENHEIT_SUFFIX: &str = "°F";
/// Unit appended to volume ticks.
pub const MILLILITRE_SUFFIX: &str = "ml";
/// Volume ticks that get a label; all others stay blank.
pub const LABELLED_VOLUMES: [i64; 6] = [0, 2, 4, 6, 8, 10];
/// Hour → label table for the time axis. Hour 24 wraps to midnight.
pub const TIME_OF_DAY_LABELS: [(i64, &str); 7] = [
    (0, "0:00"),
    (4, "4:00"),
    (8, "8:00"),
    (12, "12:00"),
    (16, "16:00"),
    (20, "20:00"),
    (24, "0:00"),
];

/// Truncate toward zero. `None` for NaN/inf so callers can emit no label.
fn truncated(v: f64) -> Option<i64> {
    v.is_finite().then(|| v.trunc() as i64)
}

/// Temperature tick: `"<trunc(v)>°F"`, formatted from the float so large values stay exact.
pub fn fahrenheit_label(v: f64) -> String {
    if !v.is_finite() {
        return String::new();
    }
    // `+ 0.0` turns -0.0 into 0.0
    format!("{:.0}{FAHRENHEIT_SUFFIX}", v.trunc() + 0.0)
}

/// Volume tick: `"<trunc(v)>ml"` when the truncated value is in [`LABELLED_VOLUMES`], else `""`.
pub fn millilitre_label(v: f64) -> String {
    match truncated(v) {
        Some(n) if LABELLED_VOLUMES.contains(&n) => format!("{n}{MILLILITRE_SUFFIX}"),
        _ => String::new(),
    }
}

/// Time tick: `"<date>\n<H:00>\n"` when `round(v)` is a table hour, else `""`.
///
/// The trailing newline is intentional; it pads multi-line labels away from the legend.
pub fn time_of_day_label(date: &str, v: f64) -> String {
    if !v.is_finite() {
        return String::new();
    }
    let hour = v.round() as i64;
    TIME_OF_DAY_LABELS
        .iter()
        .find(|(h, _)| *h == hour)
        .map(|(_, label)| format!("{date}\n{label}\n"))
        .unwrap_or_default()
}

/// Per-point value annotation: one decimal, fixed point, no unit.
pub fn value_label(v: f64) -> String {
    format!("{v:.1}")
}

/// Which label function an axis (or the value annotations) uses.
///
/// A closed set of plain functions; config files select one by `kind`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LabelFormatter {
    Fahrenheit,
    Millilitre,
    TimeOfDay { date: String },
    OneDecimal,
}

impl LabelFormatter {
    pub fn format(&self, v: f64) -> String {
        match self {
            LabelFormatter::Fahrenheit => fahrenheit_label(v),
            LabelFormatter::Millilitre => millilitre_label(v),
            LabelFormatter::TimeOfDay { date } => time_of_day_label(date, v),
            LabelFormatter::OneDecimal => value_label(v),
        }
    }
}
