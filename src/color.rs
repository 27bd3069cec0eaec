//! Colour parsing: turn strings like `"#355E3B"`, `"rgba(255, 0, 0, 0.5)"` or `"orange"` into [`Rgba`].
//!
//! Two entry points:
//! - [`parse_color`] is strict and reports what was wrong.
//! - [`color_from_string`] never fails; unreadable input falls back to opaque black
//!   (and logs a warning) so a bad colour never aborts a chart.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 8-bit RGBA colour. Serialized as a hex string (`#RRGGBB`, or `#AARRGGBB` when not opaque).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque colour.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Alpha as a 0..=1 fraction.
    pub fn alpha(&self) -> f64 {
        self.a as f64 / 255.0
    }

    /// Fully transparent colours are skipped when drawing.
    pub fn is_clear(&self) -> bool {
        self.a == 0
    }

    /// `#RRGGBB` for opaque colours, `#AARRGGBB` otherwise.
    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.a, self.r, self.g, self.b)
        }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl From<Rgba> for String {
    fn from(c: Rgba) -> Self {
        c.to_hex()
    }
}

impl TryFrom<String> for Rgba {
    type Error = ColorError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        parse_color(&s)
    }
}

pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);
pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);
pub const RED: Rgba = Rgba::rgb(255, 0, 0);
pub const GREEN: Rgba = Rgba::rgb(0, 255, 0);
pub const BLUE: Rgba = Rgba::rgb(0, 0, 255);
pub const ORANGE: Rgba = Rgba::rgb(255, 128, 0);
pub const GRAY: Rgba = Rgba::rgb(128, 128, 128);
pub const CLEAR: Rgba = Rgba::new(0, 0, 0, 0);

/// Fallback used by [`color_from_string`].
pub const FALLBACK: Rgba = BLACK;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ColorError {
    #[error("empty colour string")]
    Empty,
    #[error("invalid hex colour {0:?} (expected #RGB, #ARGB, #RRGGBB or #AARRGGBB)")]
    InvalidHex(String),
    #[error("invalid rgb()/rgba() colour {0:?}")]
    InvalidFunction(String),
    #[error("unknown colour name {0:?}")]
    UnknownName(String),
}

fn named_color(name: &str) -> Option<Rgba> {
    let c = match name {
        "black" => BLACK,
        "white" => WHITE,
        "red" => RED,
        "green" => GREEN,
        "blue" => BLUE,
        "orange" => ORANGE,
        "gray" | "grey" => GRAY,
        "yellow" => Rgba::rgb(255, 255, 0),
        "purple" => Rgba::rgb(128, 0, 128),
        "brown" => Rgba::rgb(153, 102, 51),
        "cyan" => Rgba::rgb(0, 255, 255),
        "magenta" => Rgba::rgb(255, 0, 255),
        "clear" => CLEAR,
        _ => return None,
    };
    Some(c)
}

fn rgb_function_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"^rgba?\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*(?:,\s*([0-9]*\.?[0-9]+)\s*)?\)$",
        )
        .expect("static regex")
    })
}

fn parse_hex(digits: &str, input: &str) -> Result<Rgba, ColorError> {
    let bad = || ColorError::InvalidHex(input.to_string());
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(bad());
    }
    let nibble = |i: usize| u8::from_str_radix(&digits[i..i + 1], 16).map(|v| v * 17);
    let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16);
    let (a, r, g, b) = match digits.len() {
        3 => (Ok(255), nibble(0), nibble(1), nibble(2)),
        4 => (nibble(0), nibble(1), nibble(2), nibble(3)),
        6 => (Ok(255), byte(0), byte(2), byte(4)),
        8 => (byte(0), byte(2), byte(4), byte(6)),
        _ => return Err(bad()),
    };
    match (a, r, g, b) {
        (Ok(a), Ok(r), Ok(g), Ok(b)) => Ok(Rgba::new(r, g, b, a)),
        _ => Err(bad()),
    }
}

fn parse_function(s: &str) -> Result<Rgba, ColorError> {
    let bad = || ColorError::InvalidFunction(s.to_string());
    let caps = rgb_function_regex().captures(s).ok_or_else(bad)?;
    let channel = |i: usize| -> Result<u8, ColorError> {
        caps[i].parse::<u8>().map_err(|_| bad())
    };
    let (r, g, b) = (channel(1)?, channel(2)?, channel(3)?);
    let a = match caps.get(4) {
        Some(m) => {
            let f: f64 = m.as_str().parse().map_err(|_| bad())?;
            if !(0.0..=1.0).contains(&f) {
                return Err(bad());
            }
            (f * 255.0).round() as u8
        }
        None => 255,
    };
    Ok(Rgba::new(r, g, b, a))
}

/// Strictly parse a colour string.
pub fn parse_color(s: &str) -> Result<Rgba, ColorError> {
    let t = s.trim();
    if t.is_empty() {
        return Err(ColorError::Empty);
    }
    if let Some(digits) = t.strip_prefix('#') {
        return parse_hex(digits, t);
    }
    let lower = t.to_ascii_lowercase();
    if lower.starts_with("rgb") {
        return parse_function(&lower);
    }
    named_color(&lower).ok_or(ColorError::UnknownName(t.to_string()))
}

/// Total colour resolution: parse, or fall back to [`FALLBACK`].
pub fn color_from_string(s: &str) -> Rgba {
    match parse_color(s) {
        Ok(c) => c,
        Err(e) => {
            log::warn!("{e}; using {FALLBACK}");
            FALLBACK
        }
    }
}
