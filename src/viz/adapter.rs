//! Small bridges between this crate's style types and `plotters`.

use plotters::prelude::*;
use plotters::style::FontFamily;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::color::Rgba;

/// Pixels per point. Sizes in the config are in points.
pub const POINT_SCALE: f64 = 1.5;

/// Convert a size in points to whole pixels.
pub fn px(points: f64) -> i32 {
    (points * POINT_SCALE).round() as i32
}

/// Font size in pixels for a size in points.
pub fn font_px(points: f64) -> u32 {
    px(points).max(1) as u32
}

pub fn rgba_color(c: Rgba) -> RGBAColor {
    RGBAColor(c.r, c.g, c.b, c.alpha())
}

/// Stroke style; widths below one pixel are drawn as one pixel.
pub fn stroke(c: Rgba, width_points: f64) -> ShapeStyle {
    rgba_color(c).stroke_width(px(width_points).max(1) as u32)
}

pub fn fill(c: Rgba) -> ShapeStyle {
    rgba_color(c).filled()
}

/// Sans-serif text style in `c`, anchored at `(h, v)`.
pub fn text_style(size_points: f64, c: Rgba, h: HPos, v: VPos) -> TextStyle<'static> {
    let mut style =
        TextStyle::from((FontFamily::SansSerif, font_px(size_points) as f64)).pos(Pos::new(h, v));
    style.color = rgba_color(c).to_backend_color();
    style
}
