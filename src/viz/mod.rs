//! Render a configured [`ScatterChart`] to **SVG** with `plotters`.
//!
//! - Fixed axis domains from the chart view; data never rescales them
//! - Left (temperature) and right (volume) tick labels share one plotting area
//! - Multi-line time-of-day labels under the x axis
//! - Limit lines with their labels, scatter markers with holes, value labels
//! - Legend band at the bottom (or top), or drawn inside the plot

pub mod adapter;
pub mod legend;
pub mod text;
pub mod types;

pub use types::{
    HorizontalAlignment, LegendForm, LegendOrientation, LegendSpec, LimitLabelPosition,
    VerticalAlignment,
};

use std::path::Path;

use anyhow::{Result, anyhow, bail};
use plotters::backend::DrawingBackend;
use plotters::coord::Shift;
use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, VPos};
use plotters_svg::SVGBackend;

use crate::axis::AxisSpec;
use crate::chart::{LimitLine, ScatterChart};
use crate::color::Rgba;
use crate::dataset::{ScatterDataSet, ScatterShape, ValueLabelStyle};

use adapter::{fill, font_px, px, rgba_color, stroke, text_style};
use legend::{draw_legend, layout_legend};
use text::{line_height_px, widest_line_px};

type Chart<'a, DB> = ChartContext<'a, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

const MARGIN: i32 = 16;
/// Gap between an axis and its tick labels, in pixels.
const LABEL_GAP: i32 = 6;
/// Default grid colour (light gray).
const GRID: Rgba = Rgba::rgb(230, 230, 230);

/// Render `chart` to an `.svg` file.
pub fn render_svg<P: AsRef<Path>>(
    chart: &ScatterChart,
    out_path: P,
    width: u32,
    height: u32,
) -> Result<()> {
    let out_path = out_path.as_ref();
    match out_path.extension().and_then(|s| s.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("svg") => {}
        _ => bail!(
            "unsupported output {}: only .svg is supported",
            out_path.display()
        ),
    }
    check_size(width, height)?;
    let root = SVGBackend::new(out_path, (width, height)).into_drawing_area();
    draw_chart(root, chart)?;
    log::info!("wrote {}x{} chart to {}", width, height, out_path.display());
    Ok(())
}

/// Render `chart` to an in-memory SVG document.
pub fn render_svg_string(chart: &ScatterChart, width: u32, height: u32) -> Result<String> {
    check_size(width, height)?;
    let mut buf = String::new();
    {
        let root = SVGBackend::with_string(&mut buf, (width, height)).into_drawing_area();
        draw_chart(root, chart)?;
    }
    Ok(buf)
}

fn check_size(width: u32, height: u32) -> Result<()> {
    if width < 200 || height < 200 {
        bail!("chart size {width}x{height} is too small (minimum 200x200)");
    }
    Ok(())
}

/// Widest tick label of `axis`, in pixels.
fn label_area_width(axis: &AxisSpec) -> i32 {
    let fpx = font_px(axis.label_font_size);
    axis.tick_labels()
        .iter()
        .map(|(_, l)| widest_line_px(l, fpx) as i32)
        .max()
        .unwrap_or(0)
        + 2 * LABEL_GAP
}

/// Height of the x label area: tallest label plus the configured offset.
fn x_label_area_height(axis: &AxisSpec) -> i32 {
    let lines = axis
        .tick_labels()
        .iter()
        .map(|(_, l)| l.split('\n').count())
        .max()
        .unwrap_or(1) as i32;
    lines * line_height_px(font_px(axis.label_font_size)) + px(axis.label_offset) + LABEL_GAP
}

/// Map a right-axis value onto the left axis so it can share the plotting coordinates.
fn right_to_left(v: f64, right: &AxisSpec, left: &AxisSpec) -> f64 {
    left.minimum + (v - right.minimum) / right.range() * left.range()
}

fn map_err<E: std::fmt::Debug>(e: E) -> anyhow::Error {
    anyhow!("{:?}", e)
}

fn draw_chart<DB>(root: DrawingArea<DB, Shift>, chart: &ScatterChart) -> Result<()>
where
    DB: DrawingBackend,
{
    root.fill(&rgba_color(chart.background)).map_err(map_err)?;

    let (w_u32, h_u32) = root.dim_in_pixel();
    let (w, h) = (w_u32 as i32, h_u32 as i32);

    // ----------------------------
    // 1) Legend band
    // ----------------------------
    let legend_items = chart.legend_entries();
    let legend_layout = layout_legend(&legend_items, &chart.legend, w);
    let band_h = if chart.legend.draw_inside {
        0
    } else {
        legend_layout.height.min(h / 3)
    };
    let legend_on_top = chart.legend.vertical_alignment == VerticalAlignment::Top;

    let (plot_area, legend_area) = if band_h == 0 {
        (root.margin(0, 0, 0, 0), None)
    } else if legend_on_top {
        let (legend, plot) = root.split_vertically(band_h);
        (plot, Some(legend))
    } else {
        let (plot, legend) = root.split_vertically(h - band_h);
        (plot, Some(legend))
    };

    // ----------------------------
    // 2) Plot area with fixed domains
    // ----------------------------
    let (x_axis, left, right) = (&chart.x_axis, &chart.left_axis, &chart.right_axis);
    let mut ctx = ChartBuilder::on(&plot_area)
        .margin(MARGIN as u32)
        .set_label_area_size(LabelAreaPosition::Left, label_area_width(left) as u32)
        .set_label_area_size(LabelAreaPosition::Right, label_area_width(right) as u32)
        .set_label_area_size(LabelAreaPosition::Bottom, x_label_area_height(x_axis) as u32)
        .build_cartesian_2d(
            x_axis.minimum..x_axis.maximum,
            left.minimum..left.maximum,
        )
        .map_err(map_err)?;

    draw_grid_and_axes(&mut ctx, chart)?;
    draw_tick_labels(&root, &ctx, chart)?;
    for line in &chart.limit_lines {
        draw_limit_line(&root, &mut ctx, chart, line)?;
    }

    // ----------------------------
    // 3) Data
    // ----------------------------
    if let Some(data) = &chart.data {
        for set in &data.data_sets {
            draw_markers(&mut ctx, set)?;
            if set.draw_values {
                draw_value_labels(&mut ctx, set, &data.value_labels)?;
            }
        }
    }

    // ----------------------------
    // 4) Legend
    // ----------------------------
    match legend_area {
        Some(area) => draw_legend(&area, &legend_layout, &chart.legend)?,
        None if chart.legend.draw_inside && !legend_layout.entries.is_empty() => {
            // Overlay along the bottom (or top) edge of the plot area.
            let y = if legend_on_top {
                MARGIN
            } else {
                h - MARGIN - legend_layout.height
            };
            let overlay = root.margin(0, 0, 0, 0).shrink(
                (0, y.max(0)),
                (w_u32, legend_layout.height.max(1) as u32),
            );
            draw_legend(&overlay, &legend_layout, &chart.legend)?;
        }
        None => {}
    }

    root.present().map_err(map_err)?;
    Ok(())
}

fn draw_grid_and_axes<DB: DrawingBackend>(
    ctx: &mut Chart<'_, DB>,
    chart: &ScatterChart,
) -> Result<()> {
    let (x_axis, left, right) = (&chart.x_axis, &chart.left_axis, &chart.right_axis);
    let (x0, x1) = (x_axis.minimum, x_axis.maximum);
    let (y0, y1) = (left.minimum, left.maximum);

    if x_axis.draw_grid_lines {
        ctx.draw_series(
            x_axis
                .tick_values()
                .into_iter()
                .map(|x| PathElement::new(vec![(x, y0), (x, y1)], stroke(GRID, 0.5))),
        )
        .map_err(map_err)?;
    }
    if left.draw_grid_lines {
        ctx.draw_series(
            left.tick_values()
                .into_iter()
                .map(|y| PathElement::new(vec![(x0, y), (x1, y)], stroke(GRID, 0.5))),
        )
        .map_err(map_err)?;
    }
    if right.draw_grid_lines {
        ctx.draw_series(right.tick_values().into_iter().map(|v| {
            let y = right_to_left(v, right, left);
            PathElement::new(vec![(x0, y), (x1, y)], stroke(GRID, 0.5))
        }))
        .map_err(map_err)?;
    }

    let axis_lines = [
        (left.axis_line_color, [(x0, y0), (x0, y1)]),
        (right.axis_line_color, [(x1, y0), (x1, y1)]),
        (x_axis.axis_line_color, [(x0, y0), (x1, y0)]),
    ];
    for (color, [a, b]) in axis_lines {
        if !color.is_clear() {
            ctx.draw_series(std::iter::once(PathElement::new(vec![a, b], stroke(color, 1.0))))
                .map_err(map_err)?;
        }
    }
    Ok(())
}

/// Tick labels are positioned in pixels on the root area; empty labels are skipped.
fn draw_tick_labels<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    ctx: &Chart<'_, DB>,
    chart: &ScatterChart,
) -> Result<()> {
    let (x_axis, left, right) = (&chart.x_axis, &chart.left_axis, &chart.right_axis);

    let style = text_style(left.label_font_size, left.label_color, HPos::Right, VPos::Center);
    for (v, label) in left.tick_labels() {
        if label.is_empty() {
            continue;
        }
        let (px_x, px_y) = ctx.backend_coord(&(x_axis.minimum, v));
        root.draw(&Text::new(label, (px_x - LABEL_GAP, px_y), style.clone()))
            .map_err(map_err)?;
    }

    let style = text_style(right.label_font_size, right.label_color, HPos::Left, VPos::Center);
    for (v, label) in right.tick_labels() {
        if label.is_empty() {
            continue;
        }
        let (px_x, px_y) = ctx.backend_coord(&(x_axis.maximum, right_to_left(v, right, left)));
        root.draw(&Text::new(label, (px_x + LABEL_GAP, px_y), style.clone()))
            .map_err(map_err)?;
    }

    let style = text_style(x_axis.label_font_size, x_axis.label_color, HPos::Center, VPos::Top);
    let line_h = line_height_px(font_px(x_axis.label_font_size));
    for (v, label) in x_axis.tick_labels() {
        if label.is_empty() {
            continue;
        }
        let (px_x, px_y) = ctx.backend_coord(&(v, left.minimum));
        let top = px_y + LABEL_GAP + px(x_axis.label_offset);
        for (i, line) in label.split('\n').enumerate().filter(|(_, l)| !l.is_empty()) {
            root.draw(&Text::new(line.to_string(), (px_x, top + i as i32 * line_h), style.clone()))
                .map_err(map_err)?;
        }
    }
    Ok(())
}

fn draw_limit_line<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    ctx: &mut Chart<'_, DB>,
    chart: &ScatterChart,
    line: &LimitLine,
) -> Result<()> {
    let (x_axis, left) = (&chart.x_axis, &chart.left_axis);
    if !(left.minimum..=left.maximum).contains(&line.limit) {
        log::debug!("limit line {:?} outside the axis domain, skipped", line.label);
        return Ok(());
    }
    ctx.draw_series(std::iter::once(PathElement::new(
        vec![(x_axis.minimum, line.limit), (x_axis.maximum, line.limit)],
        stroke(line.line_color, line.line_width),
    )))
    .map_err(map_err)?;

    if line.label.is_empty() {
        return Ok(());
    }
    let (left_px, line_px) = ctx.backend_coord(&(x_axis.minimum, line.limit));
    let (right_px, _) = ctx.backend_coord(&(x_axis.maximum, line.limit));
    let (dx, dy) = (px(line.x_offset), px(line.y_offset));
    let (at, h, v) = match line.label_position {
        LimitLabelPosition::LeftTop => ((left_px + dx, line_px - dy), HPos::Left, VPos::Bottom),
        LimitLabelPosition::LeftBottom => ((left_px + dx, line_px + dy), HPos::Left, VPos::Top),
        LimitLabelPosition::RightTop => ((right_px - dx, line_px - dy), HPos::Right, VPos::Bottom),
        LimitLabelPosition::RightBottom => ((right_px - dx, line_px + dy), HPos::Right, VPos::Top),
    };
    let style = text_style(line.value_font_size, line.value_text_color, h, v);
    root.draw(&Text::new(line.label.clone(), at, style))
        .map_err(map_err)?;
    Ok(())
}

fn draw_markers<DB: DrawingBackend>(ctx: &mut Chart<'_, DB>, set: &ScatterDataSet) -> Result<()> {
    let r = (px(set.shape_size) / 2).max(1);
    let body = fill(set.color);
    let points = set.entries.iter().map(|p| (p.x, p.y));
    match set.shape {
        ScatterShape::Circle => {
            let hole = px(set.hole_radius);
            if hole > 0 && hole < r {
                let hole_style = fill(set.hole_color);
                ctx.draw_series(points.map(|c| {
                    EmptyElement::at(c)
                        + Circle::new((0, 0), r, body.clone())
                        + Circle::new((0, 0), hole, hole_style.clone())
                }))
                .map_err(map_err)?;
            } else {
                ctx.draw_series(
                    points.map(|c| EmptyElement::at(c) + Circle::new((0, 0), r, body.clone())),
                )
                .map_err(map_err)?;
            }
        }
        ScatterShape::Square => {
            ctx.draw_series(
                points.map(|c| {
                    EmptyElement::at(c) + Rectangle::new([(-r, -r), (r, r)], body.clone())
                }),
            )
            .map_err(map_err)?;
        }
        ScatterShape::Triangle => {
            ctx.draw_series(points.map(|c| {
                EmptyElement::at(c) + Polygon::new(vec![(0, -r), (-r, r), (r, r)], body.clone())
            }))
            .map_err(map_err)?;
        }
        ScatterShape::Cross => {
            let st = stroke(set.color, 1.5);
            ctx.draw_series(points.map(|c| {
                EmptyElement::at(c)
                    + PathElement::new(vec![(-r, 0), (r, 0)], st.clone())
                    + PathElement::new(vec![(0, -r), (0, r)], st.clone())
            }))
            .map_err(map_err)?;
        }
        ScatterShape::X => {
            let st = stroke(set.color, 1.5);
            ctx.draw_series(points.map(|c| {
                EmptyElement::at(c)
                    + PathElement::new(vec![(-r, -r), (r, r)], st.clone())
                    + PathElement::new(vec![(-r, r), (r, -r)], st.clone())
            }))
            .map_err(map_err)?;
        }
    }
    Ok(())
}

fn draw_value_labels<DB: DrawingBackend>(
    ctx: &mut Chart<'_, DB>,
    set: &ScatterDataSet,
    labels: &ValueLabelStyle,
) -> Result<()> {
    let lift = px(set.shape_size) / 2 + 2;
    let style = text_style(labels.font_size, labels.text_color, HPos::Center, VPos::Bottom);
    ctx.draw_series(set.entries.iter().map(|p| {
        EmptyElement::at((p.x, p.y))
            + Text::new(labels.formatter.format(p.y), (0, -lift), style.clone())
    }))
    .map_err(map_err)?;
    Ok(())
}
