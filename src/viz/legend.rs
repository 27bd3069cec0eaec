//! Legend layout and drawing.
//!
//! Layout is computed in pixels first ([`layout_legend`]) so the renderer can
//! reserve the band before the plot is built, then drawn with [`draw_legend`].

use anyhow::{Result, anyhow};
use plotters::backend::DrawingBackend;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, VPos};

use super::adapter::{fill, font_px, px, stroke, text_style};
use super::text::{estimate_text_width_px, truncate_to_width};
use super::types::{HorizontalAlignment, LegendForm, LegendOrientation, LegendSpec};
use crate::color::Rgba;

const PAD: i32 = 8;
const FORM_TO_TEXT_GAP: i32 = 6;
const ENTRY_GAP: i32 = 16;
const ROW_GAP: i32 = 4;

/// One placed legend entry: form centre and text anchor, relative to the legend area.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedEntry {
    pub label: String,
    pub color: Rgba,
    pub form_center: (i32, i32),
    pub text_at: (i32, i32),
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegendLayout {
    pub entries: Vec<PlacedEntry>,
    /// Height the legend needs, padding included.
    pub height: i32,
}

fn row_height(spec: &LegendSpec) -> i32 {
    px(spec.form_size).max(font_px(spec.font_size) as i32)
}

/// Place `items` inside an area `width` pixels wide.
pub fn layout_legend(items: &[(String, Rgba)], spec: &LegendSpec, width: i32) -> LegendLayout {
    if items.is_empty() {
        return LegendLayout {
            entries: Vec::new(),
            height: 0,
        };
    }
    let fpx = font_px(spec.font_size);
    let form_w = px(spec.form_size);
    let max_text = (width - 2 * PAD - form_w - FORM_TO_TEXT_GAP).max(20) as u32;
    let labels: Vec<String> = items
        .iter()
        .map(|(l, _)| truncate_to_width(l, fpx, max_text))
        .collect();
    let entry_w: Vec<i32> = labels
        .iter()
        .map(|l| form_w + FORM_TO_TEXT_GAP + estimate_text_width_px(l, fpx) as i32)
        .collect();
    let row_h = row_height(spec);

    // Block width/height of the whole legend, then per-entry offsets inside it.
    let (block_w, block_h, offsets): (i32, i32, Vec<(i32, i32)>) = match spec.orientation {
        LegendOrientation::Vertical => {
            let w = entry_w.iter().copied().max().unwrap_or(0);
            let offs = (0..items.len())
                .map(|i| (0, i as i32 * (row_h + ROW_GAP)))
                .collect();
            let h = items.len() as i32 * row_h + (items.len() as i32 - 1) * ROW_GAP;
            (w, h, offs)
        }
        LegendOrientation::Horizontal => {
            let mut x = 0;
            let mut offs = Vec::with_capacity(items.len());
            for w in &entry_w {
                offs.push((x, 0));
                x += w + ENTRY_GAP;
            }
            (x - ENTRY_GAP, row_h, offs)
        }
    };

    let x0 = match spec.horizontal_alignment {
        HorizontalAlignment::Left => PAD,
        HorizontalAlignment::Center => ((width - block_w) / 2).max(PAD),
        HorizontalAlignment::Right => (width - PAD - block_w).max(PAD),
    };

    let entries = items
        .iter()
        .zip(labels)
        .zip(offsets)
        .map(|(((_, color), label), (dx, dy))| {
            let cy = PAD + dy + row_h / 2;
            PlacedEntry {
                label,
                color: *color,
                form_center: (x0 + dx + form_w / 2, cy),
                text_at: (x0 + dx + form_w + FORM_TO_TEXT_GAP, cy),
            }
        })
        .collect();

    LegendLayout {
        entries,
        height: block_h + 2 * PAD,
    }
}

/// Draw a precomputed layout onto `area`.
pub fn draw_legend<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    layout: &LegendLayout,
    spec: &LegendSpec,
) -> Result<()> {
    let r = px(spec.form_size) / 2;
    let label_style = text_style(spec.font_size, spec.text_color, HPos::Left, VPos::Center);
    for e in &layout.entries {
        let (cx, cy) = e.form_center;
        let drawn = match spec.form {
            LegendForm::Circle => area.draw(&Circle::new((cx, cy), r, fill(e.color))),
            LegendForm::Square => {
                area.draw(&Rectangle::new([(cx - r, cy - r), (cx + r, cy + r)], fill(e.color)))
            }
            LegendForm::Line => area.draw(&PathElement::new(
                vec![(cx - r, cy), (cx + r, cy)],
                stroke(e.color, 2.0),
            )),
        };
        drawn.map_err(|err| anyhow!("{:?}", err))?;
        area.draw(&Text::new(e.label.clone(), e.text_at, label_style.clone()))
            .map_err(|err| anyhow!("{:?}", err))?;
    }
    log::trace!("legend drawn with {} entries", layout.entries.len());
    Ok(())
}
