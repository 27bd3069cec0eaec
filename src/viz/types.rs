//! Public types for legend and annotation placement.

use serde::{Deserialize, Serialize};

use crate::color::{BLACK, Rgba};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HorizontalAlignment {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerticalAlignment {
    Top,
    Center,
    Bottom,
}

/// How legend entries flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegendOrientation {
    /// One entry per row.
    Vertical,
    /// Entries side by side.
    Horizontal,
}

/// Swatch drawn next to each legend label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegendForm {
    Circle,
    Square,
    Line,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendSpec {
    pub horizontal_alignment: HorizontalAlignment,
    pub vertical_alignment: VerticalAlignment,
    pub orientation: LegendOrientation,
    /// Overlay the plot instead of reserving a band for the legend.
    pub draw_inside: bool,
    pub form: LegendForm,
    pub form_size: f64,
    pub text_color: Rgba,
    pub font_size: f64,
}

impl Default for LegendSpec {
    fn default() -> Self {
        Self {
            horizontal_alignment: HorizontalAlignment::Center,
            vertical_alignment: VerticalAlignment::Bottom,
            orientation: LegendOrientation::Vertical,
            draw_inside: false,
            form: LegendForm::Circle,
            form_size: 12.0,
            text_color: BLACK,
            font_size: 12.0,
        }
    }
}

/// Where a limit line's label sits relative to the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LimitLabelPosition {
    LeftTop,
    LeftBottom,
    RightTop,
    RightBottom,
}
