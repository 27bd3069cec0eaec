//! The chart view: the surface that configuration and data are applied to.
//!
//! [`ChartView`] is the render-target capability. [`ScatterChart`] is the
//! in-memory implementation that the SVG renderer in [`crate::viz`] draws from.
//!
//! Screen load is two steps, in this order:
//! 1. [`configure`]: static axes, legend, limit lines (independent of data),
//! 2. [`setup_data`]: build data sets and install them as the current dataset.

use serde::{Deserialize, Serialize};

use crate::axis::AxisSpec;
use crate::color::{self, Rgba, WHITE};
use crate::config::{ChartConfig, LimitLineSpec, LimitLineStyle};
use crate::dataset::{ScatterData, build_scatter_data};
use crate::models::SeriesDescriptor;
use crate::viz::types::{LegendSpec, LimitLabelPosition};

/// Horizontal reference line on the temperature axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LimitLine {
    pub limit: f64,
    pub label: String,
    pub line_color: Rgba,
    pub value_text_color: Rgba,
    pub line_width: f64,
    pub label_position: LimitLabelPosition,
    pub x_offset: f64,
    pub y_offset: f64,
    pub value_font_size: f64,
}

impl LimitLine {
    pub fn from_spec(spec: &LimitLineSpec, style: &LimitLineStyle) -> Self {
        Self {
            limit: spec.value,
            label: spec.label.clone(),
            line_color: spec.color,
            value_text_color: spec.color,
            line_width: style.line_width,
            label_position: style.label_position,
            x_offset: style.x_offset,
            y_offset: style.y_offset,
            value_font_size: style.font_size,
        }
    }
}

/// Touch interaction flags. Kept on the view; static rendering ignores them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interaction {
    pub drag_enabled: bool,
    pub scale_enabled: bool,
    pub pinch_zoom_enabled: bool,
}

impl Default for Interaction {
    fn default() -> Self {
        Self {
            drag_enabled: true,
            scale_enabled: true,
            pinch_zoom_enabled: true,
        }
    }
}

/// Render-target capability.
pub trait ChartView {
    fn set_background(&mut self, color: Rgba);
    fn set_interaction(&mut self, interaction: Interaction);
    fn set_left_axis(&mut self, axis: AxisSpec);
    fn set_right_axis(&mut self, axis: AxisSpec);
    fn set_x_axis(&mut self, axis: AxisSpec);
    fn set_legend(&mut self, legend: LegendSpec);
    /// Limit lines always attach to the left (temperature) axis.
    fn add_limit_line(&mut self, line: LimitLine);
    fn remove_all_limit_lines(&mut self);
    /// Replace the current dataset.
    fn set_data(&mut self, data: ScatterData);
}

/// In-memory scatter chart view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterChart {
    pub background: Rgba,
    pub interaction: Interaction,
    pub left_axis: AxisSpec,
    pub right_axis: AxisSpec,
    pub x_axis: AxisSpec,
    pub legend: LegendSpec,
    pub limit_lines: Vec<LimitLine>,
    pub data: Option<ScatterData>,
}

impl Default for ScatterChart {
    /// An unconfigured view: white, unit axes, no annotations, no data.
    fn default() -> Self {
        let plain = AxisSpec {
            minimum: 0.0,
            maximum: 1.0,
            label_count: 6,
            granularity: None,
            draw_grid_lines: true,
            label_color: color::BLACK,
            axis_line_color: color::GRAY,
            label_font_size: 10.0,
            label_offset: 0.0,
            formatter: crate::format::LabelFormatter::OneDecimal,
        };
        Self {
            background: WHITE,
            interaction: Interaction::default(),
            left_axis: plain.clone(),
            right_axis: plain.clone(),
            x_axis: plain,
            legend: LegendSpec::default(),
            limit_lines: Vec::new(),
            data: None,
        }
    }
}

impl ScatterChart {
    /// Configure, then install `values`.
    pub fn load(config: &ChartConfig, values: &[SeriesDescriptor]) -> Self {
        let mut chart = ScatterChart::default();
        configure(config, &mut chart);
        setup_data(&mut chart, values, config);
        chart
    }

    /// Legend entries in drawing order: one per data set.
    pub fn legend_entries(&self) -> Vec<(String, Rgba)> {
        self.data
            .iter()
            .flat_map(|d| d.data_sets.iter())
            .map(|s| (s.label.clone(), s.color))
            .collect()
    }
}

impl ChartView for ScatterChart {
    fn set_background(&mut self, color: Rgba) {
        self.background = color;
    }

    fn set_interaction(&mut self, interaction: Interaction) {
        self.interaction = interaction;
    }

    fn set_left_axis(&mut self, axis: AxisSpec) {
        self.left_axis = axis;
    }

    fn set_right_axis(&mut self, axis: AxisSpec) {
        self.right_axis = axis;
    }

    fn set_x_axis(&mut self, axis: AxisSpec) {
        self.x_axis = axis;
    }

    fn set_legend(&mut self, legend: LegendSpec) {
        self.legend = legend;
    }

    fn add_limit_line(&mut self, line: LimitLine) {
        self.limit_lines.push(line);
    }

    fn remove_all_limit_lines(&mut self) {
        self.limit_lines.clear();
    }

    fn set_data(&mut self, data: ScatterData) {
        self.data = Some(data);
    }
}

/// Apply the static part of the chart. Safe to call repeatedly: limit lines are replaced, not appended.
pub fn configure<V: ChartView + ?Sized>(config: &ChartConfig, view: &mut V) {
    view.set_background(config.background);
    view.set_interaction(config.interaction);
    view.set_legend(config.legend.clone());
    view.set_left_axis(config.left_axis.clone());
    view.set_right_axis(config.right_axis.clone());
    view.remove_all_limit_lines();
    for spec in &config.limit_lines {
        view.add_limit_line(LimitLine::from_spec(spec, &config.limit_line_style));
    }
    view.set_x_axis(config.x_axis.clone());
    log::debug!(
        "configured chart: {} limit line(s), x {}..{}",
        config.limit_lines.len(),
        config.x_axis.minimum,
        config.x_axis.maximum
    );
}

/// Build the dataset for `values` and install it, replacing any previous one.
pub fn setup_data<V: ChartView + ?Sized>(
    view: &mut V,
    values: &[SeriesDescriptor],
    config: &ChartConfig,
) {
    let data = build_scatter_data(
        values,
        &config.series_style,
        &config.value_labels,
        color::color_from_string,
    );
    log::debug!("installing {} data set(s)", data.data_sets.len());
    view.set_data(data);
}
