//! tempchart
//!
//! A small Rust library for configuring and rendering a temperature/volume
//! scatter chart against time of day. Pairs with the `tempchart` CLI.
//!
//! ### Features
//! - Total tick/value formatters (°F, ml allow-list, multi-line time of day, one decimal)
//! - Fixed-domain axes with "nice" tick placement
//! - Four clinical limit lines on the temperature axis
//! - Data adapter from labelled, coloured points to scatter data sets
//! - SVG output via `plotters`
//!
//! ### Example
//! ```no_run
//! use tempchart::{ChartConfig, ScatterChart, SeriesDescriptor};
//!
//! let values = vec![SeriesDescriptor::new((10.0, 101.3), "Amber", "#355E3B")];
//! let chart = ScatterChart::load(&ChartConfig::default(), &values);
//! tempchart::viz::render_svg(&chart, "fever.svg", 800, 600)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod axis;
pub mod chart;
pub mod color;
pub mod config;
pub mod dataset;
pub mod format;
pub mod models;
pub mod storage;
pub mod viz;

pub use chart::{ChartView, ScatterChart, configure, setup_data};
pub use config::ChartConfig;
pub use models::{Point, SeriesDescriptor};
