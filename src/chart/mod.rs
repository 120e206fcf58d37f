//! Comparison charts
//!
//! This module provides:
//! - [`ChartStyle`] presets for chart text and size
//! - The [`Figure`] model of a single chart
//! - Rendering of figures to PNG files

pub mod figure;
pub mod render;
pub mod style;

pub use figure::{AxisScale, Figure, Marker, Series};
pub use render::{
    ensure_drawable, render_figure, render_ops_chart, render_runtime_chart, PlotError,
};
pub use style::{ChartStyle, ChartText};
