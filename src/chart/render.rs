//! Drawing of [`Figure`]s to PNG files
//!
//! Charts are drawn with the [`plotters`] bitmap backend. Every destination gets a freshly
//! created drawing area; nothing is carried over between charts or destinations.

use super::figure::{AxisScale, Figure, Marker};
use super::style::ChartStyle;
use crate::results::AlgorithmGroup;
use plotters::coord::ranged1d::{AsRangedCoord, ValueFormatter};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Line colours of the first and second series.
const SERIES_COLORS: [RGBColor; 2] = [RGBColor(31, 119, 180), RGBColor(255, 127, 14)];

/// Errors that can occur during chart rendering
#[derive(Error, Debug)]
pub enum PlotError {
    #[error("Nothing to plot: neither algorithm group has a drawable point")]
    NothingToPlot,

    #[error("Failed to create output directory {}: {source}", .path.display())]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create drawing area: {0}")]
    DrawingArea(String),

    #[error("Failed to configure chart: {0}")]
    ChartConfig(String),

    #[error("Failed to draw chart elements: {0}")]
    Drawing(String),
}

type Result<T> = core::result::Result<T, PlotError>;

/// Renders the log-log runtime chart of two algorithm groups to every path in `destinations`.
///
/// An empty group is drawn as an empty series. Fails with [`PlotError::NothingToPlot`] if the
/// groups hold no point that fits on log axes.
///
/// # Returns
/// The written paths, in destination order.
pub fn render_runtime_chart(
    first: &AlgorithmGroup,
    second: &AlgorithmGroup,
    style: &ChartStyle,
    destinations: &[PathBuf],
) -> Result<Vec<PathBuf>> {
    render_figure(&Figure::runtime(first, second, style), destinations)
}

/// Renders the linear operation-count chart of two algorithm groups to every path in
/// `destinations`. Same contract as [`render_runtime_chart`].
pub fn render_ops_chart(
    first: &AlgorithmGroup,
    second: &AlgorithmGroup,
    style: &ChartStyle,
    destinations: &[PathBuf],
) -> Result<Vec<PathBuf>> {
    render_figure(&Figure::operations(first, second, style), destinations)
}

/// Fails with [`PlotError::NothingToPlot`] if `figure` has no points.
pub fn ensure_drawable(figure: &Figure) -> Result<()> {
    if figure.is_empty() {
        return Err(PlotError::NothingToPlot);
    }

    Ok(())
}

/// Draws `figure` to each destination, overwriting existing files.
///
/// All missing parent directories are created before the first image is drawn.
/// A `Saved <path>` line is printed for every written file.
pub fn render_figure(figure: &Figure, destinations: &[PathBuf]) -> Result<Vec<PathBuf>> {
    ensure_drawable(figure)?;

    for destination in destinations {
        create_parent_dir(destination)?;
    }

    let mut written = Vec::with_capacity(destinations.len());
    for destination in destinations {
        draw_to_file(figure, destination)?;
        println!("Saved {}", destination.display());
        written.push(destination.clone());
    }

    tracing::info!(chart = %figure.title, files = written.len(), "rendered chart");
    Ok(written)
}

fn create_parent_dir(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => std::fs::create_dir_all(parent)
            .map_err(|source| PlotError::CreateDirectory {
                path: parent.to_path_buf(),
                source,
            }),
        _ => Ok(()),
    }
}

fn draw_to_file(figure: &Figure, output_path: &Path) -> Result<()> {
    let (x_range, y_range) = match (figure.x_range(), figure.y_range()) {
        (Some(x_range), Some(y_range)) => (x_range, y_range),
        _ => return Err(PlotError::NothingToPlot),
    };

    let root = BitMapBackend::new(output_path, figure.size);
    let drawing_area = root.into_drawing_area();

    drawing_area
        .fill(&WHITE)
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

    // Log and linear ranges are distinct coordinate types, so each combination gets its own call.
    match (figure.x_scale, figure.y_scale) {
        (AxisScale::Linear, AxisScale::Linear) => {
            draw_chart(figure, &drawing_area, x_range, y_range)?
        }
        (AxisScale::Linear, AxisScale::Log) => {
            draw_chart(figure, &drawing_area, x_range, y_range.log_scale())?
        }
        (AxisScale::Log, AxisScale::Linear) => {
            draw_chart(figure, &drawing_area, x_range.log_scale(), y_range)?
        }
        (AxisScale::Log, AxisScale::Log) => draw_chart(
            figure,
            &drawing_area,
            x_range.log_scale(),
            y_range.log_scale(),
        )?,
    }

    drawing_area
        .present()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    Ok(())
}

fn draw_chart<X, Y>(
    figure: &Figure,
    drawing_area: &DrawingArea<BitMapBackend<'_>, Shift>,
    x_coord: X,
    y_coord: Y,
) -> Result<()>
where
    X: AsRangedCoord<Value = f64>,
    Y: AsRangedCoord<Value = f64>,
    X::CoordDescType: ValueFormatter<f64>,
    Y::CoordDescType: ValueFormatter<f64>,
{
    // Sizes are tuned for an 800px tall image and scaled from there.
    let height = figure.size.1;
    let scaled = |size: u32| size * height / 800;

    let mut chart_context = ChartBuilder::on(drawing_area)
        .caption(&figure.title, ("sans-serif", scaled(40)))
        .margin(scaled(20))
        .x_label_area_size(scaled(60))
        .y_label_area_size(scaled(85))
        .build_cartesian_2d(x_coord, y_coord)
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    chart_context
        .configure_mesh()
        .x_desc(figure.x_desc.as_str())
        .y_desc(figure.y_desc.as_str())
        .axis_desc_style(("sans-serif", scaled(30)))
        .label_style(("sans-serif", scaled(22)))
        .x_label_formatter(&|x| format_tick(*x))
        .y_label_formatter(&|y| format_tick(*y))
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    let line_width = scaled(2).max(1);
    let marker_size = scaled(5).max(2) as i32;

    for (index, series) in figure.series.iter().enumerate() {
        let color = SERIES_COLORS[index % SERIES_COLORS.len()];
        let line_style = color.stroke_width(line_width);
        let fill = color.filled();

        chart_context
            .draw_series(LineSeries::new(series.points.iter().copied(), line_style))
            .map_err(|e| PlotError::Drawing(e.to_string()))?
            .label(series.label.as_str())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], line_style)
            });

        match series.marker {
            Marker::Circle => chart_context.draw_series(
                series
                    .points
                    .iter()
                    .map(|&point| Circle::new(point, marker_size, fill)),
            ),
            Marker::Square => chart_context.draw_series(series.points.iter().map(|&point| {
                EmptyElement::at(point)
                    + Rectangle::new([(-marker_size, -marker_size), (marker_size, marker_size)], fill)
            })),
        }
        .map_err(|e| PlotError::Drawing(e.to_string()))?;
    }

    chart_context
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .label_font(("sans-serif", scaled(22)))
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    Ok(())
}

/// Formats an axis tick value for display.
///
/// Whole numbers print without decimals, fractions with up to three decimals, and very
/// large or very small magnitudes in exponent form.
pub fn format_tick(value: f64) -> String {
    let magnitude = value.abs();

    if magnitude == 0.0 {
        "0".to_string()
    } else if !(1e-3..1e6).contains(&magnitude) {
        format!("{:.0e}", value)
    } else if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        let fixed = format!("{:.3}", value);
        fixed.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}
