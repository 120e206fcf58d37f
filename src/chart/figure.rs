//! Chart data prepared for drawing
//!
//! A [`Figure`] is a standalone value holding everything needed to draw one chart: text,
//! axis scales, pixel size and the two series. Building one never touches the filesystem or
//! any drawing backend, so the data that ends up on a chart can be inspected directly.

use super::style::{ChartStyle, ChartText};
use crate::results::{AlgorithmGroup, GroupPoint};
use core::ops::Range;

/// Padding factor applied to both ends of a logarithmic axis.
const LOG_PADDING: f64 = 1.25;

/// Fraction of the data span added to both ends of a linear axis.
const LINEAR_MARGIN: f64 = 0.05;

/// Scaling of a chart axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisScale {
    Linear,
    /// Base 10 logarithmic scale. Only positive values can be placed on it.
    Log,
}

/// Marker drawn at every point of a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Circle,
    Square,
}

/// One line-with-markers series of a [`Figure`].
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: String,
    pub marker: Marker,
    pub points: Vec<(f64, f64)>,
}

/// A single chart with exactly two series, one per algorithm group.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub title: String,
    pub x_desc: String,
    pub y_desc: String,
    pub x_scale: AxisScale,
    pub y_scale: AxisScale,
    /// Image size in pixels (width, height).
    pub size: (u32, u32),
    pub series: Vec<Series>,
    /// Points left out because a log axis cannot represent them.
    pub dropped_points: usize,
}

impl Figure {
    /// Runtime (`avg_time_ms`) against input size, both axes logarithmic.
    pub fn runtime(first: &AlgorithmGroup, second: &AlgorithmGroup, style: &ChartStyle) -> Self {
        Self::from_groups(
            [first, second],
            &style.runtime,
            style.size,
            (AxisScale::Log, AxisScale::Log),
            |point| (point.n as f64, point.avg_time_ms),
        )
    }

    /// Operation count (`avg_ops`) against input size, both axes linear.
    pub fn operations(first: &AlgorithmGroup, second: &AlgorithmGroup, style: &ChartStyle) -> Self {
        Self::from_groups(
            [first, second],
            &style.operations,
            style.size,
            (AxisScale::Linear, AxisScale::Linear),
            |point| (point.n as f64, point.avg_ops as f64),
        )
    }

    fn from_groups(
        groups: [&AlgorithmGroup; 2],
        text: &ChartText,
        size: (u32, u32),
        (x_scale, y_scale): (AxisScale, AxisScale),
        project: impl Fn(&GroupPoint) -> (f64, f64),
    ) -> Self {
        let markers = [Marker::Circle, Marker::Square];
        let mut dropped_points = 0;

        let series = groups
            .iter()
            .zip(text.series.iter())
            .zip(markers)
            .map(|((group, label), marker)| {
                let points: Vec<(f64, f64)> = group
                    .points
                    .iter()
                    .map(&project)
                    .filter(|&(x, y)| fits_axis(x, x_scale) && fits_axis(y, y_scale))
                    .collect();
                dropped_points += group.points.len() - points.len();

                Series {
                    label: label.clone(),
                    marker,
                    points,
                }
            })
            .collect();

        if dropped_points > 0 {
            tracing::warn!(
                chart = %text.title,
                dropped = dropped_points,
                "left out points that cannot be placed on a logarithmic axis"
            );
        }

        Self {
            title: text.title.clone(),
            x_desc: text.x_desc.clone(),
            y_desc: text.y_desc.clone(),
            x_scale,
            y_scale,
            size,
            series,
            dropped_points,
        }
    }

    /// Total number of points across both series.
    pub fn point_count(&self) -> usize {
        self.series.iter().map(|series| series.points.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.point_count() == 0
    }

    /// Range of the x axis, or [`None`] if the figure has no points.
    pub fn x_range(&self) -> Option<Range<f64>> {
        axis_range(self.points().map(|(x, _)| x), self.x_scale)
    }

    /// Range of the y axis, or [`None`] if the figure has no points.
    pub fn y_range(&self) -> Option<Range<f64>> {
        axis_range(self.points().map(|(_, y)| y), self.y_scale)
    }

    fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.series
            .iter()
            .flat_map(|series| series.points.iter().copied())
    }
}

fn fits_axis(value: f64, scale: AxisScale) -> bool {
    match scale {
        AxisScale::Linear => value.is_finite(),
        AxisScale::Log => value.is_finite() && value > 0.0,
    }
}

/// Computes a padded axis range covering all `values`.
///
/// A range whose minimum equals its maximum is widened so the chart stays drawable:
/// by a factor of 10 on log axes and by 1 in each direction on linear axes.
pub fn axis_range(values: impl Iterator<Item = f64>, scale: AxisScale) -> Option<Range<f64>> {
    let (min, max) = values.fold(None, |bounds: Option<(f64, f64)>, value| match bounds {
        None => Some((value, value)),
        Some((min, max)) => Some((min.min(value), max.max(value))),
    })?;

    let range = match scale {
        AxisScale::Log => {
            let max = if min >= max { min * 10.0 } else { max };
            (min / LOG_PADDING)..(max * LOG_PADDING)
        }
        AxisScale::Linear if min >= max => (min - 1.0)..(max + 1.0),
        AxisScale::Linear => {
            let margin = (max - min) * LINEAR_MARGIN;
            (min - margin)..(max + margin)
        }
    };

    Some(range)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::results::{partition, PartitionRule, ResultRow, ResultSet};

    fn scenario() -> (AlgorithmGroup, AlgorithmGroup) {
        let results: ResultSet = vec![
            ResultRow::new("greedy", 10, 0.1, 10),
            ResultRow::new("greedy", 100, 1.0, 100),
            ResultRow::new("dnc", 10, 0.02, 4),
            ResultRow::new("dnc", 100, 0.03, 7),
        ]
        .into_iter()
        .collect();

        let partition = partition(&results, "greedy", "dnc", PartitionRule::Exact);
        (partition.first, partition.second)
    }

    #[test]
    fn runtime_figure_has_two_log_series() {
        let (greedy, dnc) = scenario();
        let figure = Figure::runtime(&greedy, &dnc, &ChartStyle::compact());

        assert_eq!(figure.x_scale, AxisScale::Log);
        assert_eq!(figure.y_scale, AxisScale::Log);
        assert_eq!(figure.series.len(), 2);
        assert_eq!(figure.series[0].label, "Greedy (time)");
        assert_eq!(figure.series[0].marker, Marker::Circle);
        assert_eq!(figure.series[0].points, vec![(10.0, 0.1), (100.0, 1.0)]);
        assert_eq!(figure.series[1].marker, Marker::Square);
        assert_eq!(figure.series[1].points, vec![(10.0, 0.02), (100.0, 0.03)]);
    }

    #[test]
    fn operations_figure_has_two_linear_series() {
        let (greedy, dnc) = scenario();
        let figure = Figure::operations(&greedy, &dnc, &ChartStyle::report());

        assert_eq!(figure.x_scale, AxisScale::Linear);
        assert_eq!(figure.y_scale, AxisScale::Linear);
        assert_eq!(figure.size, (2400, 1800));
        assert_eq!(figure.series[0].label, "Greedy Operations");
        assert_eq!(figure.series[0].points, vec![(10.0, 10.0), (100.0, 100.0)]);
        assert_eq!(figure.series[1].points, vec![(10.0, 4.0), (100.0, 7.0)]);
    }

    #[test]
    fn empty_group_becomes_empty_series() {
        let (greedy, _) = scenario();
        let missing = AlgorithmGroup::new("dnc");
        let figure = Figure::runtime(&greedy, &missing, &ChartStyle::compact());

        assert_eq!(figure.series.len(), 2);
        assert!(figure.series[1].points.is_empty());
        assert_eq!(figure.point_count(), 2);
        assert!(!figure.is_empty());
    }

    #[test]
    fn log_axes_drop_non_positive_points() {
        let mut group = AlgorithmGroup::new("greedy");
        group.points = vec![
            GroupPoint { n: 0, avg_time_ms: 1.0, avg_ops: 0 },
            GroupPoint { n: 10, avg_time_ms: 0.0, avg_ops: 10 },
            GroupPoint { n: 100, avg_time_ms: 2.0, avg_ops: 100 },
        ];
        let empty = AlgorithmGroup::new("dnc");

        let runtime = Figure::runtime(&group, &empty, &ChartStyle::compact());
        assert_eq!(runtime.series[0].points, vec![(100.0, 2.0)]);
        assert_eq!(runtime.dropped_points, 2);

        let operations = Figure::operations(&group, &empty, &ChartStyle::compact());
        assert_eq!(operations.series[0].points.len(), 3);
        assert_eq!(operations.dropped_points, 0);
    }

    #[test]
    fn figure_without_points_has_no_range() {
        let empty = AlgorithmGroup::new("greedy");
        let figure = Figure::operations(&empty, &empty, &ChartStyle::compact());

        assert!(figure.is_empty());
        assert!(figure.x_range().is_none());
        assert!(figure.y_range().is_none());
    }

    #[test]
    fn log_range_pads_around_data() {
        let range = axis_range([10.0, 1000.0, 100.0].into_iter(), AxisScale::Log).unwrap();
        assert_eq!(range, (10.0 / LOG_PADDING)..(1000.0 * LOG_PADDING));
    }

    #[test]
    fn linear_range_adds_margin() {
        let range = axis_range([0.0, 100.0].into_iter(), AxisScale::Linear).unwrap();
        assert_eq!(range, -5.0..105.0);
    }

    #[test]
    fn single_value_ranges_are_widened() {
        let log = axis_range([5.0].into_iter(), AxisScale::Log).unwrap();
        assert!(log.start < 5.0 && log.end > 50.0);

        let linear = axis_range([7.0].into_iter(), AxisScale::Linear).unwrap();
        assert_eq!(linear, 6.0..8.0);
    }

    #[test]
    fn building_twice_yields_identical_figures() {
        let (greedy, dnc) = scenario();
        let style = ChartStyle::compact();

        assert_eq!(
            Figure::runtime(&greedy, &dnc, &style),
            Figure::runtime(&greedy, &dnc, &style)
        );
    }
}
