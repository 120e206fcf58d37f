//! # Results Plotter
//! Turns benchmark results tables into comparison charts.
//!
//! A results table (`algorithm,n,avg_time_ms,avg_ops`) is loaded, split into two algorithm
//! groups and drawn as a log-log runtime chart and a linear operation-count chart.
//! See [`pipeline::run_pipeline`] for the entry point used by the command line tools.

/// Chart models and PNG rendering.
pub mod chart;

/// The shared load → partition → render pipeline and its configuration.
pub mod pipeline;

/// Results table model, loading and partitioning.
pub mod results;

/// Per-algorithm summary tables.
pub mod summary;

pub mod prelude {
    pub use crate::chart::{ChartStyle, Figure, PlotError};
    pub use crate::pipeline::{run_pipeline, PipelineConfig, PipelineError, PipelineReport};
    pub use crate::results::{
        load_results, partition, AlgorithmGroup, LoadError, PartitionRule, ResultRow, ResultSet,
    };
    pub use crate::summary::{format_summary_table, GroupSummary};
}
