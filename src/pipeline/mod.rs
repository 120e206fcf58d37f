//! The load → partition → render pipeline shared by both command line tools
//!
//! Loading, partitioning and figure validation all complete before the first image is
//! written, so an input error or an empty results table leaves no output files behind.

pub mod config;

pub use config::PipelineConfig;

use crate::chart::{ensure_drawable, render_figure, Figure, PlotError};
use crate::results::{load_results, partition, LoadError};
use crate::summary::{summarize, GroupSummary};
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can stop a pipeline run
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Input error: {0}")]
    Input(#[from] LoadError),

    #[error("Render error: {0}")]
    Render(#[from] PlotError),
}

type Result<T> = core::result::Result<T, PipelineError>;

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineReport {
    /// Every written image, runtime chart copies first.
    pub written: Vec<PathBuf>,
    /// Summaries of the first and second algorithm group.
    pub summaries: Vec<GroupSummary>,
    /// Labels that matched neither recognised algorithm.
    pub unrecognized: Vec<String>,
}

/// Runs the pipeline described by `config`.
///
/// # Returns
/// * `Ok(PipelineReport)` - If both charts were written to all of their destinations
/// * `Err(PipelineError)` - If loading or rendering failed
pub fn run_pipeline(config: &PipelineConfig) -> Result<PipelineReport> {
    let results = load_results(&config.input)?;

    let [first_label, second_label] = &config.labels;
    let groups = partition(&results, first_label, second_label, config.rule);
    if !groups.unrecognized.is_empty() {
        tracing::warn!(
            labels = ?groups.unrecognized,
            rows = groups.unrecognized_rows,
            "ignoring rows with unrecognized algorithm labels"
        );
    }

    let runtime = Figure::runtime(&groups.first, &groups.second, &config.style);
    let operations = Figure::operations(&groups.first, &groups.second, &config.style);
    ensure_drawable(&runtime)?;
    ensure_drawable(&operations)?;

    let mut written = render_figure(&runtime, &config.runtime_destinations)?;
    written.extend(render_figure(&operations, &config.ops_destinations)?);

    Ok(PipelineReport {
        written,
        summaries: vec![summarize(&groups.first), summarize(&groups.second)],
        unrecognized: groups.unrecognized,
    })
}
