//! Run configuration for the plotting pipeline
//!
//! Both command line tools describe their run with a [`PipelineConfig`] and hand it to
//! [`run_pipeline`](super::run_pipeline); they differ only in paths and chart presentation.

use crate::chart::ChartStyle;
use crate::results::PartitionRule;
use std::path::{Path, PathBuf};

/// File name of the log-log runtime chart.
pub const RUNTIME_CHART_FILE: &str = "time_loglog.png";

/// File name of the operation-count chart.
pub const OPS_CHART_FILE: &str = "ops.png";

/// Results table read by the fixed-path tool, relative to its working directory.
pub const FIXED_RESULTS_FILE: &str = "results/results.csv";

/// Chart directory of the local results archive.
pub const FIXED_PLOTS_DIR: &str = "results/plots";

/// Directory the written report includes its images from.
pub const FIXED_REPORT_DIR: &str = "report";

/// Algorithm labels written by the benchmark harness.
pub const DEFAULT_LABELS: [&str; 2] = ["greedy", "dnc"];

/// Everything a single pipeline run needs.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    /// Results table to load.
    pub input: PathBuf,
    /// Paths the runtime chart is written to.
    pub runtime_destinations: Vec<PathBuf>,
    /// Paths the operation-count chart is written to.
    pub ops_destinations: Vec<PathBuf>,
    /// The two recognised algorithm labels; the first is drawn as series A.
    pub labels: [String; 2],
    pub rule: PartitionRule,
    pub style: ChartStyle,
}

impl PipelineConfig {
    /// Reads `input` and writes one copy of each chart into `out_dir`.
    pub fn path_configurable(input: impl Into<PathBuf>, out_dir: impl AsRef<Path>) -> Self {
        let out_dir = out_dir.as_ref();
        Self {
            input: input.into(),
            runtime_destinations: vec![out_dir.join(RUNTIME_CHART_FILE)],
            ops_destinations: vec![out_dir.join(OPS_CHART_FILE)],
            labels: DEFAULT_LABELS.map(str::to_string),
            rule: PartitionRule::Exact,
            style: ChartStyle::compact(),
        }
    }

    /// Reads `results/results.csv` and writes each chart to both `results/plots/` and
    /// `report/`, all relative to the working directory.
    pub fn fixed_paths() -> Self {
        Self::fixed_paths_in(Path::new(""))
    }

    /// Same layout as [`Self::fixed_paths`], rooted at `root` instead of the working directory.
    pub fn fixed_paths_in(root: &Path) -> Self {
        let plots_dir = root.join(FIXED_PLOTS_DIR);
        let report_dir = root.join(FIXED_REPORT_DIR);
        Self {
            input: root.join(FIXED_RESULTS_FILE),
            runtime_destinations: vec![
                plots_dir.join(RUNTIME_CHART_FILE),
                report_dir.join(RUNTIME_CHART_FILE),
            ],
            ops_destinations: vec![plots_dir.join(OPS_CHART_FILE), report_dir.join(OPS_CHART_FILE)],
            labels: DEFAULT_LABELS.map(str::to_string),
            rule: PartitionRule::Exact,
            style: ChartStyle::report(),
        }
    }

    pub fn with_labels(mut self, first: impl Into<String>, second: impl Into<String>) -> Self {
        self.labels = [first.into(), second.into()];
        self
    }

    pub fn with_rule(mut self, rule: PartitionRule) -> Self {
        self.rule = rule;
        self
    }

    pub fn with_style(mut self, style: ChartStyle) -> Self {
        self.style = style;
        self
    }
}
