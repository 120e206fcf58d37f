//! Per-algorithm summary table printed after a run
//!
//! Formatting uses the [`tabled`] crate, one row per algorithm group.

use crate::results::AlgorithmGroup;
use tabled::{Table, Tabled};

/// Overview of one algorithm group.
#[derive(Debug, Clone, PartialEq, Tabled)]
pub struct GroupSummary {
    #[tabled(rename = "Algorithm")]
    pub algorithm: String,
    #[tabled(rename = "Points")]
    pub points: usize,
    #[tabled(rename = "Min n")]
    pub min_n: String,
    #[tabled(rename = "Max n")]
    pub max_n: String,
    #[tabled(rename = "Max time (ms)")]
    pub max_time_ms: String,
    #[tabled(rename = "Max ops")]
    pub max_ops: String,
}

/// Summarizes a group. Ranges of an empty group are shown as `-`.
pub fn summarize(group: &AlgorithmGroup) -> GroupSummary {
    let display = |value: Option<String>| value.unwrap_or_else(|| "-".to_string());
    let points = &group.points;

    GroupSummary {
        algorithm: group.label.clone(),
        points: points.len(),
        min_n: display(points.iter().map(|p| p.n).min().map(|n| n.to_string())),
        max_n: display(points.iter().map(|p| p.n).max().map(|n| n.to_string())),
        max_time_ms: display(
            points
                .iter()
                .map(|p| p.avg_time_ms)
                .reduce(f64::max)
                .map(|t| format!("{:.3}", t)),
        ),
        max_ops: display(points.iter().map(|p| p.avg_ops).max().map(|o| o.to_string())),
    }
}

/// Formats summaries as an ASCII table with a title line.
pub fn format_summary_table(summaries: &[GroupSummary]) -> String {
    const TITLE: &str = "Benchmark Summary";

    if summaries.is_empty() {
        return "No algorithm groups to summarize".to_string();
    }

    let table = Table::new(summaries).to_string();
    format!("{}\n{}\n{}", TITLE, "=".repeat(TITLE.len()), table)
}
