//! Text and sizing presets for the two comparison charts

/// Titles, axis descriptions and legend labels for one chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartText {
    pub title: String,
    pub x_desc: String,
    pub y_desc: String,
    /// Legend labels for the first and second algorithm group.
    pub series: [String; 2],
}

impl ChartText {
    fn new(title: &str, x_desc: &str, y_desc: &str, series: [&str; 2]) -> Self {
        Self {
            title: title.to_string(),
            x_desc: x_desc.to_string(),
            y_desc: y_desc.to_string(),
            series: series.map(str::to_string),
        }
    }
}

/// Presentation settings shared by the runtime and operation-count charts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartStyle {
    /// Image size in pixels (width, height).
    pub size: (u32, u32),
    pub runtime: ChartText,
    pub operations: ChartText,
}

impl ChartStyle {
    /// Small charts for ad-hoc inspection of a results file.
    pub fn compact() -> Self {
        Self {
            size: (1200, 800),
            runtime: ChartText::new(
                "Runtime vs n (log-log)",
                "n (log scale)",
                "avg time (ms, log scale)",
                ["Greedy (time)", "D&C (time)"],
            ),
            operations: ChartText::new(
                "Operation counts vs n",
                "n",
                "avg ops (count)",
                ["Greedy (ops)", "D&C (queries)"],
            ),
        }
    }

    /// High resolution charts meant for inclusion in the written report.
    pub fn report() -> Self {
        Self {
            size: (2400, 1800),
            runtime: ChartText::new(
                "Algorithm Runtime Comparison",
                "Input Size n (log scale)",
                "Average Runtime (ms, log scale)",
                ["Greedy O(n)", "Binary Search O(log n)"],
            ),
            operations: ChartText::new(
                "Operation Count Verification",
                "Input Size n",
                "Average Operations Count",
                ["Greedy Operations", "Binary Search Queries"],
            ),
        }
    }
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self::compact()
    }
}
