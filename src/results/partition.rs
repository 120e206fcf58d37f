//! Splitting a results table into per-algorithm groups
//!
//! Two labels are recognised per run. How rows carrying any other label are treated is
//! controlled by [`PartitionRule`].

use super::row::{ResultRow, ResultSet};

/// Decides which group a row with an unrecognised label lands in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PartitionRule {
    /// Rows go to a group only when their label matches it exactly.
    /// Rows with other labels are left out and reported in [`Partition::unrecognized`].
    #[default]
    Exact,

    /// Rows matching the first label go to the first group, every other row goes to the second.
    FirstVersusRest,
}

/// One observation of an [`AlgorithmGroup`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroupPoint {
    pub n: i64,
    pub avg_time_ms: f64,
    pub avg_ops: i64,
}

impl From<&ResultRow> for GroupPoint {
    fn from(row: &ResultRow) -> Self {
        Self {
            n: row.n,
            avg_time_ms: row.avg_time_ms,
            avg_ops: row.avg_ops,
        }
    }
}

/// The rows of a results table sharing one algorithm label, in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlgorithmGroup {
    pub label: String,
    pub points: Vec<GroupPoint>,
}

impl AlgorithmGroup {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            points: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Result of [`partition`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Partition {
    pub first: AlgorithmGroup,
    pub second: AlgorithmGroup,
    /// Distinct labels that matched neither group, in order of first appearance.
    /// Always empty under [`PartitionRule::FirstVersusRest`].
    pub unrecognized: Vec<String>,
    /// Number of rows carrying one of the [`Self::unrecognized`] labels.
    pub unrecognized_rows: usize,
}

/// Splits `results` into the groups for `first_label` and `second_label`.
///
/// Row order within each group matches the order in `results`; repeated `n` values are kept
/// as separate points. If both labels are equal, matching rows go to the first group.
pub fn partition(
    results: &ResultSet,
    first_label: &str,
    second_label: &str,
    rule: PartitionRule,
) -> Partition {
    let mut partition = Partition {
        first: AlgorithmGroup::new(first_label),
        second: AlgorithmGroup::new(second_label),
        ..Default::default()
    };

    for row in results {
        let label = row.algorithm.as_str();
        if label == first_label {
            partition.first.points.push(row.into());
            continue;
        }

        match rule {
            PartitionRule::FirstVersusRest => partition.second.points.push(row.into()),
            PartitionRule::Exact if label == second_label => {
                partition.second.points.push(row.into())
            }
            PartitionRule::Exact => {
                partition.unrecognized_rows += 1;
                if !partition.unrecognized.iter().any(|known| known == label) {
                    partition.unrecognized.push(label.to_string());
                }
            }
        }
    }

    tracing::debug!(
        first = partition.first.len(),
        second = partition.second.len(),
        unrecognized = partition.unrecognized_rows,
        "partitioned results"
    );
    partition
}
