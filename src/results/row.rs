//! Benchmark observation types
//!
//! A [`ResultSet`] holds the rows of a results table in file order. It is built once per run
//! and only exposes shared access afterwards.

use serde::{Deserialize, Serialize};

/// A single benchmark observation, one row of the results table.
///
/// Values are passed through exactly as the benchmark harness wrote them; negative sizes or
/// timings are not rejected here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRow {
    /// Label of the benchmarked strategy (e.g. `greedy`, `dnc`).
    pub algorithm: String,
    /// Input size of the observation.
    pub n: i64,
    /// Average runtime in milliseconds.
    pub avg_time_ms: f64,
    /// Average operation (or query) count.
    pub avg_ops: i64,
}

impl ResultRow {
    pub fn new(algorithm: impl Into<String>, n: i64, avg_time_ms: f64, avg_ops: i64) -> Self {
        Self {
            algorithm: algorithm.into(),
            n,
            avg_time_ms,
            avg_ops,
        }
    }
}

/// Ordered rows of a results table. Row order matches the order in the source file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultSet {
    rows: Vec<ResultRow>,
}

impl ResultSet {
    pub fn new(rows: Vec<ResultRow>) -> Self {
        Self { rows }
    }

    /// All rows, in file order.
    pub fn rows(&self) -> &[ResultRow] {
        &self.rows
    }

    pub fn iter(&self) -> core::slice::Iter<'_, ResultRow> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl FromIterator<ResultRow> for ResultSet {
    fn from_iter<I: IntoIterator<Item = ResultRow>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a ResultRow;
    type IntoIter = core::slice::Iter<'a, ResultRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
