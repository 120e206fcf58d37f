//! Loading of benchmark results tables
//!
//! The table is comma separated with a header row. Columns are matched by name, so
//! `algorithm,n,avg_time_ms,avg_ops` may appear in any order and extra columns are ignored.

use super::row::{ResultRow, ResultSet};
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading a results table
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read results file {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed row{}: {reason}", .line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    MalformedRow { line: Option<u64>, reason: String },

    #[error("Failed to read CSV data: {0}")]
    Csv(#[from] csv::Error),
}

type Result<T> = core::result::Result<T, LoadError>;

/// Loads the results table at `path`.
///
/// # Arguments
/// * `path` - Path to the CSV file produced by the benchmark harness
///
/// # Returns
/// * `Ok(ResultSet)` - All rows in file order
/// * `Err(LoadError)` - If the file could not be opened or a row could not be converted
pub fn load_results(path: &Path) -> Result<ResultSet> {
    let file = File::open(path).map_err(|source| LoadError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let results = parse_results(file)?;
    tracing::debug!(path = %path.display(), rows = results.len(), "loaded results table");
    Ok(results)
}

/// Parses a results table from any reader.
pub fn parse_results<R: Read>(reader: R) -> Result<ResultSet> {
    let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);

    let mut rows = Vec::new();
    for record in reader.deserialize::<ResultRow>() {
        rows.push(record.map_err(classify_csv_error)?);
    }

    Ok(ResultSet::new(rows))
}

/// Separates per-row conversion failures from I/O and other reader failures.
fn classify_csv_error(err: csv::Error) -> LoadError {
    let line = err.position().map(|pos| pos.line());
    let reason = match err.kind() {
        csv::ErrorKind::Deserialize { err: de, .. } => Some(de.to_string()),
        csv::ErrorKind::UnequalLengths {
            expected_len, len, ..
        } => Some(format!("expected {} fields, found {}", expected_len, len)),
        _ => None,
    };

    match reason {
        Some(reason) => LoadError::MalformedRow { line, reason },
        None => LoadError::Csv(err),
    }
}
