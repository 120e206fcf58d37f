//! Benchmark results: the row model, the CSV loader and the per-algorithm partition.

pub mod loader;
pub mod partition;
pub mod row;

pub use loader::{load_results, parse_results, LoadError};
pub use partition::{partition, AlgorithmGroup, GroupPoint, Partition, PartitionRule};
pub use row::{ResultRow, ResultSet};
