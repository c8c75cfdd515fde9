//! # Error reporting
//!
//! A collection of enums describing any problems encountered while describing a transportation
//! problem, reading a benchmark configuration or writing and reading benchmark reports.
//!
//! Neither an unbounded problem nor an exhausted iteration limit is an error; those are terminal
//! states of the simplex method, see `algorithm::TerminalState`.
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// An `InconsistencyError` is returned when a transportation problem is inconsistently described.
///
/// No tableau is ever built from such data.
#[derive(Error, Debug, Eq, PartialEq)]
pub enum InconsistencyError {
    /// There should be at least one source.
    #[error("problem has no sources")]
    NoSources,
    /// There should be at least one destination.
    #[error("problem has no destinations")]
    NoDestinations,
    /// The cost matrix should have a row for each source.
    #[error("cost matrix has {found} rows, expected one per source ({expected})")]
    CostRows {
        /// Number of sources.
        expected: usize,
        /// Number of rows in the cost matrix.
        found: usize,
    },
    /// Each row of the cost matrix should have an entry for each destination.
    #[error("cost row {row} has {found} entries, expected one per destination ({expected})")]
    CostColumns {
        /// Index of the offending row.
        row: usize,
        /// Number of destinations.
        expected: usize,
        /// Number of entries in that row.
        found: usize,
    },
    /// Supply quantities should be positive.
    #[error("supply of source {0} is zero")]
    ZeroSupply(usize),
    /// Demand quantities should be positive.
    #[error("demand of destination {0} is zero")]
    ZeroDemand(usize),
    /// Total supply and total demand should be equal.
    #[error("problem is not balanced: total supply {supply} differs from total demand {demand}")]
    Unbalanced {
        /// Sum of all supply quantities.
        supply: u64,
        /// Sum of all demand quantities.
        demand: u64,
    },
}

/// A `ConfigError` is returned when a benchmark configuration can't be read or makes no sense.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file couldn't be read.
    #[error("could not read configuration file {path:?}: {source}")]
    Read {
        /// Location of the configuration file.
        path: PathBuf,
        /// Underlying cause.
        source: io::Error,
    },
    /// The configuration file is not valid YAML for a configuration.
    #[error("could not parse configuration: {0}")]
    Parse(#[from] serde_yaml::Error),
    /// A size could not be read from a `MxN` string.
    #[error("could not read problem size from \"{0}\", expected a value like \"10x10\"")]
    Size(String),
    /// The values are readable, but don't describe a benchmark that can be run.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// A `ReportError` is returned when a benchmark report can't be written or read.
#[derive(Error, Debug)]
pub enum ReportError {
    /// The file system refused an operation.
    #[error("could not access report {path:?}: {source}")]
    IO {
        /// Location of the report.
        path: PathBuf,
        /// Underlying cause.
        source: io::Error,
    },
    /// A report could not be serialized to or deserialized from JSON.
    #[error("malformed JSON report: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod test {
    use crate::io::error::InconsistencyError;

    #[test]
    fn messages() {
        assert_eq!(
            InconsistencyError::Unbalanced { supply: 10, demand: 12 }.to_string(),
            "problem is not balanced: total supply 10 differs from total demand 12",
        );
        assert_eq!(
            InconsistencyError::CostColumns { row: 1, expected: 3, found: 2 }.to_string(),
            "cost row 1 has 2 entries, expected one per destination (3)",
        );
    }
}
