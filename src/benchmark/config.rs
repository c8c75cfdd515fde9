//! # Benchmark configuration
//!
//! Read from an optional YAML file; any field that is absent takes its default value. Command line
//! flags are applied on top by the binary.
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::algorithm::simplex::{DEFAULT_MAX_ITERATIONS, SolverSettings};
use crate::data::number_types::float::numerical_precision::DEFAULT_TOLERANCE;
use crate::io::error::ConfigError;

/// What to run and where to write the results.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct BenchmarkConfig {
    /// Problem sizes as (sources, destinations), run in this order.
    pub sizes: Vec<(usize, usize)>,
    /// Number of runs per size.
    pub repetitions: usize,
    /// Seed of the first run of every size; later runs use the following seeds.
    pub base_seed: u64,
    /// Iteration limit of each solve.
    pub max_iterations: usize,
    /// Tolerance used when reading solutions.
    pub tolerance: f64,
    /// Directory that reports are written to.
    pub output_dir: PathBuf,
    /// Part of the report file names identifying this implementation.
    pub label: String,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            sizes: (1..=6).map(|k| (5 * k, 5 * k)).collect(),
            repetitions: 10,
            base_seed: 42,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            tolerance: DEFAULT_TOLERANCE,
            output_dir: PathBuf::from("."),
            label: "rust".to_string(),
        }
    }
}

impl BenchmarkConfig {
    /// Load a configuration from a YAML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)
            .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
        Self::from_yaml(&content)
    }

    /// Parse a configuration from YAML text.
    pub fn from_yaml(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(text)?)
    }

    /// Check that the configuration describes a benchmark that can be run.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sizes.is_empty() {
            return Err(ConfigError::Invalid("no problem sizes given".to_string()));
        }
        if let Some((m, n)) = self.sizes.iter().find(|&&(m, n)| m == 0 || n == 0) {
            return Err(ConfigError::Invalid(format!("size {}x{} has a zero dimension", m, n)));
        }
        if self.repetitions == 0 {
            return Err(ConfigError::Invalid("repetitions should be positive".to_string()));
        }
        if !(self.tolerance >= 0_f64) {
            return Err(ConfigError::Invalid(format!("tolerance {} is not a non-negative number", self.tolerance)));
        }
        if self.label.is_empty() {
            return Err(ConfigError::Invalid("label should not be empty".to_string()));
        }

        Ok(())
    }

    /// Settings of the individual solves.
    pub fn solver_settings(&self) -> SolverSettings {
        SolverSettings {
            max_iterations: self.max_iterations,
            tolerance: self.tolerance,
        }
    }
}

/// Read a problem size written as `MxN`, like `10x20`.
pub fn parse_size(text: &str) -> Result<(usize, usize), ConfigError> {
    let (m, n) = text.trim()
        .split_once(['x', 'X'])
        .ok_or_else(|| ConfigError::Size(text.to_string()))?;
    let parse = |part: &str| part.trim().parse::<usize>()
        .map_err(|_| ConfigError::Size(text.to_string()));

    Ok((parse(m)?, parse(n)?))
}
