//! # Aggregation of repeated runs
use enum_map::EnumMap;
use itertools::{Itertools, MinMaxResult};
use serde::{Deserialize, Serialize};

use crate::algorithm::TerminalState;
use crate::benchmark::RunRecord;

/// Descriptive statistics of a sample.
#[derive(Serialize, Deserialize, Copy, Clone, Debug, Default, PartialEq)]
pub struct Summary {
    /// Arithmetic mean.
    pub mean: f64,
    /// Middle value, or the average of the two middle values for an even number of samples.
    pub median: f64,
    /// Sample standard deviation, zero for fewer than two samples.
    pub std_dev: f64,
    /// Smallest value.
    pub min: f64,
    /// Largest value.
    pub max: f64,
}

impl Summary {
    /// Summarize a sample; all statistics of an empty sample are zero.
    pub fn of(values: &[f64]) -> Self {
        let count = values.len();
        let (min, max) = match values.iter().copied().minmax_by(f64::total_cmp) {
            MinMaxResult::NoElements => return Self::default(),
            MinMaxResult::OneElement(value) => (value, value),
            MinMaxResult::MinMax(min, max) => (min, max),
        };

        let mean = values.iter().sum::<f64>() / count as f64;
        let sorted = values.iter().copied().sorted_by(f64::total_cmp).collect::<Vec<_>>();
        let median = if count % 2 == 1 {
            sorted[count / 2]
        } else {
            (sorted[count / 2 - 1] + sorted[count / 2]) / 2_f64
        };
        let std_dev = if count < 2 {
            0_f64
        } else {
            let sum_of_squares = values.iter().map(|value| (value - mean).powi(2)).sum::<f64>();
            (sum_of_squares / (count - 1) as f64).sqrt()
        };

        Self { mean, median, std_dev, min, max }
    }
}

/// Statistics over all runs of one problem size.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SizeStatistics {
    /// Generation, construction, solve and extraction together, in seconds.
    pub total_seconds: Summary,
    /// Solve only, in seconds.
    pub solve_seconds: Summary,
    /// Growth of peak resident memory, in megabytes.
    pub memory_mb: Summary,
    /// Number of pivots.
    pub iterations: Summary,
    /// Number of runs that ended in each terminal state.
    pub terminal_states: EnumMap<TerminalState, usize>,
}

impl SizeStatistics {
    /// Aggregate a set of runs.
    pub fn of(runs: &[RunRecord]) -> Self {
        let summarize = |field: fn(&RunRecord) -> f64| {
            Summary::of(&runs.iter().map(field).collect::<Vec<_>>())
        };

        let mut terminal_states = EnumMap::default();
        for run in runs {
            terminal_states[run.status] += 1;
        }

        Self {
            total_seconds: summarize(|run| run.total_seconds),
            solve_seconds: summarize(|run| run.solve_seconds),
            memory_mb: summarize(|run| run.memory_mb),
            iterations: summarize(|run| run.iterations as f64),
            terminal_states,
        }
    }
}
