//! # Benchmarking
//!
//! Solves generated problems of increasing size repeatedly, measuring time and memory of every
//! run. Each run generates its own problem and builds its own tableau; nothing is shared between
//! runs.
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::algorithm::simplex::solve;
use crate::algorithm::simplex::tableau::Tableau;
use crate::algorithm::TerminalState;
use crate::benchmark::config::BenchmarkConfig;
use crate::benchmark::statistics::SizeStatistics;
use crate::data::linear_program::network::transportation::generator::generate;
use crate::data::linear_program::solution::extract_solution_with_tolerance;
use crate::io::error::InconsistencyError;

pub mod compare;
pub mod config;
pub mod memory;
pub mod statistics;

/// Measurements of a single run.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RunRecord {
    /// Number of the run within its size, starting at 1.
    pub run: usize,
    /// Generation, construction, solve and extraction, in seconds.
    pub total_seconds: f64,
    /// Tableau construction, in seconds.
    pub build_seconds: f64,
    /// Simplex method, in seconds.
    pub solve_seconds: f64,
    /// Growth of the peak resident memory of the process during the run.
    pub memory_mb: f64,
    /// Number of pivots.
    pub iterations: usize,
    /// Cost of the extracted solution.
    pub total_cost: f64,
    /// How the simplex method ended.
    pub status: TerminalState,
    /// Memory occupied by the tableau values.
    pub tableau_mb: f64,
}

/// All runs of one problem size.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SizeResult {
    /// Size written as `MxN`.
    pub size: String,
    /// Number of sources.
    pub m: usize,
    /// Number of destinations.
    pub n: usize,
    /// Number of runs.
    pub repetitions: usize,
    /// Measurements, in the order the runs were made.
    pub runs: Vec<RunRecord>,
    /// Aggregate of the runs.
    pub statistics: SizeStatistics,
}

/// Run all configured sizes in order.
///
/// The configuration is assumed to be valid, see `BenchmarkConfig::validate`.
pub fn run(config: &BenchmarkConfig) -> Result<Vec<SizeResult>, InconsistencyError> {
    config.sizes.iter()
        .map(|&(m, n)| run_size(m, n, config))
        .collect()
}

/// Run one size `repetitions` times.
///
/// Run `k` (counting from 1) solves the problem generated with seed `base_seed + k - 1`.
pub fn run_size(m: usize, n: usize, config: &BenchmarkConfig) -> Result<SizeResult, InconsistencyError> {
    let runs = (1..=config.repetitions)
        .map(|run| single_run(m, n, run, config))
        .collect::<Result<Vec<_>, _>>()?;
    let statistics = SizeStatistics::of(&runs);

    info!(
        size = %format!("{}x{}", m, n),
        mean_seconds = statistics.total_seconds.mean,
        std_dev_seconds = statistics.total_seconds.std_dev,
        mean_iterations = statistics.iterations.mean,
        mean_memory_mb = statistics.memory_mb.mean,
        "benchmarked size"
    );

    Ok(SizeResult {
        size: format!("{}x{}", m, n),
        m,
        n,
        repetitions: config.repetitions,
        runs,
        statistics,
    })
}

fn single_run(
    m: usize,
    n: usize,
    run: usize,
    config: &BenchmarkConfig,
) -> Result<RunRecord, InconsistencyError> {
    let seed = config.base_seed.wrapping_add(run as u64 - 1);
    let settings = config.solver_settings();
    let memory_before = memory::peak_resident_megabytes();
    let total_timer = Instant::now();

    let problem = generate(m, n, seed)?;

    let build_timer = Instant::now();
    let mut tableau = Tableau::new(&problem);
    let build_seconds = build_timer.elapsed().as_secs_f64();

    let solve_timer = Instant::now();
    let (status, iterations) = solve(&mut tableau, settings.max_iterations);
    let solve_seconds = solve_timer.elapsed().as_secs_f64();

    let (_, total_cost) = extract_solution_with_tolerance(&tableau, m, n, settings.tolerance);
    let total_seconds = total_timer.elapsed().as_secs_f64();
    let memory_mb = memory::growth(memory_before, memory::peak_resident_megabytes());

    debug!(run, seed, iterations, %status, total_cost, total_seconds, "run finished");

    Ok(RunRecord {
        run,
        total_seconds,
        build_seconds,
        solve_seconds,
        memory_mb,
        iterations,
        total_cost,
        status,
        tableau_mb: memory::megabytes(tableau.size_in_bytes()),
    })
}
