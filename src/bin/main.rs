use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use transport_simplex::algorithm::simplex::{DEFAULT_MAX_ITERATIONS, solve_problem, SolverSettings};
use transport_simplex::benchmark::{run, SizeResult};
use transport_simplex::benchmark::compare::compare;
use transport_simplex::benchmark::config::{BenchmarkConfig, parse_size};
use transport_simplex::data::linear_program::network::transportation::generator::generate;
use transport_simplex::io::report::{read_json, write_reports};

/// Dense tableau simplex for balanced transportation problems.
#[derive(Parser)]
#[command(name = "transport-simplex", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve generated problems of several sizes repeatedly and write JSON and CSV reports
    Bench {
        /// YAML file with the benchmark configuration
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Number of runs per size
        #[arg(short, long)]
        repetitions: Option<usize>,

        /// Problem size like 10x10, may be repeated; replaces the configured sizes
        #[arg(short, long = "size", value_parser = parse_size)]
        sizes: Vec<(usize, usize)>,

        /// Directory to write the reports to
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Label in the report file names
        #[arg(short, long)]
        label: Option<String>,
    },

    /// Generate and solve a single problem
    Solve {
        /// Number of sources
        #[arg(long)]
        m: usize,

        /// Number of destinations
        #[arg(long)]
        n: usize,

        /// Seed of the problem generator
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Give up after this many pivots
        #[arg(long, default_value_t = DEFAULT_MAX_ITERATIONS)]
        max_iterations: usize,

        /// Show the tableau before every pivot
        #[arg(short, long)]
        verbose: bool,
    },

    /// Compare the mean time and memory of two JSON reports, size by size
    Compare {
        /// Report of the reference implementation
        baseline: PathBuf,

        /// Report of the implementation being compared
        candidate: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let verbose = matches!(cli.command, Commands::Solve { verbose: true, .. });
    let environment = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::registry()
        .with(log_filter(environment.as_deref(), verbose)?)
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Commands::Bench { config, repetitions, sizes, output_dir, label } => {
            let mut config = match config {
                Some(path) => BenchmarkConfig::from_file(&path)?,
                None => BenchmarkConfig::default(),
            };
            if let Some(repetitions) = repetitions {
                config.repetitions = repetitions;
            }
            if !sizes.is_empty() {
                config.sizes = sizes;
            }
            if let Some(output_dir) = output_dir {
                config.output_dir = output_dir;
            }
            if let Some(label) = label {
                config.label = label;
            }
            config.validate()?;

            let results = run(&config).context("could not generate a problem")?;
            let paths = write_reports(&config.output_dir, &config.label, &results)?;
            info!(json = %paths.json.display(), csv = %paths.csv.display(), "reports written");

            print_summary(&results);
        },
        Commands::Solve { m, n, seed, max_iterations, verbose: _ } => {
            let problem = generate(m, n, seed)?;
            let settings = SolverSettings { max_iterations, ..SolverSettings::default() };
            let solution = solve_problem(&problem, &settings);

            println!("{}", solution);
        },
        Commands::Compare { baseline, candidate } => {
            let baseline_results = read_json(&baseline)
                .with_context(|| format!("could not read baseline {}", baseline.display()))?;
            let candidate_results = read_json(&candidate)
                .with_context(|| format!("could not read candidate {}", candidate.display()))?;

            println!(
                "{:<10} {:>12} {:>12} {:>10} {:>10}",
                "Size", "Baseline (s)", "Candidate (s)", "Speedup", "Memory",
            );
            for comparison in compare(&baseline_results, &candidate_results) {
                println!("{}", comparison);
            }
        },
    }

    Ok(())
}

const DEFAULT_FILTER: &str = "transport_simplex=info";
/// Shows every pivot together with the tableau it is applied to.
const VERBOSE_FILTER: &str = "transport_simplex=trace";

/// Directives from the environment, or the default ones if those are absent or malformed.
///
/// Verbosity is added on top, so that it isn't lost when the environment sets a filter.
fn log_filter(environment: Option<&str>, verbose: bool) -> anyhow::Result<EnvFilter> {
    let filter = environment
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER));

    if verbose {
        Ok(filter.add_directive(VERBOSE_FILTER.parse()?))
    } else {
        Ok(filter)
    }
}

fn print_summary(results: &[SizeResult]) {
    println!("{:<10} {:>14} {:>12} {:>12}", "Size", "Mean time (s)", "Iterations", "Memory (MB)");
    for result in results {
        let statistics = &result.statistics;
        println!(
            "{:<10} {:>14.6} {:>12.0} {:>12.2}",
            result.size,
            statistics.total_seconds.mean,
            statistics.iterations.mean,
            statistics.memory_mb.mean,
        );
    }
}

#[cfg(test)]
mod test {
    use tracing::level_filters::LevelFilter;

    use crate::log_filter;

    #[test]
    fn default_filter() {
        let filter = log_filter(None, false).unwrap();
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn verbose_overrides_environment() {
        let filter = log_filter(Some("warn"), true).unwrap();
        assert!(filter.to_string().contains("transport_simplex=trace"));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::TRACE));

        let filter = log_filter(Some("warn"), false).unwrap();
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::WARN));
    }
}
