//! # Benchmark reports
//!
//! Results are written twice: as a JSON array of sizes, which holds everything including the
//! statistics and can be read back for comparisons, and as a flat CSV file with one line per run.
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::benchmark::SizeResult;
use crate::io::error::ReportError;

/// First line of every CSV report.
pub const CSV_HEADER: &str =
    "size,m,n,run,total_seconds,build_seconds,solve_seconds,memory_mb,iterations,total_cost,status";

/// Locations of the two reports of one benchmark.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReportPaths {
    /// Full results.
    pub json: PathBuf,
    /// One line per run.
    pub csv: PathBuf,
}

impl ReportPaths {
    /// Paths `benchmark_<label>_<timestamp>.json` and `.csv` in `directory`.
    pub fn new(directory: &Path, label: &str, timestamp: &str) -> Self {
        let stem = format!("benchmark_{}_{}", label, timestamp);
        Self {
            json: directory.join(format!("{}.json", stem)),
            csv: directory.join(format!("{}.csv", stem)),
        }
    }
}

/// Current local time formatted for use in file names.
pub fn timestamp() -> String {
    Local::now().format("%Y%m%d_%H%M%S").to_string()
}

/// Write both reports to `directory`, which is created if it doesn't exist.
pub fn write_reports(
    directory: &Path,
    label: &str,
    results: &[SizeResult],
) -> Result<ReportPaths, ReportError> {
    fs::create_dir_all(directory)
        .map_err(|source| ReportError::IO { path: directory.to_path_buf(), source })?;

    let paths = ReportPaths::new(directory, label, &timestamp());
    write_json(&paths.json, results)?;
    write_csv(&paths.csv, results)?;

    Ok(paths)
}

/// Write all results as a pretty-printed JSON array.
pub fn write_json(path: &Path, results: &[SizeResult]) -> Result<(), ReportError> {
    let mut writer = create(path)?;
    serde_json::to_writer_pretty(&mut writer, results)?;
    writeln!(writer).and_then(|_| writer.flush())
        .map_err(|source| ReportError::IO { path: path.to_path_buf(), source })
}

/// Write one line per run.
pub fn write_csv(path: &Path, results: &[SizeResult]) -> Result<(), ReportError> {
    let mut writer = create(path)?;
    write_csv_lines(&mut writer, results)
        .and_then(|_| writer.flush())
        .map_err(|source| ReportError::IO { path: path.to_path_buf(), source })
}

fn write_csv_lines<W: Write>(writer: &mut W, results: &[SizeResult]) -> std::io::Result<()> {
    writeln!(writer, "{}", CSV_HEADER)?;
    for result in results {
        for run in &result.runs {
            writeln!(
                writer,
                "{},{},{},{},{:.6},{:.6},{:.6},{:.2},{},{:.2},{}",
                result.size,
                result.m,
                result.n,
                run.run,
                run.total_seconds,
                run.build_seconds,
                run.solve_seconds,
                run.memory_mb,
                run.iterations,
                run.total_cost,
                run.status,
            )?;
        }
    }

    Ok(())
}

/// Read the results of an earlier benchmark from its JSON report.
pub fn read_json(path: &Path) -> Result<Vec<SizeResult>, ReportError> {
    let file = File::open(path)
        .map_err(|source| ReportError::IO { path: path.to_path_buf(), source })?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}

fn create(path: &Path) -> Result<BufWriter<File>, ReportError> {
    File::create(path)
        .map(BufWriter::new)
        .map_err(|source| ReportError::IO { path: path.to_path_buf(), source })
}

#[cfg(test)]
mod test {
    use std::fs;
    use std::path::{Path, PathBuf};

    use crate::benchmark::config::BenchmarkConfig;
    use crate::benchmark::run_size;
    use crate::io::error::ReportError;
    use crate::io::report::{CSV_HEADER, read_json, ReportPaths, timestamp, write_reports};

    fn scratch_directory(name: &str) -> PathBuf {
        let directory = PathBuf::from(format!("target/test_{}_{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&directory);
        directory
    }

    #[test]
    fn paths() {
        let paths = ReportPaths::new(Path::new("out"), "rust", "20240102_030405");
        assert_eq!(paths.json, PathBuf::from("out/benchmark_rust_20240102_030405.json"));
        assert_eq!(paths.csv, PathBuf::from("out/benchmark_rust_20240102_030405.csv"));
    }

    #[test]
    fn timestamp_format() {
        let value = timestamp();
        assert_eq!(value.len(), 15);
        assert_eq!(value.as_bytes()[8], b'_');
        assert!(value.chars().filter(|&c| c != '_').all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn write_and_read() {
        let directory = scratch_directory("reports");
        let config = BenchmarkConfig { repetitions: 2, ..BenchmarkConfig::default() };
        let results = vec![run_size(2, 2, &config).unwrap(), run_size(3, 2, &config).unwrap()];

        // The directory doesn't exist yet
        let paths = write_reports(&directory.join("nested"), "test", &results).unwrap();

        assert_eq!(read_json(&paths.json).unwrap(), results);

        let csv = fs::read_to_string(&paths.csv).unwrap();
        let lines = csv.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 1 + 2 + 2);
        assert_eq!(lines[0], CSV_HEADER);
        assert!(lines[1].starts_with("2x2,2,2,1,"));
        assert!(lines[4].starts_with("3x2,3,2,2,"));
        assert!(lines[1].ends_with(",optimal"));
        assert_eq!(lines[1].split(',').count(), CSV_HEADER.split(',').count());

        let _ = fs::remove_dir_all(&directory);
    }

    #[test]
    fn read_errors() {
        let directory = scratch_directory("malformed_report");
        fs::create_dir_all(&directory).unwrap();

        assert!(matches!(read_json(&directory.join("missing.json")), Err(ReportError::IO { .. })));

        let path = directory.join("malformed.json");
        fs::write(&path, "{\"size\": 3}").unwrap();
        assert!(matches!(read_json(&path), Err(ReportError::Json(_))));

        let _ = fs::remove_dir_all(&directory);
    }
}
