//! # Memory measurement
//!
//! Peak resident set size of the process, as reported by the kernel. Only available on Linux; on
//! other platforms no measurement is made and the memory growth of a run is reported as zero.
use std::fs;

const BYTES_PER_MEGABYTE: f64 = 1024_f64 * 1024_f64;
const KILOBYTES_PER_MEGABYTE: f64 = 1024_f64;

/// Peak resident set size of this process in megabytes, if it can be determined.
pub fn peak_resident_megabytes() -> Option<f64> {
    let status = fs::read_to_string("/proc/self/status").ok()?;
    parse_peak_resident(&status)
}

/// Read the `VmHWM` line of a `/proc/<pid>/status` file, which is given in kilobytes.
fn parse_peak_resident(status: &str) -> Option<f64> {
    status.lines()
        .find_map(|line| line.strip_prefix("VmHWM:"))
        .and_then(|rest| rest.split_whitespace().next())
        .and_then(|kilobytes| kilobytes.parse::<f64>().ok())
        .map(|kilobytes| kilobytes / KILOBYTES_PER_MEGABYTE)
}

/// Growth of a measurement over a run, never negative.
pub fn growth(before: Option<f64>, after: Option<f64>) -> f64 {
    match (before, after) {
        (Some(before), Some(after)) => (after - before).max(0_f64),
        _ => 0_f64,
    }
}

/// Convert a number of bytes to megabytes.
pub fn megabytes(bytes: usize) -> f64 {
    bytes as f64 / BYTES_PER_MEGABYTE
}
