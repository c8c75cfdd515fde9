//! # Comparing two benchmark reports
//!
//! Typically a baseline implementation against a candidate, size by size.
use std::fmt::{Display, Formatter, Result as FormatResult};

use serde::Serialize;

use crate::benchmark::SizeResult;

/// Comparison of one problem size that occurs in both reports.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Comparison {
    /// Size written as `MxN`.
    pub size: String,
    /// Mean total time of the baseline, in seconds.
    pub baseline_seconds: f64,
    /// Mean total time of the candidate, in seconds.
    pub candidate_seconds: f64,
    /// Mean memory growth of the baseline, in megabytes.
    pub baseline_memory_mb: f64,
    /// Mean memory growth of the candidate, in megabytes.
    pub candidate_memory_mb: f64,
}

impl Comparison {
    /// How many times faster the candidate is, if the candidate took any measurable time.
    pub fn speedup(&self) -> Option<f64> {
        (self.candidate_seconds > 0_f64).then(|| self.baseline_seconds / self.candidate_seconds)
    }

    /// Percentage of the baseline memory that the candidate saves, if the baseline used any.
    ///
    /// Negative when the candidate uses more.
    pub fn memory_reduction_percent(&self) -> Option<f64> {
        (self.baseline_memory_mb > 0_f64)
            .then(|| (1_f64 - self.candidate_memory_mb / self.baseline_memory_mb) * 100_f64)
    }
}

impl Display for Comparison {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        write!(f, "{:<10} {:>12.6} {:>12.6}", self.size, self.baseline_seconds, self.candidate_seconds)?;
        match self.speedup() {
            Some(speedup) => write!(f, " {:>9.2}x", speedup)?,
            None => write!(f, " {:>10}", "-")?,
        }
        match self.memory_reduction_percent() {
            Some(reduction) => write!(f, " {:>9.2}%", reduction),
            None => write!(f, " {:>10}", "-"),
        }
    }
}

/// Match the sizes of two reports, in the order of the baseline.
///
/// Sizes that occur in only one of the reports are skipped.
pub fn compare(baseline: &[SizeResult], candidate: &[SizeResult]) -> Vec<Comparison> {
    baseline.iter()
        .filter_map(|base| {
            candidate.iter()
                .find(|other| other.m == base.m && other.n == base.n)
                .map(|other| Comparison {
                    size: base.size.clone(),
                    baseline_seconds: base.statistics.total_seconds.mean,
                    candidate_seconds: other.statistics.total_seconds.mean,
                    baseline_memory_mb: base.statistics.memory_mb.mean,
                    candidate_memory_mb: other.statistics.memory_mb.mean,
                })
        })
        .collect()
}
