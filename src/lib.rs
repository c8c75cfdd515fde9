//! # Transportation problems solved with the Simplex method
//!
//! Balanced transportation problems are written as a dense simplex tableau and solved with the
//! primal Simplex method, pivoting on the most negative relative cost and choosing the leaving row
//! with the minimum ratio test. Around this core sits a benchmark harness that generates random
//! problems of increasing size, measures time and memory of repeated solves and writes JSON and CSV
//! reports.
#![warn(missing_docs)]

pub mod algorithm;
pub mod benchmark;
pub mod data;
pub mod io;

#[cfg(test)]
mod tests;
