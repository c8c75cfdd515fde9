//! # Reading and writing
//!
//! Benchmark reports and the errors that can occur while describing problems or handling files.
pub mod error;
pub mod report;
