//! # Floating point numbers
//!
//! The tableau is computed in double precision. Correctness guarantees are harder to give due to
//! (accumulating) rounding errors; this module holds the comparisons that account for them.
pub mod numerical_precision;
