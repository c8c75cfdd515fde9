//! # Linear algebra primitives
//!
//! Linear algebra primitives used to represent the simplex tableau in a dense format.

pub mod matrix;
