//! # Strategies for the Simplex algorithm
//!
//! Only the choice of the entering column is a strategy; the leaving row always follows from the
//! minimum ratio test.
pub mod pivot_rule;
