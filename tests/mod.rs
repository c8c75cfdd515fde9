//! # Integration tests
//!
//! Integration tests completely external from the crate. All code written in this module could be
//! written by an external user of the crate.
//!
//! ## Note
//!
//! The tests on large problems are only ran when the `large` feature is enabled as these tests
//! take a long time to run.

mod generated;
mod pipeline;
#[cfg(feature = "large")]
mod large;
