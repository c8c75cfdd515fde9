//! # Representing linear programs
//!
//! Problems are described by their network structure; solutions are read back from a tableau.
pub mod network;
pub mod solution;
