//! # Number types
//!
//! All tableau arithmetic happens in `f64`.
pub mod float;
