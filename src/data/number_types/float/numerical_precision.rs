//! Helper methods for the accuracy of floating point calculations.
//!
//! Repeated pivoting accumulates rounding errors, so values that should be exactly zero or one are
//! compared within a tolerance.
use num_traits::Float;

/// Tolerance used when no other value is configured.
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

/// Whether `value` lies within `epsilon` of `target`.
pub fn close_to<F: Float>(value: F, target: F, epsilon: F) -> bool {
    debug_assert!(epsilon >= F::zero());

    (value - target).abs() <= epsilon
}

/// Whether `value` lies within `epsilon` of zero.
pub fn close_to_zero<F: Float>(value: F, epsilon: F) -> bool {
    close_to(value, F::zero(), epsilon)
}

/// Whether `value` lies within `epsilon` of one.
pub fn close_to_one<F: Float>(value: F, epsilon: F) -> bool {
    close_to(value, F::one(), epsilon)
}
