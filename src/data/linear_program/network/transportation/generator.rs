//! # Random transportation problems
//!
//! Synthetic, balanced instances for benchmarking. Each instance is drawn from its own random
//! source, seeded explicitly, so that the same seed reproduces the same instance on every platform
//! and no state is shared between instances.
use std::ops::{Range, RangeInclusive};

use rand::distributions::{Distribution, Uniform};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::data::linear_program::network::transportation::TransportationProblem;
use crate::io::error::InconsistencyError;

/// Total supply, and total demand, of every generated problem.
pub const TARGET_TOTAL: u64 = 100_000;
/// Raw supply and demand quantities are drawn from this range before rescaling.
const QUANTITY_RANGE: Range<u64> = 1_000..4_000;
/// Unit shipping costs are drawn from this range.
const COST_RANGE: RangeInclusive<u64> = 1..=100;

/// Generate a balanced transportation problem.
///
/// Supply is drawn first, then demand, then the costs row by row, all from one random stream.
///
/// # Arguments
///
/// * `m`: Number of sources.
/// * `n`: Number of destinations.
/// * `seed`: Seed of the random source.
///
/// # Errors
///
/// When `m` or `n` is zero, or when there are so many sources or destinations that rescaling
/// leaves one of them without any quantity.
pub fn generate(m: usize, n: usize, seed: u64) -> Result<TransportationProblem, InconsistencyError> {
    if m == 0 {
        return Err(InconsistencyError::NoSources);
    }
    if n == 0 {
        return Err(InconsistencyError::NoDestinations);
    }

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let quantities = Uniform::from(QUANTITY_RANGE);
    let costs = Uniform::from(COST_RANGE);

    let supply = scale_to_total(quantities.sample_iter(&mut rng).take(m).collect(), TARGET_TOTAL);
    let demand = scale_to_total(quantities.sample_iter(&mut rng).take(n).collect(), TARGET_TOTAL);
    let cost = (0..m)
        .map(|_| costs.sample_iter(&mut rng).take(n).collect())
        .collect();

    TransportationProblem::new(supply, demand, cost)
}

/// Rescale quantities such that they sum to exactly `total`.
///
/// Every value is multiplied by `total / sum`, truncating toward zero. The residual that the
/// truncation leaves is added to the last value.
fn scale_to_total(mut values: Vec<u64>, total: u64) -> Vec<u64> {
    debug_assert!(!values.is_empty());

    let sum = values.iter().sum::<u64>();
    debug_assert!(sum > 0);
    let scale = total as f64 / sum as f64;
    for value in &mut values {
        *value = (*value as f64 * scale) as u64;
    }

    let scaled_sum = values.iter().sum::<u64>();
    if let Some(last) = values.last_mut() {
        // Rounding of the products may overshoot the total by a unit
        *last = (*last + total) - scaled_sum;
    }

    values
}
