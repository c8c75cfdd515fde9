//! # Tests that require a look inside the crate.
//!
//! Convention for function names:
//!
//! * `fn problem()`
//! * `fn tableau_form()`
//! * `fn solved_tableau_form()`
use itertools::iproduct;

use crate::data::linear_program::network::transportation::TransportationProblem;

pub mod problem_1;
pub mod problem_3;

/// Cost of every integral shipment plan of a problem with two sources and two destinations.
///
/// Choosing the first shipment fixes all others.
pub fn integral_plan_costs(problem: &TransportationProblem) -> Vec<u64> {
    debug_assert_eq!((problem.nr_sources(), problem.nr_destinations()), (2, 2));
    let (supply, demand, cost) = (problem.supply(), problem.demand(), problem.cost());

    (0..=supply[0].min(demand[0]))
        .filter_map(|first| {
            let second = supply[0] - first;
            let third = demand[0].checked_sub(first)?;
            let fourth = demand[1].checked_sub(second)?;
            (third + fourth == supply[1]).then(|| [first, second, third, fourth])
        })
        .map(|plan| {
            iproduct!(0..2, 0..2)
                .zip(plan)
                .map(|((i, j), quantity)| cost[i][j] * quantity)
                .sum::<u64>()
        })
        .collect()
}
