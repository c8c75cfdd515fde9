//! Two sources and two destinations where the plans differ in cost.
//!
//! Shipping along the diagonal costs 20, shipping crosswise costs 2000. Starting from the
//! auxiliary basis, pivoting on the most negative relative cost of the `-cost` row climbs
//! `Σ cost·x`: the method ends in the crosswise plan.
use approx::assert_abs_diff_eq;

use crate::algorithm::simplex::{solve, solve_problem, SolverSettings};
use crate::algorithm::simplex::tableau::Tableau;
use crate::algorithm::TerminalState;
use crate::data::linear_program::network::transportation::TransportationProblem;
use crate::tests::integral_plan_costs;

#[test]
fn conversion_pipeline() {
    let solution = solve_problem(&problem(), &SolverSettings::default());

    assert_eq!(solution.status, TerminalState::Optimal);
    assert_eq!(solution.iterations, 2);
    assert_eq!(solution.shipments, vec![vec![0_f64, 10_f64], vec![10_f64, 0_f64]]);
    assert_abs_diff_eq!(solution.total_cost, 2_000_f64);
    assert_abs_diff_eq!(solution.total_cost, problem().cost_of(&solution.shipments));
}

#[test]
fn ends_in_most_expensive_plan() {
    let costs = integral_plan_costs(&problem());
    let (cheapest, most_expensive) = (costs.iter().min().copied(), costs.iter().max().copied());
    assert_eq!((cheapest, most_expensive), (Some(20), Some(2_000)));

    let mut tableau = Tableau::new(&problem());
    assert_eq!(solve(&mut tableau, 100).0, TerminalState::Optimal);
    assert_abs_diff_eq!(tableau.objective_function_value(), 2_000_f64);
}

pub fn problem() -> TransportationProblem {
    TransportationProblem::new(
        vec![10, 10],
        vec![10, 10],
        vec![vec![1, 100], vec![100, 1]],
    ).unwrap()
}
