//! # Generated problems
//!
//! Properties that should hold for every balanced problem, checked over many seeds.
use approx::assert_abs_diff_eq;

use transport_simplex::algorithm::simplex::{solve_problem, SolverSettings};
use transport_simplex::algorithm::TerminalState;
use transport_simplex::data::linear_program::network::transportation::generator::{generate, TARGET_TOTAL};
use transport_simplex::data::linear_program::network::transportation::TransportationProblem;
use transport_simplex::data::linear_program::solution::Solution;

/// # Checks per size
#[allow(missing_docs)]
mod test;

/// Solve a problem and check that the solution is feasible and consistent with its cost.
///
/// # Return value
///
/// The solution, for further checks.
fn solve_and_check(problem: &TransportationProblem) -> Solution {
    let solution = solve_problem(problem, &SolverSettings::default());
    assert_eq!(solution.status, TerminalState::Optimal);

    let tolerance = 1e-6 * TARGET_TOTAL as f64;
    for (found, &expected) in solution.row_sums().into_iter().zip(problem.supply()) {
        assert_abs_diff_eq!(found, expected as f64, epsilon = tolerance);
    }
    for (found, &expected) in solution.column_sums().into_iter().zip(problem.demand()) {
        assert_abs_diff_eq!(found, expected as f64, epsilon = tolerance);
    }
    assert!(solution.shipments.iter().flatten().all(|&quantity| quantity >= 0_f64));
    assert_abs_diff_eq!(
        solution.total_cost,
        problem.cost_of(&solution.shipments),
        epsilon = 1e-6 * solution.total_cost.abs().max(1_f64),
    );

    solution
}

/// Check all seeds in a range for one size.
fn check_seeds(m: usize, n: usize, seeds: std::ops::Range<u64>) {
    for seed in seeds {
        let problem = generate(m, n, seed).unwrap();
        assert_eq!(problem.total_quantity(), TARGET_TOTAL);
        solve_and_check(&problem);
    }
}
