//! # Large generated problems
//!
//! The sizes used by default when benchmarking.
use transport_simplex::algorithm::simplex::{solve_problem, SolverSettings};
use transport_simplex::algorithm::TerminalState;
use transport_simplex::data::linear_program::network::transportation::generator::generate;

fn optimal(m: usize, n: usize, seed: u64) {
    let problem = generate(m, n, seed).unwrap();
    let solution = solve_problem(&problem, &SolverSettings::default());

    assert_eq!(solution.status, TerminalState::Optimal);
    let relative = (solution.total_cost - problem.cost_of(&solution.shipments)).abs() / solution.total_cost;
    assert!(relative < 1e-9);
}

#[test]
fn twenty() {
    optimal(20, 20, 42);
}

#[test]
fn thirty() {
    optimal(30, 30, 42);
}
