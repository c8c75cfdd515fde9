use super::{check_seeds, solve_and_check};

use transport_simplex::algorithm::simplex::{solve_problem, SolverSettings};
use transport_simplex::algorithm::TerminalState;
use transport_simplex::data::linear_program::network::transportation::generator::generate;

#[test]
fn single_source() {
    check_seeds(1, 5, 0..20);
}

#[test]
fn single_destination() {
    check_seeds(5, 1, 0..20);
}

#[test]
fn square() {
    check_seeds(2, 2, 0..50);
    check_seeds(5, 5, 0..50);
}

#[test]
fn rectangular() {
    check_seeds(3, 7, 0..25);
    check_seeds(8, 4, 0..25);
}

#[test]
fn ten_by_ten() {
    check_seeds(10, 10, 42..52);
}

#[test]
fn never_unbounded() {
    for seed in 0..100 {
        let problem = generate(4, 6, seed).unwrap();
        let solution = solve_problem(&problem, &SolverSettings::default());
        assert_ne!(solution.status, TerminalState::Unbounded);
    }
}

#[test]
fn deterministic() {
    let problem = generate(6, 6, 7).unwrap();
    let first = solve_and_check(&problem);
    let second = solve_and_check(&generate(6, 6, 7).unwrap());
    assert_eq!(first, second);
}
