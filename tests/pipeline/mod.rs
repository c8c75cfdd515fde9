//! # Building, solving and reading step by step
use approx::assert_abs_diff_eq;

use transport_simplex::algorithm::simplex::solve;
use transport_simplex::algorithm::simplex::tableau::Tableau;
use transport_simplex::algorithm::TerminalState;
use transport_simplex::data::linear_program::network::transportation::TransportationProblem;
use transport_simplex::data::linear_program::solution::{extract_solution, Solution};
use transport_simplex::io::error::InconsistencyError;

#[test]
fn single_cell() {
    let problem = TransportationProblem::new(vec![10], vec![10], vec![vec![5]]).unwrap();
    let mut tableau = Tableau::new(&problem);
    assert_eq!((tableau.nr_rows(), tableau.nr_columns()), (3, 4));

    assert_eq!(solve(&mut tableau, 1_000), (TerminalState::Optimal, 1));
    let (shipments, total_cost) = extract_solution(&tableau, 1, 1);
    assert_eq!(shipments, vec![vec![10_f64]]);
    assert_eq!(total_cost, 50_f64);
}

#[test]
fn resolving_is_free() {
    let problem = TransportationProblem::new(
        vec![7, 3, 5],
        vec![4, 4, 7],
        vec![vec![2, 9, 4], vec![6, 1, 3], vec![5, 5, 8]],
    ).unwrap();
    let mut tableau = Tableau::new(&problem);

    let (state, iterations) = solve(&mut tableau, 1_000);
    assert_eq!(state, TerminalState::Optimal);
    assert!(iterations > 0);

    let solved = tableau.clone();
    assert_eq!(solve(&mut tableau, 1_000), (TerminalState::Optimal, 0));
    assert_eq!(tableau, solved);

    let solution = Solution::from_tableau(&tableau, state, iterations, 1e-9);
    assert_abs_diff_eq!(solution.row_sums().iter().sum::<f64>(), 15_f64, epsilon = 1e-9);
    assert_abs_diff_eq!(solution.total_cost, problem.cost_of(&solution.shipments), epsilon = 1e-9);
}

#[test]
fn zero_costs() {
    let problem = TransportationProblem::new(vec![5, 5], vec![10], vec![vec![0], vec![0]]).unwrap();
    let mut tableau = Tableau::new(&problem);

    // Nothing has a negative relative cost, so nothing moves
    assert_eq!(solve(&mut tableau, 1_000), (TerminalState::Optimal, 0));
    assert_eq!(extract_solution(&tableau, 2, 1).1, 0_f64);
}

#[test]
fn iteration_limit() {
    let problem = TransportationProblem::new(
        vec![10, 20],
        vec![15, 15],
        vec![vec![1, 2], vec![3, 4]],
    ).unwrap();
    let mut tableau = Tableau::new(&problem);

    assert_eq!(solve(&mut tableau, 1), (TerminalState::LimitReached, 1));
}

#[test]
fn inconsistent() {
    assert_eq!(
        TransportationProblem::new(vec![10], vec![9], vec![vec![5]]),
        Err(InconsistencyError::Unbalanced { supply: 10, demand: 9 }),
    );
}
