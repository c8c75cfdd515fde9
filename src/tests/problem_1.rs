//! A single source shipping everything to a single destination.
use crate::algorithm::simplex::solve;
use crate::algorithm::simplex::tableau::Tableau;
use crate::algorithm::TerminalState;
use crate::data::linear_program::network::transportation::TransportationProblem;
use crate::data::linear_program::solution::extract_solution;

#[test]
fn conversion_pipeline() {
    let problem = problem();

    let mut tableau = Tableau::new(&problem);
    assert_eq!(tableau, tableau_form());
    assert_eq!((tableau.nr_rows(), tableau.nr_columns()), (3, 4));

    assert_eq!(solve(&mut tableau, 10), (TerminalState::Optimal, 1));
    assert_eq!(tableau, solved_tableau_form());

    let (shipments, total_cost) = extract_solution(&tableau, 1, 1);
    assert_eq!(shipments, vec![vec![10_f64]]);
    assert_eq!(total_cost, 50_f64);
}

pub fn problem() -> TransportationProblem {
    TransportationProblem::new(vec![10], vec![10], vec![vec![5]]).unwrap()
}

pub fn tableau_form() -> Tableau {
    Tableau::from_data(1, 1, vec![
        vec![1_f64, 1_f64, 0_f64, 10_f64],
        vec![1_f64, 0_f64, 1_f64, 10_f64],
        vec![-5_f64, 0_f64, 0_f64, 0_f64],
    ])
}

pub fn solved_tableau_form() -> Tableau {
    Tableau::from_data(1, 1, vec![
        vec![1_f64, 1_f64, 0_f64, 10_f64],
        vec![0_f64, -1_f64, 1_f64, 0_f64],
        vec![0_f64, 5_f64, 0_f64, 50_f64],
    ])
}
