//! # The Simplex algorithm
//!
//! Primal simplex method on a dense tableau. Starting from the basis formed by the auxiliary
//! columns, the method pivots until no column has a negative relative cost, until a column turns out
//! to be unbounded, or until an iteration limit is reached.
//!
//! The objective row starts at `-cost`. Pivoting on its most negative entry increases `Σ cost·x`,
//! so from the auxiliary basis the method ends in the most expensive vertex that it reaches; on
//! problems where plans differ in cost, that is not the cheapest plan. Reaching the cheapest plan
//! would need a first phase that drives out the auxiliary columns.
//!
//! There is no first phase: the initial basis is feasible because all supply and demand quantities
//! are positive. There is also no anti-cycling rule; the iteration limit is the only bound on the
//! number of pivots.
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::algorithm::simplex::strategy::pivot_rule::{PivotRule, SteepestDescentAlongVariable};
use crate::algorithm::simplex::tableau::{PivotChoice, Tableau};
use crate::algorithm::TerminalState;
use crate::data::linear_program::network::transportation::TransportationProblem;
use crate::data::linear_program::solution::Solution;
use crate::data::number_types::float::numerical_precision::DEFAULT_TOLERANCE;

pub mod strategy;
pub mod tableau;

/// Iteration limit used when no other value is configured.
pub const DEFAULT_MAX_ITERATIONS: usize = 1_000_000;

/// Parameters of a single solve.
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq)]
pub struct SolverSettings {
    /// Number of pivots after which the method gives up.
    pub max_iterations: usize,
    /// Distance from zero or one within which a tableau value is considered equal to it when
    /// reading the solution.
    pub tolerance: f64,
}

impl Default for SolverSettings {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

/// Run the simplex method with the default pivot rule.
///
/// See `primal`.
pub fn solve(tableau: &mut Tableau, max_iterations: usize) -> (TerminalState, usize) {
    primal::<SteepestDescentAlongVariable>(tableau, max_iterations)
}

/// Pivot until a terminal state is reached.
///
/// Each iteration first asks the pivot rule for an entering column; if there is none, the tableau
/// is optimal. Otherwise, if `max_iterations` pivots have already been made, the limit is reached.
/// Otherwise, the leaving row follows from the ratio test; if there is none, the problem is
/// unbounded. A tableau that is already optimal is left untouched.
///
/// # Arguments
///
/// * `tableau`: Tableau with a primal feasible basis, modified in place.
/// * `max_iterations`: Maximum number of pivots.
///
/// # Return value
///
/// The terminal state and the number of pivots that were made.
pub fn primal<PR: PivotRule>(tableau: &mut Tableau, max_iterations: usize) -> (TerminalState, usize) {
    let mut rule = PR::new();
    let mut iterations = 0;

    let state = loop {
        match rule.select_primal_pivot_column(tableau) {
            Some((column, cost)) => {
                if iterations >= max_iterations {
                    break TerminalState::LimitReached;
                }

                match tableau.select_primal_pivot_row(column) {
                    Some(row) => {
                        trace!(iteration = iterations + 1, row, column, cost, "pivot on\n{}", tableau);
                        tableau.bring_into_basis(PivotChoice { row, column });
                        iterations += 1;
                    },
                    None => break TerminalState::Unbounded,
                }
            },
            None => break TerminalState::Optimal,
        }
    };

    match state {
        TerminalState::Optimal => debug!(
            iterations,
            objective = tableau.objective_function_value(),
            "optimal tableau"
        ),
        TerminalState::Unbounded => warn!(iterations, "problem is unbounded"),
        TerminalState::LimitReached => warn!(max_iterations, "iteration limit reached"),
    }

    (state, iterations)
}

/// Build, solve and read the solution of a transportation problem.
pub fn solve_problem(problem: &TransportationProblem, settings: &SolverSettings) -> Solution {
    let mut tableau = Tableau::new(problem);
    let (status, iterations) = solve(&mut tableau, settings.max_iterations);

    Solution::from_tableau(&tableau, status, iterations, settings.tolerance)
}
