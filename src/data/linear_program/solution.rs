//! # Representation of solutions
//!
//! Once the simplex method terminates, the shipment quantities are read from the basic columns of
//! the tableau. Whether these quantities are meaningful depends on the terminal state: only the
//! solution of an optimal tableau is feasible and optimal.
use std::fmt::{Display, Formatter, Result as FormatResult};

use serde::{Deserialize, Serialize};

use crate::algorithm::simplex::tableau::Tableau;
use crate::algorithm::TerminalState;
use crate::data::number_types::float::numerical_precision::{close_to_one, close_to_zero, DEFAULT_TOLERANCE};

/// Shipment plan together with the way it was obtained.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Solution {
    /// Quantity shipped from each source (outer index) to each destination (inner index).
    pub shipments: Vec<Vec<f64>>,
    /// Shipping cost of the plan.
    pub total_cost: f64,
    /// Number of pivots made by the simplex method.
    pub iterations: usize,
    /// How the simplex method ended.
    pub status: TerminalState,
}

impl Solution {
    /// Read the solution from a tableau in a terminal state.
    ///
    /// # Arguments
    ///
    /// * `tableau`: Tableau after the simplex method terminated.
    /// * `status`: State in which the simplex method terminated.
    /// * `iterations`: Number of pivots that were made.
    /// * `tolerance`: See `extract_solution_with_tolerance`.
    pub fn from_tableau(
        tableau: &Tableau,
        status: TerminalState,
        iterations: usize,
        tolerance: f64,
    ) -> Self {
        let (shipments, total_cost) = extract_solution_with_tolerance(
            tableau,
            tableau.nr_sources(),
            tableau.nr_destinations(),
            tolerance,
        );

        Self { shipments, total_cost, iterations, status }
    }

    /// Total quantity leaving each source.
    pub fn row_sums(&self) -> Vec<f64> {
        self.shipments.iter().map(|row| row.iter().sum()).collect()
    }

    /// Total quantity arriving at each destination.
    pub fn column_sums(&self) -> Vec<f64> {
        let nr_destinations = self.shipments.first().map_or(0, Vec::len);
        (0..nr_destinations)
            .map(|j| self.shipments.iter().map(|row| row[j]).sum())
            .collect()
    }
}

impl Display for Solution {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        writeln!(f, "Status: {}", self.status)?;
        writeln!(f, "Iterations: {}", self.iterations)?;
        writeln!(f, "Total cost: {:.2}", self.total_cost)?;
        for (i, row) in self.shipments.iter().enumerate() {
            write!(f, "{:>5}", format!("S{}:", i + 1))?;
            for value in row {
                write!(f, " {:>10.2}", value)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

/// Read the shipments and the total cost from a tableau, using the default tolerance.
///
/// See `extract_solution_with_tolerance`.
pub fn extract_solution(tableau: &Tableau, m: usize, n: usize) -> (Vec<Vec<f64>>, f64) {
    extract_solution_with_tolerance(tableau, m, n, DEFAULT_TOLERANCE)
}

/// Read the shipments and the total cost from a tableau.
///
/// A shipment column is basic when, over all rows (the objective row included), exactly one value
/// is one and all other values are zero. Its quantity is the right-hand side of the row holding the
/// one. Non-basic shipments are zero. Negative noise on a basic quantity is clamped to zero.
///
/// The total cost is the right-hand side of the objective row.
///
/// # Arguments
///
/// * `tableau`: Tableau in a terminal state. For states other than `Optimal`, the values present
/// are read without any guarantee of correctness.
/// * `m`: Number of sources.
/// * `n`: Number of destinations.
/// * `tolerance`: Distance within which a value counts as zero or one.
///
/// # Return value
///
/// An `m` by `n` matrix of shipments and the total cost.
pub fn extract_solution_with_tolerance(
    tableau: &Tableau,
    m: usize,
    n: usize,
    tolerance: f64,
) -> (Vec<Vec<f64>>, f64) {
    debug_assert_eq!(m, tableau.nr_sources());
    debug_assert_eq!(n, tableau.nr_destinations());

    let mut shipments = vec![vec![0_f64; n]; m];
    for (column, value) in (0..m * n)
        .filter_map(|column| basic_row(tableau, column, tolerance).map(|row| (column, row)))
        .map(|(column, row)| (column, tableau.constraint_value(row).max(0_f64))) {
        shipments[column / n][column % n] = value;
    }

    (shipments, tableau.objective_function_value())
}

/// Row holding the single one of a unit column, if the column is a unit column.
///
/// A unit column whose one sits in the objective row is not basic.
fn basic_row(tableau: &Tableau, column: usize, tolerance: f64) -> Option<usize> {
    let mut one_at = None;
    for (row, value) in tableau.column(column).enumerate() {
        if close_to_zero(value, tolerance) {
            continue;
        }
        if close_to_one(value, tolerance) && one_at.is_none() {
            one_at = Some(row);
        } else {
            return None;
        }
    }

    one_at.filter(|&row| row < tableau.objective_row_index())
}
