//! # Data structures for Simplex
//!
//! Contains the simplex tableau and logic for elementary operations which can be performed upon it.
//!
//! The tableau of a transportation problem with `m` sources and `n` destinations is a dense matrix
//! of `m + n + 1` rows and `m * n + m + n + 1` columns:
//!
//! * rows `0..m` are the supply constraints, rows `m..m + n` the demand constraints and the last row
//!   holds the relative costs;
//! * columns `0..m * n` are the shipment variables, where shipment `(i, j)` has index `i * n + j`,
//!   followed by `m` auxiliary columns for the supply rows, `n` auxiliary columns for the demand
//!   rows and finally the right-hand side.
//!
//! No record of the basis is kept. Everything the simplex method needs is read from the matrix
//! itself, at a cost of `O(rows * columns)` per iteration.
use std::fmt::{Display, Formatter, Result as FormatResult};
use std::mem::size_of;

use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::linear_program::network::transportation::TransportationProblem;

/// Position of the next pivot.
///
/// Only lives for the duration of a single iteration.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct PivotChoice {
    /// Index of the leaving row, never the objective row.
    pub row: usize,
    /// Index of the entering column, never the right-hand side.
    pub column: usize,
}

/// The most high-level data structure that is used by the Simplex algorithm: the Simplex tableau.
///
/// Owns its matrix. While a problem is being solved, the solver holds the only (mutable) reference.
#[derive(Clone, Debug, PartialEq)]
pub struct Tableau {
    /// Constraint rows followed by the objective row; right-hand side is the last column.
    matrix: DenseMatrix,
    nr_sources: usize,
    nr_destinations: usize,
}

impl Tableau {
    /// Create the initial tableau of a transportation problem.
    ///
    /// The auxiliary columns form the initial basis: all shipments are zero. The objective row
    /// holds the negated shipping costs and a right-hand side of zero.
    ///
    /// The problem is balanced and has at least one source and one destination; this is
    /// guaranteed by construction of the `TransportationProblem`.
    pub fn new(problem: &TransportationProblem) -> Self {
        let m = problem.nr_sources();
        let n = problem.nr_destinations();
        let nr_shipments = problem.nr_shipments();
        let nr_rows = m + n + 1;
        let nr_columns = nr_shipments + m + n + 1;
        let rhs = nr_columns - 1;

        let mut matrix = DenseMatrix::zeros(nr_rows, nr_columns);

        // Supply constraints
        for (i, &supply) in problem.supply().iter().enumerate() {
            for j in 0..n {
                matrix.set_value(i, i * n + j, 1_f64);
            }
            matrix.set_value(i, nr_shipments + i, 1_f64);
            matrix.set_value(i, rhs, supply as f64);
        }

        // Demand constraints
        for (j, &demand) in problem.demand().iter().enumerate() {
            for i in 0..m {
                matrix.set_value(m + j, i * n + j, 1_f64);
            }
            matrix.set_value(m + j, nr_shipments + m + j, 1_f64);
            matrix.set_value(m + j, rhs, demand as f64);
        }

        // Objective function
        for (i, costs) in problem.cost().iter().enumerate() {
            for (j, &cost) in costs.iter().enumerate() {
                matrix.set_value(nr_rows - 1, i * n + j, -(cost as f64));
            }
        }

        Self { matrix, nr_sources: m, nr_destinations: n }
    }

    /// Wrap existing tableau data, for example to set up a specific basis in a test.
    ///
    /// # Arguments
    ///
    /// * `nr_sources`: Number of supply rows, `m`.
    /// * `nr_destinations`: Number of demand rows, `n`.
    /// * `data`: `m + n + 1` rows of `m * n + m + n + 1` values each.
    pub fn from_data(nr_sources: usize, nr_destinations: usize, data: Vec<Vec<f64>>) -> Self {
        let matrix = DenseMatrix::from_data(data);
        debug_assert_eq!(matrix.nr_rows(), nr_sources + nr_destinations + 1);
        debug_assert_eq!(
            matrix.nr_columns(),
            nr_sources * nr_destinations + nr_sources + nr_destinations + 1,
        );

        Self { matrix, nr_sources, nr_destinations }
    }

    /// Number of rows, including the objective row.
    pub fn nr_rows(&self) -> usize {
        self.matrix.nr_rows()
    }

    /// Number of columns, including the right-hand side.
    pub fn nr_columns(&self) -> usize {
        self.matrix.nr_columns()
    }

    /// Number of sources `m` of the problem this tableau was built for.
    pub fn nr_sources(&self) -> usize {
        self.nr_sources
    }

    /// Number of destinations `n` of the problem this tableau was built for.
    pub fn nr_destinations(&self) -> usize {
        self.nr_destinations
    }

    /// Number of shipment variables, which are the first columns of the tableau.
    pub fn nr_shipments(&self) -> usize {
        self.nr_sources * self.nr_destinations
    }

    /// Index of the row holding the relative costs.
    pub fn objective_row_index(&self) -> usize {
        self.nr_rows() - 1
    }

    /// Index of the right-hand side column.
    pub fn rhs_column_index(&self) -> usize {
        self.nr_columns() - 1
    }

    /// Value at coordinate (`i`, `j`).
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.matrix.get_value(i, j)
    }

    /// All values of column `j`, including the relative cost in the last position.
    pub fn column(&self, j: usize) -> impl Iterator<Item = f64> + '_ {
        self.matrix.column(j)
    }

    /// Relative costs of all columns except the right-hand side.
    pub fn relative_costs(&self) -> impl Iterator<Item = f64> + '_ {
        self.matrix.row(self.objective_row_index())
            .take(self.rhs_column_index())
            .copied()
    }

    /// Right-hand side value of constraint row `i`.
    pub fn constraint_value(&self, i: usize) -> f64 {
        debug_assert!(i < self.objective_row_index());

        self.matrix.get_value(i, self.rhs_column_index())
    }

    /// Right-hand side of the objective row.
    ///
    /// Starts at zero and accumulates `cost * quantity` for each pivot; it equals the shipping cost
    /// of the current basic solution.
    pub fn objective_function_value(&self) -> f64 {
        self.matrix.get_value(self.objective_row_index(), self.rhs_column_index())
    }

    /// Determine the row to pivot on, given the column.
    ///
    /// This is the minimum ratio test: among the constraint rows with a strictly positive value in
    /// the pivot column, the one with the smallest right-hand side to value ratio is chosen. Ties
    /// are broken by choosing the lowest row index.
    ///
    /// # Arguments
    ///
    /// * `column`: Index of the entering column.
    ///
    /// # Return value
    ///
    /// Index of the leaving row, or `None` if no row has a positive value (the problem is
    /// unbounded in the direction of the column).
    pub fn select_primal_pivot_row(&self, column: usize) -> Option<usize> {
        debug_assert!(column < self.rhs_column_index());

        let mut min_values: Option<(usize, f64)> = None;
        for row in 0..self.objective_row_index() {
            let xij = self.get(row, column);
            if xij > 0_f64 {
                let ratio = self.constraint_value(row) / xij;
                if let Some((min_index, min_ratio)) = min_values.as_mut() {
                    if ratio < *min_ratio {
                        *min_index = row;
                        *min_ratio = ratio;
                    }
                } else {
                    min_values = Some((row, ratio))
                }
            }
        }

        min_values.map(|(min_index, _)| min_index)
    }

    /// Pivot: bring a column into the basis by Gauss-Jordan elimination.
    ///
    /// The pivot row is divided by the pivot element, after which a multiple of it is subtracted
    /// from every other row (the objective row and the right-hand side included) such that the
    /// pivot column becomes a unit vector.
    pub fn bring_into_basis(&mut self, pivot: PivotChoice) {
        debug_assert!(pivot.row < self.objective_row_index());
        debug_assert!(pivot.column < self.rhs_column_index());

        let pivot_value = self.matrix.get_value(pivot.row, pivot.column);
        debug_assert!(pivot_value != 0_f64);
        self.matrix.divide_row(pivot.row, pivot_value);

        for row in (0..self.nr_rows()).filter(|&row| row != pivot.row) {
            let factor = self.matrix.get_value(row, pivot.column);
            if factor != 0_f64 {
                self.matrix.mul_add_rows(pivot.row, row, -factor);
            }
        }
    }

    /// Memory occupied by the values of the tableau, in bytes.
    pub fn size_in_bytes(&self) -> usize {
        self.matrix.size() * size_of::<f64>()
    }
}

impl Display for Tableau {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        for i in 0..self.nr_rows() {
            if i == self.objective_row_index() {
                write!(f, "{:>5}", "Z:")?;
            } else {
                write!(f, "{:>5}", format!("R{}:", i + 1))?;
            }
            for value in self.matrix.row(i) {
                write!(f, " {:+8.2}", value)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
