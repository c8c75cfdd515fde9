//! # Pivot rules
//!
//! Strategies for choosing the column that enters the basis.
use crate::algorithm::simplex::tableau::Tableau;

/// Deciding how to pivot.
///
/// During the Simplex method, one needs to decide how to move from basic solution to basic
/// solution. The pivot rule describes that behavior.
///
/// Once the column has been selected for a primal pivot, a row needs to be found. This decision is
/// made independent of the strategy, see `Tableau::select_primal_pivot_row`.
pub trait PivotRule {
    /// Create a new instance.
    fn new() -> Self;

    /// Column selection rule for the primal Simplex method.
    ///
    /// # Return value
    ///
    /// The index of the entering column together with its relative cost, or `None` if no column
    /// has a negative relative cost (the current basis is optimal).
    fn select_primal_pivot_column(&mut self, tableau: &Tableau) -> Option<(usize, f64)>;
}

/// Simply pivot on the column which has the most negative relative cost.
///
/// All columns except the right-hand side are scanned every time, basic columns included; those
/// have a relative cost of zero and are never chosen. Among columns with equal cost, the lowest
/// index wins. Costs are compared against zero exactly.
pub struct SteepestDescentAlongVariable;

impl PivotRule for SteepestDescentAlongVariable {
    fn new() -> Self {
        Self
    }

    fn select_primal_pivot_column(&mut self, tableau: &Tableau) -> Option<(usize, f64)> {
        let mut smallest: Option<(usize, f64)> = None;
        for (j, cost) in tableau.relative_costs().enumerate().filter(|&(_, cost)| cost < 0_f64) {
            if let Some((existing_j, existing_cost)) = smallest.as_mut() {
                if cost < *existing_cost {
                    *existing_j = j;
                    *existing_cost = cost;
                }
            } else {
                smallest = Some((j, cost))
            }
        }

        smallest
    }
}
