//! # Transportation problem
//!
//! A number of sources each supply a fixed quantity, a number of destinations each demand a fixed
//! quantity, and shipping a unit from source `i` to destination `j` costs `cost[i][j]`. The problem
//! is balanced: everything that is supplied is also demanded.
use crate::io::error::InconsistencyError;

pub mod generator;

/// A balanced transportation problem with `m` sources and `n` destinations.
///
/// Can only be constructed in a consistent state; see `TransportationProblem::new`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TransportationProblem {
    /// Quantity available at each source, length `m`.
    supply: Vec<u64>,
    /// Quantity required at each destination, length `n`.
    demand: Vec<u64>,
    /// Cost of shipping one unit, `m` rows of length `n`.
    cost: Vec<Vec<u64>>,
}

impl TransportationProblem {
    /// Create a new transportation problem.
    ///
    /// # Arguments
    ///
    /// * `supply`: Positive quantity for each source.
    /// * `demand`: Positive quantity for each destination.
    /// * `cost`: Unit shipping cost, one row per source with one value per destination.
    ///
    /// # Errors
    ///
    /// If there are no sources or destinations, the cost matrix doesn't match these dimensions, a
    /// quantity is zero or the totals of supply and demand differ.
    pub fn new(
        supply: Vec<u64>,
        demand: Vec<u64>,
        cost: Vec<Vec<u64>>,
    ) -> Result<Self, InconsistencyError> {
        if supply.is_empty() {
            return Err(InconsistencyError::NoSources);
        }
        if demand.is_empty() {
            return Err(InconsistencyError::NoDestinations);
        }
        if cost.len() != supply.len() {
            return Err(InconsistencyError::CostRows { expected: supply.len(), found: cost.len() });
        }
        if let Some((row, values)) = cost.iter().enumerate().find(|(_, values)| values.len() != demand.len()) {
            return Err(InconsistencyError::CostColumns { row, expected: demand.len(), found: values.len() });
        }
        if let Some(i) = supply.iter().position(|&quantity| quantity == 0) {
            return Err(InconsistencyError::ZeroSupply(i));
        }
        if let Some(j) = demand.iter().position(|&quantity| quantity == 0) {
            return Err(InconsistencyError::ZeroDemand(j));
        }

        let total_supply = supply.iter().sum::<u64>();
        let total_demand = demand.iter().sum::<u64>();
        if total_supply != total_demand {
            return Err(InconsistencyError::Unbalanced { supply: total_supply, demand: total_demand });
        }

        Ok(Self { supply, demand, cost })
    }

    /// Number of sources, `m`.
    pub fn nr_sources(&self) -> usize {
        self.supply.len()
    }

    /// Number of destinations, `n`.
    pub fn nr_destinations(&self) -> usize {
        self.demand.len()
    }

    /// Number of shipment variables, `m * n`.
    pub fn nr_shipments(&self) -> usize {
        self.nr_sources() * self.nr_destinations()
    }

    /// Quantity available at each source.
    pub fn supply(&self) -> &[u64] {
        &self.supply
    }

    /// Quantity required at each destination.
    pub fn demand(&self) -> &[u64] {
        &self.demand
    }

    /// Unit shipping cost, indexed by source and then destination.
    pub fn cost(&self) -> &[Vec<u64>] {
        &self.cost
    }

    /// Quantity that is shipped in any feasible solution; equals both total supply and demand.
    pub fn total_quantity(&self) -> u64 {
        self.supply.iter().sum()
    }

    /// Cost of a shipment plan.
    ///
    /// # Arguments
    ///
    /// * `shipments`: Quantity for each (source, destination) pair, `m` rows of length `n`.
    pub fn cost_of(&self, shipments: &[Vec<f64>]) -> f64 {
        debug_assert_eq!(shipments.len(), self.nr_sources());

        self.cost.iter().zip(shipments)
            .flat_map(|(costs, quantities)| costs.iter().zip(quantities))
            .map(|(&cost, &quantity)| cost as f64 * quantity)
            .sum()
    }
}
