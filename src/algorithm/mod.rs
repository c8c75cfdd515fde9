//! # Algorithms
use std::fmt::{Display, Formatter, Result as FormatResult};

use enum_map::Enum;
use serde::{Deserialize, Serialize};

pub mod simplex;

/// How a run of the simplex method ended.
///
/// None of these is an error: callers decide what to do with a solution based on this state. Only
/// a solution of an `Optimal` tableau is guaranteed to be correct.
#[derive(Enum, Serialize, Deserialize, Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TerminalState {
    /// No column has a negative relative cost.
    Optimal,
    /// A column with a negative relative cost has no positive value in any constraint row.
    Unbounded,
    /// The maximum number of iterations was reached before any other state.
    LimitReached,
}

impl Display for TerminalState {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        f.write_str(match self {
            TerminalState::Optimal => "optimal",
            TerminalState::Unbounded => "unbounded",
            TerminalState::LimitReached => "limit_reached",
        })
    }
}
