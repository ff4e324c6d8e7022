//! Tour search trait.
//!
//! # Pluggability
//!
//! The solve pipeline calls search through [`TourSolver`], so the exact and
//! heuristic procedures are interchangeable and tests can drive either one
//! directly against a hand-built [`CostMatrix`].

use sr_core::NodeId;
use sr_network::CostMatrix;

use crate::Tour;

/// Which search procedure produced a result.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolveMode {
    /// Held-Karp dynamic programming.  The tour is provably cost-minimal.
    Exact,
    /// Greedy construction plus 2-opt.  No optimality guarantee, and a
    /// failure does not prove infeasibility.
    Heuristic,
}

impl std::fmt::Display for SolveMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolveMode::Exact => f.write_str("exact"),
            SolveMode::Heuristic => f.write_str("heuristic"),
        }
    }
}

/// Closed-tour search over a materialized cost matrix.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so sweeps can run weights on Rayon
/// worker threads.
pub trait TourSolver: Send + Sync {
    fn mode(&self) -> SolveMode;

    /// Find a closed tour from `depot` through every node using only
    /// permitted (`Some`) arcs.
    ///
    /// Returns `None` if no such tour was found.  Implementations must never
    /// return a tour containing a forbidden arc.
    fn solve(&self, costs: &CostMatrix, depot: NodeId) -> Option<Tour>;
}
