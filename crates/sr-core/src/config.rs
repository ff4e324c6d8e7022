//! Static solver configuration.
//!
//! Every field is fixed when the solver is built and never mutated
//! afterwards.  Call [`SolverConfig::validate`] (the solver builder does) to
//! reject values that would make the search unbounded or the cost arithmetic
//! unsafe.

use crate::{CoreError, CoreResult, NodeId};

/// Largest node count the exact search will ever accept.  Above ~20 the
/// `2^(n-1) * (n-1)` DP table no longer fits comfortably in memory.
pub const EXACT_NODE_LIMIT_CAP: usize = 20;

/// Configuration for a risk-aware solver instance.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverConfig {
    /// Node every tour starts and ends at.
    pub depot: NodeId,

    /// Node risk at or above this value forbids every arc into that node.
    pub hazard_threshold: u32,

    /// Multiplier that lifts the 0–100 risk domain to metre magnitudes.
    pub risk_scale: u32,

    /// A hazard blocks its nearest node only if the squared coordinate
    /// distance (degrees²) is strictly below this.
    pub snap_threshold_deg2: f64,

    /// Networks with at most this many nodes are solved exactly; larger
    /// networks use the heuristic.
    pub exact_node_limit: usize,

    /// Largest risk weight `solve` accepts.  Bounds the cost arithmetic.
    pub max_risk_weight: f64,

    /// Run 2-opt improvement after heuristic construction.
    pub two_opt: bool,

    /// Node expansions the heuristic construction may spend backtracking
    /// out of dead ends before giving up.
    pub max_backtrack_steps: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            depot:               NodeId::DEPOT,
            hazard_threshold:    1_000,
            risk_scale:          10,
            snap_threshold_deg2: 1e-4,
            exact_node_limit:    15,
            max_risk_weight:     10_000.0,
            two_opt:             true,
            max_backtrack_steps: 100_000,
        }
    }
}

impl SolverConfig {
    /// Check every field that can be checked without a network.
    ///
    /// The depot range is checked by the solver builder, which knows the
    /// node count.
    pub fn validate(&self) -> CoreResult<()> {
        if self.hazard_threshold == 0 {
            return Err(CoreError::Config("hazard_threshold must be > 0".into()));
        }
        if !self.snap_threshold_deg2.is_finite() || self.snap_threshold_deg2 <= 0.0 {
            return Err(CoreError::Config(format!(
                "snap_threshold_deg2 must be finite and > 0, got {}",
                self.snap_threshold_deg2
            )));
        }
        if !(2..=EXACT_NODE_LIMIT_CAP).contains(&self.exact_node_limit) {
            return Err(CoreError::Config(format!(
                "exact_node_limit must be in 2..={EXACT_NODE_LIMIT_CAP}, got {}",
                self.exact_node_limit
            )));
        }
        if !self.max_risk_weight.is_finite() || self.max_risk_weight < 0.0 {
            return Err(CoreError::Config(format!(
                "max_risk_weight must be finite and >= 0, got {}",
                self.max_risk_weight
            )));
        }
        if self.max_backtrack_steps == 0 {
            return Err(CoreError::Config("max_backtrack_steps must be > 0".into()));
        }
        Ok(())
    }
}
