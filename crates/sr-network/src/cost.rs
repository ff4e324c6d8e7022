//! Composite arc cost: distance plus weighted destination risk, with hard
//! constraints.
//!
//! # Cost policy
//!
//! ```text
//! forbidden(a, b) = (a, b) ∈ blocked
//!                || risk(b)         >= hazard_threshold
//!                || arc_risk(a, b)  >= hazard_threshold
//!
//! arc_cost(a, b)  = penalty + distance(a, b)                         if forbidden
//!                 = distance(a, b) + round(λ · arc_risk(a, b) · scale)  otherwise
//! ```
//!
//! `arc_risk(a, b)` is `risk(b)` unless the network overrides that arc.
//!
//! `penalty` is derived per network and weight so that it strictly exceeds
//! the cost of *any* tour built only from permitted arcs.  A single forbidden
//! arc therefore always loses against every permitted alternative.
//!
//! # Rounding
//!
//! Weighted risk uses `f64::round` (half away from zero).  The product is
//! never negative, so this is round-half-up.
//!
//! # Overflow
//!
//! All costs are `u64`.  Construction checks that the penalty, and the sum of
//! `n` maximal forbidden arcs, fit in `u64`; if not it fails with
//! [`NetworkError::CostOverflow`] instead of wrapping.

use sr_core::NodeId;

use crate::{BlockedEdges, NetworkError, NetworkResult, RiskNetwork};

/// Largest integer every `f64` below it represents exactly.
const F64_EXACT_LIMIT: f64 = 9_007_199_254_740_992.0; // 2^53

/// Weighted risk term `round(weight · risk · scale)`, or `None` if the
/// product cannot be represented exactly as an integer.
fn weighted_risk(weight: f64, risk: u32, scale: u32) -> Option<u64> {
    let x = (weight * f64::from(risk) * f64::from(scale)).round();
    (x < F64_EXACT_LIMIT).then_some(x as u64)
}

// ── CostModel ─────────────────────────────────────────────────────────────────

/// Arc-cost evaluator bound to one network, one blocked set and one risk
/// weight.
///
/// This is the only place the composite cost is defined.  Searchers consume
/// it through [`CostMatrix`].
pub struct CostModel<'a> {
    network:          &'a RiskNetwork,
    blocked:          &'a BlockedEdges,
    weight:           f64,
    risk_scale:       u32,
    hazard_threshold: u32,
    penalty:          u64,
}

impl<'a> CostModel<'a> {
    /// Bind the cost policy to `network`, `blocked` and risk weight `weight`.
    ///
    /// Fails if `weight` is negative or non-finite, or if any cost could
    /// overflow `u64`.
    pub fn new(
        network:          &'a RiskNetwork,
        blocked:          &'a BlockedEdges,
        weight:           f64,
        risk_scale:       u32,
        hazard_threshold: u32,
    ) -> NetworkResult<Self> {
        if !weight.is_finite() || weight < 0.0 {
            return Err(NetworkError::InvalidRiskWeight(weight));
        }
        let overflow = || NetworkError::CostOverflow { weight };

        let n = network.node_count() as u64;
        let max_dist = u64::from(network.max_distance());
        // Worst permitted arc: longest distance at the highest risk still
        // below the hazard threshold.
        let max_risk_term = weighted_risk(weight, hazard_threshold.saturating_sub(1), risk_scale)
            .ok_or_else(overflow)?;
        let max_permitted_arc = max_dist.checked_add(max_risk_term).ok_or_else(overflow)?;

        let penalty = max_permitted_arc
            .checked_mul(n)
            .and_then(|v| v.checked_add(1))
            .ok_or_else(overflow)?;

        // A tour of n forbidden arcs must still be summable.
        penalty
            .checked_add(max_dist)
            .and_then(|v| v.checked_mul(n))
            .ok_or_else(overflow)?;

        Ok(Self { network, blocked, weight, risk_scale, hazard_threshold, penalty })
    }

    pub fn network(&self) -> &RiskNetwork {
        self.network
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// The additive penalty applied to forbidden arcs.
    pub fn penalty(&self) -> u64 {
        self.penalty
    }

    /// `true` if the arc is blocked, enters a hazardous node, or is itself
    /// hazardous.
    #[inline]
    pub fn is_forbidden(&self, from: NodeId, to: NodeId) -> bool {
        self.blocked.contains(from, to)
            || self.network.risk(to) >= self.hazard_threshold
            || self.network.arc_risk(from, to) >= self.hazard_threshold
    }

    /// Composite cost of traversing `from → to`.
    pub fn arc_cost(&self, from: NodeId, to: NodeId) -> u64 {
        let dist = u64::from(self.network.distance(from, to));
        if self.is_forbidden(from, to) {
            return self.penalty + dist;
        }
        // Bounded by the check in `new`: arc_risk < hazard_threshold.
        let risk = weighted_risk(self.weight, self.network.arc_risk(from, to), self.risk_scale)
            .unwrap_or(self.penalty);
        dist + risk
    }

    /// Evaluate every arc once.  Forbidden arcs and self-loops become `None`.
    pub fn materialize(&self) -> CostMatrix {
        let n = self.network.node_count();
        let mut cells = Vec::with_capacity(n * n);
        for from in self.network.nodes() {
            for to in self.network.nodes() {
                let cell = if from == to || self.is_forbidden(from, to) {
                    None
                } else {
                    Some(self.arc_cost(from, to))
                };
                cells.push(cell);
            }
        }
        CostMatrix { n, cells }
    }
}

// ── CostMatrix ────────────────────────────────────────────────────────────────

/// Dense `n × n` table of permitted arc costs.  `None` marks an arc the
/// search must never take.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CostMatrix {
    n:     usize,
    cells: Vec<Option<u64>>,
}

impl CostMatrix {
    /// Build a matrix directly from rows, mainly for solver tests.
    ///
    /// # Panics
    /// Panics if `rows` is not square.
    pub fn from_rows(rows: Vec<Vec<Option<u64>>>) -> Self {
        let n = rows.len();
        let mut cells = Vec::with_capacity(n * n);
        for row in rows {
            assert_eq!(row.len(), n, "cost matrix must be square");
            cells.extend(row);
        }
        Self { n, cells }
    }

    pub fn node_count(&self) -> usize {
        self.n
    }

    /// Cost of `from → to`, or `None` if the arc is forbidden.
    #[inline]
    pub fn arc(&self, from: NodeId, to: NodeId) -> Option<u64> {
        self.cells[from.index() * self.n + to.index()]
    }

    /// Raw index form of [`arc`](Self::arc) for search inner loops.
    #[inline]
    pub fn arc_idx(&self, from: usize, to: usize) -> Option<u64> {
        self.cells[from * self.n + to]
    }

    /// Sum of arc costs along consecutive pairs of `path`.  `None` if any arc
    /// is forbidden.
    pub fn path_cost(&self, path: &[NodeId]) -> Option<u64> {
        path.windows(2)
            .try_fold(0u64, |acc, w| Some(acc + self.arc(w[0], w[1])?))
    }
}
