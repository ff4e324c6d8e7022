//! The solve pipeline: hazards → blocked arcs → costs → search → metrics.

use tracing::{debug, warn};

use sr_core::{GeoPoint, NodeId, SolverConfig};
use sr_network::{BlockedEdges, CostModel, HazardMatch, RiskNetwork, resolve_hazards};

use crate::{
    ExactSolver, HeuristicSolver, OptimizeError, OptimizeResult, SolveMode, Tour, TourSolver,
    tour_metrics, tour_objective,
};

// ── SolveResult ───────────────────────────────────────────────────────────────

/// Outcome of one [`RiskAwareSolver::solve`] call.
///
/// `success == false` means no tour of permitted arcs was found; `tour` is
/// then `None`, `route_coords` is empty and the totals are 0.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolveResult {
    pub success:          bool,
    pub mode:             SolveMode,
    pub risk_weight:      f64,
    pub tour:             Option<Tour>,
    /// Coordinates of `tour`, entry for entry.
    pub route_coords:     Vec<GeoPoint>,
    pub total_distance_m: u64,
    pub total_risk:       u64,
    /// Blended cost the search minimized.
    pub objective:        Option<u64>,
    /// How each hazard coordinate was resolved, in input order.
    pub hazards:          Vec<HazardMatch>,
}

impl SolveResult {
    /// Node sequence of the tour, or an empty slice on failure.
    pub fn route_indices(&self) -> &[NodeId] {
        self.tour.as_ref().map_or(&[], |t| t.nodes())
    }

    /// `true` if the tour traverses `from → to`.
    pub fn uses_arc(&self, from: NodeId, to: NodeId) -> bool {
        self.tour.as_ref().is_some_and(|t| t.uses_arc(from, to))
    }

    /// `true` if the tour traverses any arc in `blocked`.
    pub fn uses_any(&self, blocked: &BlockedEdges) -> bool {
        self.tour
            .as_ref()
            .is_some_and(|t| t.arcs().any(|(a, b)| blocked.contains(a, b)))
    }
}

// ── RiskAwareSolver ───────────────────────────────────────────────────────────

/// Risk-aware closed-tour solver over one immutable network.
///
/// Holds no per-call state: every [`solve`](Self::solve) builds its own
/// blocked set and cost matrix, so calls are idempotent and the solver can
/// be shared across threads.
///
/// Build with [`SolverBuilder`][crate::SolverBuilder].
pub struct RiskAwareSolver {
    pub(crate) network:   RiskNetwork,
    pub(crate) config:    SolverConfig,
    pub(crate) heuristic: HeuristicSolver,
}

impl RiskAwareSolver {
    pub fn network(&self) -> &RiskNetwork {
        &self.network
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Search mode every solve on this network uses.
    pub fn mode(&self) -> SolveMode {
        if self.network.node_count() <= self.config.exact_node_limit {
            SolveMode::Exact
        } else {
            SolveMode::Heuristic
        }
    }

    /// Solve at risk weight `risk_weight`, blocking arcs into any node a
    /// hazard coordinate snaps to.
    ///
    /// Infeasibility is reported through `SolveResult::success`.  `Err` is
    /// returned only for an out-of-range weight or a cost overflow.
    pub fn solve(&self, risk_weight: f64, hazards: &[GeoPoint]) -> OptimizeResult<SolveResult> {
        let resolution = resolve_hazards(&self.network, hazards, self.config.snap_threshold_deg2);
        self.run(risk_weight, &resolution.blocked, resolution.matches)
    }

    /// Solve with a caller-built blocked set instead of hazard coordinates.
    pub fn solve_with_blocked(
        &self,
        risk_weight: f64,
        blocked:     &BlockedEdges,
    ) -> OptimizeResult<SolveResult> {
        self.run(risk_weight, blocked, Vec::new())
    }

    fn check_weight(&self, weight: f64) -> OptimizeResult<()> {
        let max = self.config.max_risk_weight;
        if !weight.is_finite() || weight < 0.0 || weight > max {
            return Err(OptimizeError::RiskWeightOutOfRange { weight, max });
        }
        Ok(())
    }

    fn run(
        &self,
        risk_weight: f64,
        blocked:     &BlockedEdges,
        hazards:     Vec<HazardMatch>,
    ) -> OptimizeResult<SolveResult> {
        self.check_weight(risk_weight)?;

        let model = CostModel::new(
            &self.network,
            blocked,
            risk_weight,
            self.config.risk_scale,
            self.config.hazard_threshold,
        )?;
        let costs = model.materialize();

        let mode = self.mode();
        let searcher: &dyn TourSolver = match mode {
            SolveMode::Exact => &ExactSolver,
            SolveMode::Heuristic => {
                warn!(
                    nodes = self.network.node_count(),
                    limit = self.config.exact_node_limit,
                    "node count above exact limit; using heuristic search"
                );
                &self.heuristic
            }
        };

        let Some(tour) = searcher.solve(&costs, self.config.depot) else {
            warn!(
                risk_weight,
                %mode,
                blocked_arcs = blocked.len(),
                "no tour avoids every forbidden arc"
            );
            return Ok(SolveResult {
                success: false,
                mode,
                risk_weight,
                tour: None,
                route_coords: Vec::new(),
                total_distance_m: 0,
                total_risk: 0,
                objective: None,
                hazards,
            });
        };

        let metrics = tour_metrics(&self.network, &tour);
        let objective = tour_objective(&costs, &tour);
        let route_coords = tour.nodes().iter().map(|&n| self.network.position(n)).collect();
        debug!(
            risk_weight,
            %mode,
            objective,
            distance_m = metrics.distance_m,
            risk = metrics.risk,
            "tour found"
        );

        Ok(SolveResult {
            success: true,
            mode,
            risk_weight,
            tour: Some(tour),
            route_coords,
            total_distance_m: metrics.distance_m,
            total_risk: metrics.risk,
            objective,
            hazards,
        })
    }
}
