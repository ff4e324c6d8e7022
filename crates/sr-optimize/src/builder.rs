//! Fluent builder for constructing a [`RiskAwareSolver`].

use tracing::info;

use sr_core::SolverConfig;
use sr_network::{BlockedEdges, CostModel, RiskNetwork};

use crate::{HeuristicSolver, OptimizeError, OptimizeResult, RiskAwareSolver};

/// Fluent builder for [`RiskAwareSolver`].
///
/// # Required inputs
///
/// - [`RiskNetwork`] from [`sr_network::RiskNetworkBuilder`]
///
/// # Optional inputs (have defaults)
///
/// | Method       | Default                    |
/// |--------------|----------------------------|
/// | `.config(c)` | `SolverConfig::default()`  |
///
/// # Example
///
/// ```rust,ignore
/// let mut b = RiskNetworkBuilder::new();
/// b.add_node(GeoPoint::new(23.8142, 86.4412));
/// b.add_node_with_risk(GeoPoint::new(23.7957, 86.4266), 10);
/// // …
/// let network = b.build()?;
/// let solver = SolverBuilder::new(network).build()?;
/// let result = solver.solve(5.0, &[])?;
/// ```
pub struct SolverBuilder {
    network: RiskNetwork,
    config:  Option<SolverConfig>,
}

impl SolverBuilder {
    pub fn new(network: RiskNetwork) -> Self {
        Self { network, config: None }
    }

    /// Override the default configuration.
    pub fn config(mut self, config: SolverConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Validate the configuration against the network and return a ready
    /// solver.
    ///
    /// Fails if the configuration is invalid, the depot is not a node of the
    /// network, or costs at `max_risk_weight` would overflow.
    pub fn build(self) -> OptimizeResult<RiskAwareSolver> {
        let config = self.config.unwrap_or_default();
        config.validate()?;

        let node_count = self.network.node_count();
        if !self.network.contains(config.depot) {
            return Err(OptimizeError::DepotOutOfRange { depot: config.depot, node_count });
        }

        // The penalty grows with the weight, so the largest accepted weight
        // is the one that can overflow.
        CostModel::new(
            &self.network,
            &BlockedEdges::new(),
            config.max_risk_weight,
            config.risk_scale,
            config.hazard_threshold,
        )?;

        let heuristic = HeuristicSolver {
            two_opt:             config.two_opt,
            max_backtrack_steps: config.max_backtrack_steps,
        };

        info!(
            nodes = node_count,
            depot = %config.depot,
            exact = node_count <= config.exact_node_limit,
            "solver ready"
        );

        Ok(RiskAwareSolver { network: self.network, config, heuristic })
    }
}
