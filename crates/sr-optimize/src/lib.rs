//! `sr-optimize` — risk-aware closed-tour search for the SafeRoute engine.
//!
//! # Solve pipeline
//!
//! ```text
//! solve(λ, hazards):
//!   ① Resolve   — snap hazards to nodes, build a fresh BlockedEdges set.
//!   ② Cost      — bind CostModel(network, blocked, λ), materialize CostMatrix.
//!   ③ Search    — ExactSolver (Held-Karp) if node_count <= exact_node_limit,
//!                 otherwise HeuristicSolver (greedy + 2-opt).
//!   ④ Metrics   — walk the winning tour's arcs, sum true distance and risk.
//! ```
//!
//! A [`Sweep`] repeats the pipeline over a sequence of risk weights.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs sweep weights on Rayon's thread pool.             |
//! | `serde`    | Derives `Serialize`/`Deserialize` on result types.     |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use sr_optimize::{linspace, NoopObserver, SolverBuilder, Sweep};
//!
//! let solver = SolverBuilder::new(network).build()?;
//! let result = solver.solve(5.0, &hazards)?;
//! let samples = Sweep::new(&solver, linspace(0.0, 10.0, 20)).run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod exact;
pub mod heuristic;
pub mod metrics;
pub mod observer;
pub mod search;
pub mod solver;
pub mod sweep;
pub mod tour;


pub use builder::SolverBuilder;
pub use error::{OptimizeError, OptimizeResult};
pub use exact::ExactSolver;
pub use heuristic::HeuristicSolver;
pub use metrics::{TourMetrics, tour_metrics, tour_objective};
pub use observer::{NoopObserver, SweepObserver};
pub use search::{SolveMode, TourSolver};
pub use solver::{RiskAwareSolver, SolveResult};
pub use sweep::{Sweep, SweepSample, linspace, pareto_frontier};
pub use tour::Tour;
