//! `sr-core` — foundational types for the SafeRoute risk-aware routing engine.
//!
//! This crate is a dependency of every other `sr-*` crate.  It has no `sr-*`
//! dependencies and only `thiserror` (plus optional `serde`) externally.
//!
//! # What lives here
//!
//! | Module     | Contents                                               |
//! |------------|--------------------------------------------------------|
//! | [`ids`]    | `NodeId`                                               |
//! | [`geo`]    | `GeoPoint`, `DistanceMetric` (planar / haversine)      |
//! | [`config`] | `SolverConfig`                                         |
//! | [`error`]  | `CoreError`, `CoreResult`                              |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::SolverConfig;
pub use error::{CoreError, CoreResult};
pub use geo::{DistanceMetric, GeoPoint};
pub use ids::NodeId;
