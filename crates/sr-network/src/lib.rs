//! `sr-network` — risk-annotated road network, arc costs, and hazard blocking.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`network`]  | `RiskNetwork` (distance table + R-tree), `RiskNetworkBuilder` |
//! | [`cost`]     | `CostModel`, `CostMatrix`                                  |
//! | [`blocking`] | `BlockedEdges`, `resolve_hazards`, `HazardMatch`           |
//! | [`loader`]   | `load_nodes_reader`, `load_nodes_csv`                      |
//! | [`error`]    | `NetworkError`, `NetworkResult<T>`                         |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod blocking;
pub mod cost;
pub mod error;
pub mod loader;
pub mod network;


pub use blocking::{BlockedEdges, HazardMatch, HazardResolution, resolve_hazards};
pub use cost::{CostMatrix, CostModel};
pub use error::{NetworkError, NetworkResult};
pub use loader::{load_nodes_csv, load_nodes_reader};
pub use network::{RiskNetwork, RiskNetworkBuilder};
