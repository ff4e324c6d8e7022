use thiserror::Error;

use sr_core::{CoreError, NodeId};
use sr_network::NetworkError;

#[derive(Debug, Error)]
pub enum OptimizeError {
    #[error(transparent)]
    Config(#[from] CoreError),

    #[error("depot {depot} outside network of {node_count} nodes")]
    DepotOutOfRange { depot: NodeId, node_count: usize },

    #[error("risk weight {weight} outside [0, {max}]")]
    RiskWeightOutOfRange { weight: f64, max: f64 },

    #[error("invalid tour: {0}")]
    InvalidTour(String),

    #[error("network error: {0}")]
    Network(#[from] NetworkError),
}

pub type OptimizeResult<T> = Result<T, OptimizeError>;
