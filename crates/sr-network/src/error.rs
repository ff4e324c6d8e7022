//! Network-subsystem error type.

use thiserror::Error;

use sr_core::NodeId;

/// Errors produced by `sr-network`.
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("network needs at least 2 nodes, got {got}")]
    TooFewNodes { got: usize },

    #[error("node {0} has a non-finite coordinate")]
    InvalidCoordinate(NodeId),

    #[error("node {0} not found in network")]
    NodeNotFound(NodeId),

    #[error("distance matrix has {got} rows, expected {expected}")]
    MatrixRows { expected: usize, got: usize },

    #[error("distance matrix row {row} has {got} entries, expected {expected}")]
    MatrixShape { row: usize, expected: usize, got: usize },

    #[error("distance matrix diagonal at {node} is {value}, expected 0")]
    MatrixDiagonal { node: NodeId, value: u32 },

    #[error("distance matrix is not symmetric between {a} and {b}")]
    MatrixAsymmetric { a: NodeId, b: NodeId },

    #[error("risk weight {0} must be finite and >= 0")]
    InvalidRiskWeight(f64),

    #[error("arc costs overflow at risk weight {weight}")]
    CostOverflow { weight: f64 },

    #[error("parse error: {0}")]
    Parse(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type NetworkResult<T> = Result<T, NetworkError>;
