use thiserror::Error;

use crate::graph::{Node, NumNodes};

/// Rejected graph input; raised when a graph is constructed, never by the solvers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("self-loop at node {0}")]
    SelfLoop(Node),

    #[error("node {node} out of range for graph with {n} nodes")]
    NodeOutOfRange { node: Node, n: NumNodes },

    #[error("graph powers require an exponent of at least 1")]
    InvalidPowerExponent,
}

/// Failures of an exact solver. The policy cutoff for oversized inputs is not an error
/// and is reported through [`crate::exact::Alpha::TooLarge`] instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolverError {
    #[error("ILP backend reports an infeasible model")]
    Infeasible,

    #[error("ILP backend reports an unbounded model")]
    Unbounded,

    #[error("ILP backend reached its time limit")]
    Timeout,

    #[error("ILP backend failed: {0}")]
    Backend(String),

    #[error("extracted set {nodes:?} violates the problem definition")]
    InvalidSolution { nodes: Vec<Node> },

    #[error("objective value {objective} does not match solution size {size}")]
    ObjectiveMismatch { objective: f64, size: NumNodes },

    #[error("brute force is limited to {limit} nodes, graph has {n}")]
    TooLargeForNaive { n: NumNodes, limit: NumNodes },
}

