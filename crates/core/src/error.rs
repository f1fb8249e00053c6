//! Algorithm error model.

use thiserror::Error;

use crate::graph::NodeId;

/// Result type used across the algorithm crates.
pub type AlgoResult<T> = Result<T, AlgoError>;

/// Algorithm-level error.
///
/// Every variant is a deterministic precondition or outcome failure detected at
/// the point of violation. Unreachable targets are *not* errors: they surface as
/// [`crate::UNREACHABLE`] distances, empty paths or zero flow.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AlgoError {
    /// A negative edge weight was given to an algorithm that requires non-negative weights.
    #[error("invalid weight {weight} on edge {from} -> {to}")]
    InvalidWeight { from: NodeId, to: NodeId, weight: i64 },

    /// A negative cycle makes shortest distances undefined.
    #[error("negative cycle detected")]
    NegativeCycleDetected,

    /// A flow network contains a negative capacity.
    #[error("invalid capacity {capacity} on edge {from} -> {to}")]
    InvalidCapacity { from: NodeId, to: NodeId, capacity: i64 },

    /// A constraint search exhausted every branch without a valid assignment.
    #[error("no assignment satisfies all constraints")]
    Unsolvable,

    /// The input was malformed (mismatched lengths, non-square matrix, out-of-range node, ...).
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl AlgoError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn node_out_of_range(node: NodeId, node_count: usize) -> Self {
        Self::InvalidInput(format!(
            "node {node} out of range (graph has {node_count} nodes)"
        ))
    }

    /// Validate that `node` indexes into a structure of `node_count` nodes.
    pub fn check_node(node: NodeId, node_count: usize) -> AlgoResult<()> {
        if node < node_count {
            Ok(())
        } else {
            Err(Self::node_out_of_range(node, node_count))
        }
    }
}
