//! `supplynet-flow`: capacitated network flow.
//!
//! Networks are square capacity matrices (`capacity[u][v] >= 0`); minimum-cost
//! flow additionally takes a cost matrix of the same size. Every computation
//! works on its own residual copy and never touches the caller's matrices.

pub mod max_flow;
pub mod min_cost;
mod residual;

pub use max_flow::{MaxFlow, max_flow, max_flow_with_cut};
pub use min_cost::{MinCostFlow, min_cost_max_flow, min_cost_max_flow_detailed};

use supplynet_core::{AlgoError, AlgoResult, Matrix, NodeId};

/// Shared precondition check: endpoints in range and distinct, capacities
/// non-negative, and every quantity the residual network can hold fits in `i64`.
///
/// Residual capacity on a node pair never exceeds `capacity[u][v] + capacity[v][u]`
/// and the flow value never exceeds the source's total outgoing capacity, so
/// bounding both here keeps augmentation free of overflow.
pub(crate) fn validate_network(capacity: &Matrix, source: NodeId, sink: NodeId) -> AlgoResult<()> {
    let n = capacity.size();
    AlgoError::check_node(source, n)?;
    AlgoError::check_node(sink, n)?;
    if source == sink {
        return Err(AlgoError::invalid_input("source and sink must be different nodes"));
    }
    for (from, row) in capacity.rows().enumerate() {
        if let Some((to, &cap)) = row.iter().enumerate().find(|(_, c)| **c < 0) {
            return Err(AlgoError::InvalidCapacity {
                from,
                to,
                capacity: cap,
            });
        }
    }
    for u in 0..n {
        for v in (u + 1)..n {
            if capacity.get(u, v).checked_add(capacity.get(v, u)).is_none() {
                return Err(AlgoError::invalid_input(format!(
                    "combined capacity between {u} and {v} overflows i64"
                )));
            }
        }
    }
    capacity
        .row(source)
        .iter()
        .try_fold(0i64, |acc, &cap| acc.checked_add(cap))
        .ok_or_else(|| {
            AlgoError::invalid_input(format!("outgoing capacity of source {source} overflows i64"))
        })?;
    Ok(())
}
