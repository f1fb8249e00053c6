//! Edmonds-Karp maximum flow.
//!
//! Variables:
//!   c[u][v] = capacity,  r[u][v] = residual capacity (starts as c)
//!   P       = BFS-shortest augmenting path source -> sink in r
//!   b       = min_{(u,v) in P} r[u][v]   (bottleneck)
//!
//! Augment: for (u,v) in P: r[u][v] -= b, r[v][u] += b;  flow += b
//! Net flow on (u,v) afterwards: c[u][v] - r[u][v]
//!
//! Shortest augmenting paths bound the number of augmentations by O(V * E).

use serde::{Deserialize, Serialize};

use supplynet_core::{AlgoResult, Matrix, NodeId};

use crate::residual::ResidualMatrix;
use crate::validate_network;

/// Maximum flow together with the flow assignment and a minimum cut.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaxFlow {
    pub value: i64,
    /// Net flow routed along each edge (never negative).
    pub flows: Matrix,
    /// Nodes on the source side of the minimum cut.
    pub source_side: Vec<NodeId>,
    /// Saturated edges crossing from the source side to the sink side.
    pub cut_edges: Vec<(NodeId, NodeId)>,
}

impl MaxFlow {
    /// Total capacity of the cut edges; equals `value` (max-flow/min-cut).
    pub fn cut_capacity(&self, capacity: &Matrix) -> i64 {
        self.cut_edges
            .iter()
            .map(|&(u, v)| capacity.get(u, v))
            .sum()
    }
}

/// Maximum flow value from `source` to `sink`. Zero when the sink is unreachable.
pub fn max_flow(capacity: &Matrix, source: NodeId, sink: NodeId) -> AlgoResult<i64> {
    max_flow_with_cut(capacity, source, sink).map(|result| result.value)
}

/// Edmonds-Karp returning the flow assignment and the minimum cut it certifies.
pub fn max_flow_with_cut(capacity: &Matrix, source: NodeId, sink: NodeId) -> AlgoResult<MaxFlow> {
    validate_network(capacity, source, sink)?;

    let n = capacity.size();
    let mut residual = ResidualMatrix::new(capacity);
    let mut value = 0i64;
    let mut augmentations = 0usize;

    while let Some(path) = residual.augmenting_path(source, sink) {
        let bottleneck = path
            .windows(2)
            .map(|hop| residual.get(hop[0], hop[1]))
            .min()
            .unwrap_or(0);
        for hop in path.windows(2) {
            residual.push(hop[0], hop[1], bottleneck);
        }
        // Bounded by the source's outgoing capacity, checked up front.
        value += bottleneck;
        augmentations += 1;
        tracing::trace!(bottleneck, hops = path.len() - 1, "augmented");
    }

    let mut flows = Matrix::zeros(n);
    for u in 0..n {
        for v in 0..n {
            let net = capacity.get(u, v) - residual.get(u, v);
            if net > 0 {
                flows.set(u, v, net);
            }
        }
    }

    let reachable = residual.reachable_from(source);
    let source_side: Vec<NodeId> = (0..n).filter(|&v| reachable[v]).collect();
    let cut_edges = source_side
        .iter()
        .flat_map(|&u| (0..n).map(move |v| (u, v)))
        .filter(|&(u, v)| !reachable[v] && capacity.get(u, v) > 0)
        .collect();

    tracing::debug!(source, sink, value, augmentations, "max flow computed");

    Ok(MaxFlow {
        value,
        flows,
        source_side,
        cut_edges,
    })
}
