//! Floyd-Warshall all-pairs shortest paths.
//!
//! Variables:
//!   d[i][j]    = best known distance i -> j (UNREACHABLE if none)
//!   next[i][j] = first hop on the best known path i -> j
//!
//! Equations:
//!   for k, i, j: d[i][j] = min(d[i][j], d[i][k] + d[k][j])
//!   negative cycle through i  <=>  d[i][i] < 0
//!
//! Complexity: O(V^3) time, O(V^2) space.

use serde::{Deserialize, Serialize};

use supplynet_core::{AlgoError, AlgoResult, Graph, Matrix, NodeId, UNREACHABLE, extend_distance};

/// All-pairs distance table with next-hop links for route reconstruction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistanceMatrix {
    distances: Matrix,
    next: Vec<Option<NodeId>>,
}

impl DistanceMatrix {
    pub fn size(&self) -> usize {
        self.distances.size()
    }

    /// Distance `from -> to`, or [`UNREACHABLE`].
    pub fn distance(&self, from: NodeId, to: NodeId) -> i64 {
        self.distances.get(from, to)
    }

    /// Distances from `from` to every node.
    pub fn row(&self, from: NodeId) -> &[i64] {
        self.distances.row(from)
    }

    pub fn as_matrix(&self) -> &Matrix {
        &self.distances
    }

    pub fn into_matrix(self) -> Matrix {
        self.distances
    }

    /// Nodes on a shortest route `from ..= to`; empty if `to` is unreachable.
    pub fn path(&self, from: NodeId, to: NodeId) -> Vec<NodeId> {
        let n = self.size();
        if from >= n || to >= n || self.distance(from, to) == UNREACHABLE {
            return Vec::new();
        }
        let mut path = vec![from];
        let mut current = from;
        while current != to {
            match self.next[current * n + to] {
                Some(hop) if path.len() <= n => {
                    path.push(hop);
                    current = hop;
                }
                _ => return Vec::new(),
            }
        }
        path
    }
}

/// All-pairs shortest distances over `graph`.
///
/// Negative edge weights are allowed; a negative cycle anywhere in the graph
/// fails with [`AlgoError::NegativeCycleDetected`]. Route lengths that do not
/// fit below [`UNREACHABLE`] fail with [`AlgoError::InvalidInput`].
pub fn all_pairs_shortest_path(graph: &Graph) -> AlgoResult<DistanceMatrix> {
    all_pairs_from_matrix(&graph.to_matrix())
}

/// All-pairs shortest distances over a weight matrix where [`UNREACHABLE`]
/// marks a missing edge.
pub fn all_pairs_from_matrix(weights: &Matrix) -> AlgoResult<DistanceMatrix> {
    let n = weights.size();
    let mut d = weights.clone();
    let mut next = vec![None; n * n];

    for i in 0..n {
        for j in 0..n {
            if i == j {
                // An empty route unless a negative self-loop says otherwise.
                if d.get(i, i) > 0 {
                    d.set(i, i, 0);
                }
                next[i * n + j] = Some(i);
            } else if d.get(i, j) != UNREACHABLE {
                next[i * n + j] = Some(j);
            }
        }
    }

    for k in 0..n {
        for i in 0..n {
            let d_ik = d.get(i, k);
            if d_ik == UNREACHABLE {
                continue;
            }
            for j in 0..n {
                let d_kj = d.get(k, j);
                if d_kj == UNREACHABLE {
                    continue;
                }
                let candidate = extend_distance(d_ik, d_kj)?;
                if candidate < d.get(i, j) {
                    d.set(i, j, candidate);
                    next[i * n + j] = next[i * n + k];
                }
            }
        }

        if let Some(node) = (0..n).find(|&i| d.get(i, i) < 0) {
            tracing::debug!(node, via = k, "floyd-warshall found a negative cycle");
            return Err(AlgoError::NegativeCycleDetected);
        }
    }

    Ok(DistanceMatrix { distances: d, next })
}
