//! Dijkstra single-source shortest paths.
//!
//! Variables:
//!   dist[v]  = best known distance source -> v (UNREACHABLE until discovered)
//!   pred[v]  = node preceding v on the best known path
//!   done[v]  = v has been popped and finalized
//!
//! Relax (u finalized, edge u -> v with weight w >= 0):
//!   if !done[v] and dist[u] + w < dist[v]: dist[v] = dist[u] + w, pred[v] = u
//!
//! Complexity: O((V + E) log V)

use serde::{Deserialize, Serialize};

use supplynet_core::{AlgoError, AlgoResult, Graph, NodeId, UNREACHABLE, extend_distance};

use crate::frontier::Frontier;

/// Distances and predecessor links from a single source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortestPathTree {
    pub source: NodeId,
    pub distances: Vec<i64>,
    pub predecessors: Vec<Option<NodeId>>,
}

impl ShortestPathTree {
    /// Distance to `node`, or [`UNREACHABLE`].
    pub fn distance(&self, node: NodeId) -> i64 {
        self.distances[node]
    }

    pub fn is_reachable(&self, node: NodeId) -> bool {
        self.distances[node] != UNREACHABLE
    }

    /// Nodes from the source to `target` inclusive; empty if `target` is unreachable.
    pub fn path_to(&self, target: NodeId) -> Vec<NodeId> {
        if target >= self.distances.len() || !self.is_reachable(target) {
            return Vec::new();
        }
        let mut path = vec![target];
        let mut current = target;
        while let Some(prev) = self.predecessors[current] {
            path.push(prev);
            current = prev;
        }
        path.reverse();
        path
    }
}

/// Minimum distance from `source` to every node ([`UNREACHABLE`] where no path exists).
pub fn shortest_path(graph: &Graph, source: NodeId) -> AlgoResult<Vec<i64>> {
    shortest_path_tree(graph, source).map(|tree| tree.distances)
}

/// Dijkstra returning predecessor links alongside the distances.
///
/// Fails with [`AlgoError::InvalidWeight`] if any edge weight is negative, and
/// with [`AlgoError::InvalidInput`] if a reachable distance does not fit below
/// [`UNREACHABLE`].
pub fn shortest_path_tree(graph: &Graph, source: NodeId) -> AlgoResult<ShortestPathTree> {
    let n = graph.node_count();
    AlgoError::check_node(source, n)?;
    graph.ensure_non_negative()?;

    let mut dist = vec![UNREACHABLE; n];
    let mut pred = vec![None; n];
    let mut done = vec![false; n];
    let mut frontier = Frontier::new();

    dist[source] = 0;
    frontier.push(0, source);

    let mut finalized = 0usize;
    while let Some((cost, node)) = frontier.pop() {
        if done[node] || cost > dist[node] {
            continue;
        }
        done[node] = true;
        finalized += 1;

        for edge in graph.neighbours(node) {
            if done[edge.to] {
                continue;
            }
            let next = extend_distance(cost, edge.weight)?;
            if next < dist[edge.to] {
                dist[edge.to] = next;
                pred[edge.to] = Some(node);
                frontier.push(next, edge.to);
            }
        }
    }

    tracing::debug!(source, nodes = n, finalized, "dijkstra finished");

    Ok(ShortestPathTree {
        source,
        distances: dist,
        predecessors: pred,
    })
}
