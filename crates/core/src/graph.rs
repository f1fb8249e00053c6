//! Index-based directed graph arena.
//!
//! Nodes are the dense ids `0..N`; each node owns the list of its outgoing
//! edges. There are no node objects and no references between edges, so a
//! graph is a plain value that can be cloned, sent across threads and
//! serialized by callers.

use serde::{Deserialize, Serialize};

use crate::error::{AlgoError, AlgoResult};
use crate::matrix::Matrix;

/// Dense node identifier in `0..node_count`.
pub type NodeId = usize;

/// Sentinel distance for a node that cannot be reached.
pub const UNREACHABLE: i64 = i64::MAX;

/// `distance + weight`, failing with [`AlgoError::InvalidInput`] when the sum
/// leaves `i64` or lands on [`UNREACHABLE`], so a long route is never reported
/// as a missing one.
pub fn extend_distance(distance: i64, weight: i64) -> AlgoResult<i64> {
    distance
        .checked_add(weight)
        .filter(|&d| d != UNREACHABLE)
        .ok_or_else(|| {
            AlgoError::invalid_input(format!("path length {distance} + {weight} overflows i64"))
        })
}

/// Outgoing edge `-> to` with an integer weight.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub to: NodeId,
    pub weight: i64,
}

impl Edge {
    pub fn new(to: NodeId, weight: i64) -> Self {
        Self { to, weight }
    }
}

/// Directed weighted graph stored as adjacency lists keyed by node id.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Edge>>", into = "Vec<Vec<Edge>>")]
pub struct Graph {
    adjacency: Vec<Vec<Edge>>,
}

impl Graph {
    /// Create a graph with `node_count` nodes and no edges.
    pub fn new(node_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); node_count],
        }
    }

    /// Build a graph from `(from, to, weight)` triples.
    pub fn from_edges<I>(node_count: usize, edges: I) -> AlgoResult<Self>
    where
        I: IntoIterator<Item = (NodeId, NodeId, i64)>,
    {
        let mut graph = Self::new(node_count);
        for (from, to, weight) in edges {
            graph.add_edge(from, to, weight)?;
        }
        Ok(graph)
    }

    /// Build a graph from a weight matrix.
    ///
    /// Entries equal to [`UNREACHABLE`] mean "no edge"; the diagonal is ignored.
    pub fn from_matrix(matrix: &Matrix) -> Self {
        let n = matrix.size();
        let mut graph = Self::new(n);
        for (from, row) in matrix.rows().enumerate() {
            for (to, &weight) in row.iter().enumerate() {
                if from != to && weight != UNREACHABLE {
                    graph.adjacency[from].push(Edge::new(to, weight));
                }
            }
        }
        graph
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Add a directed edge `from -> to`.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, weight: i64) -> AlgoResult<()> {
        let n = self.node_count();
        AlgoError::check_node(from, n)?;
        AlgoError::check_node(to, n)?;
        self.adjacency[from].push(Edge::new(to, weight));
        Ok(())
    }

    /// Add an undirected edge (both directions, same weight).
    pub fn add_undirected(&mut self, a: NodeId, b: NodeId, weight: i64) -> AlgoResult<()> {
        self.add_edge(a, b, weight)?;
        self.add_edge(b, a, weight)
    }

    /// Outgoing edges of `node`. Panics if `node` is out of range.
    pub fn neighbours(&self, node: NodeId) -> &[Edge] {
        &self.adjacency[node]
    }

    /// Every edge as `(from, edge)`.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, &Edge)> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(from, edges)| edges.iter().map(move |e| (from, e)))
    }

    /// Fail with [`AlgoError::InvalidWeight`] on the first negative edge.
    pub fn ensure_non_negative(&self) -> AlgoResult<()> {
        match self.edges().find(|(_, e)| e.weight < 0) {
            Some((from, e)) => Err(AlgoError::InvalidWeight {
                from,
                to: e.to,
                weight: e.weight,
            }),
            None => Ok(()),
        }
    }

    /// Dense weight matrix: `0` on the diagonal, the lightest parallel edge
    /// elsewhere, [`UNREACHABLE`] where there is no edge.
    ///
    /// A negative self-loop lowers its diagonal entry below zero.
    pub fn to_matrix(&self) -> Matrix {
        let mut matrix = Matrix::filled(self.node_count(), UNREACHABLE);
        for node in 0..self.node_count() {
            matrix.set(node, node, 0);
        }
        for (from, e) in self.edges() {
            if e.weight < matrix.get(from, e.to) {
                matrix.set(from, e.to, e.weight);
            }
        }
        matrix
    }
}

impl TryFrom<Vec<Vec<Edge>>> for Graph {
    type Error = AlgoError;

    fn try_from(adjacency: Vec<Vec<Edge>>) -> AlgoResult<Self> {
        let n = adjacency.len();
        for edges in &adjacency {
            for e in edges {
                AlgoError::check_node(e.to, n)?;
            }
        }
        Ok(Self { adjacency })
    }
}

impl From<Graph> for Vec<Vec<Edge>> {
    fn from(graph: Graph) -> Self {
        graph.adjacency
    }
}
