//! Residual capacity matrix for augmenting-path max flow.

use std::collections::VecDeque;

use supplynet_core::{Matrix, NodeId};

/// Mutable working copy of a capacity matrix, owned by one flow computation.
pub(crate) struct ResidualMatrix {
    residual: Matrix,
}

impl ResidualMatrix {
    pub(crate) fn new(capacity: &Matrix) -> Self {
        Self {
            residual: capacity.clone(),
        }
    }

    pub(crate) fn get(&self, from: NodeId, to: NodeId) -> i64 {
        self.residual.get(from, to)
    }

    /// Push `amount` along `from -> to`: forward residual shrinks, reverse grows.
    pub(crate) fn push(&mut self, from: NodeId, to: NodeId, amount: i64) {
        self.residual.set(from, to, self.residual.get(from, to) - amount);
        self.residual.set(to, from, self.residual.get(to, from) + amount);
    }

    /// Breadth-first search over edges with positive residual capacity.
    ///
    /// Returns the BFS parent of every node (`None` for the source and for
    /// nodes not reached), which makes the source->sink path a shortest one
    /// in edge count.
    pub(crate) fn bfs(&self, source: NodeId) -> Vec<Option<NodeId>> {
        let n = self.residual.size();
        let mut parent = vec![None; n];
        let mut visited = vec![false; n];
        let mut queue = VecDeque::new();

        visited[source] = true;
        queue.push_back(source);

        while let Some(u) = queue.pop_front() {
            for (v, &cap) in self.residual.row(u).iter().enumerate() {
                if !visited[v] && cap > 0 {
                    visited[v] = true;
                    parent[v] = Some(u);
                    queue.push_back(v);
                }
            }
        }
        parent
    }

    /// Augmenting path `source ..= sink` in the current residual graph.
    pub(crate) fn augmenting_path(&self, source: NodeId, sink: NodeId) -> Option<Vec<NodeId>> {
        let parent = self.bfs(source);
        parent[sink]?;
        let mut path = vec![sink];
        let mut v = sink;
        while let Some(u) = parent[v] {
            path.push(u);
            v = u;
        }
        path.reverse();
        Some(path)
    }

    /// Nodes reachable from `source` through positive residual capacity.
    pub(crate) fn reachable_from(&self, source: NodeId) -> Vec<bool> {
        let parent = self.bfs(source);
        parent
            .iter()
            .enumerate()
            .map(|(v, p)| v == source || p.is_some())
            .collect()
    }
}
