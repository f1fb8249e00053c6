//! Minimum-cost maximum flow by successive shortest paths.
//!
//! The residual network is an arc list: each edge `u -> v` with capacity `c`
//! and cost `w` becomes a forward arc `(c, w)` plus a reverse arc `(0, -w)`.
//! Each round runs Bellman-Ford from the source over arcs with spare capacity,
//! pushes the bottleneck along the cheapest path and adds `flow * w` per arc.
//!
//! A V-th Bellman-Ford pass that still relaxes an arc means a negative cycle is
//! reachable from the source; the computation stops with
//! `NegativeCycleDetected` instead of returning a meaningless total.

use serde::{Deserialize, Serialize};

use supplynet_core::{AlgoError, AlgoResult, Matrix, NodeId, UNREACHABLE, extend_distance};

use crate::validate_network;

/// Result of a minimum-cost maximum flow computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinCostFlow {
    /// Total flow pushed from source to sink (the maximum flow).
    pub flow: i64,
    /// Sum of `flow * cost` over every edge used.
    pub cost: i64,
    /// Flow routed along each input edge.
    pub flows: Matrix,
}

#[derive(Debug, Clone, Copy)]
struct Arc {
    to: NodeId,
    capacity: i64,
    cost: i64,
    /// Index of the paired arc in `arcs[to]`.
    rev: usize,
    /// Original capacity for forward arcs, `None` for reverse arcs.
    original: Option<i64>,
}

struct CostNetwork {
    arcs: Vec<Vec<Arc>>,
}

impl CostNetwork {
    fn from_matrices(capacity: &Matrix, cost: &Matrix) -> Self {
        let n = capacity.size();
        let mut arcs: Vec<Vec<Arc>> = vec![Vec::new(); n];
        for u in 0..n {
            for v in 0..n {
                let cap = capacity.get(u, v);
                if u == v || cap == 0 {
                    continue;
                }
                let w = cost.get(u, v);
                let forward = arcs[u].len();
                let backward = arcs[v].len();
                arcs[u].push(Arc {
                    to: v,
                    capacity: cap,
                    cost: w,
                    rev: backward,
                    original: Some(cap),
                });
                arcs[v].push(Arc {
                    to: u,
                    capacity: 0,
                    cost: -w,
                    rev: forward,
                    original: None,
                });
            }
        }
        Self { arcs }
    }

    /// Bellman-Ford over arcs with spare capacity.
    ///
    /// Returns `(dist, parent)` where `parent[v] = (u, arc index in arcs[u])`.
    fn cheapest_paths(
        &self,
        source: NodeId,
    ) -> AlgoResult<(Vec<i64>, Vec<Option<(NodeId, usize)>>)> {
        let n = self.arcs.len();
        let mut dist = vec![UNREACHABLE; n];
        let mut parent = vec![None; n];
        dist[source] = 0;

        for _ in 0..n.saturating_sub(1) {
            if !self.relax_all(&mut dist, &mut parent)? {
                return Ok((dist, parent));
            }
        }

        if self.relax_all(&mut dist, &mut parent)? {
            return Err(AlgoError::NegativeCycleDetected);
        }
        Ok((dist, parent))
    }

    fn relax_all(
        &self,
        dist: &mut [i64],
        parent: &mut [Option<(NodeId, usize)>],
    ) -> AlgoResult<bool> {
        let mut updated = false;
        for (u, arcs) in self.arcs.iter().enumerate() {
            if dist[u] == UNREACHABLE {
                continue;
            }
            for (idx, arc) in arcs.iter().enumerate() {
                if arc.capacity <= 0 {
                    continue;
                }
                let candidate = extend_distance(dist[u], arc.cost)?;
                if candidate < dist[arc.to] {
                    dist[arc.to] = candidate;
                    parent[arc.to] = Some((u, idx));
                    updated = true;
                }
            }
        }
        Ok(updated)
    }

    fn flows(&self) -> Matrix {
        let mut flows = Matrix::zeros(self.arcs.len());
        for (u, arcs) in self.arcs.iter().enumerate() {
            for arc in arcs {
                if let Some(original) = arc.original {
                    flows.set(u, arc.to, original - arc.capacity);
                }
            }
        }
        flows
    }
}

/// Total cost of a maximum flow of minimum cost from `source` to `sink`.
pub fn min_cost_max_flow(
    capacity: &Matrix,
    cost: &Matrix,
    source: NodeId,
    sink: NodeId,
) -> AlgoResult<i64> {
    min_cost_max_flow_detailed(capacity, cost, source, sink).map(|result| result.cost)
}

/// Successive-shortest-path min-cost max-flow returning flow, cost and the
/// per-edge assignment.
///
/// Costs may be negative; a negative cycle reachable from `source` fails with
/// [`AlgoError::NegativeCycleDetected`].
pub fn min_cost_max_flow_detailed(
    capacity: &Matrix,
    cost: &Matrix,
    source: NodeId,
    sink: NodeId,
) -> AlgoResult<MinCostFlow> {
    validate_network(capacity, source, sink)?;
    if cost.size() != capacity.size() {
        return Err(AlgoError::invalid_input(format!(
            "cost matrix is {n}x{n} but capacity matrix is {m}x{m}",
            n = cost.size(),
            m = capacity.size()
        )));
    }

    let mut network = CostNetwork::from_matrices(capacity, cost);
    let mut flow = 0i64;
    let mut total_cost = 0i64;
    let mut rounds = 0usize;

    loop {
        let (dist, parent) = network.cheapest_paths(source)?;
        if dist[sink] == UNREACHABLE {
            break;
        }

        // Walk back from the sink collecting (node, arc index) hops.
        let mut hops = Vec::new();
        let mut v = sink;
        while v != source {
            let Some((u, idx)) = parent[v] else {
                return Err(AlgoError::invalid_input("broken augmenting path"));
            };
            hops.push((u, idx));
            v = u;
        }

        let bottleneck = hops
            .iter()
            .map(|&(u, idx)| network.arcs[u][idx].capacity)
            .min()
            .unwrap_or(0);

        for &(u, idx) in &hops {
            let arc = network.arcs[u][idx];
            network.arcs[u][idx].capacity -= bottleneck;
            network.arcs[arc.to][arc.rev].capacity += bottleneck;
            total_cost = bottleneck
                .checked_mul(arc.cost)
                .and_then(|c| total_cost.checked_add(c))
                .ok_or_else(|| AlgoError::invalid_input("total flow cost overflows i64"))?;
        }

        flow = flow
            .checked_add(bottleneck)
            .ok_or_else(|| AlgoError::invalid_input("total flow overflows i64"))?;
        rounds += 1;
        tracing::trace!(bottleneck, path_cost = dist[sink], "augmented along cheapest path");
    }

    tracing::debug!(source, sink, flow, cost = total_cost, rounds, "min-cost max flow computed");

    Ok(MinCostFlow {
        flow,
        cost: total_cost,
        flows: network.flows(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::max_flow::max_flow;

    fn m(rows: Vec<Vec<i64>>) -> Matrix {
        Matrix::from_rows(rows).unwrap()
    }

    #[test]
    fn prefers_cheaper_routes_while_saturating_the_network() {
        let cap = m(vec![
            vec![0, 2, 2, 0],
            vec![0, 0, 1, 2],
            vec![0, 0, 0, 2],
            vec![0, 0, 0, 0],
        ]);
        let cost = m(vec![
            vec![0, 1, 2, 0],
            vec![0, 0, 1, 3],
            vec![0, 0, 0, 1],
            vec![0, 0, 0, 0],
        ]);
        let result = min_cost_max_flow_detailed(&cap, &cost, 0, 3).unwrap();
        assert_eq!(result.flow, 4);
        assert_eq!(result.cost, 14);
        assert_eq!(result.flows.get(1, 2), 0);
        assert_eq!(result.flow, max_flow(&cap, 0, 3).unwrap());
    }

    #[test]
    fn picks_cheap_path_when_capacity_is_limited() {
        // Two parallel routes, sink edge only admits one unit.
        let cap = m(vec![
            vec![0, 1, 1, 0, 0],
            vec![0, 0, 0, 1, 0],
            vec![0, 0, 0, 1, 0],
            vec![0, 0, 0, 0, 1],
            vec![0, 0, 0, 0, 0],
        ]);
        let cost = m(vec![
            vec![0, 5, 1, 0, 0],
            vec![0, 0, 0, 5, 0],
            vec![0, 0, 0, 1, 0],
            vec![0, 0, 0, 0, 0],
            vec![0, 0, 0, 0, 0],
        ]);
        let result = min_cost_max_flow_detailed(&cap, &cost, 0, 4).unwrap();
        assert_eq!(result.flow, 1);
        assert_eq!(result.cost, 2);
        assert_eq!(result.flows.get(0, 2), 1);
        assert_eq!(result.flows.get(0, 1), 0);
    }

    #[test]
    fn negative_costs_without_cycles_are_allowed() {
        let cap = m(vec![vec![0, 1, 0], vec![0, 0, 1], vec![0, 0, 0]]);
        let cost = m(vec![vec![0, -5, 0], vec![0, 0, 2], vec![0, 0, 0]]);
        assert_eq!(min_cost_max_flow(&cap, &cost, 0, 2).unwrap(), -3);
    }

    #[test]
    fn reachable_negative_cycle_is_reported() {
        let cap = m(vec![
            vec![0, 1, 0, 0],
            vec![0, 0, 1, 0],
            vec![0, 1, 0, 1],
            vec![0, 0, 0, 0],
        ]);
        let cost = m(vec![
            vec![0, 1, 0, 0],
            vec![0, 0, -3, 0],
            vec![0, 1, 0, 1],
            vec![0, 0, 0, 0],
        ]);
        assert_eq!(
            min_cost_max_flow(&cap, &cost, 0, 3),
            Err(AlgoError::NegativeCycleDetected)
        );
    }

    #[test]
    fn unreachable_sink_costs_nothing() {
        let cap = m(vec![vec![0, 3, 0], vec![0, 0, 0], vec![0, 0, 0]]);
        let cost = m(vec![vec![0, 4, 0], vec![0, 0, 0], vec![0, 0, 0]]);
        let result = min_cost_max_flow_detailed(&cap, &cost, 0, 2).unwrap();
        assert_eq!((result.flow, result.cost), (0, 0));
    }

    #[test]
    fn mismatched_cost_matrix_is_invalid_input() {
        let cap = Matrix::zeros(3);
        let cost = Matrix::zeros(2);
        assert!(matches!(
            min_cost_max_flow(&cap, &cost, 0, 2),
            Err(AlgoError::InvalidInput(_))
        ));
    }

    #[test]
    fn antiparallel_edges_keep_their_own_costs() {
        let cap = m(vec![vec![0, 2, 0], vec![1, 0, 2], vec![0, 0, 0]]);
        let cost = m(vec![vec![0, 3, 0], vec![7, 0, 1], vec![0, 0, 0]]);
        let result = min_cost_max_flow_detailed(&cap, &cost, 0, 2).unwrap();
        assert_eq!(result.flow, 2);
        assert_eq!(result.cost, 8);
        assert_eq!(result.flows.get(1, 0), 0);
    }

    #[test]
    fn overflowing_total_cost_is_an_error() {
        let cap = m(vec![vec![0, 1 << 40, 0], vec![0, 0, 1 << 40], vec![0, 0, 0]]);
        let cost = m(vec![vec![0, 1 << 30, 0], vec![0, 0, 1], vec![0, 0, 0]]);
        assert!(matches!(
            min_cost_max_flow(&cap, &cost, 0, 2),
            Err(AlgoError::InvalidInput(_))
        ));
    }

    #[test]
    fn overflowing_path_cost_is_an_error() {
        let cap = m(vec![vec![0, 1, 0], vec![0, 0, 1], vec![0, 0, 0]]);
        let cost = m(vec![vec![0, i64::MAX - 1, 0], vec![0, 0, 5], vec![0, 0, 0]]);
        assert!(matches!(
            min_cost_max_flow(&cap, &cost, 0, 2),
            Err(AlgoError::InvalidInput(_))
        ));
    }

    #[test]
    fn overflowing_capacities_are_rejected_before_augmenting() {
        let cap = m(vec![vec![0, i64::MAX], vec![i64::MAX, 0]]);
        let cost = Matrix::zeros(2);
        assert!(matches!(
            min_cost_max_flow(&cap, &cost, 0, 1),
            Err(AlgoError::InvalidInput(_))
        ));
    }
}
