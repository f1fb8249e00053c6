//! A* pathfinding with a pluggable heuristic.
//!
//! Variables:
//!   g[v] = cost of the best known path start -> v
//!   h(v, goal) = caller estimate of the remaining cost v -> goal
//!   f[v] = g[v] + h(v, goal)   (frontier priority)
//!
//! If `h` is admissible and consistent the returned path is optimal. Otherwise
//! it is a valid but possibly longer path; this is not checked at runtime.

use serde::{Deserialize, Serialize};

use supplynet_core::{AlgoError, AlgoResult, Graph, NodeId, UNREACHABLE, extend_distance};

use crate::frontier::Frontier;

/// A path found by [`heuristic_route`] and its total edge weight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeuristicRoute {
    pub path: Vec<NodeId>,
    pub cost: i64,
}

/// Node sequence `start ..= goal`, or an empty vector if `goal` is unreachable.
pub fn heuristic_path<H>(
    graph: &Graph,
    start: NodeId,
    goal: NodeId,
    heuristic: H,
) -> AlgoResult<Vec<NodeId>>
where
    H: Fn(NodeId, NodeId) -> i64,
{
    Ok(heuristic_route(graph, start, goal, heuristic)?
        .map(|route| route.path)
        .unwrap_or_default())
}

/// A* search returning the path together with its cost.
///
/// Fails with [`AlgoError::InvalidWeight`] if any edge weight is negative.
pub fn heuristic_route<H>(
    graph: &Graph,
    start: NodeId,
    goal: NodeId,
    heuristic: H,
) -> AlgoResult<Option<HeuristicRoute>>
where
    H: Fn(NodeId, NodeId) -> i64,
{
    let n = graph.node_count();
    AlgoError::check_node(start, n)?;
    AlgoError::check_node(goal, n)?;
    graph.ensure_non_negative()?;

    let mut g_score = vec![UNREACHABLE; n];
    let mut came_from: Vec<Option<NodeId>> = vec![None; n];
    let mut closed = vec![false; n];
    let mut open = Frontier::new();

    g_score[start] = 0;
    open.push(heuristic(start, goal), start);

    let mut expanded = 0usize;
    while let Some((_, node)) = open.pop() {
        if closed[node] {
            continue;
        }
        if node == goal {
            tracing::debug!(start, goal, expanded, cost = g_score[goal], "a* reached goal");
            return Ok(Some(HeuristicRoute {
                path: reconstruct(&came_from, goal),
                cost: g_score[goal],
            }));
        }
        closed[node] = true;
        expanded += 1;

        let g = g_score[node];
        for edge in graph.neighbours(node) {
            if closed[edge.to] {
                continue;
            }
            let tentative = extend_distance(g, edge.weight)?;
            if tentative < g_score[edge.to] {
                came_from[edge.to] = Some(node);
                g_score[edge.to] = tentative;
                open.push(tentative.saturating_add(heuristic(edge.to, goal)), edge.to);
            }
        }
    }

    tracing::debug!(start, goal, expanded, "a* exhausted frontier without reaching goal");
    Ok(None)
}

fn reconstruct(came_from: &[Option<NodeId>], goal: NodeId) -> Vec<NodeId> {
    let mut path = vec![goal];
    let mut current = goal;
    while let Some(prev) = came_from[current] {
        path.push(prev);
        current = prev;
    }
    path.reverse();
    path
}
