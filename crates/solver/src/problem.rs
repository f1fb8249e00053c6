use serde::{Deserialize, Serialize};

use supplynet_coding::FrequencyTable;
use supplynet_constraints::Board;
use supplynet_core::{Graph, Matrix, NodeId};
use supplynet_scheduling::Activity;

/// A request for one algorithm run.
///
/// Serialized with an internal `kind` tag, e.g.
/// `{"kind": "max_flow", "capacity": [[0, 3], [0, 0]], "source": 0, "sink": 1}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Problem {
    ShortestPath {
        graph: Graph,
        source: NodeId,
    },
    /// A* with a table heuristic: `estimates[v]` is the estimated remaining
    /// cost from `v` to `goal`. An empty table means "no estimate" (Dijkstra order).
    HeuristicPath {
        graph: Graph,
        start: NodeId,
        goal: NodeId,
        #[serde(default)]
        estimates: Vec<i64>,
    },
    AllPairsShortestPath {
        graph: Graph,
    },
    MaxFlow {
        capacity: Matrix,
        source: NodeId,
        sink: NodeId,
    },
    MinCostMaxFlow {
        capacity: Matrix,
        cost: Matrix,
        source: NodeId,
        sink: NodeId,
    },
    Knapsack {
        weights: Vec<usize>,
        values: Vec<i64>,
        capacity: usize,
    },
    LongestCommonSubsequence {
        a: String,
        b: String,
    },
    EditDistance {
        a: String,
        b: String,
    },
    SelectActivities {
        activities: Vec<Activity>,
    },
    PrefixCode {
        frequencies: FrequencyTable<char>,
    },
    NQueens {
        n: usize,
    },
    SolveBoard {
        board: Board,
    },
}

impl Problem {
    /// Stable name of the problem kind (matches the serialized tag).
    pub fn kind(&self) -> &'static str {
        match self {
            Problem::ShortestPath { .. } => "shortest_path",
            Problem::HeuristicPath { .. } => "heuristic_path",
            Problem::AllPairsShortestPath { .. } => "all_pairs_shortest_path",
            Problem::MaxFlow { .. } => "max_flow",
            Problem::MinCostMaxFlow { .. } => "min_cost_max_flow",
            Problem::Knapsack { .. } => "knapsack",
            Problem::LongestCommonSubsequence { .. } => "longest_common_subsequence",
            Problem::EditDistance { .. } => "edit_distance",
            Problem::SelectActivities { .. } => "select_activities",
            Problem::PrefixCode { .. } => "prefix_code",
            Problem::NQueens { .. } => "n_queens",
            Problem::SolveBoard { .. } => "solve_board",
        }
    }

    /// Node count of the graph or network, if the problem has one.
    pub fn node_count(&self) -> Option<usize> {
        match self {
            Problem::ShortestPath { graph, .. }
            | Problem::HeuristicPath { graph, .. }
            | Problem::AllPairsShortestPath { graph } => Some(graph.node_count()),
            Problem::MaxFlow { capacity, .. } | Problem::MinCostMaxFlow { capacity, .. } => {
                Some(capacity.size())
            }
            _ => None,
        }
    }
}
