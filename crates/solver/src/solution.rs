use serde::{Deserialize, Serialize};

use supplynet_coding::CodeBook;
use supplynet_constraints::{Board, QueenPlacement};
use supplynet_core::{Matrix, NodeId};
use supplynet_dp::KnapsackSolution;
use supplynet_flow::{MaxFlow, MinCostFlow};
use supplynet_scheduling::Activity;

/// Result of a [`crate::Problem`], tagged by `kind` like the request.
///
/// Unreachable distances carry the `UNREACHABLE` sentinel (`i64::MAX`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Solution {
    Distances { distances: Vec<i64> },
    /// Empty when the goal is unreachable.
    Path { path: Vec<NodeId>, cost: Option<i64> },
    DistanceMatrix { distances: Matrix },
    MaxFlow { flow: MaxFlow },
    MinCostFlow { flow: MinCostFlow },
    Knapsack { selection: KnapsackSolution },
    CommonSubsequence { length: usize, witness: String },
    EditDistance { distance: usize },
    Schedule { activities: Vec<Activity> },
    PrefixCode { codes: CodeBook<char> },
    Placements { solutions: Vec<QueenPlacement> },
    SolvedBoard { board: Board },
}
