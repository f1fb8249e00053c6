use supplynet_core::{AlgoError, AlgoResult};

use crate::problem::Problem;

/// Upper bounds on problem size, checked before any algorithm runs.
///
/// The algorithms have no cancellation; these limits are how a caller keeps
/// O(V^3) all-pairs runs and exponential backtracking within budget. `None`
/// means unbounded (the default).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct SolverLimits {
    max_nodes: Option<usize>,
    max_items: Option<usize>,
    max_capacity: Option<usize>,
    max_sequence_len: Option<usize>,
    max_queens: Option<usize>,
    max_board_side: Option<usize>,
}

impl SolverLimits {
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Node limit for graph and flow problems.
    pub fn with_max_nodes(mut self, max_nodes: usize) -> Self {
        self.max_nodes = Some(max_nodes);
        self
    }

    /// Item limit for knapsack and activity selection.
    pub fn with_max_items(mut self, max_items: usize) -> Self {
        self.max_items = Some(max_items);
        self
    }

    /// Knapsack capacity limit; the DP table has one column per unit of capacity.
    pub fn with_max_capacity(mut self, max_capacity: usize) -> Self {
        self.max_capacity = Some(max_capacity);
        self
    }

    /// Character limit for each sequence of LCS / edit distance.
    pub fn with_max_sequence_len(mut self, max_sequence_len: usize) -> Self {
        self.max_sequence_len = Some(max_sequence_len);
        self
    }

    pub fn with_max_queens(mut self, max_queens: usize) -> Self {
        self.max_queens = Some(max_queens);
        self
    }

    pub fn with_max_board_side(mut self, max_board_side: usize) -> Self {
        self.max_board_side = Some(max_board_side);
        self
    }

    /// Reject `problem` with [`AlgoError::InvalidInput`] if it exceeds a limit.
    pub fn check(&self, problem: &Problem) -> AlgoResult<()> {
        if let Some(nodes) = problem.node_count() {
            exceeds("nodes", nodes, self.max_nodes)?;
        }
        match problem {
            Problem::Knapsack { weights, capacity, .. } => {
                exceeds("items", weights.len(), self.max_items)?;
                exceeds("capacity", *capacity, self.max_capacity)
            }
            Problem::SelectActivities { activities } => {
                exceeds("items", activities.len(), self.max_items)
            }
            Problem::LongestCommonSubsequence { a, b } | Problem::EditDistance { a, b } => {
                let longest = a.chars().count().max(b.chars().count());
                exceeds("sequence length", longest, self.max_sequence_len)
            }
            Problem::NQueens { n } => exceeds("queens", *n, self.max_queens),
            Problem::SolveBoard { board } => {
                exceeds("board side", board.side(), self.max_board_side)
            }
            _ => Ok(()),
        }
    }
}

fn exceeds(what: &str, actual: usize, limit: Option<usize>) -> AlgoResult<()> {
    match limit {
        Some(max) if actual > max => Err(AlgoError::invalid_input(format!(
            "{what} {actual} exceeds configured limit {max}"
        ))),
        _ => Ok(()),
    }
}
