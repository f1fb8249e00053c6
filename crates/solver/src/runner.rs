use supplynet_core::AlgoResult;
use supplynet_dp::{edit_distance, knapsack_selection, lcs_string};

use crate::limits::SolverLimits;
use crate::problem::Problem;
use crate::solution::Solution;

/// Runs problems synchronously and in-process.
///
/// Implementations only choose limits; dispatch itself is shared and stateless,
/// so one solver may be used from many threads at once.
pub trait Solver: Send + Sync + 'static {
    fn limits(&self) -> SolverLimits;

    fn solve(&self, problem: &Problem) -> AlgoResult<Solution> {
        let span = tracing::debug_span!("solve", kind = problem.kind());
        let _guard = span.enter();

        self.limits().check(problem)?;
        let result = dispatch(problem);
        if let Err(err) = &result {
            tracing::debug!(error = %err, "problem failed");
        }
        result
    }
}

/// Solver that runs every problem immediately on the calling thread.
#[derive(Debug, Copy, Clone, Default)]
pub struct LocalSolver {
    limits: SolverLimits,
}

impl LocalSolver {
    pub fn new(limits: SolverLimits) -> Self {
        Self { limits }
    }
}

impl Solver for LocalSolver {
    fn limits(&self) -> SolverLimits {
        self.limits
    }
}

fn dispatch(problem: &Problem) -> AlgoResult<Solution> {
    match problem {
        Problem::ShortestPath { graph, source } => Ok(Solution::Distances {
            distances: supplynet_graph::shortest_path(graph, *source)?,
        }),
        Problem::HeuristicPath {
            graph,
            start,
            goal,
            estimates,
        } => {
            if !estimates.is_empty() && estimates.len() != graph.node_count() {
                return Err(supplynet_core::AlgoError::invalid_input(format!(
                    "{} estimates for a graph of {} nodes",
                    estimates.len(),
                    graph.node_count()
                )));
            }
            let route = supplynet_graph::heuristic_route(graph, *start, *goal, |node, _| {
                estimates.get(node).copied().unwrap_or(0)
            })?;
            Ok(match route {
                Some(route) => Solution::Path {
                    path: route.path,
                    cost: Some(route.cost),
                },
                None => Solution::Path {
                    path: Vec::new(),
                    cost: None,
                },
            })
        }
        Problem::AllPairsShortestPath { graph } => Ok(Solution::DistanceMatrix {
            distances: supplynet_graph::all_pairs_shortest_path(graph)?.into_matrix(),
        }),
        Problem::MaxFlow {
            capacity,
            source,
            sink,
        } => Ok(Solution::MaxFlow {
            flow: supplynet_flow::max_flow_with_cut(capacity, *source, *sink)?,
        }),
        Problem::MinCostMaxFlow {
            capacity,
            cost,
            source,
            sink,
        } => Ok(Solution::MinCostFlow {
            flow: supplynet_flow::min_cost_max_flow_detailed(capacity, cost, *source, *sink)?,
        }),
        Problem::Knapsack {
            weights,
            values,
            capacity,
        } => Ok(Solution::Knapsack {
            selection: knapsack_selection(weights, values, *capacity)?,
        }),
        Problem::LongestCommonSubsequence { a, b } => {
            let witness = lcs_string(a, b);
            Ok(Solution::CommonSubsequence {
                length: witness.chars().count(),
                witness,
            })
        }
        Problem::EditDistance { a, b } => Ok(Solution::EditDistance {
            distance: edit_distance(a, b),
        }),
        Problem::SelectActivities { activities } => Ok(Solution::Schedule {
            activities: supplynet_scheduling::select_activities(activities)?,
        }),
        Problem::PrefixCode { frequencies } => Ok(Solution::PrefixCode {
            codes: supplynet_coding::build_code(frequencies)?,
        }),
        Problem::NQueens { n } => Ok(Solution::Placements {
            solutions: supplynet_constraints::solve_n_queens(*n),
        }),
        Problem::SolveBoard { board } => Ok(Solution::SolvedBoard {
            board: supplynet_constraints::solve_board(board)?,
        }),
    }
}
