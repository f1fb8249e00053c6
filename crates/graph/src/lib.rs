//! `supplynet-graph`: shortest paths over weighted supply networks.
//!
//! - [`shortest_path`] / [`shortest_path_tree`]: single-source Dijkstra (non-negative weights).
//! - [`heuristic_path`] / [`heuristic_route`]: A* guided by a caller-supplied heuristic.
//! - [`all_pairs_shortest_path`]: Floyd-Warshall with negative-cycle detection.
//!
//! All functions are pure: they allocate their own frontier and tables per call.

pub mod a_star;
pub mod dijkstra;
pub mod floyd_warshall;
pub mod frontier;

pub use a_star::{HeuristicRoute, heuristic_path, heuristic_route};
pub use dijkstra::{ShortestPathTree, shortest_path, shortest_path_tree};
pub use floyd_warshall::{DistanceMatrix, all_pairs_from_matrix, all_pairs_shortest_path};
pub use frontier::Frontier;
