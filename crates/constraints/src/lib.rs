//! `supplynet-constraints`: backtracking search for placement and filling puzzles.
//!
//! - [`solve_n_queens`]: every placement of `n` mutually non-attacking queens.
//! - [`solve_board`]: fill a Sudoku-style grid under row/column/box constraints.
//!
//! Recursion depth is bounded by `n` rows (queens) or by the number of empty
//! cells (boards). [`solve_n_queens_iterative`] runs the same search on an
//! explicit stack for callers that cannot afford deep recursion.

pub mod board;
pub mod n_queens;

pub use board::{Board, solve_board};
pub use n_queens::{QueenPlacement, count_n_queens, solve_n_queens, solve_n_queens_iterative};
