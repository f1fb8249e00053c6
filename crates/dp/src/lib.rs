//! `supplynet-dp`: bottom-up dynamic programming solvers.
//!
//! - Cargo loading: [`knapsack_01`] / [`knapsack_selection`]
//! - Sequence matching: [`longest_common_subsequence`], [`lcs_string`], [`edit_distance`]
//!
//! The sequence solvers are generic over slices (`lcs_len`, `levenshtein`); the
//! `&str` wrappers compare Unicode scalar values.

pub mod edit_distance;
pub mod knapsack;
pub mod lcs;

pub use edit_distance::{edit_distance, levenshtein};
pub use knapsack::{KnapsackSolution, knapsack_01, knapsack_selection};
pub use lcs::{lcs_len, lcs_sequence, lcs_string, longest_common_subsequence};
