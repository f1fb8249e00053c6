//! 0/1 knapsack.
//!
//! Variables:
//!   n        = number of items,  W = capacity
//!   dp[i][w] = best value using only the first i items with capacity w
//!
//! Recurrence:
//!   dp[0][w] = 0
//!   dp[i][w] = dp[i-1][w]                                   if weight[i-1] > w
//!            = max(dp[i-1][w], dp[i-1][w - weight[i-1]] + value[i-1])   otherwise
//!
//! Complexity: O(n * W) time and space, where W is clamped to the total weight
//! of the items that fit at all; the table never grows past what a selection
//! could use.

use serde::{Deserialize, Serialize};

use supplynet_core::{AlgoError, AlgoResult};

/// Optimal value and the items (by input index, ascending) that achieve it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnapsackSolution {
    pub value: i64,
    pub items: Vec<usize>,
    pub total_weight: usize,
}

/// Best total value of items fitting in `capacity`, each item used at most once.
pub fn knapsack_01(weights: &[usize], values: &[i64], capacity: usize) -> AlgoResult<i64> {
    let (dp, width) = build_table(weights, values, capacity)?;
    Ok(dp[weights.len()][width])
}

/// Like [`knapsack_01`] but also recovers the chosen items by walking the table back.
pub fn knapsack_selection(
    weights: &[usize],
    values: &[i64],
    capacity: usize,
) -> AlgoResult<KnapsackSolution> {
    let (dp, width) = build_table(weights, values, capacity)?;
    let n = weights.len();

    let mut items = Vec::new();
    let mut w = width;
    for i in (1..=n).rev() {
        if dp[i][w] != dp[i - 1][w] {
            items.push(i - 1);
            w -= weights[i - 1];
        }
    }
    items.reverse();

    let total_weight = items.iter().map(|&i| weights[i]).sum();
    Ok(KnapsackSolution {
        value: dp[n][width],
        items,
        total_weight,
    })
}

/// Fills the table and returns it with the effective capacity used as its
/// last column.
fn build_table(
    weights: &[usize],
    values: &[i64],
    capacity: usize,
) -> AlgoResult<(Vec<Vec<i64>>, usize)> {
    if weights.len() != values.len() {
        return Err(AlgoError::invalid_input(format!(
            "{} weights but {} values",
            weights.len(),
            values.len()
        )));
    }

    let width = effective_capacity(weights, capacity)?;
    let columns = width
        .checked_add(1)
        .ok_or_else(|| AlgoError::invalid_input("knapsack capacity does not fit in memory"))?;

    let n = weights.len();
    let mut dp = vec![vec![0i64; columns]; n + 1];
    for i in 1..=n {
        let (weight, value) = (weights[i - 1], values[i - 1]);
        for w in 0..=width {
            dp[i][w] = dp[i - 1][w];
            if weight <= w {
                let with_item = dp[i - 1][w - weight].saturating_add(value);
                if with_item > dp[i][w] {
                    dp[i][w] = with_item;
                }
            }
        }
    }

    tracing::trace!(items = n, capacity, width, best = dp[n][width], "knapsack table filled");
    Ok((dp, width))
}

/// `capacity` clamped to the summed weight of items that fit on their own.
///
/// Columns past that sum repeat the last one, so the optimum is unchanged.
fn effective_capacity(weights: &[usize], capacity: usize) -> AlgoResult<usize> {
    let usable = weights
        .iter()
        .filter(|&&w| w <= capacity)
        .try_fold(0usize, |acc, &w| acc.checked_add(w))
        .ok_or_else(|| AlgoError::invalid_input("total item weight overflows usize"))?;
    Ok(usable.min(capacity))
}
