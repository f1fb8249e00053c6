//! Levenshtein edit distance with unit costs.
//!
//! dp[i][0] = i, dp[0][j] = j
//! dp[i][j] = dp[i-1][j-1]                                     if a[i-1] == b[j-1]
//!          = 1 + min(dp[i-1][j], dp[i][j-1], dp[i-1][j-1])    otherwise

/// Minimum number of insertions, deletions and substitutions turning `a` into `b`.
pub fn levenshtein<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    let (m, n) = (a.len(), b.len());
    let mut dp = vec![vec![0usize; n + 1]; m + 1];
    for (i, row) in dp.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..=n {
        dp[0][j] = j;
    }

    for i in 1..=m {
        for j in 1..=n {
            dp[i][j] = if a[i - 1] == b[j - 1] {
                dp[i - 1][j - 1]
            } else {
                1 + dp[i - 1][j].min(dp[i][j - 1]).min(dp[i - 1][j - 1])
            };
        }
    }
    dp[m][n]
}

/// Edit distance between two strings, compared by `char`.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    levenshtein(&a, &b)
}
