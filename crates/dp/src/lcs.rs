//! Longest common subsequence.
//!
//! dp[i][j] = LCS length of a[..i] and b[..j]
//!   a[i-1] == b[j-1]  =>  dp[i][j] = dp[i-1][j-1] + 1
//!   otherwise         =>  dp[i][j] = max(dp[i-1][j], dp[i][j-1])
//!
//! Complexity: O(|a| * |b|).

fn table<T: PartialEq>(a: &[T], b: &[T]) -> Vec<Vec<usize>> {
    let mut dp = vec![vec![0usize; b.len() + 1]; a.len() + 1];
    for i in 1..=a.len() {
        for j in 1..=b.len() {
            dp[i][j] = if a[i - 1] == b[j - 1] {
                dp[i - 1][j - 1] + 1
            } else {
                dp[i - 1][j].max(dp[i][j - 1])
            };
        }
    }
    dp
}

/// LCS length of two slices.
pub fn lcs_len<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    table(a, b)[a.len()][b.len()]
}

/// One longest common subsequence, recovered by walking the table back.
pub fn lcs_sequence<T: PartialEq + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    let dp = table(a, b);
    let (mut i, mut j) = (a.len(), b.len());
    let mut out = Vec::with_capacity(dp[i][j]);
    while i > 0 && j > 0 {
        if a[i - 1] == b[j - 1] {
            out.push(a[i - 1].clone());
            i -= 1;
            j -= 1;
        } else if dp[i - 1][j] >= dp[i][j - 1] {
            i -= 1;
        } else {
            j -= 1;
        }
    }
    out.reverse();
    out
}

/// LCS length of two strings, compared by `char`.
pub fn longest_common_subsequence(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    lcs_len(&a, &b)
}

/// One longest common subsequence of two strings.
pub fn lcs_string(a: &str, b: &str) -> String {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    lcs_sequence(&a, &b).into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn is_subsequence(needle: &str, haystack: &str) -> bool {
        let mut rest = haystack.chars();
        needle.chars().all(|c| rest.any(|h| h == c))
    }

    #[test]
    fn matches_known_lengths() {
        assert_eq!(longest_common_subsequence("abcde", "ace"), 3);
        assert_eq!(longest_common_subsequence("abc", "def"), 0);
        assert_eq!(longest_common_subsequence("", "abc"), 0);
        assert_eq!(longest_common_subsequence("AGGTAB", "GXTXAYB"), 4);
    }

    #[test]
    fn recovers_a_witness() {
        assert_eq!(lcs_string("AGGTAB", "GXTXAYB"), "GTAB");
    }

    #[test]
    fn compares_unicode_scalars() {
        assert_eq!(longest_common_subsequence("héllo", "hélp"), 3);
    }

    #[test]
    fn works_on_arbitrary_slices() {
        let route_a = [10, 20, 30, 40];
        let route_b = [20, 40, 50];
        assert_eq!(lcs_len(&route_a, &route_b), 2);
        assert_eq!(lcs_sequence(&route_a, &route_b), vec![20, 40]);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: the witness is a common subsequence of the reported length.
        #[test]
        fn witness_is_common_subsequence(a in "[abc]{0,12}", b in "[abc]{0,12}") {
            let witness = lcs_string(&a, &b);
            prop_assert_eq!(witness.chars().count(), longest_common_subsequence(&a, &b));
            prop_assert!(is_subsequence(&witness, &a));
            prop_assert!(is_subsequence(&witness, &b));
        }

        /// Property: LCS is symmetric and bounded by the shorter input.
        #[test]
        fn symmetric_and_bounded(a in "[a-d]{0,12}", b in "[a-d]{0,12}") {
            let len = longest_common_subsequence(&a, &b);
            prop_assert_eq!(len, longest_common_subsequence(&b, &a));
            prop_assert!(len <= a.len().min(b.len()));
        }
    }
}
