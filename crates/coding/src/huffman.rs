//! Huffman coding.
//!
//! Build:
//!   leaves   = one node per symbol, weight = count
//!   repeat   pop the two lightest nodes a, b; push Internal(a, b) with weight a + b
//!   until    one node remains (the root)
//!
//! Codes are root-to-leaf paths, `0` = left, `1` = right. A table with a single
//! symbol has no branches, so that symbol gets the code `"0"`.
//!
//! The tree lives in an arena (`Vec<Node>`) and is dropped once codes are emitted.
//! Ties between equal weights are broken by arena index, so the same table
//! always yields the same code book.

use std::cmp::Reverse;
use std::collections::{BTreeMap, BinaryHeap};

use serde::{Deserialize, Serialize};

use supplynet_core::{AlgoError, AlgoResult};

/// Symbol occurrence counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrequencyTable<S: Ord> {
    counts: BTreeMap<S, u64>,
}

impl<S: Ord> FrequencyTable<S> {
    pub fn new() -> Self {
        Self {
            counts: BTreeMap::new(),
        }
    }

    /// Set the count of `symbol`, replacing any previous count.
    pub fn insert(&mut self, symbol: S, count: u64) {
        self.counts.insert(symbol, count);
    }

    /// Record one more occurrence of `symbol`.
    pub fn record(&mut self, symbol: S) {
        *self.counts.entry(symbol).or_insert(0) += 1;
    }

    pub fn count(&self, symbol: &S) -> u64 {
        self.counts.get(symbol).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&S, u64)> + '_ {
        self.counts.iter().map(|(s, &c)| (s, c))
    }
}

impl FrequencyTable<char> {
    /// Count every `char` of `text`.
    pub fn from_text(text: &str) -> Self {
        let mut table = Self::new();
        for c in text.chars() {
            table.record(c);
        }
        table
    }
}

impl<S: Ord> Default for FrequencyTable<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Ord> FromIterator<(S, u64)> for FrequencyTable<S> {
    fn from_iter<I: IntoIterator<Item = (S, u64)>>(iter: I) -> Self {
        Self {
            counts: iter.into_iter().collect(),
        }
    }
}

/// Symbol -> bit-string mapping produced by [`build_code`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CodeBook<S: Ord> {
    codes: BTreeMap<S, String>,
}

impl<S: Ord + Clone> CodeBook<S> {
    pub fn code(&self, symbol: &S) -> Option<&str> {
        self.codes.get(symbol).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&S, &str)> + '_ {
        self.codes.iter().map(|(s, c)| (s, c.as_str()))
    }

    pub fn into_map(self) -> BTreeMap<S, String> {
        self.codes
    }

    /// Total encoded length in bits of a message with the given counts.
    ///
    /// Fails with [`AlgoError::InvalidInput`] when the total does not fit in `u64`.
    pub fn weighted_length(&self, table: &FrequencyTable<S>) -> AlgoResult<u64> {
        table
            .iter()
            .try_fold(0u64, |total, (s, count)| {
                let bits = self.code(s).map_or(0, |c| c.len() as u64);
                count.checked_mul(bits).and_then(|b| total.checked_add(b))
            })
            .ok_or_else(|| AlgoError::invalid_input("encoded length overflows u64"))
    }

    /// Concatenate the codes of `symbols`.
    pub fn encode<'a, I>(&self, symbols: I) -> AlgoResult<String>
    where
        I: IntoIterator<Item = &'a S>,
        S: 'a,
    {
        let mut bits = String::new();
        for symbol in symbols {
            let code = self
                .code(symbol)
                .ok_or_else(|| AlgoError::invalid_input("symbol has no code in this code book"))?;
            bits.push_str(code);
        }
        Ok(bits)
    }

    /// Split a bit string back into symbols.
    ///
    /// Fails on characters other than `0`/`1` and on trailing bits that do not
    /// complete a code.
    pub fn decode(&self, bits: &str) -> AlgoResult<Vec<S>> {
        let lookup: BTreeMap<&str, &S> = self.codes.iter().map(|(s, c)| (c.as_str(), s)).collect();
        let longest = self.codes.values().map(String::len).max().unwrap_or(0);

        let mut out = Vec::new();
        let mut start = 0;
        for (i, bit) in bits.char_indices() {
            if bit != '0' && bit != '1' {
                return Err(AlgoError::invalid_input(format!(
                    "non-binary character {bit:?} at offset {i}"
                )));
            }
            let candidate = &bits[start..=i];
            if let Some(&symbol) = lookup.get(candidate) {
                out.push(symbol.clone());
                start = i + 1;
            } else if candidate.len() >= longest {
                return Err(AlgoError::invalid_input(format!(
                    "bits {candidate} at offset {start} match no code"
                )));
            }
        }
        if start != bits.len() {
            return Err(AlgoError::invalid_input("bit string ends in the middle of a code"));
        }
        Ok(out)
    }
}

impl CodeBook<char> {
    pub fn encode_text(&self, text: &str) -> AlgoResult<String> {
        let symbols: Vec<char> = text.chars().collect();
        self.encode(&symbols)
    }

    pub fn decode_text(&self, bits: &str) -> AlgoResult<String> {
        Ok(self.decode(bits)?.into_iter().collect())
    }
}

enum Node<S> {
    Leaf(S),
    Internal { left: usize, right: usize },
}

/// Build an optimal prefix-free code for `table`.
///
/// Fails with [`AlgoError::InvalidInput`] on an empty table.
pub fn build_code<S: Ord + Clone>(table: &FrequencyTable<S>) -> AlgoResult<CodeBook<S>> {
    if table.is_empty() {
        return Err(AlgoError::invalid_input("frequency table is empty"));
    }

    let mut arena: Vec<Node<S>> = Vec::with_capacity(2 * table.len() - 1);
    let mut heap = BinaryHeap::new();
    for (symbol, count) in table.iter() {
        heap.push(Reverse((count, arena.len())));
        arena.push(Node::Leaf(symbol.clone()));
    }

    while heap.len() > 1 {
        let (Some(Reverse((wa, a))), Some(Reverse((wb, b)))) = (heap.pop(), heap.pop()) else {
            break;
        };
        heap.push(Reverse((wa.saturating_add(wb), arena.len())));
        arena.push(Node::Internal { left: a, right: b });
    }

    let root = arena.len() - 1;
    let mut codes = BTreeMap::new();
    let mut stack = vec![(root, String::new())];
    while let Some((idx, prefix)) = stack.pop() {
        match &arena[idx] {
            Node::Leaf(symbol) => {
                let code = if prefix.is_empty() { "0".to_string() } else { prefix };
                codes.insert(symbol.clone(), code);
            }
            Node::Internal { left, right } => {
                stack.push((*right, format!("{prefix}1")));
                stack.push((*left, format!("{prefix}0")));
            }
        }
    }

    tracing::debug!(symbols = codes.len(), nodes = arena.len(), "huffman code built");
    Ok(CodeBook { codes })
}
