//! N-Queens by backtracking.
//!
//! One queen per row. At row `r` the search is in state `Placing(r)`:
//!   - column or diagonal already attacked  -> prune that column
//!   - column free                           -> place, recurse into `Placing(r + 1)`
//!   - every column tried                    -> backtrack to `Placing(r - 1)`
//! Reaching `r == n` (`AllRowsPlaced`) records the board.
//!
//! Attacks are tracked in three occupancy vectors indexed by column,
//! `row + col` and `row + n - 1 - col`, so each check is O(1).

use serde::{Deserialize, Serialize};

/// One solution: `columns[row]` is the column of the queen in `row`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueenPlacement {
    pub columns: Vec<usize>,
}

impl QueenPlacement {
    pub fn size(&self) -> usize {
        self.columns.len()
    }

    /// Rows of `Q` and `.` characters.
    pub fn render(&self) -> Vec<String> {
        let n = self.size();
        self.columns
            .iter()
            .map(|&col| (0..n).map(|c| if c == col { 'Q' } else { '.' }).collect())
            .collect()
    }

    /// No two queens share a column or diagonal (rows are distinct by construction).
    pub fn is_valid(&self) -> bool {
        let n = self.size();
        self.columns.iter().all(|&c| c < n)
            && self.columns.iter().enumerate().all(|(r1, &c1)| {
                self.columns[r1 + 1..]
                    .iter()
                    .enumerate()
                    .all(|(offset, &c2)| c1 != c2 && c1.abs_diff(c2) != offset + 1)
            })
    }
}

struct Occupancy {
    n: usize,
    cols: Vec<bool>,
    diag: Vec<bool>,
    anti: Vec<bool>,
}

impl Occupancy {
    fn new(n: usize) -> Self {
        Self {
            n,
            cols: vec![false; n],
            diag: vec![false; 2 * n],
            anti: vec![false; 2 * n],
        }
    }

    fn is_free(&self, row: usize, col: usize) -> bool {
        !self.cols[col] && !self.diag[row + col] && !self.anti[row + self.n - 1 - col]
    }

    fn mark(&mut self, row: usize, col: usize, taken: bool) {
        self.cols[col] = taken;
        self.diag[row + col] = taken;
        self.anti[row + self.n - 1 - col] = taken;
    }
}

/// Every solution for an `n x n` board, in lexicographic order of columns.
///
/// `n = 0` has exactly one (empty) solution; `n = 2` and `n = 3` have none.
pub fn solve_n_queens(n: usize) -> Vec<QueenPlacement> {
    let mut solutions = Vec::new();
    let mut occupancy = Occupancy::new(n);
    let mut placed = Vec::with_capacity(n);
    place_row(0, &mut occupancy, &mut placed, &mut |columns| {
        solutions.push(QueenPlacement {
            columns: columns.to_vec(),
        });
    });
    tracing::debug!(n, solutions = solutions.len(), "n-queens solved");
    solutions
}

/// Number of solutions without materializing them.
pub fn count_n_queens(n: usize) -> usize {
    let mut count = 0usize;
    let mut occupancy = Occupancy::new(n);
    let mut placed = Vec::with_capacity(n);
    place_row(0, &mut occupancy, &mut placed, &mut |_| count += 1);
    count
}

fn place_row(
    row: usize,
    occupancy: &mut Occupancy,
    placed: &mut Vec<usize>,
    on_solution: &mut dyn FnMut(&[usize]),
) {
    let n = occupancy.n;
    if row == n {
        on_solution(placed);
        return;
    }
    for col in 0..n {
        if !occupancy.is_free(row, col) {
            continue;
        }
        occupancy.mark(row, col, true);
        placed.push(col);
        place_row(row + 1, occupancy, placed, on_solution);
        placed.pop();
        occupancy.mark(row, col, false);
    }
}

/// Stack frame of the iterative search: the row being filled and the next
/// column to try there.
struct Frame {
    row: usize,
    next_col: usize,
}

/// Same search as [`solve_n_queens`] driven by an explicit stack instead of
/// recursion; yields identical solutions in identical order.
pub fn solve_n_queens_iterative(n: usize) -> Vec<QueenPlacement> {
    let mut solutions = Vec::new();
    let mut occupancy = Occupancy::new(n);
    let mut placed: Vec<usize> = Vec::with_capacity(n);
    let mut stack = vec![Frame { row: 0, next_col: 0 }];

    while let Some(frame) = stack.last_mut() {
        let row = frame.row;
        let chosen = if row == n {
            solutions.push(QueenPlacement {
                columns: placed.clone(),
            });
            None
        } else {
            let mut chosen = None;
            while frame.next_col < n {
                let col = frame.next_col;
                frame.next_col += 1;
                if occupancy.is_free(row, col) {
                    chosen = Some(col);
                    break;
                }
            }
            chosen
        };

        match chosen {
            Some(col) => {
                occupancy.mark(row, col, true);
                placed.push(col);
                stack.push(Frame {
                    row: row + 1,
                    next_col: 0,
                });
            }
            None => {
                stack.pop();
                if let Some(col) = placed.pop() {
                    occupancy.mark(placed.len(), col, false);
                }
            }
        }
    }

    solutions
}
