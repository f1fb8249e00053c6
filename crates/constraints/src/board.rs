//! Sudoku-style board solving.
//!
//! A board has side `N = k * k` and is split into `k x k` boxes. Cells hold
//! `0` (empty) or a value in `1..=N`; a solved board has every value exactly
//! once per row, column and box.
//!
//! Search: take the first empty cell in row-major order, try each value not yet
//! used in its row, column or box, recurse, and clear the cell again on failure.
//! Used values are tracked as bitmasks (bit `v - 1` set when `v` is present).

use serde::{Deserialize, Serialize};

use supplynet_core::{AlgoError, AlgoResult};

/// Largest supported side; one bit per value in a `u64` mask.
pub const MAX_SIDE: usize = 64;

/// Square grid of small integers, `0` meaning empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<u8>>", into = "Vec<Vec<u8>>")]
pub struct Board {
    side: usize,
    box_side: usize,
    cells: Vec<u8>,
}

impl Board {
    /// Validate shape (square, side a perfect square up to [`MAX_SIDE`]) and
    /// value range.
    pub fn from_rows(rows: Vec<Vec<u8>>) -> AlgoResult<Self> {
        let side = rows.len();
        if side == 0 || side > MAX_SIDE {
            return Err(AlgoError::invalid_input(format!(
                "board side {side} outside 1..={MAX_SIDE}"
            )));
        }
        let box_side = (1..=side).find(|k| k * k >= side).unwrap_or(side);
        if box_side * box_side != side {
            return Err(AlgoError::invalid_input(format!(
                "board side {side} is not a perfect square"
            )));
        }

        let mut cells = Vec::with_capacity(side * side);
        for (r, row) in rows.into_iter().enumerate() {
            if row.len() != side {
                return Err(AlgoError::invalid_input(format!(
                    "row {r} has {} cells, expected {side}",
                    row.len()
                )));
            }
            if let Some((c, &v)) = row.iter().enumerate().find(|(_, v)| usize::from(**v) > side) {
                return Err(AlgoError::invalid_input(format!(
                    "cell ({r}, {c}) holds {v}, allowed values are 0..={side}"
                )));
            }
            cells.extend(row);
        }

        Ok(Self {
            side,
            box_side,
            cells,
        })
    }

    /// Board of the given side with every cell empty.
    pub fn empty(side: usize) -> AlgoResult<Self> {
        Self::from_rows(vec![vec![0; side]; side])
    }

    pub fn side(&self) -> usize {
        self.side
    }

    pub fn box_side(&self) -> usize {
        self.box_side
    }

    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.cells[row * self.side + col]
    }

    pub fn rows(&self) -> Vec<Vec<u8>> {
        self.cells.chunks(self.side).map(<[u8]>::to_vec).collect()
    }

    pub fn empty_cells(&self) -> usize {
        self.cells.iter().filter(|&&v| v == 0).count()
    }

    /// Every cell filled and no row, column or box repeats a value.
    pub fn is_solved(&self) -> bool {
        self.empty_cells() == 0 && Masks::from_board(self).is_some()
    }

    fn box_of(&self, row: usize, col: usize) -> usize {
        (row / self.box_side) * self.box_side + col / self.box_side
    }
}

impl TryFrom<Vec<Vec<u8>>> for Board {
    type Error = AlgoError;

    fn try_from(rows: Vec<Vec<u8>>) -> AlgoResult<Self> {
        Self::from_rows(rows)
    }
}

impl From<Board> for Vec<Vec<u8>> {
    fn from(board: Board) -> Self {
        board.rows()
    }
}

/// Values already used per row, column and box.
struct Masks {
    rows: Vec<u64>,
    cols: Vec<u64>,
    boxes: Vec<u64>,
}

impl Masks {
    /// `None` if the filled cells already conflict.
    fn from_board(board: &Board) -> Option<Self> {
        let n = board.side;
        let mut masks = Self {
            rows: vec![0; n],
            cols: vec![0; n],
            boxes: vec![0; n],
        };
        for r in 0..n {
            for c in 0..n {
                let v = board.get(r, c);
                if v == 0 {
                    continue;
                }
                let bit = 1u64 << (v - 1);
                let b = board.box_of(r, c);
                if (masks.rows[r] | masks.cols[c] | masks.boxes[b]) & bit != 0 {
                    return None;
                }
                masks.toggle(r, c, b, bit);
            }
        }
        Some(masks)
    }

    fn used(&self, r: usize, c: usize, b: usize) -> u64 {
        self.rows[r] | self.cols[c] | self.boxes[b]
    }

    fn toggle(&mut self, r: usize, c: usize, b: usize, bit: u64) {
        self.rows[r] ^= bit;
        self.cols[c] ^= bit;
        self.boxes[b] ^= bit;
    }
}

/// Fill every empty cell of `board`, returning the solved copy.
///
/// Fails with [`AlgoError::Unsolvable`] when the givens conflict or no
/// assignment completes the grid. The caller's board is not modified.
pub fn solve_board(board: &Board) -> AlgoResult<Board> {
    let Some(mut masks) = Masks::from_board(board) else {
        tracing::debug!("board givens conflict");
        return Err(AlgoError::Unsolvable);
    };

    let mut work = board.clone();
    let mut visited = 0u64;
    if fill(&mut work, &mut masks, 0, &mut visited) {
        tracing::debug!(side = board.side, visited, "board solved");
        Ok(work)
    } else {
        tracing::debug!(side = board.side, visited, "board unsolvable");
        Err(AlgoError::Unsolvable)
    }
}

fn fill(board: &mut Board, masks: &mut Masks, from: usize, visited: &mut u64) -> bool {
    let n = board.side;
    let Some(idx) = (from..n * n).find(|&i| board.cells[i] == 0) else {
        return true;
    };
    let (r, c) = (idx / n, idx % n);
    let b = board.box_of(r, c);
    let used = masks.used(r, c, b);

    for v in 1..=n {
        let bit = 1u64 << (v - 1);
        if used & bit != 0 {
            continue;
        }
        *visited += 1;
        board.cells[idx] = v as u8;
        masks.toggle(r, c, b, bit);
        if fill(board, masks, idx + 1, visited) {
            return true;
        }
        masks.toggle(r, c, b, bit);
        board.cells[idx] = 0;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn parse(rows: &[&str]) -> Board {
        Board::from_rows(
            rows.iter()
                .map(|row| {
                    row.chars()
                        .map(|ch| ch.to_digit(10).map_or(0, |d| d as u8))
                        .collect()
                })
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn solves_classic_puzzle() {
        let puzzle = parse(&[
            "53..7....",
            "6..195...",
            ".98....6.",
            "8...6...3",
            "4..8.3..1",
            "7...2...6",
            ".6....28.",
            "...419..5",
            "....8..79",
        ]);
        let solved = solve_board(&puzzle).unwrap();
        let expected = parse(&[
            "534678912",
            "672195348",
            "198342567",
            "859761423",
            "426853791",
            "713924856",
            "961537284",
            "287419635",
            "345286179",
        ]);
        assert_eq!(solved, expected);
        assert!(solved.is_solved());
        assert_eq!(puzzle.empty_cells(), 51);
    }

    #[test]
    fn consistent_but_unsolvable_board_is_reported() {
        // (0, 3) must be 4, but column 3 already holds a 4.
        let board = Board::from_rows(vec![
            vec![1, 2, 3, 0],
            vec![0, 0, 0, 4],
            vec![0, 0, 0, 0],
            vec![0, 0, 0, 0],
        ])
        .unwrap();
        assert_eq!(solve_board(&board), Err(AlgoError::Unsolvable));
    }

    #[test]
    fn conflicting_givens_are_unsolvable() {
        let board = Board::from_rows(vec![
            vec![1, 1, 0, 0],
            vec![0, 0, 0, 0],
            vec![0, 0, 0, 0],
            vec![0, 0, 0, 0],
        ])
        .unwrap();
        assert_eq!(solve_board(&board), Err(AlgoError::Unsolvable));
    }

    #[test]
    fn empty_boards_get_filled() {
        for side in [1, 4, 9] {
            let solved = solve_board(&Board::empty(side).unwrap()).unwrap();
            assert!(solved.is_solved(), "side {side}");
        }
    }

    #[test]
    fn malformed_boards_are_invalid_input() {
        assert!(matches!(Board::from_rows(vec![]), Err(AlgoError::InvalidInput(_))));
        assert!(matches!(Board::empty(3), Err(AlgoError::InvalidInput(_))));
        assert!(matches!(
            Board::from_rows(vec![vec![0; 4], vec![0; 4], vec![0; 3], vec![0; 4]]),
            Err(AlgoError::InvalidInput(_))
        ));
        assert!(matches!(
            Board::from_rows(vec![vec![5, 0, 0, 0], vec![0; 4], vec![0; 4], vec![0; 4]]),
            Err(AlgoError::InvalidInput(_))
        ));
    }

    #[test]
    fn caller_board_is_untouched() {
        let board = Board::empty(4).unwrap();
        let _ = solve_board(&board).unwrap();
        assert_eq!(board.empty_cells(), 16);
    }

    fn arb_puzzle() -> impl Strategy<Value = Board> {
        let base = [[1, 2, 3, 4], [3, 4, 1, 2], [2, 1, 4, 3], [4, 3, 2, 1]];
        (
            Just(vec![1u8, 2, 3, 4]).prop_shuffle(),
            prop::collection::vec(any::<bool>(), 16),
        )
            .prop_map(move |(digits, keep)| {
                let rows = (0..4)
                    .map(|r| {
                        (0..4)
                            .map(|c| if keep[r * 4 + c] { digits[base[r][c] - 1] } else { 0 })
                            .collect()
                    })
                    .collect();
                Board::from_rows(rows).expect("4x4 board")
            })
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 128,
            ..ProptestConfig::default()
        })]

        /// Property: puzzles carved from a valid grid solve and keep their givens.
        #[test]
        fn carved_puzzles_solve_and_keep_givens(puzzle in arb_puzzle()) {
            let solved = solve_board(&puzzle).unwrap();
            prop_assert!(solved.is_solved());
            for r in 0..4 {
                for c in 0..4 {
                    if puzzle.get(r, c) != 0 {
                        prop_assert_eq!(solved.get(r, c), puzzle.get(r, c));
                    }
                }
            }
        }
    }
}
