//! Square integer matrix (row-major).

use serde::{Deserialize, Serialize};

use crate::error::{AlgoError, AlgoResult};

/// `N x N` matrix of `i64`, used for capacities, costs and distance tables.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<i64>>", into = "Vec<Vec<i64>>")]
pub struct Matrix {
    size: usize,
    data: Vec<i64>,
}

impl Matrix {
    /// `size x size` matrix with every entry set to `value`.
    pub fn filled(size: usize, value: i64) -> Self {
        Self {
            size,
            data: vec![value; size * size],
        }
    }

    pub fn zeros(size: usize) -> Self {
        Self::filled(size, 0)
    }

    /// Build from rows, rejecting ragged or non-square input.
    pub fn from_rows(rows: Vec<Vec<i64>>) -> AlgoResult<Self> {
        let size = rows.len();
        let mut data = Vec::with_capacity(size * size);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(AlgoError::invalid_input(format!(
                    "matrix is not square: row {i} has {} entries, expected {size}",
                    row.len()
                )));
            }
            data.extend(row);
        }
        Ok(Self { size, data })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, row: usize, col: usize) -> i64 {
        self.data[row * self.size + col]
    }

    pub fn set(&mut self, row: usize, col: usize, value: i64) {
        self.data[row * self.size + col] = value;
    }

    pub fn row(&self, row: usize) -> &[i64] {
        let start = row * self.size;
        &self.data[start..start + self.size]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[i64]> + '_ {
        // chunks(0) panics, and an empty matrix has no rows anyway.
        self.data.chunks(self.size.max(1))
    }

    pub fn to_rows(&self) -> Vec<Vec<i64>> {
        self.rows().map(<[i64]>::to_vec).collect()
    }
}

impl TryFrom<Vec<Vec<i64>>> for Matrix {
    type Error = AlgoError;

    fn try_from(rows: Vec<Vec<i64>>) -> AlgoResult<Self> {
        Self::from_rows(rows)
    }
}

impl From<Matrix> for Vec<Vec<i64>> {
    fn from(matrix: Matrix) -> Self {
        matrix.to_rows()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_rejects_non_square_input() {
        let err = Matrix::from_rows(vec![vec![1, 2], vec![3]]).unwrap_err();
        assert!(matches!(err, AlgoError::InvalidInput(_)));

        let err = Matrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap_err();
        assert!(matches!(err, AlgoError::InvalidInput(_)));
    }

    #[test]
    fn rows_round_trip_through_accessors() {
        let mut m = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        m.set(1, 0, 9);
        assert_eq!(m.get(0, 1), 2);
        assert_eq!(m.row(1), &[9, 4]);
        assert_eq!(m.to_rows(), vec![vec![1, 2], vec![9, 4]]);
    }

    #[test]
    fn empty_matrix_has_no_rows() {
        let m = Matrix::from_rows(Vec::new()).unwrap();
        assert_eq!(m.size(), 0);
        assert_eq!(m.rows().count(), 0);
    }
}
