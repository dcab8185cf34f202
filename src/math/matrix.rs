use std::ops::{Index, IndexMut};

use crate::error::{Error, Result};

/// Dense row-major matrix backed by a single flat buffer.
///
/// Weight matrices are laid out `W[src][dst]`: one row per unit of the
/// source layer (bias slot included) and one column per unit of the
/// destination layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<f64>,
}

impl Matrix {
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Builds a matrix from nested rows.
    ///
    /// # Panics
    ///
    /// Panics if the rows differ in length. Use [`Matrix::try_from_data`]
    /// for data that has not been checked.
    pub fn from_data(data: Vec<Vec<f64>>) -> Matrix {
        let rows = data.len();
        let cols = data.first().map_or(0, |row| row.len());
        assert!(
            data.iter().all(|row| row.len() == cols),
            "Matrix rows must all have the same length"
        );
        Matrix {
            rows,
            cols,
            data: data.into_iter().flatten().collect(),
        }
    }

    /// Like [`Matrix::from_data`], but ragged rows are an `InvalidConfig` error.
    pub fn try_from_data(data: Vec<Vec<f64>>) -> Result<Matrix> {
        let cols = data.first().map_or(0, |row| row.len());
        if let Some((r, row)) = data.iter().enumerate().find(|(_, row)| row.len() != cols) {
            return Err(Error::InvalidConfig(format!(
                "row {r} has {} values, expected {cols}",
                row.len()
            )));
        }
        Ok(Matrix::from_data(data))
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn row(&self, row: usize) -> &[f64] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    /// Copies the matrix back out as nested rows.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.data.chunks(self.cols.max(1)).map(|r| r.to_vec()).collect()
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        debug_assert!(row < self.rows && col < self.cols);
        &self.data[row * self.cols + col]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        debug_assert!(row < self.rows && col < self.cols);
        &mut self.data[row * self.cols + col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeros_shape() {
        let m = Matrix::zeros(3, 2);
        assert_eq!(m.shape(), (3, 2));
        assert_eq!(m.data.len(), 6);
        assert!(m.data.iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_from_data_is_row_major() {
        let m = Matrix::from_data(vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]]);
        assert_eq!(m.shape(), (3, 2));
        assert_eq!(m[(0, 1)], 2.0);
        assert_eq!(m[(2, 0)], 5.0);
        assert_eq!(m.row(1), &[3.0, 4.0]);
        assert_eq!(m.to_rows()[2], vec![5.0, 6.0]);
    }

    #[test]
    fn test_index_mut() {
        let mut m = Matrix::zeros(2, 2);
        m[(1, 0)] += 0.5;
        assert_eq!(m.data, vec![0.0, 0.0, 0.5, 0.0]);
    }

    #[test]
    fn test_try_from_data_rejects_ragged_rows() {
        let err = Matrix::try_from_data(vec![vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
        let m = Matrix::try_from_data(vec![vec![1.0], vec![2.0]]).unwrap();
        assert_eq!(m.shape(), (2, 1));
    }

    #[test]
    #[should_panic]
    fn test_from_data_ragged_panics() {
        Matrix::from_data(vec![vec![1.0, 2.0], vec![3.0]]);
    }
}
