mod ops;
mod rank;
mod square;
mod transform;

use core::ops::{Index, IndexMut};

use crate::error::{LinalgError, Result};
use crate::traits::MatrixRef;
use crate::vector::Vector;

/// Real-valued `nrows × ncols` matrix.
///
/// Row-major `Vec<f64>` storage. Both dimensions are at least 1: building a
/// matrix from empty or ragged data fails with [`LinalgError::InvalidInput`].
///
/// Square-only operations (`inverse`, `determinant`, `orthogonal_matrix`,
/// LU/QR) fail with [`LinalgError::NotSquare`] on rectangular input.
///
/// # Examples
///
/// ```
/// use linalg_kernel::Matrix;
///
/// let a = Matrix::from_rows(vec![vec![4.0, 7.0], vec![2.0, 6.0]]).unwrap();
/// assert_eq!(a[(0, 1)], 7.0);
/// assert_eq!(a.nrows(), 2);
///
/// let inv = a.inverse().unwrap();
/// assert!((inv[(0, 0)] - 0.6).abs() < 1e-12);
/// assert!((inv[(0, 1)] + 0.7).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    data: Vec<f64>,
    nrows: usize,
    ncols: usize,
}

// ── Constructors ────────────────────────────────────────────────────

impl Matrix {
    /// Build a matrix from a list of rows.
    ///
    /// Fails on no rows, empty rows or rows of different lengths.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, |r| r.len());
        if nrows == 0 || ncols == 0 {
            return Err(LinalgError::InvalidInput("matrix cannot be empty"));
        }
        if rows.iter().any(|r| r.len() != ncols) {
            return Err(LinalgError::InvalidInput("matrix rows must have equal length"));
        }
        let data = rows.into_iter().flatten().collect();
        Ok(Self { data, nrows, ncols })
    }

    /// Build a matrix from a flat slice in row-major order.
    ///
    /// ```
    /// use linalg_kernel::Matrix;
    /// let m = Matrix::from_row_slice(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    /// assert_eq!(m[(1, 0)], 4.0);
    /// ```
    pub fn from_row_slice(nrows: usize, ncols: usize, data: &[f64]) -> Result<Self> {
        if nrows == 0 || ncols == 0 {
            return Err(LinalgError::InvalidInput("matrix dimensions must be positive"));
        }
        if data.len() != nrows * ncols {
            return Err(LinalgError::InvalidInput(
                "slice length does not match matrix dimensions",
            ));
        }
        Ok(Self {
            data: data.to_vec(),
            nrows,
            ncols,
        })
    }

    /// `nrows × ncols` matrix of zeros.
    pub fn zeros(nrows: usize, ncols: usize) -> Result<Self> {
        if nrows == 0 || ncols == 0 {
            return Err(LinalgError::InvalidInput("matrix dimensions must be positive"));
        }
        Ok(Self {
            data: vec![0.0; nrows * ncols],
            nrows,
            ncols,
        })
    }

    /// Build a matrix from a function of `(row, col)`.
    pub fn from_fn(
        nrows: usize,
        ncols: usize,
        mut f: impl FnMut(usize, usize) -> f64,
    ) -> Result<Self> {
        let mut m = Self::zeros(nrows, ncols)?;
        for i in 0..nrows {
            for j in 0..ncols {
                m[(i, j)] = f(i, j);
            }
        }
        Ok(m)
    }

    /// Storage constructor for internal callers that already hold a valid
    /// shape.
    pub(crate) fn from_parts(data: Vec<f64>, nrows: usize, ncols: usize) -> Self {
        debug_assert_eq!(data.len(), nrows * ncols);
        debug_assert!(nrows > 0 && ncols > 0);
        Self { data, nrows, ncols }
    }
}

// ── Accessors ───────────────────────────────────────────────────────

impl Matrix {
    /// Number of rows.
    #[inline]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of columns.
    #[inline]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// `(nrows, ncols)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    /// Whether the matrix has as many rows as columns.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.nrows == self.ncols
    }

    /// Row-major view of the entries.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Row `i` as a slice.
    #[inline]
    pub fn row_slice(&self, i: usize) -> &[f64] {
        &self.data[i * self.ncols..(i + 1) * self.ncols]
    }

    /// Row `i` as a [`Vector`].
    pub fn row(&self, i: usize) -> Vector {
        Vector::from_slice(self.row_slice(i))
    }

    /// Column `j` as a [`Vector`].
    pub fn col(&self, j: usize) -> Vector {
        Vector::new((0..self.nrows).map(|i| self[(i, j)]).collect())
    }

    /// Copy the entries out as a list of rows.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.data.chunks(self.ncols).map(|r| r.to_vec()).collect()
    }

    pub(crate) fn require_square(&self) -> Result<()> {
        if !self.is_square() {
            return Err(LinalgError::NotSquare {
                rows: self.nrows,
                cols: self.ncols,
            });
        }
        Ok(())
    }

    pub(crate) fn require_same_shape(&self, other: &Matrix) -> Result<()> {
        if self.shape() != other.shape() {
            return Err(LinalgError::DimensionMismatch {
                expected: self.shape(),
                got: other.shape(),
            });
        }
        Ok(())
    }
}

// ── Index ───────────────────────────────────────────────────────────

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &f64 {
        assert!(j < self.ncols, "column index {} out of bounds for {} columns", j, self.ncols);
        &self.data[i * self.ncols + j]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    #[inline]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut f64 {
        assert!(j < self.ncols, "column index {} out of bounds for {} columns", j, self.ncols);
        &mut self.data[i * self.ncols + j]
    }
}

// ── MatrixRef ───────────────────────────────────────────────────────

impl MatrixRef<f64> for Matrix {
    #[inline]
    fn nrows(&self) -> usize {
        self.nrows
    }

    #[inline]
    fn ncols(&self) -> usize {
        self.ncols
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> &f64 {
        &self[(row, col)]
    }
}

impl TryFrom<Vec<Vec<f64>>> for Matrix {
    type Error = LinalgError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self> {
        Matrix::from_rows(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_shape() {
        let m = Matrix::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
        assert_eq!(m.shape(), (2, 3));
        assert_eq!(m[(1, 2)], 6.0);
        assert_eq!(m.to_rows(), vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
    }

    #[test]
    fn empty_is_rejected() {
        assert!(matches!(
            Matrix::from_rows(vec![]),
            Err(LinalgError::InvalidInput(_))
        ));
        assert!(matches!(
            Matrix::from_rows(vec![vec![]]),
            Err(LinalgError::InvalidInput(_))
        ));
        assert!(matches!(Matrix::zeros(0, 3), Err(LinalgError::InvalidInput(_))));
    }

    #[test]
    fn ragged_is_rejected() {
        assert!(matches!(
            Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0]]),
            Err(LinalgError::InvalidInput(_))
        ));
    }

    #[test]
    fn row_col() {
        let m = Matrix::from_row_slice(2, 2, &[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(m.row(1), Vector::from_slice(&[3.0, 4.0]));
        assert_eq!(m.col(1), Vector::from_slice(&[2.0, 4.0]));
    }

    #[test]
    fn from_fn() {
        let m = Matrix::from_fn(2, 3, |i, j| (i * 3 + j) as f64).unwrap();
        assert_eq!(m.as_slice(), &[0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    #[should_panic]
    fn index_out_of_bounds() {
        let m = Matrix::zeros(2, 2).unwrap();
        let _ = m[(0, 2)];
    }
}
