use crate::error::{LinalgError, Result};

use super::Matrix;

impl Matrix {
    /// `n × n` identity matrix.
    ///
    /// ```
    /// use linalg_kernel::Matrix;
    /// let id = Matrix::identity(3).unwrap();
    /// assert_eq!(id[(1, 1)], 1.0);
    /// assert_eq!(id[(0, 2)], 0.0);
    /// ```
    pub fn identity(n: usize) -> Result<Self> {
        Matrix::from_fn(n, n, |i, j| if i == j { 1.0 } else { 0.0 })
    }

    /// Identity of shape `rows × cols`. Only square shapes exist, so
    /// `rows != cols` is a `NotSquare` error.
    pub fn eye(rows: usize, cols: usize) -> Result<Self> {
        if rows != cols {
            return Err(LinalgError::NotSquare { rows, cols });
        }
        Matrix::identity(rows)
    }

    /// Inverse by Gauss-Jordan elimination on `[A | I]`.
    ///
    /// Rows are never swapped: a pivot that is exactly zero when reached
    /// yields [`LinalgError::Singular`], even if the matrix would be
    /// invertible after a permutation.
    ///
    /// ```
    /// use linalg_kernel::{LinalgError, Matrix};
    /// let a = Matrix::from_rows(vec![vec![2.0, 0.0], vec![0.0, 4.0]]).unwrap();
    /// let inv = a.inverse().unwrap();
    /// assert_eq!(inv[(1, 1)], 0.25);
    ///
    /// let b = Matrix::from_rows(vec![vec![1.0, 2.0], vec![2.0, 4.0]]).unwrap();
    /// assert_eq!(b.inverse(), Err(LinalgError::Singular));
    /// ```
    pub fn inverse(&self) -> Result<Matrix> {
        self.require_square()?;
        let n = self.nrows;
        let mut a = self.clone();
        let mut inv = Matrix::identity(n)?;

        for i in 0..n {
            let pivot = a[(i, i)];
            if pivot == 0.0 {
                log::debug!("inverse: zero pivot at ({i}, {i}) of {n}x{n} matrix");
                return Err(LinalgError::Singular);
            }
            for j in 0..n {
                a[(i, j)] /= pivot;
                inv[(i, j)] /= pivot;
            }

            for r in 0..n {
                if r == i {
                    continue;
                }
                let factor = a[(r, i)];
                for k in 0..n {
                    let (da, di) = (factor * a[(i, k)], factor * inv[(i, k)]);
                    a[(r, k)] -= da;
                    inv[(r, k)] -= di;
                }
            }
        }
        Ok(inv)
    }

    /// Determinant by forward elimination.
    ///
    /// A zero pivot is replaced by the first lower row with a non-zero entry
    /// in that column (flipping the sign). If no such row exists the matrix
    /// is singular and the determinant is `0.0`. Non-finite entries propagate
    /// into the result.
    ///
    /// ```
    /// use linalg_kernel::Matrix;
    /// let m = Matrix::from_rows(vec![vec![3.0, 8.0], vec![4.0, 6.0]]).unwrap();
    /// assert!((m.determinant().unwrap() + 14.0).abs() < 1e-12);
    /// ```
    pub fn determinant(&self) -> Result<f64> {
        self.require_square()?;
        let n = self.nrows;
        let mut rows = self.to_rows();
        let mut det = 1.0;

        for i in 0..n {
            if rows[i][i] == 0.0 {
                match (i + 1..n).find(|&r| rows[r][i] != 0.0) {
                    Some(r) => {
                        log::trace!("determinant: swap rows {i} and {r}");
                        rows.swap(i, r);
                        det = -det;
                    }
                    None => {
                        log::debug!("determinant: no pivot in column {i}, matrix is singular");
                        return Ok(0.0);
                    }
                }
            }
            let pivot = rows[i][i];
            det *= pivot;

            let (upper, lower) = rows.split_at_mut(i + 1);
            let pivot_row = &upper[i];
            for row in lower.iter_mut() {
                let factor = row[i] / pivot;
                for (x, &p) in row[i..].iter_mut().zip(&pivot_row[i..]) {
                    *x -= factor * p;
                }
            }
        }
        Ok(det)
    }
}
