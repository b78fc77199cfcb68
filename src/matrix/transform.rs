use crate::error::Result;

use super::Matrix;

impl Matrix {
    /// Transpose. Works for any shape.
    ///
    /// ```
    /// use linalg_kernel::Matrix;
    /// let m = Matrix::from_rows(vec![vec![1.0, 2.0, 3.0]]).unwrap();
    /// let t = m.transpose();
    /// assert_eq!(t.shape(), (3, 1));
    /// assert_eq!(t[(2, 0)], 3.0);
    /// ```
    pub fn transpose(&self) -> Matrix {
        let (r, c) = self.shape();
        let mut data = Vec::with_capacity(r * c);
        for j in 0..c {
            for i in 0..r {
                data.push(self[(i, j)]);
            }
        }
        Matrix::from_parts(data, c, r)
    }

    /// Matrix with rows and columns swapped, i.e. the transpose.
    pub fn symmetric_matrix(&self) -> Matrix {
        self.transpose()
    }

    /// Copy with every entry off the main diagonal set to zero.
    ///
    /// Any shape is accepted; the diagonal is `(i, i)` for
    /// `i < min(nrows, ncols)`.
    pub fn diagonal_matrix(&self) -> Matrix {
        let mut d = self.clone();
        d.diagonalize();
        d
    }

    /// In-place variant of [`diagonal_matrix`](Self::diagonal_matrix).
    pub fn diagonalize(&mut self) {
        let ncols = self.ncols;
        for (idx, x) in self.data.iter_mut().enumerate() {
            if idx / ncols != idx % ncols {
                *x = 0.0;
            }
        }
    }

    /// Diagonal-preserving zeroing of a square matrix.
    ///
    /// Fails with `NotSquare` on rectangular input.
    ///
    /// ```
    /// use linalg_kernel::Matrix;
    /// let m = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
    /// let o = m.orthogonal_matrix().unwrap();
    /// assert_eq!(o.to_rows(), vec![vec![1.0, 0.0], vec![0.0, 4.0]]);
    /// ```
    pub fn orthogonal_matrix(&self) -> Result<Matrix> {
        self.require_square()?;
        Ok(self.diagonal_matrix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LinalgError;

    fn m(rows: &[&[f64]]) -> Matrix {
        Matrix::from_rows(rows.iter().map(|r| r.to_vec()).collect()).unwrap()
    }

    #[test]
    fn transpose_rectangular() {
        let a = m(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);
        let t = a.transpose();
        assert_eq!(t, m(&[&[1.0, 4.0], &[2.0, 5.0], &[3.0, 6.0]]));
        assert_eq!(t.transpose(), a);
        assert_eq!(a.symmetric_matrix(), t);
    }

    #[test]
    fn diagonal_any_shape() {
        let a = m(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);
        assert_eq!(
            a.diagonal_matrix(),
            m(&[&[1.0, 0.0, 0.0], &[0.0, 5.0, 0.0]])
        );
    }

    #[test]
    fn diagonalize_in_place() {
        let mut a = m(&[&[1.0, 2.0], &[3.0, 4.0]]);
        a.diagonalize();
        assert_eq!(a, m(&[&[1.0, 0.0], &[0.0, 4.0]]));
    }

    #[test]
    fn orthogonal_requires_square() {
        let a = m(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);
        assert_eq!(
            a.orthogonal_matrix().unwrap_err(),
            LinalgError::NotSquare { rows: 2, cols: 3 }
        );
    }
}
