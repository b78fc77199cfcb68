use crate::complex::Complex;
use crate::error::Result;

use super::ComplexMatrix;

impl ComplexMatrix {
    /// Transpose. The 0×0 matrix transposes to itself.
    pub fn transpose(&self) -> ComplexMatrix {
        let (r, c) = self.shape();
        let mut data = Vec::with_capacity(r * c);
        for j in 0..c {
            for i in 0..r {
                data.push(self[(i, j)]);
            }
        }
        ComplexMatrix::from_parts(data, c, r)
    }

    /// Axis swap of a square matrix.
    pub fn symmetrical_matrix(&self) -> Result<ComplexMatrix> {
        self.require_square()?;
        Ok(self.transpose())
    }

    /// In-place variant of [`symmetrical_matrix`](Self::symmetrical_matrix).
    pub fn symmetrize(&mut self) -> Result<()> {
        self.require_square()?;
        let n = self.nrows;
        for i in 0..n {
            for j in (i + 1)..n {
                self.data.swap(i * n + j, j * n + i);
            }
        }
        Ok(())
    }

    /// Square copy with the off-diagonal entries set to zero.
    pub fn diagonal_matrix(&self) -> Result<ComplexMatrix> {
        self.require_square()?;
        let n = self.nrows;
        let mut d = ComplexMatrix::zeros(n, n);
        for i in 0..n {
            d[(i, i)] = self[(i, i)];
        }
        Ok(d)
    }

    /// Same zeroing as [`diagonal_matrix`](Self::diagonal_matrix).
    pub fn orthogonal_matrix(&self) -> Result<ComplexMatrix> {
        self.diagonal_matrix()
    }

    /// Entry-wise complex conjugate of a square matrix.
    ///
    /// ```
    /// use linalg_kernel::{Complex, ComplexMatrix};
    /// let m = ComplexMatrix::from_rows(vec![vec![Complex::new(1.0, 2.0)]]).unwrap();
    /// assert_eq!(m.cofactor_matrix().unwrap()[(0, 0)], Complex::new(1.0, -2.0));
    /// ```
    pub fn cofactor_matrix(&self) -> Result<ComplexMatrix> {
        self.require_square()?;
        let data = self.data.iter().map(Complex::conj).collect();
        Ok(ComplexMatrix::from_parts(data, self.nrows, self.ncols))
    }
}
