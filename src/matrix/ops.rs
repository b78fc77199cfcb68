use core::ops::{Mul, Neg};

use crate::error::{LinalgError, Result};

use super::Matrix;

// ── Element-wise addition / subtraction ─────────────────────────────

impl Matrix {
    /// Element-wise sum. Both operands must have the same shape.
    ///
    /// ```
    /// use linalg_kernel::Matrix;
    /// let a = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
    /// let b = Matrix::from_rows(vec![vec![10.0, 20.0], vec![30.0, 40.0]]).unwrap();
    /// assert_eq!(a.add(&b).unwrap()[(1, 1)], 44.0);
    /// ```
    pub fn add(&self, other: &Matrix) -> Result<Matrix> {
        self.zip_with(other, |a, b| a + b)
    }

    /// Element-wise difference `self - other`.
    pub fn subtract(&self, other: &Matrix) -> Result<Matrix> {
        self.zip_with(other, |a, b| a - b)
    }

    /// Sum of any number of equally shaped matrices.
    ///
    /// Fails with `InvalidInput` on an empty list.
    pub fn sum(matrices: &[Matrix]) -> Result<Matrix> {
        let (first, rest) = matrices
            .split_first()
            .ok_or(LinalgError::InvalidInput("no matrices to sum"))?;
        rest.iter().try_fold(first.clone(), |acc, m| acc.add(m))
    }

    /// First matrix minus every following one.
    pub fn subtraction(matrices: &[Matrix]) -> Result<Matrix> {
        let (first, rest) = matrices
            .split_first()
            .ok_or(LinalgError::InvalidInput("no matrices to subtract"))?;
        rest.iter().try_fold(first.clone(), |acc, m| acc.subtract(m))
    }

    fn zip_with(&self, other: &Matrix, f: impl Fn(f64, f64) -> f64) -> Result<Matrix> {
        self.require_same_shape(other)?;
        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(&a, &b)| f(a, b))
            .collect();
        Ok(Matrix::from_parts(data, self.nrows, self.ncols))
    }
}

// ── Matrix product ──────────────────────────────────────────────────

impl Matrix {
    /// Matrix product `self · other`.
    ///
    /// Requires `self.ncols() == other.nrows()`.
    ///
    /// ```
    /// use linalg_kernel::Matrix;
    /// let a = Matrix::from_rows(vec![vec![1.0, 2.0, 3.0]]).unwrap();
    /// let b = Matrix::from_rows(vec![vec![1.0], vec![1.0], vec![1.0]]).unwrap();
    /// let c = a.multiply(&b).unwrap();
    /// assert_eq!(c.shape(), (1, 1));
    /// assert_eq!(c[(0, 0)], 6.0);
    /// ```
    pub fn multiply(&self, other: &Matrix) -> Result<Matrix> {
        if self.ncols != other.nrows {
            return Err(LinalgError::DimensionMismatch {
                expected: (self.ncols, other.ncols),
                got: other.shape(),
            });
        }
        let (m, n, p) = (self.nrows, self.ncols, other.ncols);
        let mut data = vec![0.0; m * p];
        // i-k-j order: the inner loop walks contiguous rows of both operands.
        for i in 0..m {
            for k in 0..n {
                let a = self.data[i * n + k];
                let out = &mut data[i * p..(i + 1) * p];
                let rhs = &other.data[k * p..(k + 1) * p];
                for (o, &b) in out.iter_mut().zip(rhs) {
                    *o += a * b;
                }
            }
        }
        Ok(Matrix::from_parts(data, m, p))
    }

    /// Left-to-right product of a chain of matrices.
    pub fn product(matrices: &[Matrix]) -> Result<Matrix> {
        let (first, rest) = matrices
            .split_first()
            .ok_or(LinalgError::InvalidInput("no matrices to multiply"))?;
        rest.iter().try_fold(first.clone(), |acc, m| acc.multiply(m))
    }

    /// Every entry multiplied by `k`.
    pub fn multiply_by_scalar(&self, k: f64) -> Matrix {
        let data = self.data.iter().map(|&x| x * k).collect();
        Matrix::from_parts(data, self.nrows, self.ncols)
    }
}

// ── Operators ───────────────────────────────────────────────────────

impl Mul<f64> for Matrix {
    type Output = Matrix;
    fn mul(self, rhs: f64) -> Matrix {
        self.multiply_by_scalar(rhs)
    }
}

impl Mul<f64> for &Matrix {
    type Output = Matrix;
    fn mul(self, rhs: f64) -> Matrix {
        self.multiply_by_scalar(rhs)
    }
}

impl Mul<Matrix> for f64 {
    type Output = Matrix;
    fn mul(self, rhs: Matrix) -> Matrix {
        rhs.multiply_by_scalar(self)
    }
}

impl Neg for Matrix {
    type Output = Matrix;
    fn neg(mut self) -> Matrix {
        for x in &mut self.data {
            *x = -*x;
        }
        self
    }
}

impl Neg for &Matrix {
    type Output = Matrix;
    fn neg(self) -> Matrix {
        -self.clone()
    }
}
