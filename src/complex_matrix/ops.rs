use core::ops::{Mul, Neg};

use crate::complex::Complex;
use crate::error::{LinalgError, Result};

use super::ComplexMatrix;

impl ComplexMatrix {
    /// Element-wise sum.
    pub fn add(&self, other: &ComplexMatrix) -> Result<ComplexMatrix> {
        self.zip_with(other, |a, b| a + b)
    }

    /// Element-wise difference `self - other`.
    pub fn subtract(&self, other: &ComplexMatrix) -> Result<ComplexMatrix> {
        self.zip_with(other, |a, b| a - b)
    }

    /// Sum of a list of equally shaped matrices.
    pub fn sum(matrices: &[ComplexMatrix]) -> Result<ComplexMatrix> {
        let (first, rest) = matrices
            .split_first()
            .ok_or(LinalgError::InvalidInput("no matrices to sum"))?;
        rest.iter().try_fold(first.clone(), |acc, m| acc.add(m))
    }

    /// First matrix minus every following one.
    pub fn subtraction(matrices: &[ComplexMatrix]) -> Result<ComplexMatrix> {
        let (first, rest) = matrices
            .split_first()
            .ok_or(LinalgError::InvalidInput("no matrices to subtract"))?;
        rest.iter().try_fold(first.clone(), |acc, m| acc.subtract(m))
    }

    fn zip_with(
        &self,
        other: &ComplexMatrix,
        f: impl Fn(Complex, Complex) -> Complex,
    ) -> Result<ComplexMatrix> {
        self.require_same_shape(other)?;
        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(&a, &b)| f(a, b))
            .collect();
        Ok(ComplexMatrix::from_parts(data, self.nrows, self.ncols))
    }

    /// Matrix product `self · other`.
    ///
    /// ```
    /// use linalg_kernel::{Complex, ComplexMatrix};
    /// let i = Complex::new(0.0, 1.0);
    /// let a = ComplexMatrix::from_rows(vec![vec![i]]).unwrap();
    /// let sq = a.multiply(&a).unwrap();
    /// assert_eq!(sq[(0, 0)], Complex::new(-1.0, 0.0));
    /// ```
    pub fn multiply(&self, other: &ComplexMatrix) -> Result<ComplexMatrix> {
        if self.ncols != other.nrows {
            return Err(LinalgError::DimensionMismatch {
                expected: (self.ncols, other.ncols),
                got: other.shape(),
            });
        }
        let (m, n, p) = (self.nrows, self.ncols, other.ncols);
        let mut data = vec![Complex::ZERO; m * p];
        for i in 0..m {
            for j in 0..p {
                data[i * p + j] = (0..n).map(|k| self[(i, k)] * other[(k, j)]).sum();
            }
        }
        Ok(ComplexMatrix::from_parts(data, m, p))
    }

    /// Left-to-right product of a chain of matrices.
    pub fn product(matrices: &[ComplexMatrix]) -> Result<ComplexMatrix> {
        let (first, rest) = matrices
            .split_first()
            .ok_or(LinalgError::InvalidInput("no matrices to multiply"))?;
        rest.iter().try_fold(first.clone(), |acc, m| acc.multiply(m))
    }

    /// Every entry scaled by the real factor `k`.
    pub fn multiply_by_scalar(&self, k: f64) -> ComplexMatrix {
        let data = self.data.iter().map(|c| c.scale(k)).collect();
        ComplexMatrix::from_parts(data, self.nrows, self.ncols)
    }
}

impl Mul<f64> for &ComplexMatrix {
    type Output = ComplexMatrix;
    fn mul(self, rhs: f64) -> ComplexMatrix {
        self.multiply_by_scalar(rhs)
    }
}

impl Mul<f64> for ComplexMatrix {
    type Output = ComplexMatrix;
    fn mul(self, rhs: f64) -> ComplexMatrix {
        self.multiply_by_scalar(rhs)
    }
}

impl Neg for ComplexMatrix {
    type Output = ComplexMatrix;
    fn neg(mut self) -> ComplexMatrix {
        for x in &mut self.data {
            *x = -*x;
        }
        self
    }
}
