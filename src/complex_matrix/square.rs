use crate::complex::Complex;
use crate::error::{LinalgError, Result};

use super::ComplexMatrix;

impl ComplexMatrix {
    /// `n × n` identity.
    pub fn identity(n: usize) -> Self {
        let mut m = ComplexMatrix::zeros(n, n);
        for i in 0..n {
            m[(i, i)] = Complex::ONE;
        }
        m
    }

    /// Identity of shape `rows × cols`; fails with `NotSquare` when the
    /// shape is rectangular.
    pub fn eye(rows: usize, cols: usize) -> Result<Self> {
        if rows != cols {
            return Err(LinalgError::NotSquare { rows, cols });
        }
        Ok(ComplexMatrix::identity(rows))
    }

    /// Gauss-Jordan inverse over `[A | I]` without row swaps.
    ///
    /// An exactly zero pivot yields [`LinalgError::Singular`].
    ///
    /// ```
    /// use linalg_kernel::{Complex, ComplexMatrix};
    /// let a = ComplexMatrix::from_rows(vec![vec![Complex::new(0.0, 2.0)]]).unwrap();
    /// let inv = a.inverse().unwrap();
    /// assert_eq!(inv[(0, 0)], Complex::new(0.0, -0.5));
    /// ```
    pub fn inverse(&self) -> Result<ComplexMatrix> {
        self.require_square()?;
        let n = self.nrows;
        let mut a = self.clone();
        let mut inv = ComplexMatrix::identity(n);

        for i in 0..n {
            let pivot = a[(i, i)];
            if pivot.is_zero() {
                log::debug!("complex inverse: zero pivot at ({i}, {i})");
                return Err(LinalgError::Singular);
            }
            for j in 0..n {
                a[(i, j)] = Complex::divide(a[(i, j)], pivot)?;
                inv[(i, j)] = Complex::divide(inv[(i, j)], pivot)?;
            }
            for r in 0..n {
                if r == i {
                    continue;
                }
                let factor = a[(r, i)];
                for k in 0..n {
                    let (da, di) = (factor * a[(i, k)], factor * inv[(i, k)]);
                    a[(r, k)] = a[(r, k)] - da;
                    inv[(r, k)] = inv[(r, k)] - di;
                }
            }
        }
        Ok(inv)
    }

    /// Rank by forward elimination with exact-zero pivot tests.
    ///
    /// Columns are scanned left to right; the first row at or below the
    /// current pivot row with a non-zero entry is swapped up and used to
    /// clear the column beneath it.
    pub fn rank(&self) -> usize {
        let (rows, cols) = self.shape();
        let mut data = self.to_rows();
        let mut rank = 0;

        for col in 0..cols {
            if rank == rows {
                break;
            }
            let Some(pivot_row) = (rank..rows).find(|&r| !data[r][col].is_zero()) else {
                continue;
            };
            data.swap(rank, pivot_row);

            let pivot = data[rank][col];
            let (upper, lower) = data.split_at_mut(rank + 1);
            let top = &upper[rank];
            for row in lower.iter_mut() {
                if row[col].is_zero() {
                    continue;
                }
                // Non-zero pivot, so the division cannot fail.
                let Ok(factor) = Complex::divide(row[col], pivot) else {
                    continue;
                };
                for (x, &p) in row[col..].iter_mut().zip(&top[col..]) {
                    *x = *x - factor * p;
                }
            }
            rank += 1;
        }

        log::trace!("rank of {rows}x{cols} complex matrix: {rank}");
        rank
    }

    /// Determinant by cofactor expansion along the first row.
    ///
    /// `1×1` returns the entry and `2×2` returns `ad - bc` as computed. From
    /// `3×3` upward (and for the 0×0 matrix) a zero determinant is reported
    /// as [`LinalgError::Singular`]. Minors inside the expansion are
    /// evaluated without that check.
    ///
    /// ```
    /// use linalg_kernel::{Complex, ComplexMatrix, LinalgError};
    /// let c = |re| Complex::new(re, 0.0);
    /// let a = ComplexMatrix::from_rows(vec![
    ///     vec![c(1.0), c(2.0), c(3.0)],
    ///     vec![c(4.0), c(5.0), c(6.0)],
    ///     vec![c(7.0), c(8.0), c(9.0)],
    /// ]).unwrap();
    /// assert_eq!(a.determinant(), Err(LinalgError::Singular));
    /// ```
    pub fn determinant(&self) -> Result<Complex> {
        self.require_square()?;
        let det = cofactor_expansion(&self.to_rows());
        if self.nrows != 1 && self.nrows != 2 && det.is_zero() {
            log::debug!("complex determinant of {n}x{n} matrix is zero", n = self.nrows);
            return Err(LinalgError::Singular);
        }
        Ok(det)
    }
}

fn cofactor_expansion(m: &[Vec<Complex>]) -> Complex {
    match m.len() {
        0 => Complex::ZERO,
        1 => m[0][0],
        2 => m[0][0] * m[1][1] - m[0][1] * m[1][0],
        n => {
            let mut det = Complex::ZERO;
            for j in 0..n {
                let minor: Vec<Vec<Complex>> = m[1..]
                    .iter()
                    .map(|row| {
                        row.iter()
                            .enumerate()
                            .filter(|&(l, _)| l != j)
                            .map(|(_, &x)| x)
                            .collect()
                    })
                    .collect();
                let sign = if j % 2 == 0 { 1.0 } else { -1.0 };
                det = det + m[0][j] * cofactor_expansion(&minor) * sign;
            }
            det
        }
    }
}
