mod ops;
mod square;
mod transform;

use core::ops::{Index, IndexMut};

use crate::complex::Complex;
use crate::error::{LinalgError, Result};
use crate::traits::MatrixRef;

/// Matrix of [`Complex`] entries.
///
/// Row-major `Vec<Complex>` storage. Unlike [`Matrix`](crate::Matrix), empty
/// input is accepted and yields a 0×0 matrix; ragged rows are still an
/// `InvalidInput` error.
///
/// ```
/// use linalg_kernel::{Complex, ComplexMatrix};
///
/// let m = ComplexMatrix::from_rows(vec![
///     vec![Complex::new(1.0, 1.0), Complex::new(0.0, 2.0)],
///     vec![Complex::new(3.0, 0.0), Complex::new(1.0, -1.0)],
/// ]).unwrap();
/// assert_eq!(m[(0, 1)], Complex::new(0.0, 2.0));
///
/// let empty = ComplexMatrix::from_rows(vec![]).unwrap();
/// assert_eq!(empty.shape(), (0, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ComplexMatrix {
    data: Vec<Complex>,
    nrows: usize,
    ncols: usize,
}

// ── Constructors ────────────────────────────────────────────────────

impl ComplexMatrix {
    /// Build from a list of rows. No rows, or an empty first row, gives the
    /// 0×0 matrix.
    pub fn from_rows(rows: Vec<Vec<Complex>>) -> Result<Self> {
        let ncols = rows.first().map_or(0, |r| r.len());
        if ncols == 0 {
            return Ok(Self::default());
        }
        if rows.iter().any(|r| r.len() != ncols) {
            return Err(LinalgError::InvalidInput("matrix rows must have equal length"));
        }
        let nrows = rows.len();
        let data = rows.into_iter().flatten().collect();
        Ok(Self { data, nrows, ncols })
    }

    /// `nrows × ncols` matrix of zeros. A zero dimension gives 0×0.
    pub fn zeros(nrows: usize, ncols: usize) -> Self {
        if nrows == 0 || ncols == 0 {
            return Self::default();
        }
        Self {
            data: vec![Complex::ZERO; nrows * ncols],
            nrows,
            ncols,
        }
    }

    /// Lift a real matrix into the complex domain.
    pub fn from_real(m: &crate::Matrix) -> Self {
        Self {
            data: m.as_slice().iter().map(|&x| Complex::from(x)).collect(),
            nrows: m.nrows(),
            ncols: m.ncols(),
        }
    }

    pub(crate) fn from_parts(data: Vec<Complex>, nrows: usize, ncols: usize) -> Self {
        debug_assert_eq!(data.len(), nrows * ncols);
        Self { data, nrows, ncols }
    }
}

// ── Accessors ───────────────────────────────────────────────────────

impl ComplexMatrix {
    #[inline]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    #[inline]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    #[inline]
    pub fn is_square(&self) -> bool {
        self.nrows == self.ncols
    }

    /// Row-major view of the entries.
    #[inline]
    pub fn as_slice(&self) -> &[Complex] {
        &self.data
    }

    /// Real parts, row by row.
    pub fn real(&self) -> Vec<Vec<f64>> {
        self.map_rows(Complex::re)
    }

    /// Imaginary parts, row by row.
    pub fn imag(&self) -> Vec<Vec<f64>> {
        self.map_rows(Complex::im)
    }

    /// Copy the entries out as a list of rows.
    pub fn to_rows(&self) -> Vec<Vec<Complex>> {
        self.map_rows(|c| *c)
    }

    fn map_rows<U>(&self, f: impl Fn(&Complex) -> U) -> Vec<Vec<U>> {
        if self.ncols == 0 {
            return Vec::new();
        }
        self.data
            .chunks(self.ncols)
            .map(|r| r.iter().map(&f).collect())
            .collect()
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

    pub(crate) fn require_same_shape(&self, other: &ComplexMatrix) -> Result<()> {
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

impl Index<(usize, usize)> for ComplexMatrix {
    type Output = Complex;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &Complex {
        assert!(j < self.ncols, "column index {} out of bounds for {} columns", j, self.ncols);
        &self.data[i * self.ncols + j]
    }
}

impl IndexMut<(usize, usize)> for ComplexMatrix {
    #[inline]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut Complex {
        assert!(j < self.ncols, "column index {} out of bounds for {} columns", j, self.ncols);
        &mut self.data[i * self.ncols + j]
    }
}

impl MatrixRef<Complex> for ComplexMatrix {
    #[inline]
    fn nrows(&self) -> usize {
        self.nrows
    }

    #[inline]
    fn ncols(&self) -> usize {
        self.ncols
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> &Complex {
        &self[(row, col)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(re: f64, im: f64) -> Complex {
        Complex::new(re, im)
    }

    #[test]
    fn from_rows_and_parts() {
        let m = ComplexMatrix::from_rows(vec![vec![c(1.0, 2.0), c(3.0, -4.0)]]).unwrap();
        assert_eq!(m.shape(), (1, 2));
        assert_eq!(m.real(), vec![vec![1.0, 3.0]]);
        assert_eq!(m.imag(), vec![vec![2.0, -4.0]]);
    }

    #[test]
    fn empty_is_zero_by_zero() {
        let m = ComplexMatrix::from_rows(vec![]).unwrap();
        assert_eq!(m.shape(), (0, 0));
        let m = ComplexMatrix::from_rows(vec![vec![]]).unwrap();
        assert_eq!(m.shape(), (0, 0));
        assert!(m.to_rows().is_empty());
        assert_eq!(ComplexMatrix::zeros(0, 4).shape(), (0, 0));
    }

    #[test]
    fn ragged_is_rejected() {
        let r = ComplexMatrix::from_rows(vec![vec![c(1.0, 0.0), c(2.0, 0.0)], vec![c(1.0, 0.0)]]);
        assert!(matches!(r, Err(LinalgError::InvalidInput(_))));
    }

    #[test]
    fn from_real_matrix() {
        let a = crate::Matrix::from_rows(vec![vec![1.0, 2.0]]).unwrap();
        let m = ComplexMatrix::from_real(&a);
        assert_eq!(m[(0, 1)], c(2.0, 0.0));
    }
}
