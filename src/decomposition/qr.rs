use crate::error::Result;
use crate::matrix::Matrix;
use crate::vector::Vector;

use super::gram_schmidt;

/// QR factorization `A = Q R` of a square matrix, built by Gram-Schmidt on
/// the columns of `A`.
///
/// `Q` has the orthonormalized columns; `R = Qᵀ A` is upper triangular up to
/// rounding.
///
/// ```
/// use linalg_kernel::Matrix;
/// use linalg_kernel::decomposition::QrDecomposition;
///
/// let a = Matrix::from_rows(vec![vec![3.0, 1.0], vec![4.0, 2.0]]).unwrap();
/// let qr = QrDecomposition::new(&a).unwrap();
/// let back = qr.q().multiply(qr.r()).unwrap();
/// for i in 0..2 {
///     for j in 0..2 {
///         assert!((back[(i, j)] - a[(i, j)]).abs() < 1e-10);
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct QrDecomposition {
    q: Matrix,
    r: Matrix,
}

impl QrDecomposition {
    /// Factor `a`. Fails with `NotSquare` on rectangular input and with
    /// `ZeroVector` when the columns are linearly dependent.
    pub fn new(a: &Matrix) -> Result<Self> {
        a.require_square()?;
        let n = a.nrows();
        let columns: Vec<Vector> = (0..n).map(|j| a.col(j)).collect();
        let basis = gram_schmidt(&columns)?;

        let q = Matrix::from_fn(n, n, |i, j| basis[j][i])?;
        let r = q.transpose().multiply(a)?;
        Ok(Self { q, r })
    }

    /// Orthonormal factor.
    #[inline]
    pub fn q(&self) -> &Matrix {
        &self.q
    }

    /// Upper triangular factor `Qᵀ A`.
    #[inline]
    pub fn r(&self) -> &Matrix {
        &self.r
    }

    /// Consume into `(Q, R)`.
    pub fn into_parts(self) -> (Matrix, Matrix) {
        (self.q, self.r)
    }
}

/// QR decomposition of `a`; see [`QrDecomposition`].
pub fn qr_decomposition(a: &Matrix) -> Result<QrDecomposition> {
    QrDecomposition::new(a)
}

impl Matrix {
    /// Convenience for [`QrDecomposition::new`].
    pub fn qr(&self) -> Result<QrDecomposition> {
        QrDecomposition::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LinalgError;

    const TOL: f64 = 1e-10;

    fn assert_near(a: f64, b: f64, tol: f64, msg: &str) {
        assert!((a - b).abs() < tol, "{}: {} vs {} (diff {})", msg, a, b, (a - b).abs());
    }

    fn m(rows: &[&[f64]]) -> Matrix {
        Matrix::from_rows(rows.iter().map(|r| r.to_vec()).collect()).unwrap()
    }

    #[test]
    fn qr_3x3() {
        let a = m(&[&[12.0, -51.0, 4.0], &[6.0, 167.0, -68.0], &[-4.0, 24.0, -41.0]]);
        let qr = qr_decomposition(&a).unwrap();
        let (q, r) = (qr.q(), qr.r());

        // Q^T Q = I
        let qtq = q.transpose().multiply(q).unwrap();
        for i in 0..3 {
            for j in 0..3 {
                let e = if i == j { 1.0 } else { 0.0 };
                assert_near(qtq[(i, j)], e, TOL, &format!("QtQ[({i},{j})]"));
            }
        }

        // R upper triangular
        for i in 1..3 {
            for j in 0..i {
                assert_near(r[(i, j)], 0.0, 1e-8, &format!("R[({i},{j})]"));
            }
        }

        // Known first column of Q for this matrix.
        assert_near(q[(0, 0)], 6.0 / 7.0, TOL, "q00");
        assert_near(q[(1, 0)], 3.0 / 7.0, TOL, "q10");
        assert_near(q[(2, 0)], -2.0 / 7.0, TOL, "q20");
        assert_near(r[(0, 0)], 14.0, 1e-9, "r00");

        let back = q.multiply(r).unwrap();
        for i in 0..3 {
            for j in 0..3 {
                assert_near(back[(i, j)], a[(i, j)], 1e-9, &format!("QR[({i},{j})]"));
            }
        }
    }

    #[test]
    fn qr_errors() {
        let wide = m(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);
        assert_eq!(
            wide.qr().unwrap_err(),
            LinalgError::NotSquare { rows: 2, cols: 3 }
        );
        let dependent = m(&[&[1.0, 2.0], &[0.0, 0.0]]);
        assert_eq!(dependent.qr().unwrap_err(), LinalgError::ZeroVector);
    }
}
