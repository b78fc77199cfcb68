use crate::error::{LinalgError, Result};
use crate::matrix::Matrix;

/// Doolittle factorization `A = L U` without pivoting.
///
/// `L` is unit lower triangular and `U` upper triangular. Since rows are
/// never exchanged, a zero on the diagonal of `U` that is needed as a
/// divisor fails with [`LinalgError::Singular`], even for some invertible
/// matrices.
///
/// ```
/// use linalg_kernel::Matrix;
/// use linalg_kernel::decomposition::LuDecomposition;
///
/// let a = Matrix::from_rows(vec![vec![4.0, 3.0], vec![6.0, 3.0]]).unwrap();
/// let lu = LuDecomposition::new(&a).unwrap();
/// assert_eq!(lu.l()[(1, 0)], 1.5);
/// assert_eq!(lu.u()[(1, 1)], -1.5);
/// assert_eq!(lu.det(), -6.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LuDecomposition {
    l: Matrix,
    u: Matrix,
}

impl LuDecomposition {
    /// Factor `a`. The input is copied, never modified.
    pub fn new(a: &Matrix) -> Result<Self> {
        a.require_square()?;
        let n = a.nrows();
        let mut u = a.clone();
        let mut l = Matrix::identity(n)?;

        for i in 0..n {
            for k in 0..i {
                let pivot = u[(k, k)];
                if pivot == 0.0 {
                    log::debug!("lu: zero pivot at ({k}, {k})");
                    return Err(LinalgError::Singular);
                }
                let acc: f64 = (0..k).map(|j| l[(i, j)] * u[(j, k)]).sum();
                l[(i, k)] = (u[(i, k)] - acc) / pivot;
            }
            for k in i..n {
                let acc: f64 = (0..i).map(|j| l[(i, j)] * u[(j, k)]).sum();
                u[(i, k)] -= acc;
            }
            for k in 0..i {
                u[(i, k)] = 0.0;
            }
        }
        Ok(Self { l, u })
    }

    /// Unit lower triangular factor.
    #[inline]
    pub fn l(&self) -> &Matrix {
        &self.l
    }

    /// Upper triangular factor.
    #[inline]
    pub fn u(&self) -> &Matrix {
        &self.u
    }

    /// Determinant of the factored matrix, the product of `U`'s diagonal.
    pub fn det(&self) -> f64 {
        (0..self.u.nrows()).map(|i| self.u[(i, i)]).product()
    }

    /// Consume into `(L, U)`.
    pub fn into_parts(self) -> (Matrix, Matrix) {
        (self.l, self.u)
    }
}

/// LU decomposition of `a`; see [`LuDecomposition`].
pub fn lu_decomposition(a: &Matrix) -> Result<LuDecomposition> {
    LuDecomposition::new(a)
}

impl Matrix {
    /// Convenience for [`LuDecomposition::new`].
    pub fn lu(&self) -> Result<LuDecomposition> {
        LuDecomposition::new(self)
    }
}
