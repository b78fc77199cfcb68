//! Eigenvalues and eigenvectors through an external dense solver.
//!
//! The kernel does not implement an eigen-solver of its own. Callers go
//! through the [`EigenSolver`] trait; [`NalgebraEigen`] is the default
//! implementation, backed by `nalgebra`'s real Schur form and SVD.

use core::fmt;

use nalgebra::DMatrix;

use crate::complex::Complex;
use crate::error::Result;
use crate::matrix::Matrix;
use crate::vector::Vector;

/// One eigenvalue, real or complex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Eigenvalue {
    Real(f64),
    Complex(Complex),
}

impl Eigenvalue {
    /// Classify a complex value: zero imaginary part means real.
    pub fn from_complex(c: Complex) -> Self {
        if c.im() == 0.0 {
            Eigenvalue::Real(c.re())
        } else {
            Eigenvalue::Complex(c)
        }
    }

    #[inline]
    pub fn is_real(&self) -> bool {
        matches!(self, Eigenvalue::Real(_))
    }

    #[inline]
    pub fn re(&self) -> f64 {
        match self {
            Eigenvalue::Real(x) => *x,
            Eigenvalue::Complex(c) => c.re(),
        }
    }

    #[inline]
    pub fn im(&self) -> f64 {
        match self {
            Eigenvalue::Real(_) => 0.0,
            Eigenvalue::Complex(c) => c.im(),
        }
    }

    /// The value as a [`Complex`].
    pub fn to_complex(&self) -> Complex {
        Complex::new(self.re(), self.im())
    }
}

impl fmt::Display for Eigenvalue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Eigenvalue::Real(x) => fmt::Display::fmt(x, f),
            Eigenvalue::Complex(c) => fmt::Display::fmt(c, f),
        }
    }
}

/// Eigenvalues paired with eigenvectors, index for index.
///
/// An eigenvalue without a real eigenvector (every complex one) is paired
/// with the zero vector.
#[derive(Debug, Clone, PartialEq)]
pub struct EigenDecomposition {
    pub eigenvalues: Vec<Eigenvalue>,
    pub eigenvectors: Vec<Vector>,
}

impl EigenDecomposition {
    /// Number of eigenpairs.
    pub fn len(&self) -> usize {
        self.eigenvalues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.eigenvalues.is_empty()
    }

    /// Iterate over `(eigenvalue, eigenvector)` pairs.
    pub fn pairs(&self) -> impl Iterator<Item = (&Eigenvalue, &Vector)> {
        self.eigenvalues.iter().zip(self.eigenvectors.iter())
    }
}

/// Capability to compute the spectral decomposition of a real square matrix.
pub trait EigenSolver {
    fn decompose(&self, a: &Matrix) -> Result<EigenDecomposition>;
}

/// [`EigenSolver`] backed by `nalgebra`.
///
/// Eigenvalues come from the real Schur form and are ordered by descending
/// real part, then descending imaginary part. For each real eigenvalue `λ`
/// the eigenvector is a right singular vector of `A - λI`, normalized to unit
/// length with its largest component positive. The `k`-th repeat of `λ`
/// (within [`REPEAT_TOLERANCE`]) takes the singular vector of the `k`-th
/// smallest singular value, so a semisimple eigenvalue of multiplicity `m`
/// gets `m` independent eigenvectors.
#[derive(Debug, Clone, Copy, Default)]
pub struct NalgebraEigen;

/// Relative gap below which two real eigenvalues count as one repeated value.
pub const REPEAT_TOLERANCE: f64 = 1e-9;

impl EigenSolver for NalgebraEigen {
    fn decompose(&self, a: &Matrix) -> Result<EigenDecomposition> {
        a.require_square()?;
        let n = a.nrows();
        let dm = DMatrix::from_row_slice(n, n, a.as_slice());

        let mut eigenvalues: Vec<Eigenvalue> = dm
            .complex_eigenvalues()
            .iter()
            .map(|&c| Eigenvalue::from_complex(Complex::from(c)))
            .collect();
        eigenvalues.sort_by(|x, y| {
            y.re()
                .total_cmp(&x.re())
                .then_with(|| y.im().total_cmp(&x.im()))
        });

        let mut eigenvectors = Vec::with_capacity(n);
        let mut group: Option<(f64, usize)> = None;
        for ev in &eigenvalues {
            match ev {
                Eigenvalue::Real(lambda) => {
                    let (base, k) = match group {
                        Some((base, k)) if is_repeat(base, *lambda) => (base, k + 1),
                        _ => (*lambda, 0),
                    };
                    group = Some((base, k));
                    eigenvectors.push(null_vector(&dm, base, k));
                }
                Eigenvalue::Complex(c) => {
                    group = None;
                    log::debug!("eigen: no real eigenvector for {c}, using zero vector");
                    eigenvectors.push(Vector::zeros(n));
                }
            }
        }

        Ok(EigenDecomposition {
            eigenvalues,
            eigenvectors,
        })
    }
}

fn is_repeat(a: f64, b: f64) -> bool {
    (a - b).abs() <= REPEAT_TOLERANCE * a.abs().max(b.abs()).max(1.0)
}

/// Right singular vector of `A - λI` for its `k`-th smallest singular value.
fn null_vector(a: &DMatrix<f64>, lambda: f64, k: usize) -> Vector {
    let n = a.nrows();
    let shifted = a - DMatrix::<f64>::identity(n, n) * lambda;
    let svd = shifted.svd(false, true);
    let Some(v_t) = svd.v_t else {
        log::debug!("eigen: SVD returned no right singular vectors for {lambda}");
        return Vector::zeros(n);
    };

    let mut order: Vec<usize> = (0..svd.singular_values.len()).collect();
    order.sort_by(|&x, &y| svd.singular_values[x].total_cmp(&svd.singular_values[y]));
    let Some(&row) = order.get(k).or(order.last()) else {
        return Vector::zeros(n);
    };

    let mut v: Vec<f64> = v_t.row(row).iter().copied().collect();
    let largest = v
        .iter()
        .copied()
        .max_by(|x, y| x.abs().total_cmp(&y.abs()))
        .unwrap_or(0.0);
    if largest < 0.0 {
        for x in &mut v {
            *x = -*x;
        }
    }
    Vector::new(v)
}

/// Spectral decomposition with the default [`NalgebraEigen`] solver.
///
/// ```
/// use linalg_kernel::Matrix;
/// use linalg_kernel::decomposition::spectral_decomposition;
///
/// let a = Matrix::from_rows(vec![vec![2.0, 0.0], vec![0.0, 3.0]]).unwrap();
/// let eig = spectral_decomposition(&a).unwrap();
/// assert!((eig.eigenvalues[0].re() - 3.0).abs() < 1e-12);
/// assert!((eig.eigenvalues[1].re() - 2.0).abs() < 1e-12);
/// ```
pub fn spectral_decomposition(a: &Matrix) -> Result<EigenDecomposition> {
    spectral_decomposition_with(&NalgebraEigen, a)
}

/// Spectral decomposition with a caller-supplied solver.
pub fn spectral_decomposition_with(
    solver: &impl EigenSolver,
    a: &Matrix,
) -> Result<EigenDecomposition> {
    a.require_square()?;
    solver.decompose(a)
}

/// Eigenvalues of `a`, ordered as in [`NalgebraEigen`].
pub fn eigenvalues(a: &Matrix) -> Result<Vec<Eigenvalue>> {
    Ok(spectral_decomposition(a)?.eigenvalues)
}

/// Eigenvectors of `a`, one per eigenvalue (zero for complex eigenvalues).
pub fn eigenvectors(a: &Matrix) -> Result<Vec<Vector>> {
    Ok(spectral_decomposition(a)?.eigenvectors)
}

impl Matrix {
    /// Convenience for [`spectral_decomposition`].
    pub fn eigen(&self) -> Result<EigenDecomposition> {
        spectral_decomposition(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LinalgError;

    const TOL: f64 = 1e-9;

    fn m(rows: &[&[f64]]) -> Matrix {
        Matrix::from_rows(rows.iter().map(|r| r.to_vec()).collect()).unwrap()
    }

    #[test]
    fn classify() {
        assert!(Eigenvalue::from_complex(Complex::new(2.0, 0.0)).is_real());
        let c = Eigenvalue::from_complex(Complex::new(1.0, -1.0));
        assert!(!c.is_real());
        assert_eq!((c.re(), c.im()), (1.0, -1.0));
        assert_eq!(Eigenvalue::Real(4.5).to_string(), "4.5");
    }

    #[test]
    fn symmetric_2x2() {
        let a = m(&[&[2.0, 1.0], &[1.0, 2.0]]);
        let eig = spectral_decomposition(&a).unwrap();
        assert_eq!(eig.len(), 2);
        assert!((eig.eigenvalues[0].re() - 3.0).abs() < TOL);
        assert!((eig.eigenvalues[1].re() - 1.0).abs() < TOL);

        let s = 1.0 / 2.0_f64.sqrt();
        let v0 = &eig.eigenvectors[0];
        assert!((v0[0] - s).abs() < TOL && (v0[1] - s).abs() < TOL);
    }

    #[test]
    fn eigenpairs_satisfy_definition() {
        let a = m(&[&[4.0, 1.0, 0.0], &[1.0, 3.0, 1.0], &[0.0, 1.0, 2.0]]);
        let eig = a.eigen().unwrap();
        for (ev, v) in eig.pairs() {
            assert!(ev.is_real());
            assert!((v.norm() - 1.0).abs() < TOL);
            for i in 0..3 {
                let av: f64 = (0..3).map(|j| a[(i, j)] * v[j]).sum();
                assert!((av - ev.re() * v[i]).abs() < 1e-8, "A v = lambda v");
            }
        }
    }

    #[test]
    fn rotation_has_complex_pair() {
        let a = m(&[&[0.0, -1.0], &[1.0, 0.0]]);
        let eig = spectral_decomposition(&a).unwrap();
        assert!(!eig.eigenvalues[0].is_real());
        assert!((eig.eigenvalues[0].im() - 1.0).abs() < TOL);
        assert!((eig.eigenvalues[1].im() + 1.0).abs() < TOL);
        assert_eq!(eig.eigenvectors[0], Vector::zeros(2));
    }

    #[test]
    fn not_square() {
        let a = m(&[&[1.0, 2.0]]);
        assert_eq!(
            eigenvalues(&a).unwrap_err(),
            LinalgError::NotSquare { rows: 1, cols: 2 }
        );
    }

    #[test]
    fn repeat_grouping() {
        assert!(is_repeat(2.0, 2.0));
        assert!(is_repeat(1e6, 1e6 + 1e-4));
        assert!(!is_repeat(1.0, 1.0 + 1e-6));
        assert!(!is_repeat(0.0, 1e-6));
    }

    #[test]
    fn identity_has_a_full_eigenbasis() {
        let eig = Matrix::identity(3).unwrap().eigen().unwrap();
        assert!(eig.eigenvalues.iter().all(|ev| *ev == Eigenvalue::Real(1.0)));
        assert_eq!(Vector::rank(&eig.eigenvectors).unwrap(), 3);
    }

    struct Diagonal;

    impl EigenSolver for Diagonal {
        fn decompose(&self, a: &Matrix) -> Result<EigenDecomposition> {
            let n = a.nrows();
            Ok(EigenDecomposition {
                eigenvalues: (0..n).map(|i| Eigenvalue::Real(a[(i, i)])).collect(),
                eigenvectors: (0..n)
                    .map(|i| Vector::new((0..n).map(|j| if i == j { 1.0 } else { 0.0 }).collect()))
                    .collect(),
            })
        }
    }

    #[test]
    fn custom_solver() {
        let a = m(&[&[5.0, 0.0], &[0.0, 7.0]]);
        let eig = spectral_decomposition_with(&Diagonal, &a).unwrap();
        assert_eq!(eig.eigenvalues, vec![Eigenvalue::Real(5.0), Eigenvalue::Real(7.0)]);
        assert!(spectral_decomposition_with(&Diagonal, &m(&[&[1.0, 2.0]])).is_err());
    }
}
