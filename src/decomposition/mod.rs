//! Orthogonality, Gram-Schmidt and the LU / QR / spectral factorizations.
//!
//! Every entry point is a free function over borrowed [`Vector`]s or a
//! [`Matrix`](crate::Matrix); inputs are never modified.

pub(crate) mod lu;
pub(crate) mod qr;

#[cfg(feature = "eigen")]
pub mod eigen;

pub use lu::{lu_decomposition, LuDecomposition};
pub use qr::{qr_decomposition, QrDecomposition};

#[cfg(feature = "eigen")]
pub use eigen::{
    eigenvalues, eigenvectors, spectral_decomposition, spectral_decomposition_with,
    EigenDecomposition, EigenSolver, Eigenvalue, NalgebraEigen, REPEAT_TOLERANCE,
};

use crate::error::{LinalgError, Result};
use crate::vector::Vector;

/// `|a · b|` below this counts as orthogonal.
pub const ORTHOGONALITY_TOLERANCE: f64 = 1e-6;

/// Whether `a` and `b` are orthogonal within [`ORTHOGONALITY_TOLERANCE`].
///
/// ```
/// use linalg_kernel::Vector;
/// use linalg_kernel::decomposition::is_orthogonal;
///
/// let a = Vector::from_slice(&[1.0, 0.0]);
/// let b = Vector::from_slice(&[0.0, 5.0]);
/// assert!(is_orthogonal(&a, &b).unwrap());
/// ```
pub fn is_orthogonal(a: &Vector, b: &Vector) -> Result<bool> {
    Ok(a.dot(b)?.abs() < ORTHOGONALITY_TOLERANCE)
}

/// Classic Gram-Schmidt orthonormalization, in input order.
///
/// Each input vector has its projections onto the already computed basis
/// vectors removed and is then normalized. A vector that lies in the span
/// of its predecessors leaves a zero residual and fails with
/// [`LinalgError::ZeroVector`]. Empty input gives empty output.
///
/// ```
/// use linalg_kernel::Vector;
/// use linalg_kernel::decomposition::gram_schmidt;
///
/// let basis = gram_schmidt(&[
///     Vector::from_slice(&[3.0, 1.0]),
///     Vector::from_slice(&[2.0, 2.0]),
/// ]).unwrap();
/// assert!((basis[0].norm() - 1.0).abs() < 1e-12);
/// assert!(basis[0].dot(&basis[1]).unwrap().abs() < 1e-12);
/// ```
pub fn gram_schmidt(vectors: &[Vector]) -> Result<Vec<Vector>> {
    let Some(first) = vectors.first() else {
        return Ok(Vec::new());
    };
    let dim = first.len();
    if let Some(v) = vectors.iter().find(|v| v.len() != dim) {
        return Err(LinalgError::length_mismatch(dim, v.len()));
    }

    let mut basis: Vec<Vector> = Vec::with_capacity(vectors.len());
    for (i, v) in vectors.iter().enumerate() {
        let mut residual = v.clone();
        for e in &basis {
            residual.subtract(&v.project(e)?)?;
        }
        let unit = residual.normalize().map_err(|err| {
            log::debug!("gram_schmidt: vector {i} is dependent on its predecessors");
            err
        })?;
        basis.push(unit);
    }
    Ok(basis)
}
