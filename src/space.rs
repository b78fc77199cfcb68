//! Vector-space analysis over finite sets of [`Vector`]s.
//!
//! A "set" here is a slice of vectors that should all share one dimension.
//! The query functions ([`is_subspace`], [`base`], [`dimension`]) answer
//! `false` / empty / `0` for empty or mixed-dimension input; the
//! constructive ones return an error instead.

use crate::error::{LinalgError, Result};
use crate::vector::Vector;

/// Largest component magnitude still counted as zero when looking for the
/// zero vector of a candidate subspace.
pub const ZERO_TOLERANCE: f64 = 1e-6;

// ── Queries ─────────────────────────────────────────────────────────

/// Whether a finite set of vectors is closed like a subspace.
///
/// Requires a (near) zero vector, closure under pairwise sums, and closure
/// under multiplication by `-1`, `0` and `1`. Containment is exact
/// element-wise equality.
///
/// ```
/// use linalg_kernel::Vector;
/// use linalg_kernel::space::is_subspace;
///
/// let trivial = [Vector::from_slice(&[0.0, 0.0])];
/// assert!(is_subspace(&trivial));
///
/// let line = [Vector::from_slice(&[0.0, 0.0]), Vector::from_slice(&[1.0, 1.0])];
/// assert!(!is_subspace(&line));
/// ```
pub fn is_subspace(vectors: &[Vector]) -> bool {
    if common_dimension(vectors).is_none() {
        return false;
    }
    let has_zero = vectors
        .iter()
        .any(|v| v.iter().all(|x| x.abs() <= ZERO_TOLERANCE));
    if !has_zero {
        return false;
    }

    let contains = |target: &Vector| vectors.iter().any(|v| v == target);

    for a in vectors {
        for b in vectors {
            let mut sum = a.clone();
            if sum.add(b).is_err() || !contains(&sum) {
                return false;
            }
        }
    }

    vectors
        .iter()
        .all(|v| [-1.0, 0.0, 1.0].iter().all(|&k| contains(&v.scale(k))))
}

/// Maximal linearly independent subset, chosen greedily in input order.
///
/// A vector is kept when appending it raises the rank of the kept set.
/// Empty or mixed-dimension input gives an empty basis.
///
/// ```
/// use linalg_kernel::Vector;
/// use linalg_kernel::space::base;
///
/// let vs = [
///     Vector::from_slice(&[1.0, 0.0]),
///     Vector::from_slice(&[2.0, 0.0]),
///     Vector::from_slice(&[0.0, 3.0]),
/// ];
/// let b = base(&vs);
/// assert_eq!(b, vec![vs[0].clone(), vs[2].clone()]);
/// ```
pub fn base(vectors: &[Vector]) -> Vec<Vector> {
    if common_dimension(vectors).is_none() {
        return Vec::new();
    }
    let mut basis: Vec<Vector> = Vec::new();
    for v in vectors {
        basis.push(v.clone());
        let grew = matches!(Vector::rank(&basis), Ok(r) if r == basis.len());
        if !grew {
            basis.pop();
        }
    }
    basis
}

/// Dimension of the span, i.e. [`Vector::rank`]. Empty or mixed-dimension
/// input has dimension 0.
pub fn dimension(vectors: &[Vector]) -> usize {
    if common_dimension(vectors).is_none() {
        return 0;
    }
    Vector::rank(vectors).unwrap_or(0)
}

// ── Constructions ───────────────────────────────────────────────────

/// `Σ scalars[i] · vectors[i]`.
///
/// ```
/// use linalg_kernel::Vector;
/// use linalg_kernel::space::linear_combination;
///
/// let vs = [Vector::from_slice(&[1.0, 0.0]), Vector::from_slice(&[0.0, 1.0])];
/// let v = linear_combination(&vs, &[2.0, -3.0]).unwrap();
/// assert_eq!(v.as_slice(), &[2.0, -3.0]);
/// ```
pub fn linear_combination(vectors: &[Vector], scalars: &[f64]) -> Result<Vector> {
    if vectors.len() != scalars.len() {
        return Err(LinalgError::InvalidInput(
            "need exactly one scalar per vector",
        ));
    }
    let dim = common_dimension(vectors).ok_or(LinalgError::InvalidInput(
        "vectors must be non-empty and share one dimension",
    ))?;

    let mut out = Vector::zeros(dim);
    for (v, &k) in vectors.iter().zip(scalars) {
        for (o, &x) in out.as_mut_slice().iter_mut().zip(v.iter()) {
            *o += k * x;
        }
    }
    Ok(out)
}

/// Row `i` of the result is `vectors[i]` multiplied element-wise by
/// `new_base[i]`.
///
/// `new_base` may be longer than `vectors`; extra entries are ignored.
pub fn change_base(vectors: &[Vector], new_base: &[Vector]) -> Result<Vec<Vector>> {
    aligned_products(vectors, new_base, None)
}

/// Same index-aligned products as [`change_base`].
pub fn relative_coordinates(vectors: &[Vector], new_base: &[Vector]) -> Result<Vec<Vector>> {
    aligned_products(vectors, new_base, None)
}

/// [`relative_coordinates`] with row `i` additionally scaled by
/// `scalars[i]`.
///
/// ```
/// use linalg_kernel::Vector;
/// use linalg_kernel::space::relative_coordinates_scaled;
///
/// let vs = [Vector::from_slice(&[1.0, 2.0])];
/// let b = [Vector::from_slice(&[3.0, 4.0])];
/// let out = relative_coordinates_scaled(&vs, &b, &[0.5]).unwrap();
/// assert_eq!(out[0].as_slice(), &[1.5, 4.0]);
/// ```
pub fn relative_coordinates_scaled(
    vectors: &[Vector],
    new_base: &[Vector],
    scalars: &[f64],
) -> Result<Vec<Vector>> {
    aligned_products(vectors, new_base, Some(scalars))
}

fn aligned_products(
    vectors: &[Vector],
    new_base: &[Vector],
    scalars: Option<&[f64]>,
) -> Result<Vec<Vector>> {
    let Some(first) = vectors.first() else {
        return Err(LinalgError::InvalidInput("vectors cannot be empty"));
    };
    if new_base.len() < vectors.len() {
        return Err(LinalgError::InvalidInput(
            "new base needs at least one vector per input vector",
        ));
    }
    if scalars.is_some_and(|s| s.len() < vectors.len()) {
        return Err(LinalgError::InvalidInput(
            "need at least one scalar per input vector",
        ));
    }
    let dim = first.len();
    if let Some(v) = vectors.iter().chain(new_base).find(|v| v.len() != dim) {
        return Err(LinalgError::length_mismatch(dim, v.len()));
    }

    vectors
        .iter()
        .zip(new_base)
        .enumerate()
        .map(|(i, (v, b))| -> Result<Vector> {
            let row = v.hadamard(b)?;
            Ok(match scalars {
                Some(s) => row.scale(s[i]),
                None => row,
            })
        })
        .collect()
}

/// Dimension shared by every vector, or `None` for empty or mixed input.
fn common_dimension(vectors: &[Vector]) -> Option<usize> {
    let dim = vectors.first()?.len();
    vectors.iter().all(|v| v.len() == dim).then_some(dim)
}
