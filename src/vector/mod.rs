mod rank;

use core::ops::{Index, IndexMut, Mul, Neg};

use crate::error::{LinalgError, Result};
use crate::traits::MatrixRef;

/// Real-valued vector with a length fixed at construction.
///
/// Owns its storage; clones never alias. The empty vector is valid and has
/// norm zero.
///
/// Operations that need matching lengths return
/// [`LinalgError::DimensionMismatch`] instead of panicking.
///
/// # Examples
///
/// ```
/// use linalg_kernel::Vector;
///
/// let a = Vector::from_slice(&[1.0, 2.0, 3.0]);
/// let b = Vector::from_slice(&[4.0, 5.0, 6.0]);
/// assert_eq!(a.dot(&b).unwrap(), 32.0);
/// assert_eq!(a.cross(&b).unwrap(), Vector::from_slice(&[-3.0, 6.0, -3.0]));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Vector {
    data: Vec<f64>,
}

// ── Constructors ────────────────────────────────────────────────────

impl Vector {
    /// Wrap an owned `Vec<f64>`.
    pub fn new(data: Vec<f64>) -> Self {
        Self { data }
    }

    /// Copy a slice into a new vector.
    ///
    /// ```
    /// use linalg_kernel::Vector;
    /// let v = Vector::from_slice(&[1.0, 2.0]);
    /// assert_eq!(v[1], 2.0);
    /// ```
    pub fn from_slice(data: &[f64]) -> Self {
        Self {
            data: data.to_vec(),
        }
    }

    /// Zero vector of length `n`.
    pub fn zeros(n: usize) -> Self {
        Self { data: vec![0.0; n] }
    }

    /// Number of components.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the vector has no components.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// View the components as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// View the components as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Consume the vector and return its storage.
    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }

    /// Iterate over the components.
    pub fn iter(&self) -> core::slice::Iter<'_, f64> {
        self.data.iter()
    }

    fn check_len(&self, other: &Vector) -> Result<()> {
        if self.len() != other.len() {
            return Err(LinalgError::length_mismatch(self.len(), other.len()));
        }
        Ok(())
    }
}

// ── Arithmetic ──────────────────────────────────────────────────────

impl Vector {
    /// Element-wise sum of any number of equal-length slices.
    ///
    /// No arguments yields the empty vector.
    ///
    /// ```
    /// use linalg_kernel::Vector;
    /// let s = Vector::sum(&[&[1.0, 2.0], &[3.0, 4.0], &[5.0, 6.0]]).unwrap();
    /// assert_eq!(s.as_slice(), &[9.0, 12.0]);
    /// assert!(Vector::sum(&[&[1.0], &[1.0, 2.0]]).is_err());
    /// ```
    pub fn sum(vectors: &[&[f64]]) -> Result<Vector> {
        let Some(first) = vectors.first() else {
            return Ok(Vector::default());
        };
        check_slice_lengths(vectors)?;
        let mut out = vec![0.0; first.len()];
        for v in vectors {
            for (o, &x) in out.iter_mut().zip(v.iter()) {
                *o += x;
            }
        }
        Ok(Vector::new(out))
    }

    /// The first slice minus every following slice, element-wise.
    ///
    /// ```
    /// use linalg_kernel::Vector;
    /// let d = Vector::subtraction(&[&[10.0, 10.0], &[1.0, 2.0], &[3.0, 4.0]]).unwrap();
    /// assert_eq!(d.as_slice(), &[6.0, 4.0]);
    /// ```
    pub fn subtraction(vectors: &[&[f64]]) -> Result<Vector> {
        let Some(first) = vectors.first() else {
            return Ok(Vector::default());
        };
        check_slice_lengths(vectors)?;
        let mut out = first.to_vec();
        for v in &vectors[1..] {
            for (o, &x) in out.iter_mut().zip(v.iter()) {
                *o -= x;
            }
        }
        Ok(Vector::new(out))
    }

    /// Add `other` into `self` in place.
    pub fn add(&mut self, other: &Vector) -> Result<()> {
        self.check_len(other)?;
        for (a, &b) in self.data.iter_mut().zip(other.data.iter()) {
            *a += b;
        }
        Ok(())
    }

    /// Subtract `other` from `self` in place.
    pub fn subtract(&mut self, other: &Vector) -> Result<()> {
        self.check_len(other)?;
        for (a, &b) in self.data.iter_mut().zip(other.data.iter()) {
            *a -= b;
        }
        Ok(())
    }

    /// Multiply every component by `k`.
    pub fn scale(&self, k: f64) -> Vector {
        Vector::new(self.data.iter().map(|&x| x * k).collect())
    }

    /// Element-wise product.
    pub fn hadamard(&self, other: &Vector) -> Result<Vector> {
        self.check_len(other)?;
        Ok(Vector::new(
            self.data
                .iter()
                .zip(other.data.iter())
                .map(|(&a, &b)| a * b)
                .collect(),
        ))
    }

    /// Dot product.
    pub fn dot(&self, other: &Vector) -> Result<f64> {
        self.check_len(other)?;
        Ok(dot_unchecked(&self.data, &other.data))
    }

    /// Cross product; both operands must be 3-dimensional.
    pub fn cross(&self, other: &Vector) -> Result<Vector> {
        for v in [self, other] {
            if v.len() != 3 {
                return Err(LinalgError::InvalidDimension {
                    expected: 3,
                    got: v.len(),
                });
            }
        }
        let (a, b) = (&self.data, &other.data);
        Ok(Vector::new(vec![
            a[1] * b[2] - a[2] * b[1],
            a[2] * b[0] - a[0] * b[2],
            a[0] * b[1] - a[1] * b[0],
        ]))
    }

    /// Euclidean norm.
    ///
    /// ```
    /// use linalg_kernel::Vector;
    /// assert_eq!(Vector::from_slice(&[3.0, 4.0]).norm(), 5.0);
    /// assert_eq!(Vector::default().norm(), 0.0);
    /// ```
    pub fn norm(&self) -> f64 {
        dot_unchecked(&self.data, &self.data).sqrt()
    }

    /// Same as [`norm`](Self::norm).
    #[inline]
    pub fn magnitude(&self) -> f64 {
        self.norm()
    }

    /// Unit vector in the same direction. Fails on a zero-norm vector.
    pub fn normalize(&self) -> Result<Vector> {
        let n = self.norm();
        if n == 0.0 {
            return Err(LinalgError::ZeroVector);
        }
        Ok(Vector::new(self.data.iter().map(|&x| x / n).collect()))
    }

    /// Projection of `self` onto `onto`: `(a·b / b·b) b`.
    ///
    /// ```
    /// use linalg_kernel::Vector;
    /// let a = Vector::from_slice(&[2.0, 3.0]);
    /// let b = Vector::from_slice(&[1.0, 0.0]);
    /// assert_eq!(a.project(&b).unwrap().as_slice(), &[2.0, 0.0]);
    /// ```
    pub fn project(&self, onto: &Vector) -> Result<Vector> {
        let num = self.dot(onto)?;
        let den = dot_unchecked(&onto.data, &onto.data);
        if den == 0.0 {
            return Err(LinalgError::ZeroVector);
        }
        Ok(onto.scale(num / den))
    }

    /// Angle between `self` and `other` in radians.
    pub fn angle(&self, other: &Vector) -> Result<f64> {
        let d = self.dot(other)?;
        let (na, nb) = (self.norm(), other.norm());
        if na == 0.0 || nb == 0.0 {
            return Err(LinalgError::ZeroVector);
        }
        // Rounding can push the ratio just outside [-1, 1].
        Ok((d / (na * nb)).clamp(-1.0, 1.0).acos())
    }
}

pub(crate) fn dot_unchecked(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b.iter()).map(|(&x, &y)| x * y).sum()
}

fn check_slice_lengths(vectors: &[&[f64]]) -> Result<()> {
    let len = vectors.first().map_or(0, |v| v.len());
    match vectors.iter().find(|v| v.len() != len) {
        Some(v) => Err(LinalgError::length_mismatch(len, v.len())),
        None => Ok(()),
    }
}

// ── Operators ───────────────────────────────────────────────────────

impl Mul<f64> for &Vector {
    type Output = Vector;
    fn mul(self, rhs: f64) -> Vector {
        self.scale(rhs)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;
    fn mul(self, rhs: f64) -> Vector {
        self.scale(rhs)
    }
}

impl Neg for Vector {
    type Output = Vector;
    fn neg(self) -> Vector {
        self.scale(-1.0)
    }
}

// ── Index ───────────────────────────────────────────────────────────

impl Index<usize> for Vector {
    type Output = f64;

    #[inline]
    fn index(&self, i: usize) -> &f64 {
        &self.data[i]
    }
}

impl IndexMut<usize> for Vector {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut f64 {
        &mut self.data[i]
    }
}

impl From<Vec<f64>> for Vector {
    fn from(data: Vec<f64>) -> Self {
        Vector::new(data)
    }
}

impl From<&[f64]> for Vector {
    fn from(data: &[f64]) -> Self {
        Vector::from_slice(data)
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a f64;
    type IntoIter = core::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

// ── MatrixRef (single row) ──────────────────────────────────────────

impl MatrixRef<f64> for Vector {
    #[inline]
    fn nrows(&self) -> usize {
        1
    }

    #[inline]
    fn ncols(&self) -> usize {
        self.len()
    }

    #[inline]
    fn get(&self, _row: usize, col: usize) -> &f64 {
        &self.data[col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-12;

    fn v(data: &[f64]) -> Vector {
        Vector::from_slice(data)
    }

    #[test]
    fn sum_and_subtraction() {
        assert_eq!(Vector::sum(&[]).unwrap(), Vector::default());
        assert_eq!(Vector::sum(&[&[1.0, 2.0]]).unwrap(), v(&[1.0, 2.0]));
        assert_eq!(
            Vector::subtraction(&[&[5.0, 5.0], &[1.0, 2.0]]).unwrap(),
            v(&[4.0, 3.0])
        );
        assert_eq!(
            Vector::subtraction(&[&[1.0], &[1.0, 2.0]]).unwrap_err(),
            LinalgError::length_mismatch(1, 2)
        );
    }

    #[test]
    fn static_and_instance_agree() {
        let a = v(&[1.0, -2.0, 3.5]);
        let b = v(&[0.5, 4.0, -1.0]);

        let mut added = a.clone();
        added.add(&b).unwrap();
        assert_eq!(added, Vector::sum(&[a.as_slice(), b.as_slice()]).unwrap());

        let mut subbed = a.clone();
        subbed.subtract(&b).unwrap();
        assert_eq!(
            subbed,
            Vector::subtraction(&[a.as_slice(), b.as_slice()]).unwrap()
        );
    }

    #[test]
    fn in_place_mismatch_leaves_receiver() {
        let mut a = v(&[1.0, 2.0]);
        assert!(a.add(&v(&[1.0])).is_err());
        assert_eq!(a, v(&[1.0, 2.0]));
    }

    #[test]
    fn scale_and_hadamard() {
        assert_eq!(v(&[1.0, 2.0]).scale(3.0), v(&[3.0, 6.0]));
        assert_eq!(&v(&[1.0, 2.0]) * 0.5, v(&[0.5, 1.0]));
        assert_eq!(-v(&[1.0, -2.0]), v(&[-1.0, 2.0]));
        assert_eq!(
            v(&[1.0, 2.0]).hadamard(&v(&[3.0, 4.0])).unwrap(),
            v(&[3.0, 8.0])
        );
    }

    #[test]
    fn dot_mismatch() {
        assert!(matches!(
            v(&[1.0]).dot(&v(&[1.0, 2.0])),
            Err(LinalgError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn cross_requires_3d() {
        assert_eq!(
            v(&[1.0, 0.0]).cross(&v(&[0.0, 1.0])).unwrap_err(),
            LinalgError::InvalidDimension { expected: 3, got: 2 }
        );
        let k = v(&[1.0, 0.0, 0.0]).cross(&v(&[0.0, 1.0, 0.0])).unwrap();
        assert_eq!(k, v(&[0.0, 0.0, 1.0]));
    }

    #[test]
    fn norm_and_normalize() {
        let a = v(&[3.0, 4.0]);
        assert_eq!(a.norm(), 5.0);
        assert_eq!(a.magnitude(), a.norm());
        let u = a.normalize().unwrap();
        assert!((u.norm() - 1.0).abs() < TOL);
        assert_eq!(v(&[0.0, 0.0]).normalize().unwrap_err(), LinalgError::ZeroVector);
    }

    #[test]
    fn project_onto_zero() {
        assert_eq!(
            v(&[1.0, 1.0]).project(&v(&[0.0, 0.0])).unwrap_err(),
            LinalgError::ZeroVector
        );
    }

    #[test]
    fn angle() {
        let right = v(&[1.0, 0.0]).angle(&v(&[0.0, 2.0])).unwrap();
        assert!((right - core::f64::consts::FRAC_PI_2).abs() < TOL);
        let same = v(&[1.0, 0.0]).angle(&v(&[2.0, 0.0])).unwrap();
        assert_eq!(same, 0.0);
        assert_eq!(
            v(&[0.0, 0.0]).angle(&v(&[1.0, 0.0])).unwrap_err(),
            LinalgError::ZeroVector
        );
    }

    #[test]
    fn angle_of_parallel_vectors_is_finite() {
        let a = v(&[1.0, 1.0, 1.0]);
        assert_eq!(a.angle(&a).unwrap(), 0.0);
        let back = a.angle(&a.scale(-1.0)).unwrap();
        assert!((back - core::f64::consts::PI).abs() < TOL);

        let b = v(&[0.1, 0.7, -0.3, 2.9]);
        let along = b.angle(&b.scale(3.0)).unwrap();
        assert!(along.is_finite() && along < 1e-7);
    }

    #[test]
    fn clones_do_not_alias() {
        let a = v(&[1.0, 2.0]);
        let mut b = a.clone();
        b[0] = 9.0;
        assert_eq!(a[0], 1.0);
    }
}
