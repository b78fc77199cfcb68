use crate::error::{LinalgError, Result};

use super::Vector;

impl Vector {
    /// Rank of a set of vectors, treated as the rows of a matrix.
    ///
    /// Column by column, the first row not yet used as a pivot with a
    /// non-zero entry becomes the pivot row; it is normalized and the column
    /// is eliminated from every other row. The number of pivots found is the
    /// rank. The input is copied, never modified.
    ///
    /// An empty set, or a set of zero-length vectors, has rank 0.
    ///
    /// ```
    /// use linalg_kernel::Vector;
    /// let vs = [
    ///     Vector::from_slice(&[1.0, 2.0, 3.0]),
    ///     Vector::from_slice(&[2.0, 4.0, 6.0]),
    ///     Vector::from_slice(&[0.0, 1.0, 0.0]),
    /// ];
    /// assert_eq!(Vector::rank(&vs).unwrap(), 2);
    /// ```
    pub fn rank(vectors: &[Vector]) -> Result<usize> {
        let Some(first) = vectors.first() else {
            return Ok(0);
        };
        let cols = first.len();
        if let Some(v) = vectors.iter().find(|v| v.len() != cols) {
            return Err(LinalgError::length_mismatch(cols, v.len()));
        }
        if cols == 0 {
            return Ok(0);
        }

        let mut work: Vec<Vec<f64>> = vectors.iter().map(|v| v.data.clone()).collect();
        let mut used = vec![false; work.len()];
        let mut rank = 0;

        for col in 0..cols {
            let Some(pivot_row) = (0..work.len()).find(|&r| !used[r] && work[r][col] != 0.0)
            else {
                continue;
            };
            used[pivot_row] = true;
            rank += 1;

            let pivot = work[pivot_row][col];
            for x in &mut work[pivot_row][col..] {
                *x /= pivot;
            }

            let pivot_vals = work[pivot_row].clone();
            for (r, row) in work.iter_mut().enumerate() {
                if r == pivot_row || row[col] == 0.0 {
                    continue;
                }
                let factor = row[col];
                for j in col..cols {
                    row[j] -= factor * pivot_vals[j];
                }
            }
        }

        log::trace!("rank of {} vectors in R^{}: {}", vectors.len(), cols, rank);
        Ok(rank)
    }

    /// `true` when `rank == min(count, dimension)`. The empty set is
    /// independent.
    ///
    /// ```
    /// use linalg_kernel::Vector;
    /// let e = [Vector::from_slice(&[1.0, 0.0]), Vector::from_slice(&[0.0, 1.0])];
    /// assert!(Vector::is_linearly_independent(&e).unwrap());
    /// assert!(Vector::is_linearly_independent(&[]).unwrap());
    /// ```
    pub fn is_linearly_independent(vectors: &[Vector]) -> Result<bool> {
        let Some(first) = vectors.first() else {
            return Ok(true);
        };
        let rank = Vector::rank(vectors)?;
        Ok(rank == vectors.len().min(first.len()))
    }

    /// Negation of [`is_linearly_independent`](Self::is_linearly_independent).
    pub fn is_linearly_dependent(vectors: &[Vector]) -> Result<bool> {
        Ok(!Vector::is_linearly_independent(vectors)?)
    }
}
