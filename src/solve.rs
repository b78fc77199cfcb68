//! Linear systems given as augmented matrices `[A | b]`.

use core::fmt;

use crate::error::{LinalgError, Result};
use crate::matrix::Matrix;
use crate::vector::Vector;

/// Magnitudes at or below this are treated as zero during elimination and
/// classification.
pub const ELIMINATION_TOLERANCE: f64 = 1e-10;

/// Consistency of a linear system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemClass {
    /// No row reads `0 = c` with `c != 0`.
    Possible,
    /// Some row reads `0 = c` with `c != 0`.
    Impossible,
}

impl fmt::Display for SystemClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SystemClass::Possible => "Possible",
            SystemClass::Impossible => "Impossible",
        })
    }
}

/// Reduce an augmented matrix to row-echelon form with unit pivots.
///
/// For each pivot `k < min(rows, cols)`: if `|a[k][k]|` is below
/// [`ELIMINATION_TOLERANCE`], the first lower row with a larger entry in
/// that column is swapped in (none is a `Singular` error). The pivot row is
/// divided by its pivot and the column is cleared below it. Rows above the
/// pivot are left untouched. The input is not modified.
///
/// ```
/// use linalg_kernel::Matrix;
/// use linalg_kernel::solve::gaussian_elimination;
///
/// let aug = Matrix::from_rows(vec![
///     vec![2.0, 1.0, -1.0, 8.0],
///     vec![-3.0, -1.0, 2.0, -11.0],
///     vec![-2.0, 1.0, 2.0, -3.0],
/// ]).unwrap();
/// let r = gaussian_elimination(&aug).unwrap();
/// assert_eq!(r.row(0).as_slice(), &[1.0, 0.5, -0.5, 4.0]);
/// ```
pub fn gaussian_elimination(augmented: &Matrix) -> Result<Matrix> {
    let (rows, cols) = augmented.shape();
    let mut data = augmented.to_rows();

    for pivot in 0..rows.min(cols) {
        if data[pivot][pivot].abs() < ELIMINATION_TOLERANCE {
            let Some(swap) =
                (pivot + 1..rows).find(|&r| data[r][pivot].abs() > ELIMINATION_TOLERANCE)
            else {
                log::debug!("gaussian_elimination: no pivot in column {pivot}");
                return Err(LinalgError::Singular);
            };
            log::trace!("gaussian_elimination: swap rows {pivot} and {swap}");
            data.swap(pivot, swap);
        }

        let value = data[pivot][pivot];
        for x in &mut data[pivot][pivot..] {
            *x /= value;
        }

        let (upper, lower) = data.split_at_mut(pivot + 1);
        let pivot_row = &upper[pivot];
        for row in lower.iter_mut() {
            let factor = row[pivot];
            for (x, &p) in row[pivot..].iter_mut().zip(&pivot_row[pivot..]) {
                *x -= factor * p;
            }
        }
    }

    Ok(Matrix::from_parts(
        data.into_iter().flatten().collect(),
        rows,
        cols,
    ))
}

/// Classify an augmented matrix as it stands, without reducing it first.
///
/// The system is [`SystemClass::Impossible`] when some row has every
/// coefficient within [`ELIMINATION_TOLERANCE`] of zero but a constant term
/// outside it. Pass the result of [`gaussian_elimination`] to classify a
/// general system.
///
/// ```
/// use linalg_kernel::Matrix;
/// use linalg_kernel::solve::{classify_system, SystemClass};
///
/// let aug = Matrix::from_rows(vec![vec![1.0, 1.0, 2.0], vec![0.0, 0.0, 3.0]]).unwrap();
/// assert_eq!(classify_system(&aug), SystemClass::Impossible);
/// assert_eq!(classify_system(&aug).to_string(), "Impossible");
/// ```
pub fn classify_system(augmented: &Matrix) -> SystemClass {
    let cols = augmented.ncols();
    let inconsistent = (0..augmented.nrows()).any(|i| {
        let row = augmented.row_slice(i);
        let (coefficients, constant) = row.split_at(cols - 1);
        coefficients.iter().all(|x| x.abs() <= ELIMINATION_TOLERANCE)
            && constant[0].abs() > ELIMINATION_TOLERANCE
    });
    if inconsistent {
        SystemClass::Impossible
    } else {
        SystemClass::Possible
    }
}

/// Solve the square system `[A | b]` (`n × (n + 1)`) by
/// [`gaussian_elimination`] followed by back substitution.
///
/// ```
/// use linalg_kernel::Matrix;
/// use linalg_kernel::solve::solve;
///
/// let aug = Matrix::from_rows(vec![
///     vec![2.0, 1.0, -1.0, 8.0],
///     vec![-3.0, -1.0, 2.0, -11.0],
///     vec![-2.0, 1.0, 2.0, -3.0],
/// ]).unwrap();
/// let x = solve(&aug).unwrap();
/// assert!((x[0] - 2.0).abs() < 1e-12);
/// assert!((x[1] - 3.0).abs() < 1e-12);
/// assert!((x[2] + 1.0).abs() < 1e-12);
/// ```
pub fn solve(augmented: &Matrix) -> Result<Vector> {
    let (n, cols) = augmented.shape();
    if cols != n + 1 {
        return Err(LinalgError::DimensionMismatch {
            expected: (n, n + 1),
            got: (n, cols),
        });
    }
    let reduced = gaussian_elimination(augmented)?;
    let mut x = vec![0.0; n];
    for i in (0..n).rev() {
        let tail: f64 = (i + 1..n).map(|j| reduced[(i, j)] * x[j]).sum();
        x[i] = reduced[(i, n)] - tail;
    }
    Ok(Vector::new(x))
}
