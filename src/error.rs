use thiserror::Error;

/// Errors from vector, matrix and decomposition operations.
///
/// Every fallible entry point in the crate returns this type. Failures are
/// reported at the point of detection; no operation returns a partial result
/// alongside an error.
///
/// ```
/// use linalg_kernel::{LinalgError, Matrix};
///
/// let singular = Matrix::from_rows(vec![vec![0.0, 1.0], vec![1.0, 0.0]]).unwrap();
/// assert_eq!(singular.inverse().unwrap_err(), LinalgError::Singular);
///
/// let wide = Matrix::from_rows(vec![vec![1.0, 2.0, 3.0]]).unwrap();
/// assert_eq!(
///     wide.determinant().unwrap_err(),
///     LinalgError::NotSquare { rows: 1, cols: 3 }
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LinalgError {
    /// Operand shapes or lengths disagree.
    #[error("dimension mismatch: expected {expected:?}, got {got:?}")]
    DimensionMismatch {
        expected: (usize, usize),
        got: (usize, usize),
    },

    /// A square-only operation received a non-square matrix.
    #[error("matrix must be square, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    /// Elimination found no usable pivot.
    #[error("matrix is singular")]
    Singular,

    /// Normalize, project or angle was given a zero-norm operand.
    #[error("operation is undefined for a zero vector")]
    ZeroVector,

    /// Empty, ragged or unparseable input.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),

    /// The operation is only defined for a specific vector dimension.
    #[error("operation requires dimension {expected}, got {got}")]
    InvalidDimension { expected: usize, got: usize },

    /// Complex division by a divisor of zero magnitude.
    #[error("division by zero")]
    DivisionByZero,
}

impl LinalgError {
    /// Length mismatch between two vectors (reported as `1 x len` shapes).
    pub(crate) fn length_mismatch(expected: usize, got: usize) -> Self {
        LinalgError::DimensionMismatch {
            expected: (1, expected),
            got: (1, got),
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, LinalgError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            LinalgError::NotSquare { rows: 2, cols: 3 }.to_string(),
            "matrix must be square, got 2x3"
        );
        assert_eq!(
            LinalgError::length_mismatch(3, 2).to_string(),
            "dimension mismatch: expected (1, 3), got (1, 2)"
        );
        assert_eq!(LinalgError::Singular.to_string(), "matrix is singular");
    }
}
