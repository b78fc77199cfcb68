//! # linalg-kernel
//!
//! Self-contained linear algebra over `f64` and complex numbers: vector and
//! matrix arithmetic, Gaussian elimination, LU / QR / spectral
//! decompositions, rank, determinant and inverse, and vector-space analysis.
//! Exact, small-scale primitives rather than a large-scale dense solver.
//!
//! ## Quick start
//!
//! ```
//! use linalg_kernel::Matrix;
//! use linalg_kernel::solve::{classify_system, gaussian_elimination, SystemClass};
//!
//! let aug = Matrix::from_rows(vec![
//!     vec![2.0, 1.0, -1.0, 8.0],
//!     vec![-3.0, -1.0, 2.0, -11.0],
//!     vec![-2.0, 1.0, 2.0, -3.0],
//! ]).unwrap();
//! let reduced = gaussian_elimination(&aug).unwrap();
//! assert!((reduced[(2, 3)] + 1.0).abs() < 1e-12);
//! assert_eq!(classify_system(&reduced), SystemClass::Possible);
//!
//! let a = Matrix::from_rows(vec![vec![4.0, 7.0], vec![2.0, 6.0]]).unwrap();
//! let id = a.multiply(&a.inverse().unwrap()).unwrap();
//! assert!((id[(0, 0)] - 1.0).abs() < 1e-12);
//! ```
//!
//! ## Modules
//!
//! - [`complex`]: [`Complex`] scalar over `num_complex::Complex64`. Parses
//!   `"a + bi"` and polar `"r<θ"` (degrees); division is fallible.
//!
//! - [`vector`]: Heap-allocated [`Vector`] of `f64` with in-place and pure
//!   arithmetic, dot / cross, projection, angle, rank and linear
//!   independence of vector sets.
//!
//! - [`matrix`]: Row-major [`Matrix`] of `f64`. Arithmetic, transpose,
//!   Gauss-Jordan inverse, pivoted determinant, rank, diagonal / orthogonal /
//!   symmetric transforms.
//!
//! - [`complex_matrix`]: [`ComplexMatrix`], the complex analogue, plus the
//!   conjugate ("cofactor") transform and a cofactor-expansion determinant.
//!
//! - [`decomposition`]: Orthogonality test, Gram-Schmidt, QR, LU (Doolittle)
//!   and, with the `eigen` feature, eigenvalues / eigenvectors through the
//!   [`EigenSolver`](decomposition::EigenSolver) trait.
//!
//! - [`solve`]: Gaussian elimination, back substitution and consistency
//!   classification of augmented systems.
//!
//! - [`space`]: Subspace test, linear combination, basis extraction,
//!   dimension, change of basis.
//!
//! - [`display`]: Bordered text grids for any [`MatrixRef`].
//!
//! - [`traits`]: [`MatrixRef`] read-only matrix view.
//!
//! ## Errors
//!
//! Every fallible operation returns [`Result<T>`](Result) with a
//! [`LinalgError`]. Nothing panics on bad input except out-of-bounds
//! indexing.
//!
//! ## Logging
//!
//! Algorithms report decisions (zero pivots, row swaps, singular input)
//! through the [`log`](https://docs.rs/log) facade at `debug` and `trace`
//! level. Install any `log` backend to see them.
//!
//! ## Cargo features
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `eigen` | yes     | Spectral decomposition via `nalgebra` |

pub mod complex;
pub mod complex_matrix;
pub mod decomposition;
pub mod display;
pub mod error;
pub mod matrix;
pub mod solve;
pub mod space;
pub mod traits;
pub mod vector;

pub use complex::Complex;
pub use complex_matrix::ComplexMatrix;
pub use error::{LinalgError, Result};
pub use matrix::Matrix;
pub use traits::MatrixRef;
pub use vector::Vector;
