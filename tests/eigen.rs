#![cfg(feature = "eigen")]

use linalg_kernel::decomposition::{
    eigenvalues, eigenvectors, spectral_decomposition, Eigenvalue,
};
use linalg_kernel::{Complex, LinalgError, Matrix, Vector};

const TOL: f64 = 1e-8;

fn assert_near(a: f64, b: f64, tol: f64, msg: &str) {
    assert!((a - b).abs() < tol, "{}: {} vs {} (diff {})", msg, a, b, (a - b).abs());
}

fn m(rows: &[&[f64]]) -> Matrix {
    Matrix::from_rows(rows.iter().map(|r| r.to_vec()).collect()).unwrap()
}

#[test]
fn upper_triangular_spectrum() {
    let a = m(&[&[2.0, 1.0], &[0.0, 5.0]]);
    let eig = spectral_decomposition(&a).unwrap();
    assert_near(eig.eigenvalues[0].re(), 5.0, TOL, "lambda0");
    assert_near(eig.eigenvalues[1].re(), 2.0, TOL, "lambda1");

    // (A - 5I) v = 0  =>  v ∝ (1, 3)
    let s = 1.0 / 10.0_f64.sqrt();
    let v0 = &eig.eigenvectors[0];
    assert_near(v0[0], s, TOL, "v0[0]");
    assert_near(v0[1], 3.0 * s, TOL, "v0[1]");

    let v1 = &eig.eigenvectors[1];
    assert_near(v1[0], 1.0, TOL, "v1[0]");
    assert_near(v1[1], 0.0, TOL, "v1[1]");
}

#[test]
fn eigenvectors_have_positive_leading_magnitude() {
    let a = m(&[&[2.0, -1.0, 0.0], &[-1.0, 2.0, -1.0], &[0.0, -1.0, 2.0]]);
    for v in eigenvectors(&a).unwrap() {
        assert_near(v.norm(), 1.0, TOL, "unit norm");
        let largest = v
            .iter()
            .copied()
            .max_by(|x, y| x.abs().total_cmp(&y.abs()))
            .unwrap();
        assert!(largest > 0.0);
    }
}

#[test]
fn eigenvalues_sum_to_trace() {
    let a = m(&[&[4.0, 1.0, 2.0], &[0.0, 3.0, 1.0], &[1.0, 0.0, 2.0]]);
    let trace = a[(0, 0)] + a[(1, 1)] + a[(2, 2)];
    let vals = eigenvalues(&a).unwrap();
    assert_eq!(vals.len(), 3);
    let re: f64 = vals.iter().map(Eigenvalue::re).sum();
    let im: f64 = vals.iter().map(Eigenvalue::im).sum();
    assert_near(re, trace, TOL, "trace");
    assert_near(im, 0.0, TOL, "conjugate pairs cancel");

    let det = a.determinant().unwrap();
    let prod = vals
        .iter()
        .map(Eigenvalue::to_complex)
        .fold(Complex::ONE, Complex::multiply);
    assert_near(prod.re(), det, 1e-7, "product = det");
}

#[test]
fn rotation_pairs_with_zero_vectors() {
    let a = m(&[&[0.0, -2.0], &[2.0, 0.0]]);
    let eig = a.eigen().unwrap();
    assert_eq!(eig.len(), 2);
    for (ev, v) in eig.pairs() {
        assert!(!ev.is_real());
        assert_near(ev.to_complex().magnitude(), 2.0, TOL, "|lambda|");
        assert!(v.iter().all(|&x| x == 0.0));
    }
    assert!(eig.eigenvalues[0].im() > 0.0);
}

#[test]
fn repeated_eigenvalues_get_independent_vectors() {
    let diag = Matrix::from_fn(3, 3, |i, j| match (i, j) {
        (2, 2) => 5.0,
        (i, j) if i == j => 2.0,
        _ => 0.0,
    })
    .unwrap();
    for a in [Matrix::identity(2).unwrap(), diag] {
        let n = a.nrows();
        let eig = a.eigen().unwrap();
        assert_eq!(Vector::rank(&eig.eigenvectors).unwrap(), n);
        for (ev, v) in eig.pairs() {
            assert_near(v.norm(), 1.0, TOL, "unit norm");
            for i in 0..n {
                let av: f64 = (0..n).map(|j| a[(i, j)] * v[j]).sum();
                assert_near(av, ev.re() * v[i], TOL, "A v = lambda v");
            }
        }
    }
}

#[test]
fn rejects_non_square() {
    let a = m(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);
    assert_eq!(
        spectral_decomposition(&a).unwrap_err(),
        LinalgError::NotSquare { rows: 2, cols: 3 }
    );
}
