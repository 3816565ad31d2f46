//! Common test utilities
#![allow(dead_code)]

use skewr::dtype::{Complex128, Scalar};
use skewr::matrix::Matrix;

/// Assert two f64 slices are close within tolerance
///
/// Uses the formula: |a - b| <= atol + rtol * |b|
pub fn assert_allclose_f64(a: &[f64], b: &[f64], rtol: f64, atol: f64, msg: &str) {
    assert_eq!(a.len(), b.len(), "{}: length mismatch", msg);
    for (i, (x, y)) in a.iter().zip(b.iter()).enumerate() {
        let diff = (x - y).abs();
        let tol = atol + rtol * y.abs();
        assert!(
            diff <= tol,
            "{}: element {} differs: {} vs {} (diff={:.2e}, tol={:.2e})",
            msg,
            i,
            x,
            y,
            diff,
            tol
        );
    }
}

/// Assert two Complex128 slices are close within tolerance
pub fn assert_allclose_c128(a: &[Complex128], b: &[Complex128], rtol: f64, atol: f64, msg: &str) {
    assert_eq!(a.len(), b.len(), "{}: length mismatch", msg);
    for (i, (x, y)) in a.iter().zip(b.iter()).enumerate() {
        let diff = (*x - *y).magnitude();
        let tol = atol + rtol * y.magnitude();
        assert!(
            diff <= tol,
            "{}: element {} differs: {} vs {} (diff={:.2e}, tol={:.2e})",
            msg,
            i,
            x,
            y,
            diff,
            tol
        );
    }
}

/// Assert two matrices of matching dtype are elementwise close
pub fn assert_matrices_close(a: &Matrix, b: &Matrix, rtol: f64, atol: f64, msg: &str) {
    assert_eq!(a.dtype(), b.dtype(), "{}: dtype mismatch", msg);
    assert_eq!(a.shape(), b.shape(), "{}: shape mismatch", msg);
    if a.dtype().is_complex() {
        assert_allclose_c128(a.as_slice(), b.as_slice(), rtol, atol, msg);
    } else {
        assert_allclose_f64(a.as_slice(), b.as_slice(), rtol, atol, msg);
    }
}

/// Assert two scalars are close within tolerance
pub fn assert_scalar_close(a: Scalar, b: Scalar, rtol: f64, atol: f64, msg: &str) {
    let diff = (a.as_complex128() - b.as_complex128()).magnitude();
    let tol = atol + rtol * b.abs();
    assert!(
        diff <= tol,
        "{}: {} vs {} (diff={:.2e}, tol={:.2e})",
        msg,
        a,
        b,
        diff,
        tol
    );
}

/// Deterministic pseudo-random stream in [-1, 1]
pub struct TestRng {
    state: u64,
}

impl TestRng {
    pub fn new(seed: u64) -> Self {
        Self {
            state: seed.wrapping_mul(0x9E37_79B9_7F4A_7C15).wrapping_add(1),
        }
    }

    pub fn next_f64(&mut self) -> f64 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        ((self.state >> 11) as f64 / (1u64 << 53) as f64) * 2.0 - 1.0
    }
}

/// Random skew-symmetric f64 matrix: exact mirror of the upper triangle
pub fn random_skew_f64(n: usize, seed: u64) -> Matrix {
    let mut rng = TestRng::new(seed);
    let mut data = vec![0.0f64; n * n];
    for i in 0..n {
        for j in (i + 1)..n {
            let v = rng.next_f64();
            data[i * n + j] = v;
            data[j * n + i] = -v;
        }
    }
    Matrix::from_slice(&data, n, n)
}

/// Random skew-symmetric Complex128 matrix
pub fn random_skew_c128(n: usize, seed: u64) -> Matrix {
    let mut rng = TestRng::new(seed);
    let mut data = vec![Complex128::ZERO; n * n];
    for i in 0..n {
        for j in (i + 1)..n {
            let z = Complex128::new(rng.next_f64(), rng.next_f64());
            data[i * n + j] = z;
            data[j * n + i] = -z;
        }
    }
    Matrix::from_slice(&data, n, n)
}
