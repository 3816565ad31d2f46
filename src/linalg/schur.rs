//! Real Schur decomposition and the Schur-based Pfaffian fallback
//!
//! The decomposition reduces to upper Hessenberg form with Householder
//! reflections, then applies QR iteration with a Wilkinson shift to reach
//! the real Schur form `A = Z @ T @ Z^T`.
//!
//! [`pfaffian_schur`] deliberately ignores the skew-symmetric structure
//! and leans on this general-purpose decomposition; it exists as an
//! independent cross-check of the skew-aware Pfaffian algorithms. For a
//! skew-symmetric matrix the Hessenberg form is itself skew, so every QR
//! iterate keeps A = Z @ T @ Z^T with tridiagonal T and the even-offset
//! super-diagonal product stays exact even before the iteration settles
//! into isolated 2x2 blocks.

use super::decompositions::SchurDecomposition;
use super::helpers::{validate_skew_symmetric, validate_square_matrix};
use super::matrix_ops::determinant;
use crate::dtype::{DType, Scalar};
use crate::error::{Error, Result};
use crate::matrix::Matrix;

/// Real Schur decomposition `A = Z @ T @ Z^T`
///
/// Z is orthogonal and T upper quasi-triangular: real eigenvalues on the
/// diagonal in 1×1 blocks, complex conjugate pairs in 2×2 blocks.
///
/// Only real matrices are supported; complex input is rejected with
/// [`Error::UnsupportedDType`].
pub fn schur_decompose(a: &Matrix) -> Result<SchurDecomposition> {
    let mut t = a.clone();
    let z = schur_decompose_in_place(&mut t)?;
    Ok(SchurDecomposition { z, t })
}

/// In-place variant of [`schur_decompose`]
///
/// The Schur form T replaces the contents of `a`; Z is returned.
pub fn schur_decompose_in_place(a: &mut Matrix) -> Result<Matrix> {
    let n = validate_square_matrix(a)?;
    if a.dtype() != DType::F64 {
        return Err(Error::UnsupportedDType {
            dtype: a.dtype(),
            op: "schur_decompose",
        });
    }

    let mut z = Matrix::identity(DType::F64, n);
    if n > 1 {
        schur_decompose_typed(a.as_mut_slice(), z.as_mut_slice(), n);
    }
    Ok(z)
}

fn schur_decompose_typed(t: &mut [f64], z: &mut [f64], n: usize) {
    // Step 1: reduce to upper Hessenberg form, accumulating into Z
    hessenberg_reduction(t, z, n);

    // Step 2: QR iteration until the subdiagonal splits into 1x1 and 2x2
    // blocks, capped at 30 sweeps per dimension
    let max_iter = 30 * n;
    let eps = f64::EPSILON;

    for _iter in 0..max_iter {
        let mut converged = true;
        for i in 0..(n - 1) {
            if subdiagonal_is_negligible(t, n, i, eps) {
                continue;
            }
            // A 2x2 block with complex eigenvalues is a converged block of
            // the real Schur form once it is decoupled from its neighbors
            let decoupled_above = i == 0 || subdiagonal_is_negligible(t, n, i - 1, eps);
            let decoupled_below = i + 1 >= n - 1 || subdiagonal_is_negligible(t, n, i + 1, eps);
            if decoupled_above && decoupled_below && block_has_complex_pair(t, n, i) {
                continue;
            }
            converged = false;
            break;
        }

        if converged {
            break;
        }

        qr_iteration_step(t, z, n);
    }

    // Clean up negligible subdiagonal entries
    for i in 0..(n - 1) {
        if subdiagonal_is_negligible(t, n, i, eps) {
            t[(i + 1) * n + i] = 0.0;
        }
    }

    // Clear the strictly lower triangular part below the first subdiagonal
    for i in 2..n {
        for j in 0..(i - 1) {
            t[i * n + j] = 0.0;
        }
    }
}

fn subdiagonal_is_negligible(t: &[f64], n: usize, i: usize, eps: f64) -> bool {
    let h_ii = t[i * n + i].abs();
    let h_jj = t[(i + 1) * n + (i + 1)].abs();
    let threshold = eps * (h_ii + h_jj).max(1.0);
    t[(i + 1) * n + i].abs() <= threshold
}

/// Returns true if the 2x2 block starting at diagonal position `i` has a
/// complex conjugate eigenvalue pair
fn block_has_complex_pair(t: &[f64], n: usize, i: usize) -> bool {
    let a = t[i * n + i];
    let b = t[i * n + (i + 1)];
    let c = t[(i + 1) * n + i];
    let d = t[(i + 1) * n + (i + 1)];
    let trace = a + d;
    let det = a * d - b * c;
    trace * trace - 4.0 * det < 0.0
}

/// Reduce the matrix to upper Hessenberg form by Householder reflections,
/// accumulating the transformations into `q`
fn hessenberg_reduction(h: &mut [f64], q: &mut [f64], n: usize) {
    for k in 0..n.saturating_sub(2) {
        // Householder vector for column k, rows k+1..n
        let mut v: Vec<f64> = ((k + 1)..n).map(|i| h[i * n + k]).collect();

        let tail_sq: f64 = v[1..].iter().map(|&e| e * e).sum();
        if tail_sq == 0.0 {
            // Column already in Hessenberg form
            continue;
        }

        let norm = (v[0] * v[0] + tail_sq).sqrt();
        let alpha = if v[0] >= 0.0 { -norm } else { norm };
        v[0] -= alpha;

        let v_norm = v.iter().map(|&e| e * e).sum::<f64>().sqrt();
        for e in &mut v {
            *e /= v_norm;
        }

        // H[k+1:, :] -= 2 * v @ (v^T @ H[k+1:, :])
        for j in 0..n {
            let mut dot = 0.0;
            for (i, &vi) in v.iter().enumerate() {
                dot += vi * h[(k + 1 + i) * n + j];
            }
            for (i, &vi) in v.iter().enumerate() {
                h[(k + 1 + i) * n + j] -= 2.0 * vi * dot;
            }
        }

        // H[:, k+1:] -= 2 * (H[:, k+1:] @ v) @ v^T
        for i in 0..n {
            let mut dot = 0.0;
            for (j, &vj) in v.iter().enumerate() {
                dot += h[i * n + (k + 1 + j)] * vj;
            }
            for (j, &vj) in v.iter().enumerate() {
                h[i * n + (k + 1 + j)] -= 2.0 * dot * vj;
            }
        }

        // Q[:, k+1:] -= 2 * (Q[:, k+1:] @ v) @ v^T
        for i in 0..n {
            let mut dot = 0.0;
            for (j, &vj) in v.iter().enumerate() {
                dot += q[i * n + (k + 1 + j)] * vj;
            }
            for (j, &vj) in v.iter().enumerate() {
                q[i * n + (k + 1 + j)] -= 2.0 * dot * vj;
            }
        }
    }
}

/// One QR iteration step with an implicit Wilkinson shift
fn qr_iteration_step(h: &mut [f64], z: &mut [f64], n: usize) {
    // Wilkinson shift: the eigenvalue of the bottom 2x2 block closest to
    // the trailing entry, or the mean of the block when the pair is complex
    let a = h[(n - 2) * n + (n - 2)];
    let b = h[(n - 2) * n + (n - 1)];
    let c = h[(n - 1) * n + (n - 2)];
    let d = h[(n - 1) * n + (n - 1)];

    let trace = a + d;
    let det = a * d - b * c;
    let disc = trace * trace - 4.0 * det;

    let shift = if disc >= 0.0 {
        let sqrt_disc = disc.sqrt();
        let lambda1 = (trace + sqrt_disc) / 2.0;
        let lambda2 = (trace - sqrt_disc) / 2.0;
        if (lambda1 - d).abs() < (lambda2 - d).abs() {
            lambda1
        } else {
            lambda2
        }
    } else {
        trace / 2.0
    };

    for i in 0..n {
        h[i * n + i] -= shift;
    }

    // QR factorization by Givens rotations, applied as a similarity
    for i in 0..(n - 1) {
        let x = h[i * n + i];
        let y = h[(i + 1) * n + i];

        if y == 0.0 {
            continue;
        }

        let r = (x * x + y * y).sqrt();
        let cs = x / r;
        let sn = -y / r;

        // Rows i and i+1 from the left
        for j in 0..n {
            let t1 = h[i * n + j];
            let t2 = h[(i + 1) * n + j];
            h[i * n + j] = cs * t1 - sn * t2;
            h[(i + 1) * n + j] = sn * t1 + cs * t2;
        }

        // Columns i and i+1 from the right
        for k in 0..n {
            let t1 = h[k * n + i];
            let t2 = h[k * n + (i + 1)];
            h[k * n + i] = cs * t1 - sn * t2;
            h[k * n + (i + 1)] = sn * t1 + cs * t2;
        }

        // Accumulate into Z
        for k in 0..n {
            let t1 = z[k * n + i];
            let t2 = z[k * n + (i + 1)];
            z[k * n + i] = cs * t1 - sn * t2;
            z[k * n + (i + 1)] = sn * t1 + cs * t2;
        }
    }

    for i in 0..n {
        h[i * n + i] += shift;
    }
}

/// Compute the Pfaffian of a real skew-symmetric matrix using the Schur
/// decomposition
///
/// Reads the super-diagonal of the real Schur form at even offsets and
/// multiplies their product by `det(Z)`. This path does not exploit the
/// skew-symmetry of the input and is provided as an independent,
/// slightly slower cross-check of [`super::pfaffian::pfaffian`].
///
/// Complex input is rejected with [`Error::UnsupportedDType`].
pub fn pfaffian_schur(a: &Matrix) -> Result<Scalar> {
    let mut work = a.clone();
    pfaffian_schur_in_place(&mut work)
}

/// In-place variant of [`pfaffian_schur`]
pub fn pfaffian_schur_in_place(a: &mut Matrix) -> Result<Scalar> {
    if a.dtype() != DType::F64 {
        return Err(Error::UnsupportedDType {
            dtype: a.dtype(),
            op: "pfaffian_schur",
        });
    }
    validate_skew_symmetric(a)?;
    let n = a.nrows();

    if n % 2 == 1 {
        return Ok(Scalar::zero(a.dtype()));
    }

    let z = schur_decompose_in_place(a)?;

    let t = a.as_slice::<f64>();
    let mut value = 1.0;
    let mut k = 0;
    while k + 1 < n {
        value *= t[k * n + (k + 1)];
        k += 2;
    }

    let Scalar::F64(det_z) = determinant(&z)? else {
        unreachable!("Z inherits the real dtype of the input");
    };
    Ok(Scalar::F64(value * det_z))
}
