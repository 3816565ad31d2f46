//! Pfaffian computation by fused tridiagonalization sweeps
//!
//! The Pfaffian of a skew-symmetric matrix satisfies `Pf(A)^2 = det(A)`
//! and vanishes identically for odd dimension. Rather than forming the
//! tridiagonal factors explicitly, both evaluation strategies fuse the
//! reduction with running sign/scale bookkeeping and return the scalar
//! directly:
//!
//! - [`pfaffian_parlett_reid`]: pivoted elimination, processing rows and
//!   columns two at a time. The default method.
//! - [`pfaffian_householder`]: Householder reflection sweep.
//!
//! A third, real-only strategy that leans on the general Schur
//! decomposition lives in [`super::schur::pfaffian_schur`].

use super::helpers::validate_skew_symmetric;
use super::householder::LinalgElement;
use crate::dtype::{Complex128, DType, Scalar};
use crate::error::Result;
use crate::matrix::Matrix;

/// Strategy used by [`pfaffian`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PfaffianMethod {
    /// Pivoted Parlett-Reid elimination (default choice)
    ParlettReid,
    /// Householder tridiagonalization
    Householder,
}

/// Compute the Pfaffian of a skew-symmetric matrix
///
/// Validates squareness and skew-symmetry, then delegates to the selected
/// strategy. The result carries the dtype of the input: real matrices
/// produce [`Scalar::F64`], complex matrices [`Scalar::Complex128`].
///
/// # Example
///
/// ```
/// use skewr::linalg::{PfaffianMethod, pfaffian};
/// use skewr::matrix::Matrix;
///
/// let a = Matrix::from_slice(&[0.0, 3.0, -3.0, 0.0], 2, 2);
/// let pf = pfaffian(&a, PfaffianMethod::ParlettReid).unwrap();
/// assert_eq!(pf.as_complex128().re, 3.0);
/// ```
pub fn pfaffian(a: &Matrix, method: PfaffianMethod) -> Result<Scalar> {
    let mut work = a.clone();
    pfaffian_in_place(&mut work, method)
}

/// In-place variant of [`pfaffian`]
///
/// The contents of `a` are destroyed by the reduction sweep.
pub fn pfaffian_in_place(a: &mut Matrix, method: PfaffianMethod) -> Result<Scalar> {
    match method {
        PfaffianMethod::ParlettReid => pfaffian_parlett_reid_in_place(a),
        PfaffianMethod::Householder => pfaffian_householder_in_place(a),
    }
}

/// Compute the Pfaffian using the Parlett-Reid algorithm
pub fn pfaffian_parlett_reid(a: &Matrix) -> Result<Scalar> {
    let mut work = a.clone();
    pfaffian_parlett_reid_in_place(&mut work)
}

/// In-place variant of [`pfaffian_parlett_reid`]
pub fn pfaffian_parlett_reid_in_place(a: &mut Matrix) -> Result<Scalar> {
    validate_skew_symmetric(a)?;
    let n = a.nrows();

    if n % 2 == 1 {
        return Ok(Scalar::zero(a.dtype()));
    }

    let value = match a.dtype() {
        DType::F64 => Scalar::F64(pfaffian_parlett_reid_typed::<f64>(a.as_mut_slice(), n)),
        DType::Complex128 => Scalar::Complex128(pfaffian_parlett_reid_typed::<Complex128>(
            a.as_mut_slice(),
            n,
        )),
    };
    Ok(value)
}

/// Fused Parlett-Reid sweep
///
/// Tridiagonalizing a skew-symmetric matrix naturally produces paired 2x2
/// blocks, so the elimination steps two rows/columns at a time. Every row
/// interchange contributes a factor -1 (the sign of the permutation), and
/// each eliminated pair contributes its super-diagonal pivot.
fn pfaffian_parlett_reid_typed<T: LinalgElement>(a: &mut [T], n: usize) -> T {
    let mut value = T::one();

    let mut k = 0;
    while k + 1 < n {
        // Find the largest entry in A[k+1:, k] and permute it to A[k+1, k]
        let mut kp = k + 1;
        let mut max = a[(k + 1) * n + k].abs_val();
        for r in (k + 2)..n {
            let mag = a[r * n + k].abs_val();
            if mag > max {
                max = mag;
                kp = r;
            }
        }

        if kp != k + 1 {
            for j in k..n {
                a.swap((k + 1) * n + j, kp * n + j);
            }
            for r in k..n {
                a.swap(r * n + (k + 1), r * n + kp);
            }
            // Every interchange flips the sign of det(P)
            value = -value;
        }

        // A zero pivot on the sub-diagonal makes the Pfaffian exactly zero
        if a[(k + 1) * n + k] == T::zero() {
            return T::zero();
        }

        let pivot = a[k * n + (k + 1)];
        value = value * pivot;

        if k + 2 < n {
            // Gauss vector from row k, then the skew rank-2 update
            let tau: Vec<T> = ((k + 2)..n).map(|c| a[k * n + c] / pivot).collect();
            let col: Vec<T> = ((k + 2)..n).map(|r| a[r * n + (k + 1)]).collect();
            let m = n - k - 2;
            for r in 0..m {
                for c in 0..m {
                    let update = tau[r] * col[c] - col[r] * tau[c];
                    a[(k + 2 + r) * n + (k + 2 + c)] = a[(k + 2 + r) * n + (k + 2 + c)] + update;
                }
            }
        }

        k += 2;
    }

    value
}

/// Compute the Pfaffian using Householder tridiagonalization
pub fn pfaffian_householder(a: &Matrix) -> Result<Scalar> {
    let mut work = a.clone();
    pfaffian_householder_in_place(&mut work)
}

/// In-place variant of [`pfaffian_householder`]
pub fn pfaffian_householder_in_place(a: &mut Matrix) -> Result<Scalar> {
    validate_skew_symmetric(a)?;
    let n = a.nrows();

    if n % 2 == 1 {
        return Ok(Scalar::zero(a.dtype()));
    }

    let value = match a.dtype() {
        DType::F64 => Scalar::F64(pfaffian_householder_typed::<f64>(a.as_mut_slice(), n)),
        DType::Complex128 => Scalar::Complex128(pfaffian_householder_typed::<Complex128>(
            a.as_mut_slice(),
            n,
        )),
    };
    Ok(value)
}

/// Fused Householder sweep
///
/// Each reflection contributes `1 - tau` (its determinant) and, on even
/// steps, the eliminated sub-diagonal entry `-alpha`; the final factor is
/// the last super-diagonal entry of the reduced matrix.
fn pfaffian_householder_typed<T: LinalgElement>(a: &mut [T], n: usize) -> T {
    let mut value = T::one();

    for i in 0..n - 2 {
        let m = n - i - 1;

        let col: Vec<T> = (0..m).map(|r| a[(i + 1 + r) * n + i]).collect();
        let refl = T::householder_reflection(&col);

        a[(i + 1) * n + i] = refl.alpha;
        a[i * n + (i + 1)] = -refl.alpha;
        for r in (i + 2)..n {
            a[r * n + i] = T::zero();
            a[i * n + r] = T::zero();
        }

        if refl.tau != 0.0 {
            // w = tau * A[i+1:, i+1:] @ conj(v)
            // A[i+1:, i+1:] += outer(v, w) - outer(w, v)
            let mut w = vec![T::zero(); m];
            for r in 0..m {
                let mut acc = T::zero();
                for c in 0..m {
                    acc = acc + a[(i + 1 + r) * n + (i + 1 + c)] * refl.v[c].conj_val();
                }
                w[r] = acc.scale(refl.tau);
            }
            for r in 0..m {
                for c in 0..m {
                    let update = refl.v[r] * w[c] - w[r] * refl.v[c];
                    a[(i + 1 + r) * n + (i + 1 + c)] = a[(i + 1 + r) * n + (i + 1 + c)] + update;
                }
            }

            value = value.scale(1.0 - refl.tau);
        }
        if i % 2 == 0 {
            value = value * (-refl.alpha);
        }
    }

    value * a[(n - 2) * n + (n - 1)]
}
