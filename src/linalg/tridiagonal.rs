//! Skew-symmetric tridiagonalization: Householder and Parlett-Reid sweeps
//!
//! Both reductions bring a skew-symmetric matrix to tridiagonal form with
//! zero diagonal. The Householder path produces an orthogonal/unitary
//! congruence `A = Q @ T @ Q^T`; the Parlett-Reid path produces a pivoted
//! triangular congruence `P @ A @ P^T = L @ T @ L^T`.

use super::decompositions::{Permutation, SkewLtl, SkewTridiagonal};
use super::helpers::validate_skew_symmetric;
use super::householder::LinalgElement;
use crate::dtype::{Complex128, DType};
use crate::error::Result;
use crate::matrix::Matrix;

/// Skew-tridiagonalize by Householder reflections
///
/// Brings a skew-symmetric matrix `A = -A^T` into tridiagonal form T with
/// an orthogonal (real case) or unitary (complex case) matrix Q such that
/// `A = Q @ T @ Q^T`. Note that the congruence uses `Q^T` and *not* the
/// adjoint, also in the complex case.
///
/// The input is copied; Q is only accumulated when `calc_q` is true.
pub fn skew_tridiagonalize(a: &Matrix, calc_q: bool) -> Result<SkewTridiagonal> {
    let mut t = a.clone();
    let q = skew_tridiagonalize_in_place(&mut t, calc_q)?;
    Ok(SkewTridiagonal { t, q })
}

/// In-place variant of [`skew_tridiagonalize`]
///
/// The tridiagonal form replaces the contents of `a`; the accumulated Q is
/// returned when `calc_q` is true.
pub fn skew_tridiagonalize_in_place(a: &mut Matrix, calc_q: bool) -> Result<Option<Matrix>> {
    validate_skew_symmetric(a)?;
    let n = a.nrows();

    let q = match a.dtype() {
        DType::F64 => skew_tridiagonalize_typed::<f64>(a.as_mut_slice(), n, calc_q)
            .map(|q| Matrix::from_slice(&q, n, n)),
        DType::Complex128 => skew_tridiagonalize_typed::<Complex128>(a.as_mut_slice(), n, calc_q)
            .map(|q| Matrix::from_slice(&q, n, n)),
    };
    Ok(q)
}

fn skew_tridiagonalize_typed<T: LinalgElement>(
    a: &mut [T],
    n: usize,
    calc_q: bool,
) -> Option<Vec<T>> {
    let mut q = if calc_q {
        let mut q = vec![T::zero(); n * n];
        for i in 0..n {
            q[i * n + i] = T::one();
        }
        Some(q)
    } else {
        None
    };

    // The trailing 2x2 block is already tridiagonal, so the sweep stops
    // two columns early.
    for i in 0..n.saturating_sub(2) {
        let m = n - i - 1;

        // Reflection eliminating column i below the sub-diagonal
        let col: Vec<T> = (0..m).map(|r| a[(i + 1 + r) * n + i]).collect();
        let refl = T::householder_reflection(&col);

        a[(i + 1) * n + i] = refl.alpha;
        a[i * n + (i + 1)] = -refl.alpha;
        for r in (i + 2)..n {
            a[r * n + i] = T::zero();
            a[i * n + r] = T::zero();
        }

        // Degenerate column: the tail was already zero, nothing to apply
        if refl.tau == 0.0 {
            continue;
        }

        // Rank-2 update of the trailing block:
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

        if let Some(q) = &mut q {
            // Accumulate the reflections in the form P_1 @ P_2 @ ...:
            // Q[:, i+1:] -= outer(tau * Q[:, i+1:] @ v, conj(v))
            for r in 0..n {
                let mut acc = T::zero();
                for c in 0..m {
                    acc = acc + q[r * n + (i + 1 + c)] * refl.v[c];
                }
                let y = acc.scale(refl.tau);
                for c in 0..m {
                    q[r * n + (i + 1 + c)] = q[r * n + (i + 1 + c)] - y * refl.v[c].conj_val();
                }
            }
        }
    }

    q
}

/// Skew-tridiagonalize by pivoted elimination (Parlett-Reid)
///
/// Brings a skew-symmetric matrix `A = -A^T` into tridiagonal form T with
/// a unit lower triangular L and a symmetric permutation P such that
/// `P @ A @ P^T = L @ T @ L^T`. Partial pivoting keeps the multipliers
/// bounded by one in magnitude.
///
/// The input is copied; L and P are only accumulated when `calc_l` /
/// `calc_p` are true.
pub fn skew_ltl(a: &Matrix, calc_l: bool, calc_p: bool) -> Result<SkewLtl> {
    let mut t = a.clone();
    let (l, p) = skew_ltl_in_place(&mut t, calc_l, calc_p)?;
    Ok(SkewLtl { t, l, p })
}

/// In-place variant of [`skew_ltl`]
///
/// The tridiagonal form replaces the contents of `a`; L and P are returned
/// when requested.
pub fn skew_ltl_in_place(
    a: &mut Matrix,
    calc_l: bool,
    calc_p: bool,
) -> Result<(Option<Matrix>, Option<Permutation>)> {
    validate_skew_symmetric(a)?;
    let n = a.nrows();

    let (l, p) = match a.dtype() {
        DType::F64 => {
            let (l, p) = skew_ltl_typed::<f64>(a.as_mut_slice(), n, calc_l, calc_p);
            (l.map(|l| Matrix::from_slice(&l, n, n)), p)
        }
        DType::Complex128 => {
            let (l, p) = skew_ltl_typed::<Complex128>(a.as_mut_slice(), n, calc_l, calc_p);
            (l.map(|l| Matrix::from_slice(&l, n, n)), p)
        }
    };
    Ok((l, p))
}

fn skew_ltl_typed<T: LinalgElement>(
    a: &mut [T],
    n: usize,
    calc_l: bool,
    calc_p: bool,
) -> (Option<Vec<T>>, Option<Permutation>) {
    let mut l = if calc_l {
        let mut l = vec![T::zero(); n * n];
        for i in 0..n {
            l[i * n + i] = T::one();
        }
        Some(l)
    } else {
        None
    };
    let mut p = calc_p.then(|| Permutation::identity(n));

    for k in 0..n.saturating_sub(2) {
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
            // Interchange rows k+1 and kp, then columns k+1 and kp
            for j in k..n {
                a.swap((k + 1) * n + j, kp * n + j);
            }
            for r in k..n {
                a.swap(r * n + (k + 1), r * n + kp);
            }

            if let Some(l) = &mut l {
                // Permute the already-computed part of L accordingly
                for j in 1..(k + 1) {
                    l.swap((k + 1) * n + j, kp * n + j);
                }
            }

            if let Some(p) = &mut p {
                p.swap(k + 1, kp);
            }
        }

        // An exactly-zero pivot means the whole column below the
        // sub-diagonal is zero: it is already eliminated.
        if a[(k + 1) * n + k] == T::zero() {
            continue;
        }

        // Gauss vector
        let pivot = a[(k + 1) * n + k];
        let tau: Vec<T> = ((k + 2)..n).map(|r| a[r * n + k] / pivot).collect();

        for r in (k + 2)..n {
            a[r * n + k] = T::zero();
            a[k * n + r] = T::zero();
        }

        // A[k+2:, k+2:] += outer(tau, A[k+2:, k+1]) - outer(A[k+2:, k+1], tau)
        let col: Vec<T> = ((k + 2)..n).map(|r| a[r * n + (k + 1)]).collect();
        let m = n - k - 2;
        for r in 0..m {
            for c in 0..m {
                let update = tau[r] * col[c] - col[r] * tau[c];
                a[(k + 2 + r) * n + (k + 2 + c)] = a[(k + 2 + r) * n + (k + 2 + c)] + update;
            }
        }

        if let Some(l) = &mut l {
            for (idx, r) in ((k + 2)..n).enumerate() {
                l[r * n + (k + 1)] = tau[idx];
            }
        }
    }

    (l, p)
}
