//! Decomposition result types for the skew-symmetric reductions
//!
//! This module contains the result structures returned by the matrix
//! decompositions (Householder tridiagonalization, Parlett-Reid LTL,
//! Schur), along with the [`Permutation`] type produced by the pivoted
//! elimination.

use crate::dtype::{Complex128, DType, Element};
use crate::error::{Error, Result};
use crate::matrix::Matrix;

/// Householder skew-tridiagonalization result: A = Q @ T @ Q^T
///
/// T is tridiagonal with zero diagonal and `T[i][i+1] = -T[i+1][i]`;
/// Q is orthogonal for real input and unitary for complex input. The
/// congruence uses the plain transpose `Q^T`, not the adjoint, also in
/// the complex case.
pub struct SkewTridiagonal {
    /// Tridiagonal form T [n, n]
    pub t: Matrix,

    /// Accumulated transform Q [n, n], present when requested
    pub q: Option<Matrix>,
}

/// Parlett-Reid skew-tridiagonalization result: P @ A @ P^T = L @ T @ L^T
///
/// T is tridiagonal with zero diagonal, L is unit lower triangular, and
/// P is the symmetric row/column permutation chosen by partial pivoting.
pub struct SkewLtl {
    /// Tridiagonal form T [n, n]
    pub t: Matrix,

    /// Unit lower triangular factor L [n, n], present when requested
    pub l: Option<Matrix>,

    /// Symmetric permutation P, present when requested
    pub p: Option<Permutation>,
}

/// Schur decomposition result: A = Z @ T @ Z^T
///
/// For a real square matrix A, the Schur decomposition factors A into an
/// orthogonal Z and an upper quasi-triangular T (real Schur form): real
/// eigenvalues appear in 1×1 blocks and complex conjugate pairs in 2×2
/// blocks on the diagonal. For skew-symmetric input every eigenvalue is
/// purely imaginary, so T consists entirely of 2×2 blocks of the form
/// `[[0, b], [-b, 0]]`.
pub struct SchurDecomposition {
    /// Orthogonal transformation matrix Z [n, n]
    pub z: Matrix,

    /// Upper quasi-triangular Schur form T [n, n]
    pub t: Matrix,
}

/// A permutation of `0..n`, accumulated as a sequence of transpositions
///
/// Row `i` of the corresponding permutation matrix P has its single 1 in
/// column `indices[i]`, so `P @ A @ P^T` is the matrix with entries
/// `A[indices[i]][indices[j]]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Permutation {
    indices: Vec<usize>,
    num_swaps: usize,
}

impl Permutation {
    /// The identity permutation of `0..n`
    pub fn identity(n: usize) -> Self {
        Self {
            indices: (0..n).collect(),
            num_swaps: 0,
        }
    }

    /// Exchange positions `i` and `j`, recording the transposition
    pub fn swap(&mut self, i: usize, j: usize) {
        if i != j {
            self.indices.swap(i, j);
            self.num_swaps += 1;
        }
    }

    /// The permuted index vector
    #[inline]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Number of elements
    #[inline]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Returns true for the empty permutation
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Sign of the permutation: +1.0 for even parity, -1.0 for odd
    #[inline]
    pub fn sign(&self) -> f64 {
        if self.num_swaps % 2 == 0 { 1.0 } else { -1.0 }
    }

    /// Expand to the dense permutation matrix P of the given dtype
    pub fn to_matrix(&self, dtype: DType) -> Matrix {
        let n = self.indices.len();
        let mut p = Matrix::zeros(dtype, n, n);
        match dtype {
            DType::F64 => fill_permutation::<f64>(p.as_mut_slice(), &self.indices),
            DType::Complex128 => fill_permutation::<Complex128>(p.as_mut_slice(), &self.indices),
        }
        p
    }

    /// Apply symmetrically to a square matrix: returns `P @ A @ P^T`, the
    /// matrix with entries `A[indices[i]][indices[j]]`
    pub fn apply_symmetric(&self, a: &Matrix) -> Result<Matrix> {
        let n = self.indices.len();
        if a.nrows() != n || a.ncols() != n {
            return Err(Error::ShapeMismatch {
                expected: vec![n, n],
                got: vec![a.nrows(), a.ncols()],
            });
        }

        let out = match a.dtype() {
            DType::F64 => Matrix::from_slice(
                &permute_symmetric_typed::<f64>(a.as_slice(), &self.indices),
                n,
                n,
            ),
            DType::Complex128 => Matrix::from_slice(
                &permute_symmetric_typed::<Complex128>(a.as_slice(), &self.indices),
                n,
                n,
            ),
        };
        Ok(out)
    }
}

fn permute_symmetric_typed<T: Element>(a: &[T], indices: &[usize]) -> Vec<T> {
    let n = indices.len();
    let mut out = vec![T::zero(); n * n];
    for i in 0..n {
        for j in 0..n {
            out[i * n + j] = a[indices[i] * n + indices[j]];
        }
    }
    out
}

fn fill_permutation<T: Element>(p: &mut [T], indices: &[usize]) {
    let n = indices.len();
    for (i, &j) in indices.iter().enumerate() {
        p[i * n + j] = T::one();
    }
}
