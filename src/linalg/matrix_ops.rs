//! Basic dense matrix operations (matmul, transpose, determinant)
//!
//! Small building blocks used by the Schur fallback and by reconstruction
//! checks. These make no assumption of skew-symmetry.

use super::householder::LinalgElement;
use crate::dtype::{Complex128, DType, Scalar};
use crate::error::{Error, Result};
use crate::matrix::Matrix;

/// Dense matrix product `A @ B`
///
/// Operand dtypes must match and `A.ncols()` must equal `B.nrows()`.
pub fn matmul(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    if a.dtype() != b.dtype() {
        return Err(Error::DTypeMismatch {
            lhs: a.dtype(),
            rhs: b.dtype(),
        });
    }
    if a.ncols() != b.nrows() {
        return Err(Error::ShapeMismatch {
            expected: vec![a.ncols(), b.ncols()],
            got: vec![b.nrows(), b.ncols()],
        });
    }

    let (m, k, n) = (a.nrows(), a.ncols(), b.ncols());
    let out = match a.dtype() {
        DType::F64 => {
            let c = matmul_typed::<f64>(a.as_slice(), b.as_slice(), m, k, n);
            Matrix::from_slice(&c, m, n)
        }
        DType::Complex128 => {
            let c = matmul_typed::<Complex128>(a.as_slice(), b.as_slice(), m, k, n);
            Matrix::from_slice(&c, m, n)
        }
    };
    Ok(out)
}

fn matmul_typed<T: LinalgElement>(a: &[T], b: &[T], m: usize, k: usize, n: usize) -> Vec<T> {
    let mut c = vec![T::zero(); m * n];
    for i in 0..m {
        for l in 0..k {
            let aik = a[i * k + l];
            if aik == T::zero() {
                continue;
            }
            for j in 0..n {
                c[i * n + j] = c[i * n + j] + aik * b[l * n + j];
            }
        }
    }
    c
}

/// Plain transpose `A^T` (entries are not conjugated)
pub fn transpose(a: &Matrix) -> Matrix {
    let (m, n) = (a.nrows(), a.ncols());
    match a.dtype() {
        DType::F64 => Matrix::from_slice(&transpose_typed::<f64>(a.as_slice(), m, n), n, m),
        DType::Complex128 => {
            Matrix::from_slice(&transpose_typed::<Complex128>(a.as_slice(), m, n), n, m)
        }
    }
}

fn transpose_typed<T: LinalgElement>(a: &[T], m: usize, n: usize) -> Vec<T> {
    let mut t = vec![T::zero(); n * m];
    for i in 0..m {
        for j in 0..n {
            t[j * m + i] = a[i * n + j];
        }
    }
    t
}

/// Conjugate transpose `A^H`
///
/// For real matrices this coincides with [`transpose`].
pub fn conjugate_transpose(a: &Matrix) -> Matrix {
    let (m, n) = (a.nrows(), a.ncols());
    match a.dtype() {
        DType::F64 => Matrix::from_slice(&adjoint_typed::<f64>(a.as_slice(), m, n), n, m),
        DType::Complex128 => {
            Matrix::from_slice(&adjoint_typed::<Complex128>(a.as_slice(), m, n), n, m)
        }
    }
}

fn adjoint_typed<T: LinalgElement>(a: &[T], m: usize, n: usize) -> Vec<T> {
    let mut t = vec![T::zero(); n * m];
    for i in 0..m {
        for j in 0..n {
            t[j * m + i] = a[i * n + j].conj_val();
        }
    }
    t
}

/// Determinant via LU decomposition with partial pivoting
///
/// An exactly-zero pivot column short-circuits to a zero determinant
/// rather than an error, matching the degenerate-pivot convention of the
/// Pfaffian routines.
pub fn determinant(a: &Matrix) -> Result<Scalar> {
    let n = super::helpers::validate_square_matrix(a)?;

    let value = match a.dtype() {
        DType::F64 => Scalar::F64(determinant_typed::<f64>(&mut a.to_vec(), n)),
        DType::Complex128 => {
            Scalar::Complex128(determinant_typed::<Complex128>(&mut a.to_vec(), n))
        }
    };
    Ok(value)
}

fn determinant_typed<T: LinalgElement>(lu: &mut [T], n: usize) -> T {
    let mut det = T::one();

    for col in 0..n {
        // Pivot: largest magnitude in column col, rows col..n
        let mut pivot_row = col;
        let mut max = lu[col * n + col].abs_val();
        for row in (col + 1)..n {
            let mag = lu[row * n + col].abs_val();
            if mag > max {
                max = mag;
                pivot_row = row;
            }
        }

        if pivot_row != col {
            for j in 0..n {
                lu.swap(col * n + j, pivot_row * n + j);
            }
            det = -det;
        }

        let pivot = lu[col * n + col];
        if pivot == T::zero() {
            return T::zero();
        }
        det = det * pivot;

        // Eliminate below the pivot
        for row in (col + 1)..n {
            let multiplier = lu[row * n + col] / pivot;
            if multiplier == T::zero() {
                continue;
            }
            for j in (col + 1)..n {
                let update = multiplier * lu[col * n + j];
                lu[row * n + j] = lu[row * n + j] - update;
            }
        }
    }

    det
}
