//! Helper functions for the linear algebra operations
//!
//! Validation utilities shared by every entry point.

use super::householder::LinalgElement;
use crate::dtype::{Complex128, DType};
use crate::error::{Error, Result};
use crate::matrix::Matrix;

/// Absolute tolerance on `max |A + A^T|` for the skew-symmetry check
pub const SKEW_SYMMETRY_TOL: f64 = 1e-14;

/// Validate that the matrix is square with nonzero dimension
pub fn validate_square_matrix(a: &Matrix) -> Result<usize> {
    if !a.is_square() {
        return Err(Error::ShapeMismatch {
            expected: vec![a.nrows(), a.nrows()],
            got: vec![a.nrows(), a.ncols()],
        });
    }
    if a.nrows() == 0 {
        return Err(Error::EmptyMatrix);
    }
    Ok(a.nrows())
}

/// Validate that the matrix is skew-symmetric, `A = -A^T`, within
/// [`SKEW_SYMMETRY_TOL`]
///
/// The transpose is the plain transpose also for complex matrices: the
/// entries themselves are compared, not their conjugates.
pub fn validate_skew_symmetric(a: &Matrix) -> Result<()> {
    let n = validate_square_matrix(a)?;

    let max_deviation = match a.dtype() {
        DType::F64 => max_skew_deviation_typed::<f64>(a.as_slice(), n),
        DType::Complex128 => max_skew_deviation_typed::<Complex128>(a.as_slice(), n),
    };

    if max_deviation > SKEW_SYMMETRY_TOL {
        return Err(Error::NotSkewSymmetric { max_deviation });
    }
    Ok(())
}

/// Largest entry of `|A + A^T|`
fn max_skew_deviation_typed<T: LinalgElement>(a: &[T], n: usize) -> f64 {
    let mut max = 0.0f64;
    for i in 0..n {
        for j in i..n {
            let dev = (a[i * n + j] + a[j * n + i]).abs_val();
            if dev > max {
                max = dev;
            }
        }
    }
    max
}
