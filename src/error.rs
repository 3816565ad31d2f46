//! Error types for skewr

use crate::dtype::DType;
use thiserror::Error;

/// Result type alias using skewr's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in skewr operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Matrix shape does not match what the operation requires
    #[error("Shape mismatch: expected {expected:?}, got {got:?}")]
    ShapeMismatch {
        /// Expected shape
        expected: Vec<usize>,
        /// Actual shape
        got: Vec<usize>,
    },

    /// Matrix has dimension zero
    #[error("Matrix must have nonzero dimension")]
    EmptyMatrix,

    /// Input is not skew-symmetric within tolerance
    #[error("Matrix is not skew-symmetric: max |A + A^T| = {max_deviation:.3e} exceeds tolerance")]
    NotSkewSymmetric {
        /// Largest entry of |A + A^T|
        max_deviation: f64,
    },

    /// Unsupported dtype for an operation
    #[error("Unsupported dtype {dtype:?} for operation '{op}'")]
    UnsupportedDType {
        /// The unsupported dtype
        dtype: DType,
        /// The operation name
        op: &'static str,
    },

    /// DType mismatch between operands
    #[error("DType mismatch: {lhs:?} vs {rhs:?}")]
    DTypeMismatch {
        /// Left-hand side dtype
        lhs: DType,
        /// Right-hand side dtype
        rhs: DType,
    },

    /// Data length does not match the matrix dimensions
    #[error("Data length mismatch: expected {expected} elements, got {got}")]
    InvalidData {
        /// Expected element count (rows * cols)
        expected: usize,
        /// Actual element count
        got: usize,
    },
}
