//! # skewr
//!
//! **Pfaffians and tridiagonal decompositions of skew-symmetric matrices.**
//!
//! skewr computes the Pfaffian of a real or complex skew-symmetric matrix
//! (`A = -A^T`), an invariant whose square equals the determinant and whose
//! sign classifies topological phases in condensed-matter applications.
//!
//! ## Why skewr?
//!
//! - **Skew-aware algorithms**: Parlett-Reid elimination and Householder
//!   tridiagonalization specialized to skew-symmetric structure
//! - **No vendor libraries**: Native implementations, no LAPACK/BLAS wrappers
//! - **Real and complex**: One API over f64 and Complex128 matrices, with
//!   compile-time typed kernels behind a runtime dtype tag
//! - **Cross-checkable**: An independent Schur-decomposition path for real
//!   matrices validates the skew-aware results
//!
//! ## Quick Start
//!
//! ```
//! use skewr::linalg::{PfaffianMethod, pfaffian};
//! use skewr::matrix::Matrix;
//!
//! // [[0, a], [-a, 0]] has Pfaffian a
//! let a = Matrix::from_slice(&[0.0, 2.0, -2.0, 0.0], 2, 2);
//! let pf = pfaffian(&a, PfaffianMethod::ParlettReid).unwrap();
//! assert_eq!(pf.as_complex128().re, 2.0);
//! ```
//!
//! ## Decompositions
//!
//! The reductions behind the Pfaffian are available on their own:
//!
//! ```
//! use skewr::linalg::{skew_ltl, skew_tridiagonalize};
//! use skewr::matrix::Matrix;
//!
//! let a = Matrix::from_slice(
//!     &[0.0, 1.0, 2.0, -1.0, 0.0, 3.0, -2.0, -3.0, 0.0],
//!     3,
//!     3,
//! );
//!
//! // A = Q T Q^T with tridiagonal T
//! let tri = skew_tridiagonalize(&a, true).unwrap();
//! assert!(tri.q.is_some());
//!
//! // P A P^T = L T L^T with unit lower triangular L
//! let ltl = skew_ltl(&a, true, true).unwrap();
//! assert!(ltl.l.is_some() && ltl.p.is_some());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod dtype;
pub mod error;
pub mod linalg;
pub mod matrix;

/// Convenient re-exports of the most commonly used items
pub mod prelude {
    pub use crate::dtype::{Complex128, DType, Scalar};
    pub use crate::error::{Error, Result};
    pub use crate::linalg::{
        PfaffianMethod, pfaffian, pfaffian_householder, pfaffian_parlett_reid, pfaffian_schur,
        skew_ltl, skew_tridiagonalize,
    };
    pub use crate::matrix::Matrix;
}
