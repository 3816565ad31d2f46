//! Skew-symmetric linear algebra: tridiagonal reductions and Pfaffians
//!
//! Every entry point in this module shares the same contract: the input
//! must be square with nonzero dimension and skew-symmetric within
//! [`SKEW_SYMMETRY_TOL`] (`A = -A^T`, plain transpose also for complex
//! matrices). Precondition violations are reported before any numerical
//! work begins; degenerate pivots and odd dimension are defined outcomes
//! (a zero Pfaffian), not errors.
//!
//! # Operations
//!
//! - [`skew_tridiagonalize`]: Householder reduction, `A = Q @ T @ Q^T`
//! - [`skew_ltl`]: pivoted Parlett-Reid reduction, `P @ A @ P^T = L @ T @ L^T`
//! - [`pfaffian`]: Pfaffian via either reduction, fused
//! - [`pfaffian_schur`]: real-only cross-check via the general Schur form
//! - [`schur_decompose`], [`determinant`], [`matmul`], [`transpose`]:
//!   general dense helpers backing the paths above
//!
//! Each operation comes in a copying and an `_in_place` variant; the
//! in-place variants consume the caller's buffer instead of cloning.
//!
//! # Dispatch
//!
//! Entry points inspect the matrix dtype once and dispatch into kernels
//! that are generic over [`LinalgElement`]; no type inspection happens
//! inside the reduction loops.

pub mod decompositions;
pub mod helpers;
pub mod householder;
pub mod matrix_ops;
pub mod pfaffian;
pub mod schur;
pub mod tridiagonal;


pub use decompositions::{Permutation, SchurDecomposition, SkewLtl, SkewTridiagonal};
pub use helpers::{SKEW_SYMMETRY_TOL, validate_skew_symmetric, validate_square_matrix};
pub use householder::{HouseholderReflection, LinalgElement};
pub use matrix_ops::{conjugate_transpose, determinant, matmul, transpose};
pub use pfaffian::{
    PfaffianMethod, pfaffian, pfaffian_householder, pfaffian_householder_in_place,
    pfaffian_in_place, pfaffian_parlett_reid, pfaffian_parlett_reid_in_place,
};
pub use schur::{
    pfaffian_schur, pfaffian_schur_in_place, schur_decompose, schur_decompose_in_place,
};
pub use tridiagonal::{
    skew_ltl, skew_ltl_in_place, skew_tridiagonalize, skew_tridiagonalize_in_place,
};
