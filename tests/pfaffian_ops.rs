//! Integration tests for the Pfaffian entry points
//!
//! Tests verify:
//! - Closed forms: 2x2 and block-diagonal 4x4 matrices
//! - Pf(A)^2 ≈ det(A) for real and complex inputs
//! - Agreement between the Parlett-Reid, Householder, and Schur methods
//! - Permutation behavior: Pf(P A P^T) = sign(P) * Pf(A)
//! - Defined zero outcomes: odd dimension, zero matrix, degenerate pivot
//! - Precondition violations are rejected before any numerical work

use skewr::dtype::{Complex128, DType, Scalar};
use skewr::error::Error;
use skewr::linalg::{
    Permutation, PfaffianMethod, determinant, pfaffian, pfaffian_householder,
    pfaffian_householder_in_place, pfaffian_in_place, pfaffian_parlett_reid,
    pfaffian_parlett_reid_in_place, pfaffian_schur, pfaffian_schur_in_place,
};
use skewr::matrix::Matrix;

mod common;
use common::{assert_scalar_close, random_skew_c128, random_skew_f64};

// ============================================================================
// Closed forms
// ============================================================================

#[test]
fn test_pfaffian_2x2_closed_form() {
    for &a in &[1.0, -2.5, 1e-8, 737.0] {
        let m = Matrix::from_slice(&[0.0, a, -a, 0.0], 2, 2);
        assert_eq!(
            pfaffian(&m, PfaffianMethod::ParlettReid).unwrap(),
            Scalar::F64(a)
        );
        assert_eq!(
            pfaffian(&m, PfaffianMethod::Householder).unwrap(),
            Scalar::F64(a)
        );
    }
}

#[test]
fn test_pfaffian_4x4_block_diagonal() {
    let (a, b) = (3.0, -7.0);
    #[rustfmt::skip]
    let data = [
        0.0,  a,   0.0, 0.0,
        -a,   0.0, 0.0, 0.0,
        0.0,  0.0, 0.0, b,
        0.0,  0.0, -b,  0.0,
    ];
    let m = Matrix::from_slice(&data, 4, 4);

    for method in [PfaffianMethod::ParlettReid, PfaffianMethod::Householder] {
        let pf = pfaffian(&m, method).unwrap();
        assert_scalar_close(pf, Scalar::F64(a * b), 1e-12, 1e-13, "block diagonal");
    }
    let pf = pfaffian_schur(&m).unwrap();
    assert_scalar_close(pf, Scalar::F64(a * b), 1e-12, 1e-13, "block diagonal schur");
}

// ============================================================================
// Pf(A)^2 = det(A)
// ============================================================================

#[test]
fn test_pfaffian_squared_is_determinant_f64() {
    for n in [2, 4, 6, 8] {
        let a = random_skew_f64(n, 42 + n as u64);
        let det = determinant(&a).unwrap().as_complex128();
        for method in [PfaffianMethod::ParlettReid, PfaffianMethod::Householder] {
            let pf = pfaffian(&a, method).unwrap().as_complex128();
            let pf_sq = pf * pf;
            assert!(
                (pf_sq - det).magnitude() <= 1e-9 * det.magnitude().max(1e-3),
                "n={}: pf^2 = {} vs det = {}",
                n,
                pf_sq,
                det
            );
        }
    }
}

#[test]
fn test_pfaffian_squared_is_determinant_c128() {
    for n in [2, 4, 6] {
        let a = random_skew_c128(n, 1000 + n as u64);
        let det = determinant(&a).unwrap().as_complex128();
        for method in [PfaffianMethod::ParlettReid, PfaffianMethod::Householder] {
            let pf = pfaffian(&a, method).unwrap().as_complex128();
            let pf_sq = pf * pf;
            assert!(
                (pf_sq - det).magnitude() <= 1e-9 * det.magnitude().max(1e-3),
                "n={}: pf^2 = {} vs det = {}",
                n,
                pf_sq,
                det
            );
        }
    }
}

// ============================================================================
// Method agreement
// ============================================================================

#[test]
fn test_methods_agree_f64() {
    for n in [2, 4, 6, 8, 10] {
        let a = random_skew_f64(n, 7 * n as u64);
        let pf_p = pfaffian(&a, PfaffianMethod::ParlettReid).unwrap();
        let pf_h = pfaffian(&a, PfaffianMethod::Householder).unwrap();
        let pf_s = pfaffian_schur(&a).unwrap();
        assert_scalar_close(pf_h, pf_p, 1e-9, 1e-12, "householder vs parlett-reid");
        assert_scalar_close(pf_s, pf_p, 1e-9, 1e-12, "schur vs parlett-reid");
    }
}

#[test]
fn test_methods_agree_c128() {
    for n in [2, 4, 6, 8] {
        let a = random_skew_c128(n, 13 * n as u64);
        let pf_p = pfaffian(&a, PfaffianMethod::ParlettReid).unwrap();
        let pf_h = pfaffian(&a, PfaffianMethod::Householder).unwrap();
        assert_scalar_close(pf_h, pf_p, 1e-9, 1e-12, "householder vs parlett-reid");
    }
}

// ============================================================================
// Permutation behavior
// ============================================================================

#[test]
fn test_pfaffian_under_symmetric_permutation() {
    let a = random_skew_f64(6, 99);
    let pf = pfaffian(&a, PfaffianMethod::ParlettReid).unwrap();

    // Odd permutation: a single transposition
    let mut p = Permutation::identity(6);
    p.swap(0, 3);
    assert_eq!(p.sign(), -1.0);
    let permuted = p.apply_symmetric(&a).unwrap();
    let pf_odd = pfaffian(&permuted, PfaffianMethod::ParlettReid).unwrap();
    assert_scalar_close(
        pf_odd,
        Scalar::F64(-pf.as_complex128().re),
        1e-10,
        1e-13,
        "odd permutation flips the sign",
    );

    // Even permutation: two transpositions
    let mut q = Permutation::identity(6);
    q.swap(0, 3);
    q.swap(1, 5);
    assert_eq!(q.sign(), 1.0);
    let permuted = q.apply_symmetric(&a).unwrap();
    let pf_even = pfaffian(&permuted, PfaffianMethod::Householder).unwrap();
    assert_scalar_close(pf_even, pf, 1e-10, 1e-13, "even permutation preserves");
}

// ============================================================================
// Defined zero outcomes
// ============================================================================

#[test]
fn test_odd_dimension_is_exactly_zero() {
    for n in [1, 3, 5, 7] {
        let a = random_skew_f64(n, n as u64);
        assert_eq!(
            pfaffian(&a, PfaffianMethod::ParlettReid).unwrap(),
            Scalar::F64(0.0)
        );
        assert_eq!(
            pfaffian(&a, PfaffianMethod::Householder).unwrap(),
            Scalar::F64(0.0)
        );
        assert_eq!(pfaffian_schur(&a).unwrap(), Scalar::F64(0.0));
    }

    let z = random_skew_c128(5, 3);
    assert_eq!(
        pfaffian(&z, PfaffianMethod::ParlettReid).unwrap(),
        Scalar::Complex128(Complex128::ZERO)
    );
}

#[test]
fn test_zero_matrix_is_zero() {
    for n in [2, 4, 6] {
        let a = Matrix::zeros(DType::F64, n, n);
        assert!(pfaffian(&a, PfaffianMethod::ParlettReid).unwrap().is_zero());
        assert!(pfaffian(&a, PfaffianMethod::Householder).unwrap().is_zero());
        assert!(pfaffian_schur(&a).unwrap().is_zero());
    }
}

#[test]
fn test_degenerate_pivot_is_zero() {
    // Rank-deficient skew matrix: rows 2 and 3 are proportional to rows
    // 0 and 1, so the elimination hits an exactly-zero pivot
    #[rustfmt::skip]
    let data = [
        0.0,  1.0, 0.0,  2.0,
        -1.0, 0.0, -1.0, 0.0,
        0.0,  1.0, 0.0,  2.0,
        -2.0, 0.0, -2.0, 0.0,
    ];
    let a = Matrix::from_slice(&data, 4, 4);
    // Sanity: the matrix really is singular
    assert_eq!(determinant(&a).unwrap(), Scalar::F64(0.0));
    assert!(pfaffian_parlett_reid(&a).unwrap().is_zero());
}

// ============================================================================
// In-place variants
// ============================================================================

#[test]
fn test_in_place_variants_agree() {
    let a = random_skew_f64(6, 2024);

    let pf = pfaffian(&a, PfaffianMethod::ParlettReid).unwrap();

    let mut work = a.clone();
    let pf_ip = pfaffian_in_place(&mut work, PfaffianMethod::ParlettReid).unwrap();
    assert_eq!(pf, pf_ip);

    let mut work = a.clone();
    let pf_ip = pfaffian_parlett_reid_in_place(&mut work).unwrap();
    assert_eq!(pfaffian_parlett_reid(&a).unwrap(), pf_ip);

    let mut work = a.clone();
    let pf_ip = pfaffian_householder_in_place(&mut work).unwrap();
    assert_eq!(pfaffian_householder(&a).unwrap(), pf_ip);
    // The reduction really consumed the buffer
    assert_ne!(work.to_vec::<f64>(), a.to_vec::<f64>());

    let mut work = a.clone();
    let pf_ip = pfaffian_schur_in_place(&mut work).unwrap();
    assert_eq!(pfaffian_schur(&a).unwrap(), pf_ip);
}

// ============================================================================
// Precondition violations
// ============================================================================

#[test]
fn test_rejects_non_skew_symmetric() {
    let a = Matrix::from_slice(&[0.0, 1.0, 0.999999, 0.0], 2, 2);
    for method in [PfaffianMethod::ParlettReid, PfaffianMethod::Householder] {
        assert!(matches!(
            pfaffian(&a, method),
            Err(Error::NotSkewSymmetric { .. })
        ));
    }
    assert!(matches!(
        pfaffian_schur(&a),
        Err(Error::NotSkewSymmetric { .. })
    ));

    // A tiny violation below tolerance passes
    let b = Matrix::from_slice(&[0.0, 1.0, -1.0 + 1e-15, 0.0], 2, 2);
    assert!(pfaffian(&b, PfaffianMethod::ParlettReid).is_ok());
}

#[test]
fn test_rejects_bad_shapes() {
    let rect = Matrix::zeros(DType::F64, 3, 2);
    assert!(matches!(
        pfaffian(&rect, PfaffianMethod::Householder),
        Err(Error::ShapeMismatch { .. })
    ));

    let empty = Matrix::zeros(DType::F64, 0, 0);
    assert_eq!(
        pfaffian(&empty, PfaffianMethod::ParlettReid),
        Err(Error::EmptyMatrix)
    );
}

#[test]
fn test_schur_path_rejects_complex() {
    let a = random_skew_c128(4, 1);
    assert_eq!(
        pfaffian_schur(&a),
        Err(Error::UnsupportedDType {
            dtype: DType::Complex128,
            op: "pfaffian_schur"
        })
    );
}
