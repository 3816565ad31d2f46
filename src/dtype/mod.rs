//! Data type system for skewr matrices
//!
//! This module provides the `DType` enum representing the supported element
//! types, the [`Element`] trait connecting Rust types to dtypes, and the
//! [`Scalar`] value returned by dtype-erased scalar computations.

pub mod complex;
mod element;

pub use complex::Complex128;
pub use element::Element;

use std::fmt;

// ============================================================================
// DType Enum
// ============================================================================

/// Data types supported by skewr matrices
///
/// This enum represents the element type of a matrix at runtime. Using an
/// enum (rather than making [`crate::matrix::Matrix`] generic) allows a
/// single entry point per operation: the dtype is inspected once at the API
/// boundary, then dispatched into a compile-time typed kernel.
///
/// Only double-precision types are supported: the skew-symmetry checks in
/// the linear algebra layer use a fixed absolute tolerance of `1e-14`, which
/// is meaningless for single precision.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum DType {
    /// 64-bit floating point
    F64,
    /// 128-bit complex (two f64: re, im)
    Complex128,
}

impl DType {
    /// Size of one element in bytes
    #[inline]
    pub const fn size_in_bytes(self) -> usize {
        match self {
            Self::F64 => 8,
            Self::Complex128 => 16,
        }
    }

    /// Returns true if this is a complex number type
    #[inline]
    pub const fn is_complex(self) -> bool {
        matches!(self, Self::Complex128)
    }

    /// Short name for display (e.g., "f64", "c128")
    pub const fn short_name(self) -> &'static str {
        match self {
            Self::F64 => "f64",
            Self::Complex128 => "c128",
        }
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

// ============================================================================
// Scalar
// ============================================================================

/// A dtype-tagged scalar value
///
/// Scalar-valued operations (Pfaffian, determinant) work on dtype-erased
/// matrices, so their result carries the dtype of the input: a real matrix
/// produces `Scalar::F64`, a complex matrix `Scalar::Complex128`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Scalar {
    /// Real scalar from an F64 matrix
    F64(f64),
    /// Complex scalar from a Complex128 matrix
    Complex128(Complex128),
}

impl Scalar {
    /// The zero scalar of the given dtype
    #[inline]
    pub fn zero(dtype: DType) -> Self {
        match dtype {
            DType::F64 => Self::F64(0.0),
            DType::Complex128 => Self::Complex128(Complex128::ZERO),
        }
    }

    /// The dtype this scalar is tagged with
    #[inline]
    pub fn dtype(self) -> DType {
        match self {
            Self::F64(_) => DType::F64,
            Self::Complex128(_) => DType::Complex128,
        }
    }

    /// Magnitude of the value
    #[inline]
    pub fn abs(self) -> f64 {
        match self {
            Self::F64(v) => v.abs(),
            Self::Complex128(z) => z.magnitude(),
        }
    }

    /// Returns true if the value is exactly zero
    #[inline]
    pub fn is_zero(self) -> bool {
        match self {
            Self::F64(v) => v == 0.0,
            Self::Complex128(z) => z == Complex128::ZERO,
        }
    }

    /// The value widened to a complex number (real values get zero
    /// imaginary part)
    #[inline]
    pub fn as_complex128(self) -> Complex128 {
        match self {
            Self::F64(v) => Complex128::new(v, 0.0),
            Self::Complex128(z) => z,
        }
    }
}

impl From<f64> for Scalar {
    #[inline]
    fn from(v: f64) -> Self {
        Self::F64(v)
    }
}

impl From<Complex128> for Scalar {
    #[inline]
    fn from(z: Complex128) -> Self {
        Self::Complex128(z)
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::F64(v) => write!(f, "{}", v),
            Self::Complex128(z) => write!(f, "{}", z),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dtype_size() {
        assert_eq!(DType::F64.size_in_bytes(), 8);
        assert_eq!(DType::Complex128.size_in_bytes(), 16);
    }

    #[test]
    fn test_dtype_categories() {
        assert!(!DType::F64.is_complex());
        assert!(DType::Complex128.is_complex());
        assert_eq!(DType::F64.short_name(), "f64");
        assert_eq!(DType::Complex128.short_name(), "c128");
    }

    #[test]
    fn test_scalar_zero() {
        assert!(Scalar::zero(DType::F64).is_zero());
        assert!(Scalar::zero(DType::Complex128).is_zero());
        assert_eq!(Scalar::zero(DType::F64).dtype(), DType::F64);
        assert_eq!(Scalar::zero(DType::Complex128).dtype(), DType::Complex128);
    }

    #[test]
    fn test_scalar_abs() {
        assert_eq!(Scalar::F64(-2.0).abs(), 2.0);
        assert_eq!(Scalar::Complex128(Complex128::new(3.0, 4.0)).abs(), 5.0);
    }

    #[test]
    fn test_scalar_widening() {
        let z = Scalar::F64(1.5).as_complex128();
        assert_eq!(z, Complex128::new(1.5, 0.0));
    }
}
