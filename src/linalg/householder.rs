//! Householder reflection primitives shared by the reduction kernels
//!
//! Both tridiagonalization paths and the Schur fallback are built on
//! Householder reflections. The real and complex variants differ in how
//! the leading entry is shifted: the real case picks the sign that avoids
//! catastrophic cancellation, the complex case rotates by the phase of the
//! leading entry. The [`LinalgElement`] trait selects between the two at
//! compile time.

use crate::dtype::{Complex128, Element};

/// A Householder reflection `I - tau * v * v^H` scaled so that applying it
/// to the vector it was computed from leaves `alpha * e_1`.
///
/// `tau` is either 0 or 2. A zero `tau` marks a degenerate column whose
/// tail is already zero; no reflection is applied in that case and `v` is
/// the zero vector.
#[derive(Debug, Clone)]
pub struct HouseholderReflection<T> {
    /// Unit reflection vector
    pub v: Vec<T>,
    /// Scale factor, 0 or 2
    pub tau: f64,
    /// Value left in the leading position after the reflection
    pub alpha: T,
}

/// Trait for elements that support the skew-symmetric reduction kernels.
///
/// This trait extends [`Element`] with the operations the elimination and
/// reflection sweeps need. `zero()` and `one()` are inherited from
/// `Element`; the two `householder_reflection` implementations are the
/// real/complex dispatch point required by the reductions.
pub trait LinalgElement: Element {
    /// Magnitude of the element as a real number
    fn abs_val(self) -> f64;

    /// Complex conjugate (identity for real elements)
    fn conj_val(self) -> Self;

    /// Multiply by a real scalar
    fn scale(self, factor: f64) -> Self;

    /// Compute the Householder reflection of a nonempty vector `x` such
    /// that `(I - tau * v * v^H) x = alpha * e_1`.
    fn householder_reflection(x: &[Self]) -> HouseholderReflection<Self>;
}

impl LinalgElement for f64 {
    #[inline]
    fn abs_val(self) -> f64 {
        self.abs()
    }

    #[inline]
    fn conj_val(self) -> Self {
        self
    }

    #[inline]
    fn scale(self, factor: f64) -> Self {
        self * factor
    }

    fn householder_reflection(x: &[f64]) -> HouseholderReflection<f64> {
        debug_assert!(!x.is_empty());

        let sigma: f64 = x[1..].iter().map(|&e| e * e).sum();

        if sigma == 0.0 {
            return HouseholderReflection {
                v: vec![0.0; x.len()],
                tau: 0.0,
                alpha: x[0],
            };
        }

        let norm_x = (x[0] * x[0] + sigma).sqrt();

        let mut v = x.to_vec();
        // Shift the leading entry away from zero: the sign is chosen so
        // that v[0] and the shift never cancel.
        let alpha = if x[0] <= 0.0 {
            v[0] -= norm_x;
            norm_x
        } else {
            v[0] += norm_x;
            -norm_x
        };

        let v_norm = v.iter().map(|&e| e * e).sum::<f64>().sqrt();
        for e in &mut v {
            *e /= v_norm;
        }

        HouseholderReflection { v, tau: 2.0, alpha }
    }
}

impl LinalgElement for Complex128 {
    #[inline]
    fn abs_val(self) -> f64 {
        self.magnitude()
    }

    #[inline]
    fn conj_val(self) -> Self {
        self.conj()
    }

    #[inline]
    fn scale(self, factor: f64) -> Self {
        Complex128::new(self.re * factor, self.im * factor)
    }

    fn householder_reflection(x: &[Complex128]) -> HouseholderReflection<Complex128> {
        debug_assert!(!x.is_empty());

        let sigma: f64 = x[1..].iter().map(|e| e.magnitude_squared()).sum();

        if sigma == 0.0 {
            return HouseholderReflection {
                v: vec![Complex128::ZERO; x.len()],
                tau: 0.0,
                alpha: x[0],
            };
        }

        let norm_x = (x[0].magnitude_squared() + sigma).sqrt();

        // The real-case sign choice becomes a phase rotation: shift the
        // leading entry along its own phase direction.
        let phase = Complex128::from_polar(1.0, x[0].phase());

        let mut v = x.to_vec();
        v[0] = v[0] + phase.scale(norm_x);

        let v_norm = v.iter().map(|e| e.magnitude_squared()).sum::<f64>().sqrt();
        for e in &mut v {
            *e = e.scale(1.0 / v_norm);
        }

        HouseholderReflection {
            v,
            tau: 2.0,
            alpha: -phase.scale(norm_x),
        }
    }
}
