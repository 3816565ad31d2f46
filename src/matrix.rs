//! Dense matrix container
//!
//! A dense, row-major, dtype-erased matrix. The element type is fixed at
//! construction and carried as a [`DType`] tag; algorithms inspect the tag
//! once at their entry point and dispatch into typed kernels operating on
//! plain `&[T]` / `&mut [T]` views obtained through [`Matrix::as_slice`] and
//! [`Matrix::as_mut_slice`].
//!
//! Storage is a per-dtype buffer, so typed views are alignment-safe and
//! produced with zero-copy bytemuck casts.

use crate::dtype::{Complex128, DType, Element};
use crate::error::{Error, Result};

/// Per-dtype storage for matrix elements
#[derive(Debug, Clone, PartialEq)]
enum MatrixData {
    F64(Vec<f64>),
    Complex128(Vec<Complex128>),
}

/// A dense matrix stored in row-major order
///
/// Element `(i, j)` of an `r × c` matrix lives at index `i * c + j` of the
/// underlying buffer.
///
/// # Example
///
/// ```
/// use skewr::dtype::DType;
/// use skewr::matrix::Matrix;
///
/// let a = Matrix::from_slice(&[0.0, 1.0, -1.0, 0.0], 2, 2);
/// assert_eq!(a.dtype(), DType::F64);
/// assert_eq!(a.get::<f64>(0, 1), 1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    data: MatrixData,
    nrows: usize,
    ncols: usize,
}

impl Matrix {
    /// Create a matrix from a slice of data
    ///
    /// # Panics
    ///
    /// Panics if `data.len() != nrows * ncols`. Use
    /// [`Matrix::try_from_slice`] for a fallible version.
    pub fn from_slice<T: Element>(data: &[T], nrows: usize, ncols: usize) -> Self {
        Self::try_from_slice(data, nrows, ncols).expect("Matrix::from_slice failed")
    }

    /// Create a matrix from a slice of data (fallible version)
    ///
    /// Returns an error if `data.len()` does not equal `nrows * ncols`.
    pub fn try_from_slice<T: Element>(data: &[T], nrows: usize, ncols: usize) -> Result<Self> {
        if data.len() != nrows * ncols {
            return Err(Error::InvalidData {
                expected: nrows * ncols,
                got: data.len(),
            });
        }

        let data = match T::DTYPE {
            DType::F64 => MatrixData::F64(bytemuck::cast_slice(data).to_vec()),
            DType::Complex128 => MatrixData::Complex128(bytemuck::cast_slice(data).to_vec()),
        };

        Ok(Self { data, nrows, ncols })
    }

    /// Create a zero-filled matrix of the given dtype
    pub fn zeros(dtype: DType, nrows: usize, ncols: usize) -> Self {
        let data = match dtype {
            DType::F64 => MatrixData::F64(vec![0.0; nrows * ncols]),
            DType::Complex128 => MatrixData::Complex128(vec![Complex128::ZERO; nrows * ncols]),
        };
        Self { data, nrows, ncols }
    }

    /// Create an n×n identity matrix of the given dtype
    pub fn identity(dtype: DType, n: usize) -> Self {
        let mut m = Self::zeros(dtype, n, n);
        match &mut m.data {
            MatrixData::F64(v) => {
                for i in 0..n {
                    v[i * n + i] = 1.0;
                }
            }
            MatrixData::Complex128(v) => {
                for i in 0..n {
                    v[i * n + i] = Complex128::ONE;
                }
            }
        }
        m
    }

    /// Number of rows
    #[inline]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of columns
    #[inline]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Shape as `[rows, cols]`
    #[inline]
    pub fn shape(&self) -> [usize; 2] {
        [self.nrows, self.ncols]
    }

    /// Total number of elements
    #[inline]
    pub fn numel(&self) -> usize {
        self.nrows * self.ncols
    }

    /// The element type
    #[inline]
    pub fn dtype(&self) -> DType {
        match &self.data {
            MatrixData::F64(_) => DType::F64,
            MatrixData::Complex128(_) => DType::Complex128,
        }
    }

    /// Returns true if the matrix is square
    #[inline]
    pub fn is_square(&self) -> bool {
        self.nrows == self.ncols
    }

    /// Typed view of the underlying row-major buffer
    ///
    /// # Panics
    ///
    /// Panics if `T` does not match the matrix dtype.
    pub fn as_slice<T: Element>(&self) -> &[T] {
        match (&self.data, T::DTYPE) {
            (MatrixData::F64(v), DType::F64) => bytemuck::cast_slice(v),
            (MatrixData::Complex128(v), DType::Complex128) => bytemuck::cast_slice(v),
            _ => panic!(
                "Matrix dtype is {}, requested a {} view",
                self.dtype(),
                T::DTYPE
            ),
        }
    }

    /// Typed mutable view of the underlying row-major buffer
    ///
    /// # Panics
    ///
    /// Panics if `T` does not match the matrix dtype.
    pub fn as_mut_slice<T: Element>(&mut self) -> &mut [T] {
        let dtype = self.dtype();
        match (&mut self.data, T::DTYPE) {
            (MatrixData::F64(v), DType::F64) => bytemuck::cast_slice_mut(v),
            (MatrixData::Complex128(v), DType::Complex128) => bytemuck::cast_slice_mut(v),
            _ => panic!("Matrix dtype is {}, requested a {} view", dtype, T::DTYPE),
        }
    }

    /// Copy the elements into a typed `Vec`
    ///
    /// # Panics
    ///
    /// Panics if `T` does not match the matrix dtype.
    pub fn to_vec<T: Element>(&self) -> Vec<T> {
        self.as_slice::<T>().to_vec()
    }

    /// Read element `(i, j)`
    ///
    /// # Panics
    ///
    /// Panics if `T` does not match the matrix dtype or the indices are out
    /// of bounds.
    #[inline]
    pub fn get<T: Element>(&self, i: usize, j: usize) -> T {
        assert!(i < self.nrows && j < self.ncols, "index out of bounds");
        self.as_slice::<T>()[i * self.ncols + j]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_slice_roundtrip() {
        let a = Matrix::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2, 3);
        assert_eq!(a.shape(), [2, 3]);
        assert_eq!(a.dtype(), DType::F64);
        assert_eq!(a.to_vec::<f64>(), vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(a.get::<f64>(1, 2), 6.0);
    }

    #[test]
    fn test_try_from_slice_length_mismatch() {
        let err = Matrix::try_from_slice(&[1.0, 2.0, 3.0], 2, 2).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidData {
                expected: 4,
                got: 3
            }
        );
    }

    #[test]
    fn test_complex_storage() {
        let data = [
            Complex128::ZERO,
            Complex128::I,
            -Complex128::I,
            Complex128::ZERO,
        ];
        let a = Matrix::from_slice(&data, 2, 2);
        assert_eq!(a.dtype(), DType::Complex128);
        assert!(a.dtype().is_complex());
        assert_eq!(a.get::<Complex128>(0, 1), Complex128::I);
    }

    #[test]
    fn test_identity() {
        let eye = Matrix::identity(DType::F64, 3);
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_eq!(eye.get::<f64>(i, j), expected);
            }
        }
    }

    #[test]
    fn test_as_mut_slice() {
        let mut a = Matrix::zeros(DType::F64, 2, 2);
        a.as_mut_slice::<f64>()[1] = 7.0;
        assert_eq!(a.get::<f64>(0, 1), 7.0);
    }

    #[test]
    #[should_panic(expected = "requested")]
    fn test_as_slice_dtype_mismatch() {
        let a = Matrix::zeros(DType::F64, 2, 2);
        let _ = a.as_slice::<Complex128>();
    }
}
