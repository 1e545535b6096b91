//! Matrix arithmetic: scalar, matrix-vector and matrix-matrix products

use super::Matrix;
use crate::dtype::Element;
use crate::error::{Error, Result};
use crate::limits::Offset;
use crate::vector::Vector;
use std::ops::Mul;
use tracing::instrument;

impl<T: Element> Matrix<T> {
    /// Create the `n`×`n` identity matrix
    pub fn identity<S: Offset>(n: S) -> Result<Self> {
        let mut m = Self::filled(n, T::zero())?;
        for i in 0..m.size() {
            m[i][i] = T::one();
        }
        Ok(m)
    }

    fn check_dims(&self, got: usize) -> Result<()> {
        if self.size() != got {
            return Err(Error::size_mismatch(self.size(), got));
        }
        Ok(())
    }

    /// Multiplies each element by a scalar.
    #[must_use]
    pub fn mul_scalar(&self, scalar: T) -> Self {
        Self::from_rows_unchecked(self.rows().map(|row| row.mul_scalar(scalar)).collect())
    }

    /// Matrix-vector multiplication: element `i` is `row_i · v`.
    ///
    /// # Errors
    ///
    /// Returns `SizeMismatch` if the vector length differs from the dimension.
    #[instrument(level = "trace", skip_all, fields(n = self.size()))]
    pub fn mul_vector(&self, v: &Vector<T>) -> Result<Vector<T>> {
        self.check_dims(v.size())?;
        let data = self
            .rows()
            .map(|row| row.dot(v))
            .collect::<Result<Vec<T>>>()?;
        Ok(Vector::from_vec_unchecked(data))
    }

    /// Adds another matrix element-wise.
    ///
    /// # Errors
    ///
    /// Returns `SizeMismatch` if the dimensions differ.
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.check_dims(other.size())?;
        let rows = self
            .rows()
            .zip(other.rows())
            .map(|(a, b)| a.add(b))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::from_rows_unchecked(rows))
    }

    /// Subtracts another matrix element-wise.
    ///
    /// # Errors
    ///
    /// Returns `SizeMismatch` if the dimensions differ.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        self.check_dims(other.size())?;
        let rows = self
            .rows()
            .zip(other.rows())
            .map(|(a, b)| a.sub(b))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::from_rows_unchecked(rows))
    }

    /// Matrix-matrix multiplication.
    ///
    /// `result[i][j] = Σ_k self[i][k] * other[k][j]`, accumulated over `k` in
    /// increasing order starting from zero. Plain O(N³) triple loop.
    ///
    /// # Errors
    ///
    /// Returns `SizeMismatch` if the dimensions differ.
    #[instrument(level = "trace", skip_all, fields(n = self.size()))]
    pub fn matmul(&self, other: &Self) -> Result<Self> {
        self.check_dims(other.size())?;
        let n = self.size();
        let mut result = Self::filled(n, T::zero())?;
        for i in 0..n {
            let lhs = &self[i];
            let out = &mut result[i];
            for k in 0..n {
                let a = lhs[k];
                let rhs = &other[k];
                for j in 0..n {
                    out[j] = out[j] + a * rhs[j];
                }
            }
        }
        Ok(result)
    }
}

impl<T: Element> Mul<T> for &Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, scalar: T) -> Matrix<T> {
        self.mul_scalar(scalar)
    }
}
