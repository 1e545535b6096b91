//! Elementwise and scalar arithmetic on vectors

use super::Vector;
use crate::dtype::Element;
use crate::error::{Error, Result};
use std::ops::{Add, Mul, Sub};

impl<T: Element> Vector<T> {
    fn map(&self, f: impl Fn(T) -> T) -> Self {
        let data: Vec<T> = self.iter().map(|&x| f(x)).collect();
        // Same length as `self`, which already satisfies the size bounds.
        Self::from_vec_unchecked(data)
    }

    fn zip_with(&self, other: &Self, f: impl Fn(T, T) -> T) -> Result<Self> {
        if self.size() != other.size() {
            return Err(Error::size_mismatch(self.size(), other.size()));
        }
        let data: Vec<T> = self
            .iter()
            .zip(other.iter())
            .map(|(&a, &b)| f(a, b))
            .collect();
        Ok(Self::from_vec_unchecked(data))
    }

    /// Adds `scalar` to every element
    #[must_use]
    pub fn add_scalar(&self, scalar: T) -> Self {
        self.map(|x| x + scalar)
    }

    /// Subtracts `scalar` from every element
    #[must_use]
    pub fn sub_scalar(&self, scalar: T) -> Self {
        self.map(|x| x - scalar)
    }

    /// Multiplies every element by `scalar`
    #[must_use]
    pub fn mul_scalar(&self, scalar: T) -> Self {
        self.map(|x| x * scalar)
    }

    /// Adds another vector element-wise.
    ///
    /// # Errors
    ///
    /// Returns `SizeMismatch` if the lengths differ.
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, |a, b| a + b)
    }

    /// Subtracts another vector element-wise.
    ///
    /// # Errors
    ///
    /// Returns `SizeMismatch` if the lengths differ.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, |a, b| a - b)
    }

    /// Dot product, accumulated left to right starting from zero.
    ///
    /// # Errors
    ///
    /// Returns `SizeMismatch` if the lengths differ.
    pub fn dot(&self, other: &Self) -> Result<T> {
        if self.size() != other.size() {
            return Err(Error::size_mismatch(self.size(), other.size()));
        }
        Ok(self
            .iter()
            .zip(other.iter())
            .fold(T::zero(), |acc, (&a, &b)| acc + a * b))
    }
}

impl<T: Element> Add<T> for &Vector<T> {
    type Output = Vector<T>;

    fn add(self, scalar: T) -> Vector<T> {
        self.add_scalar(scalar)
    }
}

impl<T: Element> Sub<T> for &Vector<T> {
    type Output = Vector<T>;

    fn sub(self, scalar: T) -> Vector<T> {
        self.sub_scalar(scalar)
    }
}

impl<T: Element> Mul<T> for &Vector<T> {
    type Output = Vector<T>;

    fn mul(self, scalar: T) -> Vector<T> {
        self.mul_scalar(scalar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(data: &[i32]) -> Vector<i32> {
        Vector::from_slice(data).unwrap()
    }

    #[test]
    fn test_scalar_ops() {
        let a = v(&[0, 1, 2]);
        assert_eq!(a.add_scalar(7).as_slice(), &[7, 8, 9]);
        assert_eq!(a.sub_scalar(7).as_slice(), &[-7, -6, -5]);
        assert_eq!(a.mul_scalar(7).as_slice(), &[0, 7, 14]);
        // receiver untouched
        assert_eq!(a.as_slice(), &[0, 1, 2]);
    }

    #[test]
    fn test_scalar_operators() {
        let a = v(&[1, 2, 3]);
        assert_eq!(&a + 1, v(&[2, 3, 4]));
        assert_eq!(&a - 1, v(&[0, 1, 2]));
        assert_eq!(&a * 2, v(&[2, 4, 6]));
    }

    #[test]
    fn test_vector_ops() {
        let a = v(&[1, 2, 3]);
        let b = v(&[4, 5, 6]);
        assert_eq!(a.add(&b).unwrap(), v(&[5, 7, 9]));
        assert_eq!(b.sub(&a).unwrap(), v(&[3, 3, 3]));
        assert_eq!(a.dot(&b).unwrap(), 32);
    }

    #[test]
    fn test_size_mismatch() {
        let a = v(&[1, 2, 3, 4, 5]);
        let b = v(&[1, 2, 3, 4, 5, 6, 7]);
        assert!(matches!(
            a.add(&b),
            Err(Error::SizeMismatch {
                expected: 5,
                got: 7
            })
        ));
        assert!(matches!(a.sub(&b), Err(Error::SizeMismatch { .. })));
        assert!(matches!(a.dot(&b), Err(Error::SizeMismatch { .. })));
    }

    #[test]
    fn test_dot_of_ones() {
        let ones = Vector::filled(10, 1.0f64).unwrap();
        assert_eq!(ones.dot(&ones).unwrap(), 10.0);
    }
}
