//! Core Vector type

use crate::error::{Error, Result};
use crate::limits::{self, MAX_VECTOR_SIZE, Offset};
use std::fmt;
use std::mem;
use std::ops::{Index, IndexMut};
use std::slice;

/// Fixed-length vector owning a contiguous buffer
///
/// Every vector produced by a constructor has a length in
/// `1..=MAX_VECTOR_SIZE`. The only other state is the empty state reached
/// through [`Vector::take`] (or `Default` / `std::mem::take`), which models a
/// moved-from vector; assigning a new vector to it makes it usable again.
///
/// Cloning deep-copies the buffer. Taking or swapping only moves the owning
/// box, so no element is copied.
///
/// # Example
///
/// ```
/// use tmatrix::vector::Vector;
///
/// let mut v = Vector::<i32>::new(3)?;
/// v[0] = 4;
/// *v.at_mut(2)? = 7;
/// assert_eq!(v.as_slice(), &[4, 0, 7]);
/// # Ok::<(), tmatrix::error::Error>(())
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Vector<T> {
    data: Box<[T]>,
}

impl<T: Default + Clone> Vector<T> {
    /// Create a vector of `size` default-initialised elements
    ///
    /// Fails with `InvalidSize` when `size < 1` or `size > MAX_VECTOR_SIZE`.
    pub fn new<S: Offset>(size: S) -> Result<Self> {
        Self::filled(size, T::default())
    }
}

impl<T: Clone> Vector<T> {
    /// Create a vector of `size` copies of `value`
    pub fn filled<S: Offset>(size: S, value: T) -> Result<Self> {
        let len = limits::check_size(size, MAX_VECTOR_SIZE)?;
        Ok(Self {
            data: vec![value; len].into_boxed_slice(),
        })
    }

    /// Create a vector by copying a slice
    pub fn from_slice(data: &[T]) -> Result<Self> {
        limits::check_size(data.len(), MAX_VECTOR_SIZE)?;
        Ok(Self { data: data.into() })
    }

    /// Create a vector by copying exactly `size` elements from `source`
    ///
    /// Fails with `NullSource` when `source` is absent, `InvalidSize` when
    /// `size` is out of bounds and `SizeMismatch` when the source does not
    /// hold exactly `size` elements. A longer source is rejected rather than
    /// truncated; pass `&source[..size]` to copy a prefix.
    pub fn from_source<S: Offset>(source: Option<&[T]>, size: S) -> Result<Self> {
        let source = source.ok_or(Error::NullSource)?;
        let len = limits::check_size(size, MAX_VECTOR_SIZE)?;
        if source.len() != len {
            return Err(Error::size_mismatch(len, source.len()));
        }
        Ok(Self {
            data: source.into(),
        })
    }

    /// Create a vector by copying `size` elements starting at `ptr`
    ///
    /// Fails with `NullSource` when `ptr` is null.
    ///
    /// # Safety
    /// A non-null `ptr` must be valid for reads of `size` consecutive,
    /// initialised values of `T`.
    pub unsafe fn from_ptr<S: Offset>(ptr: *const T, size: S) -> Result<Self> {
        if ptr.is_null() {
            return Err(Error::NullSource);
        }
        let len = limits::check_size(size, MAX_VECTOR_SIZE)?;
        // SAFETY: non-null and, per the caller contract, valid for `len` reads.
        let source = unsafe { slice::from_raw_parts(ptr, len) };
        Ok(Self {
            data: source.into(),
        })
    }
}

impl<T> Vector<T> {
    /// Create a vector adopting an existing `Vec` without copying
    pub fn from_vec(data: Vec<T>) -> Result<Self> {
        limits::check_size(data.len(), MAX_VECTOR_SIZE)?;
        Ok(Self {
            data: data.into_boxed_slice(),
        })
    }

    /// Wraps data already known to satisfy the size bounds
    pub(crate) fn from_vec_unchecked(data: Vec<T>) -> Self {
        debug_assert!(data.len() <= MAX_VECTOR_SIZE);
        Self {
            data: data.into_boxed_slice(),
        }
    }

    /// Number of elements
    #[inline]
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Number of elements (alias of [`Self::size`])
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether this vector is in the empty (moved-from) state
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Checked element access
    ///
    /// Fails with `IndexOutOfRange` when `index` is negative or `>= size()`.
    #[inline]
    pub fn at<I: Offset>(&self, index: I) -> Result<&T> {
        let i = limits::check_index(index, self.data.len())?;
        Ok(&self.data[i])
    }

    /// Checked mutable element access
    #[inline]
    pub fn at_mut<I: Offset>(&mut self, index: I) -> Result<&mut T> {
        let i = limits::check_index(index, self.data.len())?;
        Ok(&mut self.data[i])
    }

    /// Element access without bounds checking
    ///
    /// # Safety
    /// `index` must be less than `size()`.
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        // SAFETY: upheld by the caller.
        unsafe { self.data.get_unchecked(index) }
    }

    /// Mutable element access without bounds checking
    ///
    /// # Safety
    /// `index` must be less than `size()`.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        // SAFETY: upheld by the caller.
        unsafe { self.data.get_unchecked_mut(index) }
    }

    /// Move the storage out, leaving `self` empty
    ///
    /// Runs in O(1): only the owning box changes hands.
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }

    /// Exchange storage with `other` in O(1) without copying elements
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.data, &mut other.data);
    }

    /// View the elements as a slice
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// View the elements as a mutable slice
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Iterate over the elements in index order
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Iterate mutably over the elements in index order
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    /// Consume the vector, returning its elements
    pub fn into_vec(self) -> Vec<T> {
        self.data.into_vec()
    }
}

/// Unchecked indexing.
///
/// Performs no validation of its own; an out-of-range index reaches the
/// slice's bounds assertion and panics. Use [`Vector::at`] for a recoverable
/// error.
impl<T> Index<usize> for Vector<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T> IndexMut<usize> for Vector<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }
}

/// The empty (moved-from) state.
impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self {
            data: Box::default(),
        }
    }
}

impl<T> TryFrom<Vec<T>> for Vector<T> {
    type Error = Error;

    fn try_from(data: Vec<T>) -> Result<Self> {
        Self::from_vec(data)
    }
}

impl<T> From<Vector<T>> for Vec<T> {
    fn from(v: Vector<T>) -> Self {
        v.into_vec()
    }
}

impl<T> IntoIterator for Vector<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Vector<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter_mut()
    }
}

impl<T: fmt::Debug> fmt::Debug for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.data.iter()).finish()
    }
}

/// Elements in index order separated by a single space.
impl<T: fmt::Display> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, x) in self.data.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{x}")?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Vector<T> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&self.data, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for Vector<T> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <Vec<T> as serde::Deserialize>::deserialize(deserializer)?;
        Self::from_vec(data).map_err(serde::de::Error::custom)
    }
}
