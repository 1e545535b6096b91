//! Core Matrix type

use crate::error::{Error, Position, Result};
use crate::limits::{self, MAX_MATRIX_SIZE, Offset};
use crate::vector::Vector;
use std::fmt;
use std::mem;
use std::ops::{Index, IndexMut};
use std::slice;

/// Square matrix of dimension `N` stored as `N` owned row vectors
///
/// The matrix is composed of a `Vector<Vector<T>>`; every row has length
/// exactly `N` and owns its own buffer. Like [`Vector`], the only state
/// outside `1..=MAX_MATRIX_SIZE` is the empty state left behind by
/// [`Matrix::take`].
///
/// # Example
///
/// ```
/// use tmatrix::matrix::Matrix;
///
/// let mut m = Matrix::<i32>::new(3)?;
/// m[1][2] = 5;
/// assert_eq!(*m.at(1, 2)?, 5);
/// assert!(m.at(3, 3).is_err());
/// # Ok::<(), tmatrix::error::Error>(())
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Matrix<T> {
    rows: Vector<Vector<T>>,
}

impl<T: Default + Clone> Matrix<T> {
    /// Create an `n`×`n` matrix of default-initialised elements
    ///
    /// Fails with `InvalidSize` when `n < 1` or `n > MAX_MATRIX_SIZE`.
    pub fn new<S: Offset>(n: S) -> Result<Self> {
        Self::filled(n, T::default())
    }
}

impl<T: Clone> Matrix<T> {
    /// Create an `n`×`n` matrix with every element set to `value`
    pub fn filled<S: Offset>(n: S, value: T) -> Result<Self> {
        let n = limits::check_size(n, MAX_MATRIX_SIZE)?;
        let row = Vector::filled(n, value)?;
        // Each clone of `row` gets its own buffer.
        Ok(Self {
            rows: Vector::filled(n, row)?,
        })
    }

    /// Returns the transposed matrix
    #[must_use]
    pub fn transpose(&self) -> Self {
        let n = self.size();
        let rows = (0..n)
            .map(|j| {
                let column = (0..n).map(|i| self.rows[i][j].clone()).collect();
                Vector::from_vec_unchecked(column)
            })
            .collect();
        Self::from_rows_unchecked(rows)
    }
}

impl<T> Matrix<T> {
    /// Create a matrix from row data, validating squareness
    ///
    /// Fails with `InvalidSize` when the row count is out of bounds and with
    /// `SizeMismatch` when a row's length differs from the row count.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let n = limits::check_size(rows.len(), MAX_MATRIX_SIZE)?;
        let rows = rows
            .into_iter()
            .map(|row| {
                if row.len() != n {
                    return Err(Error::size_mismatch(n, row.len()));
                }
                Vector::from_vec(row)
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::from_rows_unchecked(rows))
    }

    /// Wraps rows already known to form a valid square matrix
    pub(crate) fn from_rows_unchecked(rows: Vec<Vector<T>>) -> Self {
        debug_assert!(rows.iter().all(|row| row.size() == rows.len()));
        Self {
            rows: Vector::from_vec_unchecked(rows),
        }
    }

    /// Dimension `N`
    #[inline]
    pub fn size(&self) -> usize {
        self.rows.size()
    }

    /// Whether this matrix is in the empty (moved-from) state
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn check_cell<I: Offset, J: Offset>(&self, row: I, col: J) -> Result<(usize, usize)> {
        let n = self.size();
        match (limits::check_index(row, n), limits::check_index(col, n)) {
            (Ok(i), Ok(j)) => Ok((i, j)),
            _ => Err(Error::index_out_of_range(
                Position::Cell(row.to_signed(), col.to_signed()),
                n,
            )),
        }
    }

    /// Checked element access
    ///
    /// Fails with `IndexOutOfRange` when either index is negative or `>= N`.
    pub fn at<I: Offset, J: Offset>(&self, row: I, col: J) -> Result<&T> {
        let (i, j) = self.check_cell(row, col)?;
        Ok(&self.rows[i][j])
    }

    /// Checked mutable element access
    pub fn at_mut<I: Offset, J: Offset>(&mut self, row: I, col: J) -> Result<&mut T> {
        let (i, j) = self.check_cell(row, col)?;
        Ok(&mut self.rows[i][j])
    }

    /// Checked row access
    pub fn row<I: Offset>(&self, index: I) -> Result<&Vector<T>> {
        self.rows.at(index)
    }

    /// Iterate over the rows in index order
    pub fn rows(&self) -> slice::Iter<'_, Vector<T>> {
        self.rows.iter()
    }

    /// Iterate mutably over the rows in index order
    ///
    /// Rows are handed out as slices, so elements can be written but a row's
    /// length cannot change.
    pub fn rows_mut(&mut self) -> impl Iterator<Item = &mut [T]> {
        self.rows.iter_mut().map(Vector::as_mut_slice)
    }

    /// Move the rows out, leaving `self` empty
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }

    /// Exchange rows with `other` in O(1) without copying elements
    pub fn swap(&mut self, other: &mut Self) {
        self.rows.swap(&mut other.rows);
    }
}

/// The empty (moved-from) state.
impl<T> Default for Matrix<T> {
    fn default() -> Self {
        Self {
            rows: Vector::default(),
        }
    }
}

/// Unchecked row indexing; `m[i][j]` chains into slice indexing.
///
/// Rows come out as slices, so a row can be written element by element but
/// never replaced by one of a different length:
///
/// ```compile_fail
/// use tmatrix::matrix::Matrix;
/// use tmatrix::vector::Vector;
///
/// let mut m = Matrix::<i32>::new(3).unwrap();
/// m[1] = Vector::new(1).unwrap();
/// ```
impl<T> Index<usize> for Matrix<T> {
    type Output = [T];

    #[inline]
    fn index(&self, index: usize) -> &[T] {
        self.rows[index].as_slice()
    }
}

impl<T> IndexMut<usize> for Matrix<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut [T] {
        self.rows[index].as_mut_slice()
    }
}

impl<T> TryFrom<Vec<Vec<T>>> for Matrix<T> {
    type Error = Error;

    fn try_from(rows: Vec<Vec<T>>) -> Result<Self> {
        Self::from_rows(rows)
    }
}

impl<T: fmt::Debug> fmt::Debug for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.rows.iter()).finish()
    }
}

/// One row per line, elements separated by a single space.
impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{row}")?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Matrix<T> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&self.rows, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for Matrix<T> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let rows = <Vec<Vec<T>> as serde::Deserialize>::deserialize(deserializer)?;
        Self::from_rows(rows).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_square() {
        let m = Matrix::<f64>::new(4).unwrap();
        assert_eq!(m.size(), 4);
        assert!(m.rows().all(|row| row.size() == 4));
        assert!(m.rows().flatten().all(|&x| x == 0.0));
    }

    #[test]
    fn test_new_rejects_bad_sizes() {
        assert!(matches!(Matrix::<i32>::new(0), Err(Error::InvalidSize { .. })));
        assert!(matches!(Matrix::<i32>::new(-5), Err(Error::InvalidSize { .. })));
        assert!(matches!(
            Matrix::<i32>::new(MAX_MATRIX_SIZE + 1),
            Err(Error::InvalidSize { max: MAX_MATRIX_SIZE, .. })
        ));
    }

    #[test]
    fn test_rows_do_not_alias() {
        let mut m = Matrix::<i32>::new(3).unwrap();
        m[0][0] = 1;
        assert_eq!(m[1][0], 0);
        assert_eq!(m[2][0], 0);
    }

    #[test]
    fn test_from_rows() {
        let m = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        assert_eq!(*m.at(1, 0).unwrap(), 3);

        assert!(matches!(
            Matrix::from_rows(vec![vec![1, 2], vec![3]]),
            Err(Error::SizeMismatch {
                expected: 2,
                got: 1
            })
        ));
        assert!(matches!(
            Matrix::<i32>::from_rows(Vec::new()),
            Err(Error::InvalidSize { .. })
        ));
    }

    #[test]
    fn test_at_bounds() {
        let mut m = Matrix::<i32>::new(3).unwrap();
        *m.at_mut(2, 1).unwrap() = 8;
        assert_eq!(m[2][1], 8);

        assert!(matches!(
            m.at(-1, -1),
            Err(Error::IndexOutOfRange {
                index: Position::Cell(-1, -1),
                size: 3
            })
        ));
        assert_eq!(
            m.at(-1, -1).unwrap_err().to_string(),
            "Index (-1, -1) out of range for size 3"
        );
        assert!(matches!(m.at(3, 3), Err(Error::IndexOutOfRange { .. })));
        assert!(matches!(m.at(0, 3), Err(Error::IndexOutOfRange { .. })));
        assert!(matches!(m.row(3), Err(Error::IndexOutOfRange { .. })));
    }

    #[test]
    fn test_take_and_swap() {
        let mut a = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        let mut b = Matrix::<i32>::new(3).unwrap();

        a.swap(&mut b);
        assert_eq!(a.size(), 3);
        assert_eq!(b[1][1], 4);

        let c = b.take();
        assert!(b.is_empty());
        assert_eq!(b.size(), 0);
        assert_eq!(c[0][1], 2);
    }

    #[test]
    fn test_transpose() {
        let m = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        let t = m.transpose();
        assert_eq!(t, Matrix::from_rows(vec![vec![1, 3], vec![2, 4]]).unwrap());
    }

    #[test]
    fn test_row_writes_keep_square_shape() {
        let mut m = Matrix::<i32>::new(3).unwrap();
        m[1].copy_from_slice(&[4, 5, 6]);
        for (i, row) in m.rows_mut().enumerate() {
            row[0] = 10 + i as i32;
        }

        assert!(m.rows().all(|row| row.size() == 3));
        assert_eq!(*m.at(1, 2).unwrap(), 6);
        assert_eq!(m.row(1).unwrap().as_slice(), &[11, 5, 6]);
        assert!(matches!(m.at(1, 3), Err(Error::IndexOutOfRange { .. })));
    }

    #[test]
    fn test_display() {
        let m = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        assert_eq!(m.to_string(), "1 2\n3 4");
    }
}
