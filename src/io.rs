//! Plain-text reading and writing
//!
//! The format is whitespace separated tokens with no header: a reader must
//! already know the vector length or matrix dimension. Vectors are written on
//! one line; matrices are written one row per line, row-major. Every written
//! line ends with `\n`.
//!
//! ```
//! use std::io::Cursor;
//! use tmatrix::io::TokenReader;
//! use tmatrix::matrix::Matrix;
//!
//! let mut tokens = TokenReader::new(Cursor::new("1 2\n3 4\n"));
//! let mut m = Matrix::<i32>::new(2)?;
//! m.read_from(&mut tokens)?;
//!
//! let mut out = Vec::new();
//! m.write_to(&mut out)?;
//! assert_eq!(out, b"1 2\n3 4\n");
//! # Ok::<(), tmatrix::error::Error>(())
//! ```

use crate::dtype::Element;
use crate::error::{Error, Result};
use crate::limits::Offset;
use crate::matrix::Matrix;
use crate::vector::Vector;
use std::collections::VecDeque;
use std::io::{BufRead, Write};

/// Splits a buffered reader into whitespace separated tokens
///
/// Lines are pulled from the underlying reader only when the pending tokens
/// run out, so reading a vector never consumes more lines than it needs.
pub struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
    line: String,
}

impl<R: BufRead> TokenReader<R> {
    /// Wrap a buffered reader
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
            line: String::new(),
        }
    }

    /// Next token, or `None` at end of input
    pub fn next_token(&mut self) -> Result<Option<String>> {
        while self.pending.is_empty() {
            self.line.clear();
            if self.reader.read_line(&mut self.line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(self.line.split_whitespace().map(str::to_owned));
        }
        Ok(self.pending.pop_front())
    }

    /// Parse exactly `dst.len()` tokens into `dst`, in index order
    ///
    /// On failure the elements parsed so far stay written.
    pub fn read_into<T: Element>(&mut self, dst: &mut [T]) -> Result<()> {
        let expected = dst.len();
        for (got, slot) in dst.iter_mut().enumerate() {
            let token = self
                .next_token()?
                .ok_or(Error::UnexpectedEof { expected, got })?;
            *slot = token.parse().map_err(|_| {
                tracing::debug!(%token, dtype = %T::DTYPE, "rejected token");
                Error::Parse {
                    token,
                    dtype: T::DTYPE,
                }
            })?;
        }
        Ok(())
    }
}

impl<T: Element> Vector<T> {
    /// Overwrite every element with the next `size()` tokens
    pub fn read_from<R: BufRead>(&mut self, tokens: &mut TokenReader<R>) -> Result<()> {
        tokens.read_into(self.as_mut_slice())
    }

    /// Write the elements space separated, followed by `\n`
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "{self}")?;
        Ok(())
    }
}

impl<T: Element> Matrix<T> {
    /// Overwrite every element with the next `N×N` tokens, row-major
    pub fn read_from<R: BufRead>(&mut self, tokens: &mut TokenReader<R>) -> Result<()> {
        let n = self.size();
        for (i, row) in self.rows_mut().enumerate() {
            tokens.read_into(row).map_err(|err| match err {
                Error::UnexpectedEof { got, .. } => Error::UnexpectedEof {
                    expected: n * n,
                    got: i * n + got,
                },
                other => other,
            })?;
        }
        Ok(())
    }

    /// Write one row per line
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        for row in self.rows() {
            row.write_to(out)?;
        }
        Ok(())
    }
}

/// Read a vector of `size` elements from `reader`
pub fn read_vector<T: Element, S: Offset, R: BufRead>(reader: R, size: S) -> Result<Vector<T>> {
    let mut v = Vector::new(size)?;
    v.read_from(&mut TokenReader::new(reader))?;
    Ok(v)
}

/// Read an `n`×`n` matrix from `reader`
pub fn read_matrix<T: Element, S: Offset, R: BufRead>(reader: R, n: S) -> Result<Matrix<T>> {
    let mut m = Matrix::new(n)?;
    m.read_from(&mut TokenReader::new(reader))?;
    Ok(m)
}
