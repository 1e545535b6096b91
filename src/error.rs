//! Error types for tmatrix

use crate::dtype::DType;
use std::fmt;
use thiserror::Error;

/// Result type alias using tmatrix's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in tmatrix operations
#[derive(Error, Debug)]
pub enum Error {
    /// Requested length or dimension is non-positive or above the limit
    #[error("Invalid size {size}: must be in 1..={max}")]
    InvalidSize {
        /// The requested size, as written by the caller
        size: i128,
        /// Maximum allowed size for this container
        max: usize,
    },

    /// Raw-buffer construction was given an absent source
    #[error("Source buffer is null")]
    NullSource,

    /// Checked access outside the container bounds
    #[error("Index {index} out of range for size {size}")]
    IndexOutOfRange {
        /// The rejected position
        index: Position,
        /// Length of the vector or dimension of the matrix
        size: usize,
    },

    /// Operands of a binary operation have incompatible sizes
    #[error("Size mismatch: expected {expected}, got {got}")]
    SizeMismatch {
        /// Size required by the receiver
        expected: usize,
        /// Size of the offending operand
        got: usize,
    },

    /// A text token could not be parsed as the element type
    #[error("Cannot parse token '{token}' as {dtype}")]
    Parse {
        /// The offending token
        token: String,
        /// Element type the token was parsed as
        dtype: DType,
    },

    /// The input stream ended before enough tokens were read
    #[error("Unexpected end of input: expected {expected} tokens, got {got}")]
    UnexpectedEof {
        /// Number of tokens required
        expected: usize,
        /// Number of tokens actually read
        got: usize,
    },

    /// Underlying I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a size mismatch error
    pub fn size_mismatch(expected: usize, got: usize) -> Self {
        Self::SizeMismatch { expected, got }
    }

    /// Create an invalid size error
    pub fn invalid_size(size: i128, max: usize) -> Self {
        Self::InvalidSize { size, max }
    }

    /// Create an index out of range error
    pub fn index_out_of_range(index: Position, size: usize) -> Self {
        Self::IndexOutOfRange { index, size }
    }
}

/// Position rejected by a checked access, as written by the caller
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Position {
    /// Element index into a vector
    Index(i128),
    /// `(row, col)` cell of a matrix
    Cell(i128, i128),
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(i) => write!(f, "{i}"),
            Self::Cell(row, col) => write!(f, "({row}, {col})"),
        }
    }
}
