//! # tmatrix
//!
//! **Owned, bounds-checked numeric vectors and square matrices.**
//!
//! tmatrix provides two generic value types:
//!
//! - [`Vector<T>`](vector::Vector): a fixed-length vector owning a contiguous
//!   buffer, with scalar and elementwise arithmetic and a dot product
//! - [`Matrix<T>`](matrix::Matrix): a square matrix composed of `N` row
//!   vectors, with scalar, matrix-vector and matrix-matrix products
//!
//! Both types deep-copy on `clone`, move their storage in O(1) with `take` or
//! `swap`, and keep unchecked indexing (`v[i]`, `m[i][j]`) separate from
//! checked access (`at`).
//!
//! ## Quick Start
//!
//! ```rust
//! use tmatrix::prelude::*;
//!
//! let a = Matrix::<i64>::filled(3, 1)?;
//! let ones = Vector::<i64>::filled(3, 1)?;
//!
//! assert_eq!(a.mul_vector(&ones)?.as_slice(), &[3, 3, 3]);
//! assert_eq!(a.matmul(&a)?, Matrix::filled(3, 3)?);
//! assert!(matches!(a.at(3, 3), Err(Error::IndexOutOfRange { .. })));
//! # Ok::<(), Error>(())
//! ```
//!
//! ## Limits
//!
//! Construction is bounded by [`limits::MAX_VECTOR_SIZE`] and
//! [`limits::MAX_MATRIX_SIZE`]; sizes outside `1..=MAX` fail with
//! [`Error::InvalidSize`](error::Error::InvalidSize).
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for both containers, validated on load

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod dtype;
pub mod error;
pub mod io;
pub mod limits;
pub mod matrix;
pub mod vector;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::dtype::{DType, Element};
    pub use crate::error::{Error, Position, Result};
    pub use crate::io::TokenReader;
    pub use crate::limits::{MAX_MATRIX_SIZE, MAX_VECTOR_SIZE};
    pub use crate::matrix::Matrix;
    pub use crate::vector::Vector;
}
