//! One-dimensional vector container
//!
//! `Vector<T>` owns a contiguous, fixed-length buffer. Storage-level
//! operations (construction, copy, move, access) work for any `T`; arithmetic
//! requires `T: Element`.

mod arithmetic;
mod core;

pub use core::Vector;
