//! Square matrix container
//!
//! `Matrix<T>` owns `N` row vectors of length `N`, reusing `Vector`'s storage,
//! copy and move machinery rather than reimplementing it.

mod arithmetic;
mod core;

pub use core::Matrix;
