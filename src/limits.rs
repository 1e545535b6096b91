//! Construction limits and size/index validation
//!
//! Sizes and checked indices are accepted as any primitive integer so that a
//! negative request is reported as an error instead of being unrepresentable.

use crate::error::{Error, Position, Result};

/// Maximum length of a [`Vector`](crate::vector::Vector)
pub const MAX_VECTOR_SIZE: usize = 100_000_000;

/// Maximum dimension of a [`Matrix`](crate::matrix::Matrix)
pub const MAX_MATRIX_SIZE: usize = 10_000;

/// Integer types usable as a size or a checked index
pub trait Offset: Copy {
    /// Converts to `usize`, or `None` when negative or too large
    fn to_offset(self) -> Option<usize>;

    /// The value as written by the caller, for error reports
    fn to_signed(self) -> i128;
}

macro_rules! impl_offset {
    ($($ty:ty),*) => {
        $(
            impl Offset for $ty {
                #[inline]
                fn to_offset(self) -> Option<usize> {
                    usize::try_from(self).ok()
                }

                #[inline]
                fn to_signed(self) -> i128 {
                    self as i128
                }
            }
        )*
    };
}

impl_offset!(usize, u64, u32, u16, u8, isize, i64, i32, i16, i8);

/// Validates a requested length against `1..=max`
pub(crate) fn check_size<S: Offset>(size: S, max: usize) -> Result<usize> {
    match size.to_offset() {
        Some(n) if (1..=max).contains(&n) => Ok(n),
        _ => Err(Error::invalid_size(size.to_signed(), max)),
    }
}

/// Validates a checked index against `0..size`
#[inline]
pub(crate) fn check_index<I: Offset>(index: I, size: usize) -> Result<usize> {
    match index.to_offset() {
        Some(i) if i < size => Ok(i),
        _ => Err(Error::index_out_of_range(Position::Index(index.to_signed()), size)),
    }
}
