//! Element trait for scalar types stored in vectors and matrices

use super::DType;
use std::fmt::{Debug, Display};
use std::ops::{Add, Mul, Sub};
use std::str::FromStr;

/// Trait for scalar types that support container arithmetic
///
/// # Bounds
/// - `Copy + Default + Send + Sync + 'static` - plain values; `Default` is the
///   value new containers are filled with
/// - `PartialEq` - elementwise equality
/// - `Add + Sub + Mul` - arithmetic operations (Output = Self)
/// - `Display + FromStr` - the whitespace separated text format
///
/// Overflow follows the type's own arithmetic; integer accumulation is not
/// guarded.
pub trait Element:
    Copy
    + Default
    + Send
    + Sync
    + 'static
    + PartialEq
    + Debug
    + Display
    + FromStr
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
{
    /// The corresponding DType for this Rust type
    const DTYPE: DType;

    /// Additive identity
    fn zero() -> Self;

    /// Multiplicative identity
    fn one() -> Self;
}

macro_rules! impl_element {
    ($($ty:ty => $dtype:ident, $zero:expr, $one:expr;)*) => {
        $(
            impl Element for $ty {
                const DTYPE: DType = DType::$dtype;

                #[inline]
                fn zero() -> Self {
                    $zero
                }

                #[inline]
                fn one() -> Self {
                    $one
                }
            }
        )*
    };
}

impl_element! {
    f64 => F64, 0.0, 1.0;
    f32 => F32, 0.0, 1.0;
    i64 => I64, 0, 1;
    i32 => I32, 0, 1;
    i16 => I16, 0, 1;
    i8 => I8, 0, 1;
    isize => ISize, 0, 1;
    u64 => U64, 0, 1;
    u32 => U32, 0, 1;
    u16 => U16, 0, 1;
    u8 => U8, 0, 1;
    usize => USize, 0, 1;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identities() {
        assert_eq!(f64::zero(), 0.0);
        assert_eq!(i32::one(), 1);
        assert_eq!(u8::zero() + u8::one(), 1);
    }

    #[test]
    fn test_zero_matches_default() {
        assert_eq!(i64::zero(), i64::default());
        assert_eq!(f32::zero(), f32::default());
    }

    #[test]
    fn test_dtype_tags() {
        assert_eq!(<f32 as Element>::DTYPE, DType::F32);
        assert_eq!(<usize as Element>::DTYPE, DType::USize);
    }
}
