//! Element type system for tmatrix containers
//!
//! This module provides the `Element` trait implemented by every scalar type
//! that can take part in vector and matrix arithmetic, along with the `DType`
//! tag used to name those types in diagnostics.

mod element;

pub use element::Element;

use std::fmt;

/// Runtime tag for the scalar types implementing [`Element`]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum DType {
    // Floating point types
    /// 64-bit floating point
    F64,
    /// 32-bit floating point
    F32,

    // Signed integer types
    /// 64-bit signed integer
    I64,
    /// 32-bit signed integer
    I32,
    /// 16-bit signed integer
    I16,
    /// 8-bit signed integer
    I8,
    /// Pointer-sized signed integer
    ISize,

    // Unsigned integer types
    /// 64-bit unsigned integer
    U64,
    /// 32-bit unsigned integer
    U32,
    /// 16-bit unsigned integer
    U16,
    /// 8-bit unsigned integer
    U8,
    /// Pointer-sized unsigned integer
    USize,
}

impl DType {
    /// Rust spelling of the type, used in error messages
    pub const fn short_name(self) -> &'static str {
        match self {
            Self::F64 => "f64",
            Self::F32 => "f32",
            Self::I64 => "i64",
            Self::I32 => "i32",
            Self::I16 => "i16",
            Self::I8 => "i8",
            Self::ISize => "isize",
            Self::U64 => "u64",
            Self::U32 => "u32",
            Self::U16 => "u16",
            Self::U8 => "u8",
            Self::USize => "usize",
        }
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dtype_display() {
        assert_eq!(DType::F64.to_string(), "f64");
        assert_eq!(DType::USize.to_string(), "usize");
    }
}
