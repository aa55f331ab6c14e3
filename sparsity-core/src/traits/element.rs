//! Matrix element type constraints
//!
//! This module defines the trait that constrains what types can be
//! stored as matrix elements.

use crate::format::DataType;

/// Trait for types that can be stored as matrix elements
///
/// All matrix element types must be:
/// - Copy: Can be copied without allocation
/// - PartialEq: Zero detection relies on equality with [`MatrixElement::zero`]
/// - Send + Sync: Matrices can be shared across threads
pub trait MatrixElement: Copy + PartialEq + Send + Sync + Sized + core::fmt::Debug {
    /// Get the DataType representation for this element type
    fn data_type() -> DataType;

    /// The additive identity
    fn zero() -> Self;

    /// Whether this value counts as a zero entry
    ///
    /// Floating point `-0.0` is zero; `NaN` is not.
    fn is_zero(self) -> bool {
        self == Self::zero()
    }

    /// Sum two values, used when coalescing duplicate coordinates
    ///
    /// Integer types wrap on overflow.
    fn accumulate(self, other: Self) -> Self;
}

impl MatrixElement for f32 {
    fn data_type() -> DataType {
        DataType::F32
    }

    fn zero() -> Self {
        0.0
    }

    fn accumulate(self, other: Self) -> Self {
        self + other
    }
}

impl MatrixElement for f64 {
    fn data_type() -> DataType {
        DataType::F64
    }

    fn zero() -> Self {
        0.0
    }

    fn accumulate(self, other: Self) -> Self {
        self + other
    }
}

macro_rules! impl_integer_element {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl MatrixElement for $ty {
                fn data_type() -> DataType {
                    DataType::$variant
                }

                fn zero() -> Self {
                    0
                }

                fn accumulate(self, other: Self) -> Self {
                    self.wrapping_add(other)
                }
            }
        )*
    };
}

impl_integer_element!(i32 => I32, i64 => I64, u32 => U32, u64 => U64);
