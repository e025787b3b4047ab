//! Matrix element type constraints
//!
//! This module defines the trait that constrains what types can be
//! stored as matrix elements. Only signed integers are supported.

use core::fmt::{Debug, Display};
use core::hash::Hash;
use core::str::FromStr;

use crate::format::header::DataType;

/// Trait for types that can be stored as matrix elements
///
/// Elements are parsed from and rendered to decimal text, and all arithmetic
/// is checked so that overflow surfaces as an error instead of wrapping.
pub trait MatrixElement:
    Copy + PartialEq + Eq + Hash + Debug + Display + FromStr + Sized
{
    /// The additive identity, never stored
    const ZERO: Self;

    /// Get the [`DataType`] tag for this element type
    fn data_type() -> DataType;

    /// True if the value is the additive identity
    fn is_zero(self) -> bool {
        self == Self::ZERO
    }

    /// Addition, `None` on overflow
    fn checked_add(self, rhs: Self) -> Option<Self>;

    /// Subtraction, `None` on overflow
    fn checked_sub(self, rhs: Self) -> Option<Self>;

    /// Multiplication, `None` on overflow
    fn checked_mul(self, rhs: Self) -> Option<Self>;
}

macro_rules! impl_matrix_element {
    ($ty:ty, $data_type:expr) => {
        impl MatrixElement for $ty {
            const ZERO: Self = 0;

            fn data_type() -> DataType {
                $data_type
            }

            fn checked_add(self, rhs: Self) -> Option<Self> {
                <$ty>::checked_add(self, rhs)
            }

            fn checked_sub(self, rhs: Self) -> Option<Self> {
                <$ty>::checked_sub(self, rhs)
            }

            fn checked_mul(self, rhs: Self) -> Option<Self> {
                <$ty>::checked_mul(self, rhs)
            }
        }
    };
}

impl_matrix_element!(i32, DataType::I32);
impl_matrix_element!(i64, DataType::I64);
impl_matrix_element!(i128, DataType::I128);
