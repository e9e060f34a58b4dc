use std::fmt::{Debug, Display};
use std::iter::Sum;

use num_traits::{Bounded, Num, NumCast};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::core::data_type::DataType;
use crate::core::value::VectorValue;
use crate::dataframe::Column;
use crate::error::{Error, Result};
use crate::series::Series;

/// Numeric capability bound shared by every element type.
///
/// Arithmetic, ordering, zero/one and min/max bounds come from `num_traits`.
/// The remaining methods cover what the primitive types disagree on:
/// NaN detection, overflow-checked accumulation, a lookup key usable for
/// hashing (floats are not `Hash`), and the mapping into the closed sum types
/// used for row cells and frame columns.
pub trait Numeric:
    Copy
    + Debug
    + Display
    + Default
    + PartialEq
    + PartialOrd
    + Num
    + NumCast
    + Bounded
    + Sum
    + Send
    + Sync
    + Serialize
    + DeserializeOwned
    + 'static
{
    /// Tag identifying the element type
    const DATA_TYPE: DataType;

    /// `true` only for floating point NaN
    fn is_nan(self) -> bool;

    /// Addition that reports overflow instead of wrapping or panicking.
    /// Floating point addition never fails (it saturates to infinity).
    fn checked_accumulate(self, rhs: Self) -> Option<Self>;

    /// Addition that wraps around on integral overflow instead of panicking
    fn wrapping_accumulate(self, rhs: Self) -> Self;

    /// Subtraction that reports integral overflow
    fn checked_difference(self, rhs: Self) -> Option<Self>;

    /// Multiplication that reports integral overflow
    fn checked_product(self, rhs: Self) -> Option<Self>;

    /// Division that reports integral overflow (`MIN / -1`) and division by
    /// zero. Floating point division follows IEEE 754 and never fails.
    fn checked_quotient(self, rhs: Self) -> Option<Self>;

    /// Key with value equality semantics: all NaNs share one key and
    /// `-0.0` maps to the key of `0.0`.
    fn lookup_key(self) -> u128;

    /// Wraps the value in a tagged cell
    fn into_value(self) -> VectorValue;

    /// Extracts the value from a tagged cell of the same kind
    fn from_value(value: &VectorValue) -> Option<Self>;

    /// Wraps a typed series into a frame column
    fn into_column(series: Series<Self>) -> Column;

    /// Borrows the typed series held by a column of the same kind
    fn series_ref(column: &Column) -> Option<&Series<Self>>;

    /// Mutably borrows the typed series held by a column of the same kind
    fn series_mut(column: &mut Column) -> Option<&mut Series<Self>>;
}

/// Converts between numeric types, failing when the value is not representable
#[inline]
pub(crate) fn convert<T: Numeric, A: Numeric>(value: T) -> Result<A> {
    <A as NumCast>::from(value).ok_or_else(|| {
        Error::Cast(format!(
            "{} ({}) is not representable as {}",
            value,
            T::DATA_TYPE,
            A::DATA_TYPE
        ))
    })
}

/// Converts a length into the accumulator type
#[inline]
pub(crate) fn convert_count<A: Numeric>(count: usize) -> Result<A> {
    <A as NumCast>::from(count).ok_or_else(|| {
        Error::Cast(format!(
            "element count {} is not representable as {}",
            count,
            A::DATA_TYPE
        ))
    })
}

macro_rules! impl_numeric_common {
    ($t:ty, $variant:ident) => {
        const DATA_TYPE: DataType = DataType::$variant;

        #[inline]
        fn into_value(self) -> VectorValue {
            VectorValue::$variant(self)
        }

        #[inline]
        fn from_value(value: &VectorValue) -> Option<Self> {
            match value {
                VectorValue::$variant(v) => Some(*v),
                _ => None,
            }
        }

        #[inline]
        fn into_column(series: Series<Self>) -> Column {
            Column::$variant(series)
        }

        #[inline]
        fn series_ref(column: &Column) -> Option<&Series<Self>> {
            match column {
                Column::$variant(s) => Some(s),
                _ => None,
            }
        }

        #[inline]
        fn series_mut(column: &mut Column) -> Option<&mut Series<Self>> {
            match column {
                Column::$variant(s) => Some(s),
                _ => None,
            }
        }
    };
}

macro_rules! impl_numeric_integer {
    ($($t:ty => $variant:ident),* $(,)?) => {
        $(
            impl Numeric for $t {
                impl_numeric_common!($t, $variant);

                #[inline]
                fn is_nan(self) -> bool {
                    false
                }

                #[inline]
                fn checked_accumulate(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_add(self, rhs)
                }

                #[inline]
                fn wrapping_accumulate(self, rhs: Self) -> Self {
                    <$t>::wrapping_add(self, rhs)
                }

                #[inline]
                fn checked_difference(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_sub(self, rhs)
                }

                #[inline]
                fn checked_product(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_mul(self, rhs)
                }

                #[inline]
                fn checked_quotient(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_div(self, rhs)
                }

                #[inline]
                fn lookup_key(self) -> u128 {
                    self as u128
                }
            }
        )*
    };
}

macro_rules! impl_numeric_float {
    ($($t:ty => $variant:ident),* $(,)?) => {
        $(
            impl Numeric for $t {
                impl_numeric_common!($t, $variant);

                #[inline]
                fn is_nan(self) -> bool {
                    <$t>::is_nan(self)
                }

                #[inline]
                fn checked_accumulate(self, rhs: Self) -> Option<Self> {
                    Some(self + rhs)
                }

                #[inline]
                fn wrapping_accumulate(self, rhs: Self) -> Self {
                    self + rhs
                }

                #[inline]
                fn checked_difference(self, rhs: Self) -> Option<Self> {
                    Some(self - rhs)
                }

                #[inline]
                fn checked_product(self, rhs: Self) -> Option<Self> {
                    Some(self * rhs)
                }

                #[inline]
                fn checked_quotient(self, rhs: Self) -> Option<Self> {
                    Some(self / rhs)
                }

                #[inline]
                fn lookup_key(self) -> u128 {
                    if <$t>::is_nan(self) {
                        u128::MAX
                    } else if self == 0.0 {
                        0
                    } else {
                        self.to_bits() as u128
                    }
                }
            }
        )*
    };
}

impl_numeric_integer!(
    i8 => Int8,
    i16 => Int16,
    i32 => Int32,
    i64 => Int64,
    i128 => Int128,
    u8 => UInt8,
    u16 => UInt16,
    u32 => UInt32,
    u64 => UInt64,
    u128 => UInt128,
);

impl_numeric_float!(f32 => Float32, f64 => Float64);
