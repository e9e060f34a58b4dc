use std::cmp::Ordering;
use std::fmt::{self, Display};
use std::hash::{Hash, Hasher};

use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::core::data_type::DataType;
use crate::core::numeric::Numeric;
use crate::error::{Error, Result};

/// A single cell value of any supported element type.
///
/// Produced by row projection so that every column can be read uniformly
/// regardless of its element type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum VectorValue {
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    Int128(i128),
    UInt8(u8),
    UInt16(u16),
    UInt32(u32),
    UInt64(u64),
    UInt128(u128),
    Float32(f32),
    Float64(f64),
}

// Dispatches `$body` with `$v` bound to the inner value of any variant
macro_rules! with_value {
    ($value:expr, $v:ident => $body:expr) => {
        match $value {
            VectorValue::Int8($v) => $body,
            VectorValue::Int16($v) => $body,
            VectorValue::Int32($v) => $body,
            VectorValue::Int64($v) => $body,
            VectorValue::Int128($v) => $body,
            VectorValue::UInt8($v) => $body,
            VectorValue::UInt16($v) => $body,
            VectorValue::UInt32($v) => $body,
            VectorValue::UInt64($v) => $body,
            VectorValue::UInt128($v) => $body,
            VectorValue::Float32($v) => $body,
            VectorValue::Float64($v) => $body,
        }
    };
}

impl VectorValue {
    /// Element type of the held value
    pub fn data_type(&self) -> DataType {
        with_value!(self, v => value_type_of(v))
    }

    /// The held value as `T`; fails with `InvalidArgument` for any other kind
    pub fn get<T: Numeric>(&self) -> Result<T> {
        T::from_value(self).ok_or_else(|| {
            Error::InvalidArgument(format!(
                "cannot read a {} cell as {}",
                self.data_type(),
                T::DATA_TYPE
            ))
        })
    }

    pub fn as_i32(&self) -> Result<i32> {
        self.get()
    }

    pub fn as_i64(&self) -> Result<i64> {
        self.get()
    }

    pub fn as_f32(&self) -> Result<f32> {
        self.get()
    }

    pub fn as_f64(&self) -> Result<f64> {
        self.get()
    }

    /// Lossy widening to `f64`, available for every kind
    pub fn to_f64(&self) -> f64 {
        with_value!(self, v => v.to_f64().unwrap_or(f64::NAN))
    }

    pub fn is_nan(&self) -> bool {
        with_value!(self, v => Numeric::is_nan(*v))
    }
}

fn value_type_of<T: Numeric>(_: &T) -> DataType {
    T::DATA_TYPE
}

impl Display for VectorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        with_value!(self, v => write!(f, "{}", v))
    }
}

macro_rules! impl_from_for_value {
    ($($t:ty),*) => {
        $(
            impl From<$t> for VectorValue {
                fn from(value: $t) -> Self {
                    value.into_value()
                }
            }
        )*
    };
}

impl_from_for_value!(i8, i16, i32, i64, i128, u8, u16, u32, u64, u128, f32, f64);

/// Tagged metadata value attached to a series through its references map.
///
/// Floats compare by bit pattern (`total_cmp`) so that `Variant` is a total
/// order and can be used as a map key.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Variant {
    #[default]
    Null,
    Integer(i64),
    Float(f64),
    Text(String),
    Boolean(bool),
}

impl Variant {
    pub fn is_null(&self) -> bool {
        matches!(self, Variant::Null)
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Variant::Integer(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Variant::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Variant::Text(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            Variant::Boolean(v) => Some(*v),
            _ => None,
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Variant::Null => 0,
            Variant::Boolean(_) => 1,
            Variant::Integer(_) => 2,
            Variant::Float(_) => 3,
            Variant::Text(_) => 4,
        }
    }
}

impl Ord for Variant {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Variant::Null, Variant::Null) => Ordering::Equal,
            (Variant::Boolean(a), Variant::Boolean(b)) => a.cmp(b),
            (Variant::Integer(a), Variant::Integer(b)) => a.cmp(b),
            (Variant::Float(a), Variant::Float(b)) => a.total_cmp(b),
            (Variant::Text(a), Variant::Text(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl PartialOrd for Variant {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Variant {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Variant {}

impl Hash for Variant {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rank().hash(state);
        match self {
            Variant::Null => {}
            Variant::Boolean(v) => v.hash(state),
            Variant::Integer(v) => v.hash(state),
            Variant::Float(v) => v.to_bits().hash(state),
            Variant::Text(v) => v.hash(state),
        }
    }
}

impl Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Null => write!(f, "null"),
            Variant::Integer(v) => write!(f, "{}", v),
            Variant::Float(v) => write!(f, "{}", v),
            Variant::Text(v) => write!(f, "{}", v),
            Variant::Boolean(v) => write!(f, "{}", v),
        }
    }
}

impl From<i64> for Variant {
    fn from(value: i64) -> Self {
        Variant::Integer(value)
    }
}

impl From<f64> for Variant {
    fn from(value: f64) -> Self {
        Variant::Float(value)
    }
}

impl From<bool> for Variant {
    fn from(value: bool) -> Self {
        Variant::Boolean(value)
    }
}

impl From<&str> for Variant {
    fn from(value: &str) -> Self {
        Variant::Text(value.to_string())
    }
}

impl From<String> for Variant {
    fn from(value: String) -> Self {
        Variant::Text(value)
    }
}
