use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Identifies the element type stored in a vector, series or value cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataType {
    #[serde(rename = "i8")]
    Int8,
    #[serde(rename = "i16")]
    Int16,
    #[serde(rename = "i32")]
    Int32,
    #[serde(rename = "i64")]
    Int64,
    #[serde(rename = "i128")]
    Int128,
    #[serde(rename = "u8")]
    UInt8,
    #[serde(rename = "u16")]
    UInt16,
    #[serde(rename = "u32")]
    UInt32,
    #[serde(rename = "u64")]
    UInt64,
    #[serde(rename = "u128")]
    UInt128,
    #[serde(rename = "f32")]
    Float32,
    #[serde(rename = "f64")]
    Float64,
}

impl DataType {
    /// All supported element types
    pub const ALL: [DataType; 12] = [
        DataType::Int8,
        DataType::Int16,
        DataType::Int32,
        DataType::Int64,
        DataType::Int128,
        DataType::UInt8,
        DataType::UInt16,
        DataType::UInt32,
        DataType::UInt64,
        DataType::UInt128,
        DataType::Float32,
        DataType::Float64,
    ];

    /// Label used for this type in serialized output
    pub fn label(&self) -> &'static str {
        match self {
            DataType::Int8 => "i8",
            DataType::Int16 => "i16",
            DataType::Int32 => "i32",
            DataType::Int64 => "i64",
            DataType::Int128 => "i128",
            DataType::UInt8 => "u8",
            DataType::UInt16 => "u16",
            DataType::UInt32 => "u32",
            DataType::UInt64 => "u64",
            DataType::UInt128 => "u128",
            DataType::Float32 => "f32",
            DataType::Float64 => "f64",
        }
    }

    pub fn is_floating_point(&self) -> bool {
        matches!(self, DataType::Float32 | DataType::Float64)
    }

    pub fn is_signed(&self) -> bool {
        !matches!(
            self,
            DataType::UInt8
                | DataType::UInt16
                | DataType::UInt32
                | DataType::UInt64
                | DataType::UInt128
        )
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DataType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        DataType::ALL
            .iter()
            .copied()
            .find(|t| t.label() == s)
            .ok_or_else(|| Error::InvalidArgument(format!("unknown data type label '{}'", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_round_trip() {
        for t in DataType::ALL {
            assert_eq!(t.label().parse::<DataType>().unwrap(), t);
        }
        assert!("decimal".parse::<DataType>().is_err());
    }

    #[test]
    fn test_classification() {
        assert!(DataType::Float32.is_floating_point());
        assert!(!DataType::Int64.is_floating_point());
        assert!(!DataType::UInt16.is_signed());
        assert!(DataType::Int16.is_signed());
    }
}
