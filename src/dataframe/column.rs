use serde::{Deserialize, Serialize};

use crate::core::{DataType, Numeric, VectorValue};
use crate::error::Result;
use crate::series::Series;

/// 列を表す列挙型
///
/// サポートするすべての要素型のSeriesを保持する。シリアライズ時は
/// 要素型ラベル（`"f64"`など）をタグとして使う。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Column {
    #[serde(rename = "i8")]
    Int8(Series<i8>),
    #[serde(rename = "i16")]
    Int16(Series<i16>),
    #[serde(rename = "i32")]
    Int32(Series<i32>),
    #[serde(rename = "i64")]
    Int64(Series<i64>),
    #[serde(rename = "i128")]
    Int128(Series<i128>),
    #[serde(rename = "u8")]
    UInt8(Series<u8>),
    #[serde(rename = "u16")]
    UInt16(Series<u16>),
    #[serde(rename = "u32")]
    UInt32(Series<u32>),
    #[serde(rename = "u64")]
    UInt64(Series<u64>),
    #[serde(rename = "u128")]
    UInt128(Series<u128>),
    #[serde(rename = "f32")]
    Float32(Series<f32>),
    #[serde(rename = "f64")]
    Float64(Series<f64>),
}

// Runs `$body` with `$s` bound to the typed series inside the column
macro_rules! with_series {
    ($column:expr, $s:ident => $body:expr) => {
        match $column {
            Column::Int8($s) => $body,
            Column::Int16($s) => $body,
            Column::Int32($s) => $body,
            Column::Int64($s) => $body,
            Column::Int128($s) => $body,
            Column::UInt8($s) => $body,
            Column::UInt16($s) => $body,
            Column::UInt32($s) => $body,
            Column::UInt64($s) => $body,
            Column::UInt128($s) => $body,
            Column::Float32($s) => $body,
            Column::Float64($s) => $body,
        }
    };
}

impl Column {
    /// 列の名前を返す
    pub fn name(&self) -> Option<&str> {
        with_series!(self, s => s.name())
    }

    pub fn set_name(&mut self, name: Option<String>) {
        with_series!(self, s => s.set_name(name))
    }

    /// 列の長さを返す
    pub fn len(&self) -> usize {
        with_series!(self, s => s.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 列の要素型を返す
    pub fn data_type(&self) -> DataType {
        with_series!(self, s => s.data_type())
    }

    /// 位置の値をタグ付きの値として取得
    pub fn get_value(&self, index: usize) -> Result<VectorValue> {
        with_series!(self, s => s.get(index).map(Numeric::into_value))
    }

    /// 型付きのSeriesとして借用（型が一致しない場合は`None`）
    pub fn as_series<T: Numeric>(&self) -> Option<&Series<T>> {
        T::series_ref(self)
    }

    pub fn as_series_mut<T: Numeric>(&mut self) -> Option<&mut Series<T>> {
        T::series_mut(self)
    }
}

impl<T: Numeric> From<Series<T>> for Column {
    fn from(series: Series<T>) -> Self {
        T::into_column(series)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch() {
        let column = Column::from(Series::named("x", vec![1.5f32, 2.5]));
        assert_eq!(column.name(), Some("x"));
        assert_eq!(column.len(), 2);
        assert_eq!(column.data_type(), DataType::Float32);
        assert_eq!(column.get_value(1).unwrap(), VectorValue::Float32(2.5));
        assert!(column.get_value(2).is_err());
    }

    #[test]
    fn test_typed_access() {
        let mut column = Column::from(Series::named("n", vec![1u16, 2]));
        assert!(column.as_series::<u16>().is_some());
        assert!(column.as_series::<i16>().is_none());
        column.as_series_mut::<u16>().unwrap().set(0, 9).unwrap();
        assert_eq!(column.get_value(0).unwrap(), VectorValue::UInt16(9));
    }
}
