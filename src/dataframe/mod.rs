// DataFrame: 同じ長さのSeriesを順序付きで保持する列の集合

mod column;
mod record;
mod row;

use serde::{Deserialize, Serialize};

use crate::core::Numeric;
use crate::error::{ensure_in_bounds, ensure_same_length, Error, Result};
use crate::series::Series;

pub use column::Column;
pub use row::{DataFrameRow, Rows};

use self::record::DataFrameRecord;

/// DataFrame構造体: 名前付きの列の順序付き集合
///
/// 列が1つ以上ある場合、すべての列の長さは等しい。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "DataFrameRecord", into = "DataFrameRecord")]
pub struct DataFrame {
    /// 名前（オプション）
    name: Option<String>,

    /// 列データ
    columns: Vec<Column>,
}

impl DataFrame {
    /// 空のDataFrameを作成
    pub fn new() -> Self {
        DataFrame {
            name: None,
            columns: Vec::new(),
        }
    }

    /// 名前付きの空のDataFrameを作成
    pub fn with_name(name: impl Into<String>) -> Self {
        DataFrame {
            name: Some(name.into()),
            columns: Vec::new(),
        }
    }

    /// 列の集合からDataFrameを作成
    pub fn from_columns(columns: Vec<Column>) -> Result<Self> {
        let mut frame = Self::new();
        for column in columns {
            frame.add_column(column)?;
        }
        Ok(frame)
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, name: Option<String>) {
        self.name = name;
    }

    /// 列数
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// 行数（列の共通の長さ、列がない場合は0）
    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, Column::len)
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    // `skip` is the position being replaced, if any
    fn check_length(&self, column: &Column, skip: Option<usize>) -> Result<()> {
        let existing = self
            .columns
            .iter()
            .enumerate()
            .find(|(i, _)| Some(*i) != skip)
            .map(|(_, c)| c.len());

        if let Some(expected) = existing {
            if let Err(e) = ensure_same_length(expected, column.len()) {
                log::warn!(
                    "rejected column {:?}: {} rows, frame has {}",
                    column.name(),
                    column.len(),
                    expected
                );
                return Err(e);
            }
        }
        Ok(())
    }

    /// 列を末尾に追加
    ///
    /// 長さが既存の列と異なる場合は`LengthMismatch`となり、列は追加されない。
    /// 名前のない列には位置番号が名前として付けられる。
    pub fn add_column(&mut self, column: impl Into<Column>) -> Result<()> {
        let position = self.columns.len();
        self.insert_column(position, column)
    }

    /// 列を指定位置に挿入
    pub fn insert_column(&mut self, index: usize, column: impl Into<Column>) -> Result<()> {
        let mut column = column.into();
        ensure_in_bounds(index, self.columns.len() + 1)?;
        self.check_length(&column, None)?;

        if column.name().is_none() {
            column.set_name(Some(index.to_string()));
        }
        log::debug!(
            "inserted column {:?} ({}) at {}",
            column.name(),
            column.data_type(),
            index
        );
        self.columns.insert(index, column);
        Ok(())
    }

    /// 名前が一致する最初の列を置き換える（存在しない場合は追加）
    pub fn set_column(&mut self, name: &str, column: impl Into<Column>) -> Result<()> {
        let mut column = column.into();
        column.set_name(Some(name.to_string()));

        match self.position(name) {
            Some(index) => {
                self.check_length(&column, Some(index))?;
                log::debug!("replaced column '{}' at {}", name, index);
                self.columns[index] = column;
                Ok(())
            }
            None => self.add_column(column),
        }
    }

    /// 名前が一致する最初の列を削除して返す
    pub fn remove_column(&mut self, name: &str) -> Option<Column> {
        let index = self.position(name)?;
        log::debug!("removed column '{}' at {}", name, index);
        Some(self.columns.remove(index))
    }

    /// すべての列を削除
    pub fn clear(&mut self) {
        self.columns.clear();
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name() == Some(name))
    }

    /// 名前が一致する最初の列（存在しない場合は`None`）
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.position(name).map(|i| &self.columns[i])
    }

    pub fn column_mut(&mut self, name: &str) -> Option<&mut Column> {
        let index = self.position(name)?;
        Some(&mut self.columns[index])
    }

    /// 位置の列
    pub fn column_at(&self, index: usize) -> Result<&Column> {
        ensure_in_bounds(index, self.columns.len())?;
        Ok(&self.columns[index])
    }

    /// 型付きの列
    ///
    /// 列が存在しない場合は`None`、型が異なる場合は`InvalidArgument`。
    pub fn series<T: Numeric>(&self, name: &str) -> Result<Option<&Series<T>>> {
        match self.column(name) {
            None => Ok(None),
            Some(column) => column.as_series::<T>().map(Some).ok_or_else(|| {
                Error::InvalidArgument(format!(
                    "column '{}' holds {}, not {}",
                    name,
                    column.data_type(),
                    T::DATA_TYPE
                ))
            }),
        }
    }

    pub fn series_mut<T: Numeric>(&mut self, name: &str) -> Result<Option<&mut Series<T>>> {
        match self.column_mut(name) {
            None => Ok(None),
            Some(column) => {
                let data_type = column.data_type();
                column.as_series_mut::<T>().map(Some).ok_or_else(|| {
                    Error::InvalidArgument(format!(
                        "column '{}' holds {}, not {}",
                        name,
                        data_type,
                        T::DATA_TYPE
                    ))
                })
            }
        }
    }

    /// 列名の一覧
    pub fn column_names(&self) -> Vec<Option<&str>> {
        self.columns.iter().map(Column::name).collect()
    }

    pub fn columns(&self) -> std::slice::Iter<'_, Column> {
        self.columns.iter()
    }

    /// 行ビュー（`index >= row_count`の場合は`IndexOutOfBounds`）
    pub fn row(&self, index: usize) -> Result<DataFrameRow<'_>> {
        ensure_in_bounds(index, self.row_count())?;
        Ok(DataFrameRow::new(self, index))
    }

    /// 行のイテレータ
    pub fn rows(&self) -> Rows<'_> {
        Rows::new(self)
    }

    /// JSON文字列に変換
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// JSON文字列から復元
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
