use super::DataFrame;
use crate::core::VectorValue;
use crate::error::{ensure_in_bounds, Result};

/// 一行分の読み取り専用ビュー
///
/// 値は保持せず、アクセスのたびに各列から読み出す。
#[derive(Debug, Clone, Copy)]
pub struct DataFrameRow<'a> {
    frame: &'a DataFrame,
    index: usize,
}

impl<'a> DataFrameRow<'a> {
    pub(crate) fn new(frame: &'a DataFrame, index: usize) -> Self {
        DataFrameRow { frame, index }
    }

    /// 行番号
    pub fn index(&self) -> usize {
        self.index
    }

    /// セル数（列数）
    pub fn len(&self) -> usize {
        self.frame.column_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 列位置のセル
    pub fn get(&self, column: usize) -> Result<VectorValue> {
        ensure_in_bounds(column, self.frame.column_count())?;
        self.frame.columns[column].get_value(self.index)
    }

    /// 列名が最初に一致する列のセル
    pub fn get_by_name(&self, name: &str) -> Option<VectorValue> {
        self.frame
            .column(name)
            .and_then(|c| c.get_value(self.index).ok())
    }

    /// すべてのセルを列順に
    pub fn values(&self) -> Vec<VectorValue> {
        self.frame
            .columns
            .iter()
            .filter_map(|c| c.get_value(self.index).ok())
            .collect()
    }
}

/// 行のイテレータ
#[derive(Debug, Clone)]
pub struct Rows<'a> {
    frame: &'a DataFrame,
    next: usize,
    end: usize,
}

impl<'a> Rows<'a> {
    pub(crate) fn new(frame: &'a DataFrame) -> Self {
        Rows {
            frame,
            next: 0,
            end: frame.row_count(),
        }
    }
}

impl<'a> Iterator for Rows<'a> {
    type Item = DataFrameRow<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        let row = DataFrameRow::new(self.frame, self.next);
        self.next += 1;
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Rows<'_> {}
