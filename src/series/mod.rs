mod read_only;
mod record;

use std::collections::BTreeMap;
use std::ops::Index;

use num_traits::Float;
use serde::{Deserialize, Serialize};

use crate::category::{CategorySet, ValueLabelCollection};
use crate::core::{CategoryConstrained, DataType, Indexable, Lengthed, Numeric, Variant};
use crate::error::{ensure_in_bounds, Error, Result};
use crate::stats;
use crate::vector::{ReadOnlySpanVector, Vector};

pub use self::read_only::ReadOnlySeries;
use self::record::SeriesRecord;

/// 参照メタデータ（任意のキーと値のペア）
pub type References = BTreeMap<Variant, Variant>;

/// Series構造体: 名前付きの一次元数値配列
///
/// カテゴリ制約が設定されている場合、すべての書き込みはカテゴリ集合の
/// メンバーであることを確認してから行われる。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(
    try_from = "SeriesRecord<T>",
    into = "SeriesRecord<T>",
    bound = "T: Numeric"
)]
pub struct Series<T: Numeric> {
    /// 名前（オプション）
    name: Option<String>,

    /// Seriesのデータ値
    vector: Vector<T>,

    /// 許可される値の集合
    categories: Option<CategorySet<T>>,

    /// 値とラベルの対応
    value_labels: Option<ValueLabelCollection<T>>,

    /// 参照メタデータ
    references: References,
}

impl<T: Numeric> Series<T> {
    /// 名前、ベクトル、参照メタデータから新しいSeriesを作成
    pub fn new(
        name: Option<String>,
        vector: impl Into<Vector<T>>,
        references: Option<References>,
    ) -> Self {
        Series {
            name,
            vector: vector.into(),
            categories: None,
            value_labels: None,
            references: references.unwrap_or_default(),
        }
    }

    /// 名前付きSeriesを作成
    pub fn named(name: impl Into<String>, vector: impl Into<Vector<T>>) -> Self {
        Self::new(Some(name.into()), vector, None)
    }

    /// カテゴリ制約を設定
    ///
    /// 既存の値がすべてカテゴリに含まれていない場合は`InvalidCategory`
    pub fn with_categories(mut self, categories: CategorySet<T>) -> Result<Self> {
        categories.check_all(self.vector.as_slice())?;
        self.categories = Some(categories);
        Ok(self)
    }

    /// 値ラベルを設定
    pub fn with_value_labels(mut self, labels: ValueLabelCollection<T>) -> Self {
        self.value_labels = Some(labels);
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, name: Option<String>) {
        self.name = name;
    }

    /// 要素型
    pub fn data_type(&self) -> DataType {
        T::DATA_TYPE
    }

    /// Seriesの長さを取得
    pub fn len(&self) -> usize {
        self.vector.len()
    }

    /// Seriesが空かどうか
    pub fn is_empty(&self) -> bool {
        self.vector.is_empty()
    }

    /// 位置から値を取得
    pub fn get(&self, index: usize) -> Result<T> {
        self.vector.get(index)
    }

    /// 位置に値を書き込む
    ///
    /// カテゴリ外の値は`InvalidCategory`となり、元の値は変更されない。
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        ensure_in_bounds(index, self.vector.len())?;
        if let Err(e) = self.check_category(value) {
            log::warn!(
                "rejected write of {} at {} in series {:?}",
                value,
                index,
                self.name
            );
            return Err(e);
        }
        self.vector.set(index, value)
    }

    /// 値のスライス
    pub fn values(&self) -> &[T] {
        self.vector.as_slice()
    }

    /// 値の可変スライス（カテゴリ制約のないSeriesのみ）
    pub fn values_mut(&mut self) -> Result<&mut [T]> {
        if self.categories.is_some() {
            return Err(Error::InvalidArgument(
                "a categorical series only accepts checked writes".into(),
            ));
        }
        Ok(self.vector.as_mut_slice())
    }

    pub fn vector(&self) -> &Vector<T> {
        &self.vector
    }

    /// ストレージを共有する読み取り専用ビュー
    pub fn as_read_only(&self) -> ReadOnlySeries<'_, T> {
        ReadOnlySeries::new(self)
    }

    pub fn as_read_only_span(&self) -> ReadOnlySpanVector<'_, T> {
        self.vector.as_read_only_span()
    }

    pub fn categories(&self) -> Option<&CategorySet<T>> {
        self.categories.as_ref()
    }

    pub fn value_labels(&self) -> Option<&ValueLabelCollection<T>> {
        self.value_labels.as_ref()
    }

    pub fn value_labels_mut(&mut self) -> Option<&mut ValueLabelCollection<T>> {
        self.value_labels.as_mut()
    }

    pub fn references(&self) -> &References {
        &self.references
    }

    pub fn references_mut(&mut self) -> &mut References {
        &mut self.references
    }

    /// 位置の値に対応するラベル
    pub fn label_of(&self, index: usize) -> Result<Option<&str>> {
        let value = self.get(index)?;
        Ok(self
            .value_labels
            .as_ref()
            .and_then(|labels| labels.try_get_label(value)))
    }

    /// 合計
    pub fn sum(&self) -> Result<T> {
        stats::sum(self.values())
    }

    /// 合計（アキュムレータ型を指定）
    pub fn sum_as<A: Numeric>(&self) -> Result<A> {
        stats::sum_as(self.values())
    }

    /// 平均値
    pub fn mean_as<A: Numeric>(&self) -> Result<A> {
        stats::mean_as(self.values())
    }

    pub fn min(&self) -> Result<T> {
        stats::min(self.values())
    }

    pub fn max(&self) -> Result<T> {
        stats::max(self.values())
    }

    /// 不偏分散
    pub fn variance_as<A: Numeric>(&self) -> Result<A> {
        stats::variance_as(self.values(), None)
    }

    /// 不偏標準偏差
    pub fn standard_deviation_as<A: Numeric + Float>(&self) -> Result<A> {
        stats::standard_deviation_as(self.values(), None)
    }

    /// 最頻値
    pub fn mode(&self) -> Result<T> {
        stats::mode(self.values())
    }

    /// 記述統計量
    pub fn describe(&self) -> Result<stats::DescriptiveStats> {
        stats::describe(self.values())
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

// 名前、値、カテゴリ、ラベルがすべて等しい場合に等しい
impl<T: Numeric> PartialEq for Series<T> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.vector == other.vector
            && self.categories == other.categories
            && self.value_labels == other.value_labels
    }
}

impl<T: Numeric> Index<usize> for Series<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.vector[index]
    }
}

impl<T: Numeric> Lengthed for Series<T> {
    fn len(&self) -> usize {
        self.vector.len()
    }
}

impl<T: Numeric> Indexable<T> for Series<T> {
    fn as_slice(&self) -> &[T] {
        self.vector.as_slice()
    }
}

impl<T: Numeric> CategoryConstrained<T> for Series<T> {
    fn category_set(&self) -> Option<&CategorySet<T>> {
        self.categories.as_ref()
    }
}

impl<T: Numeric> From<Vector<T>> for Series<T> {
    fn from(vector: Vector<T>) -> Self {
        Series::new(None, vector, None)
    }
}

impl<T: Numeric> From<Vec<T>> for Series<T> {
    fn from(values: Vec<T>) -> Self {
        Series::new(None, values, None)
    }
}
