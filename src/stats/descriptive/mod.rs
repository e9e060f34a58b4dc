// 記述統計モジュール

use crate::core::Numeric;
use crate::error::{ensure_same_length, Error, Result};

/// 記述統計量
#[derive(Debug, Clone, PartialEq)]
pub struct DescriptiveStats {
    /// データ数
    pub count: usize,
    /// 平均値
    pub mean: f64,
    /// 標準偏差（不偏推定量）
    pub std: f64,
    /// 最小値
    pub min: f64,
    /// 第1四分位点
    pub q1: f64,
    /// 中央値
    pub median: f64,
    /// 第3四分位点
    pub q3: f64,
    /// 最大値
    pub max: f64,
}

fn to_f64_vec<T: Numeric>(data: &[T]) -> Result<Vec<f64>> {
    data.iter()
        .map(|&v| crate::core::numeric::convert::<T, f64>(v))
        .collect()
}

/// 記述統計量を計算する
///
/// 要素は`f64`に変換して集計する。要素数1の場合の標準偏差は0。
pub fn describe<T: Numeric>(data: &[T]) -> Result<DescriptiveStats> {
    if data.is_empty() {
        return Err(Error::EmptySequence("describe of an empty sequence".into()));
    }

    let values = to_f64_vec(data)?;
    let count = values.len();

    // 平均値の計算
    let mean = values.iter().sum::<f64>() / count as f64;

    // 標準偏差の計算（不偏推定量）
    let variance = if count > 1 {
        let sum_squared_diff = values.iter().map(|&x| (x - mean).powi(2)).sum::<f64>();
        sum_squared_diff / (count - 1) as f64
    } else {
        0.0
    };
    let std = variance.sqrt();

    // データをソートして分位数を計算
    let mut sorted = values;
    sorted.sort_by(|a, b| a.total_cmp(b));

    Ok(DescriptiveStats {
        count,
        mean,
        std,
        min: sorted[0],
        q1: percentile_sorted(&sorted, 0.25),
        median: percentile_sorted(&sorted, 0.5),
        q3: percentile_sorted(&sorted, 0.75),
        max: sorted[count - 1],
    })
}

/// パーセンタイルを線形補間で計算する（`p`は0.0〜1.0）
pub fn percentile<T: Numeric>(data: &[T], p: f64) -> Result<f64> {
    if data.is_empty() {
        return Err(Error::EmptySequence("percentile of an empty sequence".into()));
    }
    if !(0.0..=1.0).contains(&p) {
        return Err(Error::InvalidArgument(format!(
            "percentile {} is outside 0.0..=1.0",
            p
        )));
    }
    let mut sorted = to_f64_vec(data)?;
    sorted.sort_by(|a, b| a.total_cmp(b));
    Ok(percentile_sorted(&sorted, p))
}

fn percentile_sorted(sorted_data: &[f64], p: f64) -> f64 {
    let n = sorted_data.len();
    let idx = p * (n - 1) as f64;
    let idx_floor = idx.floor() as usize;
    let idx_ceil = idx.ceil() as usize;

    if idx_floor == idx_ceil {
        return sorted_data[idx_floor];
    }

    let weight_ceil = idx - idx_floor as f64;
    let weight_floor = 1.0 - weight_ceil;

    sorted_data[idx_floor] * weight_floor + sorted_data[idx_ceil] * weight_ceil
}

fn paired_means<T: Numeric, U: Numeric>(x: &[T], y: &[U]) -> Result<(Vec<f64>, Vec<f64>, f64, f64)> {
    ensure_same_length(x.len(), y.len())?;
    if x.is_empty() {
        return Err(Error::EmptySequence("paired statistic of empty sequences".into()));
    }
    if x.len() <= 1 {
        return Err(Error::InsufficientData {
            required: 2,
            actual: x.len(),
        });
    }

    let x = to_f64_vec(x)?;
    let y = to_f64_vec(y)?;
    let n = x.len() as f64;
    let mean_x = x.iter().sum::<f64>() / n;
    let mean_y = y.iter().sum::<f64>() / n;
    Ok((x, y, mean_x, mean_y))
}

/// 共分散（不偏推定量）
pub fn covariance<T: Numeric, U: Numeric>(x: &[T], y: &[U]) -> Result<f64> {
    let (x, y, mean_x, mean_y) = paired_means(x, y)?;

    let cov = x
        .iter()
        .zip(y.iter())
        .map(|(&xi, &yi)| (xi - mean_x) * (yi - mean_y))
        .sum::<f64>()
        / (x.len() - 1) as f64;

    Ok(cov)
}

/// ピアソンの相関係数
pub fn correlation<T: Numeric, U: Numeric>(x: &[T], y: &[U]) -> Result<f64> {
    let (x, y, mean_x, mean_y) = paired_means(x, y)?;

    // 分子: Σ(xi - x̄)(yi - ȳ)
    let numerator = x
        .iter()
        .zip(y.iter())
        .map(|(&xi, &yi)| (xi - mean_x) * (yi - mean_y))
        .sum::<f64>();

    // 分母: √[Σ(xi - x̄)² * Σ(yi - ȳ)²]
    let sum_squared_diff_x = x.iter().map(|&xi| (xi - mean_x).powi(2)).sum::<f64>();
    let sum_squared_diff_y = y.iter().map(|&yi| (yi - mean_y).powi(2)).sum::<f64>();

    let denominator = (sum_squared_diff_x * sum_squared_diff_y).sqrt();

    if denominator.abs() < f64::EPSILON {
        return Err(Error::InvalidArgument(
            "correlation is undefined when a variance is zero".into(),
        ));
    }

    Ok(numerator / denominator)
}
