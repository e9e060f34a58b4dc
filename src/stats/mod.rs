// Numframe 統計モジュール
//
// ビュー上の純粋関数として集計を提供します。
// `*_as`系の関数は要素型`T`とは別のアキュムレータ型`A`で集計し、
// オーバーフローや精度を呼び出し側が制御できます。

pub mod descriptive;
mod extrema;
mod means;
mod missing;
mod mode;
mod moments;
mod options;
mod sum;

pub use descriptive::{correlation, covariance, describe, percentile, DescriptiveStats};
pub use extrema::{max, max_as, min, min_as};
pub use means::{geometric_mean, geometric_mean_as, harmonic_mean, harmonic_mean_as};
pub use missing::{count_missing, mean_present_as, sum_present_as};
pub use mode::{mode, mode_as};
pub use moments::{
    mean, mean_as, population_standard_deviation, population_standard_deviation_as,
    population_variance, population_variance_as, standard_deviation, standard_deviation_as,
    variance, variance_as,
};
pub use options::{SumOptions, SumOptionsBuilder, SummationCompensation};
pub use sum::{sum, sum_as, sum_checked, sum_checked_as, sum_float_with, sum_float_with_as};
