// 特定の警告を無効化
#![allow(clippy::needless_return)]
#![allow(clippy::len_without_is_empty)]
#![allow(clippy::new_without_default)]

pub mod category;
pub mod core;
pub mod dataframe;
pub mod error;
pub mod matrix;
pub mod na;
pub mod point;
pub mod series;
pub mod stats;
pub mod vector;

// Re-export commonly used types
pub use crate::category::{CategorySet, DataLabelCollection, ValueLabelCollection};
pub use crate::core::{
    CategoryConstrained, DataType, Indexable, Lengthed, MutablyIndexable, Numeric, Variant,
    VectorValue,
};
pub use dataframe::{Column, DataFrame, DataFrameRow};
pub use error::{Error, NumframeError, Result};
pub use matrix::{Matrix, MatrixIndex, ReadOnlyMatrix};
pub use na::NA;
pub use point::{DataPoint, DataPoint3D};
pub use series::{ReadOnlySeries, Series};
pub use stats::{SumOptions, SummationCompensation};
pub use vector::{ReadOnlySpanVector, ReadOnlyVector, SpanVector, Vector};

// Export version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
