//! Constrained value sets and value/label dictionaries

mod labels;
mod set;

pub use labels::{DataLabelCollection, ValueLabel, ValueLabelCollection};
pub use set::CategorySet;
