// Wire form of a frame; deserialization runs the same length checks as `add_column`

use serde::{Deserialize, Serialize};

use super::{Column, DataFrame};
use crate::error::{Error, Result};

#[derive(Serialize, Deserialize)]
pub struct DataFrameRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    columns: Vec<Column>,
}

impl TryFrom<DataFrameRecord> for DataFrame {
    type Error = Error;

    fn try_from(record: DataFrameRecord) -> Result<Self> {
        let mut frame = DataFrame::from_columns(record.columns)?;
        frame.name = record.name;
        Ok(frame)
    }
}

impl From<DataFrame> for DataFrameRecord {
    fn from(frame: DataFrame) -> Self {
        DataFrameRecord {
            name: frame.name,
            columns: frame.columns,
        }
    }
}
