// Wire form of a series

use serde::{Deserialize, Serialize};

use super::{References, Series};
use crate::category::{CategorySet, ValueLabel, ValueLabelCollection};
use crate::core::{DataType, Numeric, Variant};
use crate::error::Error;
use crate::vector::Vector;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", bound = "T: Numeric")]
pub struct SeriesRecord<T: Numeric> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    data_type: DataType,
    values: Vec<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    categories: Option<CategorySet<T>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    labels: Option<Vec<ValueLabel<T>>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    refs: Vec<(Variant, Variant)>,
}

impl<T: Numeric> TryFrom<SeriesRecord<T>> for Series<T> {
    type Error = Error;

    fn try_from(record: SeriesRecord<T>) -> Result<Self, Error> {
        if record.data_type != T::DATA_TYPE {
            return Err(Error::InvalidArgument(format!(
                "series of {} cannot be read as {}",
                record.data_type,
                T::DATA_TYPE
            )));
        }

        let references: References = record.refs.into_iter().collect();
        let mut series = Series::new(record.name, Vector::new(record.values), Some(references));
        if let Some(categories) = record.categories {
            series = series.with_categories(categories)?;
        }
        if let Some(labels) = record.labels {
            series = series.with_value_labels(ValueLabelCollection::try_from(labels)?);
        }
        Ok(series)
    }
}

impl<T: Numeric> From<Series<T>> for SeriesRecord<T> {
    fn from(series: Series<T>) -> Self {
        SeriesRecord {
            name: series.name,
            data_type: T::DATA_TYPE,
            values: series.vector.into_vec(),
            categories: series.categories,
            labels: series.value_labels.map(Vec::from),
            refs: series.references.into_iter().collect(),
        }
    }
}
