use std::collections::BTreeMap;

use numframe::{
    CategorySet, DataFrame, DataPoint, DataPoint3D, Error, Series, ValueLabelCollection, Variant,
    Vector,
};
use serde_json::json;

#[test]
fn test_series_field_names() {
    let series = Series::named("score", vec![1.5, 2.5]);
    let value: serde_json::Value = serde_json::from_str(&series.to_json().unwrap()).unwrap();
    assert_eq!(
        value,
        json!({ "name": "score", "dataType": "f64", "values": [1.5, 2.5] })
    );
}

#[test]
fn test_series_with_metadata_round_trip() {
    let mut labels = ValueLabelCollection::new();
    labels.add(1u8, "agree").unwrap();
    labels.add(2u8, "disagree").unwrap();

    let mut refs = BTreeMap::new();
    refs.insert(Variant::from("question"), Variant::Integer(7));

    let series = Series::new(Some("q7".to_string()), Vector::from([1u8, 2, 2]), Some(refs))
        .with_categories(CategorySet::new(vec![1, 2]).unwrap())
        .unwrap()
        .with_value_labels(labels);

    let json = series.to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["categories"], json!([1, 2]));
    assert_eq!(value["labels"][0], json!({ "value": 1, "label": "agree" }));
    assert_eq!(value["refs"], json!([["question", 7]]));

    let restored: Series<u8> = Series::from_json(&json).unwrap();
    assert_eq!(restored, series);
    assert_eq!(restored.references(), series.references());
    assert_eq!(restored.label_of(1).unwrap(), Some("disagree"));
}

#[test]
fn test_series_rejects_wrong_element_type() {
    let json = Series::named("x", vec![1i32, 2]).to_json().unwrap();
    assert!(matches!(Series::<i64>::from_json(&json), Err(Error::Json(_))));
}

#[test]
fn test_series_rejects_out_of_category_values() {
    let json = r#"{"name":"c","dataType":"i32","values":[1,5],"categories":[1,2]}"#;
    let err = Series::<i32>::from_json(json).unwrap_err();
    assert!(err.to_string().contains("JSON"));
}

#[test]
fn test_dataframe_round_trip() {
    let mut df = DataFrame::new();
    df.add_column(Series::named("a", vec![1, 2, 3])).unwrap();
    df.add_column(Series::named("b", vec![0.5f32, 1.5, 2.5])).unwrap();
    df.add_column(Series::from(vec![u128::MAX, 0, 1])).unwrap();

    let json = df.to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert!(value.get("name").is_none());
    assert_eq!(value["columns"].as_array().unwrap().len(), 3);

    let restored = DataFrame::from_json(&json).unwrap();
    assert_eq!(restored, df);
    assert_eq!(restored.series::<u128>("2").unwrap().unwrap().get(0).unwrap(), u128::MAX);
}

#[test]
fn test_dataframe_rejects_ragged_columns() {
    let json = r#"{"columns":[
        {"i32":{"name":"a","dataType":"i32","values":[1,2]}},
        {"i32":{"name":"b","dataType":"i32","values":[1]}}
    ]}"#;
    assert!(DataFrame::from_json(json).is_err());
}

#[test]
fn test_data_points() {
    let p = DataPoint::new(1i32, 2.5f64);
    assert_eq!(serde_json::to_value(p).unwrap(), json!({ "x": 1, "y": 2.5 }));

    let q: DataPoint3D<f32> = serde_json::from_str(r#"{"x":1.0,"y":2.0,"z":3.0}"#).unwrap();
    assert_eq!(q, DataPoint3D::new(1.0, 2.0, 3.0));
}

#[test]
fn test_vector_is_a_bare_json_array() {
    let v = Vector::from([1i16, -2, 3]);
    assert_eq!(serde_json::to_string(&v).unwrap(), "[1,-2,3]");

    let back: Vector<i16> = serde_json::from_str("[1,-2,3]").unwrap();
    assert_eq!(back, v);
    assert!(serde_json::from_str::<Vector<u8>>("[1,-2]").is_err());
}
