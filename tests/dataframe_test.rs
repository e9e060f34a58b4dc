use numframe::stats;
use numframe::{Column, DataFrame, DataType, Error, Series, VectorValue};

fn two_column_frame() -> DataFrame {
    let mut df = DataFrame::new();
    df.add_column(Series::named("a", vec![1, 2, 3])).unwrap();
    df.add_column(Series::named("b", vec![10, 20, 30])).unwrap();
    df
}

#[test]
fn test_reference_example() {
    let mut df = two_column_frame();

    // 0行目は (1, 10)
    let row = df.row(0).unwrap();
    assert_eq!(row.values(), vec![VectorValue::Int32(1), VectorValue::Int32(10)]);

    let a = df.series::<i32>("a").unwrap().unwrap();
    assert_eq!(stats::sum(a.values()).unwrap(), 6);
    assert_eq!(stats::mean_as::<i32, f64>(a.values()).unwrap(), 2.0);

    let result = df.add_column(Series::named("c", vec![1, 2]));
    assert!(matches!(result, Err(Error::LengthMismatch { .. })));
    assert_eq!(df.column_count(), 2);
}

#[test]
fn test_row_bounds() {
    let df = two_column_frame();
    assert_eq!(df.row_count(), 3);

    let last = df.row(2).unwrap();
    assert_eq!(last.index(), 2);
    assert_eq!(last.len(), 2);
    assert_eq!(last.get(0).unwrap(), VectorValue::Int32(3));
    assert_eq!(last.get(1).unwrap(), VectorValue::Int32(30));
    assert!(last.get(2).is_err());

    assert!(matches!(
        df.row(3),
        Err(Error::IndexOutOfBounds { index: 3, size: 3 })
    ));
}

#[test]
fn test_rows_iterator() {
    let df = two_column_frame();
    let rows = df.rows();
    assert_eq!(rows.len(), 3);

    let sums: Vec<f64> = df
        .rows()
        .map(|row| row.values().iter().map(VectorValue::to_f64).sum())
        .collect();
    assert_eq!(sums, vec![11.0, 22.0, 33.0]);
}

#[test]
fn test_mixed_element_types() {
    let mut df = DataFrame::with_name("measurements");
    df.add_column(Series::named("id", vec![1u64, 2])).unwrap();
    df.add_column(Series::named("value", vec![0.25f32, 0.75])).unwrap();

    assert_eq!(df.name(), Some("measurements"));
    assert_eq!(df.column("value").unwrap().data_type(), DataType::Float32);
    let row = df.row(1).unwrap();
    assert_eq!(row.get_by_name("id"), Some(VectorValue::UInt64(2)));
    assert_eq!(row.get_by_name("value").unwrap().as_f32().unwrap(), 0.75);
    assert!(row.get_by_name("missing").is_none());
}

#[test]
fn test_missing_name_is_not_an_error() {
    let df = two_column_frame();
    assert!(df.column("nope").is_none());
    assert!(df.series::<i32>("nope").unwrap().is_none());
    assert!(df.series::<f64>("a").is_err());
}

#[test]
fn test_insert_and_remove() {
    let mut df = two_column_frame();
    df.insert_column(0, Series::<i8>::from(vec![7, 8, 9])).unwrap();
    assert_eq!(df.column_names(), vec![Some("0"), Some("a"), Some("b")]);
    assert!(df.insert_column(9, Series::from(vec![1, 2, 3])).is_err());

    let removed = df.remove_column("a").unwrap();
    assert_eq!(removed.len(), 3);
    assert_eq!(df.column_count(), 2);
    assert!(df.remove_column("a").is_none());

    df.clear();
    assert_eq!(df.row_count(), 0);
    assert!(df.row(0).is_err());
}

#[test]
fn test_typed_mutation_through_frame() {
    let mut df = two_column_frame();
    df.series_mut::<i32>("b").unwrap().unwrap().set(0, 99).unwrap();
    assert_eq!(df.row(0).unwrap().get(1).unwrap(), VectorValue::Int32(99));

    let column: &Column = df.column_at(1).unwrap();
    assert_eq!(column.name(), Some("b"));
    assert!(df.column_at(2).is_err());
}

#[test]
fn test_from_columns_checks_lengths() {
    let ok = DataFrame::from_columns(vec![
        Column::from(Series::named("x", vec![1.0, 2.0])),
        Column::from(Series::named("y", vec![3i16, 4])),
    ]);
    assert!(ok.is_ok());

    let bad = DataFrame::from_columns(vec![
        Column::from(Series::named("x", vec![1.0, 2.0])),
        Column::from(Series::named("y", vec![3i16])),
    ]);
    assert!(bad.is_err());
}
