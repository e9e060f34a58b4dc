use numframe::matrix;
use numframe::{Error, Indexable, Lengthed, Matrix, MatrixIndex, MutablyIndexable};

#[test]
fn test_matrix_rows_and_columns() {
    let m = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]).unwrap();
    assert_eq!(m.row_count(), 2);
    assert_eq!(m.column_count(), 3);
    assert_eq!(Lengthed::len(&m), 6);
    assert_eq!(m.row(1).unwrap().as_slice(), &[4.0, 5.0, 6.0]);
    assert_eq!(m.column(2).unwrap().as_slice(), &[3.0, 6.0]);
    assert!(matches!(
        m.get(2, 0),
        Err(Error::IndexOutOfBounds { index: 2, size: 2 })
    ));
}

#[test]
fn test_matrix_through_capability_traits() {
    let mut m = Matrix::<u32>::zeros(2, 2).unwrap();
    MutablyIndexable::set(&mut m, 3, 7).unwrap();
    assert_eq!(Indexable::get(&m, 3).unwrap(), 7);
    assert_eq!(m.get(1, 1).unwrap(), 7);
    assert_eq!(m.index_of(7), Some(MatrixIndex::new(1, 1)));
}

#[test]
fn test_matrix_operations_keep_destination_on_failure() {
    let a = Matrix::from_vec(vec![250u8, 1, 2, 3], 2, 2).unwrap();
    let b = Matrix::from_vec(vec![10u8, 1, 1, 1], 2, 2).unwrap();
    let mut destination = Matrix::from_vec(vec![9u8; 4], 2, 2).unwrap();

    assert!(matches!(
        matrix::add(&a.as_read_only(), &b.as_read_only(), &mut destination),
        Err(Error::Overflow(_))
    ));
    assert_eq!(destination.values(), &[9, 9, 9, 9]);

    let wrong = Matrix::from_vec(vec![1u8; 4], 4, 1).unwrap();
    assert!(matches!(
        matrix::multiply(&a.as_read_only(), &wrong.as_read_only(), &mut destination),
        Err(Error::InvalidArgument(_))
    ));

    matrix::multiply(&b.as_read_only(), &b.as_read_only(), &mut destination).unwrap();
    assert_eq!(destination.values(), &[100, 1, 1, 1]);
}
