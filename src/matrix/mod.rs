//! Row-major numeric matrix backed by an owned [`Vector`].
//!
//! Element-wise operations check dimensions first and then reuse the vector
//! primitives, so a failed call leaves the destination untouched.

mod read_only;

use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use crate::core::{Indexable, Lengthed, MutablyIndexable, Numeric};
use crate::error::{ensure_in_bounds, Error, Result};
use crate::vector::primitives;
use crate::vector::{ReadOnlySpanVector, SpanVector, Vector};

pub use self::read_only::ReadOnlyMatrix;

/// Row and column of one matrix cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatrixIndex {
    pub row: usize,
    pub column: usize,
}

impl MatrixIndex {
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

impl From<(usize, usize)> for MatrixIndex {
    fn from((row, column): (usize, usize)) -> Self {
        Self::new(row, column)
    }
}

/// Fixed-size matrix with rows stored contiguously
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "MatrixRecord<T>", into = "MatrixRecord<T>", bound = "T: Numeric")]
pub struct Matrix<T: Numeric> {
    data: Vector<T>,
    rows: usize,
    columns: usize,
}

impl<T: Numeric> Matrix<T> {
    /// A `rows` x `columns` matrix of zeros
    pub fn zeros(rows: usize, columns: usize) -> Result<Self> {
        Ok(Self {
            data: Vector::zeros(cell_count(rows, columns)?),
            rows,
            columns,
        })
    }

    /// Takes ownership of row-major `values`.
    ///
    /// Fails with `LengthMismatch` unless `values.len() == rows * columns`.
    pub fn from_vec(values: Vec<T>, rows: usize, columns: usize) -> Result<Self> {
        let expected = cell_count(rows, columns)?;
        if values.len() != expected {
            return Err(Error::LengthMismatch {
                expected,
                actual: values.len(),
            });
        }
        Ok(Self {
            data: Vector::new(values),
            rows,
            columns,
        })
    }

    /// Copies row-major `values` into a new matrix, padding missing trailing
    /// cells with zero. More values than cells is an `InvalidArgument`.
    pub fn from_slice(values: &[T], rows: usize, columns: usize) -> Result<Self> {
        let mut matrix = Self::zeros(rows, columns)?;
        if values.len() > matrix.len() {
            return Err(Error::InvalidArgument(format!(
                "{} values do not fit a {}x{} matrix",
                values.len(),
                rows,
                columns
            )));
        }
        matrix.data.as_mut_slice()[..values.len()].copy_from_slice(values);
        Ok(matrix)
    }

    /// Builds a matrix from rows. The first row sets the column count;
    /// shorter rows are padded with zero and longer rows are rejected.
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self> {
        let columns = rows.first().map_or(0, |r| r.as_ref().len());
        let mut matrix = Self::zeros(rows.len(), columns)?;
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() > columns {
                return Err(Error::InvalidArgument(format!(
                    "row {} has {} values, expected at most {}",
                    i,
                    row.len(),
                    columns
                )));
            }
            matrix.row_slice_mut(i)[..row.len()].copy_from_slice(row);
        }
        Ok(matrix)
    }

    pub fn row_count(&self) -> usize {
        self.rows
    }

    pub fn column_count(&self) -> usize {
        self.columns
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn offset(&self, row: usize, column: usize) -> Result<usize> {
        ensure_in_bounds(row, self.rows)?;
        ensure_in_bounds(column, self.columns)?;
        Ok(row * self.columns + column)
    }

    /// Value at `row`, `column`
    pub fn get(&self, row: usize, column: usize) -> Result<T> {
        let offset = self.offset(row, column)?;
        Ok(self.data[offset])
    }

    /// Writes `value` at `row`, `column`
    pub fn set(&mut self, row: usize, column: usize, value: T) -> Result<()> {
        let offset = self.offset(row, column)?;
        self.data[offset] = value;
        Ok(())
    }

    fn row_slice_mut(&mut self, row: usize) -> &mut [T] {
        let start = row * self.columns;
        &mut self.data.as_mut_slice()[start..start + self.columns]
    }

    /// Read-only view of one row
    pub fn row(&self, row: usize) -> Result<ReadOnlySpanVector<'_, T>> {
        ensure_in_bounds(row, self.rows)?;
        let start = row * self.columns;
        Ok(ReadOnlySpanVector::new(
            &self.data.as_slice()[start..start + self.columns],
        ))
    }

    /// Mutable view of one row
    pub fn row_mut(&mut self, row: usize) -> Result<SpanVector<'_, T>> {
        ensure_in_bounds(row, self.rows)?;
        Ok(SpanVector::new(self.row_slice_mut(row)))
    }

    /// Copies one column out of the matrix
    pub fn column(&self, column: usize) -> Result<Vector<T>> {
        self.as_read_only().column(column)
    }

    /// Row-major values
    pub fn values(&self) -> &[T] {
        self.data.as_slice()
    }

    /// Borrowed view sharing this matrix's storage
    pub fn as_read_only(&self) -> ReadOnlyMatrix<'_, T> {
        ReadOnlyMatrix::new(self.data.as_slice(), self.rows, self.columns)
    }

    /// New matrix with rows and columns swapped
    pub fn transpose(&self) -> Matrix<T> {
        let mut values = Vec::with_capacity(self.len());
        for c in 0..self.columns {
            for r in 0..self.rows {
                values.push(self.data[r * self.columns + c]);
            }
        }
        Matrix {
            data: Vector::new(values),
            rows: self.columns,
            columns: self.rows,
        }
    }

    /// Element-wise sum as a new matrix
    pub fn add(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        let mut destination = Matrix::zeros(self.rows, self.columns)?;
        add(&self.as_read_only(), &other.as_read_only(), &mut destination)?;
        Ok(destination)
    }

    /// `true` if any cell equals `value`, searching by rows
    pub fn contains(&self, value: T) -> bool {
        self.as_read_only().contains(value)
    }

    /// `true` if any cell equals one of `values`
    pub fn contains_any(&self, values: &[T]) -> bool {
        self.as_read_only().contains_any(values)
    }

    /// Position of the first cell equal to `value`, searching by rows
    pub fn index_of(&self, value: T) -> Option<MatrixIndex> {
        self.as_read_only().index_of(value)
    }

    /// Copies the rows out as nested vectors
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.as_read_only().to_rows()
    }
}

fn cell_count(rows: usize, columns: usize) -> Result<usize> {
    rows.checked_mul(columns).ok_or_else(|| {
        Error::InvalidArgument(format!("a {}x{} matrix is too large", rows, columns))
    })
}

/// Fails with `InvalidArgument` unless every view has the same shape
pub fn ensure_same_dimensions<T: Numeric>(views: &[&ReadOnlyMatrix<'_, T>]) -> Result<()> {
    if let Some((first, rest)) = views.split_first() {
        for other in rest {
            if other.row_count() != first.row_count()
                || other.column_count() != first.column_count()
            {
                return Err(Error::InvalidArgument(format!(
                    "matrices must have the same dimensions: {}x{} and {}x{}",
                    first.row_count(),
                    first.column_count(),
                    other.row_count(),
                    other.column_count()
                )));
            }
        }
    }
    Ok(())
}

/// Writes `x + y` into `destination`
pub fn add<T: Numeric>(
    x: &ReadOnlyMatrix<'_, T>,
    y: &ReadOnlyMatrix<'_, T>,
    destination: &mut Matrix<T>,
) -> Result<()> {
    ensure_same_dimensions(&[x, y, &destination.as_read_only()])?;
    primitives::add(x.values(), y.values(), destination.data.as_mut_slice())
}

/// Writes the element-wise product `x * y` into `destination`
pub fn multiply<T: Numeric>(
    x: &ReadOnlyMatrix<'_, T>,
    y: &ReadOnlyMatrix<'_, T>,
    destination: &mut Matrix<T>,
) -> Result<()> {
    ensure_same_dimensions(&[x, y, &destination.as_read_only()])?;
    primitives::multiply(x.values(), y.values(), destination.data.as_mut_slice())
}

/// Writes `x + value` into `destination`
pub fn add_scalar<T: Numeric>(
    x: &ReadOnlyMatrix<'_, T>,
    value: T,
    destination: &mut Matrix<T>,
) -> Result<()> {
    ensure_same_dimensions(&[x, &destination.as_read_only()])?;
    let mut values = Vector::from_slice(x.values());
    primitives::add_scalar_in_place(&mut values, value)?;
    destination
        .data
        .as_mut_slice()
        .copy_from_slice(values.as_slice());
    Ok(())
}

impl<T: Numeric> PartialEq for Matrix<T> {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows && self.columns == other.columns && self.data == other.data
    }
}

impl<T: Numeric> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, column): (usize, usize)) -> &T {
        assert!(column < self.columns, "column {} out of bounds", column);
        &self.data[row * self.columns + column]
    }
}

impl<T: Numeric> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (row, column): (usize, usize)) -> &mut T {
        assert!(column < self.columns, "column {} out of bounds", column);
        let columns = self.columns;
        &mut self.data[row * columns + column]
    }
}

impl<T: Numeric> Index<MatrixIndex> for Matrix<T> {
    type Output = T;

    fn index(&self, index: MatrixIndex) -> &T {
        &self[(index.row, index.column)]
    }
}

impl<T: Numeric> Lengthed for Matrix<T> {
    fn len(&self) -> usize {
        self.data.len()
    }
}

impl<T: Numeric> Indexable<T> for Matrix<T> {
    fn as_slice(&self) -> &[T] {
        self.data.as_slice()
    }
}

impl<T: Numeric> MutablyIndexable<T> for Matrix<T> {
    fn as_mut_slice(&mut self) -> &mut [T] {
        self.data.as_mut_slice()
    }
}

/// Wire form: `{"rows": 2, "columns": 3, "values": [...]}`
#[derive(Serialize, Deserialize)]
#[serde(bound = "T: Numeric")]
pub struct MatrixRecord<T: Numeric> {
    rows: usize,
    columns: usize,
    values: Vec<T>,
}

impl<T: Numeric> TryFrom<MatrixRecord<T>> for Matrix<T> {
    type Error = Error;

    fn try_from(record: MatrixRecord<T>) -> Result<Self> {
        Matrix::from_vec(record.values, record.rows, record.columns)
    }
}

impl<T: Numeric> From<Matrix<T>> for MatrixRecord<T> {
    fn from(matrix: Matrix<T>) -> Self {
        MatrixRecord {
            rows: matrix.rows,
            columns: matrix.columns,
            values: matrix.data.into_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_and_access() {
        let m = Matrix::from_vec(vec![1, 2, 3, 4, 5, 6], 2, 3).unwrap();
        assert_eq!(m.row_count(), 2);
        assert_eq!(m.column_count(), 3);
        assert_eq!(m.get(1, 0).unwrap(), 4);
        assert_eq!(m[(0, 2)], 3);
        assert_eq!(m.row(1).unwrap().as_slice(), &[4, 5, 6]);
        assert_eq!(m.column(1).unwrap().as_slice(), &[2, 5]);
        assert!(m.get(2, 0).is_err());
        assert!(m.get(0, 3).is_err());

        assert!(matches!(
            Matrix::from_vec(vec![1, 2, 3], 2, 2),
            Err(Error::LengthMismatch { expected: 4, actual: 3 })
        ));
    }

    #[test]
    fn test_from_slice_and_rows_pad_with_zero() {
        let m = Matrix::from_slice(&[1.0, 2.0, 3.0], 2, 2).unwrap();
        assert_eq!(m.values(), &[1.0, 2.0, 3.0, 0.0]);
        assert!(Matrix::from_slice(&[1, 2, 3], 1, 2).is_err());

        let m = Matrix::from_rows(&[vec![1u8, 2, 3], vec![4]]).unwrap();
        assert_eq!(m.to_rows(), vec![vec![1, 2, 3], vec![4, 0, 0]]);
        assert!(Matrix::from_rows(&[vec![1u8], vec![2, 3]]).is_err());

        let empty = Matrix::<i32>::from_rows::<Vec<i32>>(&[]).unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_row_mut_writes_through() {
        let mut m = Matrix::<i64>::zeros(2, 2).unwrap();
        m.row_mut(1).unwrap().set(0, 9).unwrap();
        m.set(0, 1, 7).unwrap();
        m[(0, 0)] = 1;
        assert_eq!(m.values(), &[1, 7, 9, 0]);
    }

    #[test]
    fn test_add_checks_dimensions_and_overflow() {
        let a = Matrix::from_vec(vec![1i8, 2, 3, 4], 2, 2).unwrap();
        let b = Matrix::from_vec(vec![10i8, 20, 30, 40], 2, 2).unwrap();
        assert_eq!(a.add(&b).unwrap().values(), &[11, 22, 33, 44]);

        let c = Matrix::from_vec(vec![1i8, 2, 3, 4], 1, 4).unwrap();
        assert!(matches!(a.add(&c), Err(Error::InvalidArgument(_))));

        let big = Matrix::from_vec(vec![100i8; 4], 2, 2).unwrap();
        let mut destination = Matrix::zeros(2, 2).unwrap();
        assert!(matches!(
            add(&big.as_read_only(), &big.as_read_only(), &mut destination),
            Err(Error::Overflow(_))
        ));
        assert_eq!(destination.values(), &[0, 0, 0, 0]);
    }

    #[test]
    fn test_elementwise_multiply_and_scalar() {
        let a = Matrix::from_vec(vec![1.0, 2.0, 3.0, 4.0], 2, 2).unwrap();
        let mut destination = Matrix::zeros(2, 2).unwrap();
        multiply(&a.as_read_only(), &a.as_read_only(), &mut destination).unwrap();
        assert_eq!(destination.values(), &[1.0, 4.0, 9.0, 16.0]);

        add_scalar(&a.as_read_only(), 0.5, &mut destination).unwrap();
        assert_eq!(destination.values(), &[1.5, 2.5, 3.5, 4.5]);
    }

    #[test]
    fn test_search() {
        let m = Matrix::from_vec(vec![3, 1, 4, 1, 5, 9], 2, 3).unwrap();
        assert!(m.contains(9));
        assert!(!m.contains(2));
        assert!(m.contains_any(&[2, 5]));
        assert_eq!(m.index_of(1), Some(MatrixIndex::new(0, 1)));
        assert_eq!(m.index_of(5), Some(MatrixIndex::new(1, 1)));
        assert_eq!(m.index_of(7), None);
    }

    #[test]
    fn test_transpose() {
        let m = Matrix::from_vec(vec![1, 2, 3, 4, 5, 6], 2, 3).unwrap();
        let t = m.transpose();
        assert_eq!(t.row_count(), 3);
        assert_eq!(t.to_rows(), vec![vec![1, 4], vec![2, 5], vec![3, 6]]);
        assert_eq!(t.transpose(), m);
    }

    #[test]
    fn test_json_round_trip() {
        let m = Matrix::from_vec(vec![1u16, 2, 3, 4], 2, 2).unwrap();
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, r#"{"rows":2,"columns":2,"values":[1,2,3,4]}"#);
        let back: Matrix<u16> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);
        let short = r#"{"rows":2,"columns":2,"values":[1]}"#;
        assert!(serde_json::from_str::<Matrix<u16>>(short).is_err());
    }
}
