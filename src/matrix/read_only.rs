use std::ops::Index;

use super::{Matrix, MatrixIndex};
use crate::core::{Indexable, Lengthed, Numeric};
use crate::error::{ensure_in_bounds, Result};
use crate::vector::{values_equal, ReadOnlySpanVector, Vector};

/// Read-only matrix view over row-major storage owned elsewhere.
///
/// The view is bound to the borrow it was created from, so it can never
/// outlive the matrix it looks into.
#[derive(Debug, Clone, Copy)]
pub struct ReadOnlyMatrix<'a, T: Numeric> {
    data: &'a [T],
    rows: usize,
    columns: usize,
}

impl<'a, T: Numeric> ReadOnlyMatrix<'a, T> {
    pub(crate) fn new(data: &'a [T], rows: usize, columns: usize) -> Self {
        Self {
            data,
            rows,
            columns,
        }
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

    pub fn get(&self, row: usize, column: usize) -> Result<T> {
        ensure_in_bounds(row, self.rows)?;
        ensure_in_bounds(column, self.columns)?;
        Ok(self.data[row * self.columns + column])
    }

    pub fn row(&self, row: usize) -> Result<ReadOnlySpanVector<'a, T>> {
        ensure_in_bounds(row, self.rows)?;
        let start = row * self.columns;
        Ok(ReadOnlySpanVector::new(&self.data[start..start + self.columns]))
    }

    pub fn column(&self, column: usize) -> Result<Vector<T>> {
        ensure_in_bounds(column, self.columns)?;
        Ok((0..self.rows)
            .map(|r| self.data[r * self.columns + column])
            .collect())
    }

    /// Row-major values
    pub fn values(&self) -> &'a [T] {
        self.data
    }

    pub fn contains(&self, value: T) -> bool {
        self.data.contains(&value)
    }

    pub fn contains_any(&self, values: &[T]) -> bool {
        self.data.iter().any(|v| values.contains(v))
    }

    pub fn index_of(&self, value: T) -> Option<MatrixIndex> {
        let position = self.data.iter().position(|&v| v == value)?;
        Some(MatrixIndex::new(
            position / self.columns,
            position % self.columns,
        ))
    }

    pub fn to_rows(&self) -> Vec<Vec<T>> {
        if self.columns == 0 {
            return vec![Vec::new(); self.rows];
        }
        self.data.chunks(self.columns).map(<[T]>::to_vec).collect()
    }

    /// Independent owned copy
    pub fn to_matrix(&self) -> Matrix<T> {
        Matrix {
            data: Vector::from_slice(self.data),
            rows: self.rows,
            columns: self.columns,
        }
    }
}

impl<T: Numeric> PartialEq for ReadOnlyMatrix<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows
            && self.columns == other.columns
            && values_equal(self.data, other.data)
    }
}

impl<T: Numeric> Index<(usize, usize)> for ReadOnlyMatrix<'_, T> {
    type Output = T;

    fn index(&self, (row, column): (usize, usize)) -> &T {
        assert!(column < self.columns, "column {} out of bounds", column);
        &self.data[row * self.columns + column]
    }
}

impl<T: Numeric> Lengthed for ReadOnlyMatrix<'_, T> {
    fn len(&self) -> usize {
        self.data.len()
    }
}

impl<T: Numeric> Indexable<T> for ReadOnlyMatrix<'_, T> {
    fn as_slice(&self) -> &[T] {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_is_a_window() {
        let mut m = Matrix::from_vec(vec![1, 2, 3, 4], 2, 2).unwrap();
        {
            let view = m.as_read_only();
            assert_eq!(view.get(1, 1).unwrap(), 4);
            assert_eq!(view[(0, 1)], 2);
            assert_eq!(view.row(0).unwrap().as_slice(), &[1, 2]);
            assert_eq!(view.to_matrix(), m);
        }
        m.set(1, 1, 40).unwrap();
        assert_eq!(m.as_read_only().get(1, 1).unwrap(), 40);
    }

    #[test]
    fn test_copy_is_independent() {
        let m = Matrix::from_vec(vec![1.0, 2.0], 1, 2).unwrap();
        let mut copy = m.as_read_only().to_matrix();
        copy.set(0, 0, 9.0).unwrap();
        assert_eq!(m.get(0, 0).unwrap(), 1.0);
    }
}
