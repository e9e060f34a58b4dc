use std::ops::{Index, IndexMut};

use super::owned::Vector;
use super::read_only::ReadOnlyVector;
use crate::core::{Indexable, Lengthed, MutablyIndexable, Numeric};
use crate::error::{ensure_in_bounds, Result};

/// Mutable view over storage owned elsewhere.
///
/// The view borrows its storage for `'a`, so it can neither outlive the owner
/// nor coexist with any other access to the same elements.
#[derive(Debug)]
pub struct SpanVector<'a, T: Numeric> {
    data: &'a mut [T],
}

impl<'a, T: Numeric> SpanVector<'a, T> {
    pub fn new(data: &'a mut [T]) -> Self {
        Self { data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, index: usize) -> Result<T> {
        ensure_in_bounds(index, self.data.len())?;
        Ok(self.data[index])
    }

    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        ensure_in_bounds(index, self.data.len())?;
        self.data[index] = value;
        Ok(())
    }

    pub fn as_slice(&self) -> &[T] {
        &*self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut *self.data
    }

    /// Narrower mutable view over `start..start + len`
    pub fn slice(&mut self, start: usize, len: usize) -> Result<SpanVector<'_, T>> {
        let end = start.saturating_add(len);
        ensure_in_bounds(end, self.data.len() + 1)?;
        Ok(SpanVector::new(&mut self.data[start..end]))
    }

    pub fn as_read_only(&self) -> ReadOnlySpanVector<'_, T> {
        ReadOnlySpanVector::new(&*self.data)
    }

    /// Copies the viewed elements into an owned vector
    pub fn copied(&self) -> Vector<T> {
        Vector::from_slice(&*self.data)
    }
}

impl<T: Numeric> Index<usize> for SpanVector<'_, T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T: Numeric> IndexMut<usize> for SpanVector<'_, T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }
}

impl<T: Numeric> Lengthed for SpanVector<'_, T> {
    fn len(&self) -> usize {
        self.data.len()
    }
}

impl<T: Numeric> Indexable<T> for SpanVector<'_, T> {
    fn as_slice(&self) -> &[T] {
        &*self.data
    }
}

impl<T: Numeric> MutablyIndexable<T> for SpanVector<'_, T> {
    fn as_mut_slice(&mut self) -> &mut [T] {
        &mut *self.data
    }
}

/// Read-only view over storage owned elsewhere, valid for `'a`
#[derive(Debug, Clone, Copy)]
pub struct ReadOnlySpanVector<'a, T: Numeric> {
    data: &'a [T],
}

impl<'a, T: Numeric> ReadOnlySpanVector<'a, T> {
    pub fn new(data: &'a [T]) -> Self {
        Self { data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, index: usize) -> Result<T> {
        ensure_in_bounds(index, self.data.len())?;
        Ok(self.data[index])
    }

    /// The viewed elements, for the full lifetime of the borrow
    pub fn as_slice(&self) -> &'a [T] {
        self.data
    }

    pub fn iter(&self) -> std::slice::Iter<'a, T> {
        self.data.iter()
    }

    /// Narrower view over `start..start + len`
    pub fn slice(&self, start: usize, len: usize) -> Result<ReadOnlySpanVector<'a, T>> {
        let end = start.saturating_add(len);
        ensure_in_bounds(end, self.data.len() + 1)?;
        Ok(ReadOnlySpanVector::new(&self.data[start..end]))
    }

    /// Copies the viewed elements into an owned vector
    pub fn copied(&self) -> Vector<T> {
        Vector::from_slice(self.data)
    }

    /// Copies the viewed elements into shared immutable storage
    pub fn to_read_only(&self) -> ReadOnlyVector<T> {
        ReadOnlyVector::from_slice(self.data)
    }
}

impl<T: Numeric> PartialEq for ReadOnlySpanVector<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        super::values_equal(self.data, other.data)
    }
}

impl<T: Numeric> Index<usize> for ReadOnlySpanVector<'_, T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<'a, T: Numeric> IntoIterator for ReadOnlySpanVector<'a, T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<T: Numeric> Lengthed for ReadOnlySpanVector<'_, T> {
    fn len(&self) -> usize {
        self.data.len()
    }
}

impl<T: Numeric> Indexable<T> for ReadOnlySpanVector<'_, T> {
    fn as_slice(&self) -> &[T] {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_writes_through_to_owner() {
        let mut owner = Vector::from([1, 2, 3, 4]);
        {
            let mut span = owner.as_span();
            span.set(1, 20).unwrap();
            let mut tail = span.slice(2, 2).unwrap();
            tail[0] = 30;
        }
        assert_eq!(owner.as_slice(), &[1, 20, 30, 4]);
    }

    #[test]
    fn test_slice_bounds() {
        let data = [1.0, 2.0, 3.0];
        let view = ReadOnlySpanVector::new(&data);
        assert_eq!(view.slice(1, 2).unwrap().as_slice(), &[2.0, 3.0]);
        assert_eq!(view.slice(3, 0).unwrap().len(), 0);
        assert!(view.slice(2, 2).is_err());
    }
}
