use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use super::read_only::ReadOnlyVector;
use super::span::{ReadOnlySpanVector, SpanVector};
use super::values_equal;
use crate::core::{Indexable, Lengthed, MutablyIndexable, Numeric};
use crate::error::{ensure_in_bounds, Error, Result};
use crate::na::NA;

/// Exclusively owned, fixed-length numeric buffer.
///
/// The length is set at construction; values can be overwritten in place but
/// the buffer is never resized.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent, bound = "T: Numeric")]
pub struct Vector<T: Numeric> {
    data: Box<[T]>,
}

impl<T: Numeric> Vector<T> {
    /// Creates a vector by taking ownership of `values` (no copy)
    pub fn new(values: Vec<T>) -> Self {
        Self {
            data: values.into_boxed_slice(),
        }
    }

    /// Creates a vector by copying `values` into new storage
    pub fn from_slice(values: &[T]) -> Self {
        Self {
            data: values.into(),
        }
    }

    /// A vector of `len` zeros
    pub fn zeros(len: usize) -> Self {
        Self::filled(len, T::zero())
    }

    /// A vector of `len` copies of `value`
    pub fn filled(len: usize, value: T) -> Self {
        Self {
            data: vec![value; len].into_boxed_slice(),
        }
    }

    /// An empty vector
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Creates a vector from nullable cells, failing on the first missing one
    pub fn from_na(values: &[NA<T>]) -> Result<Self> {
        let mut data = Vec::with_capacity(values.len());
        for (i, cell) in values.iter().enumerate() {
            match cell {
                NA::Value(v) => data.push(*v),
                NA::NA => {
                    return Err(Error::MissingValue(format!("element {} is NA", i)));
                }
            }
        }
        Ok(Self::new(data))
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Value at `index`
    pub fn get(&self, index: usize) -> Result<T> {
        ensure_in_bounds(index, self.data.len())?;
        Ok(self.data[index])
    }

    /// Overwrites the value at `index`
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        ensure_in_bounds(index, self.data.len())?;
        self.data[index] = value;
        Ok(())
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Mutable view bound to this borrow
    pub fn as_span(&mut self) -> SpanVector<'_, T> {
        SpanVector::new(&mut self.data)
    }

    /// Read-only view bound to this borrow
    pub fn as_read_only_span(&self) -> ReadOnlySpanVector<'_, T> {
        ReadOnlySpanVector::new(&self.data)
    }

    /// Gives up exclusive ownership; the storage becomes shared and immutable
    pub fn into_read_only(self) -> ReadOnlyVector<T> {
        ReadOnlyVector::from(self.data)
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data.into_vec()
    }
}

impl<T: Numeric> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        values_equal(&self.data, &other.data)
    }
}

impl<T: Numeric> Default for Vector<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Numeric> From<Vec<T>> for Vector<T> {
    fn from(values: Vec<T>) -> Self {
        Self::new(values)
    }
}

impl<T: Numeric> From<&[T]> for Vector<T> {
    fn from(values: &[T]) -> Self {
        Self::from_slice(values)
    }
}

impl<T: Numeric, const N: usize> From<[T; N]> for Vector<T> {
    fn from(values: [T; N]) -> Self {
        Self::new(values.to_vec())
    }
}

impl<T: Numeric> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a, T: Numeric> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<T: Numeric> AsRef<[T]> for Vector<T> {
    fn as_ref(&self) -> &[T] {
        &self.data
    }
}

impl<T: Numeric> Index<usize> for Vector<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T: Numeric> IndexMut<usize> for Vector<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }
}

impl<T: Numeric> Lengthed for Vector<T> {
    fn len(&self) -> usize {
        self.data.len()
    }
}

impl<T: Numeric> Indexable<T> for Vector<T> {
    fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl<T: Numeric> MutablyIndexable<T> for Vector<T> {
    fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }
}
