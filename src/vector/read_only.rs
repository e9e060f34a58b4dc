use std::ops::Index;
use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::owned::Vector;
use super::span::ReadOnlySpanVector;
use super::values_equal;
use crate::core::{Indexable, Lengthed, Numeric};
use crate::error::{ensure_in_bounds, Result};

/// Immutable numeric storage that can be shared.
///
/// Cloning is cheap and shares the same allocation. Nothing can mutate the
/// contents, so clones may be read from several threads at once.
#[derive(Debug, Clone)]
pub struct ReadOnlyVector<T: Numeric> {
    data: Arc<[T]>,
}

impl<T: Numeric> ReadOnlyVector<T> {
    /// Copies `values` into new storage owned by the returned vector
    pub fn from_slice(values: &[T]) -> Self {
        Self {
            data: Arc::from(values),
        }
    }

    /// Wraps existing shared storage without copying.
    ///
    /// The returned vector keeps the allocation alive for as long as any
    /// holder of it exists.
    pub fn wrap(data: Arc<[T]>) -> Self {
        Self { data }
    }

    pub fn empty() -> Self {
        Self::from_slice(&[])
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

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    pub fn as_read_only_span(&self) -> ReadOnlySpanVector<'_, T> {
        ReadOnlySpanVector::new(&self.data)
    }

    /// Independent mutable copy
    pub fn copied(&self) -> Vector<T> {
        Vector::from_slice(&self.data)
    }

    /// `true` when both vectors share one allocation
    pub fn shares_storage_with(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.data, &other.data)
    }

    /// The underlying shared storage
    pub fn storage(&self) -> Arc<[T]> {
        Arc::clone(&self.data)
    }
}

impl<T: Numeric> PartialEq for ReadOnlyVector<T> {
    fn eq(&self, other: &Self) -> bool {
        values_equal(&self.data, &other.data)
    }
}

impl<T: Numeric> Default for ReadOnlyVector<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Numeric> From<Vec<T>> for ReadOnlyVector<T> {
    fn from(values: Vec<T>) -> Self {
        Self {
            data: Arc::from(values),
        }
    }
}

impl<T: Numeric> From<Box<[T]>> for ReadOnlyVector<T> {
    fn from(values: Box<[T]>) -> Self {
        Self {
            data: Arc::from(values),
        }
    }
}

impl<T: Numeric> From<Arc<[T]>> for ReadOnlyVector<T> {
    fn from(data: Arc<[T]>) -> Self {
        Self::wrap(data)
    }
}

impl<T: Numeric> Index<usize> for ReadOnlyVector<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<'a, T: Numeric> IntoIterator for &'a ReadOnlyVector<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<T: Numeric> AsRef<[T]> for ReadOnlyVector<T> {
    fn as_ref(&self) -> &[T] {
        &self.data
    }
}

impl<T: Numeric> Lengthed for ReadOnlyVector<T> {
    fn len(&self) -> usize {
        self.data.len()
    }
}

impl<T: Numeric> Indexable<T> for ReadOnlyVector<T> {
    fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl<T: Numeric> Serialize for ReadOnlyVector<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.data.as_ref().serialize(serializer)
    }
}

impl<'de, T: Numeric> Deserialize<'de> for ReadOnlyVector<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer).map(Self::from)
    }
}
