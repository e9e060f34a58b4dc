use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::core::Numeric;
use crate::error::{Error, Result};

/// Permitted values of a categorical series.
///
/// Members keep insertion order. Membership uses value equality, so every
/// NaN is the same member and `-0.0` is the member `0.0`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "Vec<T>", into = "Vec<T>", bound = "T: Numeric")]
pub struct CategorySet<T: Numeric> {
    values: Vec<T>,
    keys: HashSet<u128>,
}

impl<T: Numeric> CategorySet<T> {
    /// Builds a set from distinct values; a repeated value fails with `DuplicateKey`
    pub fn new(values: Vec<T>) -> Result<Self> {
        let mut set = Self::empty();
        for value in values {
            if !set.insert(value) {
                return Err(Error::DuplicateKey(format!(
                    "category {} is listed more than once",
                    value
                )));
            }
        }
        Ok(set)
    }

    pub fn empty() -> Self {
        CategorySet {
            values: Vec::new(),
            keys: HashSet::new(),
        }
    }

    /// Adds a member. Returns `false` if it was already present.
    pub fn insert(&mut self, value: T) -> bool {
        if !self.keys.insert(value.lookup_key()) {
            return false;
        }
        self.values.push(value);
        true
    }

    pub fn contains(&self, value: T) -> bool {
        self.keys.contains(&value.lookup_key())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.values.iter()
    }

    /// Members in insertion order
    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    /// Fails with `InvalidCategory` unless `value` is a member
    pub fn check(&self, value: T) -> Result<()> {
        if self.contains(value) {
            Ok(())
        } else {
            Err(Error::InvalidCategory(format!(
                "{} is not one of {} permitted categories",
                value,
                self.len()
            )))
        }
    }

    /// Checks every value, reporting the first non-member
    pub fn check_all(&self, values: &[T]) -> Result<()> {
        values.iter().try_for_each(|&v| self.check(v))
    }
}

impl<T: Numeric> Default for CategorySet<T> {
    fn default() -> Self {
        Self::empty()
    }
}

// Same members, in any order
impl<T: Numeric> PartialEq for CategorySet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.keys == other.keys
    }
}

impl<T: Numeric> TryFrom<Vec<T>> for CategorySet<T> {
    type Error = Error;

    fn try_from(values: Vec<T>) -> Result<Self> {
        Self::new(values)
    }
}

impl<T: Numeric> From<CategorySet<T>> for Vec<T> {
    fn from(set: CategorySet<T>) -> Self {
        set.values
    }
}

impl<'a, T: Numeric> IntoIterator for &'a CategorySet<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
