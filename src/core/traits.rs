//! Capability traits composed per concrete type.
//!
//! Vectors, views and series implement only the capabilities they actually
//! support: a read-only view is `Indexable` but never `MutablyIndexable`, and
//! a categorical series routes writes through `CategoryConstrained` instead of
//! exposing raw mutable storage.

use crate::category::CategorySet;
use crate::core::numeric::Numeric;
use crate::error::{ensure_in_bounds, Error, Result};

/// Anything with a fixed element count
pub trait Lengthed {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Positional read access over contiguous storage
pub trait Indexable<T: Numeric>: Lengthed {
    /// Contiguous view over all elements
    fn as_slice(&self) -> &[T];

    /// Value at `index`, or `IndexOutOfBounds`
    fn get(&self, index: usize) -> Result<T> {
        let slice = self.as_slice();
        ensure_in_bounds(index, slice.len())?;
        Ok(slice[index])
    }
}

/// Positional write access over contiguous storage
pub trait MutablyIndexable<T: Numeric>: Indexable<T> {
    fn as_mut_slice(&mut self) -> &mut [T];

    /// Writes `value` at `index`, or fails with `IndexOutOfBounds` leaving storage unchanged
    fn set(&mut self, index: usize, value: T) -> Result<()> {
        let slice = self.as_mut_slice();
        ensure_in_bounds(index, slice.len())?;
        slice[index] = value;
        Ok(())
    }
}

/// Values restricted to a permitted set
pub trait CategoryConstrained<T: Numeric> {
    /// The permitted set, if the values are constrained
    fn category_set(&self) -> Option<&CategorySet<T>>;

    fn is_categorical(&self) -> bool {
        self.category_set().is_some()
    }

    /// Gate used before every write
    fn check_category(&self, value: T) -> Result<()> {
        match self.category_set() {
            Some(set) if !set.contains(value) => Err(Error::InvalidCategory(format!(
                "{} is not one of the {} permitted categories",
                value,
                set.len()
            ))),
            _ => Ok(()),
        }
    }
}
