use std::ops::Index;

use super::{References, Series};
use crate::category::CategorySet;
use crate::core::{CategoryConstrained, Indexable, Lengthed, Numeric};
use crate::error::Result;

/// Read-only window onto a series.
///
/// Shares the series' storage instead of copying it; the borrow keeps the
/// series alive and unchanged for as long as the window exists.
#[derive(Debug, Clone, Copy)]
pub struct ReadOnlySeries<'a, T: Numeric> {
    series: &'a Series<T>,
}

impl<'a, T: Numeric> ReadOnlySeries<'a, T> {
    pub(crate) fn new(series: &'a Series<T>) -> Self {
        ReadOnlySeries { series }
    }

    pub fn name(&self) -> Option<&'a str> {
        self.series.name()
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    pub fn get(&self, index: usize) -> Result<T> {
        self.series.get(index)
    }

    pub fn values(&self) -> &'a [T] {
        self.series.values()
    }

    pub fn label_of(&self, index: usize) -> Result<Option<&'a str>> {
        self.series.label_of(index)
    }

    pub fn references(&self) -> &'a References {
        self.series.references()
    }

    /// `true` when the window views `series`
    pub fn is_view_of(&self, series: &Series<T>) -> bool {
        std::ptr::eq(self.series, series)
    }

    /// Independent owned copy
    pub fn to_series(&self) -> Series<T> {
        self.series.clone()
    }
}

impl<T: Numeric> Index<usize> for ReadOnlySeries<'_, T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.series[index]
    }
}

impl<T: Numeric> Lengthed for ReadOnlySeries<'_, T> {
    fn len(&self) -> usize {
        self.series.len()
    }
}

impl<T: Numeric> Indexable<T> for ReadOnlySeries<'_, T> {
    fn as_slice(&self) -> &[T] {
        self.series.values()
    }
}

impl<T: Numeric> CategoryConstrained<T> for ReadOnlySeries<'_, T> {
    fn category_set(&self) -> Option<&CategorySet<T>> {
        self.series.categories()
    }
}
