// Numeric view primitives
//
// Three ownership flavours over contiguous numeric storage:
// - `Vector<T>` exclusively owns a fixed-length buffer and can be mutated in place
// - `ReadOnlyVector<T>` shares immutable storage and may be read from many threads
// - `SpanVector<'a, T>` / `ReadOnlySpanVector<'a, T>` borrow storage owned elsewhere
//   and cannot outlive the borrow they were created from
mod owned;
pub mod primitives;
mod read_only;
mod span;

pub use owned::Vector;
pub use read_only::ReadOnlyVector;
pub use span::{ReadOnlySpanVector, SpanVector};

use crate::core::{Indexable, Lengthed, MutablyIndexable, Numeric};

/// Element-wise equality where NaN equals NaN
pub(crate) fn values_equal<T: Numeric>(a: &[T], b: &[T]) -> bool {
    a.len() == b.len()
        && a
            .iter()
            .zip(b.iter())
            .all(|(&x, &y)| x == y || (x.is_nan() && y.is_nan()))
}

// Plain slices and Vecs take part in every primitive operation

impl<T: Numeric> Lengthed for [T] {
    fn len(&self) -> usize {
        <[T]>::len(self)
    }
}

impl<T: Numeric> Indexable<T> for [T] {
    fn as_slice(&self) -> &[T] {
        self
    }
}

impl<T: Numeric> MutablyIndexable<T> for [T] {
    fn as_mut_slice(&mut self) -> &mut [T] {
        self
    }
}

impl<T: Numeric> Lengthed for Vec<T> {
    fn len(&self) -> usize {
        Vec::len(self)
    }
}

impl<T: Numeric> Indexable<T> for Vec<T> {
    fn as_slice(&self) -> &[T] {
        Vec::as_slice(self)
    }
}

impl<T: Numeric> MutablyIndexable<T> for Vec<T> {
    fn as_mut_slice(&mut self) -> &mut [T] {
        Vec::as_mut_slice(self)
    }
}
