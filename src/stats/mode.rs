use std::collections::HashMap;

use crate::core::numeric::convert;
use crate::core::Numeric;
use crate::error::{Error, Result};

/// Most frequent element.
///
/// Ties go to the value encountered first. All NaNs count as one value.
pub fn mode<T: Numeric>(x: &[T]) -> Result<T> {
    if x.is_empty() {
        return Err(Error::EmptySequence("mode of an empty sequence".into()));
    }

    let mut counts: HashMap<u128, usize> = HashMap::with_capacity(x.len());
    for &value in x {
        *counts.entry(value.lookup_key()).or_insert(0) += 1;
    }

    // first value in sequence order whose count is the maximum
    let highest = counts.values().copied().max().unwrap_or(0);
    x.iter()
        .copied()
        .find(|value| counts.get(&value.lookup_key()) == Some(&highest))
        .ok_or_else(|| Error::EmptySequence("mode of an empty sequence".into()))
}

/// Most frequent element converted to `A`
pub fn mode_as<T: Numeric, A: Numeric>(x: &[T]) -> Result<A> {
    convert(mode(x)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode() {
        assert_eq!(mode(&[1, 3, 3, 2, 1, 3]).unwrap(), 3);
    }

    #[test]
    fn test_tie_goes_to_first_seen() {
        assert_eq!(mode(&[5, 7, 7, 5, 9]).unwrap(), 5);
        assert_eq!(mode(&[2.5, 1.0]).unwrap(), 2.5);
    }

    #[test]
    fn test_signed_zero_counts_together() {
        assert_eq!(mode(&[1.0, -0.0, 0.0, 1.0, 0.0]).unwrap(), 0.0);
        assert_eq!(mode_as::<i16, i64>(&[4, 4, 1]).unwrap(), 4);
    }

    #[test]
    fn test_empty() {
        assert!(mode::<u64>(&[]).is_err());
    }
}
