use crate::core::numeric::convert;
use crate::core::Numeric;
use crate::error::{Error, Result};

/// Smallest element. Fails with `EmptySequence` on empty input; a NaN element is returned as the result.
pub fn min<T: Numeric>(x: &[T]) -> Result<T> {
    extreme(x, "min", |candidate, current| candidate < current)
}

/// Smallest element converted to `A`
pub fn min_as<T: Numeric, A: Numeric>(x: &[T]) -> Result<A> {
    convert(min(x)?)
}

/// Largest element. Fails with `EmptySequence` on empty input; a NaN element is returned as the result.
pub fn max<T: Numeric>(x: &[T]) -> Result<T> {
    extreme(x, "max", |candidate, current| candidate > current)
}

/// Largest element converted to `A`
pub fn max_as<T: Numeric, A: Numeric>(x: &[T]) -> Result<A> {
    convert(max(x)?)
}

fn extreme<T, F>(x: &[T], operation: &str, replaces: F) -> Result<T>
where
    T: Numeric,
    F: Fn(T, T) -> bool,
{
    let (&first, rest) = x
        .split_first()
        .ok_or_else(|| Error::EmptySequence(format!("{} of an empty sequence", operation)))?;

    if first.is_nan() {
        return Ok(first);
    }

    let mut current = first;
    for &value in rest {
        if value.is_nan() {
            return Ok(value);
        }
        if replaces(value, current) {
            current = value;
        }
    }
    Ok(current)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_max() {
        let x = [3, -7, 12, 0];
        assert_eq!(min(&x).unwrap(), -7);
        assert_eq!(max(&x).unwrap(), 12);
        assert_eq!(max_as::<i32, f64>(&x).unwrap(), 12.0);
    }

    #[test]
    fn test_empty_fails() {
        assert!(matches!(min::<u8>(&[]), Err(Error::EmptySequence(_))));
        assert!(matches!(max::<f32>(&[]), Err(Error::EmptySequence(_))));
    }

    #[test]
    fn test_nan_propagates() {
        assert!(min(&[1.0, f64::NAN, -1.0]).unwrap().is_nan());
        assert!(max(&[f32::NAN, 1.0]).unwrap().is_nan());
    }

    #[test]
    fn test_conversion_out_of_range() {
        assert!(matches!(min_as::<i32, u8>(&[-1, 5]), Err(Error::Cast(_))));
    }
}
