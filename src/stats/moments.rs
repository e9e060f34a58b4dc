use num_traits::Float;

use super::sum::sum_as;
use crate::core::numeric::{convert, convert_count};
use crate::core::Numeric;
use crate::error::{Error, Result};

fn ensure_not_empty(len: usize, operation: &str) -> Result<()> {
    if len == 0 {
        return Err(Error::EmptySequence(format!("{} of an empty sequence", operation)));
    }
    Ok(())
}

/// Arithmetic mean in the element type
pub fn mean<T: Numeric>(x: &[T]) -> Result<T> {
    mean_as::<T, T>(x)
}

/// Arithmetic mean accumulated and returned in `A`.
///
/// Integral accumulators truncate the quotient.
pub fn mean_as<T: Numeric, A: Numeric>(x: &[T]) -> Result<A> {
    ensure_not_empty(x.len(), "mean")?;
    let total = sum_as::<T, A>(x)?;
    Ok(total / convert_count::<A>(x.len())?)
}

// Sum of squared deviations from `mean`, accumulated in A. Unsigned
// accumulators take the absolute difference so they never underflow; an
// integral accumulator too narrow for a deviation fails with `Overflow`.
fn squared_deviations<T: Numeric, A: Numeric>(x: &[T], mean: A) -> Result<A> {
    let overflow = || {
        Error::Overflow(format!(
            "squared deviations of {} values overflowed {}",
            x.len(),
            A::DATA_TYPE
        ))
    };

    let mut total = A::zero();
    for &value in x {
        let v = convert::<T, A>(value)?;
        let d = if v >= mean {
            v.checked_difference(mean)
        } else {
            mean.checked_difference(v)
        }
        .ok_or_else(overflow)?;
        let squared = d.checked_product(d).ok_or_else(overflow)?;
        total = total.checked_accumulate(squared).ok_or_else(overflow)?;
    }
    Ok(total)
}

fn variance_with<T: Numeric, A: Numeric>(
    x: &[T],
    mean: Option<A>,
    correction: usize,
    operation: &str,
) -> Result<A> {
    ensure_not_empty(x.len(), operation)?;
    if x.len() <= correction {
        return Err(Error::InsufficientData {
            required: correction + 1,
            actual: x.len(),
        });
    }

    let mean = match mean {
        Some(m) => m,
        None => mean_as::<T, A>(x)?,
    };
    let total = squared_deviations(x, mean)?;
    Ok(total / convert_count::<A>(x.len() - correction)?)
}

/// Sample variance (denominator `n - 1`) in the element type
pub fn variance<T: Numeric>(x: &[T], mean: Option<T>) -> Result<T> {
    variance_as::<T, T>(x, mean)
}

/// Sample variance (denominator `n - 1`) accumulated in `A`.
///
/// `mean` skips the first pass when the caller already has it. Fails with
/// `EmptySequence` for no elements and `InsufficientData` for one.
pub fn variance_as<T: Numeric, A: Numeric>(x: &[T], mean: Option<A>) -> Result<A> {
    variance_with(x, mean, 1, "variance")
}

/// Population variance (denominator `n`) in the element type
pub fn population_variance<T: Numeric>(x: &[T], mean: Option<T>) -> Result<T> {
    population_variance_as::<T, T>(x, mean)
}

/// Population variance (denominator `n`) accumulated in `A`
pub fn population_variance_as<T: Numeric, A: Numeric>(x: &[T], mean: Option<A>) -> Result<A> {
    variance_with(x, mean, 0, "population variance")
}

/// Sample standard deviation
pub fn standard_deviation<T: Numeric + Float>(x: &[T], mean: Option<T>) -> Result<T> {
    standard_deviation_as::<T, T>(x, mean)
}

pub fn standard_deviation_as<T: Numeric, A: Numeric + Float>(
    x: &[T],
    mean: Option<A>,
) -> Result<A> {
    Ok(variance_as::<T, A>(x, mean)?.sqrt())
}

/// Population standard deviation
pub fn population_standard_deviation<T: Numeric + Float>(x: &[T], mean: Option<T>) -> Result<T> {
    population_standard_deviation_as::<T, T>(x, mean)
}

pub fn population_standard_deviation_as<T: Numeric, A: Numeric + Float>(
    x: &[T],
    mean: Option<A>,
) -> Result<A> {
    Ok(population_variance_as::<T, A>(x, mean)?.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean() {
        assert_eq!(mean_as::<i32, f64>(&[1, 2, 3, 4]).unwrap(), 2.5);
        assert_eq!(mean(&[1, 2, 3, 4]).unwrap(), 2);
        assert!(matches!(mean::<f64>(&[]), Err(Error::EmptySequence(_))));
    }

    #[test]
    fn test_variance() {
        let x = [2.0f64, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert!((population_variance(&x, None).unwrap() - 4.0).abs() < 1e-10);
        assert!((variance(&x, None).unwrap() - 32.0 / 7.0).abs() < 1e-10);
        assert!((population_standard_deviation(&x, None).unwrap() - 2.0).abs() < 1e-10);
        assert!((variance(&x, Some(5.0)).unwrap() - 32.0 / 7.0).abs() < 1e-10);
    }

    #[test]
    fn test_sample_variance_of_one_element() {
        let result = variance_as::<i32, f64>(&[3], None);
        assert!(matches!(
            result,
            Err(Error::InsufficientData {
                required: 2,
                actual: 1
            })
        ));
        assert_eq!(population_variance_as::<i32, f64>(&[3], None).unwrap(), 0.0);
    }

    #[test]
    fn test_unsigned_accumulator_does_not_underflow() {
        // mean 2, squared deviations 1 + 0 + 1
        assert_eq!(population_variance(&[1u32, 2, 3], None).unwrap(), 0);
        assert_eq!(variance(&[1u32, 2, 3], None).unwrap(), 1);
    }

    #[test]
    fn test_integral_deviation_overflow() {
        assert!(matches!(
            variance::<i32>(&[i32::MIN, i32::MAX], None),
            Err(Error::Overflow(_))
        ));
        assert!(matches!(
            population_variance::<u8>(&[0, 200], None),
            Err(Error::Overflow(_))
        ));
        // a wider accumulator holds the same deviations
        let wide = variance_as::<i32, f64>(&[i32::MIN, i32::MAX], None).unwrap();
        assert!(wide > 0.0 && wide.is_finite());
    }

    #[test]
    fn test_integral_mean_wraps_with_the_sum() {
        // the plain sum wraps in i64, so the narrow mean is meaningless
        assert_eq!(mean::<i64>(&[i64::MAX, i64::MAX]).unwrap(), -1);
        assert_eq!(mean_as::<i64, i128>(&[i64::MAX, i64::MAX]).unwrap(), i64::MAX as i128);
        assert_eq!(mean_as::<i64, f64>(&[i64::MAX, i64::MAX]).unwrap(), i64::MAX as f64);
    }
}
