use num_traits::Float;

use crate::core::numeric::{convert, convert_count};
use crate::core::Numeric;
use crate::error::{Error, Result};

// Shared validation: empty input, negative elements. Returns the first NaN or
// zero element when it decides the result on its own.
fn scan_positive<T: Numeric, A: Numeric + Float>(x: &[T], operation: &str) -> Result<Option<A>> {
    if x.is_empty() {
        return Err(Error::EmptySequence(format!("{} of an empty sequence", operation)));
    }

    let mut has_zero = false;
    for (i, &value) in x.iter().enumerate() {
        if value.is_nan() {
            return Ok(Some(A::nan()));
        }
        if value < T::zero() {
            return Err(Error::InvalidArgument(format!(
                "{} is undefined for negative element {} at {}",
                operation, value, i
            )));
        }
        if value.is_zero() {
            has_zero = true;
        }
    }

    Ok(if has_zero { Some(A::zero()) } else { None })
}

/// Geometric mean in the element type
pub fn geometric_mean<T: Numeric + Float>(x: &[T]) -> Result<T> {
    geometric_mean_as::<T, T>(x)
}

/// Geometric mean computed in `A` as `exp(mean(ln x))`.
///
/// Negative elements fail with `InvalidArgument`. Any zero element makes the
/// result zero and a NaN element makes it NaN.
pub fn geometric_mean_as<T: Numeric, A: Numeric + Float>(x: &[T]) -> Result<A> {
    if let Some(decided) = scan_positive::<T, A>(x, "geometric mean")? {
        return Ok(decided);
    }

    let mut log_total = A::zero();
    for &value in x {
        log_total = log_total + convert::<T, A>(value)?.ln();
    }
    Ok((log_total / convert_count::<A>(x.len())?).exp())
}

/// Harmonic mean in the element type
pub fn harmonic_mean<T: Numeric + Float>(x: &[T]) -> Result<T> {
    harmonic_mean_as::<T, T>(x)
}

/// Harmonic mean `n / sum(1 / x)` computed in `A`.
///
/// Same input policy as `geometric_mean_as`.
pub fn harmonic_mean_as<T: Numeric, A: Numeric + Float>(x: &[T]) -> Result<A> {
    if let Some(decided) = scan_positive::<T, A>(x, "harmonic mean")? {
        return Ok(decided);
    }

    let mut reciprocal_total = A::zero();
    for &value in x {
        reciprocal_total = reciprocal_total + convert::<T, A>(value)?.recip();
    }
    Ok(convert_count::<A>(x.len())? / reciprocal_total)
}
