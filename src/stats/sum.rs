use num_traits::Float;

use super::options::{SumOptions, SummationCompensation};
use crate::core::numeric::convert;
use crate::core::Numeric;
use crate::error::{Error, Result};

// Block size below which pairwise summation falls back to a plain loop
const PAIRWISE_BLOCK: usize = 128;

/// Sum of the elements, accumulated in the element type.
///
/// Returns zero for an empty slice.
pub fn sum<T: Numeric>(x: &[T]) -> Result<T> {
    sum_as::<T, T>(x)
}

/// Sum of the elements, accumulated and returned in `A`.
///
/// Each element is converted to `A` before it is added, so summing `i32`
/// into `i64` cannot overflow where summing into `i32` would. An element that
/// is not representable in `A` fails with `Cast`. Integral overflow wraps; use
/// `sum_checked_as` to detect it. Returns zero for an empty slice. NaN
/// propagates.
pub fn sum_as<T: Numeric, A: Numeric>(x: &[T]) -> Result<A> {
    if T::DATA_TYPE == A::DATA_TYPE {
        // same type: no per-element conversion
        let total = x
            .iter()
            .fold(T::zero(), |acc, &value| acc.wrapping_accumulate(value));
        return convert(total);
    }

    let mut total = A::zero();
    for &value in x {
        total = total.wrapping_accumulate(convert::<T, A>(value)?);
    }
    Ok(total)
}

/// Sum accumulated in the element type, failing with `Overflow` instead of wrapping
pub fn sum_checked<T: Numeric>(x: &[T]) -> Result<T> {
    sum_checked_as::<T, T>(x)
}

/// Sum accumulated in `A`, failing with `Overflow` instead of wrapping.
///
/// A NaN element ends the accumulation and is returned as the result.
pub fn sum_checked_as<T: Numeric, A: Numeric>(x: &[T]) -> Result<A> {
    let mut total = A::zero();
    for &value in x {
        if value.is_nan() {
            return convert(value);
        }
        let v = convert::<T, A>(value)?;
        total = total.checked_accumulate(v).ok_or_else(|| {
            Error::Overflow(format!(
                "sum exceeded the range of {} after adding {}",
                A::DATA_TYPE,
                value
            ))
        })?;
    }
    Ok(total)
}

/// Floating point sum accumulated in the element type using `options`
pub fn sum_float_with<T: Numeric + Float>(x: &[T], options: &SumOptions) -> Result<T> {
    sum_float_with_as::<T, T>(x, options)
}

/// Floating point sum accumulated in `A` using `options`.
///
/// With `checked` set, an infinite result produced from finite input fails
/// with `Overflow`. A NaN element makes the result NaN regardless of the
/// compensation strategy.
pub fn sum_float_with_as<T, A>(x: &[T], options: &SumOptions) -> Result<A>
where
    T: Numeric + Float,
    A: Numeric + Float,
{
    log::trace!(
        "summing {} {} values into {} with {:?}",
        x.len(),
        T::DATA_TYPE,
        A::DATA_TYPE,
        options.compensation
    );

    if x.iter().any(|v| Float::is_nan(*v)) {
        return Ok(A::nan());
    }

    let total = match options.compensation {
        SummationCompensation::None => sum_as::<T, A>(x)?,
        SummationCompensation::KahanBabushkaNeumaier => sum_kbn::<T, A>(x)?,
        SummationCompensation::Pairwise => sum_pairwise::<T, A>(x)?,
        SummationCompensation::KahanBabushka => {
            log::warn!("second-order Kahan-Babushka summation was requested");
            return Err(Error::NotImplemented(
                "second-order Kahan-Babushka summation".to_string(),
            ));
        }
    };

    if options.checked && total.is_infinite() && x.iter().all(|v| v.is_finite()) {
        return Err(Error::Overflow(format!(
            "sum of {} finite values overflowed {}",
            x.len(),
            A::DATA_TYPE
        )));
    }

    Ok(total)
}

fn sum_kbn<T, A>(x: &[T]) -> Result<A>
where
    T: Numeric + Float,
    A: Numeric + Float,
{
    let mut total = A::zero();
    let mut compensation = A::zero();

    for &value in x {
        let v = convert::<T, A>(value)?;
        let t = total + v;
        if total.abs() >= v.abs() {
            compensation = compensation + ((total - t) + v);
        } else {
            compensation = compensation + ((v - t) + total);
        }
        total = t;
    }

    // An infinite running total leaves the compensation at NaN
    if !total.is_finite() {
        return Ok(total);
    }
    Ok(total + compensation)
}

fn sum_pairwise<T, A>(x: &[T]) -> Result<A>
where
    T: Numeric + Float,
    A: Numeric + Float,
{
    if x.len() <= PAIRWISE_BLOCK {
        return sum_as::<T, A>(x);
    }
    let (left, right) = x.split_at(x.len() / 2);
    Ok(sum_pairwise::<T, A>(left)? + sum_pairwise::<T, A>(right)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sum_is_zero() {
        assert_eq!(sum::<i32>(&[]).unwrap(), 0);
        assert_eq!(sum_as::<u8, f64>(&[]).unwrap(), 0.0);
        assert_eq!(sum_checked::<i64>(&[]).unwrap(), 0);
    }

    #[test]
    fn test_wider_accumulator_avoids_overflow() {
        let x = [i32::MAX, i32::MAX];
        assert!(matches!(sum_checked(&x), Err(Error::Overflow(_))));
        assert_eq!(sum_as::<i32, i64>(&x).unwrap(), 2 * i32::MAX as i64);
        assert_eq!(sum_checked_as::<i32, i64>(&x).unwrap(), 2 * i32::MAX as i64);
    }

    #[test]
    fn test_plain_sum_wraps() {
        assert_eq!(sum(&[i8::MAX, 1]).unwrap(), i8::MIN);
    }

    #[test]
    fn test_unrepresentable_element_fails_with_cast() {
        assert!(matches!(sum_as::<i32, u32>(&[1, -1]), Err(Error::Cast(_))));
    }

    #[test]
    fn test_nan_propagates() {
        assert!(sum(&[1.0, f64::NAN, 2.0]).unwrap().is_nan());
        assert!(sum_checked_as::<f32, f64>(&[1.0, f32::NAN]).unwrap().is_nan());
        let options = SumOptions::builder()
            .compensation(SummationCompensation::KahanBabushkaNeumaier)
            .build();
        assert!(sum_float_with(&[f64::NAN], &options).unwrap().is_nan());
    }

    #[test]
    fn test_kbn_recovers_lost_precision() {
        let x = [1.0, 1e100, 1.0, -1e100];
        let plain = sum_float_with(&x, &SumOptions::default()).unwrap();
        let options = SumOptions::builder()
            .compensation(SummationCompensation::KahanBabushkaNeumaier)
            .build();
        let compensated = sum_float_with(&x, &options).unwrap();
        assert_eq!(plain, 0.0);
        assert_eq!(compensated, 2.0);
    }

    #[test]
    fn test_kbn_keeps_infinite_totals() {
        let options = SumOptions::builder()
            .compensation(SummationCompensation::KahanBabushkaNeumaier)
            .build();
        assert_eq!(sum_float_with(&[f64::INFINITY, 1.0], &options).unwrap(), f64::INFINITY);
        assert_eq!(
            sum_float_with(&[1.0, f64::NEG_INFINITY, 2.0], &options).unwrap(),
            f64::NEG_INFINITY
        );
        assert!(sum_float_with(&[f64::INFINITY, f64::NEG_INFINITY], &options)
            .unwrap()
            .is_nan());
    }

    #[test]
    fn test_pairwise_matches_plain_sum_on_exact_values() {
        let x: Vec<f64> = (0..1000).map(|i| i as f64).collect();
        let options = SumOptions::builder()
            .compensation(SummationCompensation::Pairwise)
            .build();
        assert_eq!(sum_float_with(&x, &options).unwrap(), 499_500.0);
    }

    #[test]
    fn test_second_order_compensation_is_not_implemented() {
        let options = SumOptions::builder()
            .compensation(SummationCompensation::KahanBabushka)
            .build();
        let result = sum_float_with(&[1.0f64], &options);
        assert!(matches!(result, Err(Error::NotImplemented(_))));
    }

    #[test]
    fn test_checked_float_overflow() {
        let options = SumOptions::builder().checked(true).build();
        let x = [f32::MAX, f32::MAX];
        assert!(matches!(sum_float_with(&x, &options), Err(Error::Overflow(_))));
        assert!(sum_float_with_as::<f32, f64>(&x, &options).is_ok());
    }
}
