//! Element-wise arithmetic and comparison over equal-length views.
//!
//! Every operation validates lengths, integral divisors and integral overflow
//! before the first element is written, so a failed call never leaves the
//! destination partially updated.

use crate::core::{Indexable, MutablyIndexable, Numeric};
use crate::error::{ensure_same_length, Error, Result};

fn check_binary<T, X, Y, D>(x: &X, y: &Y, destination: &D) -> Result<()>
where
    T: Numeric,
    X: Indexable<T> + ?Sized,
    Y: Indexable<T> + ?Sized,
    D: Indexable<T> + ?Sized,
{
    ensure_same_length(x.as_slice().len(), y.as_slice().len())?;
    ensure_same_length(x.as_slice().len(), destination.as_slice().len())
}

fn check_divisors<T: Numeric>(divisors: &[T]) -> Result<()> {
    if T::DATA_TYPE.is_floating_point() {
        return Ok(());
    }
    match divisors.iter().position(|d| d.is_zero()) {
        Some(i) => Err(Error::InvalidArgument(format!(
            "integral division by zero at element {}",
            i
        ))),
        None => Ok(()),
    }
}

// Evaluates every pair up front; the first unrepresentable result fails the
// whole operation with `Overflow`.
fn evaluate<T, I, F>(pairs: I, symbol: &str, op: F) -> Result<Vec<T>>
where
    T: Numeric,
    I: Iterator<Item = (T, T)>,
    F: Fn(T, T) -> Option<T>,
{
    pairs
        .map(|(a, b)| {
            op(a, b).ok_or_else(|| {
                Error::Overflow(format!("{} {} {} overflows {}", a, symbol, b, T::DATA_TYPE))
            })
        })
        .collect()
}

macro_rules! elementwise_op {
    ($name:ident, $in_place:ident, $scalar_in_place:ident, $op:tt, $checked:ident, $doc:literal) => {
        #[doc = concat!("Writes `x[i] ", stringify!($op), " y[i]` into `destination`.")]
        #[doc = ""]
        #[doc = concat!("Fails with `LengthMismatch` if the three views differ in length and with `Overflow` if an integral result does not fit. ", $doc)]
        pub fn $name<T, X, Y, D>(x: &X, y: &Y, destination: &mut D) -> Result<()>
        where
            T: Numeric,
            X: Indexable<T> + ?Sized,
            Y: Indexable<T> + ?Sized,
            D: MutablyIndexable<T> + ?Sized,
        {
            check_binary(x, y, destination)?;
            elementwise_op!(@divisors $op, y.as_slice());
            let pairs = x.as_slice().iter().copied().zip(y.as_slice().iter().copied());
            let values = evaluate(pairs, stringify!($op), T::$checked)?;
            destination.as_mut_slice().copy_from_slice(&values);
            Ok(())
        }

        #[doc = concat!("Replaces every `x[i]` with `x[i] ", stringify!($op), " y[i]`.")]
        pub fn $in_place<T, X, Y>(x: &mut X, y: &Y) -> Result<()>
        where
            T: Numeric,
            X: MutablyIndexable<T> + ?Sized,
            Y: Indexable<T> + ?Sized,
        {
            ensure_same_length(x.as_slice().len(), y.as_slice().len())?;
            elementwise_op!(@divisors $op, y.as_slice());
            let pairs = x.as_slice().iter().copied().zip(y.as_slice().iter().copied());
            let values = evaluate(pairs, stringify!($op), T::$checked)?;
            x.as_mut_slice().copy_from_slice(&values);
            Ok(())
        }

        #[doc = concat!("Replaces every `x[i]` with `x[i] ", stringify!($op), " value`.")]
        pub fn $scalar_in_place<T, X>(x: &mut X, value: T) -> Result<()>
        where
            T: Numeric,
            X: MutablyIndexable<T> + ?Sized,
        {
            elementwise_op!(@divisors $op, &[value][..]);
            let pairs = x.as_slice().iter().map(|&a| (a, value));
            let values = evaluate(pairs, stringify!($op), T::$checked)?;
            x.as_mut_slice().copy_from_slice(&values);
            Ok(())
        }
    };
    (@divisors /, $divisors:expr) => {
        check_divisors($divisors)?;
    };
    (@divisors $op:tt, $divisors:expr) => {};
}

elementwise_op!(add, add_in_place, add_scalar_in_place, +, checked_accumulate, "");
elementwise_op!(subtract, subtract_in_place, subtract_scalar_in_place, -, checked_difference, "");
elementwise_op!(multiply, multiply_in_place, multiply_scalar_in_place, *, checked_product, "");
elementwise_op!(
    divide,
    divide_in_place,
    divide_scalar_in_place,
    /,
    checked_quotient,
    "Integral division by zero fails with `InvalidArgument`."
);

/// `x[i] == y[i]` for every element; NaN never equals anything
pub fn equals<T, X, Y>(x: &X, y: &Y) -> Result<Vec<bool>>
where
    T: Numeric,
    X: Indexable<T> + ?Sized,
    Y: Indexable<T> + ?Sized,
{
    compare(x, y, |a, b| a == b)
}

pub fn greater_than<T, X, Y>(x: &X, y: &Y) -> Result<Vec<bool>>
where
    T: Numeric,
    X: Indexable<T> + ?Sized,
    Y: Indexable<T> + ?Sized,
{
    compare(x, y, |a, b| a > b)
}

pub fn less_than<T, X, Y>(x: &X, y: &Y) -> Result<Vec<bool>>
where
    T: Numeric,
    X: Indexable<T> + ?Sized,
    Y: Indexable<T> + ?Sized,
{
    compare(x, y, |a, b| a < b)
}

/// Compares every element against a single value
pub fn greater_than_value<T, X>(x: &X, value: T) -> Vec<bool>
where
    T: Numeric,
    X: Indexable<T> + ?Sized,
{
    x.as_slice().iter().map(|&a| a > value).collect()
}

pub fn less_than_value<T, X>(x: &X, value: T) -> Vec<bool>
where
    T: Numeric,
    X: Indexable<T> + ?Sized,
{
    x.as_slice().iter().map(|&a| a < value).collect()
}

/// `true` when the views have equal length and every pair of elements is equal
pub fn equals_all<T, X, Y>(x: &X, y: &Y) -> bool
where
    T: Numeric,
    X: Indexable<T> + ?Sized,
    Y: Indexable<T> + ?Sized,
{
    let (x, y) = (x.as_slice(), y.as_slice());
    x.len() == y.len() && x.iter().zip(y).all(|(a, b)| a == b)
}

/// `true` when at least one pair of elements at the same position is equal
pub fn equals_any<T, X, Y>(x: &X, y: &Y) -> Result<bool>
where
    T: Numeric,
    X: Indexable<T> + ?Sized,
    Y: Indexable<T> + ?Sized,
{
    ensure_same_length(x.as_slice().len(), y.as_slice().len())?;
    Ok(x.as_slice().iter().zip(y.as_slice()).any(|(a, b)| a == b))
}

fn compare<T, X, Y, F>(x: &X, y: &Y, f: F) -> Result<Vec<bool>>
where
    T: Numeric,
    X: Indexable<T> + ?Sized,
    Y: Indexable<T> + ?Sized,
    F: Fn(T, T) -> bool,
{
    let (x, y) = (x.as_slice(), y.as_slice());
    ensure_same_length(x.len(), y.len())?;
    Ok(x.iter().zip(y).map(|(&a, &b)| f(a, b)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::Vector;

    #[test]
    fn test_add_into_destination() {
        let x = Vector::from([1, 2, 3]);
        let y = Vector::from([10, 20, 30]);
        let mut dest: Vector<i32> = Vector::zeros(3);
        add(&x, &y, &mut dest).unwrap();
        assert_eq!(dest.as_slice(), &[11, 22, 33]);
    }

    #[test]
    fn test_length_mismatch_leaves_destination() {
        let x = Vector::from([1.0, 2.0, 3.0]);
        let y = Vector::from([1.0, 2.0]);
        let mut dest = Vector::filled(3, -1.0);
        let err = multiply(&x, &y, &mut dest).unwrap_err();
        assert!(matches!(err, Error::LengthMismatch { expected: 3, actual: 2 }));
        assert_eq!(dest.as_slice(), &[-1.0, -1.0, -1.0]);
    }

    #[test]
    fn test_integral_divide_by_zero_is_rejected_up_front() {
        let mut x = Vector::from([10, 20, 30]);
        let y = [2, 0, 5];
        assert!(divide_in_place(&mut x, &y[..]).is_err());
        assert_eq!(x.as_slice(), &[10, 20, 30]);

        assert!(divide_scalar_in_place(&mut x, 0).is_err());
        divide_scalar_in_place(&mut x, 10).unwrap();
        assert_eq!(x.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn test_integral_overflow_is_rejected_up_front() {
        let x = [1i8, 100];
        let y = [1i8, 100];
        let mut dest = Vector::filled(2, -1i8);
        assert!(matches!(add(&x[..], &y[..], &mut dest), Err(Error::Overflow(_))));
        assert_eq!(dest.as_slice(), &[-1, -1]);

        let mut q = Vector::from([10, i32::MIN]);
        assert!(matches!(
            divide_in_place(&mut q, &[2, -1][..]),
            Err(Error::Overflow(_))
        ));
        assert_eq!(q.as_slice(), &[10, i32::MIN]);

        let mut u = Vector::from([3u16, 0]);
        assert!(matches!(subtract_scalar_in_place(&mut u, 1), Err(Error::Overflow(_))));
        assert_eq!(u.as_slice(), &[3, 0]);
        assert!(multiply_scalar_in_place(&mut u, 2).is_ok());
        assert_eq!(u.as_slice(), &[6, 0]);
    }

    #[test]
    fn test_float_divide_by_zero_follows_ieee() {
        let mut x = Vector::from([1.0, -1.0]);
        divide_scalar_in_place(&mut x, 0.0).unwrap();
        assert_eq!(x.as_slice(), &[f64::INFINITY, f64::NEG_INFINITY]);
    }

    #[test]
    fn test_comparisons() {
        let x = [1, 5, 3];
        let y = [2, 5, 1];
        assert_eq!(equals(&x[..], &y[..]).unwrap(), vec![false, true, false]);
        assert_eq!(greater_than(&x[..], &y[..]).unwrap(), vec![false, false, true]);
        assert_eq!(less_than_value(&x[..], 4), vec![true, false, true]);
        assert!(equals_any(&x[..], &y[..]).unwrap());
        assert!(!equals_all(&x[..], &y[..]));
        assert!(equals_all(&x[..], &x[..]));
    }
}
