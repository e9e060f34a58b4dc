//! Reductions over cells that may be missing

use crate::core::numeric::{convert, convert_count};
use crate::core::Numeric;
use crate::error::{Error, Result};
use crate::na::NA;

/// Number of missing cells
pub fn count_missing<T: Numeric>(x: &[NA<T>]) -> usize {
    x.iter().filter(|v| v.is_na()).count()
}

/// Sum of the present cells in `A`; zero when every cell is missing
pub fn sum_present_as<T: Numeric, A: Numeric>(x: &[NA<T>]) -> Result<A> {
    let mut total = A::zero();
    for cell in x {
        if let NA::Value(v) = cell {
            total = total.wrapping_accumulate(convert::<T, A>(*v)?);
        }
    }
    Ok(total)
}

/// Mean of the present cells in `A`.
///
/// Fails with `EmptySequence` when no cell has a value.
pub fn mean_present_as<T: Numeric, A: Numeric>(x: &[NA<T>]) -> Result<A> {
    let present = x.len() - count_missing(x);
    if present == 0 {
        return Err(Error::EmptySequence(format!(
            "mean of {} cells with no present value",
            x.len()
        )));
    }
    Ok(sum_present_as::<T, A>(x)? / convert_count::<A>(present)?)
}
