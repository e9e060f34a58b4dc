use std::cmp::Ordering;
use std::fmt::{self, Debug, Display};
use std::ops::{Add, Div, Mul, Sub};

use num_traits::Zero;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Label written for a missing cell
pub const NA_LABEL: &str = "NA";

/// Nullable numeric cell (NA, Not Available).
///
/// Serializes as the bare value or `null`.
#[derive(Clone, Copy, Serialize, Deserialize)]
#[serde(from = "Option<T>", into = "Option<T>")]
pub enum NA<T: Clone> {
    /// A present value
    Value(T),
    /// Missing value
    NA,
}

impl<T: Clone> NA<T> {
    pub fn is_na(&self) -> bool {
        matches!(self, NA::NA)
    }

    pub fn is_value(&self) -> bool {
        !self.is_na()
    }

    /// The value, if present
    pub fn value(&self) -> Option<&T> {
        match self {
            NA::Value(v) => Some(v),
            NA::NA => None,
        }
    }

    /// The value, or `MissingValue` if the cell is empty
    pub fn require(&self) -> Result<T> {
        match self {
            NA::Value(v) => Ok(v.clone()),
            NA::NA => Err(Error::MissingValue(
                "attempted to read a value from an NA cell".to_string(),
            )),
        }
    }

    /// The value, or `default` when missing
    pub fn value_or(&self, default: T) -> T {
        match self {
            NA::Value(v) => v.clone(),
            NA::NA => default,
        }
    }

    pub fn map<U: Clone, F>(&self, f: F) -> NA<U>
    where
        F: FnOnce(&T) -> U,
    {
        match self {
            NA::Value(v) => NA::Value(f(v)),
            NA::NA => NA::NA,
        }
    }
}

impl<T: Clone> From<T> for NA<T> {
    fn from(value: T) -> Self {
        NA::Value(value)
    }
}

impl<T: Clone> From<Option<T>> for NA<T> {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => NA::Value(v),
            None => NA::NA,
        }
    }
}

impl<T: Clone> From<NA<T>> for Option<T> {
    fn from(na: NA<T>) -> Self {
        match na {
            NA::Value(v) => Some(v),
            NA::NA => None,
        }
    }
}

impl<T: Clone + Debug> Debug for NA<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NA::Value(v) => write!(f, "{:?}", v),
            NA::NA => f.write_str(NA_LABEL),
        }
    }
}

impl<T: Clone + Display> Display for NA<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NA::Value(v) => write!(f, "{}", v),
            NA::NA => f.write_str(NA_LABEL),
        }
    }
}

// Two missing cells compare equal; a missing cell never equals a value
impl<T: Clone + PartialEq> PartialEq for NA<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (NA::Value(a), NA::Value(b)) => a == b,
            (NA::NA, NA::NA) => true,
            _ => false,
        }
    }
}

// NA sorts before every value
impl<T: Clone + PartialOrd> PartialOrd for NA<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (NA::Value(a), NA::Value(b)) => a.partial_cmp(b),
            (NA::NA, NA::NA) => Some(Ordering::Equal),
            (NA::NA, _) => Some(Ordering::Less),
            (_, NA::NA) => Some(Ordering::Greater),
        }
    }
}

impl<T: Clone + Add<Output = T>> Add for NA<T> {
    type Output = NA<T>;

    fn add(self, other: Self) -> Self::Output {
        match (self, other) {
            (NA::Value(a), NA::Value(b)) => NA::Value(a + b),
            _ => NA::NA,
        }
    }
}

impl<T: Clone + Sub<Output = T>> Sub for NA<T> {
    type Output = NA<T>;

    fn sub(self, other: Self) -> Self::Output {
        match (self, other) {
            (NA::Value(a), NA::Value(b)) => NA::Value(a - b),
            _ => NA::NA,
        }
    }
}

impl<T: Clone + Mul<Output = T>> Mul for NA<T> {
    type Output = NA<T>;

    fn mul(self, other: Self) -> Self::Output {
        match (self, other) {
            (NA::Value(a), NA::Value(b)) => NA::Value(a * b),
            _ => NA::NA,
        }
    }
}

impl<T: Clone + Div<Output = T> + Zero> Div for NA<T> {
    type Output = NA<T>;

    fn div(self, other: Self) -> Self::Output {
        match (self, other) {
            // division by zero is missing rather than a panic
            (NA::Value(_), NA::Value(b)) if b.is_zero() => NA::NA,
            (NA::Value(a), NA::Value(b)) => NA::Value(a / b),
            _ => NA::NA,
        }
    }
}
