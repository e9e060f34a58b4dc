use serde::{Deserialize, Serialize};

use crate::core::{Indexable, Numeric};
use crate::error::{ensure_same_length, Result};

/// Two-dimensional coordinate
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(bound = "TX: Numeric, TY: Numeric")]
pub struct DataPoint<TX: Numeric, TY: Numeric> {
    pub x: TX,
    pub y: TY,
}

impl<TX: Numeric, TY: Numeric> DataPoint<TX, TY> {
    pub fn new(x: TX, y: TY) -> Self {
        DataPoint { x, y }
    }

    /// Pairs up two equal-length views element by element
    pub fn zip<X, Y>(xs: &X, ys: &Y) -> Result<Vec<Self>>
    where
        X: Indexable<TX> + ?Sized,
        Y: Indexable<TY> + ?Sized,
    {
        let (xs, ys) = (xs.as_slice(), ys.as_slice());
        ensure_same_length(xs.len(), ys.len())?;
        Ok(xs
            .iter()
            .zip(ys)
            .map(|(&x, &y)| DataPoint::new(x, y))
            .collect())
    }
}

impl<TX: Numeric, TY: Numeric> From<(TX, TY)> for DataPoint<TX, TY> {
    fn from((x, y): (TX, TY)) -> Self {
        DataPoint::new(x, y)
    }
}

/// Three-dimensional coordinate
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(bound = "T: Numeric")]
pub struct DataPoint3D<T: Numeric> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T: Numeric> DataPoint3D<T> {
    pub fn new(x: T, y: T, z: T) -> Self {
        DataPoint3D { x, y, z }
    }
}

impl<T: Numeric> From<(T, T, T)> for DataPoint3D<T> {
    fn from((x, y, z): (T, T, T)) -> Self {
        DataPoint3D::new(x, y, z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::Vector;

    #[test]
    fn test_zip() {
        let xs = Vector::from([1, 2, 3]);
        let ys = [0.5, 1.5, 2.5];
        let points = DataPoint::zip(&xs, &ys[..]).unwrap();
        assert_eq!(points.len(), 3);
        assert_eq!(points[1], DataPoint::new(2, 1.5));
    }

    #[test]
    fn test_zip_length_mismatch() {
        let xs = [1.0, 2.0];
        let ys = [1.0];
        assert!(DataPoint::<f64, f64>::zip(&xs[..], &ys[..]).is_err());
    }

    #[test]
    fn test_json_field_names() {
        let json = serde_json::to_string(&DataPoint3D::new(1, 2, 3)).unwrap();
        assert_eq!(json, r#"{"x":1,"y":2,"z":3}"#);
    }
}
