use std::fmt::{Display, Formatter};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Field;
use crate::{Error, Result};

/// Folds `t` \[deg\] onto -180.0 <= and < 180.0.
#[inline]
fn wrap(t: f64) -> f64 {
    (t + 180.0).rem_euclid(360.0) - 180.0
}

/// Returns `t` reflected over the poles into -90.0 <= and <= 90.0.
fn normalize_latitude(t: f64) -> f64 {
    if t.is_nan() || (-90.0..=90.0).contains(&t) {
        return t;
    }
    match wrap(t) {
        s if s > 90.0 => 180.0 - s,
        s if s < -90.0 => -180.0 - s,
        s => s,
    }
}

/// Returns `t` wrapped into -180.0 <= and <= 180.0.
fn normalize_longitude(t: f64) -> f64 {
    if t.is_nan() || (-180.0..=180.0).contains(&t) {
        t
    } else {
        wrap(t)
    }
}

/// Represents a position on the WGS84 ellipsoid, a pair of latitude and longitude
/// in DD notation.
///
/// South latitude and west longitude are negative.
///
/// # Example
///
/// ```
/// # use coordconv::*;
/// # fn main() -> Result<()> {
/// let point = Point::try_new(37.48391, -122.2362)?;
/// assert_eq!(point.latitude(), &37.48391);
/// assert_eq!(point.longitude(), &-122.2362);
///
/// assert!(Point::try_new(91.0, 0.0).is_err());
/// # Ok(())}
/// ```
#[derive(Debug, PartialEq, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    /// The latitude \[deg\] of the point
    pub(crate) latitude: f64,
    /// The longitude \[deg\] of the point
    pub(crate) longitude: f64,
}

impl Default for Point {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

impl From<(f64, f64)> for Point {
    /// see [`Point::new()`]
    fn from(rhs: (f64, f64)) -> Self {
        Self::new(rhs.0, rhs.1)
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}, {:?}", self.latitude, self.longitude)
    }
}

impl Point {
    /// Makes a [`Point`].
    ///
    /// This does not check the value range.
    #[inline]
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Makes a [`Point`] with checking.
    ///
    /// # Errors
    ///
    /// If `latitude` and/or `longitude` is out-of-range or NaN,
    /// `latitude` must satisfy -90.0 <= and <= 90.0
    /// and `longitude` does -180.0 <= and <= 180.0.
    pub fn try_new(latitude: f64, longitude: f64) -> Result<Self> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(Error::new_out_of_range(
                Field::Latitude,
                latitude,
                -90.0,
                90.0,
            ));
        };
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(Error::new_out_of_range(
                Field::Longitude,
                longitude,
                -180.0,
                180.0,
            ));
        };

        Ok(Self::new(latitude, longitude))
    }

    /// Returns the latitude of `self`.
    #[inline]
    pub const fn latitude(&self) -> &f64 {
        &self.latitude
    }

    /// Returns the longitude of `self`.
    #[inline]
    pub const fn longitude(&self) -> &f64 {
        &self.longitude
    }

    /// Makes a [`Point`] with `latitude` replaced.
    #[inline]
    #[must_use]
    pub const fn with_latitude(&self, latitude: f64) -> Self {
        Self::new(latitude, self.longitude)
    }

    /// Makes a [`Point`] with `longitude` replaced.
    #[inline]
    #[must_use]
    pub const fn with_longitude(&self, longitude: f64) -> Self {
        Self::new(self.latitude, longitude)
    }

    /// Makes a normalized [`Point`] from `self`.
    ///
    /// The result has normalized [`latitude`](Point::latitude)
    /// and [`longitude`](Point::longitude) which value -90.0 <= and <= 90.0,
    /// and -180.0 <= and <= 180.0 respectively,
    /// e.g. a map click east of the antimeridian.
    ///
    /// # Example
    ///
    /// ```
    /// # use coordconv::*;
    /// let point = Point::new(100.0, 200.0);
    ///
    /// assert_eq!(point.normalize(), Point::new(80.0, -160.0));
    /// ```
    #[must_use]
    pub fn normalize(&self) -> Self {
        Self {
            latitude: normalize_latitude(self.latitude),
            longitude: normalize_longitude(self.longitude),
        }
    }
}
