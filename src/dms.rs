//! Provides sexagesimal decomposition and composition of degrees.
//!
//! [`DMS`] and [`DDM`] split a DD notation angle into fixed-decimal parts,
//! [`from_dms`] and [`from_ddm`] put them back together.
use std::fmt::{Display, Formatter};

use crate::internal::fma;

/// Returns a DD notation [`f64`] from degree, minute and second components.
///
/// The sign of the result is the sign of `degree`, so `-0.0` degree with
/// non-zero minute is still negative.
///
/// # Example
///
/// ```
/// # use coordconv::dms::from_dms;
/// #
/// assert!((from_dms(43.0, 12.0, 5.0) - 43.20138888888889).abs() < 1e-12);
/// assert!((from_dms(-43.0, 12.0, 5.0) + 43.20138888888889).abs() < 1e-12);
/// ```
#[inline]
#[must_use]
pub fn from_dms(degree: f64, minute: f64, second: f64) -> f64 {
    let temp = fma(minute, 1. / 60., degree.abs());
    let temp = fma(second, 1. / 3600., temp);
    Sign::of(degree).apply(temp)
}

/// Returns a DD notation [`f64`] from degree and decimal minute components.
///
/// # Example
///
/// ```
/// # use coordconv::dms::from_ddm;
/// #
/// assert!((from_ddm(107.0, 14.05) - 107.23416666666667).abs() < 1e-12);
/// ```
#[inline]
#[must_use]
pub fn from_ddm(degree: f64, minute: f64) -> f64 {
    Sign::of(degree).apply(fma(minute, 1. / 60., degree.abs()))
}

/// Signature of [`DMS`] and [`DDM`].
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Sign {
    Positive,
    Negative,
}

impl Sign {
    /// Returns the sign of `value`, `-0.0` is [`Sign::Negative`].
    #[inline]
    #[must_use]
    pub fn of(value: f64) -> Self {
        if value.is_sign_negative() {
            Self::Negative
        } else {
            Self::Positive
        }
    }

    #[inline]
    fn apply(&self, magnitude: f64) -> f64 {
        match self {
            Self::Positive => magnitude,
            Self::Negative => -magnitude,
        }
    }
}

/// The largest number of decimals of [`DMS`] and [`DDM`].
pub const MAX_DECIMALS: usize = 9;

/// Returns `|value| * unit * 10^decimals` rounded, or [`None`] when `value`
/// is not an angle in -180.0 <= and <= 180.0 or `decimals` exceeds [`MAX_DECIMALS`].
fn scaled(value: f64, unit: f64, decimals: usize) -> Option<u64> {
    if !(-180.0..=180.0).contains(&value) || decimals > MAX_DECIMALS {
        return None;
    }
    let factor = 10_f64.powi(decimals as i32);
    Some((value.abs() * unit * factor).round() as u64)
}

/// Represents a DMS notation angle with a fixed number of second decimals.
///
/// # Example
///
/// ```
/// # use coordconv::dms::*;
/// #
/// # fn wrapper() -> Option<()> {
/// let latitude = DMS::from_degree(36.103774791666666, 2)?;
/// assert_eq!(latitude.sign(), &Sign::Positive);
/// assert_eq!(latitude.degree(), &36);
/// assert_eq!(latitude.minute(), &6);
/// assert_eq!(latitude.second(), &13.59);
///
/// assert_eq!(latitude.to_string(), "36°06′13.59″");
/// assert_eq!(latitude.components(2), ["36", "06", "13.59"]);
/// # Some(())}
/// # fn main() {wrapper();()}
/// ```
#[derive(Debug, PartialEq, Clone)]
pub struct DMS {
    sign: Sign,
    degree: u16,
    minute: u8,
    second: f64,
    decimals: usize,
}

impl DMS {
    /// Makes a [`DMS`] from DD notation `value`, seconds rounded to `decimals`.
    ///
    /// Rounding carries into minute and degree, so the minute and the second
    /// never reach 60.
    ///
    /// # Errors
    ///
    /// Returns [`None`] when `value` is NaN or not in -180.0 <= and <= 180.0,
    /// or `decimals` exceeds [`MAX_DECIMALS`].
    #[must_use]
    pub fn from_degree(value: f64, decimals: usize) -> Option<Self> {
        let total = scaled(value, 3600.0, decimals)?;
        let per_minute = 60 * 10_u64.pow(decimals as u32);

        let minutes = total / per_minute;
        Some(Self {
            sign: Sign::of(value),
            degree: (minutes / 60) as u16,
            minute: (minutes % 60) as u8,
            second: (total % per_minute) as f64 / 10_f64.powi(decimals as i32),
            decimals,
        })
    }

    /// Returns the sign of `self`.
    #[inline]
    #[must_use]
    pub const fn sign(&self) -> &Sign {
        &self.sign
    }

    /// Returns the degree of `self`.
    #[inline]
    #[must_use]
    pub const fn degree(&self) -> &u16 {
        &self.degree
    }

    /// Returns the minute of `self`.
    #[inline]
    #[must_use]
    pub const fn minute(&self) -> &u8 {
        &self.minute
    }

    /// Returns the second of `self`, including its fraction.
    #[inline]
    #[must_use]
    pub const fn second(&self) -> &f64 {
        &self.second
    }

    /// Returns the zero-padded, unsigned components of `self`,
    /// the degree padded to `degree_width` digits.
    #[must_use]
    pub fn components(&self, degree_width: usize) -> [String; 3] {
        let p = self.decimals;
        let w = if p == 0 { 2 } else { 3 + p };
        [
            format!("{:0degree_width$}", self.degree),
            format!("{:02}", self.minute),
            format!("{:0w$.p$}", self.second),
        ]
    }

    /// Returns a DD notation [`f64`] that `self` converts into.
    #[inline]
    #[must_use]
    pub fn to_degree(&self) -> f64 {
        let temp = fma(self.minute as f64, 1. / 60., self.degree as f64);
        let temp = fma(self.second, 1. / 3600., temp);
        self.sign.apply(temp)
    }
}

impl Display for DMS {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let [d, m, s] = self.components(1);
        let buf = format!("{d}°{m}′{s}″");
        f.pad_integral(matches!(self.sign, Sign::Positive), "", &buf)
    }
}

/// Represents a DDM notation angle with a fixed number of minute decimals.
///
/// # Example
///
/// ```
/// # use coordconv::dms::*;
/// #
/// # fn wrapper() -> Option<()> {
/// let longitude = DDM::from_degree(-122.08422, 4)?;
/// assert_eq!(longitude.sign(), &Sign::Negative);
/// assert_eq!(longitude.degree(), &122);
/// assert_eq!(longitude.minute(), &5.0532);
/// assert_eq!(longitude.components(3), ["122", "05.0532"]);
/// # Some(())}
/// # fn main() {wrapper();()}
/// ```
#[derive(Debug, PartialEq, Clone)]
pub struct DDM {
    sign: Sign,
    degree: u16,
    minute: f64,
    decimals: usize,
}

impl DDM {
    /// Makes a [`DDM`] from DD notation `value`, minutes rounded to `decimals`.
    ///
    /// # Errors
    ///
    /// Returns [`None`] when `value` is NaN or not in -180.0 <= and <= 180.0,
    /// or `decimals` exceeds [`MAX_DECIMALS`].
    #[must_use]
    pub fn from_degree(value: f64, decimals: usize) -> Option<Self> {
        let total = scaled(value, 60.0, decimals)?;
        let per_degree = 60 * 10_u64.pow(decimals as u32);

        Some(Self {
            sign: Sign::of(value),
            degree: (total / per_degree) as u16,
            minute: (total % per_degree) as f64 / 10_f64.powi(decimals as i32),
            decimals,
        })
    }

    /// Returns the sign of `self`.
    #[inline]
    #[must_use]
    pub const fn sign(&self) -> &Sign {
        &self.sign
    }

    /// Returns the degree of `self`.
    #[inline]
    #[must_use]
    pub const fn degree(&self) -> &u16 {
        &self.degree
    }

    /// Returns the minute of `self`, including its fraction.
    #[inline]
    #[must_use]
    pub const fn minute(&self) -> &f64 {
        &self.minute
    }

    /// Returns the zero-padded, unsigned components of `self`.
    #[must_use]
    pub fn components(&self, degree_width: usize) -> [String; 2] {
        let p = self.decimals;
        let w = if p == 0 { 2 } else { 3 + p };
        [
            format!("{:0degree_width$}", self.degree),
            format!("{:0w$.p$}", self.minute),
        ]
    }

    /// Returns a DD notation [`f64`] that `self` converts into.
    #[inline]
    #[must_use]
    pub fn to_degree(&self) -> f64 {
        self.sign
            .apply(fma(self.minute, 1. / 60., self.degree as f64))
    }
}

impl Display for DDM {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let [d, m] = self.components(1);
        let buf = format!("{d}°{m}′");
        f.pad_integral(matches!(self.sign, Sign::Positive), "", &buf)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_from_dms() {
        assert_eq!(from_dms(0.0, 0.0, 0.0), 0.0);
        assert_eq!(from_dms(7.0, 30.0, 0.0), 7.5);
        assert_eq!(from_dms(-7.0, 30.0, 0.0), -7.5);
        assert_eq!(from_dms(-0.0, 30.0, 0.0), -0.5);
        assert!((from_dms(43.0, 12.0, 5.0) - 43.201388888888889).abs() < 1e-12);
    }

    #[test]
    fn test_from_ddm() {
        assert_eq!(from_ddm(7.0, 30.0), 7.5);
        assert_eq!(from_ddm(-7.0, 30.0), -7.5);
        assert!((from_ddm(107.0, 14.05) - 107.234166666666667).abs() < 1e-12);
    }

    #[test]
    fn test_dms_from_degree() {
        let a = DMS::from_degree(7.5, 2).unwrap();
        assert_eq!(a.sign(), &Sign::Positive);
        assert_eq!((a.degree(), a.minute(), a.second()), (&7, &30, &0.0));
        assert_eq!(a.components(2), ["07", "30", "00.00"]);

        let a = DMS::from_degree(-122.0842222, 2).unwrap();
        assert_eq!(a.sign(), &Sign::Negative);
        assert_eq!(a.components(3), ["122", "05", "03.20"]);

        let a = DMS::from_degree(180.0, 2).unwrap();
        assert_eq!((a.degree(), a.minute(), a.second()), (&180, &0, &0.0));

        let a = DMS::from_degree(0.0, 0).unwrap();
        assert_eq!(a.components(2), ["00", "00", "00"]);

        assert!(DMS::from_degree(f64::NAN, 2).is_none());
        assert!(DMS::from_degree(180.0_f64.next_up(), 2).is_none());
        assert!(DMS::from_degree((-180.0_f64).next_down(), 2).is_none());
    }

    #[test]
    fn test_from_degree_decimals() {
        assert!(DMS::from_degree(1.5, MAX_DECIMALS).is_some());
        assert!(DDM::from_degree(-180.0, MAX_DECIMALS).is_some());
        for decimals in [MAX_DECIMALS + 1, 20, usize::MAX] {
            assert_eq!(DMS::from_degree(1.5, decimals), None);
            assert_eq!(DDM::from_degree(1.5, decimals), None);
        }
    }

    #[test]
    fn test_dms_carry() {
        // 59°59′59.999″ rounds to 60°00′00.00″
        let a = DMS::from_degree(59.0 + 59.0 / 60.0 + 59.999 / 3600.0, 2).unwrap();
        assert_eq!((a.degree(), a.minute(), a.second()), (&60, &0, &0.0));

        let a = DMS::from_degree(10.0 + 59.999 / 3600.0, 2).unwrap();
        assert_eq!((a.degree(), a.minute(), a.second()), (&10, &1, &0.0));
    }

    #[test]
    fn test_dms_display() {
        let a = DMS::from_degree(36.103774791666666, 2).unwrap();
        assert_eq!(a.to_string(), "36°06′13.59″");

        let a = DMS::from_degree(-36.103774791666666, 2).unwrap();
        assert_eq!(a.to_string(), "-36°06′13.59″");
    }

    #[test]
    fn test_dms_to_degree() {
        for v in [0.0, 7.5, -7.5, 36.103774791666666, -140.08785504166664, 180.0] {
            let a = DMS::from_degree(v, 4).unwrap();
            assert!((a.to_degree() - v).abs() < 1e-7, "{}", v);
        }
    }

    #[test]
    fn test_ddm_from_degree() {
        let a = DDM::from_degree(7.5, 4).unwrap();
        assert_eq!((a.degree(), a.minute()), (&7, &30.0));
        assert_eq!(a.components(2), ["07", "30.0000"]);

        let a = DDM::from_degree(-107.234166666, 3).unwrap();
        assert_eq!(a.sign(), &Sign::Negative);
        assert_eq!(a.components(3), ["107", "14.050"]);

        // 0°59.99999′ carries into the degree
        let a = DDM::from_degree(59.99999 / 60.0, 4).unwrap();
        assert_eq!((a.degree(), a.minute()), (&1, &0.0));

        assert!(DDM::from_degree(f64::NAN, 4).is_none());
    }

    #[test]
    fn test_ddm_to_degree() {
        for v in [0.0, 7.5, -7.5, 36.103774791666666, -140.08785504166664] {
            let a = DDM::from_degree(v, 6).unwrap();
            assert!((a.to_degree() - v).abs() < 1e-7, "{}", v);
        }
        assert_eq!(DDM::from_degree(-7.5, 2).unwrap().to_string(), "-7°30.00′");
    }
}
