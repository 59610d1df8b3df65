//! Provides the UTM/MGRS latitude bands and their northing table.
//!
//! There are 20 bands, `C` to `X` without `I` and `O`.
//! Each band spans 8° of latitude from −80°, except `X` which spans 12° up to 84°.
//! [`Band::N`] is the first band north of the Equator.
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// The northing step between two adjacent bands \[m\].
pub const BAND_HEIGHT: i64 = 888_000;

/// The false northing of the southern hemisphere \[m\].
pub const FALSE_NORTHING: i64 = 10_000_000;

const LETTERS: &str = "CDEFGHJKLMNPQRSTUVWX";

/// Represents a latitude band.
///
/// # Example
///
/// ```
/// # use coordconv::band::Band;
/// #
/// let band = Band::from_latitude(37.48).unwrap();
/// assert_eq!(band, Band::S);
/// assert_eq!(band.letter(), 'S');
/// assert_eq!((band.south(), band.north()), (32.0, 40.0));
///
/// assert_eq!("x".parse::<Band>().unwrap(), Band::X);
/// assert!("I".parse::<Band>().is_err());
/// ```
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Band {
    C,
    D,
    E,
    F,
    G,
    H,
    J,
    K,
    L,
    M,
    N,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
}

impl Band {
    /// All bands, from south to north.
    pub const ALL: [Band; 20] = [
        Band::C,
        Band::D,
        Band::E,
        Band::F,
        Band::G,
        Band::H,
        Band::J,
        Band::K,
        Band::L,
        Band::M,
        Band::N,
        Band::P,
        Band::Q,
        Band::R,
        Band::S,
        Band::T,
        Band::U,
        Band::V,
        Band::W,
        Band::X,
    ];

    /// Returns the position of `self` from south, `C` is 0 and `X` is 19.
    #[inline]
    #[must_use]
    pub const fn index(&self) -> usize {
        *self as usize
    }

    /// Returns the band letter.
    #[inline]
    #[must_use]
    pub const fn letter(&self) -> char {
        LETTERS.as_bytes()[self.index()] as char
    }

    /// Makes a [`Band`] from its letter, case-insensitive.
    #[must_use]
    pub fn from_letter(c: char) -> Option<Self> {
        let c = c.to_ascii_uppercase();
        LETTERS.chars().position(|l| l == c).map(|i| Self::ALL[i])
    }

    /// Returns the band containing `latitude`.
    ///
    /// Returns [`None`] outside −80.0 <= and <= 84.0, where UTM has no band.
    #[must_use]
    pub fn from_latitude(latitude: f64) -> Option<Self> {
        if !(-80.0..=84.0).contains(&latitude) {
            return None;
        }
        let i = ((latitude + 80.0) / 8.0).floor() as usize;
        Some(Self::ALL[i.min(19)])
    }

    /// Returns the southern latitude bound in degree.
    #[inline]
    #[must_use]
    pub fn south(&self) -> f64 {
        -80.0 + 8.0 * self.index() as f64
    }

    /// Returns the northern latitude bound in degree.
    #[inline]
    #[must_use]
    pub fn north(&self) -> f64 {
        match self {
            Band::X => 84.0,
            _ => self.south() + 8.0,
        }
    }

    /// Returns `true` if `self` is `N` or north of it.
    #[inline]
    #[must_use]
    pub const fn is_northern(&self) -> bool {
        self.index() >= Band::N.index()
    }

    /// Returns the northing \[m\] where `self` starts.
    ///
    /// Northern bands count up from 0 at the Equator, southern bands count down
    /// from the 10,000,000 \[m\] false northing, [`BAND_HEIGHT`] per band.
    ///
    /// # Example
    ///
    /// ```
    /// # use coordconv::band::Band;
    /// #
    /// assert_eq!(Band::N.starting_northing(), 0);
    /// assert_eq!(Band::P.starting_northing(), 888_000);
    /// assert_eq!(Band::M.starting_northing(), 9_112_000);
    /// assert_eq!(Band::C.starting_northing(), 1_120_000);
    /// ```
    #[must_use]
    pub const fn starting_northing(&self) -> i64 {
        if self.is_northern() {
            (self.index() - Band::N.index()) as i64 * BAND_HEIGHT
        } else {
            FALSE_NORTHING - (Band::N.index() - self.index()) as i64 * BAND_HEIGHT
        }
    }

    /// Returns the signed distance \[m\] of the start of `self` from the Equator,
    /// on the [`BAND_HEIGHT`] scale.
    ///
    /// This is [`Band::starting_northing`] without the false northing,
    /// it increases strictly from `C` to `X`.
    #[must_use]
    pub const fn equator_offset(&self) -> i64 {
        (self.index() as i64 - Band::N.index() as i64) * BAND_HEIGHT
    }
}

/// Returns `current` moved from band `from` to band `to`.
///
/// The offset of `current` from the start of `from` is kept,
/// except for the extreme bands `C` and `X` where the result is reset
/// to the start of `to`.
///
/// # Example
///
/// ```
/// # use coordconv::band::{adjust_northing, Band};
/// #
/// assert_eq!(adjust_northing(4_148_674, Band::S, Band::T), 5_036_674);
/// assert_eq!(adjust_northing(388_000, Band::N, Band::M), 9_500_000);
/// assert_eq!(adjust_northing(4_148_674, Band::S, Band::X), Band::X.starting_northing());
/// ```
#[must_use]
pub const fn adjust_northing(current: i64, from: Band, to: Band) -> i64 {
    match to {
        Band::C | Band::X => to.starting_northing(),
        _ => current + (to.starting_northing() - from.starting_northing()),
    }
}

impl Display for Band {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl TryFrom<char> for Band {
    type Error = Error;

    fn try_from(value: char) -> Result<Self> {
        Self::from_letter(value).ok_or_else(|| Error::new_malformed(value, "a band letter C to X"))
    }
}

impl FromStr for Band {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::try_from(c),
            _ => Err(Error::new_malformed(s, "a band letter C to X")),
        }
    }
}
