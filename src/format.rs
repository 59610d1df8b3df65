//! Provides the coordinate formats and per-axis vocabulary.
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Represents the five coordinate formats.
///
/// # Example
///
/// ```
/// # use coordconv::format::*;
/// #
/// assert_eq!("mgrs".parse::<Format>().unwrap(), Format::MGRS);
/// assert_eq!(Format::DDM.notation(), Some(Notation::DDM));
/// assert_eq!(Format::UTM.system(), Some(System::UTM));
/// assert_eq!(Format::DMS.to_string(), "DMS");
/// ```
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[allow(clippy::upper_case_acronyms)]
pub enum Format {
    /// Decimal Degrees
    #[default]
    DD,
    /// Degrees Decimal Minutes
    DDM,
    /// Degrees Minutes Seconds
    DMS,
    /// Universal Transverse Mercator
    UTM,
    /// Military Grid Reference System
    MGRS,
}

impl Format {
    /// All formats.
    pub const ALL: [Format; 5] = [
        Format::DD,
        Format::DDM,
        Format::DMS,
        Format::UTM,
        Format::MGRS,
    ];

    /// Returns the angular notation, if `self` is one.
    #[inline]
    #[must_use]
    pub const fn notation(&self) -> Option<Notation> {
        match self {
            Self::DD => Some(Notation::DD),
            Self::DDM => Some(Notation::DDM),
            Self::DMS => Some(Notation::DMS),
            Self::UTM | Self::MGRS => None,
        }
    }

    /// Returns the grid system, if `self` is one.
    #[inline]
    #[must_use]
    pub const fn system(&self) -> Option<System> {
        match self {
            Self::UTM => Some(System::UTM),
            Self::MGRS => Some(System::MGRS),
            Self::DD | Self::DDM | Self::DMS => None,
        }
    }

    const fn name(&self) -> &'static str {
        match self {
            Self::DD => "DD",
            Self::DDM => "DDM",
            Self::DMS => "DMS",
            Self::UTM => "UTM",
            Self::MGRS => "MGRS",
        }
    }
}

impl Display for Format {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|v| v.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::new_malformed(s, "one of DD, DDM, DMS, UTM or MGRS"))
    }
}

/// Represents an angular notation of latitude and longitude.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[allow(clippy::upper_case_acronyms)]
pub enum Notation {
    DD,
    DDM,
    DMS,
}

impl Notation {
    /// Returns the number of components per axis, e.g. 3 for DMS.
    #[inline]
    #[must_use]
    pub const fn components(&self) -> usize {
        match self {
            Self::DD => 1,
            Self::DDM => 2,
            Self::DMS => 3,
        }
    }
}

impl From<Notation> for Format {
    fn from(value: Notation) -> Self {
        match value {
            Notation::DD => Self::DD,
            Notation::DDM => Self::DDM,
            Notation::DMS => Self::DMS,
        }
    }
}

/// Represents a grid reference system.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[allow(clippy::upper_case_acronyms)]
pub enum System {
    UTM,
    MGRS,
}

impl From<System> for Format {
    fn from(value: System) -> Self {
        match value {
            System::UTM => Self::UTM,
            System::MGRS => Self::MGRS,
        }
    }
}

/// Represents an axis of a coordinate.
///
/// [`Axis::X`] is longitude or easting, [`Axis::Y`] is latitude or northing.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    /// Returns the hemisphere letters, negative one first.
    #[inline]
    #[must_use]
    pub const fn hemispheres(&self) -> (Hemisphere, Hemisphere) {
        match self {
            Self::X => (Hemisphere::West, Hemisphere::East),
            Self::Y => (Hemisphere::South, Hemisphere::North),
        }
    }
}

/// Represents the hemisphere label of a latitude or longitude.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Hemisphere {
    North,
    South,
    East,
    West,
}

impl Hemisphere {
    /// Returns the label letter.
    #[inline]
    #[must_use]
    pub const fn letter(&self) -> char {
        match self {
            Self::North => 'N',
            Self::South => 'S',
            Self::East => 'E',
            Self::West => 'W',
        }
    }

    /// Returns `true` for south and west.
    #[inline]
    #[must_use]
    pub const fn is_negative(&self) -> bool {
        matches!(self, Self::South | Self::West)
    }

    /// Returns the hemisphere of `axis` labelled `c`.
    #[must_use]
    pub fn from_letter(c: char, axis: Axis) -> Option<Self> {
        let (neg, pos) = axis.hemispheres();
        [neg, pos].into_iter().find(|h| h.letter() == c)
    }

    /// Returns the hemisphere of `axis` where `value` lies.
    #[inline]
    #[must_use]
    pub fn of(value: f64, axis: Axis) -> Self {
        let (neg, pos) = axis.hemispheres();
        if value < 0.0 {
            neg
        } else {
            pos
        }
    }
}

impl Display for Hemisphere {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// The raw text of an axis edit that failed, kept until the next successful edit.
#[derive(Debug, Clone, PartialEq)]
pub struct Input {
    pub raw: String,
    pub error: Error,
}

/// Failed edits of the two axes of a coordinate, each independent.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Inputs {
    pub x: Option<Input>,
    pub y: Option<Input>,
}

impl Inputs {
    /// Returns the failed edit of `axis`.
    #[inline]
    pub fn get(&self, axis: Axis) -> Option<&Input> {
        match axis {
            Axis::X => self.x.as_ref(),
            Axis::Y => self.y.as_ref(),
        }
    }

    #[inline]
    pub(crate) fn set(&mut self, axis: Axis, input: Option<Input>) {
        match axis {
            Axis::X => self.x = input,
            Axis::Y => self.y = input,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_format_from_str() {
        for format in Format::ALL {
            assert_eq!(format.to_string().parse::<Format>().unwrap(), format);
        }
        assert_eq!(" ddm ".parse::<Format>().unwrap(), Format::DDM);
        assert!("DDD".parse::<Format>().is_err());
        assert!("".parse::<Format>().is_err());
    }

    #[test]
    fn test_format_kind() {
        for format in Format::ALL {
            assert!(format.notation().is_some() ^ format.system().is_some());
        }
        for notation in [Notation::DD, Notation::DDM, Notation::DMS] {
            assert_eq!(Format::from(notation).notation(), Some(notation));
        }
        for system in [System::UTM, System::MGRS] {
            assert_eq!(Format::from(system).system(), Some(system));
        }
    }

    #[test]
    fn test_hemisphere() {
        assert_eq!(Hemisphere::from_letter('S', Axis::Y), Some(Hemisphere::South));
        assert_eq!(Hemisphere::from_letter('N', Axis::Y), Some(Hemisphere::North));
        assert_eq!(Hemisphere::from_letter('E', Axis::Y), None);
        assert_eq!(Hemisphere::from_letter('W', Axis::X), Some(Hemisphere::West));
        assert_eq!(Hemisphere::from_letter('N', Axis::X), None);

        assert_eq!(Hemisphere::of(-0.5, Axis::Y), Hemisphere::South);
        assert_eq!(Hemisphere::of(0.0, Axis::Y), Hemisphere::North);
        assert_eq!(Hemisphere::of(-0.0, Axis::X), Hemisphere::East);
        assert_eq!(Hemisphere::of(-122.0, Axis::X), Hemisphere::West);

        assert!(Hemisphere::South.is_negative());
        assert!(Hemisphere::West.is_negative());
        assert!(!Hemisphere::North.is_negative());
        assert!(!Hemisphere::East.is_negative());
    }

    #[test]
    fn test_inputs() {
        let mut inputs = Inputs::default();
        let input = Input {
            raw: "12a".to_string(),
            error: Error::new_malformed("12a", "a number"),
        };
        inputs.set(Axis::X, Some(input.clone()));
        assert_eq!(inputs.get(Axis::X), Some(&input));
        assert_eq!(inputs.get(Axis::Y), None);

        inputs.set(Axis::X, None);
        assert_eq!(inputs, Inputs::default());
    }

    #[test]
    #[cfg(feature = "serde")]
    fn test_serde() {
        use serde_test::{assert_tokens, Token};

        assert_tokens(
            &Format::MGRS,
            &[Token::UnitVariant {
                name: "Format",
                variant: "MGRS",
            }],
        );
    }
}
