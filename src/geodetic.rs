//! Provides the DD, DDM and DMS representations of a point.
use std::fmt::{Display, Formatter};

use crate::format::{Axis, Hemisphere, Input, Inputs, Notation};
use crate::projection::Projection;
use crate::{Error, Point, Result};

/// Returns `s` without the leading zeros of its integer part,
/// keeping one integer digit, `"05.25"` is `"5.25"` and `"000.000000"` is `"0.000000"`.
fn strip_leading_zeros(s: &str) -> String {
    let (int, frac) = match s.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (s, None),
    };
    let int = match int.trim_start_matches('0') {
        "" => "0",
        t => t,
    };
    match frac {
        Some(frac) => format!("{int}.{frac}"),
        None => int.to_string(),
    }
}

/// Returns a minute or second field without leading zeros, `"0"` if it is all zeros.
fn strip_sexagesimal(s: &str) -> String {
    if s.chars().all(|c| c == '0' || c == '.') {
        "0".to_string()
    } else {
        strip_leading_zeros(s)
    }
}

/// The text of one axis: numeric components and the hemisphere label.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct AxisText {
    hemisphere: Hemisphere,
    components: Vec<String>,
}

impl AxisText {
    /// Reads components like `["07", "30", "00.00N"]`.
    fn parse(tokens: &[&str], axis: Axis) -> Option<Self> {
        let (last, init) = tokens.split_last()?;
        let letter = last.chars().last()?;
        let hemisphere = Hemisphere::from_letter(letter, axis)?;
        let last = &last[..last.len() - letter.len_utf8()];

        let components = init
            .iter()
            .copied()
            .chain(std::iter::once(last))
            .enumerate()
            .map(|(i, c)| match i {
                0 => strip_leading_zeros(c),
                _ => strip_sexagesimal(c),
            })
            .collect();
        Some(Self {
            hemisphere,
            components,
        })
    }

    /// Returns the hemisphere label.
    #[inline]
    pub const fn hemisphere(&self) -> &Hemisphere {
        &self.hemisphere
    }

    /// Returns the unsigned components without leading zeros,
    /// e.g. `["37", "29", "2.08"]`.
    #[inline]
    pub fn components(&self) -> &[String] {
        &self.components
    }

    /// Returns the components with symbols and the label, e.g. `37° 29' 2.08'' N`.
    #[must_use]
    pub fn formatted(&self) -> String {
        let mut buf = String::new();
        for (c, symbol) in self.components.iter().zip(["°", "'", "''"]) {
            buf.push_str(c);
            buf.push_str(symbol);
            buf.push(' ');
        }
        buf.push(self.hemisphere.letter());
        buf
    }

    /// Returns the space-joined components and the label, e.g. `37 29 2.08 N`.
    #[must_use]
    pub fn unformatted(&self) -> String {
        format!("{} {}", self.components.join(" "), self.hemisphere)
    }
}

/// A point in DD, DDM or DMS notation.
///
/// The signed value of each axis is the point's,
/// the text carries the magnitude and the hemisphere label.
///
/// # Example
///
/// ```
/// # use coordconv::*;
/// # use coordconv::format::Notation;
/// # use coordconv::geodetic::GeodeticCoordinate;
/// # use coordconv::projection::Wgs84;
/// # fn main() -> Result<()> {
/// let point = Point::try_new(-37.48391, -122.2362)?;
/// let dms = GeodeticCoordinate::from_point(Notation::DMS, &point, &Wgs84)?;
///
/// assert_eq!(dms.latitude().formatted(), "37° 29' 2.08'' S");
/// assert_eq!(dms.longitude().unformatted(), "122 14 10.32 W");
/// assert_eq!(dms.value(coordconv::format::Axis::Y), -37.48391);
/// # Ok(())}
/// ```
#[derive(Debug, PartialEq, Clone)]
pub struct GeodeticCoordinate {
    notation: Notation,
    point: Point,
    latitude: AxisText,
    longitude: AxisText,
    inputs: Inputs,
}

impl GeodeticCoordinate {
    /// Makes a [`GeodeticCoordinate`] of `point` in `notation` through `projection`.
    ///
    /// # Errors
    ///
    /// If `projection` fails or returns components not in `notation`.
    pub fn from_point<P: Projection>(
        notation: Notation,
        point: &Point,
        projection: &P,
    ) -> Result<Self> {
        let s = projection.components_from_point(point, notation)?;
        let malformed = || Error::new_malformed(s.as_str(), "latitude and longitude components");

        let tokens: Vec<&str> = s.split_whitespace().collect();
        let n = notation.components();
        if tokens.len() != 2 * n {
            return Err(malformed());
        }

        let (lat, lon) = tokens.split_at(n);
        Ok(Self {
            notation,
            point: *point,
            latitude: AxisText::parse(lat, Axis::Y).ok_or_else(malformed)?,
            longitude: AxisText::parse(lon, Axis::X).ok_or_else(malformed)?,
            inputs: Inputs::default(),
        })
    }

    /// Returns the notation of `self`.
    #[inline]
    pub const fn notation(&self) -> &Notation {
        &self.notation
    }

    /// Returns the point of `self`.
    #[inline]
    pub const fn point(&self) -> &Point {
        &self.point
    }

    /// Returns the latitude text.
    #[inline]
    pub const fn latitude(&self) -> &AxisText {
        &self.latitude
    }

    /// Returns the longitude text.
    #[inline]
    pub const fn longitude(&self) -> &AxisText {
        &self.longitude
    }

    /// Returns the text of `axis`.
    #[inline]
    pub const fn axis(&self, axis: Axis) -> &AxisText {
        match axis {
            Axis::X => &self.longitude,
            Axis::Y => &self.latitude,
        }
    }

    /// Returns the signed value of `axis` in DD notation.
    #[inline]
    pub const fn value(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.point.longitude,
            Axis::Y => self.point.latitude,
        }
    }

    /// Returns the failed text edits of latitude and longitude.
    #[inline]
    pub const fn inputs(&self) -> &Inputs {
        &self.inputs
    }

    /// Makes a [`GeodeticCoordinate`] from `self` keeping a failed text edit of `axis`.
    #[must_use]
    pub fn with_input(&self, axis: Axis, input: Option<Input>) -> Self {
        let mut next = self.clone();
        next.inputs.set(axis, input);
        next
    }
}

impl Display for GeodeticCoordinate {
    /// Writes the formatted latitude and longitude, e.g. `7.5° N, 122.084222° W`.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}, {}",
            self.latitude.formatted(),
            self.longitude.formatted()
        )
    }
}
