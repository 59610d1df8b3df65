//! Provides validation of user-typed coordinate text.
//!
//! ```
//! # use coordconv::format::{Axis, Format};
//! # use coordconv::validate::validate;
//! #
//! assert_eq!(validate("-107.23433", Format::DD, Axis::X).unwrap(), -107.23433);
//! assert!((validate("43 12 5", Format::DMS, Axis::Y).unwrap() - 43.2013888).abs() < 1e-6);
//! assert!((validate("37° 29' 2.08\" S", Format::DMS, Axis::Y).unwrap() + 37.4839111).abs() < 1e-6);
//!
//! assert!(validate("43 61 5", Format::DMS, Axis::Y).is_err());
//! assert!(validate("1000000", Format::UTM, Axis::X).is_err());
//! ```
use crate::dms::{from_ddm, from_dms};
use crate::error::Field;
use crate::format::{Axis, Format, Notation, System};
use crate::grid::{MAX_MGRS_OFFSET, MAX_UTM_EASTING, MAX_UTM_NORTHING};
use crate::{Error, Result};

const SYMBOLS: [char; 5] = ['°', '\'', '"', '′', '″'];

/// Text of an angle with the hemisphere letters and the symbols removed.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Cleaned {
    /// Space-separated components
    pub text: String,
    /// `true` if the text carried the negative hemisphere letter of the axis
    pub negative: bool,
}

/// Removes hemisphere letters and degree, minute and second symbols from `raw`.
///
/// The negative hemisphere letter of `axis` (`S` for latitude, `W` for
/// longitude) is removed first and sets [`Cleaned::negative`],
/// then the positive one (`N`, `E`) is removed whether or not a negative
/// letter was there. Only uppercase letters are hemisphere letters.
/// Symbols become spaces, runs of whitespace collapse to one space.
///
/// # Example
///
/// ```
/// # use coordconv::format::Axis;
/// # use coordconv::validate::clean;
/// #
/// let c = clean("122°05′03.20″W", Axis::X);
/// assert_eq!(c.text, "122 05 03.20");
/// assert!(c.negative);
///
/// // both letters: the negative one wins
/// let c = clean("37 N S", Axis::Y);
/// assert_eq!(c.text, "37");
/// assert!(c.negative);
/// ```
#[must_use]
pub fn clean(raw: &str, axis: Axis) -> Cleaned {
    let (neg, pos) = axis.hemispheres();

    let negative = raw.contains(neg.letter());
    let text: String = raw
        .chars()
        .filter(|c| *c != neg.letter() && *c != pos.letter())
        .map(|c| if SYMBOLS.contains(&c) { ' ' } else { c })
        .collect();

    Cleaned {
        text: text.split_whitespace().collect::<Vec<_>>().join(" "),
        negative,
    }
}

fn parse_float(token: &str, raw: &str, expected: &'static str) -> Result<f64> {
    match token.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(Error::new_malformed(raw, expected)),
    }
}

fn check_sexagesimal(field: Field, value: f64) -> Result<f64> {
    if (0.0..60.0).contains(&value) {
        Ok(value)
    } else {
        Err(Error::new_out_of_range(field, value, 0.0, 60.0))
    }
}

fn check(field: Field, value: f64, low: f64, high: f64) -> Result<f64> {
    if (low..=high).contains(&value) {
        Ok(value)
    } else {
        Err(Error::new_out_of_range(field, value, low, high))
    }
}

/// Returns the angle of `raw` in DD notation, read in `notation`.
fn validate_angle(raw: &str, notation: Notation, axis: Axis) -> Result<f64> {
    let expected = match notation {
        Notation::DD => "a decimal degree",
        Notation::DDM => "degrees and decimal minutes",
        Notation::DMS => "degrees, minutes and seconds",
    };

    let cleaned = clean(raw, axis);
    let tokens: Vec<&str> = cleaned.text.split(' ').filter(|s| !s.is_empty()).collect();
    if tokens.len() != notation.components() {
        return Err(Error::new_malformed(raw, expected));
    }

    let parsed = tokens
        .iter()
        .map(|t| parse_float(t, raw, expected))
        .collect::<Result<Vec<_>>>()?;

    let value = match parsed.as_slice() {
        [d] => *d,
        [d, m] => from_ddm(*d, check_sexagesimal(Field::Minute, *m)?),
        [d, m, s] => from_dms(
            *d,
            check_sexagesimal(Field::Minute, *m)?,
            check_sexagesimal(Field::Second, *s)?,
        ),
        _ => return Err(Error::new_malformed(raw, expected)),
    };
    let value = if cleaned.negative { -value.abs() } else { value };

    match axis {
        Axis::X => check(Field::Longitude, value, -180.0, 180.0),
        Axis::Y => check(Field::Latitude, value, -90.0, 90.0),
    }
}

/// Returns the easting or northing of `raw` \[m\].
fn validate_offset(raw: &str, system: System, axis: Axis) -> Result<f64> {
    let value = parse_float(raw.trim(), raw, "a number")?;

    let (field, high) = match (system, axis) {
        (System::UTM, Axis::X) => (Field::Easting, MAX_UTM_EASTING),
        (System::UTM, Axis::Y) => (Field::Northing, MAX_UTM_NORTHING),
        (System::MGRS, Axis::X) => (Field::Easting, MAX_MGRS_OFFSET),
        (System::MGRS, Axis::Y) => (Field::Northing, MAX_MGRS_OFFSET),
    };
    check(field, value, 0.0, high as f64)
}

/// Validates `raw` as the `axis` value of `format`.
///
/// For DD, DDM and DMS, returns the angle in DD notation, negative for
/// a leading minus sign or the negative hemisphere letter.
/// For UTM and MGRS, returns the easting or northing \[m\].
///
/// # Errors
///
/// [`MalformedInput`](crate::ErrorKind::MalformedInput) on a wrong token count
/// or an unparsable number,
/// [`OutOfRange`](crate::ErrorKind::OutOfRange) on minutes or seconds not in
/// 0 <= and < 60, or a value out of the axis bounds.
pub fn validate(raw: &str, format: Format, axis: Axis) -> Result<f64> {
    match (format.notation(), format.system()) {
        (Some(notation), _) => validate_angle(raw, notation, axis),
        (_, Some(system)) => validate_offset(raw, system, axis),
        (None, None) => Err(Error::new_malformed(raw, "a coordinate format")),
    }
}
