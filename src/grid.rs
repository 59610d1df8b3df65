//! Provides the UTM and MGRS coordinate state.
//!
//! UTM and MGRS share zone, band, easting and northing;
//! MGRS adds a 100km grid square ID and reads easting and northing
//! inside that square.
//! Both are one record, [`GridCoordinate`], told apart by [`GridKind`].
//!
//! Every field edit goes through [`GridCoordinate::apply_edit`],
//! which recomposes the composite string and asks the [`Projection`] for the point.
//! A rejected composite puts the coordinate in an error state,
//! the point stays at the last good value.
use std::fmt::{Display, Formatter};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::band::{adjust_northing, Band};
use crate::error::Field;
use crate::format::{Axis, Input, Inputs, System};
use crate::projection::{CompositeOptions, Projection};
use crate::{square, Error, Point, Result};

const UTM_EXPECTED: &str = "zone, band, 6-digit easting and 7-digit northing";
const MGRS_EXPECTED: &str = "zone, band, grid square and up to 5 digits of easting and northing";

/// The largest UTM easting \[m\], 6 digits.
pub const MAX_UTM_EASTING: u32 = 999_999;
/// The largest UTM northing \[m\], 7 digits.
pub const MAX_UTM_NORTHING: u32 = 9_999_999;
/// The largest MGRS easting and northing \[m\] inside a square, 5 digits.
pub const MAX_MGRS_OFFSET: u32 = 99_999;

/// Zone, band, optional grid square, easting and northing of a composite string.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Composite {
    pub zone: u8,
    pub band: Band,
    /// The grid square ID, MGRS only.
    pub square: Option<String>,
    /// Easting \[m\]; inside the square for MGRS.
    pub easting: u32,
    /// Northing \[m\]; inside the square for MGRS.
    pub northing: u32,
}

#[inline]
fn is_digits(s: &str) -> bool {
    s.chars().all(|c| c.is_ascii_digit())
}

fn parse_number(s: &str, malformed: impl Fn() -> Error) -> Result<u32> {
    s.parse().map_err(|_| malformed())
}

/// Splits a UTM or MGRS composite string.
///
/// This accepts compact (`31UDQ5248211717`) and spaced (`31U DQ 52482 11717`)
/// strings, 1 or 2 digit zones, lowercase letters, and for MGRS 0 to 5 digits
/// per axis, scaled to 5 digits.
///
/// # Errors
///
/// If `s` is malformed or its zone is not in 1 to 60.
/// An MGRS string without a numeric zone (a polar UPS reference,
/// starting with `A`, `B`, `Y` or `Z`) is [`PolarUnsupported`](crate::ErrorKind::PolarUnsupported).
///
/// # Example
///
/// ```
/// # use coordconv::*;
/// # use coordconv::band::Band;
/// # use coordconv::format::System;
/// # use coordconv::grid::parse_composite;
/// # fn main() -> Result<()> {
/// let c = parse_composite("31U DQ 524 117", System::MGRS)?;
/// assert_eq!((c.zone, c.band), (31, Band::U));
/// assert_eq!(c.square.as_deref(), Some("DQ"));
/// assert_eq!((c.easting, c.northing), (52400, 11700));
///
/// let c = parse_composite("10S5675274148830", System::UTM)?;
/// assert_eq!((c.easting, c.northing), (567527, 4148830));
/// # Ok(())}
/// ```
pub fn parse_composite(s: &str, system: System) -> Result<Composite> {
    let expected = match system {
        System::UTM => UTM_EXPECTED,
        System::MGRS => MGRS_EXPECTED,
    };
    let malformed = || Error::new_malformed(s, expected);

    // trailing easting and northing tokens, if spaced
    let tokens: Vec<&str> = s.split_whitespace().collect();
    let (head, digits) = match tokens.as_slice() {
        [rest @ .., e, n] if !rest.is_empty() && is_digits(e) && is_digits(n) => {
            (rest.concat(), Some((*e, *n)))
        }
        _ => (tokens.concat(), None),
    };
    let head = head.to_ascii_uppercase();

    let zone_len = head.chars().take(2).take_while(char::is_ascii_digit).count();
    if zone_len == 0 {
        return Err(match (system, head.chars().next()) {
            (System::MGRS, Some('A' | 'B' | 'Y' | 'Z')) => Error::new_polar(s),
            _ => malformed(),
        });
    }

    let zone: u8 = head[..zone_len].parse().map_err(|_| malformed())?;
    if !(1..=60).contains(&zone) {
        return Err(Error::new_out_of_range(Field::Zone, zone as f64, 1.0, 60.0));
    }

    let mut rest = head[zone_len..].chars();
    let band = rest.next().and_then(Band::from_letter).ok_or_else(malformed)?;
    let rest: String = rest.collect();

    match system {
        System::UTM => {
            let (e, n) = match digits {
                Some(pair) if rest.is_empty() => pair,
                None if rest.len() == 13 && is_digits(&rest) => rest.split_at(6),
                _ => return Err(malformed()),
            };
            if e.len() > 6 || n.len() > 7 {
                return Err(malformed());
            }

            Ok(Composite {
                zone,
                band,
                square: None,
                easting: parse_number(e, malformed)?,
                northing: parse_number(n, malformed)?,
            })
        }
        System::MGRS => {
            let id: String = rest.chars().take(2).collect();
            if id.len() != 2 || !id.chars().all(|c| c.is_ascii_uppercase()) {
                return Err(malformed());
            }
            let tail = &rest[2..];

            let (e, n) = match digits {
                Some((e, n)) if tail.is_empty() && e.len() == n.len() => (e, n),
                None if tail.len() % 2 == 0 && is_digits(tail) => tail.split_at(tail.len() / 2),
                _ => return Err(malformed()),
            };
            if e.len() > 5 {
                return Err(malformed());
            }

            let scale = 10_u32.pow(5 - e.len() as u32);
            let scaled = |v: &str| -> Result<u32> {
                if v.is_empty() {
                    Ok(0)
                } else {
                    Ok(parse_number(v, malformed)? * scale)
                }
            };

            Ok(Composite {
                zone,
                band,
                square: Some(id),
                easting: scaled(e)?,
                northing: scaled(n)?,
            })
        }
    }
}

/// The discriminator of a [`GridCoordinate`].
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[allow(clippy::upper_case_acronyms)]
pub enum GridKind {
    UTM,
    MGRS {
        /// The 100km grid square ID, empty if no square is valid
        square: String,
    },
}

impl GridKind {
    /// Returns the grid system.
    #[inline]
    #[must_use]
    pub const fn system(&self) -> System {
        match self {
            Self::UTM => System::UTM,
            Self::MGRS { .. } => System::MGRS,
        }
    }
}

/// A field edit of a [`GridCoordinate`].
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub enum Edit {
    Zone(u8),
    Band(Band),
    Easting(u32),
    Northing(u32),
    /// MGRS only.
    Square(String),
}

impl Edit {
    /// Returns the edit of `axis` to `value`, easting for X and northing for Y.
    #[inline]
    #[must_use]
    pub const fn axis(axis: Axis, value: u32) -> Self {
        match axis {
            Axis::X => Self::Easting(value),
            Axis::Y => Self::Northing(value),
        }
    }
}

/// A UTM or MGRS coordinate.
///
/// # Example
///
/// ```
/// # use coordconv::*;
/// # use coordconv::band::Band;
/// # use coordconv::format::System;
/// # use coordconv::grid::{Edit, GridCoordinate};
/// # use coordconv::projection::Wgs84;
/// # fn main() -> Result<()> {
/// let point = Point::try_new(48.8566, 2.3522)?;
/// let mgrs = GridCoordinate::from_point(System::MGRS, &point, &Wgs84);
/// assert_eq!(mgrs.to_string(), "31U DQ 52482 11717");
///
/// // D is not a column of zone 32, so the square is remapped
/// let (next, result) = mgrs.apply_edit(Edit::Zone(32), &Wgs84);
/// assert!(result.is_ok());
/// assert_eq!(next.to_string(), "32U KU 52482 11717");
/// # Ok(())}
/// ```
#[derive(Debug, PartialEq, Clone)]
pub struct GridCoordinate {
    kind: GridKind,
    zone: u8,
    band: Band,
    easting: u32,
    northing: u32,
    point: Point,
    error: Option<Error>,
    inputs: Inputs,
}

impl GridCoordinate {
    /// Makes a [`GridCoordinate`] of `point` through `projection`.
    ///
    /// If `projection` fails, e.g. MGRS of a polar point, the result holds
    /// the error, zone 1 and zero easting and northing.
    pub fn from_point<P: Projection>(system: System, point: &Point, projection: &P) -> Self {
        Self::placeholder(system, point).refresh(point, projection)
    }

    fn placeholder(system: System, point: &Point) -> Self {
        let kind = match system {
            System::UTM => GridKind::UTM,
            System::MGRS => GridKind::MGRS {
                square: String::new(),
            },
        };
        Self {
            kind,
            zone: 1,
            band: if point.latitude < 0.0 { Band::C } else { Band::X },
            easting: 0,
            northing: 0,
            point: *point,
            error: None,
            inputs: Inputs::default(),
        }
    }

    /// Returns the kind of `self`.
    #[inline]
    pub const fn kind(&self) -> &GridKind {
        &self.kind
    }

    /// Returns the grid system of `self`.
    #[inline]
    pub const fn system(&self) -> System {
        self.kind.system()
    }

    /// Returns the zone of `self`.
    #[inline]
    pub const fn zone(&self) -> &u8 {
        &self.zone
    }

    /// Returns the band of `self`.
    #[inline]
    pub const fn band(&self) -> &Band {
        &self.band
    }

    /// Returns the easting of `self`.
    #[inline]
    pub const fn easting(&self) -> &u32 {
        &self.easting
    }

    /// Returns the northing of `self`.
    #[inline]
    pub const fn northing(&self) -> &u32 {
        &self.northing
    }

    /// Returns the grid square ID of `self`, [`None`] for UTM.
    #[inline]
    pub fn square(&self) -> Option<&str> {
        match &self.kind {
            GridKind::UTM => None,
            GridKind::MGRS { square } => Some(square),
        }
    }

    /// Returns the last point the fields of `self` projected to.
    #[inline]
    pub const fn point(&self) -> &Point {
        &self.point
    }

    /// Returns the projection error, if `self` is in the error state.
    #[inline]
    pub const fn error(&self) -> Option<&Error> {
        self.error.as_ref()
    }

    /// Returns `true` if the fields denote a point the projection accepts.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        self.error.is_none()
    }

    /// Returns the failed text edits of easting and northing.
    #[inline]
    pub const fn inputs(&self) -> &Inputs {
        &self.inputs
    }

    /// Returns the compact composite string of the fields,
    /// e.g. `10S5675274148830` or `10SEG6752748830`.
    #[must_use]
    pub fn compose(&self) -> String {
        match &self.kind {
            GridKind::UTM => format!(
                "{:02}{}{:06}{:07}",
                self.zone, self.band, self.easting, self.northing
            ),
            GridKind::MGRS { square } => format!(
                "{:02}{}{}{:05}{:05}",
                self.zone, self.band, square, self.easting, self.northing
            ),
        }
    }

    /// Makes a [`GridCoordinate`] from `self` with `edit` applied.
    ///
    /// Returns the next state and the result of the edit;
    /// the caller decides whether to keep the next state.
    ///
    /// 1. An edit to the current value changes nothing.
    /// 2. Out-of-range values and invalid grid squares fail, `self` is returned unchanged.
    /// 3. A zone or band change of MGRS remaps the grid square,
    ///    keeping its column letter if possible ([`square::remap`]).
    /// 4. A band change of UTM moves the northing with [`adjust_northing`].
    /// 5. The fields are composed and projected. If the projection fails,
    ///    the next state keeps the fields, holds the error, and the point
    ///    stays at the last good value.
    ///
    /// # Example
    ///
    /// ```
    /// # use coordconv::*;
    /// # use coordconv::band::Band;
    /// # use coordconv::format::System;
    /// # use coordconv::grid::{Edit, GridCoordinate};
    /// # use coordconv::projection::Wgs84;
    /// # fn main() -> Result<()> {
    /// let point = Point::try_new(37.48391, -122.2362)?;
    /// let utm = GridCoordinate::from_point(System::UTM, &point, &Wgs84);
    /// assert_eq!(utm.to_string(), "10S 567527 4148830");
    ///
    /// let (next, result) = utm.apply_edit(Edit::Band(Band::T), &Wgs84);
    /// assert!(result.is_ok());
    /// assert_eq!(next.to_string(), "10T 567527 5036830");
    ///
    /// let (next, result) = utm.apply_edit(Edit::Easting(999_999), &Wgs84);
    /// assert!(result.is_err());
    /// assert_eq!(next.point(), utm.point());
    /// # Ok(())}
    /// ```
    pub fn apply_edit<P: Projection>(&self, edit: Edit, projection: &P) -> (Self, Result<()>) {
        if let Err(e) = self.check_edit(&edit) {
            return (self.clone(), Err(e));
        }

        let mut next = self.clone();
        match edit {
            Edit::Zone(zone) if zone == self.zone => return (next, Ok(())),
            Edit::Band(band) if band == self.band => return (next, Ok(())),
            Edit::Easting(v) if v == self.easting => return (next, Ok(())),
            Edit::Northing(v) if v == self.northing => return (next, Ok(())),
            Edit::Square(ref id) if self.square() == Some(id.as_str()) => return (next, Ok(())),
            Edit::Zone(zone) => {
                next.zone = zone;
                next.remap_square();
            }
            Edit::Band(band) => {
                next.band = band;
                match next.kind {
                    GridKind::UTM => next.adjust_northing(self.band),
                    GridKind::MGRS { .. } => next.remap_square(),
                }
            }
            Edit::Easting(v) => next.easting = v,
            Edit::Northing(v) => next.northing = v,
            Edit::Square(id) => {
                if let GridKind::MGRS { square } = &mut next.kind {
                    *square = id;
                }
            }
        }

        let composite = next.compose();
        match projection.point_from_composite(&composite, next.system()) {
            Ok(point) => {
                next.point = point;
                next.error = None;
                next.inputs = Inputs::default();
                (next, Ok(()))
            }
            Err(e) => {
                tracing::debug!(composite = %composite, error = %e, "projection rejected grid coordinate");
                next.error = Some(e.clone());
                (next, Err(e))
            }
        }
    }

    fn check_edit(&self, edit: &Edit) -> Result<()> {
        let (max_easting, max_northing) = match self.kind {
            GridKind::UTM => (MAX_UTM_EASTING, MAX_UTM_NORTHING),
            GridKind::MGRS { .. } => (MAX_MGRS_OFFSET, MAX_MGRS_OFFSET),
        };

        match edit {
            Edit::Zone(zone) if !(1..=60).contains(zone) => Err(Error::new_out_of_range(
                Field::Zone,
                *zone as f64,
                1.0,
                60.0,
            )),
            Edit::Easting(v) if *v > max_easting => Err(Error::new_out_of_range(
                Field::Easting,
                *v as f64,
                0.0,
                max_easting as f64,
            )),
            Edit::Northing(v) if *v > max_northing => Err(Error::new_out_of_range(
                Field::Northing,
                *v as f64,
                0.0,
                max_northing as f64,
            )),
            Edit::Square(id) => match self.kind {
                GridKind::MGRS { .. } if square::is_valid(id, self.zone, self.band) => Ok(()),
                _ => Err(Error::new_invalid_grid_square(
                    id.as_str(),
                    self.zone,
                    self.band,
                )),
            },
            _ => Ok(()),
        }
    }

    fn remap_square(&mut self) {
        let (zone, band) = (self.zone, self.band);
        if let GridKind::MGRS { square } = &mut self.kind {
            let remapped = square::remap(square, zone, band);
            if *square != remapped {
                tracing::debug!(from = %square, to = %remapped, zone, %band, "remapped grid square");
                *square = remapped;
            }
        }
    }

    fn adjust_northing(&mut self, from: Band) {
        let adjusted = adjust_northing(self.northing as i64, from, self.band);
        let northing = if (0..=MAX_UTM_NORTHING as i64).contains(&adjusted) {
            adjusted
        } else {
            self.band.starting_northing()
        };
        tracing::debug!(from = self.northing, to = northing, band = %self.band, "adjusted northing");
        self.northing = northing as u32;
    }

    /// Makes a [`GridCoordinate`] from `self` regenerated from `point`.
    ///
    /// If `projection` cannot represent `point`, the fields and the point
    /// of `self` are kept and the result holds the error.
    #[must_use]
    pub fn refresh<P: Projection>(&self, point: &Point, projection: &P) -> Self {
        let system = self.system();
        let parsed = projection
            .composite_from_point(point, system, &CompositeOptions::of(system))
            .and_then(|s| parse_composite(&s, system));

        match parsed {
            Ok(c) => Self {
                kind: match c.square {
                    None => GridKind::UTM,
                    Some(square) => GridKind::MGRS { square },
                },
                zone: c.zone,
                band: c.band,
                easting: c.easting,
                northing: c.northing,
                point: *point,
                error: None,
                inputs: Inputs::default(),
            },
            Err(e) => {
                tracing::debug!(%point, error = %e, "cannot regenerate {system:?}");
                Self {
                    error: Some(e),
                    ..self.clone()
                }
            }
        }
    }

    /// Makes a [`GridCoordinate`] from `self` keeping a failed text edit of `axis`.
    #[must_use]
    pub fn with_input(&self, axis: Axis, input: Option<Input>) -> Self {
        let mut next = self.clone();
        next.inputs.set(axis, input);
        next
    }
}

impl Display for GridCoordinate {
    /// Writes the spaced composite, e.g. `10S 567527 4148830` or `10S EG 67527 48830`.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            GridKind::UTM => write!(
                f,
                "{:02}{} {:06} {:07}",
                self.zone, self.band, self.easting, self.northing
            ),
            GridKind::MGRS { square } if square.is_empty() => write!(
                f,
                "{:02}{} {:05} {:05}",
                self.zone, self.band, self.easting, self.northing
            ),
            GridKind::MGRS { square } => write!(
                f,
                "{:02}{} {} {:05} {:05}",
                self.zone, self.band, square, self.easting, self.northing
            ),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::format::Notation;
    use crate::projection::Wgs84;
    use crate::ErrorKind;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;

    /// Rejects every composite and records what it was asked.
    #[derive(Default)]
    struct MockProjection {
        composites: RefCell<Vec<String>>,
    }

    impl Projection for MockProjection {
        fn point_from_composite(&self, composite: &str, _: System) -> Result<Point> {
            self.composites.borrow_mut().push(composite.to_string());
            Err(Error::new_unprojectable(composite))
        }

        fn composite_from_point(
            &self,
            point: &Point,
            _: System,
            _: &CompositeOptions,
        ) -> Result<String> {
            Err(Error::new_polar(point.to_string()))
        }

        fn components_from_point(&self, point: &Point, _: Notation) -> Result<String> {
            Err(Error::new_polar(point.to_string()))
        }
    }

    fn paris(system: System) -> GridCoordinate {
        GridCoordinate::from_point(system, &Point::new(48.8566, 2.3522), &Wgs84)
    }

    fn kind_of<T>(result: Result<T>) -> ErrorKind {
        match result {
            Ok(_) => panic!("expected an error"),
            Err(e) => e.kind().clone(),
        }
    }

    #[test]
    fn test_parse_composite_utm() {
        let expected = Composite {
            zone: 10,
            band: Band::S,
            square: None,
            easting: 567527,
            northing: 4148830,
        };
        for s in [
            "10S 567527 4148830",
            "10S5675274148830",
            " 10s 567527 4148830 ",
            "10 S 567527 4148830",
        ] {
            assert_eq!(parse_composite(s, System::UTM).unwrap(), expected, "{}", s);
        }

        let c = parse_composite("1N 5 0", System::UTM).unwrap();
        assert_eq!((c.zone, c.easting, c.northing), (1, 5, 0));

        for s in [
            "",
            "10S",
            "10S 567527",
            "10S 5675270 4148830",
            "10S 567527 41488300",
            "10S567527414883",
            "10I 567527 4148830",
            "S 567527 4148830",
            "10S 567527 414883a",
        ] {
            assert!(
                matches!(
                    kind_of(parse_composite(s, System::UTM)),
                    ErrorKind::MalformedInput { .. }
                ),
                "{}",
                s
            );
        }

        for s in ["0S 567527 4148830", "61S 567527 4148830"] {
            assert!(matches!(
                kind_of(parse_composite(s, System::UTM)),
                ErrorKind::OutOfRange {
                    field: Field::Zone,
                    ..
                }
            ));
        }
    }

    #[test]
    fn test_parse_composite_mgrs() {
        let expected = Composite {
            zone: 31,
            band: Band::U,
            square: Some("DQ".to_string()),
            easting: 52482,
            northing: 11717,
        };
        for s in [
            "31U DQ 52482 11717",
            "31UDQ5248211717",
            "31udq 52482 11717",
            "31UDQ 5248211717",
        ] {
            assert_eq!(parse_composite(s, System::MGRS).unwrap(), expected, "{}", s);
        }

        let c = parse_composite("31UDQ51", System::MGRS).unwrap();
        assert_eq!((c.easting, c.northing), (50000, 10000));
        let c = parse_composite("31UDQ", System::MGRS).unwrap();
        assert_eq!((c.easting, c.northing), (0, 0));

        for s in [
            "31U DQ 5248 11717",
            "31UDQ524821171",
            "31UDQ524821171700",
            "31U D 52482 11717",
            "31U D1 52482 11717",
        ] {
            assert!(
                matches!(
                    kind_of(parse_composite(s, System::MGRS)),
                    ErrorKind::MalformedInput { .. }
                ),
                "{}",
                s
            );
        }

        for s in ["ZAH 12345 12345", "AAN1234512345", "yzh"] {
            assert!(
                matches!(
                    kind_of(parse_composite(s, System::MGRS)),
                    ErrorKind::PolarUnsupported { .. }
                ),
                "{}",
                s
            );
        }
        // not polar in UTM
        assert!(matches!(
            kind_of(parse_composite("ZAH 12345 12345", System::UTM)),
            ErrorKind::MalformedInput { .. }
        ));
    }

    #[test]
    fn test_from_point() {
        let utm = paris(System::UTM);
        assert_eq!(utm.kind(), &GridKind::UTM);
        assert_eq!((utm.zone(), utm.band()), (&31, &Band::U));
        assert_eq!((utm.easting(), utm.northing()), (&452483, &5411717));
        assert_eq!(utm.square(), None);
        assert!(utm.is_valid());
        assert_eq!(utm.compose(), "31U4524835411717");

        let mgrs = paris(System::MGRS);
        assert_eq!(mgrs.square(), Some("DQ"));
        assert_eq!((mgrs.easting(), mgrs.northing()), (&52482, &11717));
        assert_eq!(mgrs.compose(), "31UDQ5248211717");
        assert_eq!(mgrs.to_string(), "31U DQ 52482 11717");
    }

    #[test]
    fn test_from_point_polar() {
        let point = Point::new(89.0, 10.0);
        let mgrs = GridCoordinate::from_point(System::MGRS, &point, &Wgs84);
        assert!(!mgrs.is_valid());
        assert!(matches!(
            mgrs.error().unwrap().kind(),
            ErrorKind::PolarUnsupported { .. }
        ));
        assert_eq!(mgrs.point(), &point);
        assert_eq!(mgrs.to_string(), "01X 00000 00000");
        assert_eq!(mgrs.square(), Some(""));

        let utm = GridCoordinate::from_point(System::UTM, &point, &Wgs84);
        assert!(matches!(
            utm.error().unwrap().kind(),
            ErrorKind::UnprojectableCoordinate { .. }
        ));
    }

    #[test]
    fn test_refresh() {
        let mgrs = paris(System::MGRS);

        let point = Point::new(37.48391, -122.2362);
        let next = mgrs.refresh(&point, &Wgs84);
        assert_eq!(next.to_string(), "10S EG 67527 48830");
        assert_eq!(next.point(), &point);

        // polar keeps the last good fields and point
        let next = mgrs.refresh(&Point::new(-85.0, 0.0), &Wgs84);
        assert_eq!(next.to_string(), mgrs.to_string());
        assert_eq!(next.point(), mgrs.point());
        assert!(matches!(
            next.error().unwrap().kind(),
            ErrorKind::PolarUnsupported { .. }
        ));

        // and the next good point clears the error
        let next = next.refresh(&point, &Wgs84);
        assert!(next.is_valid());
    }

    #[test]
    fn test_apply_edit_noop() {
        let mock = MockProjection::default();
        let mgrs = paris(System::MGRS);

        for edit in [
            Edit::Zone(31),
            Edit::Band(Band::U),
            Edit::Easting(52482),
            Edit::Northing(11717),
            Edit::Square("DQ".to_string()),
        ] {
            let (next, result) = mgrs.apply_edit(edit, &mock);
            assert_eq!(result, Ok(()));
            assert_eq!(next, mgrs);
        }
        // never projected
        assert!(mock.composites.borrow().is_empty());
    }

    #[test]
    fn test_apply_edit_out_of_range() {
        let mock = MockProjection::default();
        let utm = paris(System::UTM);
        let mgrs = paris(System::MGRS);

        for (coord, edit, field) in [
            (&utm, Edit::Zone(0), Field::Zone),
            (&utm, Edit::Zone(61), Field::Zone),
            (&utm, Edit::Easting(1_000_000), Field::Easting),
            (&utm, Edit::Northing(10_000_000), Field::Northing),
            (&mgrs, Edit::Easting(100_000), Field::Easting),
            (&mgrs, Edit::Northing(100_000), Field::Northing),
        ] {
            let (next, result) = coord.apply_edit(edit, &mock);
            match kind_of(result) {
                ErrorKind::OutOfRange { field: actual, .. } => assert_eq!(actual, field),
                kind => panic!("{kind:?}"),
            }
            assert_eq!(&next, coord);
        }
        assert!(mock.composites.borrow().is_empty());

        // edges pass the range check and reach the projection
        for (coord, edit) in [
            (&utm, Edit::Easting(999_999)),
            (&utm, Edit::Northing(9_999_999)),
            (&mgrs, Edit::Easting(99_999)),
            (&mgrs, Edit::Northing(99_999)),
        ] {
            let (_, result) = coord.apply_edit(edit, &mock);
            assert!(matches!(
                kind_of(result),
                ErrorKind::UnprojectableCoordinate { .. }
            ));
        }
        assert_eq!(mock.composites.borrow().len(), 4);
    }

    #[test]
    fn test_apply_edit_square() {
        let mgrs = paris(System::MGRS);

        let (next, result) = mgrs.apply_edit(Edit::Square("DP".to_string()), &Wgs84);
        assert!(result.is_ok());
        assert_eq!(next.square(), Some("DP"));
        assert!(next.point().latitude() < mgrs.point().latitude());

        // not a square of 31U
        let (next, result) = mgrs.apply_edit(Edit::Square("KQ".to_string()), &Wgs84);
        assert!(matches!(
            kind_of(result),
            ErrorKind::InvalidGridSquare { zone: 31, band: Band::U, .. }
        ));
        assert_eq!(next, mgrs);

        // UTM has no square
        let utm = paris(System::UTM);
        let (_, result) = utm.apply_edit(Edit::Square("DQ".to_string()), &Wgs84);
        assert!(matches!(
            kind_of(result),
            ErrorKind::InvalidGridSquare { .. }
        ));
    }

    #[test]
    fn test_apply_edit_zone_remaps_square() {
        let mgrs = paris(System::MGRS);

        // D is not a column of zone 32, the first valid square is taken
        let (next, result) = mgrs.apply_edit(Edit::Zone(32), &Wgs84);
        assert!(result.is_ok());
        assert_eq!(next.to_string(), "32U KU 52482 11717");
        assert!(square::valid_ids(32, Band::U).contains(&"KU".to_string()));
        assert!((next.point().latitude() - 47.910963).abs() < 1e-4);
        assert!((next.point().longitude() - 5.687374).abs() < 1e-4);

        // D is a column of zone 34, kept
        let (next, result) = mgrs.apply_edit(Edit::Zone(34), &Wgs84);
        assert!(result.is_ok());
        assert_eq!(next.square(), Some("DU"));
        assert!((next.point().longitude() - 20.363518).abs() < 1e-4);
    }

    #[test]
    fn test_apply_edit_zone_keeps_column() {
        let mgrs = paris(System::MGRS);
        for zone in 1..=60 {
            let (next, _) = mgrs.apply_edit(Edit::Zone(zone), &MockProjection::default());
            let old_column = 'D';
            let ids = square::valid_ids(zone, Band::U);
            let square = next.square().unwrap();

            assert!(ids.iter().any(|id| id == square), "{} {}", zone, square);
            if ids.iter().any(|id| id.starts_with(old_column)) {
                assert!(square.starts_with(old_column), "{} {}", zone, square);
            }
        }
    }

    #[test]
    fn test_apply_edit_band_utm() {
        let utm = GridCoordinate::from_point(System::UTM, &Point::new(37.48391, -122.2362), &Wgs84);

        let (next, result) = utm.apply_edit(Edit::Band(Band::T), &Wgs84);
        assert!(result.is_ok());
        assert_eq!(next.northing(), &5_036_830);
        assert!((next.point().latitude() - 45.481731).abs() < 1e-4);

        let (next, result) = utm.apply_edit(Edit::Band(Band::R), &Wgs84);
        assert!(result.is_ok());
        assert_eq!(next.northing(), &3_260_830);

        // extremes reset
        let (next, result) = utm.apply_edit(Edit::Band(Band::X), &Wgs84);
        assert!(result.is_ok());
        assert_eq!(next.northing(), &7_992_000);
        assert!((next.point().latitude() - 72.017651).abs() < 1e-4);
        assert_eq!(next.band(), &Band::X);

        let (next, _) = utm.apply_edit(Edit::Band(Band::C), &Wgs84);
        assert_eq!(next.northing(), &1_120_000);

        // across the Equator
        let (next, _) = utm.apply_edit(Edit::Band(Band::M), &Wgs84);
        let expected = 4_148_830 + Band::M.starting_northing() - Band::S.starting_northing();
        assert_eq!(*next.northing() as i64, expected);
    }

    #[test]
    fn test_apply_edit_band_out_of_northing() {
        let mock = MockProjection::default();
        let (utm, _) = paris(System::UTM).apply_edit(Edit::Northing(100), &mock);
        assert_eq!((utm.band(), utm.northing()), (&Band::U, &100));

        // 100 moved from U to D is below zero, reset to the start of D
        let (next, _) = utm.apply_edit(Edit::Band(Band::D), &mock);
        assert_eq!(next.northing(), &(Band::D.starting_northing() as u32));
    }

    #[test]
    fn test_apply_edit_projection_failure() {
        let utm = GridCoordinate::from_point(System::UTM, &Point::new(37.48391, -122.2362), &Wgs84);

        // the easting is out of the zone
        let (next, result) = utm.apply_edit(Edit::Easting(999_999), &Wgs84);
        assert!(matches!(
            kind_of(result),
            ErrorKind::UnprojectableCoordinate { .. }
        ));
        assert_eq!(next.easting(), &999_999);
        assert_eq!(next.point(), utm.point());
        assert!(!next.is_valid());

        // and recovers
        let (next, result) = next.apply_edit(Edit::Easting(567_527), &Wgs84);
        assert!(result.is_ok());
        assert!(next.is_valid());

        // a square of the narrowed zone 31V east of 3°
        let mgrs = GridCoordinate::from_point(System::MGRS, &Point::new(60.0, 2.9), &Wgs84);
        assert_eq!(mgrs.to_string(), "31V DG 94422 51415");
        let (next, result) = mgrs.apply_edit(Edit::Square("FG".to_string()), &Wgs84);
        assert!(matches!(
            kind_of(result),
            ErrorKind::UnprojectableCoordinate { .. }
        ));
        assert_eq!(next.square(), Some("FG"));
        assert_eq!(next.point(), mgrs.point());

        // a square read in the wrong band
        let (next, result) = paris(System::MGRS).apply_edit(Edit::Band(Band::X), &Wgs84);
        assert!(result.is_err());
        assert_eq!(next.to_string(), "31X DV 52482 11717");
        assert_eq!(next.point(), paris(System::MGRS).point());
    }

    #[test]
    fn test_apply_edit_composite() {
        let mock = MockProjection::default();
        let mgrs = paris(System::MGRS);
        let utm = paris(System::UTM);

        let _ = mgrs.apply_edit(Edit::Easting(7), &mock);
        let _ = utm.apply_edit(Edit::Northing(42), &mock);
        let _ = utm.apply_edit(Edit::Zone(5), &mock);
        assert_eq!(
            mock.composites.borrow().as_slice(),
            ["31UDQ0000711717", "31U4524830000042", "05U4524835411717"]
        );
    }

    #[test]
    fn test_with_input() {
        let utm = paris(System::UTM);
        let input = Input {
            raw: "12x".to_string(),
            error: Error::new_malformed("12x", "a number"),
        };
        let next = utm.with_input(Axis::X, Some(input.clone()));
        assert_eq!(next.inputs().get(Axis::X), Some(&input));

        // a successful edit clears it
        let (next, _) = next.apply_edit(Edit::Easting(452_000), &Wgs84);
        assert_eq!(next.inputs(), &Inputs::default());
    }

    #[test]
    #[cfg(feature = "serde")]
    fn test_serde() {
        use serde_test::{assert_tokens, Token};

        assert_tokens(
            &GridKind::MGRS {
                square: "DQ".to_string(),
            },
            &[
                Token::StructVariant {
                    name: "GridKind",
                    variant: "MGRS",
                    len: 1,
                },
                Token::Str("square"),
                Token::String("DQ"),
                Token::StructVariantEnd,
            ],
        );
        assert_tokens(
            &GridKind::UTM,
            &[Token::UnitVariant {
                name: "GridKind",
                variant: "UTM",
            }],
        );
    }
}
