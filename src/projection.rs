//! Provides the projection service the coordinate objects talk to.
//!
//! [`Projection`] is the seam: the core composes and parses grid strings
//! through it and never does geodesy itself.
//! [`Wgs84`] is the bundled implementation.
use crate::band::Band;
use crate::error::Field;
use crate::format::{Axis, Hemisphere, Notation, System};
use crate::grid::parse_composite;
use crate::{dms, square};
use crate::{Error, Point, Result};

mod tm;
mod zone;

/// Converts between WGS84 points and their textual representations.
pub trait Projection {
    /// Returns the point a UTM or MGRS composite string denotes.
    ///
    /// # Errors
    ///
    /// If `composite` is malformed, out of the envelope of its zone,
    /// band and grid square, or polar.
    fn point_from_composite(&self, composite: &str, system: System) -> Result<Point>;

    /// Returns the UTM or MGRS composite string of `point`.
    ///
    /// # Errors
    ///
    /// If `point` has no representation in `system`.
    fn composite_from_point(
        &self,
        point: &Point,
        system: System,
        options: &CompositeOptions,
    ) -> Result<String>;

    /// Returns the space-delimited components of `point` in `notation`,
    /// latitude first, each axis ending with its hemisphere letter.
    ///
    /// # Errors
    ///
    /// If `point` is out-of-range.
    fn components_from_point(&self, point: &Point, notation: Notation) -> Result<String>;
}

impl<P: Projection + ?Sized> Projection for &P {
    fn point_from_composite(&self, composite: &str, system: System) -> Result<Point> {
        (**self).point_from_composite(composite, system)
    }

    fn composite_from_point(
        &self,
        point: &Point,
        system: System,
        options: &CompositeOptions,
    ) -> Result<String> {
        (**self).composite_from_point(point, system, options)
    }

    fn components_from_point(&self, point: &Point, notation: Notation) -> Result<String> {
        (**self).components_from_point(point, notation)
    }
}

/// How a composite reduces metres to its digits.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Rounding {
    Truncate,
    Round,
}

/// Options of [`Projection::composite_from_point`].
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct CompositeOptions {
    /// Digits per axis of MGRS, 1 to 5.
    pub digits: u8,
    pub rounding: Rounding,
    /// Separates zone and band, grid square, easting and northing by a space.
    pub spaced: bool,
}

impl CompositeOptions {
    /// Metre-rounded UTM, e.g. `10S 567527 4148830`.
    #[must_use]
    pub const fn utm() -> Self {
        Self {
            digits: 5,
            rounding: Rounding::Round,
            spaced: true,
        }
    }

    /// 1 \[m\] MGRS, truncated so that the square contains the point,
    /// e.g. `10S EG 67527 48830`.
    #[must_use]
    pub const fn mgrs() -> Self {
        Self {
            digits: 5,
            rounding: Rounding::Truncate,
            spaced: true,
        }
    }

    /// Returns the default options of `system`.
    #[must_use]
    pub const fn of(system: System) -> Self {
        match system {
            System::UTM => Self::utm(),
            System::MGRS => Self::mgrs(),
        }
    }

    fn reduce(&self, value: f64, unit: f64) -> u64 {
        match self.rounding {
            Rounding::Truncate => (value / unit).floor() as u64,
            Rounding::Round => (value / unit).round() as u64,
        }
    }
}

/// Transverse Mercator on the WGS84 ellipsoid, UTM and MGRS as NGA defines them.
///
/// # Example
///
/// ```
/// # use coordconv::*;
/// # use coordconv::format::System;
/// # use coordconv::projection::{CompositeOptions, Projection, Wgs84};
/// # fn main() -> Result<()> {
/// let point = Point::try_new(48.8566, 2.3522)?;
///
/// let s = Wgs84.composite_from_point(&point, System::MGRS, &CompositeOptions::mgrs())?;
/// assert_eq!(s, "31U DQ 52482 11717");
///
/// let back = Wgs84.point_from_composite(&s, System::MGRS)?;
/// assert!((back.latitude() - 48.8566).abs() < 1e-4);
/// assert!((back.longitude() - 2.3522).abs() < 1e-4);
/// # Ok(())}
/// ```
#[derive(Debug, Default, PartialEq, Eq, Hash, Clone, Copy)]
pub struct Wgs84;

/// Tolerance \[deg\] of the envelope check of a parsed composite.
const ENVELOPE: f64 = 0.5;

const FALSE_EASTING: f64 = 500_000.0;
const FALSE_NORTHING: f64 = crate::band::FALSE_NORTHING as f64;
const SQUARE: f64 = 100_000.0;
const ROW_CYCLE: f64 = 2_000_000.0;

/// Returns the lowest northing \[m\] a grid square of `band` can start at.
fn min_northing(band: Band) -> f64 {
    let south = band.south();
    let (_, center) = tm::forward(south, 0.0);
    let lowest = if band.is_northern() {
        center
    } else {
        let (_, edge) = tm::forward(south, 3.0);
        center.min(edge) + FALSE_NORTHING
    };
    (lowest / SQUARE).floor() * SQUARE
}

impl Wgs84 {
    /// Returns zone, band, easting and northing \[m\] of `point`.
    fn utm(point: &Point) -> Option<(u8, Band, f64, f64)> {
        let band = Band::from_latitude(point.latitude)?;
        if !(-180.0..=180.0).contains(&point.longitude) {
            return None;
        }

        let zone = zone::zone_of(point.latitude, point.longitude);
        let (x, y) = tm::forward(
            point.latitude,
            point.longitude - zone::central_meridian(zone),
        );
        let northing = if band.is_northern() {
            y
        } else {
            y + FALSE_NORTHING
        };
        Some((zone, band, x + FALSE_EASTING, northing))
    }

    fn check_envelope(composite: &str, zone: u8, band: Band, point: &Point) -> Result<()> {
        let (west, east) = zone::longitude_range(zone, band)
            .ok_or_else(|| Error::new_unprojectable(composite))?;

        let lat_ok = (band.south() - ENVELOPE..=band.north() + ENVELOPE).contains(&point.latitude);
        let lon_ok = (west - ENVELOPE..=east + ENVELOPE).contains(&point.longitude);
        if lat_ok && lon_ok {
            Ok(())
        } else {
            Err(Error::new_unprojectable(composite))
        }
    }
}

impl Projection for Wgs84 {
    fn point_from_composite(&self, composite: &str, system: System) -> Result<Point> {
        let parsed = parse_composite(composite, system)?;
        let (zone, band) = (parsed.zone, parsed.band);

        let (easting, northing) = match &parsed.square {
            None => (parsed.easting as f64, parsed.northing as f64),
            Some(id) => {
                let mut chars = id.chars();
                let (col, row) = match (chars.next(), chars.next()) {
                    (Some(col), Some(row)) => (col, row),
                    _ => return Err(Error::new_invalid_grid_square(id.as_str(), zone, band)),
                };
                let (Some(e), Some(n)) = (
                    square::column_easting(zone, col),
                    square::row_northing(zone, row),
                ) else {
                    return Err(Error::new_invalid_grid_square(id.as_str(), zone, band));
                };

                let lowest = min_northing(band);
                let mut n = n;
                while n < lowest {
                    n += ROW_CYCLE;
                }
                (e + parsed.easting as f64, n + parsed.northing as f64)
            }
        };

        let y = if band.is_northern() {
            northing
        } else {
            northing - FALSE_NORTHING
        };
        let (latitude, dlon) = tm::inverse(easting - FALSE_EASTING, y);
        let point = Point::new(latitude, zone::central_meridian(zone) + dlon);

        Self::check_envelope(composite, zone, band, &point)?;
        Ok(point.normalize())
    }

    fn composite_from_point(
        &self,
        point: &Point,
        system: System,
        options: &CompositeOptions,
    ) -> Result<String> {
        let Some((zone, band, easting, northing)) = Self::utm(point) else {
            return Err(match system {
                System::UTM => Error::new_unprojectable(point.to_string()),
                System::MGRS => Error::new_polar(point.to_string()),
            });
        };
        let sep = if options.spaced { " " } else { "" };

        match system {
            System::UTM => {
                let e = options.reduce(easting, 1.0).min(999_999);
                let n = options.reduce(northing, 1.0).min(9_999_999);
                Ok(format!("{zone:02}{band}{sep}{e:06}{sep}{n:07}"))
            }
            System::MGRS => {
                let (Some(col), Some(row)) = (
                    square::column_letter(zone, easting),
                    square::row_letter(zone, northing),
                ) else {
                    return Err(Error::new_unprojectable(point.to_string()));
                };

                let digits = options.digits.clamp(1, 5) as usize;
                let unit = 10_f64.powi(5 - digits as i32);
                let max = 10_u64.pow(digits as u32) - 1;
                let e = options.reduce(easting % SQUARE, unit).min(max);
                let n = options.reduce(northing % SQUARE, unit).min(max);
                Ok(format!(
                    "{zone:02}{band}{sep}{col}{row}{sep}{e:0digits$}{sep}{n:0digits$}"
                ))
            }
        }
    }

    fn components_from_point(&self, point: &Point, notation: Notation) -> Result<String> {
        let point = Point::try_new(point.latitude, point.longitude)?;

        let axis = |value: f64, axis: Axis, width: usize| -> Result<String> {
            let hemisphere = Hemisphere::of(value, axis);
            let field = match axis {
                Axis::X => Field::Longitude,
                Axis::Y => Field::Latitude,
            };
            let oob = || Error::new_out_of_range(field, value, -180.0, 180.0);

            let s = match notation {
                Notation::DD => format!("{:0w$.6}", value.abs(), w = width + 7),
                Notation::DDM => dms::DDM::from_degree(value, 4)
                    .ok_or_else(oob)?
                    .components(width)
                    .join(" "),
                Notation::DMS => dms::DMS::from_degree(value, 2)
                    .ok_or_else(oob)?
                    .components(width)
                    .join(" "),
            };
            Ok(format!("{s}{hemisphere}"))
        };

        Ok(format!(
            "{} {}",
            axis(point.latitude, Axis::Y, 2)?,
            axis(point.longitude, Axis::X, 3)?
        ))
    }
}
