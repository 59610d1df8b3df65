//! Provides the coordinate session, five representations of one point.
use crate::format::{Axis, Format, Input, Notation, System};
use crate::geodetic::GeodeticCoordinate;
use crate::grid::{Edit, GridCoordinate};
use crate::projection::{Projection, Wgs84};
use crate::validate::validate;
use crate::{Point, Result};

/// The DD, DDM, DMS, UTM and MGRS representations of one point,
/// kept consistent as any of them is edited.
///
/// The most recently edited representation is authoritative,
/// the others are regenerated from its point.
/// Every operation computes the whole next state before it replaces the current one,
/// so a failed operation leaves the session as it was,
/// except the failed input it keeps for the edited axis.
///
/// # Example
///
/// ```
/// # use coordconv::*;
/// # use coordconv::format::{Axis, Format, Notation, System};
/// # use coordconv::grid::Edit;
/// # fn main() -> Result<()> {
/// let mut session = SessionBuilder::new()
///     .point(Point::try_new(48.8566, 2.3522)?)
///     .build()?;
/// assert_eq!(session.display(Format::MGRS), "31U DQ 52482 11717");
///
/// session.edit_text(Format::DMS, Axis::Y, "37 29 2.08 N")?;
/// session.edit_text(Format::DD, Axis::X, "-122.2362")?;
/// assert_eq!(session.display(Format::UTM), "10S 567527 4148830");
///
/// session.edit_grid(System::UTM, Edit::Zone(11))?;
/// assert_eq!(session.display(Format::DD), "37.483908° N, 116.236204° W");
///
/// // a failed edit keeps the raw text on its axis only
/// assert!(session.edit_text(Format::DMS, Axis::Y, "43 61 5").is_err());
/// let input = session.geodetic(Notation::DMS).inputs().get(Axis::Y);
/// assert_eq!(input.map(|v| v.raw.as_str()), Some("43 61 5"));
/// # Ok(())}
/// ```
#[derive(Debug, Clone)]
pub struct Session<P = Wgs84> {
    projection: P,
    format: Format,
    point: Point,
    dd: GeodeticCoordinate,
    ddm: GeodeticCoordinate,
    dms: GeodeticCoordinate,
    utm: GridCoordinate,
    mgrs: GridCoordinate,
}

impl<P: Projection> Session<P> {
    /// Makes a [`Session`] at `point`, selecting `format`.
    ///
    /// Grid representations that cannot hold `point`, e.g. MGRS near the poles,
    /// start in their error state.
    ///
    /// # Errors
    ///
    /// If `point` is out-of-range.
    pub fn new(projection: P, format: Format, point: Point) -> Result<Self> {
        let point = Point::try_new(point.latitude, point.longitude)?;

        let geodetic = |notation| GeodeticCoordinate::from_point(notation, &point, &projection);
        let (dd, ddm, dms) = (
            geodetic(Notation::DD)?,
            geodetic(Notation::DDM)?,
            geodetic(Notation::DMS)?,
        );
        let utm = GridCoordinate::from_point(System::UTM, &point, &projection);
        let mgrs = GridCoordinate::from_point(System::MGRS, &point, &projection);

        Ok(Self {
            projection,
            format,
            point,
            dd,
            ddm,
            dms,
            utm,
            mgrs,
        })
    }

    /// Returns the projection of `self`.
    #[inline]
    pub const fn projection(&self) -> &P {
        &self.projection
    }

    /// Returns the selected format.
    #[inline]
    pub const fn format(&self) -> &Format {
        &self.format
    }

    /// Selects `format`.
    #[inline]
    pub fn set_format(&mut self, format: Format) {
        self.format = format;
    }

    /// Returns the point of `self`.
    #[inline]
    pub const fn point(&self) -> &Point {
        &self.point
    }

    /// Returns the DD, DDM or DMS representation.
    #[inline]
    pub const fn geodetic(&self, notation: Notation) -> &GeodeticCoordinate {
        match notation {
            Notation::DD => &self.dd,
            Notation::DDM => &self.ddm,
            Notation::DMS => &self.dms,
        }
    }

    /// Returns the UTM or MGRS representation.
    #[inline]
    pub const fn grid(&self, system: System) -> &GridCoordinate {
        match system {
            System::UTM => &self.utm,
            System::MGRS => &self.mgrs,
        }
    }

    /// Returns the text of the `format` representation,
    /// e.g. `7.5° N, 122.084222° W` or `10S EG 67527 48830`.
    #[must_use]
    pub fn display(&self, format: Format) -> String {
        match (format.notation(), format.system()) {
            (Some(notation), _) => self.geodetic(notation).to_string(),
            (_, Some(system)) => self.grid(system).to_string(),
            (None, None) => String::new(),
        }
    }

    /// Returns the text of the selected representation.
    #[must_use]
    pub fn display_selected(&self) -> String {
        self.display(self.format)
    }

    /// Moves `self` to `point`, e.g. on a map click, regenerating all five representations.
    ///
    /// A grid representation that cannot hold `point` keeps its last fields
    /// and holds the error, the others update.
    ///
    /// # Errors
    ///
    /// If `point` is out-of-range, `self` is unchanged.
    pub fn set_point(&mut self, point: Point) -> Result<()> {
        let point = Point::try_new(point.latitude, point.longitude)?;
        let next = self.regenerate(&point, None)?;
        self.commit(point, next);
        tracing::trace!(%point, "regenerated session");
        Ok(())
    }

    /// Applies the text `raw` typed into the `axis` field of `format`.
    ///
    /// DD, DDM and DMS text replaces one axis of the point,
    /// UTM and MGRS text becomes an easting or northing edit (see [`Session::edit_grid`]).
    ///
    /// # Errors
    ///
    /// If `raw` fails validation, it is kept with the error on that axis of
    /// that representation and nothing else changes.
    /// A UTM or MGRS edit the projection rejects keeps `raw` the same way.
    /// Errors of the resulting point are returned as is.
    pub fn edit_text(&mut self, format: Format, axis: Axis, raw: &str) -> Result<()> {
        let value = match validate(raw, format, axis) {
            Ok(v) => v,
            Err(e) => {
                tracing::debug!(%format, ?axis, raw, error = %e, "invalid coordinate text");
                let input = Input {
                    raw: raw.to_string(),
                    error: e.clone(),
                };
                self.keep_input(format, axis, Some(input));
                return Err(e);
            }
        };

        match format.system() {
            Some(system) => match self.edit_grid(system, Edit::axis(axis, value as u32)) {
                Ok(()) => {
                    self.keep_input(format, axis, None);
                    Ok(())
                }
                Err(e) => {
                    let input = Input {
                        raw: raw.to_string(),
                        error: e.clone(),
                    };
                    self.keep_input(format, axis, Some(input));
                    Err(e)
                }
            },
            None => {
                let point = match axis {
                    Axis::X => self.point.with_longitude(value),
                    Axis::Y => self.point.with_latitude(value),
                };
                self.set_point(point)
            }
        }
    }

    /// Applies `edit` to the `system` representation.
    ///
    /// On success the other four representations are regenerated from the new point.
    ///
    /// # Errors
    ///
    /// If the edit is out-of-range or an invalid grid square, nothing changes.
    /// If the projection rejects the edited fields, the `system` representation
    /// keeps them in its error state and the others are unchanged.
    pub fn edit_grid(&mut self, system: System, edit: Edit) -> Result<()> {
        let (edited, result) = self.grid(system).apply_edit(edit, &self.projection);
        if let Err(e) = result {
            match system {
                System::UTM => self.utm = edited,
                System::MGRS => self.mgrs = edited,
            }
            return Err(e);
        }

        let point = *edited.point();
        let next = self.regenerate(&point, Some(edited))?;
        self.commit(point, next);
        tracing::trace!(%point, ?system, "regenerated session");
        Ok(())
    }

    /// Returns the five representations of `point`, taking `edited` as is.
    fn regenerate(&self, point: &Point, edited: Option<GridCoordinate>) -> Result<Representations> {
        let projection = &self.projection;
        let geodetic = |notation| GeodeticCoordinate::from_point(notation, point, projection);

        let (mut utm, mut mgrs) = (
            self.utm.refresh(point, projection),
            self.mgrs.refresh(point, projection),
        );
        match edited {
            Some(g) if g.system() == System::UTM => utm = g,
            Some(g) => mgrs = g,
            None => {}
        }

        Ok(Representations {
            dd: geodetic(Notation::DD)?,
            ddm: geodetic(Notation::DDM)?,
            dms: geodetic(Notation::DMS)?,
            utm,
            mgrs,
        })
    }

    fn commit(&mut self, point: Point, next: Representations) {
        self.point = point;
        self.dd = next.dd;
        self.ddm = next.ddm;
        self.dms = next.dms;
        self.utm = next.utm;
        self.mgrs = next.mgrs;
    }

    fn keep_input(&mut self, format: Format, axis: Axis, input: Option<Input>) {
        match format {
            Format::DD => self.dd = self.dd.with_input(axis, input),
            Format::DDM => self.ddm = self.ddm.with_input(axis, input),
            Format::DMS => self.dms = self.dms.with_input(axis, input),
            Format::UTM => self.utm = self.utm.with_input(axis, input),
            Format::MGRS => self.mgrs = self.mgrs.with_input(axis, input),
        }
    }
}

struct Representations {
    dd: GeodeticCoordinate,
    ddm: GeodeticCoordinate,
    dms: GeodeticCoordinate,
    utm: GridCoordinate,
    mgrs: GridCoordinate,
}
