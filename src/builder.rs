#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::format::Format;
use crate::projection::{Projection, Wgs84};
use crate::{Point, Result, Session};

/// The start-up settings of a [`Session`], the selected format and the point.
///
/// The default is [`Format::DD`] at (0°, 0°).
///
/// # Example
///
/// ```
/// # use coordconv::*;
/// # use coordconv::format::Format;
/// # fn main() -> Result<()> {
/// let config = Config {
///     format: Format::MGRS,
///     point: Point::try_new(37.48391, -122.2362)?,
/// };
/// let session = SessionBuilder::new().config(&config).build()?;
///
/// assert_eq!(session.display_selected(), "10S EG 67527 48830");
/// # Ok(())}
/// ```
#[derive(Debug, PartialEq, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// The format selected at start
    #[cfg_attr(feature = "serde", serde(default))]
    pub format: Format,
    /// The point at start
    #[cfg_attr(feature = "serde", serde(default))]
    pub point: Point,
}

/// The builder of [`Session`].
///
/// # Example
///
/// ```
/// # use coordconv::*;
/// # use coordconv::format::Format;
/// # use coordconv::projection::Wgs84;
/// # fn main() -> Result<()> {
/// let session = SessionBuilder::new()
///     .format(Format::UTM)
///     .point(Point::try_new(48.8566, 2.3522)?)
///     .projection(Wgs84)
///     .build()?;
///
/// assert_eq!(session.format(), &Format::UTM);
/// assert_eq!(session.display_selected(), "31U 452483 5411717");
/// # Ok(())}
/// ```
#[derive(Debug, Clone)]
pub struct SessionBuilder<P = Wgs84> {
    projection: P,
    config: Config,
}

impl SessionBuilder<Wgs84> {
    /// Makes a [`SessionBuilder`] on [`Wgs84`] with the default [`Config`].
    ///
    /// # Example
    ///
    /// ```
    /// # use coordconv::*;
    /// # use coordconv::format::Format;
    /// # fn main() -> Result<()> {
    /// let session = SessionBuilder::new().build()?;
    ///
    /// assert_eq!(session.format(), &Format::DD);
    /// assert_eq!(session.point(), &Point::new(0.0, 0.0));
    /// # Ok(())}
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self {
            projection: Wgs84,
            config: Config::default(),
        }
    }
}

impl Default for SessionBuilder<Wgs84> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Projection> SessionBuilder<P> {
    /// Updates the selected format.
    #[inline]
    pub const fn format(mut self, format: Format) -> Self {
        self.config.format = format;
        self
    }

    /// Updates the point.
    #[inline]
    pub const fn point(mut self, point: Point) -> Self {
        self.config.point = point;
        self
    }

    /// Updates both the format and the point by `config`.
    #[inline]
    pub const fn config(mut self, config: &Config) -> Self {
        self.config = *config;
        self
    }

    /// Replaces the projection.
    #[inline]
    pub fn projection<Q: Projection>(self, projection: Q) -> SessionBuilder<Q> {
        SessionBuilder {
            projection,
            config: self.config,
        }
    }

    /// Builds [`Session`].
    ///
    /// # Errors
    ///
    /// If the point is out-of-range.
    #[inline]
    pub fn build(self) -> Result<Session<P>> {
        Session::new(self.projection, self.config.format, self.config.point)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::ErrorKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default() {
        assert_eq!(
            Config::default(),
            Config {
                format: Format::DD,
                point: Point::new(0.0, 0.0)
            }
        );

        let session = SessionBuilder::default().build().unwrap();
        assert_eq!(session.display_selected(), "0.000000° N, 0.000000° E");
    }

    #[test]
    fn test_impl() {
        let session = SessionBuilder::new()
            .point(Point::new(-33.8688, 151.2093))
            .format(Format::MGRS)
            .build()
            .unwrap();

        assert_eq!(session.format(), &Format::MGRS);
        assert_eq!(session.display_selected(), "56H LH 34368 50948");
    }

    #[test]
    fn test_out_of_range() {
        let e = SessionBuilder::new()
            .point(Point::new(91.0, 0.0))
            .build()
            .unwrap_err();
        assert!(matches!(e.kind(), ErrorKind::OutOfRange { .. }));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_json() {
        let config = Config {
            format: Format::DMS,
            point: Point::new(7.5, -122.0842222),
        };

        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(
            json,
            r#"{"format":"DMS","point":{"latitude":7.5,"longitude":-122.0842222}}"#
        );
        assert_eq!(serde_json::from_str::<Config>(&json).unwrap(), config);

        let config: Config = serde_json::from_str(r#"{"format":"UTM"}"#).unwrap();
        assert_eq!(config.format, Format::UTM);
        assert_eq!(config.point, Point::new(0.0, 0.0));
    }
}
