//! Provides the error type of this crate.
use crate::band::Band;

/// Alias for a `Result<T, coordconv::error::Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents all possible errors that can occur by this crate.
///
/// Errors are plain values: coordinate objects keep the last one they hit,
/// so [`Error`] is [`Clone`] and [`PartialEq`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{err}")]
pub struct Error {
    err: Box<ErrorKind>,
}

impl Error {
    /// Returns a error kind.
    pub fn kind(&self) -> &ErrorKind {
        &self.err
    }
}

impl Error {
    #[cold]
    pub(crate) fn new_out_of_range(field: Field, value: f64, low: f64, high: f64) -> Self {
        Self {
            err: Box::new(ErrorKind::OutOfRange {
                field,
                value,
                low,
                high,
            }),
        }
    }

    #[cold]
    pub(crate) fn new_malformed(input: impl Into<String>, expected: &'static str) -> Self {
        Self {
            err: Box::new(ErrorKind::MalformedInput {
                input: input.into(),
                expected,
            }),
        }
    }

    #[cold]
    pub(crate) fn new_invalid_grid_square(id: impl Into<String>, zone: u8, band: Band) -> Self {
        Self {
            err: Box::new(ErrorKind::InvalidGridSquare {
                id: id.into(),
                zone,
                band,
            }),
        }
    }

    #[cold]
    pub(crate) fn new_unprojectable(input: impl Into<String>) -> Self {
        Self {
            err: Box::new(ErrorKind::UnprojectableCoordinate {
                input: input.into(),
            }),
        }
    }

    #[cold]
    pub(crate) fn new_polar(input: impl Into<String>) -> Self {
        Self {
            err: Box::new(ErrorKind::PolarUnsupported {
                input: input.into(),
            }),
        }
    }
}

/// The cause of an [`Error`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ErrorKind {
    /// A numeric value outside its bounds.
    #[error("invalid {field}: {value:?} must satisfy {low:?} <= and <= {high:?}")]
    OutOfRange {
        field: Field,
        value: f64,
        low: f64,
        high: f64,
    },
    /// Wrong token count or an unparsable number.
    #[error("invalid input '{input}': expected {expected}")]
    MalformedInput {
        input: String,
        expected: &'static str,
    },
    /// A 100km grid square that does not exist in the zone and band.
    #[error("invalid grid square '{id}' for {zone}{band}")]
    InvalidGridSquare { id: String, zone: u8, band: Band },
    /// The projection rejects the coordinate.
    #[error("cannot project '{input}'")]
    UnprojectableCoordinate { input: String },
    /// MGRS in the polar regions, where there is no numeric UTM zone.
    #[error("polar coordinate unsupported: '{input}'")]
    PolarUnsupported { input: String },
}

/// The quantity an [`ErrorKind::OutOfRange`] refers to.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Field {
    Latitude,
    Longitude,
    Easting,
    Northing,
    Zone,
    Minute,
    Second,
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Field::Latitude => "latitude",
            Field::Longitude => "longitude",
            Field::Easting => "easting",
            Field::Northing => "northing",
            Field::Zone => "zone",
            Field::Minute => "minute",
            Field::Second => "second",
        };
        f.write_str(s)
    }
}
