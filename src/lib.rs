//! # coordconv
//!
//! Coordinate conversion and validation between five formats of a WGS84 point:
//! decimal degrees (DD), degrees decimal minutes (DDM), degrees minutes seconds (DMS),
//! Universal Transverse Mercator (UTM) and the Military Grid Reference System (MGRS).
//!
//! A [`Session`] holds the five representations of one point and keeps them
//! consistent as any one of them is edited, field by field, as in a coordinate entry form.
//!
//! ```
//! use coordconv::format::{Axis, Format, System};
//! use coordconv::grid::Edit;
//! use coordconv::{Point, SessionBuilder};
//!
//! fn main() -> coordconv::Result<()> {
//!     let mut session = SessionBuilder::new()
//!         .point(Point::try_new(7.5, -122.0842222)?)
//!         .build()?;
//!
//!     assert_eq!(session.display(Format::DD), "7.500000° N, 122.084222° W");
//!     assert_eq!(session.display(Format::DDM), "7° 30.0000' N, 122° 5.0533' W");
//!     assert_eq!(session.display(Format::DMS), "7° 30' 0'' N, 122° 5' 3.20'' W");
//!     assert_eq!(session.display(Format::UTM), "10N 601041 0829128");
//!     assert_eq!(session.display(Format::MGRS), "10N FP 01041 29128");
//!
//!     // Edits a field, the others follow
//!     session.edit_text(Format::DD, Axis::Y, "48.8566")?;
//!     session.edit_text(Format::DD, Axis::X, "2.3522")?;
//!     assert_eq!(session.display(Format::MGRS), "31U DQ 52482 11717");
//!
//!     // Moves to the neighbour zone, keeping the 100 km square column
//!     session.edit_grid(System::MGRS, Edit::Zone(32))?;
//!     assert_eq!(session.display(Format::MGRS), "32U KU 52482 11717");
//!
//!     // Invalid text is kept on its field with the error
//!     assert!(session.edit_text(Format::DMS, Axis::Y, "43 61 5").is_err());
//!
//!     Ok(())
//! }
//! ```
//!
//! Features:
//!
//! - Validation of typed text per format and axis, see [`validate::validate`]
//! - Grid edits (zone, band, square, easting and northing) with
//!   column-preserving 100 km square repair, see [`grid::GridCoordinate::apply_edit`]
//! - Norway and Svalbard UTM zone exceptions
//! - Projection behind the [`Projection`](projection::Projection) trait,
//!   with a bundled Transverse Mercator on the WGS84 ellipsoid, [`projection::Wgs84`]
//! - Structured logging by [`tracing`](https://crates.io/crates/tracing)
//! - Small dependency
//!   - It depends on [`serde`][serde] only if `serde` feature on
//!
//! Polar regions (UPS) are not supported, MGRS reports them by
//! [`ErrorKind::PolarUnsupported`].
//!
//! [serde]: https://crates.io/crates/serde
//!
//! # Serialization and Deserialization
//!
//! It supports (de)serialization by [`serde` crate](https://crates.io/crates/serde)
//! for [`Config`], [`Point`], [`Format`] and the grid kinds
//! only if the feature `serde` is enabled.
//!
//! ```
//! # #[cfg(feature = "serde")]
//! # fn main() -> serde_json::Result<()> {
//! use coordconv::format::Format;
//! use coordconv::Config;
//!
//! let config: Config = serde_json::from_str(
//!     r#"{"format":"MGRS","point":{"latitude":37.48391,"longitude":-122.2362}}"#
//! )?;
//! assert_eq!(config.format, Format::MGRS);
//! # Ok(())}
//! # #[cfg(not(feature = "serde"))]
//! # fn main() {}
//! ```

#[doc(inline)]
pub use builder::{Config, SessionBuilder};
#[doc(inline)]
pub use error::{Error, ErrorKind, Result};
#[doc(inline)]
pub use format::Format;
#[doc(inline)]
pub use point::Point;
#[doc(inline)]
pub use session::Session;

pub mod band;
pub mod builder;
pub mod dms;
pub mod error;
pub mod format;
pub mod geodetic;
pub mod grid;
mod internal;
pub mod point;
pub mod projection;
pub mod session;
pub mod square;
pub mod validate;
