//! UTM zone topology.
use crate::band::Band;

/// Returns the UTM zone of a position.
///
/// This includes the Norway exception (32V widened west to 3°)
/// and the Svalbard exceptions (31X, 33X, 35X and 37X).
pub(crate) fn zone_of(latitude: f64, longitude: f64) -> u8 {
    let zone = (((longitude + 180.0) / 6.0).floor() as i64 + 1).clamp(1, 60) as u8;

    if (56.0..64.0).contains(&latitude) && (3.0..12.0).contains(&longitude) {
        return 32;
    }

    if (72.0..=84.0).contains(&latitude) && (0.0..42.0).contains(&longitude) {
        return match longitude {
            v if v < 9.0 => 31,
            v if v < 21.0 => 33,
            v if v < 33.0 => 35,
            _ => 37,
        };
    }

    zone
}

/// Returns the central meridian of `zone` in degree.
#[inline]
pub(crate) fn central_meridian(zone: u8) -> f64 {
    6.0 * zone as f64 - 183.0
}

/// Returns the longitude extent of `zone` in `band`, west and east in degree.
///
/// Returns [`None`] for the zones 32X, 34X and 36X, which do not exist.
pub(crate) fn longitude_range(zone: u8, band: Band) -> Option<(f64, f64)> {
    match (band, zone) {
        (Band::V, 31) => Some((0.0, 3.0)),
        (Band::V, 32) => Some((3.0, 12.0)),
        (Band::X, 31) => Some((0.0, 9.0)),
        (Band::X, 32 | 34 | 36) => None,
        (Band::X, 33) => Some((9.0, 21.0)),
        (Band::X, 35) => Some((21.0, 33.0)),
        (Band::X, 37) => Some((33.0, 42.0)),
        _ => {
            let west = 6.0 * zone as f64 - 186.0;
            Some((west, west + 6.0))
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_zone_of() {
        assert_eq!(zone_of(0.0, -180.0), 1);
        assert_eq!(zone_of(0.0, -174.1), 1);
        assert_eq!(zone_of(0.0, 0.0), 31);
        assert_eq!(zone_of(37.48, -122.23), 10);
        assert_eq!(zone_of(0.0, 179.9), 60);
        assert_eq!(zone_of(0.0, 180.0), 60);

        // Norway
        assert_eq!(zone_of(60.0, 4.0), 32);
        assert_eq!(zone_of(60.0, 2.9), 31);
        assert_eq!(zone_of(64.0, 4.0), 31);

        // Svalbard
        assert_eq!(zone_of(78.0, 8.9), 31);
        assert_eq!(zone_of(78.0, 9.0), 33);
        assert_eq!(zone_of(78.0, 20.0), 33);
        assert_eq!(zone_of(78.0, 21.0), 35);
        assert_eq!(zone_of(78.0, 33.0), 37);
        assert_eq!(zone_of(78.0, 42.0), 38);
        assert_eq!(zone_of(71.9, 16.0), 33);
        assert_eq!(zone_of(71.9, 10.0), 32);
    }

    #[test]
    fn test_central_meridian() {
        assert_eq!(central_meridian(1), -177.0);
        assert_eq!(central_meridian(31), 3.0);
        assert_eq!(central_meridian(60), 177.0);
    }

    #[test]
    fn test_longitude_range() {
        assert_eq!(longitude_range(10, Band::S), Some((-126.0, -120.0)));
        assert_eq!(longitude_range(31, Band::U), Some((0.0, 6.0)));
        assert_eq!(longitude_range(31, Band::V), Some((0.0, 3.0)));
        assert_eq!(longitude_range(32, Band::V), Some((3.0, 12.0)));
        assert_eq!(longitude_range(33, Band::X), Some((9.0, 21.0)));
        assert_eq!(longitude_range(34, Band::X), None);

        for zone in 1..=60 {
            let (west, east) = longitude_range(zone, Band::N).unwrap();
            assert_eq!(zone_of(0.0, west), zone);
            assert_eq!(zone_of(0.0, (west + east) / 2.0), zone);
        }
    }
}
