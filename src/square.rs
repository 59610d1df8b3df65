//! Provides the MGRS 100km grid square catalog.
//!
//! A grid square ID is a column letter followed by a row letter.
//! Column letters cycle through `A`–`H`, `J`–`R` and `S`–`Z` by zone mod 3,
//! row letters cycle through `A`–`V` (without `I` and `O`) every 2,000 \[km\],
//! offset by five letters in even zones.
//!
//! Not every square of the cycle exists in every band: zones narrow toward
//! the poles and each band covers about 900 \[km\] of northing.
//! The tables below hold, per band, the letters that occur.
//!
//! # Example
//!
//! ```
//! # use coordconv::band::Band;
//! # use coordconv::square;
//! #
//! let ids = square::valid_ids(31, Band::U);
//! assert_eq!(ids.len(), 6 * 10);
//! assert_eq!(ids.first().map(String::as_str), Some("BP"));
//! assert!(ids.contains(&"DQ".to_string()));
//!
//! // An unknown band letter gives no IDs
//! assert!(square::valid_grid_ids(31, 'I').is_empty());
//! ```
use crate::band::Band;

/// Row letters in northing order.
pub const ROW_LETTERS: &str = "ABCDEFGHJKLMNPQRSTUV";

/// Column letters of the full cycle, by `(zone - 1) mod 3`.
pub const COLUMN_LETTERS: [&str; 3] = ["ABCDEFGH", "JKLMNPQR", "STUVWXYZ"];

/// The northing \[m\] of one full row cycle.
const ROW_CYCLE: f64 = 2_000_000.0;

/// Valid column letters, by band and `(zone - 1) mod 3`.
///
/// `V` and `X` include the squares of the widened zones 32V and 31X–37X.
const COLUMNS_BY_ZONE_MOD3: [[&str; 3]; 20] = [
    ["CDEF", "LMNP", "UVWX"],       // C
    ["CDEF", "LMNP", "UVWX"],       // D
    ["CDEF", "LMNP", "UVWX"],       // E
    ["BCDEFG", "KLMNPQ", "TUVWXY"], // F
    ["BCDEFG", "KLMNPQ", "TUVWXY"], // G
    ["BCDEFG", "KLMNPQ", "TUVWXY"], // H
    ["ABCDEFGH", "JKLMNPQR", "STUVWXYZ"], // J
    ["ABCDEFGH", "JKLMNPQR", "STUVWXYZ"], // K
    ["ABCDEFGH", "JKLMNPQR", "STUVWXYZ"], // L
    ["ABCDEFGH", "JKLMNPQR", "STUVWXYZ"], // M
    ["ABCDEFGH", "JKLMNPQR", "STUVWXYZ"], // N
    ["ABCDEFGH", "JKLMNPQR", "STUVWXYZ"], // P
    ["ABCDEFGH", "JKLMNPQR", "STUVWXYZ"], // Q
    ["ABCDEFGH", "JKLMNPQR", "STUVWXYZ"], // R
    ["BCDEFG", "KLMNPQ", "TUVWXY"], // S
    ["BCDEFG", "KLMNPQ", "TUVWXY"], // T
    ["BCDEFG", "KLMNPQ", "TUVWXY"], // U
    ["CDEF", "JKLMNP", "UVWX"],     // V
    ["CDEF", "LMNP", "UVWX"],       // W
    ["BCDEFG", "KLMNPQ", "TUVWXY"], // X
];

/// Valid row letters from south to north, by band and zone parity (odd, even).
const ROWS_BY_ZONE_PARITY: [[&str; 2]; 20] = [
    ["MNPQRSTUVA", "STUVABCDEF"],           // C
    ["ABCDEFGHJK", "FGHJKLMNPQ"],           // D
    ["JKLMNPQRST", "PQRSTUVABC"],           // E
    ["TUVABCDEFG", "CDEFGHJKLM"],           // F
    ["GHJKLMNPQR", "MNPQRSTUVA"],           // G
    ["RSTUVABCDE", "ABCDEFGHJK"],           // H
    ["EFGHJKLMNP", "KLMNPQRSTU"],           // J
    ["PQRSTUVABC", "UVABCDEFGH"],           // K
    ["CDEFGHJKLM", "HJKLMNPQRS"],           // L
    ["MNPQRSTUV", "STUVABCDE"],             // M
    ["ABCDEFGHJ", "FGHJKLMNP"],             // N
    ["JKLMNPQRST", "PQRSTUVABC"],           // P
    ["TUVABCDEFG", "CDEFGHJKLM"],           // Q
    ["GHJKLMNPQR", "MNPQRSTUVA"],           // R
    ["RSTUVABCDE", "ABCDEFGHJK"],           // S
    ["EFGHJKLMNP", "KLMNPQRSTU"],           // T
    ["PQRSTUVABC", "UVABCDEFGH"],           // U
    ["CDEFGHJKLM", "HJKLMNPQRS"],           // V
    ["LMNPQRSTUV", "RSTUVABCDE"],           // W
    ["VABCDEFGHJKLMNP", "EFGHJKLMNPQRSTU"], // X
];

/// The parity of a UTM zone number.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Parity {
    Odd,
    Even,
}

impl Parity {
    /// Returns the parity of `zone`.
    #[inline]
    #[must_use]
    pub const fn of(zone: u8) -> Self {
        if zone % 2 == 1 {
            Self::Odd
        } else {
            Self::Even
        }
    }
}

#[inline]
const fn is_zone(zone: u8) -> bool {
    1 <= zone && zone <= 60
}

/// Returns the valid column letters of `zone` in `band`, west to east.
///
/// Returns an empty [`str`] when `zone` is not in 1 to 60.
#[must_use]
pub fn valid_columns(zone: u8, band: Band) -> &'static str {
    if !is_zone(zone) {
        return "";
    }
    COLUMNS_BY_ZONE_MOD3[band.index()][(zone as usize - 1) % 3]
}

/// Returns the valid row letters of `zone` in `band`, south to north.
///
/// Returns an empty [`str`] when `zone` is not in 1 to 60.
#[must_use]
pub fn valid_rows(zone: u8, band: Band) -> &'static str {
    if !is_zone(zone) {
        return "";
    }
    let parity = match Parity::of(zone) {
        Parity::Odd => 0,
        Parity::Even => 1,
    };
    ROWS_BY_ZONE_PARITY[band.index()][parity]
}

/// Returns all valid grid square IDs of `zone` in `band`.
///
/// The IDs are ordered column-major, west to east then south to north.
#[must_use]
pub fn valid_ids(zone: u8, band: Band) -> Vec<String> {
    let rows = valid_rows(zone, band);
    valid_columns(zone, band)
        .chars()
        .flat_map(|col| rows.chars().map(move |row| format!("{col}{row}")))
        .collect()
}

/// Returns all valid grid square IDs of `zone` in the band lettered `band`.
///
/// Returns an empty [`Vec`] when `band` is not a band letter,
/// which callers should take as an unsupported or polar input.
#[must_use]
pub fn valid_grid_ids(zone: u8, band: char) -> Vec<String> {
    Band::from_letter(band)
        .map(|band| valid_ids(zone, band))
        .unwrap_or_default()
}

/// Returns `true` if `id` is a valid grid square ID of `zone` in `band`.
#[must_use]
pub fn is_valid(id: &str, zone: u8, band: Band) -> bool {
    let mut chars = id.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some(col), Some(row), None) => {
            valid_columns(zone, band).contains(col) && valid_rows(zone, band).contains(row)
        }
        _ => false,
    }
}

/// Returns the grid square ID that replaces `id` in `zone` and `band`.
///
/// This is `id` itself if still valid, else the first valid ID with the same
/// column letter, else the first valid ID, else an empty [`String`].
///
/// # Example
///
/// ```
/// # use coordconv::band::Band;
/// # use coordconv::square::remap;
/// #
/// // still valid
/// assert_eq!(remap("DQ", 31, Band::U), "DQ");
/// // column kept, row not valid in an even zone
/// assert_eq!(remap("DQ", 34, Band::U), "DU");
/// // column D does not exist in zone 32
/// assert_eq!(remap("DQ", 32, Band::U), "KU");
/// ```
#[must_use]
pub fn remap(id: &str, zone: u8, band: Band) -> String {
    let ids = valid_ids(zone, band);
    if ids.iter().any(|v| v == id) {
        return id.to_string();
    }

    let column = id.chars().next();
    ids.iter()
        .find(|v| v.chars().next() == column)
        .or(ids.first())
        .cloned()
        .unwrap_or_default()
}

/// Returns the column letter of `easting` \[m\] in `zone`.
pub(crate) fn column_letter(zone: u8, easting: f64) -> Option<char> {
    if !is_zone(zone) || !easting.is_finite() {
        return None;
    }
    let i = (easting / 100_000.0).floor() as i64;
    if !(1..=8).contains(&i) {
        return None;
    }
    COLUMN_LETTERS[(zone as usize - 1) % 3]
        .chars()
        .nth(i as usize - 1)
}

/// Returns the row letter of `northing` \[m\] in `zone`.
pub(crate) fn row_letter(zone: u8, northing: f64) -> Option<char> {
    if !is_zone(zone) || !northing.is_finite() || northing < 0.0 {
        return None;
    }
    let mut i = (northing / 100_000.0).floor() as usize % 20;
    if Parity::of(zone) == Parity::Even {
        i = (i + 5) % 20;
    }
    ROW_LETTERS.chars().nth(i)
}

/// Returns the easting \[m\] of the west edge of column `letter` in `zone`.
pub(crate) fn column_easting(zone: u8, letter: char) -> Option<f64> {
    if !is_zone(zone) {
        return None;
    }
    COLUMN_LETTERS[(zone as usize - 1) % 3]
        .chars()
        .position(|c| c == letter)
        .map(|i| (i + 1) as f64 * 100_000.0)
}

/// Returns the northing \[m\] of the south edge of row `letter` in `zone`,
/// modulo 2,000 \[km\].
pub(crate) fn row_northing(zone: u8, letter: char) -> Option<f64> {
    if !is_zone(zone) {
        return None;
    }
    let i = ROW_LETTERS.chars().position(|c| c == letter)?;
    let i = match Parity::of(zone) {
        Parity::Odd => i,
        Parity::Even => (i + 15) % 20,
    };
    Some((i as f64 * 100_000.0) % ROW_CYCLE)
}
