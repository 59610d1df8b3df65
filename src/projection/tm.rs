//! Transverse Mercator on the WGS84 ellipsoid by Krüger series.
//!
//! Results are in metres from the central meridian and the Equator,
//! already scaled by [`K0`], without false easting or northing.
use std::sync::LazyLock;

use crate::internal::{fma, series};

/// Semi-major axis of WGS84 \[m\].
pub(crate) const A: f64 = 6_378_137.0;

/// Flattening of WGS84.
pub(crate) const F: f64 = 1.0 / 298.257_223_563;

/// Scale factor on the central meridian.
pub(crate) const K0: f64 = 0.9996;

struct Krueger {
    /// `k0` times the rectifying radius
    radius: f64,
    /// first eccentricity
    e: f64,
    alpha: [f64; 3],
    beta: [f64; 3],
    delta: [f64; 3],
}

static KRUEGER: LazyLock<Krueger> = LazyLock::new(|| {
    let n = F / (2.0 - F);
    let (n2, n3) = (n * n, n * n * n);

    Krueger {
        radius: K0 * A / (1.0 + n) * (1.0 + n2 / 4.0 + n2 * n2 / 64.0),
        e: 2.0 * n.sqrt() / (1.0 + n),
        alpha: [
            n / 2.0 - 2.0 * n2 / 3.0 + 5.0 * n3 / 16.0,
            13.0 * n2 / 48.0 - 3.0 * n3 / 5.0,
            61.0 * n3 / 240.0,
        ],
        beta: [
            n / 2.0 - 2.0 * n2 / 3.0 + 37.0 * n3 / 96.0,
            n2 / 48.0 + n3 / 15.0,
            17.0 * n3 / 480.0,
        ],
        delta: [
            2.0 * n - 2.0 * n2 / 3.0 - 2.0 * n3,
            7.0 * n2 / 3.0 - 8.0 * n3 / 5.0,
            56.0 * n3 / 15.0,
        ],
    }
});

/// Returns `(x, y)` \[m\] of `latitude` and the longitude difference `dlon`
/// from the central meridian, both in degree.
pub(crate) fn forward(latitude: f64, dlon: f64) -> (f64, f64) {
    let k = &*KRUEGER;
    let (phi, lambda) = (latitude.to_radians(), dlon.to_radians());

    let s = phi.sin();
    let t = (s.atanh() - k.e * (k.e * s).atanh()).sinh();

    let xi = t.atan2(lambda.cos());
    let eta = (lambda.sin() / fma(t, t, 1.0).sqrt()).atanh();

    let x = eta + series(&k.alpha, |j| (j * xi).cos() * (j * eta).sinh());
    let y = xi + series(&k.alpha, |j| (j * xi).sin() * (j * eta).cosh());

    (k.radius * x, k.radius * y)
}

/// Returns `(latitude, dlon)` in degree of `(x, y)` \[m\],
/// the inverse of [`forward`].
pub(crate) fn inverse(x: f64, y: f64) -> (f64, f64) {
    let k = &*KRUEGER;
    let (xi, eta) = (y / k.radius, x / k.radius);

    let xi_ = xi - series(&k.beta, |j| (j * xi).sin() * (j * eta).cosh());
    let eta_ = eta - series(&k.beta, |j| (j * xi).cos() * (j * eta).sinh());

    let chi = (xi_.sin() / eta_.cosh()).asin();
    let phi = chi + series(&k.delta, |j| (j * chi).sin());
    let lambda = eta_.sinh().atan2(xi_.cos());

    (phi.to_degrees(), lambda.to_degrees())
}
