//! Numeric helpers shared by the angle and projection code.

/// Returns `a * b + c`, fused when the `fma` feature is on.
#[inline]
pub(crate) fn fma(a: f64, b: f64, c: f64) -> f64 {
    if cfg!(feature = "fma") {
        a.mul_add(b, c)
    } else {
        a * b + c
    }
}

/// Returns `Σ coef[j] * term(2(j + 1))` for a Krüger series.
#[inline]
pub(crate) fn series<const N: usize>(coef: &[f64; N], term: impl Fn(f64) -> f64) -> f64 {
    coef.iter()
        .enumerate()
        .fold(0.0, |acc, (j, c)| fma(*c, term(2.0 * (j + 1) as f64), acc))
}
