//! Mean obliquity of the ecliptic of date.
//!
//! Source: IAU 1980 expression (Meeus, "Astronomical Algorithms", Eq. 22.2).
//! Accurate to ~0.01″ over 1000 years around J2000, far beyond what the
//! eclipse geometry can resolve.

/// Mean obliquity of the ecliptic in radians.
///
/// `t` = Julian centuries of TT since J2000.0.
pub fn mean_obliquity_rad(t: f64) -> f64 {
    let arcsec = 84_381.448 - 46.8150 * t - 0.00059 * t * t + 0.001813 * t * t * t;
    (arcsec / 3600.0).to_radians()
}
