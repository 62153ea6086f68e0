//! Low-precision nutation in longitude and obliquity.
//!
//! Four-term series from Meeus, "Astronomical Algorithms", Ch. 22
//! (accuracy 0.5″ in Δψ, 0.1″ in Δε). Both eclipse bodies receive the same
//! correction, so residual errors largely cancel in the shadow geometry.

/// Nutation angles in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nutation {
    /// Nutation in longitude Δψ.
    pub longitude_rad: f64,
    /// Nutation in obliquity Δε.
    pub obliquity_rad: f64,
}

/// Nutation at `t` Julian centuries of TT since J2000.0.
pub fn nutation(t: f64) -> Nutation {
    let omega = (125.04452 - 1934.136261 * t).to_radians();
    let l_sun = (280.4665 + 36_000.7698 * t).to_radians();
    let l_moon = (218.3165 + 481_267.8813 * t).to_radians();

    let dpsi_arcsec = -17.20 * omega.sin() - 1.32 * (2.0 * l_sun).sin()
        - 0.23 * (2.0 * l_moon).sin()
        + 0.21 * (2.0 * omega).sin();
    let deps_arcsec = 9.20 * omega.cos() + 0.57 * (2.0 * l_sun).cos()
        + 0.10 * (2.0 * l_moon).cos()
        - 0.09 * (2.0 * omega).cos();

    Nutation {
        longitude_rad: (dpsi_arcsec / 3600.0).to_radians(),
        obliquity_rad: (deps_arcsec / 3600.0).to_radians(),
    }
}
