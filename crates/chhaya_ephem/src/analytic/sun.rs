//! Apparent geocentric Sun, Meeus ch. 25 low-accuracy theory (~0.01°).

use chhaya_frames::{EquatorialCoords, Nutation};

use crate::body::AU_KM;

/// Annual aberration constant in arcseconds.
const ABERRATION_ARCSEC: f64 = 20.4898;

/// Apparent ecliptic longitude (radians) and distance (km) of the Sun.
pub(crate) fn sun_ecliptic(t: f64, nut: &Nutation) -> (f64, f64) {
    let l0 = 280.46646 + 36_000.76983 * t + 0.000_303_2 * t * t;
    let m = (357.52911 + 35_999.05029 * t - 0.000_153_7 * t * t).to_radians();
    let e = 0.016_708_634 - 0.000_042_037 * t - 0.000_000_126_7 * t * t;

    let c = (1.914_602 - 0.004_817 * t - 0.000_014 * t * t) * m.sin()
        + (0.019_993 - 0.000_101 * t) * (2.0 * m).sin()
        + 0.000_289 * (3.0 * m).sin();

    let true_lon = l0 + c;
    let nu = m + c.to_radians();
    let r_au = 1.000_001_018 * (1.0 - e * e) / (1.0 + e * nu.cos());

    let lon = true_lon.to_radians() + nut.longitude_rad
        - (ABERRATION_ARCSEC / 3600.0 / r_au).to_radians();
    (lon.rem_euclid(std::f64::consts::TAU), r_au * AU_KM)
}

/// Apparent geocentric equatorial place of the Sun.
pub(crate) fn sun_apparent(t: f64, nut: &Nutation, true_obliquity_rad: f64) -> EquatorialCoords {
    let (lon, dist) = sun_ecliptic(t, nut);
    EquatorialCoords::from_ecliptic(lon, 0.0, dist, true_obliquity_rad)
}
