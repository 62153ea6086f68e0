//! Equatorial spherical coordinates and the two primitives eclipse
//! geometry needs: angular separation and position angle.

use std::f64::consts::TAU;

/// Right ascension, declination and distance of a point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquatorialCoords {
    /// Right ascension in radians, range [0, 2π).
    pub ra_rad: f64,
    /// Declination in radians, range [-π/2, π/2].
    pub dec_rad: f64,
    /// Distance from origin in km.
    pub distance_km: f64,
}

/// Convert Cartesian equatorial `[x, y, z]` (km) to spherical coordinates.
pub fn cartesian_to_equatorial(xyz: &[f64; 3]) -> EquatorialCoords {
    let [x, y, z] = *xyz;
    let r = (x * x + y * y + z * z).sqrt();

    if r == 0.0 {
        return EquatorialCoords {
            ra_rad: 0.0,
            dec_rad: 0.0,
            distance_km: 0.0,
        };
    }

    EquatorialCoords {
        ra_rad: y.atan2(x).rem_euclid(TAU),
        dec_rad: (z / r).asin(),
        distance_km: r,
    }
}

/// Convert spherical coordinates back to Cartesian `[x, y, z]` (km).
pub fn equatorial_to_cartesian(s: &EquatorialCoords) -> [f64; 3] {
    let (sin_ra, cos_ra) = s.ra_rad.sin_cos();
    let (sin_dec, cos_dec) = s.dec_rad.sin_cos();
    [
        s.distance_km * cos_dec * cos_ra,
        s.distance_km * cos_dec * sin_ra,
        s.distance_km * sin_dec,
    ]
}

/// Great-circle distance between two directions, in radians [0, π].
///
/// Vincenty form: well conditioned at both tiny and near-antipodal
/// separations, which matters because contacts are decided by differences
/// of a few arcseconds.
pub fn angular_separation(ra1: f64, dec1: f64, ra2: f64, dec2: f64) -> f64 {
    let d_ra = ra2 - ra1;
    let (sin_d1, cos_d1) = dec1.sin_cos();
    let (sin_d2, cos_d2) = dec2.sin_cos();
    let (sin_dra, cos_dra) = d_ra.sin_cos();

    let a = cos_d2 * sin_dra;
    let b = cos_d1 * sin_d2 - sin_d1 * cos_d2 * cos_dra;
    let num = (a * a + b * b).sqrt();
    let den = sin_d1 * sin_d2 + cos_d1 * cos_d2 * cos_dra;
    num.atan2(den)
}

/// Position angle of point 2 as seen from point 1, measured from north
/// through east, in radians [0, 2π).
pub fn position_angle(ra1: f64, dec1: f64, ra2: f64, dec2: f64) -> f64 {
    let d_ra = ra2 - ra1;
    let y = d_ra.sin() * dec2.cos();
    let x = dec1.cos() * dec2.sin() - dec1.sin() * dec2.cos() * d_ra.cos();
    y.atan2(x).rem_euclid(TAU)
}
