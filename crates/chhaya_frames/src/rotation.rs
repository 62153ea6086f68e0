//! Ecliptic → equatorial rotation about the equinox direction.

use crate::spherical::EquatorialCoords;

/// Rotate ecliptic longitude/latitude (radians) into right ascension and
/// declination, for the given obliquity (radians).
///
/// Right ascension is returned in [0, 2π).
pub fn ecliptic_to_equatorial(lon_rad: f64, lat_rad: f64, obliquity_rad: f64) -> (f64, f64) {
    let (sin_eps, cos_eps) = obliquity_rad.sin_cos();
    let (sin_lon, cos_lon) = lon_rad.sin_cos();
    let (sin_lat, cos_lat) = lat_rad.sin_cos();

    let ra = (sin_lon * cos_eps - lat_rad.tan() * sin_eps).atan2(cos_lon);
    let dec = (sin_lat * cos_eps + cos_lat * sin_eps * sin_lon).clamp(-1.0, 1.0).asin();
    (ra.rem_euclid(std::f64::consts::TAU), dec)
}

impl EquatorialCoords {
    /// Equatorial coordinates of an ecliptic direction at the given distance.
    pub fn from_ecliptic(lon_rad: f64, lat_rad: f64, distance_km: f64, obliquity_rad: f64) -> Self {
        let (ra_rad, dec_rad) = ecliptic_to_equatorial(lon_rad, lat_rad, obliquity_rad);
        Self {
            ra_rad,
            dec_rad,
            distance_km,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn meeus_example_13a() {
        // Pollux: λ = 113.215630°, β = 6.684170°, ε = 23.4392911°
        // → α = 116.328942°, δ = 28.026183°
        let (ra, dec) = ecliptic_to_equatorial(
            113.215_630_f64.to_radians(),
            6.684_170_f64.to_radians(),
            23.439_291_1_f64.to_radians(),
        );
        assert_abs_diff_eq!(ra.to_degrees(), 116.328_942, epsilon = 1e-5);
        assert_abs_diff_eq!(dec.to_degrees(), 28.026_183, epsilon = 1e-5);
    }

    #[test]
    fn equinox_maps_to_origin() {
        let (ra, dec) = ecliptic_to_equatorial(0.0, 0.0, 0.409);
        assert_abs_diff_eq!(ra, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(dec, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn solstice_declination_equals_obliquity() {
        let eps = 0.409_092_8;
        let (ra, dec) = ecliptic_to_equatorial(std::f64::consts::FRAC_PI_2, 0.0, eps);
        assert_abs_diff_eq!(ra, std::f64::consts::FRAC_PI_2, epsilon = 1e-12);
        assert_abs_diff_eq!(dec, eps, epsilon = 1e-12);
    }
}
