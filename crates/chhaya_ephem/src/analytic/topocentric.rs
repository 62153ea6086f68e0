//! Geocentric → topocentric parallax correction.

use chhaya_frames::{EquatorialCoords, cartesian_to_equatorial, equatorial_to_cartesian};

use crate::body::Body;
use crate::observer::GeoLocation;

/// Observer position in the equatorial frame of date, km.
///
/// `last_rad` is the local apparent sidereal time, i.e. the right ascension
/// of the observer's meridian.
pub(crate) fn observer_position_km(loc: &GeoLocation, last_rad: f64) -> [f64; 3] {
    let a = Body::Earth.equatorial_radius_km();
    let b_over_a = Body::Earth.polar_radius_km() / a;

    let phi = loc.latitude_deg.to_radians();
    let u = (b_over_a * phi.tan()).atan();
    let h = loc.height_m / 1000.0 / a;

    let rho_sin = b_over_a * u.sin() + h * phi.sin();
    let rho_cos = u.cos() + h * phi.cos();

    [
        a * rho_cos * last_rad.cos(),
        a * rho_cos * last_rad.sin(),
        a * rho_sin,
    ]
}

/// Shift a geocentric place to the observer's location.
pub(crate) fn topocentric(
    geo: &EquatorialCoords,
    loc: &GeoLocation,
    last_rad: f64,
) -> EquatorialCoords {
    let body = equatorial_to_cartesian(geo);
    let obs = observer_position_km(loc, last_rad);
    cartesian_to_equatorial(&[body[0] - obs[0], body[1] - obs[1], body[2] - obs[2]])
}
