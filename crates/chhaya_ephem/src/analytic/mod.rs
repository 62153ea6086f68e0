//! Low-precision analytic Sun/Moon ephemeris for Earth observers.
//!
//! Sun after Meeus ch. 25, Moon after Meeus ch. 47, both apparent places of
//! date (nutation and aberration applied), with optional topocentric
//! parallax. Contact times come out within a minute or so of published
//! circumstances, which is enough for the CLI and the end-to-end tests.
//! High-accuracy work should plug a JPL-kernel-backed provider into the
//! same trait.

mod moon;
mod sun;
mod topocentric;

use std::f64::consts::{FRAC_PI_2, PI};

use chhaya_frames::{EquatorialCoords, mean_obliquity_rad, nutation, position_angle};
use chhaya_time::{gmst_rad, jd_to_centuries, local_sidereal_time_rad, tt_to_ut_jd};

use crate::body::Body;
use crate::error::EphemerisError;
use crate::observer::Observer;
use crate::provider::{ApparentPosition, EphemerisProvider};

/// Analytic Sun and Moon for geocentric and topocentric Earth observers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnalyticEphemeris;

impl AnalyticEphemeris {
    pub const fn new() -> Self {
        Self
    }
}

/// Greenwich apparent sidereal time (radians) at a TDB instant.
pub fn apparent_sidereal_time_rad(jd_tdb: f64) -> f64 {
    let t = jd_to_centuries(jd_tdb);
    let nut = nutation(t);
    let eps = mean_obliquity_rad(t) + nut.obliquity_rad;
    local_sidereal_time_rad(gmst_rad(tt_to_ut_jd(jd_tdb)), nut.longitude_rad * eps.cos())
}

impl EphemerisProvider for AnalyticEphemeris {
    fn apparent_position(
        &self,
        target: Body,
        jd_tdb: f64,
        observer: &Observer,
    ) -> Result<ApparentPosition, EphemerisError> {
        if !jd_tdb.is_finite() {
            return Err(EphemerisError::InvalidEpoch(jd_tdb));
        }
        if observer.central_body != Body::Earth {
            return Err(EphemerisError::UnsupportedObserver(
                "analytic ephemeris only models Earth observers",
            ));
        }

        let t = jd_to_centuries(jd_tdb);
        let nut = nutation(t);
        let eps = mean_obliquity_rad(t) + nut.obliquity_rad;

        let geocentric = match target {
            Body::Sun => sun::sun_apparent(t, &nut, eps),
            Body::Moon => moon::moon_apparent(t, &nut, eps),
            other => return Err(EphemerisError::UnsupportedBody(other)),
        };

        let place: EquatorialCoords = match &observer.location {
            Some(loc) => {
                loc.validate().map_err(EphemerisError::UnsupportedObserver)?;
                let local_sidereal = local_sidereal_time_rad(
                    apparent_sidereal_time_rad(jd_tdb),
                    loc.longitude_deg.to_radians(),
                );
                topocentric::topocentric(&geocentric, loc, local_sidereal)
            }
            None => geocentric,
        };

        let angular_radius_rad = (target.equatorial_radius_km() / place.distance_km)
            .clamp(-1.0, 1.0)
            .asin();
        // Axis taken perpendicular to the ecliptic.
        let axis_position_angle_rad = position_angle(
            place.ra_rad,
            place.dec_rad,
            1.5 * PI,
            FRAC_PI_2 - eps,
        );

        Ok(ApparentPosition {
            ra_rad: place.ra_rad,
            dec_rad: place.dec_rad,
            angular_radius_rad,
            distance_km: place.distance_km,
            axis_position_angle_rad,
        })
    }
}
