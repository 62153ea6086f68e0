//! Greenwich Mean Sidereal Time.
//!
//! Needed to place a topocentric observer in the equatorial frame and to
//! compute local hour angles for visibility checks.
//!
//! Source: IERS Conventions 2010, Eq. 5.15 (ERA) plus the Capitaine et al.
//! 2003 GMST polynomial.

use std::f64::consts::{PI, TAU};

use crate::julian::{DAYS_PER_JULIAN_CENTURY, J2000_JD};

/// Arcseconds to radians.
const ARCSEC_TO_RAD: f64 = PI / (180.0 * 3600.0);

fn earth_rotation_angle_rad(jd_ut1: f64) -> f64 {
    let du = jd_ut1 - J2000_JD;
    (TAU * (0.779_057_273_264_0 + 1.002_737_811_911_354_6 * du)).rem_euclid(TAU)
}

/// Greenwich Mean Sidereal Time at a UT Julian Date, in radians [0, 2π).
pub fn gmst_rad(jd_ut1: f64) -> f64 {
    let t = (jd_ut1 - J2000_JD) / DAYS_PER_JULIAN_CENTURY;
    let poly_arcsec = 0.014506 + 4612.156534 * t + 1.3915817 * t * t - 0.00000044 * t.powi(3)
        - 0.000029956 * t.powi(4)
        - 0.0000000368 * t.powi(5);
    (earth_rotation_angle_rad(jd_ut1) + poly_arcsec * ARCSEC_TO_RAD).rem_euclid(TAU)
}

/// Local sidereal time from a Greenwich sidereal time and east longitude.
pub fn local_sidereal_time_rad(gst_rad: f64, longitude_east_rad: f64) -> f64 {
    (gst_rad + longitude_east_rad).rem_euclid(TAU)
}
