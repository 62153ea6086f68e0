//! Observer context for apparent-position queries.

use crate::body::Body;

/// Geodetic position on the central body's surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoLocation {
    /// Geodetic latitude in degrees, north positive.
    pub latitude_deg: f64,
    /// Longitude in degrees, east positive.
    pub longitude_deg: f64,
    /// Height above the reference ellipsoid in metres.
    pub height_m: f64,
}

impl GeoLocation {
    pub fn new(latitude_deg: f64, longitude_deg: f64, height_m: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
            height_m,
        }
    }

    /// Validate ranges.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.latitude_deg.is_finite() || !(-90.0..=90.0).contains(&self.latitude_deg) {
            return Err("latitude_deg must be within [-90, 90]");
        }
        if !self.longitude_deg.is_finite() || !(-180.0..=360.0).contains(&self.longitude_deg) {
            return Err("longitude_deg must be within [-180, 360]");
        }
        if !self.height_m.is_finite() {
            return Err("height_m must be finite");
        }
        Ok(())
    }

    /// Altitude above the horizon (radians) of a direction, given the
    /// local sidereal time.
    pub fn altitude_rad(&self, ra_rad: f64, dec_rad: f64, local_sidereal_rad: f64) -> f64 {
        let phi = self.latitude_deg.to_radians();
        let hour_angle = local_sidereal_rad - ra_rad;
        (phi.sin() * dec_rad.sin() + phi.cos() * dec_rad.cos() * hour_angle.cos())
            .clamp(-1.0, 1.0)
            .asin()
    }
}

/// Where apparent positions are measured from.
///
/// Always tied to a central body; a `location` makes it topocentric,
/// otherwise positions are relative to the body's center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observer {
    pub central_body: Body,
    pub location: Option<GeoLocation>,
}

impl Observer {
    /// Center of the Earth.
    pub const fn geocentric() -> Self {
        Self::body_center(Body::Earth)
    }

    /// A point on the Earth's surface.
    pub const fn topocentric(location: GeoLocation) -> Self {
        Self {
            central_body: Body::Earth,
            location: Some(location),
        }
    }

    /// Center of an arbitrary body (e.g. Jupiter for Galilean eclipses).
    pub const fn body_center(body: Body) -> Self {
        Self {
            central_body: body,
            location: None,
        }
    }

    pub const fn is_topocentric(&self) -> bool {
        self.location.is_some()
    }

    /// The same observer moved to its central body's center.
    pub const fn centered(&self) -> Self {
        Self::body_center(self.central_body)
    }
}
