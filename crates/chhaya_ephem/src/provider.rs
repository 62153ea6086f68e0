//! The consumed ephemeris interface.

use crate::body::Body;
use crate::error::EphemerisError;
use crate::observer::Observer;

/// Apparent place of a body for one observer at one instant.
///
/// Angles in radians, equatorial of date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApparentPosition {
    pub ra_rad: f64,
    pub dec_rad: f64,
    /// Apparent angular radius (equatorial).
    pub angular_radius_rad: f64,
    pub distance_km: f64,
    /// Position angle of the body's rotation axis, north through east.
    pub axis_position_angle_rad: f64,
}

/// Source of apparent positions.
///
/// Implementations must be deterministic for identical inputs and safe to
/// share across threads: the solver keeps no state of its own, so
/// concurrent queries only ever contend on the provider.
pub trait EphemerisProvider: Send + Sync {
    /// Apparent position of `target` at `jd_tdb` as seen by `observer`.
    fn apparent_position(
        &self,
        target: Body,
        jd_tdb: f64,
        observer: &Observer,
    ) -> Result<ApparentPosition, EphemerisError>;
}

impl<P: EphemerisProvider + ?Sized> EphemerisProvider for &P {
    fn apparent_position(
        &self,
        target: Body,
        jd_tdb: f64,
        observer: &Observer,
    ) -> Result<ApparentPosition, EphemerisError> {
        (**self).apparent_position(target, jd_tdb, observer)
    }
}

impl<P: EphemerisProvider + ?Sized> EphemerisProvider for Box<P> {
    fn apparent_position(
        &self,
        target: Body,
        jd_tdb: f64,
        observer: &Observer,
    ) -> Result<ApparentPosition, EphemerisError> {
        (**self).apparent_position(target, jd_tdb, observer)
    }
}
