//! Frame and spherical-astronomy helpers for eclipse geometry.
//!
//! Provides ecliptic → equatorial rotation with the obliquity of date,
//! a low-precision nutation model, and the two spherical primitives the
//! shadow geometry is built on: angular separation and position angle.

pub mod nutation;
pub mod obliquity;
pub mod rotation;
pub mod spherical;

pub use nutation::{Nutation, nutation};
pub use obliquity::mean_obliquity_rad;
pub use rotation::ecliptic_to_equatorial;
pub use spherical::{
    EquatorialCoords, angular_separation, cartesian_to_equatorial, equatorial_to_cartesian,
    position_angle,
};
