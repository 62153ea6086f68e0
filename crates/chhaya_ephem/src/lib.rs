//! Ephemeris seam for the eclipse solver.
//!
//! The solver never computes positions itself. It asks an
//! [`EphemerisProvider`] for the apparent place of a [`Body`] as seen by an
//! [`Observer`], and learns physical constants (radii, orbital periods,
//! which planet a moon orbits) from the [`Body`] catalog.
//!
//! [`AnalyticEphemeris`] is a self-contained low-precision Sun/Moon
//! provider, good to a few arcseconds, suitable for the CLI and
//! end-to-end tests.

pub mod analytic;
pub mod body;
pub mod error;
pub mod observer;
pub mod provider;

pub use analytic::{AnalyticEphemeris, apparent_sidereal_time_rad};
pub use body::{AU_KM, Body};
pub use error::EphemerisError;
pub use observer::{GeoLocation, Observer};
pub use provider::{ApparentPosition, EphemerisProvider};
