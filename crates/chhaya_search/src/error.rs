//! Error type for eclipse searches.

use chhaya_ephem::{Body, EphemerisError};

/// Errors from eclipse circumstance searches.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum SearchError {
    /// The target is neither the Moon nor another natural satellite.
    #[error("{0:?} is not a natural satellite and cannot be eclipsed")]
    NotEclipsable(Body),
    /// The target does not orbit the observer's central body.
    #[error("{target:?} orbits {orbits:?}, but the observer is on {observer:?}")]
    CentralBodyMismatch {
        target: Body,
        orbits: Body,
        observer: Body,
    },
    /// Invalid configuration parameter.
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),
    /// Invalid query parameter.
    #[error("invalid query: {0}")]
    InvalidQuery(&'static str),
    /// A pass ran past its iteration or time-span cap without completing.
    #[error("search exceeded its bound after {iterations} iterations spanning {span_days:.3} days")]
    SearchExceededBound { iterations: usize, span_days: f64 },
    /// The outer shadow zone was left without any eclipse state being observed.
    #[error("search completed without observing a shadow contact")]
    NoContact,
    /// Error from the ephemeris provider.
    #[error("ephemeris error: {0}")]
    Ephemeris(#[from] EphemerisError),
}
