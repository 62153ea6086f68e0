use crate::body::Body;

/// Failures reported by an [`EphemerisProvider`](crate::EphemerisProvider).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum EphemerisError {
    /// The provider has no model for this body.
    #[error("body not supported by this ephemeris: {0:?}")]
    UnsupportedBody(Body),
    /// The provider cannot evaluate positions for this kind of observer.
    #[error("observer not supported by this ephemeris: {0}")]
    UnsupportedObserver(&'static str),
    /// Epoch is not a finite Julian Date.
    #[error("invalid epoch: JD {0}")]
    InvalidEpoch(f64),
    /// Provider-specific failure.
    #[error("ephemeris failure: {0}")]
    Internal(String),
}
