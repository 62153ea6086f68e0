//! Eclipse query input.

use chhaya_ephem::{Body, Observer};

use crate::config::DEFAULT_SATELLITE_ACCURACY_SECONDS;
use crate::error::SearchError;

/// Which kind of eclipse to search for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EclipseKind {
    /// The target passes in front of the Sun as seen by the observer.
    Solar,
    /// The target passes through its central body's shadow.
    Lunar,
}

/// Immutable search request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EclipseQuery {
    /// Search start, JD TDB.
    pub jd_tdb: f64,
    pub observer: Observer,
    /// Eclipsed body (lunar) or occulting body (solar).
    pub target: Body,
    pub kind: EclipseKind,
    /// Contact accuracy for non-Moon satellites, seconds. Ignored for the Moon.
    pub accuracy_seconds: Option<f64>,
}

impl EclipseQuery {
    /// Next lunar eclipse after `jd_tdb`.
    pub fn lunar(jd_tdb: f64) -> Self {
        Self {
            jd_tdb,
            observer: Observer::geocentric(),
            target: Body::Moon,
            kind: EclipseKind::Lunar,
            accuracy_seconds: None,
        }
    }

    /// Next solar eclipse after `jd_tdb` for an Earth observer.
    pub fn solar(jd_tdb: f64, observer: Observer) -> Self {
        Self {
            jd_tdb,
            observer,
            target: Body::Moon,
            kind: EclipseKind::Solar,
            accuracy_seconds: None,
        }
    }

    /// Next passage of a natural satellite through its planet's shadow.
    ///
    /// A target without a central body yields an observer on itself, which
    /// the solver then rejects as not eclipsable.
    pub fn satellite(target: Body, jd_tdb: f64, accuracy_seconds: Option<f64>) -> Self {
        Self {
            jd_tdb,
            observer: Observer::body_center(target.central_body().unwrap_or(target)),
            target,
            kind: EclipseKind::Lunar,
            accuracy_seconds,
        }
    }

    /// Check the request and return the body casting the shadow.
    pub fn validate(&self) -> Result<Body, SearchError> {
        if !self.jd_tdb.is_finite() {
            return Err(SearchError::InvalidQuery("jd_tdb must be finite"));
        }
        if self
            .accuracy_seconds
            .is_some_and(|acc| !acc.is_finite() || acc <= 0.0)
        {
            return Err(SearchError::InvalidQuery(
                "accuracy_seconds must be finite and positive",
            ));
        }
        let Some(central) = self.target.central_body() else {
            return Err(SearchError::NotEclipsable(self.target));
        };
        if central != self.observer.central_body {
            return Err(SearchError::CentralBodyMismatch {
                target: self.target,
                orbits: central,
                observer: self.observer.central_body,
            });
        }
        Ok(central)
    }

    /// Fine base step in seconds: the configured one for the Moon, the
    /// accuracy parameter for other satellites.
    pub(crate) fn base_step_seconds(&self, moon_base_step_seconds: f64) -> f64 {
        if self.target == Body::Moon {
            moon_base_step_seconds
        } else {
            self.accuracy_seconds
                .unwrap_or(DEFAULT_SATELLITE_ACCURACY_SECONDS)
        }
    }
}
