//! Maximum refinement and visibility for Earth-based solar eclipses.

use chhaya_ephem::{Body, EphemerisProvider, apparent_sidereal_time_rad};
use chhaya_frames::angular_separation;

use crate::error::SearchError;
use crate::query::EclipseQuery;

/// Golden ratio conjugate, (√5 − 1) / 2.
const INV_PHI: f64 = 0.618_033_988_749_894_8;

/// Default convergence of the separation minimum, days (~0.01 s).
const DEFAULT_TOLERANCE_DAYS: f64 = 1e-7;

/// Iteration cap for the golden-section search.
const MAX_REFINE_ITERATIONS: u32 = 200;

/// Refined instant of maximum eclipse.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RefinedMaximum {
    pub jd_tdb: f64,
    /// The eclipse can be seen from the observer's location at that instant.
    pub visible: bool,
}

/// Collaborator that sharpens the solar maximum and decides visibility.
pub trait MaximumRefiner {
    /// `first_contact`/`last_contact` bracket the eclipse; `rough_maximum`
    /// is the midpoint of the innermost contact pair.
    fn refine(
        &self,
        query: &EclipseQuery,
        first_contact: f64,
        last_contact: f64,
        rough_maximum: f64,
    ) -> Result<RefinedMaximum, SearchError>;
}

/// Minimises the Sun–occulter separation by golden-section search and calls
/// the maximum visible when the Sun is above the observer's horizon.
/// Geocentric observers always see it.
#[derive(Debug, Clone, Copy)]
pub struct SeparationMinimumRefiner<P> {
    provider: P,
    tolerance_days: f64,
}

impl<P: EphemerisProvider> SeparationMinimumRefiner<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            tolerance_days: DEFAULT_TOLERANCE_DAYS,
        }
    }

    pub fn with_tolerance_days(mut self, tolerance_days: f64) -> Self {
        self.tolerance_days = tolerance_days;
        self
    }

    fn separation(&self, query: &EclipseQuery, jd_tdb: f64) -> Result<f64, SearchError> {
        let sun = self
            .provider
            .apparent_position(Body::Sun, jd_tdb, &query.observer)?;
        let occ = self
            .provider
            .apparent_position(query.target, jd_tdb, &query.observer)?;
        Ok(angular_separation(sun.ra_rad, sun.dec_rad, occ.ra_rad, occ.dec_rad))
    }
}

impl<P: EphemerisProvider> MaximumRefiner for SeparationMinimumRefiner<P> {
    fn refine(
        &self,
        query: &EclipseQuery,
        first_contact: f64,
        last_contact: f64,
        rough_maximum: f64,
    ) -> Result<RefinedMaximum, SearchError> {
        if !(self.tolerance_days.is_finite() && self.tolerance_days > 0.0) {
            return Err(SearchError::InvalidConfig(
                "refiner tolerance must be finite and positive",
            ));
        }
        let jd_tdb = if last_contact > first_contact {
            golden_section_min(
                |jd| self.separation(query, jd),
                first_contact,
                last_contact,
                self.tolerance_days,
            )?
        } else {
            rough_maximum
        };

        let visible = match &query.observer.location {
            Some(loc) => {
                let sun = self
                    .provider
                    .apparent_position(Body::Sun, jd_tdb, &query.observer)?;
                let local_sidereal =
                    apparent_sidereal_time_rad(jd_tdb) + loc.longitude_deg.to_radians();
                loc.altitude_rad(sun.ra_rad, sun.dec_rad, local_sidereal) > 0.0
            }
            None => true,
        };

        Ok(RefinedMaximum { jd_tdb, visible })
    }
}

/// Minimum of a unimodal function on `[a, b]`.
fn golden_section_min<F>(f: F, mut a: f64, mut b: f64, tol: f64) -> Result<f64, SearchError>
where
    F: Fn(f64) -> Result<f64, SearchError>,
{
    let mut c = b - INV_PHI * (b - a);
    let mut d = a + INV_PHI * (b - a);
    let mut fc = f(c)?;
    let mut fd = f(d)?;

    for _ in 0..MAX_REFINE_ITERATIONS {
        if (b - a).abs() < tol {
            break;
        }
        if fc < fd {
            b = d;
            d = c;
            fd = fc;
            c = b - INV_PHI * (b - a);
            fc = f(c)?;
        } else {
            a = c;
            c = d;
            fc = fd;
            d = a + INV_PHI * (b - a);
            fd = f(d)?;
        }
    }

    Ok(0.5 * (a + b))
}
