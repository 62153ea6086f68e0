//! Brute-force eclipse circumstance solver.
//!
//! This crate provides:
//! - Shadow geometry for lunar-mode (body in a planet's shadow) and
//!   solar-mode (body in front of the Sun) eclipses
//! - A pure contact detector with signed slack to every zone boundary
//! - An adaptive step controller that under-shoots the next contact
//! - A two-pass event search producing ordered contact times
//! - Classification (total / annular / partial / penumbral), maximum,
//!   magnitude and named phases
//!
//! Positions come from any [`chhaya_ephem::EphemerisProvider`]. The solver
//! is synchronous and stateless; independent queries may run concurrently
//! against a shared provider.

pub mod classify;
pub mod config;
pub mod contact;
pub mod engine;
pub mod error;
pub mod events;
pub mod geometry;
pub mod language;
pub mod lunar;
pub mod query;
pub mod refine;
pub mod result;
pub mod solar;
pub mod step;

use chhaya_ephem::EphemerisProvider;

pub use classify::{EclipseState, EclipseType};
pub use config::{DEFAULT_BASE_STEP_SECONDS, DEFAULT_SATELLITE_ACCURACY_SECONDS, EclipseConfig};
pub use contact::{ContactSample, LunarFlags, SolarFlags, ZoneState, detect};
pub use error::SearchError;
pub use events::EventVector;
pub use geometry::{
    DiskGeometry, EQUATORIAL_SHADOW_ENLARGEMENT, POLAR_SHADOW_ENLARGEMENT, ShadowGeometry,
    ZoneGeometry,
};
pub use language::{Language, body_name};
pub use lunar::solve_lunar_eclipse;
pub use query::{EclipseKind, EclipseQuery};
pub use refine::{MaximumRefiner, RefinedMaximum, SeparationMinimumRefiner};
pub use result::{EclipseResult, Phase, PhaseKind};
pub use solar::solve_solar_eclipse;
pub use step::{LUNAR_GAINS, MOON_SYNODIC_PERIOD_DAYS, SOLAR_GAINS, StepController, StepGains, StepHint};

/// Find the next eclipse of the query's kind.
///
/// Solar queries run without a maximum refiner; use
/// [`solve_solar_eclipse`] to supply one.
pub fn solve<P>(
    provider: &P,
    query: &EclipseQuery,
    config: &EclipseConfig,
) -> Result<EclipseResult, SearchError>
where
    P: EphemerisProvider + ?Sized,
{
    match query.kind {
        EclipseKind::Lunar => solve_lunar_eclipse(provider, query, config),
        EclipseKind::Solar => solve_solar_eclipse(provider, query, config, None),
    }
}
