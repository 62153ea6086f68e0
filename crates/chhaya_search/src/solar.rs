//! Solar-mode eclipses: a natural satellite in front of the Sun.

use chhaya_ephem::{Body, EphemerisProvider, Observer};
use log::debug;

use crate::classify::EclipseType;
use crate::config::EclipseConfig;
use crate::engine::{SearchLimits, ShadowModel, search};
use crate::error::SearchError;
use crate::geometry::DiskGeometry;
use crate::lunar::relative_period_days;
use crate::query::{EclipseKind, EclipseQuery};
use crate::refine::MaximumRefiner;
use crate::result::{EclipseResult, PhaseKind, phases_from_events};
use crate::step::{SOLAR_GAINS, StepController};

/// Occulter disk against the Sun for one observer.
struct OcculterDisk<'a, P: ?Sized> {
    provider: &'a P,
    target: Body,
    observer: Observer,
}

impl<P> ShadowModel<2> for OcculterDisk<'_, P>
where
    P: EphemerisProvider + ?Sized,
{
    type Geometry = DiskGeometry;

    fn evaluate(&self, jd_tdb: f64) -> Result<DiskGeometry, SearchError> {
        let sun = self
            .provider
            .apparent_position(Body::Sun, jd_tdb, &self.observer)?;
        let occulter = self
            .provider
            .apparent_position(self.target, jd_tdb, &self.observer)?;
        Ok(DiskGeometry::new(&sun, &occulter, self.target))
    }
}

/// Find the next solar eclipse after `query.jd_tdb` for the query's
/// observer.
///
/// When a `refiner` is supplied and the observer is on Earth, it replaces
/// the contact-midpoint maximum and decides visibility.
pub fn solve_solar_eclipse<P>(
    provider: &P,
    query: &EclipseQuery,
    config: &EclipseConfig,
    refiner: Option<&dyn MaximumRefiner>,
) -> Result<EclipseResult, SearchError>
where
    P: EphemerisProvider + ?Sized,
{
    config.validate().map_err(SearchError::InvalidConfig)?;
    query.validate()?;
    if query.kind != EclipseKind::Solar {
        return Err(SearchError::InvalidQuery("expected a solar-kind query"));
    }

    let model = OcculterDisk {
        provider,
        target: query.target,
        observer: query.observer,
    };
    let stepper = StepController::new(
        query.base_step_seconds(config.base_step_seconds),
        relative_period_days(query.target)?,
        SOLAR_GAINS,
    );
    debug!(
        "solar search: {:?} over the Sun from JD {:.6}",
        query.target, query.jd_tdb
    );

    let outcome = search(&model, query.jd_tdb, &stepper, &SearchLimits::from(config))?;
    let eclipse_type = outcome
        .state
        .eclipse_type()
        .ok_or(SearchError::NoContact)?;
    let (_, start, end) = outcome
        .events
        .innermost_pair()
        .ok_or(SearchError::NoContact)?;
    let mut maximum_jd_tdb = 0.5 * (start + end);
    let mut visible = None;

    if let Some(refiner) = refiner.filter(|_| query.observer.central_body == Body::Earth) {
        let (first, last) = match (outcome.events.ingress(0), outcome.events.egress(0)) {
            (Some(first), Some(last)) => (first, last),
            _ => (start, end),
        };
        let refined = refiner.refine(query, first, last, maximum_jd_tdb)?;
        debug!("refined maximum JD {:.8} (visible: {})", refined.jd_tdb, refined.visible);
        maximum_jd_tdb = refined.jd_tdb;
        visible = Some(refined.visible);
    }

    let central_kind = match eclipse_type {
        EclipseType::Total => PhaseKind::Total,
        _ => PhaseKind::Annular,
    };
    let at_max = model.evaluate(maximum_jd_tdb)?;

    Ok(EclipseResult {
        kind: EclipseKind::Solar,
        target: query.target,
        eclipse_type,
        maximum_jd_tdb,
        magnitude: at_max.magnitude(),
        penumbral_magnitude: None,
        events: outcome.events.to_slots(),
        phases: phases_from_events(
            &outcome.events,
            [PhaseKind::Partial, central_kind],
            Body::Sun,
            query.target,
        ),
        passes: outcome.passes,
        visible,
    })
}
