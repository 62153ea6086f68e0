//! Lunar-mode eclipses: the Moon in Earth's shadow, or any natural
//! satellite in its planet's shadow.

use chhaya_ephem::{Body, EphemerisProvider, Observer};
use log::debug;

use crate::config::EclipseConfig;
use crate::engine::{SearchLimits, ShadowModel, search};
use crate::error::SearchError;
use crate::geometry::ShadowGeometry;
use crate::query::{EclipseKind, EclipseQuery};
use crate::result::{EclipseResult, PhaseKind, phases_from_events};
use crate::step::{LUNAR_GAINS, MOON_SYNODIC_PERIOD_DAYS, StepController};

/// Phase per lunar-mode zone, outermost first.
const LUNAR_PHASES: [PhaseKind; 4] = [
    PhaseKind::Penumbral,
    PhaseKind::TotalPenumbral,
    PhaseKind::Umbral,
    PhaseKind::TotalUmbral,
];

/// Shadow of `caster` on `target`, sampled from the caster's center.
struct PlanetShadow<'a, P: ?Sized> {
    provider: &'a P,
    target: Body,
    caster: Body,
    observer: Observer,
}

impl<P> ShadowModel<4> for PlanetShadow<'_, P>
where
    P: EphemerisProvider + ?Sized,
{
    type Geometry = ShadowGeometry;

    fn evaluate(&self, jd_tdb: f64) -> Result<ShadowGeometry, SearchError> {
        let sun = self
            .provider
            .apparent_position(Body::Sun, jd_tdb, &self.observer)?;
        let body = self
            .provider
            .apparent_position(self.target, jd_tdb, &self.observer)?;
        Ok(if self.caster == Body::Earth {
            ShadowGeometry::earth_shadow(&sun, &body, self.caster)
        } else {
            ShadowGeometry::projected_shadow(&sun, &body, self.caster)
        })
    }
}

/// Relative period of a satellite's motion against its planet's shadow.
pub(crate) fn relative_period_days(target: Body) -> Result<f64, SearchError> {
    if target == Body::Moon {
        return Ok(MOON_SYNODIC_PERIOD_DAYS);
    }
    target
        .orbital_period_days()
        .ok_or(SearchError::NotEclipsable(target))
}

/// Find the next lunar-mode eclipse after `query.jd_tdb`.
///
/// Positions are always taken from the center of the target's central
/// body, whatever location the query's observer carries.
pub fn solve_lunar_eclipse<P>(
    provider: &P,
    query: &EclipseQuery,
    config: &EclipseConfig,
) -> Result<EclipseResult, SearchError>
where
    P: EphemerisProvider + ?Sized,
{
    config.validate().map_err(SearchError::InvalidConfig)?;
    let caster = query.validate()?;
    if query.kind != EclipseKind::Lunar {
        return Err(SearchError::InvalidQuery("expected a lunar-kind query"));
    }

    let model = PlanetShadow {
        provider,
        target: query.target,
        caster,
        observer: query.observer.centered(),
    };
    let stepper = StepController::new(
        query.base_step_seconds(config.base_step_seconds),
        relative_period_days(query.target)?,
        LUNAR_GAINS,
    );
    debug!(
        "lunar search: {:?} in shadow of {caster:?} from JD {:.6}",
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
    let maximum_jd_tdb = 0.5 * (start + end);
    let at_max = model.evaluate(maximum_jd_tdb)?;

    Ok(EclipseResult {
        kind: EclipseKind::Lunar,
        target: query.target,
        eclipse_type,
        maximum_jd_tdb,
        magnitude: at_max.umbral_magnitude(),
        penumbral_magnitude: Some(at_max.penumbral_magnitude()),
        // Zone order; U1 precedes PT1 when the Moon is wider than the Sun.
        events: outcome.events.to_slots(),
        phases: phases_from_events(&outcome.events, LUNAR_PHASES, query.target, caster),
        passes: outcome.passes,
        visible: None,
    })
}
