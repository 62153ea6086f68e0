//! Event search engine.
//!
//! Walks forward from the query instant with adaptive steps, recording the
//! instant each zone boundary is crossed, until the outermost zone has been
//! left. Each pass has two phases: until its ingress-complete predicate
//! holds the step follows the "to next event" estimate, afterwards the
//! "after totality" one. The predicate is a closure so both passes share
//! one routine:
//!
//! 1. innermost zone entered;
//! 2. (only if pass 1 never reached the innermost zone) the deepest zone
//!    pass 1 did enter. Pass 1 steps toward a contact that never happens and
//!    samples the egresses coarsely; pass 2 switches to egress-safe steps at
//!    that zone's ingress, which comes before the turning point.

use log::{debug, trace};

use crate::classify::EclipseState;
use crate::config::EclipseConfig;
use crate::contact::{ContactSample, detect};
use crate::error::SearchError;
use crate::events::EventVector;
use crate::geometry::ZoneGeometry;
use crate::step::StepController;

/// Source of geometry samples for the engine.
pub trait ShadowModel<const Z: usize> {
    type Geometry: ZoneGeometry<Z>;

    fn evaluate(&self, jd_tdb: f64) -> Result<Self::Geometry, SearchError>;
}

/// Per-pass non-termination guard.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchLimits {
    pub max_iterations: usize,
    pub max_span_days: f64,
}

impl From<&EclipseConfig> for SearchLimits {
    fn from(config: &EclipseConfig) -> Self {
        Self {
            max_iterations: config.max_iterations,
            max_span_days: config.max_span_days,
        }
    }
}

/// Result of one pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PassOutcome<const Z: usize> {
    pub events: EventVector<Z>,
    pub state: EclipseState,
    pub iterations: usize,
}

/// Result of a complete search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchOutcome<const Z: usize> {
    pub events: EventVector<Z>,
    pub state: EclipseState,
    pub passes: u8,
    /// Iterations summed over all passes.
    pub iterations: usize,
}

/// Run the full search: one pass, plus a corrective one when the innermost
/// zone was never entered. `Z` must be at least 1.
pub fn search<M, const Z: usize>(
    model: &M,
    start_jd: f64,
    stepper: &StepController,
    limits: &SearchLimits,
) -> Result<SearchOutcome<Z>, SearchError>
where
    M: ShadowModel<Z> + ?Sized,
{
    let innermost = Z - 1;
    let first = run_pass(model, start_jd, stepper, limits, |ev| {
        ev.ingress(innermost).is_some()
    })?;

    if first.events.ingress(innermost).is_some() {
        return Ok(SearchOutcome {
            events: first.events,
            state: first.state,
            passes: 1,
            iterations: first.iterations,
        });
    }

    let Some(deepest) = first.events.deepest_ingress() else {
        return Err(SearchError::NoContact);
    };
    debug!("innermost zone never entered; second pass targets zone {deepest}");

    let second = run_pass(model, start_jd, stepper, limits, move |ev| {
        ev.ingress(deepest).is_some()
    })?;

    Ok(SearchOutcome {
        events: second.events,
        state: second.state,
        passes: 2,
        iterations: first.iterations + second.iterations,
    })
}

/// One pass from `start_jd` until the outermost egress is recorded.
///
/// If the body starts inside the outer zone, that eclipse is walked out of
/// first and the pass reports the next one.
pub fn run_pass<M, P, const Z: usize>(
    model: &M,
    start_jd: f64,
    stepper: &StepController,
    limits: &SearchLimits,
    ingress_complete: P,
) -> Result<PassOutcome<Z>, SearchError>
where
    M: ShadowModel<Z> + ?Sized,
    P: Fn(&EventVector<Z>) -> bool,
{
    let mut events = EventVector::new();
    let mut state = EclipseState::NoEclipse;
    let mut iterations = 0usize;
    let mut prev = detect(start_jd, &model.evaluate(start_jd)?);

    if prev.inside(0) {
        debug!("JD {start_jd:.6} is inside an ongoing eclipse; walking out first");
    }
    while prev.inside(0) {
        let hint = stepper.hint(&prev, &events);
        let jd = prev.jd_tdb + stepper.step_days(&hint, true);
        iterations += 1;
        check_bounds(iterations, jd - start_jd, limits)?;
        prev = detect(jd, &model.evaluate(jd)?);
    }

    while !events.is_complete() {
        let hint = stepper.hint(&prev, &events);
        let jd = prev.jd_tdb + stepper.step_days(&hint, ingress_complete(&events));
        iterations += 1;
        check_bounds(iterations, jd - start_jd, limits)?;

        let geometry = model.evaluate(jd)?;
        let cur = detect(jd, &geometry);
        record_crossings(&mut events, &prev, &cur);
        state = state.advance(geometry.observed_state(&cur));
        trace!(
            "JD {jd:.8} distance {:.9} hint {hint:?} state {state:?}",
            geometry.distance()
        );
        prev = cur;
    }

    debug!("pass finished after {iterations} iterations, state {state:?}");
    Ok(PassOutcome {
        events,
        state,
        iterations,
    })
}

fn check_bounds(iterations: usize, span_days: f64, limits: &SearchLimits) -> Result<(), SearchError> {
    if iterations > limits.max_iterations || span_days > limits.max_span_days {
        return Err(SearchError::SearchExceededBound {
            iterations,
            span_days,
        });
    }
    Ok(())
}

/// Record every boundary crossed between two consecutive samples.
fn record_crossings<const Z: usize>(
    events: &mut EventVector<Z>,
    prev: &ContactSample<Z>,
    cur: &ContactSample<Z>,
) {
    for zone in 0..Z {
        let at = || crossing_time(prev.jd_tdb, prev.slack(zone), cur.jd_tdb, cur.slack(zone));
        match (prev.inside(zone), cur.inside(zone)) {
            (false, true) => {
                if events.set_ingress(zone, at()) {
                    debug!("zone {zone} ingress at JD {:.8}", at());
                }
            }
            (true, false) => {
                if events.set_egress(zone, at()) {
                    debug!("zone {zone} egress at JD {:.8}", at());
                }
            }
            _ => {}
        }
    }
}

/// Instant where the slack reaches zero, linearly interpolated between two
/// samples and never outside them.
pub fn crossing_time(t0: f64, slack0: f64, t1: f64, slack1: f64) -> f64 {
    let denom = slack0 - slack1;
    if denom == 0.0 {
        return t1;
    }
    t0 + (t1 - t0) * (slack0 / denom).clamp(0.0, 1.0)
}
