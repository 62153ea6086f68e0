//! Adaptive step control.
//!
//! The time to the next contact is estimated from the current slack and a
//! mean relative angular rate, then deliberately under-shot so that a
//! contact can never be stepped over.

use std::f64::consts::TAU;

use chhaya_time::SECONDS_PER_DAY;

use crate::contact::ContactSample;
use crate::events::EventVector;

/// Mean synodic month, days. Sets the Moon's rate relative to the shadow.
pub const MOON_SYNODIC_PERIOD_DAYS: f64 = 29.5;

/// Gains applied to the slack-derived estimates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepGains {
    /// Fraction of the time-to-ingress estimate.
    pub ingress: f64,
    /// Fraction of the time-to-egress estimate.
    pub egress: f64,
    /// Fraction of the selected estimate actually stepped each iteration.
    pub loop_factor: f64,
}

/// Gains for lunar-mode searches.
pub const LUNAR_GAINS: StepGains = StepGains {
    ingress: 0.75,
    egress: 0.5,
    loop_factor: 0.5,
};

/// Gains for solar-mode searches.
pub const SOLAR_GAINS: StepGains = StepGains {
    ingress: 0.5,
    egress: 0.25,
    loop_factor: 0.75,
};

/// Forward offsets in days suggested by the current sample.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StepHint {
    /// Time to the nearest zone not yet entered.
    pub to_next_event: f64,
    /// Time to the nearest boundary of a zone the body is inside.
    pub after_totality: f64,
}

impl StepHint {
    pub const ZERO: StepHint = StepHint {
        to_next_event: 0.0,
        after_totality: 0.0,
    };
}

/// Turns samples into time increments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepController {
    base_step_days: f64,
    rate_rad_per_day: f64,
    gains: StepGains,
}

impl StepController {
    /// `base_step_seconds` is added to every step; `period_days` is the
    /// period of the body's motion relative to the shadow.
    pub fn new(base_step_seconds: f64, period_days: f64, gains: StepGains) -> Self {
        Self {
            base_step_days: base_step_seconds / SECONDS_PER_DAY,
            rate_rad_per_day: TAU / period_days,
            gains,
        }
    }

    pub fn rate_rad_per_day(&self) -> f64 {
        self.rate_rad_per_day
    }

    /// Recompute both estimates from scratch.
    ///
    /// `to_next_event` considers zones the body is outside of and has not
    /// yet entered in this pass; `after_totality` considers zones it is
    /// inside. An empty set yields zero.
    pub fn hint<const Z: usize>(
        &self,
        sample: &ContactSample<Z>,
        events: &EventVector<Z>,
    ) -> StepHint {
        let mut to_next = f64::INFINITY;
        let mut to_exit = f64::INFINITY;
        for (zone, state) in sample.zones.iter().enumerate() {
            if state.inside {
                to_exit = to_exit.min(state.slack.abs());
            } else if events.ingress(zone).is_none() {
                to_next = to_next.min(state.slack);
            }
        }

        let days = |slack: f64, gain: f64| {
            if slack.is_finite() {
                gain * slack / self.rate_rad_per_day
            } else {
                0.0
            }
        };

        StepHint {
            to_next_event: days(to_next, self.gains.ingress),
            after_totality: days(to_exit, self.gains.egress),
        }
    }

    /// Increment for this iteration: the base step plus the loop factor
    /// times the estimate for the current phase of the pass.
    pub fn step_days(&self, hint: &StepHint, ingress_complete: bool) -> f64 {
        let estimate = if ingress_complete {
            hint.after_totality
        } else {
            hint.to_next_event
        };
        self.base_step_days + self.gains.loop_factor * estimate
    }
}
