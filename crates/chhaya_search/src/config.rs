//! Search configuration.

/// Default fine base increment added to every Moon step, in seconds.
pub const DEFAULT_BASE_STEP_SECONDS: f64 = 1.0;

/// Default base increment (and contact accuracy) for non-Moon satellites.
pub const DEFAULT_SATELLITE_ACCURACY_SECONDS: f64 = 1.0;

/// Limits and resolution of the event search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EclipseConfig {
    /// Fine base increment added to every Moon step, in seconds.
    pub base_step_seconds: f64,
    /// Iterations a single pass may take.
    pub max_iterations: usize,
    /// Days past the query instant a single pass may reach.
    pub max_span_days: f64,
}

impl Default for EclipseConfig {
    fn default() -> Self {
        Self {
            base_step_seconds: DEFAULT_BASE_STEP_SECONDS,
            max_iterations: 1_000_000,
            max_span_days: 36_525.0,
        }
    }
}

impl EclipseConfig {
    /// Config with tighter caps, e.g. when the caller knows an eclipse is
    /// within a few lunations.
    pub fn with_limits(max_iterations: usize, max_span_days: f64) -> Self {
        Self {
            max_iterations,
            max_span_days,
            ..Self::default()
        }
    }

    /// Validate parameter ranges.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.base_step_seconds.is_finite() || self.base_step_seconds <= 0.0 {
            return Err("base_step_seconds must be finite and positive");
        }
        if self.max_iterations == 0 {
            return Err("max_iterations must be greater than zero");
        }
        if !self.max_span_days.is_finite() || self.max_span_days <= 0.0 {
            return Err("max_span_days must be finite and positive");
        }
        Ok(())
    }
}
