//! Derived eclipse result and named phases.

use chhaya_ephem::Body;

use crate::classify::EclipseType;
use crate::events::EventVector;
use crate::language::{Language, body_name};
use crate::query::EclipseKind;

/// Phenomenon spanned by one contact pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhaseKind {
    Penumbral,
    TotalPenumbral,
    Umbral,
    TotalUmbral,
    Partial,
    Total,
    Annular,
}

impl PhaseKind {
    pub const fn label(self, lang: Language) -> &'static str {
        match lang {
            Language::English => match self {
                Self::Penumbral => "penumbral eclipse",
                Self::TotalPenumbral => "total penumbral eclipse",
                Self::Umbral => "umbral eclipse",
                Self::TotalUmbral => "total umbral eclipse",
                Self::Partial => "partial eclipse",
                Self::Total => "total eclipse",
                Self::Annular => "annular eclipse",
            },
            Language::Spanish => match self {
                Self::Penumbral => "eclipse penumbral",
                Self::TotalPenumbral => "eclipse penumbral total",
                Self::Umbral => "eclipse umbral",
                Self::TotalUmbral => "eclipse umbral total",
                Self::Partial => "eclipse parcial",
                Self::Total => "eclipse total",
                Self::Annular => "eclipse anular",
            },
        }
    }
}

/// One populated contact pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Phase {
    pub start_jd_tdb: f64,
    pub end_jd_tdb: f64,
    /// Body whose light is lost: the eclipsed moon, or the Sun.
    pub main: Body,
    /// Body responsible: the shadow caster, or the occulter.
    pub secondary: Body,
    pub kind: PhaseKind,
}

impl Phase {
    pub fn duration_days(&self) -> f64 {
        self.end_jd_tdb - self.start_jd_tdb
    }

    /// e.g. `total umbral eclipse (Moon / Earth)`.
    pub fn label(&self, lang: Language) -> String {
        format!(
            "{} ({} / {})",
            self.kind.label(lang),
            body_name(self.main, lang),
            body_name(self.secondary, lang)
        )
    }
}

/// Phases for every zone with both contacts recorded, ordered by start.
pub(crate) fn phases_from_events<const Z: usize>(
    events: &EventVector<Z>,
    kinds: [PhaseKind; Z],
    main: Body,
    secondary: Body,
) -> Vec<Phase> {
    let mut phases: Vec<Phase> = (0..Z)
        .filter_map(|zone| match (events.ingress(zone), events.egress(zone)) {
            (Some(start), Some(end)) => Some(Phase {
                start_jd_tdb: start,
                end_jd_tdb: end,
                main,
                secondary,
                kind: kinds[zone],
            }),
            _ => None,
        })
        .collect();
    phases.sort_by(|a, b| a.start_jd_tdb.total_cmp(&b.start_jd_tdb));
    phases
}

/// Circumstances of one eclipse.
#[derive(Debug, Clone, PartialEq)]
pub struct EclipseResult {
    pub(crate) kind: EclipseKind,
    pub(crate) target: Body,
    pub(crate) eclipse_type: EclipseType,
    pub(crate) maximum_jd_tdb: f64,
    pub(crate) magnitude: f64,
    pub(crate) penumbral_magnitude: Option<f64>,
    pub(crate) events: Vec<f64>,
    pub(crate) phases: Vec<Phase>,
    pub(crate) passes: u8,
    pub(crate) visible: Option<bool>,
}

impl EclipseResult {
    pub fn kind(&self) -> EclipseKind {
        self.kind
    }

    /// Eclipsed (lunar) or occulting (solar) body.
    pub fn target(&self) -> Body {
        self.target
    }

    pub fn eclipse_type(&self) -> EclipseType {
        self.eclipse_type
    }

    pub fn type_label(&self, lang: Language) -> &'static str {
        self.eclipse_type.label(lang)
    }

    /// Midpoint of the innermost contact pair, or the refined maximum.
    pub fn maximum_jd_tdb(&self) -> f64 {
        self.maximum_jd_tdb
    }

    /// Umbral magnitude (lunar) or fraction of the solar diameter covered
    /// (solar), at maximum.
    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    /// Penumbral magnitude at maximum, lunar mode only.
    pub fn penumbral_magnitude(&self) -> Option<f64> {
        self.penumbral_magnitude
    }

    /// Contact slots keyed by zone, 0.0 where unset.
    ///
    /// Lunar: P1, PT1, U1, UT1, UT4, U4, PT4, P4.
    /// Solar: C1, C2, C3, C4.
    ///
    /// Not necessarily time-sorted: when the eclipsed disk is wider than the
    /// Sun, U1 precedes PT1 and PT4 precedes U4. See [`Self::phases`] for a
    /// chronological view.
    pub fn events(&self) -> &[f64] {
        &self.events
    }

    /// One slot, `None` when unset or out of range.
    pub fn event(&self, slot: usize) -> Option<f64> {
        self.events.get(slot).copied().filter(|&jd| jd != 0.0)
    }

    pub fn phases(&self) -> &[Phase] {
        &self.phases
    }

    /// Number of search passes used (1 or 2).
    pub fn passes(&self) -> u8 {
        self.passes
    }

    /// Whether the maximum is visible, when a refiner decided it.
    pub fn visible(&self) -> Option<bool> {
        self.visible
    }
}
