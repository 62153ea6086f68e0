//! Eclipse type classification as a sticky state machine.
//!
//! The search feeds the state observed at every sample into
//! [`EclipseState::advance`]; the state only ever moves deeper:
//!
//! ```text
//! NoEclipse → Penumbral → Partial → Total
//!                                 ↘ Annular
//! ```
//!
//! Skipping forward (e.g. `NoEclipse → Partial` for a solar eclipse) is
//! allowed, regressions are ignored, and `Total`/`Annular` are terminal.

use crate::language::Language;

/// Reported eclipse type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EclipseType {
    Total,
    Annular,
    Partial,
    Penumbral,
}

impl EclipseType {
    /// Human-readable name.
    pub const fn label(self, lang: Language) -> &'static str {
        match (self, lang) {
            (Self::Total, _) => "Total",
            (Self::Annular, Language::English) => "Annular",
            (Self::Annular, Language::Spanish) => "Anular",
            (Self::Partial, Language::English) => "Partial",
            (Self::Partial, Language::Spanish) => "Parcial",
            (Self::Penumbral, _) => "Penumbral",
        }
    }
}

/// Deepest eclipse state observed so far during a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EclipseState {
    #[default]
    NoEclipse,
    Penumbral,
    Partial,
    Total,
    Annular,
}

impl EclipseState {
    /// Whether the machine may move from `self` to `next`.
    pub const fn allows(self, next: EclipseState) -> bool {
        use EclipseState::*;
        matches!(
            (self, next),
            (NoEclipse, Penumbral | Partial | Total | Annular)
                | (Penumbral, Partial | Total | Annular)
                | (Partial, Total | Annular)
        )
    }

    /// Fold one observation into the sticky state.
    pub fn advance(self, observed: EclipseState) -> EclipseState {
        if self.allows(observed) { observed } else { self }
    }

    /// Reported type, or `None` while no eclipse has been seen.
    pub const fn eclipse_type(self) -> Option<EclipseType> {
        match self {
            Self::NoEclipse => None,
            Self::Penumbral => Some(EclipseType::Penumbral),
            Self::Partial => Some(EclipseType::Partial),
            Self::Total => Some(EclipseType::Total),
            Self::Annular => Some(EclipseType::Annular),
        }
    }
}
