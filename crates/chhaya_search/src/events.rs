//! Contact timestamps for one search, keyed by zone.
//!
//! For `Z` nested zones there are `2·Z` slots: ingresses outermost first,
//! then egresses innermost first. Slot `i` holds the ingress of zone `i`;
//! slot `2·Z − 1 − i` holds its egress, and each such pair is symmetric
//! about the maximum.
//!
//! Slot order is time order only while the zone thresholds decrease with
//! the zone index. In lunar mode the penumbra-total threshold
//! (`penumbra − r`) drops below the umbra one (`umbra + r`) whenever the
//! eclipsed disk's radius `r` exceeds the Sun's semidiameter. That happens
//! for the Moon near perigee and always for Io. U1 then precedes PT1 and
//! PT4 precedes U4.

/// Contact timestamps (JD TDB) for `Z` nested zones.
///
/// A slot is written at most once; egress is only accepted after ingress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventVector<const Z: usize> {
    ingress: [Option<f64>; Z],
    egress: [Option<f64>; Z],
}

impl<const Z: usize> Default for EventVector<Z> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const Z: usize> EventVector<Z> {
    /// Number of slots.
    pub const LEN: usize = 2 * Z;

    pub const fn new() -> Self {
        Self {
            ingress: [None; Z],
            egress: [None; Z],
        }
    }

    pub fn ingress(&self, zone: usize) -> Option<f64> {
        self.ingress[zone]
    }

    pub fn egress(&self, zone: usize) -> Option<f64> {
        self.egress[zone]
    }

    /// Record an ingress. Returns `false` if the slot was already set.
    pub fn set_ingress(&mut self, zone: usize, jd_tdb: f64) -> bool {
        if self.ingress[zone].is_some() {
            return false;
        }
        self.ingress[zone] = Some(jd_tdb);
        true
    }

    /// Record an egress. Returns `false` if the zone was never entered or
    /// the slot was already set.
    pub fn set_egress(&mut self, zone: usize, jd_tdb: f64) -> bool {
        if self.ingress[zone].is_none() || self.egress[zone].is_some() {
            return false;
        }
        self.egress[zone] = Some(jd_tdb);
        true
    }

    /// The outermost zone has been left: nothing more to record.
    pub fn is_complete(&self) -> bool {
        self.egress[0].is_some()
    }

    /// Deepest zone whose ingress is recorded.
    pub fn deepest_ingress(&self) -> Option<usize> {
        (0..Z).rev().find(|&z| self.ingress[z].is_some())
    }

    /// Deepest zone with both ingress and egress recorded, with its times.
    pub fn innermost_pair(&self) -> Option<(usize, f64, f64)> {
        (0..Z).rev().find_map(|z| match (self.ingress[z], self.egress[z]) {
            (Some(a), Some(b)) => Some((z, a, b)),
            _ => None,
        })
    }

    /// Slot value, `None` when unset.
    pub fn slot(&self, index: usize) -> Option<f64> {
        if index < Z {
            self.ingress[index]
        } else {
            self.egress[2 * Z - 1 - index]
        }
    }

    /// All slots in zone order, 0.0 for unset ones.
    pub fn to_slots(&self) -> Vec<f64> {
        (0..Self::LEN)
            .map(|i| self.slot(i).unwrap_or(0.0))
            .collect()
    }
}
