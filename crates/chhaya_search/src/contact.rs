//! Contact detection: which zones contain the body, and by how much.

use crate::geometry::{CENTRAL, PENUMBRA, SHADOW, TOTAL_PENUMBRA, TOTAL_UMBRA, UMBRA, ZoneGeometry};

/// Membership of one zone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoneState {
    pub inside: bool,
    /// `distance − threshold`: positive outside, non-positive inside.
    pub slack: f64,
}

/// Zone memberships at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContactSample<const Z: usize> {
    pub jd_tdb: f64,
    pub zones: [ZoneState; Z],
}

impl<const Z: usize> ContactSample<Z> {
    pub fn inside(&self, zone: usize) -> bool {
        self.zones[zone].inside
    }

    pub fn slack(&self, zone: usize) -> f64 {
        self.zones[zone].slack
    }
}

/// Evaluate zone membership for one geometry sample.
pub fn detect<G, const Z: usize>(jd_tdb: f64, geometry: &G) -> ContactSample<Z>
where
    G: ZoneGeometry<Z>,
{
    let distance = geometry.distance();
    let thresholds = geometry.thresholds();
    ContactSample {
        jd_tdb,
        zones: std::array::from_fn(|i| ZoneState {
            inside: distance <= thresholds[i],
            slack: distance - thresholds[i],
        }),
    }
}

/// Named lunar-mode membership flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LunarFlags {
    pub inside_penumbra: bool,
    pub total_penumbra: bool,
    pub inside_umbra: bool,
    pub total_umbra: bool,
}

impl From<&ContactSample<4>> for LunarFlags {
    fn from(c: &ContactSample<4>) -> Self {
        Self {
            inside_penumbra: c.inside(PENUMBRA),
            total_penumbra: c.inside(TOTAL_PENUMBRA),
            inside_umbra: c.inside(UMBRA),
            total_umbra: c.inside(TOTAL_UMBRA),
        }
    }
}

/// Named solar-mode membership flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SolarFlags {
    pub inside_shadow: bool,
    /// Inside the totality (or annularity) zone.
    pub totality: bool,
}

impl From<&ContactSample<2>> for SolarFlags {
    fn from(c: &ContactSample<2>) -> Self {
        Self {
            inside_shadow: c.inside(SHADOW),
            totality: c.inside(CENTRAL),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::EclipseState;

    struct Fixed {
        distance: f64,
        thresholds: [f64; 4],
    }

    impl ZoneGeometry<4> for Fixed {
        fn distance(&self) -> f64 {
            self.distance
        }
        fn thresholds(&self) -> [f64; 4] {
            self.thresholds
        }
        fn observed_state(&self, _: &ContactSample<4>) -> EclipseState {
            EclipseState::NoEclipse
        }
    }

    #[test]
    fn boundary_counts_as_inside() {
        let g = Fixed {
            distance: 2.0,
            thresholds: [4.0, 3.0, 2.0, 1.0],
        };
        let c: ContactSample<4> = detect(10.0, &g);
        assert_eq!(c.jd_tdb, 10.0);
        assert!(c.inside(2));
        assert_eq!(c.slack(2), 0.0);
        assert!(!c.inside(3));
        assert_eq!(c.slack(3), 1.0);
        assert_eq!(c.slack(0), -2.0);

        let flags = LunarFlags::from(&c);
        assert_eq!(
            flags,
            LunarFlags {
                inside_penumbra: true,
                total_penumbra: true,
                inside_umbra: true,
                total_umbra: false,
            }
        );
    }

    #[test]
    fn solar_flags_from_disk() {
        use crate::geometry::DiskGeometry;

        let annular = DiskGeometry {
            distance: 0.0001,
            sun_radius: 0.0047,
            occulter_radius: 0.0045,
        };
        let sample: ContactSample<2> = detect(0.0, &annular);
        let flags = SolarFlags::from(&sample);
        assert!(flags.inside_shadow);
        assert!(flags.totality);

        let clear = DiskGeometry {
            distance: 0.02,
            ..annular
        };
        let sample: ContactSample<2> = detect(0.0, &clear);
        assert_eq!(SolarFlags::from(&sample), SolarFlags::default());
    }
}
