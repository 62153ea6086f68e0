//! Shadow geometry: turns two apparent positions into a distance from the
//! shadow (or disk) center and a set of zone thresholds in the same units.
//!
//! Three constructions are supported:
//! - Earth's shadow on the Moon: elliptical umbra/penumbra cones, angular
//!   units, with fitted atmospheric enlargement factors.
//! - Any other planet's shadow on one of its moons: a 1-D projection of the
//!   moon's elongation from the antisolar point against the planet's
//!   equatorial radius, in units of the moon's orbital distance.
//! - An occulting body in front of the Sun: elliptical occulter disk against
//!   a circular solar disk, angular units.
//!
//! Everything here is pure arithmetic.

use std::f64::consts::{FRAC_PI_2, PI};

use chhaya_ephem::{ApparentPosition, Body};
use chhaya_frames::{angular_separation, position_angle};

use crate::classify::EclipseState;
use crate::contact::ContactSample;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Enlargement of Earth's shadow along the equatorial axis.
///
/// Fitted to observed contact times; absorbs atmospheric refraction and
/// opacity in the lower atmosphere.
pub const EQUATORIAL_SHADOW_ENLARGEMENT: f64 = 1.0131;

/// Enlargement of Earth's shadow along the polar axis.
pub const POLAR_SHADOW_ENLARGEMENT: f64 = 1.015;

/// Lunar-type zone indices, outermost first.
pub const PENUMBRA: usize = 0;
pub const TOTAL_PENUMBRA: usize = 1;
pub const UMBRA: usize = 2;
pub const TOTAL_UMBRA: usize = 3;

/// Solar zone indices, outermost first.
pub const SHADOW: usize = 0;
pub const CENTRAL: usize = 1;

// ---------------------------------------------------------------------------
// Zone geometry seam
// ---------------------------------------------------------------------------

/// One geometry evaluation with `Z` nested zones.
///
/// Zone `i` contains the eclipsed body when `distance() <= thresholds()[i]`.
pub trait ZoneGeometry<const Z: usize> {
    /// Distance of the body from the shadow (or disk) center.
    fn distance(&self) -> f64;

    /// Zone boundaries, outermost first.
    fn thresholds(&self) -> [f64; Z];

    /// Eclipse state implied by the zones the body is in.
    fn observed_state(&self, contacts: &ContactSample<Z>) -> EclipseState;
}

/// Radius of an ellipse with semi-axes `a` (across the axis) and `b`
/// (along the axis) in a direction `angle` from the axis.
///
/// Degenerate axes give a zero radius.
pub fn ellipse_radius(a: f64, b: f64, angle: f64) -> f64 {
    if a <= 0.0 || b <= 0.0 {
        return 0.0;
    }
    1.0 / (angle.sin() / a).hypot(angle.cos() / b)
}

// ---------------------------------------------------------------------------
// Shadow cast on a moon
// ---------------------------------------------------------------------------

/// Shadow of a planet at the distance of one of its moons.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadowGeometry {
    /// Distance of the moon's center from the shadow axis.
    pub distance: f64,
    /// Penumbra radius along the bearing to the moon.
    pub penumbra_radius: f64,
    /// Umbra radius along the bearing to the moon.
    pub umbra_radius: f64,
    /// Radius of the moon's disk.
    pub body_radius: f64,
}

impl ShadowGeometry {
    /// Earth's elliptical shadow at the Moon, from geocentric positions.
    ///
    /// Semi-axes: `1.0131·π_eq + π_sun − s_sun` (equatorial) and
    /// `1.015·π_pol + π_sun − s_sun` (polar) for the umbra, plus `2·s_sun`
    /// for the penumbra, where π are parallaxes and `s_sun` is the Sun's
    /// semidiameter. The radius used is the one along the position angle
    /// from the shadow center to the Moon.
    pub fn earth_shadow(sun: &ApparentPosition, moon: &ApparentPosition, caster: Body) -> Self {
        let par_eq = (caster.equatorial_radius_km() / moon.distance_km).asin();
        let par_pol = (caster.polar_radius_km() / moon.distance_km).asin();
        let par_sun = (caster.equatorial_radius_km() / sun.distance_km).asin();
        let s_sun = sun.angular_radius_rad;

        let a_umb = EQUATORIAL_SHADOW_ENLARGEMENT * par_eq + par_sun - s_sun;
        let b_umb = POLAR_SHADOW_ENLARGEMENT * par_pol + par_sun - s_sun;
        let a_pen = a_umb + 2.0 * s_sun;
        let b_pen = b_umb + 2.0 * s_sun;

        let (center_ra, center_dec) = antisolar_point(sun);
        let distance = angular_separation(center_ra, center_dec, moon.ra_rad, moon.dec_rad);
        let pa = position_angle(center_ra, center_dec, moon.ra_rad, moon.dec_rad);

        Self {
            distance,
            penumbra_radius: ellipse_radius(a_pen, b_pen, pa),
            umbra_radius: ellipse_radius(a_umb, b_umb, pa),
            body_radius: moon.angular_radius_rad,
        }
    }

    /// A giant planet's shadow at one of its moons, from planet-centered
    /// positions.
    ///
    /// The moon's elongation from the antisolar point is projected onto the
    /// plane perpendicular to the shadow axis (`sin(sep)`), and continued
    /// monotonically (`2 − sin(sep)`) on the day side, where no eclipse is
    /// possible. The caster is treated as a sphere of its equatorial radius.
    pub fn projected_shadow(
        sun: &ApparentPosition,
        satellite: &ApparentPosition,
        caster: Body,
    ) -> Self {
        let (center_ra, center_dec) = antisolar_point(sun);
        let sep = angular_separation(center_ra, center_dec, satellite.ra_rad, satellite.dec_rad);
        let projected = if sep <= FRAC_PI_2 { sep.sin() } else { 2.0 - sep.sin() };

        let core = caster.equatorial_radius_km() / satellite.distance_km;
        let spread = sun.angular_radius_rad.tan();

        Self {
            distance: projected,
            penumbra_radius: core + spread,
            umbra_radius: core - spread,
            body_radius: satellite.angular_radius_rad.sin(),
        }
    }

    /// Umbral magnitude: fraction of the moon's diameter inside the umbra.
    pub fn umbral_magnitude(&self) -> f64 {
        (self.umbra_radius + self.body_radius - self.distance) / (2.0 * self.body_radius)
    }

    /// Penumbral magnitude: fraction of the moon's diameter inside the penumbra.
    pub fn penumbral_magnitude(&self) -> f64 {
        (self.penumbra_radius + self.body_radius - self.distance) / (2.0 * self.body_radius)
    }
}

impl ZoneGeometry<4> for ShadowGeometry {
    fn distance(&self) -> f64 {
        self.distance
    }

    fn thresholds(&self) -> [f64; 4] {
        [
            self.penumbra_radius + self.body_radius,
            self.penumbra_radius - self.body_radius,
            self.umbra_radius + self.body_radius,
            self.umbra_radius - self.body_radius,
        ]
    }

    fn observed_state(&self, contacts: &ContactSample<4>) -> EclipseState {
        if contacts.inside(TOTAL_UMBRA) {
            EclipseState::Total
        } else if contacts.inside(UMBRA) {
            EclipseState::Partial
        } else if contacts.inside(PENUMBRA) {
            EclipseState::Penumbral
        } else {
            EclipseState::NoEclipse
        }
    }
}

// ---------------------------------------------------------------------------
// Occulter in front of the Sun
// ---------------------------------------------------------------------------

/// Occulting disk against the solar disk.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiskGeometry {
    /// Separation of the two disk centers.
    pub distance: f64,
    /// Solar semidiameter.
    pub sun_radius: f64,
    /// Occulter radius along the bearing to the Sun.
    pub occulter_radius: f64,
}

impl DiskGeometry {
    /// Occulter disk oriented by its axis position angle, polar radius
    /// scaled by the body's flattening.
    pub fn new(sun: &ApparentPosition, occulter: &ApparentPosition, target: Body) -> Self {
        let distance = angular_separation(occulter.ra_rad, occulter.dec_rad, sun.ra_rad, sun.dec_rad);
        let bearing = position_angle(occulter.ra_rad, occulter.dec_rad, sun.ra_rad, sun.dec_rad);
        let a = occulter.angular_radius_rad;
        let b = a * target.polar_radius_km() / target.equatorial_radius_km();

        Self {
            distance,
            sun_radius: sun.angular_radius_rad,
            occulter_radius: ellipse_radius(a, b, bearing - occulter.axis_position_angle_rad),
        }
    }

    /// The occulter covers the whole Sun when centered.
    pub fn is_total(&self) -> bool {
        self.occulter_radius > self.sun_radius
    }

    /// Fraction of the Sun's diameter covered.
    pub fn magnitude(&self) -> f64 {
        (self.sun_radius + self.occulter_radius - self.distance) / (2.0 * self.sun_radius)
    }
}

impl ZoneGeometry<2> for DiskGeometry {
    fn distance(&self) -> f64 {
        self.distance
    }

    fn thresholds(&self) -> [f64; 2] {
        [
            self.sun_radius + self.occulter_radius,
            (self.sun_radius - self.occulter_radius).abs(),
        ]
    }

    fn observed_state(&self, contacts: &ContactSample<2>) -> EclipseState {
        if contacts.inside(CENTRAL) {
            if self.is_total() {
                EclipseState::Total
            } else {
                EclipseState::Annular
            }
        } else if contacts.inside(SHADOW) {
            EclipseState::Partial
        } else {
            EclipseState::NoEclipse
        }
    }
}

/// Point opposite the Sun on the sky.
fn antisolar_point(sun: &ApparentPosition) -> (f64, f64) {
    ((sun.ra_rad + PI).rem_euclid(std::f64::consts::TAU), -sun.dec_rad)
}
