//! Synthetic skies with closed-form contact times.
//!
//! Every body moves uniformly in right ascension along the equator (or a
//! fixed declination offset from it), so contact instants can be computed
//! by hand or by bisection on the same geometry the solver uses.

#![allow(dead_code)]

use std::f64::consts::{PI, TAU};

use chhaya_ephem::{
    AU_KM, ApparentPosition, Body, EphemerisError, EphemerisProvider, Observer,
};
use chhaya_search::{DiskGeometry, ShadowGeometry, ZoneGeometry};

/// Mid-eclipse instant of every synthetic sky.
pub const TM: f64 = 2_451_545.0;

/// Sun's motion in right ascension, rad/day.
pub const SUN_RATE: f64 = 0.017_202;

/// Moon's motion relative to the Sun, rad/day (one synodic month of 29.53 d).
pub const REL_RATE: f64 = 0.212_8;

/// Io's motion relative to a fixed Sun, rad/day.
pub const IO_RATE: f64 = TAU / 1.769_138;

pub const SECONDS_PER_DAY: f64 = 86_400.0;

fn position(ra_rad: f64, dec_rad: f64, radius_km: f64, distance_km: f64) -> ApparentPosition {
    ApparentPosition {
        ra_rad: ra_rad.rem_euclid(TAU),
        dec_rad,
        angular_radius_rad: (radius_km / distance_km).asin(),
        distance_km,
        axis_position_angle_rad: 0.0,
    }
}

pub fn sun_radius_rad(distance_km: f64) -> f64 {
    (Body::Sun.equatorial_radius_km() / distance_km).asin()
}

// ---------------------------------------------------------------------------
// Earth-Moon skies
// ---------------------------------------------------------------------------

/// Which side of the Earth the Moon passes at `TM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    /// Full moon: the Moon crosses the antisolar point.
    Opposition,
    /// New moon: the Moon crosses the Sun.
    Conjunction,
}

/// Sun at 1 AU and a Moon at fixed distance, aligned at `TM`.
#[derive(Debug, Clone, Copy)]
pub struct EarthMoonSky {
    pub alignment: Alignment,
    /// Moon's declination, a constant miss distance from the Sun's path.
    pub moon_dec_rad: f64,
    pub moon_distance_km: f64,
    /// Instants at and after which the provider fails.
    pub fail_after_jd: Option<f64>,
}

impl EarthMoonSky {
    pub fn opposition(moon_dec_rad: f64) -> Self {
        Self {
            alignment: Alignment::Opposition,
            moon_dec_rad,
            moon_distance_km: 384_400.0,
            fail_after_jd: None,
        }
    }

    pub fn conjunction(moon_dec_rad: f64, moon_distance_km: f64) -> Self {
        Self {
            alignment: Alignment::Conjunction,
            moon_dec_rad,
            moon_distance_km,
            fail_after_jd: None,
        }
    }

    pub fn sun(&self, jd: f64) -> ApparentPosition {
        position(
            1.0 + SUN_RATE * (jd - TM),
            0.0,
            Body::Sun.equatorial_radius_km(),
            AU_KM,
        )
    }

    pub fn moon(&self, jd: f64) -> ApparentPosition {
        let offset = match self.alignment {
            Alignment::Opposition => PI,
            Alignment::Conjunction => 0.0,
        };
        position(
            1.0 + SUN_RATE * (jd - TM) + offset + REL_RATE * (jd - TM),
            self.moon_dec_rad,
            Body::Moon.equatorial_radius_km(),
            self.moon_distance_km,
        )
    }

    pub fn shadow(&self, jd: f64) -> ShadowGeometry {
        ShadowGeometry::earth_shadow(&self.sun(jd), &self.moon(jd), Body::Earth)
    }

    pub fn disk(&self, jd: f64) -> DiskGeometry {
        DiskGeometry::new(&self.sun(jd), &self.moon(jd), Body::Moon)
    }
}

impl EphemerisProvider for EarthMoonSky {
    fn apparent_position(
        &self,
        target: Body,
        jd_tdb: f64,
        observer: &Observer,
    ) -> Result<ApparentPosition, EphemerisError> {
        if self.fail_after_jd.is_some_and(|jd| jd_tdb >= jd) {
            return Err(EphemerisError::InvalidEpoch(jd_tdb));
        }
        if observer.central_body != Body::Earth {
            return Err(EphemerisError::UnsupportedObserver("synthetic sky is geocentric"));
        }
        match target {
            Body::Sun => Ok(self.sun(jd_tdb)),
            Body::Moon => Ok(self.moon(jd_tdb)),
            other => Err(EphemerisError::UnsupportedBody(other)),
        }
    }
}

// ---------------------------------------------------------------------------
// Jovian sky
// ---------------------------------------------------------------------------

/// Jupiter-centered sky: a fixed Sun at 5.2 AU and Io on a circular orbit
/// that crosses the antisolar point at `TM`.
#[derive(Debug, Clone, Copy)]
pub struct JovianSky {
    pub io_dec_rad: f64,
}

impl JovianSky {
    pub const IO_DISTANCE_KM: f64 = 421_700.0;

    pub fn sun_distance_km() -> f64 {
        5.2 * AU_KM
    }

    pub fn sun(&self) -> ApparentPosition {
        position(
            1.0,
            0.0,
            Body::Sun.equatorial_radius_km(),
            Self::sun_distance_km(),
        )
    }

    pub fn io(&self, jd: f64) -> ApparentPosition {
        position(
            1.0 + PI + IO_RATE * (jd - TM),
            self.io_dec_rad,
            Body::Io.equatorial_radius_km(),
            Self::IO_DISTANCE_KM,
        )
    }
}

impl EphemerisProvider for JovianSky {
    fn apparent_position(
        &self,
        target: Body,
        jd_tdb: f64,
        observer: &Observer,
    ) -> Result<ApparentPosition, EphemerisError> {
        if observer.central_body != Body::Jupiter || observer.is_topocentric() {
            return Err(EphemerisError::UnsupportedObserver("synthetic sky is jovicentric"));
        }
        match target {
            Body::Sun => Ok(self.sun()),
            Body::Io => Ok(self.io(jd_tdb)),
            other => Err(EphemerisError::UnsupportedBody(other)),
        }
    }
}

// ---------------------------------------------------------------------------
// Reference contacts
// ---------------------------------------------------------------------------

/// Instant in `[a, b]` where `distance() - thresholds()[zone]` changes sign.
pub fn bisect_contact<G, const Z: usize, F>(geometry: F, zone: usize, mut a: f64, mut b: f64) -> f64
where
    G: ZoneGeometry<Z>,
    F: Fn(f64) -> G,
{
    let slack = |jd: f64| {
        let g = geometry(jd);
        g.distance() - g.thresholds()[zone]
    };
    let mut fa = slack(a);
    for _ in 0..200 {
        let c = 0.5 * (a + b);
        let fc = slack(c);
        if (fa > 0.0) == (fc > 0.0) {
            a = c;
            fa = fc;
        } else {
            b = c;
        }
    }
    0.5 * (a + b)
}

/// Difference in seconds.
pub fn seconds_between(a: f64, b: f64) -> f64 {
    (a - b).abs() * SECONDS_PER_DAY
}
