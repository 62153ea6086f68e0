//! Lunar-mode searches against synthetic skies with known contact times.

mod common;

use chhaya_ephem::{Body, EphemerisError, GeoLocation, Observer};
use chhaya_search::{
    EclipseConfig, EclipseQuery, EclipseType, PhaseKind, SearchError, ShadowGeometry, solve,
    solve_lunar_eclipse,
};
use common::{EarthMoonSky, REL_RATE, TM, bisect_contact, seconds_between, sun_radius_rad};
use rayon::prelude::*;

use std::f64::consts::TAU;

const TOLERANCE_SECONDS: f64 = 2.0;

fn lunar(sky: &EarthMoonSky, start: f64) -> Result<chhaya_search::EclipseResult, SearchError> {
    solve(sky, &EclipseQuery::lunar(start), &EclipseConfig::default())
}

/// Zone thresholds of a central eclipse: the Moon crosses the shadow along
/// the equatorial axis at `REL_RATE`.
fn central_thresholds(moon_distance: f64) -> [f64; 4] {
    let r_earth = Body::Earth.equatorial_radius_km();
    let sun_r = sun_radius_rad(chhaya_ephem::AU_KM);
    let umbra = 1.0131 * (r_earth / moon_distance).asin() + (r_earth / chhaya_ephem::AU_KM).asin()
        - sun_r;
    let penumbra = umbra + 2.0 * sun_r;
    let moon_r = (Body::Moon.equatorial_radius_km() / moon_distance).asin();
    [penumbra + moon_r, penumbra - moon_r, umbra + moon_r, umbra - moon_r]
}

/// Closed-form slot times of a central eclipse, in slot order.
fn central_contacts(moon_distance: f64) -> Vec<f64> {
    let th = central_thresholds(moon_distance);
    th.iter()
        .map(|t| TM - t / REL_RATE)
        .chain(th.iter().rev().map(|t| TM + t / REL_RATE))
        .collect()
}

fn shadow_at(sky: EarthMoonSky) -> impl Fn(f64) -> ShadowGeometry {
    move |jd| sky.shadow(jd)
}

// ---------------------------------------------------------------------------
// Central total eclipse
// ---------------------------------------------------------------------------

#[test]
fn central_total_contacts_match_closed_form() {
    let sky = EarthMoonSky::opposition(0.0);
    let result = lunar(&sky, TM - 0.5).expect("search should succeed");

    assert_eq!(result.eclipse_type(), EclipseType::Total);
    assert_eq!(result.passes(), 1);

    let expected = central_contacts(384_400.0);
    for (slot, (&got, &want)) in result.events().iter().zip(&expected).enumerate() {
        assert!(
            seconds_between(got, want) < TOLERANCE_SECONDS,
            "slot {slot}: got JD {got}, expected JD {want}"
        );
    }
}

/// At 384 400 km the Moon's disk is narrower than the Sun's, so the
/// penumbra-total zone is entered before the umbra and the slots are sorted.
#[test]
fn narrow_disk_total_is_ordered_and_symmetric() {
    let sky = EarthMoonSky::opposition(0.0);
    assert!(
        (Body::Moon.equatorial_radius_km() / sky.moon_distance_km).asin()
            < sun_radius_rad(chhaya_ephem::AU_KM)
    );
    let result = lunar(&sky, TM - 0.5).expect("search should succeed");
    let ev = result.events();

    assert_eq!(ev.len(), 8);
    assert!(ev.windows(2).all(|w| w[0] <= w[1]), "events out of order: {ev:?}");
    for i in 0..4 {
        let mid = 0.5 * (ev[i] + ev[7 - i]);
        assert!(
            seconds_between(mid, TM) < TOLERANCE_SECONDS,
            "pair {i} centered at JD {mid}"
        );
    }
    assert!(seconds_between(result.maximum_jd_tdb(), TM) < TOLERANCE_SECONDS);
}

/// Near perigee the Moon's disk is wider than the Sun's: the penumbra-total
/// threshold falls below the umbra one, so U1 comes before PT1 and PT4
/// before U4. Slots stay keyed by zone and each pair stays centered.
#[test]
fn moon_near_perigee_reaches_umbra_before_total_penumbra() {
    let sky = EarthMoonSky {
        moon_distance_km: 357_000.0,
        ..EarthMoonSky::opposition(0.0)
    };
    let th = central_thresholds(sky.moon_distance_km);
    assert!(th[1] < th[2], "thresholds {th:?}");

    let result = lunar(&sky, TM - 0.5).expect("search should succeed");
    assert_eq!(result.eclipse_type(), EclipseType::Total);
    assert_eq!(result.passes(), 1);

    let ev = result.events();
    assert!(ev.iter().all(|&jd| jd != 0.0), "unset slot: {ev:?}");
    assert!(ev[2] < ev[1], "U1 {} not before PT1 {}", ev[2], ev[1]);
    assert!(ev[6] < ev[5], "PT4 {} not before U4 {}", ev[6], ev[5]);
    // Roughly three minutes apart, well clear of the tolerance.
    assert!(seconds_between(ev[1], ev[2]) > 60.0);

    let expected = central_contacts(sky.moon_distance_km);
    for (slot, (&got, &want)) in ev.iter().zip(&expected).enumerate() {
        assert!(
            seconds_between(got, want) < TOLERANCE_SECONDS,
            "slot {slot}: got JD {got}, expected JD {want}"
        );
    }
    for i in 0..4 {
        let mid = 0.5 * (ev[i] + ev[7 - i]);
        assert!(
            seconds_between(mid, result.maximum_jd_tdb()) < TOLERANCE_SECONDS,
            "pair {i} centered at JD {mid}"
        );
    }
    assert!(seconds_between(result.maximum_jd_tdb(), TM) < TOLERANCE_SECONDS);
}

#[test]
fn central_total_magnitudes_and_phases() {
    let sky = EarthMoonSky::opposition(0.0);
    let result = lunar(&sky, TM - 0.5).expect("search should succeed");

    let g = sky.shadow(result.maximum_jd_tdb());
    assert!((result.magnitude() - g.umbral_magnitude()).abs() < 1e-12);
    assert!(result.magnitude() > 1.0);
    let pen = result.penumbral_magnitude().expect("lunar result has a penumbral magnitude");
    assert!(pen > result.magnitude());

    let kinds: Vec<PhaseKind> = result.phases().iter().map(|p| p.kind).collect();
    assert_eq!(
        kinds,
        [
            PhaseKind::Penumbral,
            PhaseKind::TotalPenumbral,
            PhaseKind::Umbral,
            PhaseKind::TotalUmbral,
        ]
    );
    for phase in result.phases() {
        assert_eq!(phase.main, Body::Moon);
        assert_eq!(phase.secondary, Body::Earth);
        assert!(phase.duration_days() > 0.0);
    }
    assert!(result.visible().is_none());
}

#[test]
fn topocentric_observer_is_moved_to_earth_center() {
    let sky = EarthMoonSky::opposition(0.0);
    let mut query = EclipseQuery::lunar(TM - 0.5);
    query.observer = Observer::topocentric(GeoLocation::new(40.4, -3.68, 667.0));

    let from_site = solve(&sky, &query, &EclipseConfig::default()).expect("search should succeed");
    let from_center = lunar(&sky, TM - 0.5).expect("search should succeed");
    assert_eq!(from_site, from_center);
}

// ---------------------------------------------------------------------------
// Off-center eclipses need the second pass
// ---------------------------------------------------------------------------

#[test]
fn partial_eclipse_leaves_total_umbra_unset() {
    let sky = EarthMoonSky::opposition(0.012);
    let result = lunar(&sky, TM - 0.5).expect("search should succeed");

    assert_eq!(result.eclipse_type(), EclipseType::Partial);
    assert_eq!(result.passes(), 2);
    assert_eq!(result.event(3), None);
    assert_eq!(result.event(4), None);
    assert_eq!(result.events()[3], 0.0);

    let shadow = shadow_at(sky);
    for zone in 0..3 {
        let ingress = bisect_contact::<ShadowGeometry, 4, _>(&shadow, zone, TM - 0.3, TM);
        let egress = bisect_contact::<ShadowGeometry, 4, _>(&shadow, zone, TM, TM + 0.3);
        let got_in = result.event(zone).expect("ingress recorded");
        let got_out = result.event(7 - zone).expect("egress recorded");
        assert!(seconds_between(got_in, ingress) < TOLERANCE_SECONDS, "zone {zone} ingress");
        assert!(seconds_between(got_out, egress) < TOLERANCE_SECONDS, "zone {zone} egress");
    }

    assert!(result.magnitude() > 0.0 && result.magnitude() < 1.0);
    assert_eq!(result.phases().len(), 3);
    assert_eq!(result.phases()[2].kind, PhaseKind::Umbral);
}

#[test]
fn penumbral_eclipse_fully_inside_penumbra() {
    let sky = EarthMoonSky::opposition(0.016_83);
    let result = lunar(&sky, TM - 0.5).expect("search should succeed");

    assert_eq!(result.eclipse_type(), EclipseType::Penumbral);
    assert_eq!(result.passes(), 2);
    assert!(result.event(1).is_some());
    assert!(result.event(6).is_some());
    for slot in 2..=5 {
        assert_eq!(result.event(slot), None, "slot {slot} should be unset");
    }

    let pt4 = bisect_contact::<ShadowGeometry, 4, _>(shadow_at(sky), 1, TM, TM + 0.3);
    assert!(seconds_between(result.events()[6], pt4) < TOLERANCE_SECONDS);
    assert!(result.magnitude() < 0.0);
    assert!(result.penumbral_magnitude().is_some_and(|m| m > 1.0));
}

#[test]
fn grazing_penumbral_eclipse_records_outer_pair_only() {
    let sky = EarthMoonSky::opposition(0.02);
    let result = lunar(&sky, TM - 0.5).expect("search should succeed");

    assert_eq!(result.eclipse_type(), EclipseType::Penumbral);
    assert_eq!(result.passes(), 2);
    let set: Vec<usize> = (0..8).filter(|&s| result.event(s).is_some()).collect();
    assert_eq!(set, [0, 7]);
    assert_eq!(result.phases().len(), 1);
    assert!(seconds_between(result.maximum_jd_tdb(), TM) < TOLERANCE_SECONDS);
}

// ---------------------------------------------------------------------------
// Starting points, repeatability, concurrency
// ---------------------------------------------------------------------------

#[test]
fn start_inside_eclipse_finds_the_next_one() {
    let sky = EarthMoonSky::opposition(0.0);
    let result = lunar(&sky, TM - 0.01).expect("search should succeed");

    let next = TM + TAU / REL_RATE;
    assert!(
        seconds_between(result.maximum_jd_tdb(), next) < TOLERANCE_SECONDS,
        "maximum at JD {}, expected JD {next}",
        result.maximum_jd_tdb()
    );
    assert!(result.events()[0] > TM);
}

#[test]
fn repeated_queries_are_identical() {
    let sky = EarthMoonSky::opposition(0.012);
    let a = lunar(&sky, TM - 0.5).expect("search should succeed");
    let b = lunar(&sky, TM - 0.5).expect("search should succeed");
    assert_eq!(a, b);
}

#[test]
fn concurrent_queries_share_one_provider() {
    let sky = EarthMoonSky::opposition(0.0);
    let starts: Vec<f64> = (0..8).map(|i| TM - 0.5 - f64::from(i) * 0.25).collect();

    let sequential: Vec<_> = starts.iter().map(|&s| lunar(&sky, s)).collect();
    let parallel: Vec<_> = starts.par_iter().map(|&s| lunar(&sky, s)).collect();
    assert_eq!(sequential, parallel);
    for r in &parallel {
        let r = r.as_ref().expect("search should succeed");
        assert!(seconds_between(r.maximum_jd_tdb(), TM) < TOLERANCE_SECONDS);
    }
}

// ---------------------------------------------------------------------------
// Failure modes
// ---------------------------------------------------------------------------

#[test]
fn no_eclipse_within_span_is_bounded() {
    // A miss of 0.1 rad never reaches the penumbra.
    let sky = EarthMoonSky::opposition(0.1);
    let err = solve(
        &sky,
        &EclipseQuery::lunar(TM - 0.5),
        &EclipseConfig::with_limits(1_000_000, 60.0),
    )
    .unwrap_err();
    match err {
        SearchError::SearchExceededBound { span_days, .. } => assert!(span_days > 60.0),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn iteration_cap_is_reported() {
    let sky = EarthMoonSky::opposition(0.0);
    let err = solve(
        &sky,
        &EclipseQuery::lunar(TM - 0.5),
        &EclipseConfig::with_limits(5, 36_525.0),
    )
    .unwrap_err();
    assert!(matches!(err, SearchError::SearchExceededBound { .. }));
}

#[test]
fn sun_is_rejected() {
    let sky = EarthMoonSky::opposition(0.0);
    let mut query = EclipseQuery::lunar(TM);
    query.target = Body::Sun;
    assert_eq!(
        solve(&sky, &query, &EclipseConfig::default()),
        Err(SearchError::NotEclipsable(Body::Sun))
    );
}

#[test]
fn satellite_seen_from_wrong_planet_is_rejected() {
    let sky = EarthMoonSky::opposition(0.0);
    let mut query = EclipseQuery::satellite(Body::Io, TM, None);
    query.observer = Observer::geocentric();
    assert!(matches!(
        solve(&sky, &query, &EclipseConfig::default()),
        Err(SearchError::CentralBodyMismatch {
            target: Body::Io,
            orbits: Body::Jupiter,
            observer: Body::Earth,
        })
    ));
}

#[test]
fn invalid_config_is_rejected_before_searching() {
    let sky = EarthMoonSky::opposition(0.0);
    let config = EclipseConfig {
        base_step_seconds: -1.0,
        ..EclipseConfig::default()
    };
    assert!(matches!(
        solve(&sky, &EclipseQuery::lunar(TM), &config),
        Err(SearchError::InvalidConfig(_))
    ));
}

#[test]
fn solar_query_rejected_by_lunar_solver() {
    let sky = EarthMoonSky::opposition(0.0);
    let query = EclipseQuery::solar(TM, Observer::geocentric());
    assert!(matches!(
        solve_lunar_eclipse(&sky, &query, &EclipseConfig::default()),
        Err(SearchError::InvalidQuery(_))
    ));
}

#[test]
fn ephemeris_failure_propagates() {
    let mut sky = EarthMoonSky::opposition(0.0);
    sky.fail_after_jd = Some(TM - 0.2);
    let err = lunar(&sky, TM - 0.5).unwrap_err();
    assert!(matches!(
        err,
        SearchError::Ephemeris(EphemerisError::InvalidEpoch(_))
    ));
}
