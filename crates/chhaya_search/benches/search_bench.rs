use criterion::{Criterion, black_box, criterion_group, criterion_main};

use chhaya_ephem::{AnalyticEphemeris, GeoLocation, Observer};
use chhaya_search::{
    EclipseConfig, EclipseQuery, SeparationMinimumRefiner, solve, solve_solar_eclipse,
};
use chhaya_time::{calendar_to_jd, ut_to_tt_jd};

fn lunar_bench(c: &mut Criterion) {
    let eph = AnalyticEphemeris::new();
    let config = EclipseConfig::default();
    // Half a day before the 2007-03-03 total eclipse.
    let query = EclipseQuery::lunar(ut_to_tt_jd(calendar_to_jd(2007, 3, 3.5)));
    // From new moon: the search has to cover half a lunation first.
    let far_query = EclipseQuery::lunar(ut_to_tt_jd(calendar_to_jd(2007, 2, 17.7)));

    let mut group = c.benchmark_group("search_lunar");
    group.sample_size(20);
    group.bench_function("total_2007_near", |b| {
        b.iter(|| {
            solve(black_box(&eph), black_box(&query), black_box(&config))
                .expect("search should succeed")
        })
    });
    group.bench_function("total_2007_from_new_moon", |b| {
        b.iter(|| {
            solve(black_box(&eph), black_box(&far_query), black_box(&config))
                .expect("search should succeed")
        })
    });
    group.finish();
}

fn solar_bench(c: &mut Criterion) {
    let eph = AnalyticEphemeris::new();
    let config = EclipseConfig::default();
    let madrid = Observer::topocentric(GeoLocation::new(40.4, -3.683_33, 667.0));
    let query = EclipseQuery::solar(ut_to_tt_jd(calendar_to_jd(2005, 10, 3.25)), madrid);
    let refiner = SeparationMinimumRefiner::new(&eph);

    let mut group = c.benchmark_group("search_solar");
    group.sample_size(20);
    group.bench_function("annular_2005_madrid", |b| {
        b.iter(|| {
            solve_solar_eclipse(
                black_box(&eph),
                black_box(&query),
                black_box(&config),
                Some(&refiner),
            )
            .expect("search should succeed")
        })
    });
    group.finish();
}

criterion_group!(benches, lunar_bench, solar_bench);
criterion_main!(benches);
