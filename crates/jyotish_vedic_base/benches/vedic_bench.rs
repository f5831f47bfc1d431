use chrono::NaiveDate;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use jyotish_core::Engine;
use jyotish_vedic_base::{
    DashaLevel, GeoLocation, LocalSky, MoonPosition, ashtakoot, karana_from_elongation,
    lagna, nakshatra_from_longitude, placidus_cusps, rashi_from_longitude, sunrise,
    tithi_from_elongation, vimshottari, yoga_from_sum,
};

fn panchang_primitives_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("panchang_primitives");
    group.bench_function("tithi_from_elongation", |b| {
        b.iter(|| tithi_from_elongation(black_box(211.75)))
    });
    group.bench_function("karana_from_elongation", |b| {
        b.iter(|| karana_from_elongation(black_box(211.75)))
    });
    group.bench_function("yoga_from_sum", |b| {
        b.iter(|| yoga_from_sum(black_box(120.0), black_box(158.31)))
    });
    group.bench_function("rashi_and_nakshatra", |b| {
        b.iter(|| {
            (
                rashi_from_longitude(black_box(123.456)),
                nakshatra_from_longitude(black_box(123.456)),
            )
        })
    });
    group.finish();
}

fn chart_bench(c: &mut Criterion) {
    let engine = Engine::analytic();
    let delhi = GeoLocation::new(28.6139, 77.2090);
    let jd = 2_460_676.5;

    let mut group = c.benchmark_group("chart");
    group.bench_function("lagna", |b| {
        b.iter(|| lagna(&engine, black_box(jd), &delhi))
    });
    group.bench_function("placidus", |b| {
        let sky = LocalSky::at(jd, &delhi).expect("sky");
        b.iter(|| placidus_cusps(black_box(&sky)))
    });
    group.bench_function("vimshottari_3_levels", |b| {
        b.iter(|| vimshottari(black_box(200.0), black_box(jd), DashaLevel::Pratyantardasha))
    });
    group.bench_function("ashtakoot", |b| {
        let bride = MoonPosition::from_longitude(100.0);
        let groom = MoonPosition::from_longitude(215.0);
        b.iter(|| ashtakoot(black_box(&bride), black_box(&groom)))
    });
    group.finish();
}

fn riseset_bench(c: &mut Criterion) {
    let engine = Engine::analytic();
    let delhi = GeoLocation::new(28.6139, 77.2090);
    let ist = jyotish_time::ist();
    let date = NaiveDate::from_ymd_opt(2025, 1, 1).expect("date");

    c.bench_function("sunrise_delhi", |b| {
        b.iter(|| sunrise(&engine, black_box(date), ist, &delhi))
    });
}

criterion_group!(benches, panchang_primitives_bench, chart_bench, riseset_bench);
criterion_main!(benches);
