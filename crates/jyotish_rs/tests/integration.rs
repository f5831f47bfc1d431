//! End-to-end checks of the high-level API on the analytic backend.
//!
//! `init` is never called, so every test runs on the lazily installed
//! default engine and IST.

use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Utc};
use jyotish_rs::*;

const DELHI: (f64, f64) = (28.6139, 77.2090);
const WARANGAL: (f64, f64) = (17.9787, 79.5581);

fn query() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).single().expect("instant")
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn kundali(language: &str) -> FullKundali {
    calculate_full_kundali(
        "Warangal",
        "1997-08-16",
        "23:01",
        WARANGAL.0,
        WARANGAL.1,
        language,
        query(),
    )
    .expect("kundali")
}

fn field_of(err: JyotishError) -> &'static str {
    match err {
        JyotishError::InvalidInput { field, .. } => field,
        other => panic!("expected invalid input, got {other:?}"),
    }
}

#[test]
fn full_kundali_is_deterministic() {
    let a = kundali("en");
    let b = kundali("en");
    assert_eq!(a, b);
    assert_eq!(
        serde_json::to_string(&a).expect("json"),
        serde_json::to_string(&b).expect("json")
    );
    assert_eq!(a.chart.planets.len(), 9);
    assert_eq!(a.yogas.len(), 17);
    assert!(a.current_dasha.is_some());
}

#[test]
fn language_changes_only_the_text() {
    let en = kundali("en");
    let hi = kundali("hi-IN");
    assert_eq!(en.language, Language::En);
    assert_eq!(hi.language, Language::Hi);
    assert_eq!(en.chart, hi.chart);
    assert_eq!(en.dasha, hi.dasha);
    assert_eq!(en.current_dasha, hi.current_dasha);
    assert_eq!(en.yogas.len(), hi.yogas.len());
    for (e, h) in en.yogas.iter().zip(&hi.yogas) {
        assert_eq!(e.id, h.id);
        assert_eq!(e.is_active, h.is_active);
        assert_eq!(e.strength, h.strength);
        assert_eq!(e.reasons, h.reasons);
        assert_eq!(e.detail, h.detail);
        assert_eq!(e.sade_sati, h.sade_sati);
    }
    let en_stone = en.gemstone.map(|g| (g.primary, g.secondary));
    let hi_stone = hi.gemstone.map(|g| (g.primary, g.secondary));
    assert_eq!(en_stone, hi_stone);
}

#[test]
fn unknown_language_falls_back_to_english() {
    let fr = kundali("fr");
    assert_eq!(fr.language, Language::En);
    assert_eq!(fr, kundali("en"));
}

#[test]
fn bad_birth_input_is_rejected() {
    let err = calculate_full_kundali("x", "1997-13-40", "23:01", 17.0, 79.0, "en", query())
        .expect_err("bad date");
    assert_eq!(field_of(err), "dob");
    let err = calculate_full_kundali("x", "1997-08-16", "25:99", 17.0, 79.0, "en", query())
        .expect_err("bad time");
    assert_eq!(field_of(err), "tob");
    let err = calculate_full_kundali("x", "1997-08-16", "23:01", 91.0, 79.0, "en", query())
        .expect_err("bad latitude");
    assert_eq!(field_of(err), "location");
}

#[test]
fn panchang_for_a_day() {
    let p = panchang("2025-10-05", DELHI.0, DELHI.1, "en").expect("panchang");
    assert_eq!(p.event.date, date(2025, 10, 5));
    assert!(p.event.sunrise < p.event.sunset);
    assert!((1..=30).contains(&p.event.tithi.number));
    assert!(p.title.contains(p.event.nakshatra.name));

    let hi = panchang("2025-10-05", DELHI.0, DELHI.1, "hi").expect("panchang");
    assert_eq!(hi.event, p.event);
    assert_ne!(hi.title, p.title);

    let err = panchang("2025-10-05", 95.0, DELHI.1, "en").expect_err("latitude");
    assert_eq!(field_of(err), "location");
    let err = panchang("05/10/2025", DELHI.0, DELHI.1, "en").expect_err("format");
    assert_eq!(field_of(err), "date");
}

#[test]
fn today_and_tomorrow_are_consecutive() {
    let both = today_and_tomorrow("2025-12-31", DELHI.0, DELHI.1, "en").expect("two days");
    assert_eq!(both.selected_date.event.date, date(2025, 12, 31));
    assert_eq!(both.next_date.event.date, date(2026, 1, 1));
    let one = panchang("2026-01-01", DELHI.0, DELHI.1, "en").expect("panchang");
    assert_eq!(both.next_date, one);
}

#[test]
fn panchang_range_is_ordered_and_bounded() {
    let days = panchang_range("2025-01-30", "2025-02-03", DELHI.0, DELHI.1).expect("range");
    let dates: Vec<_> = days.iter().map(|d| d.date).collect();
    let expected: Vec<_> = date(2025, 1, 30).iter_days().take(5).collect();
    assert_eq!(dates, expected);

    let single = panchang_range("2025-01-30", "2025-01-30", DELHI.0, DELHI.1).expect("one day");
    assert_eq!(single.len(), 1);

    let err = panchang_range("2025-01-01", "2026-01-03", DELHI.0, DELHI.1).expect_err("too long");
    assert_eq!(field_of(err), "end");
    let err = panchang_range("2025-02-01", "2025-01-01", DELHI.0, DELHI.1).expect_err("reversed");
    assert_eq!(field_of(err), "end");
}

#[test]
fn next_ekadashi_from_new_year_2025() {
    let e = find_next_ekadashi("2025-01-01", DELHI.0, DELHI.1, "en")
        .expect("search")
        .expect("ekadashi");
    assert_eq!(e.event.date, date(2025, 1, 10));
    assert_eq!(e.event.tithi, 11);
    assert!(!e.title.is_empty());

    let hi = find_next_ekadashi("2025-01-01", DELHI.0, DELHI.1, "hi")
        .expect("search")
        .expect("ekadashi");
    assert_eq!(hi.event, e.event);
    assert_ne!(hi.title, e.title);
}

#[test]
fn festivals_of_2025() {
    let holi = find_next_holi("2025-01-01", DELHI.0, DELHI.1, "en")
        .expect("search")
        .expect("holi");
    assert_eq!(holi.event.dahan_date, date(2025, 3, 13));
    assert_eq!(holi.event.dhulandi_date, date(2025, 3, 14));

    let shivratri = find_next_shivratri("2025-02-20", DELHI.0, DELHI.1, "en")
        .expect("search")
        .expect("shivratri");
    assert_eq!(shivratri.event.date, date(2025, 2, 26));
    assert_eq!(shivratri.event.name, "Maha Shivratri");

    let sankranti = find_next_sankranti("2025-01-01", DELHI.0, DELHI.1, "en")
        .expect("search")
        .expect("sankranti");
    assert_eq!(sankranti.event.rashi, Rashi::Capricorn);
    assert_eq!(sankranti.event.date.month(), 1);
}

#[test]
fn every_vrat_search_finds_something_within_two_months() {
    let from = "2025-01-01";
    let searches = [
        find_next_ekadashi,
        find_next_pradosh,
        find_next_sankashti,
        find_next_amavasya,
        find_next_purnima,
        find_next_vinayaka,
        find_next_shivratri,
    ];
    for search in searches {
        let found = search(from, DELHI.0, DELHI.1, "en")
            .expect("search")
            .expect("observance");
        assert!(found.event.date >= date(2025, 1, 1));
        assert!(found.event.date <= date(2025, 3, 2));
    }
}

#[test]
fn titled_events_flatten_in_json() {
    let e = find_next_purnima("2025-01-01", DELHI.0, DELHI.1, "en")
        .expect("search")
        .expect("purnima");
    let v = serde_json::to_value(&e).expect("json");
    assert!(v.get("title").is_some_and(|t| t.is_string()));
    assert!(v.get("date").is_some());
    assert!(v.get("event").is_none());
}

#[test]
fn adhik_month_of_2023() {
    let found = adhik_maas(2023).expect("adhik");
    assert_eq!(found.len(), 1);
}

#[test]
fn ingress_lists() {
    let jupiter = next_ingresses("Jupiter", 3, "2025-01-01").expect("scan");
    assert_eq!(jupiter.len(), 3);
    assert!(jupiter.windows(2).all(|w| w[0].entering_date < w[1].entering_date));
    assert!(jupiter.iter().all(|e| e.graha == Graha::Jupiter));

    assert!(next_ingresses("Saturn", 0, "2025-01-01").expect("empty").is_empty());

    let prev = prev_ingresses("mars", 2, "2025-01-01").expect("scan");
    assert_eq!(prev.len(), 2);
    assert!(prev[0].entering_date < prev[1].entering_date);
    assert!(prev[1].entering_date <= date(2025, 1, 1));

    let err = next_ingresses("Pluto", 1, "2025-01-01").expect_err("unknown planet");
    assert_eq!(field_of(err), "planet");
}

#[test]
fn positions_now() {
    let now = current_positions(query()).expect("positions");
    assert_eq!(now.positions.len(), 9);
    let saturn = now.get(Graha::Saturn).expect("saturn");
    assert_eq!(saturn.sign, Rashi::Aquarius);
}

#[test]
fn sade_sati_report() {
    let r = sade_sati("1997-08-16", "23:01", WARANGAL.0, WARANGAL.1, query()).expect("report");
    assert_eq!(r.query_date, date(2025, 1, 1));
    assert_eq!(r.saturn_sign, Rashi::Aquarius);
    assert!(!r.cycles.is_empty());
    assert!(r.cycles.iter().all(|c| c.moon_sign == r.moon_sign));
    assert_eq!(r.current, r.cycles.iter().find(|c| c.contains(r.query_date)).copied());
    assert_eq!(r.current.is_some(), r.phase.is_some());
}

#[test]
fn ashtakoot_cancer_pushya_with_scorpio_anuradha() {
    let bride = moon_position("Cancer", 8.0, "Pushya", 2).expect("bride");
    let groom = moon_position("Scorpio", 11.0, "Anuradha", 3).expect("groom");
    let r = ashtakoot(&bride, &groom);
    assert_eq!(r.kootas.len(), 8);
    assert!(r.kootas.iter().all(|k| k.score >= 0.0 && k.score <= k.max));
    assert_eq!(r.max, 36.0);
    assert_eq!(r.total, 17.0);
    assert_eq!(r.verdict, Verdict::Low);

    let from_longitudes = ashtakoot(&moon_at(98.0).expect("bride"), &moon_at(221.0).expect("groom"));
    assert_eq!(from_longitudes, r);
}

#[test]
fn ashtakoot_rejects_inconsistent_moons() {
    let err = moon_position("Scorpio", 11.0, "Pushya", 3).expect_err("wrong star");
    assert_eq!(field_of(err), "nakshatra");
}
