use std::time::{Duration, Instant};

use world_clock::config::SearchConfig;
use world_clock::search::*;
use world_clock::types::Coordinate;
use world_clock::zone::ClockZone;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

// ── Debounce timing ──

#[test]
fn test_query_issued_after_quiet_period() {
    let t0 = Instant::now();
    let mut search = SearchDebouncer::default();
    assert_eq!(
        search.input("Par", t0),
        InputOutcome::Scheduled { deadline: t0 + ms(200) }
    );
    assert_eq!(search.poll(t0 + ms(199)), None);

    let query = search.poll(t0 + ms(200)).unwrap();
    assert_eq!(query.text, "Par");
    assert_eq!(query.sequence, 1);
    assert_eq!(search.deadline(), None);
    assert_eq!(search.poll(t0 + ms(500)), None);
}

#[test]
fn test_each_keystroke_rearms_the_timer() {
    let t0 = Instant::now();
    let mut search = SearchDebouncer::default();
    search.input("P", t0);
    search.input("Pa", t0 + ms(150));
    search.input("Par", t0 + ms(300));
    assert_eq!(search.poll(t0 + ms(350)), None);
    assert_eq!(search.deadline(), Some(t0 + ms(500)));

    let query = search.poll(t0 + ms(500)).unwrap();
    assert_eq!(query.text, "Par");
    assert_eq!(query.sequence, 1);
}

#[test]
fn test_custom_debounce() {
    let t0 = Instant::now();
    let mut search = SearchDebouncer::new(SearchConfig { debounce: ms(50) });
    search.input("Oslo", t0);
    assert!(search.poll(t0 + ms(50)).is_some());
}

#[test]
fn test_empty_input_clears_immediately() {
    let t0 = Instant::now();
    let mut search = SearchDebouncer::default();
    search.input("Lon", t0);
    assert_eq!(search.input("", t0 + ms(10)), InputOutcome::Cleared);
    assert_eq!(search.deadline(), None);
    assert_eq!(search.poll(t0 + ms(1000)), None);
}

// ── Stale results ──

#[test]
fn test_only_latest_query_accepted() {
    let t0 = Instant::now();
    let mut search = SearchDebouncer::default();
    search.input("Ber", t0);
    let first = search.poll(t0 + ms(200)).unwrap();
    assert!(search.accept(first.sequence));

    search.input("Berl", t0 + ms(300));
    let second = search.poll(t0 + ms(500)).unwrap();
    assert_eq!(second.sequence, 2);
    assert!(!search.accept(first.sequence));
    assert!(search.accept(second.sequence));
}

#[test]
fn test_clear_drops_in_flight_results() {
    let t0 = Instant::now();
    let mut search = SearchDebouncer::default();
    search.input("Rom", t0);
    let query = search.poll(t0 + ms(200)).unwrap();
    search.input("", t0 + ms(250));
    assert!(!search.accept(query.sequence));

    search.input("Rome", t0 + ms(300));
    let next = search.poll(t0 + ms(500)).unwrap();
    assert!(search.accept(next.sequence));
}

#[test]
fn test_nothing_accepted_before_first_query() {
    let search = SearchDebouncer::default();
    assert!(!search.accept(0));
    assert!(!search.accept(1));
}

// ── Completions ──

#[test]
fn test_city_completions_keep_rows_with_region() {
    let results = vec![
        SearchCompletion::new("Paris", "France"),
        SearchCompletion::new("Paris Baguette", ""),
        SearchCompletion::new("Paris", "TX, United States"),
    ];
    let cities = city_completions(results);
    assert_eq!(
        cities,
        vec![
            SearchCompletion::new("Paris", "France"),
            SearchCompletion::new("Paris", "TX, United States"),
        ]
    );
}

#[test]
fn test_completion_into_location() {
    let coordinate = Coordinate::new(48.8566, 2.3522).unwrap();
    let location = SearchCompletion::new("Paris", "France")
        .into_location(coordinate, "Europe/Paris")
        .unwrap();
    assert_eq!(location.name, "Paris");
    assert_eq!(location.coordinate(), coordinate);
    assert_eq!(location.time_zone, "Europe/Paris");
    assert!(matches!(location.zone(), ClockZone::Named(_)));
}

#[test]
fn test_completion_with_bad_coordinate_rejected() {
    let coordinate = Coordinate {
        latitude: f64::NAN,
        longitude: 2.3522,
    };
    assert!(SearchCompletion::new("Paris", "France")
        .into_location(coordinate, "Europe/Paris")
        .is_err());
}
