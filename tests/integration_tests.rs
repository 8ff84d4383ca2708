use bikeshare_explorer::config::Catalog;
use bikeshare_explorer::error::LoadError;
use bikeshare_explorer::filter::{Selector, filter, parse_month, parse_weekday};
use bikeshare_explorer::loader::load_city;
use bikeshare_explorer::pager::{page, raw_page};
use bikeshare_explorer::reports::{BirthYears, ValueCount, summarize};
use bikeshare_explorer::shell::{ScriptedInput, Shell};
use chrono::{Datelike, Month, Weekday};

fn fixtures() -> Catalog {
    Catalog::new(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures"))
}

fn vc(value: &str, count: usize) -> ValueCount {
    ValueCount {
        value: value.to_string(),
        count,
    }
}

#[test]
fn test_derived_fields_match_start_time() {
    let catalog = fixtures();
    for city in ["chicago", "washington"] {
        let dataset = load_city(&catalog, city).expect("Failed to load fixture");
        assert!(!dataset.is_empty());
        for trip in dataset.records() {
            assert_eq!(trip.month.number_from_month(), trip.start_time.month());
            assert_eq!(trip.weekday, trip.start_time.weekday());
        }
    }
}

#[test]
fn test_chicago_full_pipeline() {
    let catalog = fixtures();
    let dataset = load_city(&catalog, "chicago").unwrap();
    let view = filter(&dataset, Selector::All, Selector::All);
    let summary = summarize("chicago", Selector::All, Selector::All, &view);

    assert_eq!(summary.trips, 10);

    let time = summary.time.unwrap();
    assert_eq!(time.month, "January");
    // Friday, Thursday, Wednesday and Monday all have two trips; Friday comes first
    assert_eq!(time.weekday, "Friday");
    assert_eq!(time.start_hour, 14);

    let stations = summary.stations.unwrap();
    assert_eq!(stations.start_station, "Clinton St & Washington Blvd");
    assert_eq!(stations.end_station, "Canal St & Taylor St");
    assert_eq!(
        stations.trip,
        "From: Clinton St & Washington Blvd To: Canal St & Taylor St"
    );

    let durations = summary.durations.unwrap();
    assert_eq!(durations.total_minutes, 110);
    assert_eq!(durations.mean_minutes, 11);

    assert_eq!(
        summary.users.user_types,
        vec![vc("Subscriber", 8), vc("Customer", 2)]
    );
    assert_eq!(
        summary.users.genders,
        Some(vec![vc("Male", 6), vc("Female", 2)])
    );
    assert_eq!(
        summary.users.birth_years,
        Some(BirthYears::Summary {
            earliest: 1964,
            most_recent: 1992,
            most_common: 1992,
        })
    );
}

#[test]
fn test_washington_has_no_demographics() {
    let catalog = fixtures();
    let dataset = load_city(&catalog, "washington").unwrap();
    let month = parse_month("JUNE", &catalog).unwrap();
    let view = filter(&dataset, month, Selector::All);
    let summary = summarize("washington", month, Selector::All, &view);

    assert_eq!(summary.trips, 3);
    assert_eq!(summary.users.genders, None);
    assert_eq!(summary.users.birth_years, None);

    let durations = summary.durations.unwrap();
    assert_eq!(durations.total_minutes, 53);
    assert_eq!(durations.mean_minutes, 17);
}

#[test]
fn test_month_tie_on_filtered_day() {
    let catalog = fixtures();
    let dataset = load_city(&catalog, "washington").unwrap();
    let weekday = parse_weekday("sunday", &catalog).unwrap();
    let view = filter(&dataset, Selector::All, weekday);

    assert_eq!(weekday, Selector::Only(Weekday::Sun));
    let summary = summarize("washington", Selector::All, weekday, &view);
    assert_eq!(summary.time.unwrap().month, "April");
}

#[test]
fn test_no_matching_trips() {
    let catalog = fixtures();
    let dataset = load_city(&catalog, "chicago").unwrap();
    let view = filter(&dataset, Selector::Only(Month::June), Selector::Only(Weekday::Sun));
    let summary = summarize("chicago", Selector::Only(Month::June), Selector::Only(Weekday::Sun), &view);

    assert_eq!(summary.trips, 0);
    assert!(summary.time.is_none());
    assert!(summary.stations.is_none());
    assert!(summary.durations.is_none());
    assert!(summary.users.user_types.is_empty());
    assert_eq!(summary.users.birth_years, Some(BirthYears::NoData));
    assert!(page(&view, 0).is_empty());
}

#[test]
fn test_paging_through_chicago() {
    let catalog = fixtures();
    let dataset = load_city(&catalog, "chicago").unwrap();
    let view = filter(&dataset, Selector::All, Selector::All);

    let second = raw_page(&view, 5);
    assert_eq!(second.len(), 5);
    assert_eq!(second[0].fields[0], ("", "1473887"));

    // past the end: back to the first page
    let wrapped = raw_page(&view, 10);
    assert_eq!(wrapped[0].fields[0], ("", "1423854"));
}

#[test]
fn test_missing_city_file() {
    let catalog = fixtures();
    let err = load_city(&catalog, "new york city").unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
}

#[test]
fn test_shell_session_on_fixtures() {
    let catalog = fixtures();
    let input = ScriptedInput::new(["chicago", "january", "all", "yes", "yes", "no", "no"]);
    let mut shell = Shell::new(&catalog, input, Vec::new());
    shell.run().unwrap();
    let out = String::from_utf8(shell.into_output()).unwrap();

    assert!(out.contains("The most common month is: January"));
    assert!(out.contains("The amount of Customers is 1"));
    assert!(out.contains("The amount of Male users is 2"));
    assert!(out.contains("The earliest year of birth is 1975"));
    // three January trips, so both pages show the same rows
    assert_eq!(out.matches("2017-01-04 08:34:45").count(), 2);
}
