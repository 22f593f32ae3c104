// Unit tests for the public weekday table
// Checks the lookup structure the formatter and parser rely on

use chrono::Weekday;
use test_case::test_case;
use working_days::models::weekday::{
    canonical_name, find_in_text, from_canonical_name, localized_name, WEEKDAY_NAMES,
};
use working_days::WorkingDays;

#[test]
fn test_table_has_seven_distinct_days() {
    let seen: WorkingDays = WEEKDAY_NAMES.iter().map(|row| row.weekday).collect();
    assert_eq!(seen.len(), WEEKDAY_NAMES.len());
    assert_eq!(seen.len(), 7);
}

#[test]
fn test_no_name_contains_another() {
    // Substring matching must not resolve one day's name to another day
    for row in WEEKDAY_NAMES.iter() {
        for name in [row.canonical, row.localized] {
            assert_eq!(find_in_text(name), Some(row.weekday), "matching {:?}", name);
        }
    }
}

#[test_case("Monday", Weekday::Mon)]
#[test_case("Thursday", Weekday::Thu)]
#[test_case("Sunday", Weekday::Sun)]
fn test_canonical_lookup_round_trip(name: &str, weekday: Weekday) {
    assert_eq!(from_canonical_name(name), Some(weekday));
    assert_eq!(canonical_name(weekday), name);
}

#[test_case(Weekday::Tue, "Thứ Ba")]
#[test_case(Weekday::Fri, "Thứ Sáu")]
fn test_localized_names(weekday: Weekday, expected: &str) {
    assert_eq!(localized_name(weekday), expected);
}
