// Property-based tests for working-day formatting
// Random subsets of the week must survive a format/parse round trip

use proptest::prelude::*;
use working_days::models::weekday::WEEKDAY_NAMES;
use working_days::{format_working_days, parse_working_days, DisplayLanguage, WorkingDays};

/// Random selection of canonical names, possibly with duplicates, any order
fn day_names() -> impl Strategy<Value = Vec<&'static str>> {
    prop::collection::vec(prop::sample::select(WEEKDAY_NAMES.map(|row| row.canonical).to_vec()), 0..12)
}

fn as_set(names: &[&str]) -> WorkingDays {
    WorkingDays::from_names(names)
}

proptest! {
    /// Property: parsing the formatted string recovers the same set
    #[test]
    fn prop_round_trip(names in day_names()) {
        let display = format_working_days(&names);
        let parsed = parse_working_days(&display);
        prop_assert_eq!(WorkingDays::from_names(&parsed), as_set(&names));
    }

    /// Property: the round trip also holds for English display strings
    #[test]
    fn prop_round_trip_english(names in day_names()) {
        let set = as_set(&names);
        let display = set.display(DisplayLanguage::English);
        prop_assert_eq!(display.parse::<WorkingDays>().unwrap(), set);
    }

    /// Property: input order does not change the output
    #[test]
    fn prop_order_independent(names in day_names()) {
        let mut reversed = names.clone();
        reversed.reverse();
        prop_assert_eq!(format_working_days(&names), format_working_days(&reversed));
    }

    /// Property: empty output exactly when no days were selected
    #[test]
    fn prop_empty_iff_no_days(names in day_names()) {
        prop_assert_eq!(format_working_days(&names).is_empty(), names.is_empty());
    }

    /// Property: parsing arbitrary text never panics and yields valid names
    #[test]
    fn prop_parse_is_total(text in ".{0,40}") {
        let parsed = parse_working_days(&text);
        prop_assert!(parsed.len() <= 7);
        prop_assert!(parsed
            .iter()
            .all(|name| WEEKDAY_NAMES.iter().any(|row| row.canonical == name.as_str())));
    }
}
