use crate::models::settings::DisplayLanguage;
use crate::models::weekday::display_name;
use crate::models::working_days::WorkingDays;

use super::ranges::compress;

const GROUP_SEPARATOR: &str = ", ";
const RANGE_SEPARATOR: &str = " - ";

/// Format canonical weekday names ("Monday" .. "Sunday") as a compact
/// Vietnamese display string such as `"Thứ Hai - Thứ Sáu"`.
///
/// Input order and duplicates do not matter. Names outside the seven-day
/// vocabulary are ignored, and an empty input gives an empty string.
pub fn format_working_days<S: AsRef<str>>(days: &[S]) -> String {
    format_days(&WorkingDays::from_names(days), DisplayLanguage::Vietnamese)
}

/// Format a weekday set, merging consecutive days into ranges.
pub fn format_days(days: &WorkingDays, language: DisplayLanguage) -> String {
    compress(days)
        .iter()
        .map(|range| {
            if range.is_single() {
                display_name(range.start, language).to_string()
            } else {
                format!(
                    "{}{}{}",
                    display_name(range.start, language),
                    RANGE_SEPARATOR,
                    display_name(range.end, language)
                )
            }
        })
        .collect::<Vec<_>>()
        .join(GROUP_SEPARATOR)
}
