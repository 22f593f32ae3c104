// Weekday module
// Bilingual weekday name table and lookups

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::settings::DisplayLanguage;

/// One row of the weekday name table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekdayName {
    pub weekday: Weekday,
    /// Canonical (English) name, used as the stored value
    pub canonical: &'static str,
    /// Vietnamese display name
    pub localized: &'static str,
}

/// Weekday names in canonical weekly order (Monday first)
pub const WEEKDAY_NAMES: [WeekdayName; 7] = [
    WeekdayName {
        weekday: Weekday::Mon,
        canonical: "Monday",
        localized: "Thứ Hai",
    },
    WeekdayName {
        weekday: Weekday::Tue,
        canonical: "Tuesday",
        localized: "Thứ Ba",
    },
    WeekdayName {
        weekday: Weekday::Wed,
        canonical: "Wednesday",
        localized: "Thứ Tư",
    },
    WeekdayName {
        weekday: Weekday::Thu,
        canonical: "Thursday",
        localized: "Thứ Năm",
    },
    WeekdayName {
        weekday: Weekday::Fri,
        canonical: "Friday",
        localized: "Thứ Sáu",
    },
    WeekdayName {
        weekday: Weekday::Sat,
        canonical: "Saturday",
        localized: "Thứ Bảy",
    },
    WeekdayName {
        weekday: Weekday::Sun,
        canonical: "Sunday",
        localized: "Chủ Nhật",
    },
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WeekdayError {
    #[error("unknown weekday name: {0:?}")]
    UnknownName(String),
}

/// Checkbox option for a working-days multi-select
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayOption {
    pub value: String,
    pub label: String,
}

fn entry(weekday: Weekday) -> &'static WeekdayName {
    &WEEKDAY_NAMES[weekday.num_days_from_monday() as usize]
}

pub fn canonical_name(weekday: Weekday) -> &'static str {
    entry(weekday).canonical
}

pub fn localized_name(weekday: Weekday) -> &'static str {
    entry(weekday).localized
}

/// Name shown to the user for the given language
pub fn display_name(weekday: Weekday, language: DisplayLanguage) -> &'static str {
    match language {
        DisplayLanguage::Vietnamese => localized_name(weekday),
        DisplayLanguage::English => canonical_name(weekday),
    }
}

/// Exact lookup by canonical name ("Monday" .. "Sunday")
pub fn from_canonical_name(name: &str) -> Option<Weekday> {
    WEEKDAY_NAMES
        .iter()
        .find(|row| row.canonical == name)
        .map(|row| row.weekday)
}

/// First weekday, in weekly order, whose canonical or localized name
/// occurs anywhere in `text`.
pub fn find_in_text(text: &str) -> Option<Weekday> {
    WEEKDAY_NAMES
        .iter()
        .find(|row| text.contains(row.canonical) || text.contains(row.localized))
        .map(|row| row.weekday)
}

/// Case-insensitive exact match on either name column.
pub fn strict_from_name(name: &str) -> Result<Weekday, WeekdayError> {
    let wanted = name.trim().to_lowercase();
    WEEKDAY_NAMES
        .iter()
        .find(|row| row.canonical.to_lowercase() == wanted || row.localized.to_lowercase() == wanted)
        .map(|row| row.weekday)
        .ok_or_else(|| WeekdayError::UnknownName(name.to_string()))
}

/// Replace canonical day names inside a label with their Vietnamese form.
///
/// Text that is not a day name is left as is, so an already localized
/// label passes through unchanged.
pub fn localize_label(label: &str) -> String {
    WEEKDAY_NAMES
        .iter()
        .fold(label.to_string(), |acc, row| acc.replace(row.canonical, row.localized))
}

/// The seven options of a working-days checkbox group, Monday first
pub fn checkbox_options(language: DisplayLanguage) -> Vec<DayOption> {
    WEEKDAY_NAMES
        .iter()
        .map(|row| DayOption {
            value: row.canonical.to_string(),
            label: display_name(row.weekday, language).to_string(),
        })
        .collect()
}
