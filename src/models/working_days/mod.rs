// Working days module
// Set of weekdays an employer operates, persisted as a display string

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use super::settings::DisplayLanguage;
use super::weekday::{self, WeekdayError, WEEKDAY_NAMES};
use crate::services::working_days::{format_days, parse_days};

/// A set of distinct weekdays.
///
/// Stored as a bit mask indexed from Monday, so iteration is always in
/// canonical weekly order regardless of insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub struct WorkingDays {
    mask: u8,
}

fn bit(day: Weekday) -> u8 {
    1 << day.num_days_from_monday()
}

impl WorkingDays {
    pub fn new() -> Self {
        Self::default()
    }

    /// Monday through Friday
    pub fn weekdays() -> Self {
        [Weekday::Mon, Weekday::Tue, Weekday::Wed, Weekday::Thu, Weekday::Fri]
            .into_iter()
            .collect()
    }

    /// Returns true if the day was not already present
    pub fn insert(&mut self, day: Weekday) -> bool {
        let added = !self.contains(day);
        self.mask |= bit(day);
        added
    }

    /// Returns true if the day was present
    pub fn remove(&mut self, day: Weekday) -> bool {
        let present = self.contains(day);
        self.mask &= !bit(day);
        present
    }

    pub fn contains(&self, day: Weekday) -> bool {
        self.mask & bit(day) != 0
    }

    pub fn len(&self) -> usize {
        self.mask.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.mask == 0
    }

    /// Days in weekly order, Monday first
    pub fn iter(&self) -> impl Iterator<Item = Weekday> + '_ {
        WEEKDAY_NAMES
            .iter()
            .map(|row| row.weekday)
            .filter(move |day| self.contains(*day))
    }

    /// Build from canonical names, skipping anything outside the vocabulary
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Self {
        names
            .iter()
            .filter_map(|name| {
                let day = weekday::from_canonical_name(name.as_ref());
                if day.is_none() {
                    log::debug!("Ignoring unknown weekday name {:?}", name.as_ref());
                }
                day
            })
            .collect()
    }

    /// Build from day names in either language, failing on the first unknown one
    pub fn try_from_names<S: AsRef<str>>(names: &[S]) -> Result<Self, WeekdayError> {
        names
            .iter()
            .map(|name| weekday::strict_from_name(name.as_ref()))
            .collect()
    }

    /// Canonical names in weekly order
    pub fn to_names(&self) -> Vec<String> {
        self.iter()
            .map(|day| weekday::canonical_name(day).to_string())
            .collect()
    }

    pub fn display(&self, language: DisplayLanguage) -> String {
        format_days(self, language)
    }
}

impl FromIterator<Weekday> for WorkingDays {
    fn from_iter<I: IntoIterator<Item = Weekday>>(iter: I) -> Self {
        let mut days = WorkingDays::new();
        days.extend(iter);
        days
    }
}

impl Extend<Weekday> for WorkingDays {
    fn extend<I: IntoIterator<Item = Weekday>>(&mut self, iter: I) {
        for day in iter {
            self.insert(day);
        }
    }
}

impl fmt::Display for WorkingDays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_days(self, DisplayLanguage::Vietnamese))
    }
}

impl FromStr for WorkingDays {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(parse_days(s))
    }
}

impl From<String> for WorkingDays {
    fn from(value: String) -> Self {
        parse_days(&value)
    }
}

impl From<WorkingDays> for String {
    fn from(value: WorkingDays) -> Self {
        value.to_string()
    }
}

/// Working-days fragment of an employer profile as exchanged with the backend
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkingDaysProfile {
    #[serde(default)]
    pub working_days: WorkingDays,
}
