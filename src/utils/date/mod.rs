// Date utility functions
// Weekday ordering and working-day lookups

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::models::weekday::WEEKDAY_NAMES;
use crate::models::working_days::WorkingDays;

/// Weekday for a 1-based order, Monday = 1 through Sunday = 7
pub fn weekday_from_order(order: u32) -> Option<Weekday> {
    let index = order.checked_sub(1)? as usize;
    WEEKDAY_NAMES.get(index).map(|row| row.weekday)
}

pub fn is_working_day(date: NaiveDate, days: &WorkingDays) -> bool {
    days.contains(date.weekday())
}

/// First working day strictly after `date`.
///
/// None for an empty set, or when the calendar ends before one is found.
pub fn next_working_day(date: NaiveDate, days: &WorkingDays) -> Option<NaiveDate> {
    if days.is_empty() {
        return None;
    }

    (1..=7)
        .filter_map(|offset| date.checked_add_signed(Duration::days(offset)))
        .find(|candidate| is_working_day(*candidate, days))
}
