use chrono::Weekday;

use crate::models::working_days::WorkingDays;
use crate::utils::date::weekday_from_order;

/// Closed run of consecutive weekdays, `start` never after `end`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayRange {
    pub start: Weekday,
    pub end: Weekday,
}

impl DayRange {
    /// Range covering both days, whichever comes first in the week
    pub fn between(a: Weekday, b: Weekday) -> Self {
        if a.number_from_monday() <= b.number_from_monday() {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }

    pub fn single(day: Weekday) -> Self {
        Self {
            start: day,
            end: day,
        }
    }

    pub fn is_single(&self) -> bool {
        self.start == self.end
    }

    pub fn days(&self) -> impl Iterator<Item = Weekday> {
        (self.start.number_from_monday()..=self.end.number_from_monday())
            .filter_map(weekday_from_order)
    }
}

/// Split a set into maximal runs of consecutive days, in weekly order.
pub fn compress(days: &WorkingDays) -> Vec<DayRange> {
    let mut ranges: Vec<DayRange> = Vec::new();

    for day in days.iter() {
        if let Some(last) = ranges.last_mut() {
            if last.end.number_from_monday() + 1 == day.number_from_monday() {
                last.end = day;
                continue;
            }
        }
        ranges.push(DayRange::single(day));
    }

    ranges
}
