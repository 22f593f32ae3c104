use crate::models::weekday::find_in_text;
use crate::models::working_days::WorkingDays;

use super::ranges::DayRange;

/// Recover canonical weekday names from a display string.
///
/// Accepts the formatter's output in either language as well as looser
/// text: each comma separated segment is either a `start - end` range or
/// a single day. Segments that name no day are skipped, so the result may
/// be empty but parsing never fails. Names come back in weekly order.
pub fn parse_working_days(text: &str) -> Vec<String> {
    parse_days(text).to_names()
}

/// Parse a display string into a weekday set.
pub fn parse_days(text: &str) -> WorkingDays {
    let mut days = WorkingDays::new();

    if text.trim().is_empty() {
        return days;
    }

    let segments: Vec<&str> = if text.contains(',') {
        text.split(',').map(str::trim).collect()
    } else {
        vec![text.trim()]
    };

    for segment in segments {
        match parse_segment(segment) {
            Some(range) => days.extend(range.days()),
            None => log::debug!("Skipping unrecognized working-days segment {:?}", segment),
        }
    }

    days
}

fn parse_segment(segment: &str) -> Option<DayRange> {
    if segment.contains('-') {
        // Only the first two pieces count, like "Thứ Hai - Thứ Sáu"
        let mut parts = segment.split('-');
        let start = find_in_text(parts.next()?)?;
        let end = find_in_text(parts.next()?)?;
        Some(DayRange::between(start, end))
    } else {
        find_in_text(segment).map(DayRange::single)
    }
}
