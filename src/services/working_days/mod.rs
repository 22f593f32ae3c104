// Working days service
// Compact display strings for weekday sets, and the inverse parse

mod formatter;
mod parser;
pub mod ranges;

pub use formatter::{format_days, format_working_days};
pub use parser::{parse_days, parse_working_days};
pub use ranges::DayRange;
