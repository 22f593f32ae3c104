// Working Days Library
// Format weekday sets as compact ranges and parse them back

pub mod models;
pub mod services;
pub mod utils;

pub use models::settings::DisplayLanguage;
pub use models::working_days::WorkingDays;
pub use services::working_days::{format_working_days, parse_working_days};
