// Module exports for models

pub mod settings;
pub mod weekday;
pub mod working_days;
