// Service module exports

pub mod settings;
pub mod working_days;
