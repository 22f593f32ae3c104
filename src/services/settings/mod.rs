// Settings service
// Loads display preferences from a TOML file

mod service;

pub use service::{SettingsService, CONFIG_ENV_VAR};
