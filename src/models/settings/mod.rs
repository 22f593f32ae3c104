// Settings module
// Display preferences for working-day strings

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

/// Which name column the formatter renders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DisplayLanguage {
    #[default]
    #[serde(rename = "vi")]
    Vietnamese,
    #[serde(rename = "en")]
    English,
}

impl DisplayLanguage {
    pub fn code(&self) -> &'static str {
        match self {
            DisplayLanguage::Vietnamese => "vi",
            DisplayLanguage::English => "en",
        }
    }
}

impl fmt::Display for DisplayLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for DisplayLanguage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "vi" | "vietnamese" => Ok(DisplayLanguage::Vietnamese),
            "en" | "english" => Ok(DisplayLanguage::English),
            other => Err(format!("Unsupported display language: {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatSettings {
    pub language: DisplayLanguage,
    pub log_level: String,
}

impl Default for FormatSettings {
    fn default() -> Self {
        Self {
            language: DisplayLanguage::Vietnamese,
            log_level: "info".to_string(),
        }
    }
}

impl FormatSettings {
    /// Log level as env_logger expects it, trimmed and lowercase
    pub fn log_filter(&self) -> String {
        self.log_level.trim().to_lowercase()
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<(), String> {
        let level = self.log_filter();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(format!(
                "Log level must be one of {}, got '{}'",
                LOG_LEVELS.join(", "),
                self.log_level
            ));
        }

        Ok(())
    }
}
