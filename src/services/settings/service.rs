use crate::models::settings::FormatSettings;
use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable pointing at an explicit config file
pub const CONFIG_ENV_VAR: &str = "WORKING_DAYS_CONFIG";

const CONFIG_FILE_NAME: &str = "config.toml";

pub struct SettingsService;

impl SettingsService {
    /// Default config location in the platform config directory
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "JobBoard", "WorkingDays")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Config file to read: the explicit path, then the environment
    /// variable, then the default location if it exists.
    pub fn locate(path: Option<&Path>) -> Option<PathBuf> {
        if let Some(path) = path {
            return Some(path.to_path_buf());
        }

        if let Some(env_path) = std::env::var_os(CONFIG_ENV_VAR) {
            return Some(PathBuf::from(env_path));
        }

        Self::default_path().filter(|default_path| default_path.exists())
    }

    /// Load settings.
    ///
    /// An explicit path (argument, then environment variable) must exist.
    /// The default location is optional; when it is absent the built-in
    /// defaults are used.
    pub fn load(path: Option<&Path>) -> Result<FormatSettings> {
        match Self::locate(path) {
            Some(config_path) => Self::load_file(&config_path),
            None => {
                log::info!("No config file found, using default settings");
                Ok(FormatSettings::default())
            }
        }
    }

    /// Read and validate one config file
    pub fn load_file(path: &Path) -> Result<FormatSettings> {
        log::info!("Loading settings from {}", path.display());

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let settings: FormatSettings = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings in {}: {}", path.display(), e))?;

        Ok(settings)
    }

    /// Write settings as TOML, creating parent directories
    pub fn save(path: &Path, settings: &FormatSettings) -> Result<()> {
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let contents = toml::to_string_pretty(settings).context("Failed to serialize settings")?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;

        Ok(())
    }
}
