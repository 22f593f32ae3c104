// Working Days CLI
// Main entry point

mod args;

use anyhow::{Context, Result};
use args::{Args, Command};
use clap::Parser;
use working_days::models::settings::FormatSettings;
use working_days::models::weekday::checkbox_options;
use working_days::models::working_days::WorkingDays;
use working_days::services::settings::SettingsService;
use working_days::services::working_days::{format_days, parse_working_days};

fn main() -> Result<()> {
    let args = Args::parse();

    let mut settings = SettingsService::load(args.config.as_deref())?;
    if let Some(language) = args.language {
        settings.language = language;
    }

    init_logging(&settings);
    // Loading happens before the logger exists, so report the source here
    match SettingsService::locate(args.config.as_deref()) {
        Some(path) => log::info!("Loaded settings from {}", path.display()),
        None => log::info!("No config file found, using default settings"),
    }
    log::debug!("Effective settings: {:?}", settings);

    match args.command {
        Command::Format { days } => {
            let set = WorkingDays::from_names(&days);
            println!("{}", format_days(&set, settings.language));
        }
        Command::Parse { text, json } => {
            let names = parse_working_days(&text);
            if json {
                println!(
                    "{}",
                    serde_json::to_string(&names).context("Failed to encode names")?
                );
            } else {
                for name in names {
                    println!("{}", name);
                }
            }
        }
        Command::Options => {
            let options = checkbox_options(settings.language);
            println!(
                "{}",
                serde_json::to_string_pretty(&options).context("Failed to encode options")?
            );
        }
        Command::WriteConfig { path } => {
            SettingsService::save(&path, &settings)?;
            log::info!("Wrote settings to {}", path.display());
        }
    }

    Ok(())
}

fn init_logging(settings: &FormatSettings) {
    // RUST_LOG wins over the configured level
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(settings.log_filter()),
    )
    .init();
}
