use clap::{Parser, Subcommand};
use std::path::PathBuf;
use working_days::models::settings::DisplayLanguage;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    // -c Config file, overrides WORKING_DAYS_CONFIG and the default location
    #[clap(short, long, value_parser)]
    pub config: Option<PathBuf>,
    // -l Display language (vi, en)
    #[clap(short, long, value_parser)]
    pub language: Option<DisplayLanguage>,
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Format canonical day names, e.g. `format Monday Tuesday Friday`
    Format {
        #[clap(value_parser)]
        days: Vec<String>,
    },
    /// Parse a display string back into canonical day names
    Parse {
        #[clap(value_parser)]
        text: String,
        /// Print a JSON array instead of one name per line
        #[clap(long)]
        json: bool,
    },
    /// Print the checkbox options as JSON
    Options,
    /// Write the effective settings to the given path
    WriteConfig {
        #[clap(value_parser)]
        path: PathBuf,
    },
}
