pub mod settings;

use clap::Parser;

pub use settings::Settings;

pub const DEFAULT_SETTINGS_FILE: &str = "links-import.toml";

#[derive(Debug, Clone, Parser)]
#[command(name = "links-import")]
#[command(about = "Bulk-create short links from a CSV file")]
pub struct CliArgs {
    /// CSV file with slug,destination rows (no header)
    pub csv_file: String,

    /// Path to settings file
    #[arg(short, long, default_value = DEFAULT_SETTINGS_FILE)]
    pub config: String,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
