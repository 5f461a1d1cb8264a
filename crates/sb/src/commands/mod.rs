//! CLI command implementations.

pub(crate) mod build;
pub(crate) mod check;

use std::path::PathBuf;

use clap::Args;
use sb_config::{CliSettings, Config};

use crate::error::CliError;

pub(crate) use build::BuildArgs;
pub(crate) use check::CheckArgs;

/// Arguments shared by every command that loads the site configuration.
#[derive(Args)]
pub(crate) struct CommonArgs {
    /// Path to configuration file (default: auto-discover sb.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Documentation source directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Site base URL, such as `/snake-bytes/` (overrides config).
    #[arg(long)]
    base_url: Option<String>,

    /// Enable verbose output (show timing logs and link reports).
    #[arg(short, long)]
    pub verbose: bool,
}

impl CommonArgs {
    /// Load the configuration with command-line overrides applied.
    pub(crate) fn load_config(self, output_dir: Option<PathBuf>) -> Result<Config, CliError> {
        let cli_settings = CliSettings {
            source_dir: self.source_dir,
            output_dir,
            base_url: self.base_url,
        };
        Ok(Config::load(self.config.as_deref(), Some(&cli_settings))?)
    }
}
