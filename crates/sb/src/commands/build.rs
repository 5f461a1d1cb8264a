//! `sb build` command implementation.

use std::path::PathBuf;

use clap::Args;
use sb_site::SiteBuilder;

use super::CommonArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Output directory (overrides config).
    #[arg(short, long)]
    output_dir: Option<PathBuf>,
}

impl BuildArgs {
    /// Execute the build command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails to load or the build fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.common.load_config(self.output_dir)?;

        output.start("Building", &config.site.title, &config.docs_resolved.source_dir);

        let output_dir = config.build_resolved.output_dir.clone();
        let report = SiteBuilder::new(config).build()?;

        output.built(report, &output_dir);
        Ok(())
    }
}
