//! `sb check` command implementation.

use clap::Args;
use sb_site::SiteBuilder;

use super::CommonArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails to load or the site doesn't render.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.common.load_config(None)?;

        output.start("Checking", &config.site.title, &config.docs_resolved.source_dir);

        let report = SiteBuilder::new(config).render()?.report();

        output.checked(report);
        Ok(())
    }
}
