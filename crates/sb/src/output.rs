//! Styled terminal output for build and check runs.

use std::path::Path;

use console::{Style, Term};
use sb_site::BuildReport;

/// Writes progress and results to stderr.
pub(crate) struct Output {
    term: Term,
    title: Style,
    ok: Style,
    failed: Style,
    dim: Style,
}

impl Output {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            term: Term::stderr(),
            title: Style::new().cyan().bold(),
            ok: Style::new().green(),
            failed: Style::new().red().bold(),
            dim: Style::new().dim(),
        }
    }

    /// Announce the site being processed.
    pub(crate) fn start(&self, action: &str, site_title: &str, source_dir: &Path) {
        self.line(&format!("{} {}", self.title.apply_to(action), site_title));
        self.line(
            &self
                .dim
                .apply_to(format!("  docs: {}", source_dir.display()))
                .to_string(),
        );
    }

    /// Report a successful build that wrote to `output_dir`.
    pub(crate) fn built(&self, report: BuildReport, output_dir: &Path) {
        self.line(&format!(
            "{} {} to {}",
            self.ok.apply_to("✔ Built"),
            counts(report),
            output_dir.display()
        ));
    }

    /// Report a successful check.
    pub(crate) fn checked(&self, report: BuildReport) {
        self.line(&format!("{} {}", self.ok.apply_to("✔ OK"), counts(report)));
    }

    /// Print a fatal error.
    pub(crate) fn error(&self, msg: &str) {
        self.line(&format!("{} {msg}", self.failed.apply_to("✘ Error:")));
    }

    fn line(&self, text: &str) {
        let _ = self.term.write_line(text);
    }
}

fn counts(report: BuildReport) -> String {
    format!(
        "{} pages, {} static files",
        report.pages, report.static_files
    )
}
