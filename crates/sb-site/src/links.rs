//! Internal link checking and broken link policies.

use std::collections::BTreeSet;
use std::fmt;

use sb_config::{ReportingSeverity, SiteMetadata};
use sb_renderer::{LinkKind, split_internal_link};

use crate::BuildError;

/// Where a checked link was written.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LinkOrigin {
    Navbar,
    Footer,
    Landing,
    Favicon,
    /// A document, by source path relative to the docs directory.
    Document(String),
}

impl fmt::Display for LinkOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Navbar => f.write_str("navbar"),
            Self::Footer => f.write_str("footer"),
            Self::Landing => f.write_str("landing page"),
            Self::Favicon => f.write_str("favicon"),
            Self::Document(path) => f.write_str(path),
        }
    }
}

/// An internal link whose target doesn't exist.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BrokenLink {
    pub origin: LinkOrigin,
    pub kind: LinkKind,
    /// Target as written.
    pub target: String,
}

impl fmt::Display for BrokenLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} links to {}", self.origin, self.target)
    }
}

/// Set of valid link targets: page routes and static file paths.
#[derive(Debug, Default)]
pub struct LinkChecker {
    targets: BTreeSet<String>,
    broken: Vec<BrokenLink>,
}

impl LinkChecker {
    pub fn new<R, S>(routes: R, static_files: S) -> Self
    where
        R: IntoIterator<Item = String>,
        S: IntoIterator<Item = String>,
    {
        Self {
            targets: routes.into_iter().chain(static_files).collect(),
            broken: Vec::new(),
        }
    }

    /// Whether `route` names a page or a static file.
    pub fn exists(&self, route: &str) -> bool {
        self.targets.contains(route)
    }

    /// Check an absolute, base-relative path such as `/fastapi/setting-up#x`.
    pub fn check_path(&mut self, origin: &LinkOrigin, path: &str) {
        let (route, _) = split_internal_link(path);
        if !self.exists(route) {
            self.report(origin, LinkKind::Page, path);
        }
    }

    /// Check a route that was already resolved, or `None` for one that wasn't.
    pub fn check_route(&mut self, origin: &LinkOrigin, kind: LinkKind, target: &str, route: Option<&str>) {
        if !route.is_some_and(|route| self.exists(route)) {
            self.report(origin, kind, target);
        }
    }

    fn report(&mut self, origin: &LinkOrigin, kind: LinkKind, target: &str) {
        self.broken.push(BrokenLink {
            origin: origin.clone(),
            kind,
            target: target.to_owned(),
        });
    }

    /// Broken links found so far, in check order.
    pub fn broken(&self) -> &[BrokenLink] {
        &self.broken
    }

    /// Apply the site's broken link policies.
    ///
    /// Page links follow `on_broken_links`, markdown file links follow
    /// `on_broken_markdown_links`. Links under `throw` are returned as an
    /// error, the rest are logged or dropped.
    pub fn finish(self, site: &SiteMetadata) -> Result<(), BuildError> {
        let mut fatal = Vec::new();
        for link in self.broken {
            let severity = match link.kind {
                LinkKind::Page => site.on_broken_links,
                LinkKind::Markdown => site.on_broken_markdown_links,
            };
            match severity {
                ReportingSeverity::Ignore => {}
                ReportingSeverity::Log => tracing::info!("Broken link: {link}"),
                ReportingSeverity::Warn => tracing::warn!("Broken link: {link}"),
                ReportingSeverity::Throw => fatal.push(link),
            }
        }

        if fatal.is_empty() {
            Ok(())
        } else {
            Err(BuildError::BrokenLinks(fatal))
        }
    }
}
