//! Build errors.

use std::fmt;
use std::path::PathBuf;

use sb_config::ConfigError;
use sb_sidebar::{SidebarError, SidebarIssue};

use crate::links::BrokenLink;

/// Error that stops a build. Nothing is written when one occurs.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Sidebar(#[from] SidebarError),
    #[error("Invalid sidebar:\n{}", List(.0.as_slice()))]
    InvalidSidebar(Vec<SidebarIssue>),
    #[error("Invalid front matter in {}: {source}", .path.display())]
    FrontMatter {
        path: PathBuf,
        source: serde_yaml::Error,
    },
    #[error("Broken links:\n{}", List(.0.as_slice()))]
    BrokenLinks(Vec<BrokenLink>),
    #[error("Route /{route} is produced by both {first} and {second}")]
    RouteConflict {
        route: String,
        first: String,
        second: String,
    },
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl BuildError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Bulleted, one-per-line display of a list of problems.
struct List<'a, T>(&'a [T]);

impl<T: fmt::Display> fmt::Display for List<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, item) in self.0.iter().enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }
            write!(f, "  - {item}")?;
        }
        Ok(())
    }
}
