//! Sidebar navigation taxonomy for the Snake Bytes book builder.
//!
//! Sidebars are declared in a YAML file as a mapping from sidebar id to an
//! ordered list of entries. Entries are document references, labeled
//! categories (which nest further entries) or external links. Declaration
//! order is the rendered order.
//!
//! # Example
//!
//! ```
//! use sb_sidebar::Sidebars;
//!
//! let yaml = r"
//! tutorialSidebar:
//!   - type: category
//!     label: Python Basics
//!     collapsed: false
//!     items:
//!       - python-basics/intro
//! ";
//! let sidebars = Sidebars::from_yaml(yaml).unwrap();
//! let issues = sidebars.validate(|id| id == "python-basics/intro");
//! assert!(issues.is_empty());
//! ```

mod item;
mod sidebars;
mod validate;

use std::path::PathBuf;

pub use item::{Category, DocRef, Link, SidebarItem};
pub use sidebars::{Neighbours, Sidebar, Sidebars};
pub use validate::SidebarIssue;

/// Error loading a sidebar declaration.
#[derive(Debug, thiserror::Error)]
pub enum SidebarError {
    /// The declaration file could not be read.
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The YAML is malformed or an entry has the wrong shape.
    #[error("Invalid sidebar{}: {source}", sidebar_suffix(.sidebar))]
    Parse {
        sidebar: Option<String>,
        #[source]
        source: serde_yaml::Error,
    },
    /// A top-level key is not a string.
    #[error("Sidebar ids must be strings, got {0}")]
    InvalidKey(String),
}

fn sidebar_suffix(sidebar: &Option<String>) -> String {
    sidebar
        .as_deref()
        .map(|id| format!(" '{id}'"))
        .unwrap_or_default()
}
