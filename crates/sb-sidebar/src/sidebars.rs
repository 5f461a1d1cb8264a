//! Named sidebars loaded from a YAML declaration.

use std::path::Path;

use serde_yaml::{Mapping, Value};

use crate::SidebarError;
use crate::item::{SidebarItem, collect_doc_ids};

/// One named sidebar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sidebar {
    /// Sidebar id (the YAML key).
    pub id: String,
    /// Top-level entries in display order.
    pub items: Vec<SidebarItem>,
}

/// Previous and next documents around a page, in sidebar order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Neighbours<'a> {
    pub previous: Option<&'a str>,
    pub next: Option<&'a str>,
}

impl Sidebar {
    /// Document ids in display order, depth first.
    pub fn doc_ids(&self) -> Vec<&str> {
        let mut ids = Vec::new();
        collect_doc_ids(&self.items, &mut ids);
        ids
    }

    /// Whether `doc_id` is referenced anywhere in this sidebar.
    pub fn contains_doc(&self, doc_id: &str) -> bool {
        self.items.iter().any(|item| item.contains_doc(doc_id))
    }

    /// Documents immediately before and after the first occurrence of `doc_id`.
    pub fn neighbours(&self, doc_id: &str) -> Neighbours<'_> {
        let ids = self.doc_ids();
        let Some(pos) = ids.iter().position(|id| *id == doc_id) else {
            return Neighbours::default();
        };
        Neighbours {
            previous: pos.checked_sub(1).map(|i| ids[i]),
            next: ids.get(pos + 1).copied(),
        }
    }
}

/// All sidebars of a site, in declaration order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Sidebars {
    sidebars: Vec<Sidebar>,
}

impl Sidebars {
    /// Create from already-built sidebars.
    pub fn new(sidebars: Vec<Sidebar>) -> Self {
        Self { sidebars }
    }

    /// Load the sidebar declaration at `path`.
    ///
    /// A missing file yields no sidebars; pages then render without one.
    pub fn load(path: &Path) -> Result<Self, SidebarError> {
        if !path.exists() {
            tracing::warn!(path = %path.display(), "Sidebar file not found, rendering without sidebar");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|source| SidebarError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let sidebars = Self::from_yaml(&content)?;
        tracing::debug!(path = %path.display(), count = sidebars.len(), "Loaded sidebars");
        Ok(sidebars)
    }

    /// Parse a YAML mapping of sidebar id to entry list.
    ///
    /// Mapping order is kept, so the first declared sidebar stays first.
    pub fn from_yaml(content: &str) -> Result<Self, SidebarError> {
        let root: Option<Mapping> =
            serde_yaml::from_str(content).map_err(|source| SidebarError::Parse {
                sidebar: None,
                source,
            })?;

        let mut sidebars = Vec::new();
        for (key, value) in root.unwrap_or_default() {
            let id = match key {
                Value::String(id) => id,
                other => return Err(SidebarError::InvalidKey(format!("{other:?}"))),
            };
            let items: Vec<SidebarItem> =
                serde_yaml::from_value(value).map_err(|source| SidebarError::Parse {
                    sidebar: Some(id.clone()),
                    source,
                })?;
            sidebars.push(Sidebar { id, items });
        }

        Ok(Self { sidebars })
    }

    /// Iterate sidebars in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Sidebar> {
        self.sidebars.iter()
    }

    /// Look up a sidebar by id.
    pub fn get(&self, id: &str) -> Option<&Sidebar> {
        self.sidebars.iter().find(|s| s.id == id)
    }

    /// First sidebar that references `doc_id`.
    pub fn sidebar_for_doc(&self, doc_id: &str) -> Option<&Sidebar> {
        self.sidebars.iter().find(|s| s.contains_doc(doc_id))
    }

    /// Number of sidebars.
    pub fn len(&self) -> usize {
        self.sidebars.len()
    }

    /// Whether no sidebar is declared.
    pub fn is_empty(&self) -> bool {
        self.sidebars.is_empty()
    }
}
