//! Sidebar validation against the set of known documents.

use std::collections::HashSet;
use std::fmt;

use crate::item::SidebarItem;
use crate::sidebars::Sidebars;

/// Problem found while validating sidebars.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SidebarIssue {
    /// A document reference that matches no document.
    UnknownDocument { sidebar: String, id: String },
    /// A category with no entries.
    EmptyCategory { sidebar: String, label: String },
    /// Two sibling categories share a label.
    DuplicateLabel { sidebar: String, label: String },
    /// The same document is referenced twice in one sidebar.
    DuplicateDocument { sidebar: String, id: String },
}

impl SidebarIssue {
    /// Whether the issue must fail the build.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::UnknownDocument { .. } | Self::EmptyCategory { .. }
        )
    }
}

impl fmt::Display for SidebarIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownDocument { sidebar, id } => write!(
                f,
                "sidebar '{sidebar}' references unknown document '{id}'"
            ),
            Self::EmptyCategory { sidebar, label } => {
                write!(f, "sidebar '{sidebar}': category '{label}' has no items")
            }
            Self::DuplicateLabel { sidebar, label } => write!(
                f,
                "sidebar '{sidebar}': category label '{label}' is used by more than one sibling"
            ),
            Self::DuplicateDocument { sidebar, id } => write!(
                f,
                "sidebar '{sidebar}': document '{id}' is listed more than once"
            ),
        }
    }
}

impl Sidebars {
    /// Check every sidebar against `doc_exists`.
    ///
    /// Returns all issues in declaration order; use [`SidebarIssue::is_fatal`]
    /// to separate errors from warnings.
    pub fn validate<F>(&self, doc_exists: F) -> Vec<SidebarIssue>
    where
        F: Fn(&str) -> bool,
    {
        let mut issues = Vec::new();
        for sidebar in self.iter() {
            let mut seen_docs = HashSet::new();
            validate_items(
                &sidebar.id,
                &sidebar.items,
                &doc_exists,
                &mut seen_docs,
                &mut issues,
            );
        }
        issues
    }
}

fn validate_items<'a, F>(
    sidebar: &str,
    items: &'a [SidebarItem],
    doc_exists: &F,
    seen_docs: &mut HashSet<&'a str>,
    issues: &mut Vec<SidebarIssue>,
) where
    F: Fn(&str) -> bool,
{
    let mut sibling_labels = HashSet::new();

    for item in items {
        match item {
            SidebarItem::Doc(doc) => {
                if !doc_exists(&doc.id) {
                    issues.push(SidebarIssue::UnknownDocument {
                        sidebar: sidebar.to_owned(),
                        id: doc.id.clone(),
                    });
                }
                if !seen_docs.insert(&doc.id) {
                    issues.push(SidebarIssue::DuplicateDocument {
                        sidebar: sidebar.to_owned(),
                        id: doc.id.clone(),
                    });
                }
            }
            SidebarItem::Category(category) => {
                if !sibling_labels.insert(category.label.as_str()) {
                    issues.push(SidebarIssue::DuplicateLabel {
                        sidebar: sidebar.to_owned(),
                        label: category.label.clone(),
                    });
                }
                if category.items.is_empty() {
                    issues.push(SidebarIssue::EmptyCategory {
                        sidebar: sidebar.to_owned(),
                        label: category.label.clone(),
                    });
                }
                validate_items(sidebar, &category.items, doc_exists, seen_docs, issues);
            }
            SidebarItem::Link(_) => {}
        }
    }
}
