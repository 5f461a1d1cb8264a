//! Sidebar entries.
//!
//! An entry is written in YAML either as a bare document id or as a mapping
//! with a `type` key:
//!
//! ```yaml
//! - python-basics/intro
//! - type: doc
//!   id: python-basics/types-and-logic
//!   label: Types & Logic
//! - type: category
//!   label: FastAPI
//!   collapsed: false
//!   items:
//!     - fastapi/setting-up
//! - type: link
//!   label: Python docs
//!   href: https://docs.python.org
//! ```

use serde::Deserialize;

/// One entry of a sidebar, in declaration order.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(from = "RawItem")]
pub enum SidebarItem {
    /// Reference to a content document.
    Doc(DocRef),
    /// Labeled group of nested entries.
    Category(Category),
    /// External link.
    Link(Link),
}

/// Reference to a content document by id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocRef {
    /// Document id (path below the docs dir without `.md`).
    pub id: String,
    /// Label override. The document's own sidebar label or title is used otherwise.
    pub label: Option<String>,
}

/// Labeled group of sidebar entries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Category {
    /// Display label.
    pub label: String,
    /// Whether the category starts collapsed.
    pub collapsed: bool,
    /// Whether the category can be collapsed at all.
    pub collapsible: bool,
    /// Nested entries in display order.
    pub items: Vec<SidebarItem>,
}

impl Category {
    /// Whether the category renders collapsed when none of its documents is active.
    pub fn starts_collapsed(&self) -> bool {
        self.collapsible && self.collapsed
    }

    /// Whether `doc_id` appears anywhere below this category.
    pub fn contains_doc(&self, doc_id: &str) -> bool {
        self.items.iter().any(|item| item.contains_doc(doc_id))
    }
}

/// External link entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Link {
    /// Display label.
    pub label: String,
    /// Target URL.
    pub href: String,
}

impl SidebarItem {
    /// Whether this entry is, or contains, a reference to `doc_id`.
    pub fn contains_doc(&self, doc_id: &str) -> bool {
        match self {
            Self::Doc(doc) => doc.id == doc_id,
            Self::Category(category) => category.contains_doc(doc_id),
            Self::Link(_) => false,
        }
    }
}

/// Append document ids found in `items`, depth first, to `out`.
pub(crate) fn collect_doc_ids<'a>(items: &'a [SidebarItem], out: &mut Vec<&'a str>) {
    for item in items {
        match item {
            SidebarItem::Doc(doc) => out.push(&doc.id),
            SidebarItem::Category(category) => collect_doc_ids(&category.items, out),
            SidebarItem::Link(_) => {}
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawItem {
    Id(String),
    Typed(TypedItem),
}

#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum TypedItem {
    Doc {
        id: String,
        label: Option<String>,
    },
    Category {
        label: String,
        #[serde(default = "default_true")]
        collapsed: bool,
        #[serde(default = "default_true")]
        collapsible: bool,
        #[serde(default)]
        items: Vec<SidebarItem>,
    },
    Link {
        label: String,
        href: String,
    },
}

fn default_true() -> bool {
    true
}

impl From<RawItem> for SidebarItem {
    fn from(raw: RawItem) -> Self {
        match raw {
            RawItem::Id(id) => Self::Doc(DocRef { id, label: None }),
            RawItem::Typed(TypedItem::Doc { id, label }) => Self::Doc(DocRef { id, label }),
            RawItem::Typed(TypedItem::Category {
                label,
                collapsed,
                collapsible,
                items,
            }) => Self::Category(Category {
                label,
                collapsed,
                collapsible,
                items,
            }),
            RawItem::Typed(TypedItem::Link { label, href }) => Self::Link(Link { label, href }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(yaml: &str) -> Vec<SidebarItem> {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn test_bare_string_is_doc() {
        let items = parse("- python-basics/intro");
        assert_eq!(
            items,
            vec![SidebarItem::Doc(DocRef {
                id: "python-basics/intro".to_owned(),
                label: None,
            })]
        );
    }

    #[test]
    fn test_typed_doc_with_label() {
        let items = parse("- type: doc\n  id: fastapi/setting-up\n  label: Setup");
        assert_eq!(
            items,
            vec![SidebarItem::Doc(DocRef {
                id: "fastapi/setting-up".to_owned(),
                label: Some("Setup".to_owned()),
            })]
        );
    }

    #[test]
    fn test_category_defaults_to_collapsed() {
        let items = parse("- type: category\n  label: FastAPI\n  items: [fastapi/setting-up]");
        let SidebarItem::Category(category) = &items[0] else {
            panic!("expected category");
        };
        assert!(category.collapsed);
        assert!(category.collapsible);
        assert!(category.starts_collapsed());
    }

    #[test]
    fn test_non_collapsible_category_never_starts_collapsed() {
        let items = parse(
            "- type: category\n  label: A\n  collapsible: false\n  items: [a]",
        );
        let SidebarItem::Category(category) = &items[0] else {
            panic!("expected category");
        };
        assert!(!category.starts_collapsed());
    }

    #[test]
    fn test_link_item() {
        let items = parse("- type: link\n  label: Python\n  href: https://docs.python.org");
        assert_eq!(
            items,
            vec![SidebarItem::Link(Link {
                label: "Python".to_owned(),
                href: "https://docs.python.org".to_owned(),
            })]
        );
    }

    #[test]
    fn test_nested_category_contains_doc() {
        let items = parse(
            r"
- type: category
  label: Outer
  items:
    - type: category
      label: Inner
      items:
        - deep/page
",
        );
        assert!(items[0].contains_doc("deep/page"));
        assert!(!items[0].contains_doc("other"));
    }

    #[test]
    fn test_collect_doc_ids_depth_first() {
        let items = parse(
            r"
- a
- type: category
  label: B
  items: [b/one, b/two]
- type: link
  label: L
  href: https://example.com
- c
",
        );
        let mut ids = Vec::new();
        collect_doc_ids(&items, &mut ids);
        assert_eq!(ids, vec!["a", "b/one", "b/two", "c"]);
    }

    #[test]
    fn test_unknown_type_is_error() {
        let result: Result<Vec<SidebarItem>, _> = serde_yaml::from_str("- type: html\n  value: x");
        assert!(result.is_err());
    }
}
