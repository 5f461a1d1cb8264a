//! Sidebar navigation menu.

use std::fmt::Write;

use sb_sidebar::{Category, Sidebar, SidebarItem};

use crate::escape::escape_html;

/// Document metadata needed to render links to documents.
pub trait DocLookup {
    /// Label shown for a document in navigation.
    fn label(&self, id: &str) -> Option<&str>;

    /// Href of a document, with the base URL applied.
    fn href(&self, id: &str) -> Option<String>;
}

/// Render `sidebar` as a nested menu, preserving declaration order.
///
/// The entry for `active` is marked current, and categories containing it
/// are rendered expanded even if declared collapsed.
#[must_use]
pub fn render_sidebar(sidebar: &Sidebar, active: Option<&str>, docs: &dyn DocLookup) -> String {
    let mut html = String::with_capacity(1024);
    let _ = write!(
        html,
        r#"<nav class="menu" aria-label="{}">"#,
        escape_html(&sidebar.id)
    );
    render_items(&mut html, &sidebar.items, active, docs);
    html.push_str("</nav>");
    html
}

fn render_items(html: &mut String, items: &[SidebarItem], active: Option<&str>, docs: &dyn DocLookup) {
    html.push_str(r#"<ul class="menu__list">"#);
    for item in items {
        match item {
            SidebarItem::Doc(doc) => {
                let label = doc
                    .label
                    .as_deref()
                    .or_else(|| docs.label(&doc.id))
                    .unwrap_or(doc.id.as_str());
                let is_active = active == Some(doc.id.as_str());
                html.push_str(r#"<li class="menu__list-item">"#);
                match docs.href(&doc.id) {
                    Some(href) if is_active => {
                        let _ = write!(
                            html,
                            r#"<a class="menu__link menu__link--active" aria-current="page" href="{}">{}</a>"#,
                            escape_html(&href),
                            escape_html(label)
                        );
                    }
                    Some(href) => {
                        let _ = write!(
                            html,
                            r#"<a class="menu__link" href="{}">{}</a>"#,
                            escape_html(&href),
                            escape_html(label)
                        );
                    }
                    None => {
                        let _ = write!(html, r#"<span class="menu__link">{}</span>"#, escape_html(label));
                    }
                }
                html.push_str("</li>");
            }
            SidebarItem::Category(category) => render_category(html, category, active, docs),
            SidebarItem::Link(link) => {
                let _ = write!(
                    html,
                    r#"<li class="menu__list-item"><a class="menu__link" href="{}" target="_blank" rel="noopener noreferrer">{}</a></li>"#,
                    escape_html(&link.href),
                    escape_html(&link.label)
                );
            }
        }
    }
    html.push_str("</ul>");
}

fn render_category(html: &mut String, category: &Category, active: Option<&str>, docs: &dyn DocLookup) {
    let holds_active = active.is_some_and(|id| category.contains_doc(id));
    let collapsed = category.starts_collapsed() && !holds_active;

    html.push_str(if collapsed {
        r#"<li class="menu__list-item menu__list-item--collapsed">"#
    } else {
        r#"<li class="menu__list-item">"#
    });
    let caret = if category.collapsible {
        " menu__link--sublist-caret"
    } else {
        ""
    };
    let _ = write!(
        html,
        r#"<span class="menu__link menu__link--sublist{caret}" aria-expanded="{}">{}</span>"#,
        !collapsed,
        escape_html(&category.label)
    );
    render_items(html, &category.items, active, docs);
    html.push_str("</li>");
}
