//! Full HTML page: head, navbar, optional sidebar, content, footer.

use std::fmt::Write;

use sb_config::{Config, FooterConfig, LinkTarget, NavbarConfig, NavbarPosition, SiteMetadata};

use crate::components::sidebar::DocLookup;
use crate::escape::escape_html;
use crate::route::{internal_href, route_href};

/// Site-wide parts of every page.
pub struct LayoutContext<'a> {
    site: &'a SiteMetadata,
    navbar: &'a NavbarConfig,
    footer: &'a FooterConfig,
    prism_theme: &'a str,
    prism_dark_theme: &'a str,
    docs: &'a dyn DocLookup,
}

impl<'a> LayoutContext<'a> {
    pub fn new(config: &'a Config, docs: &'a dyn DocLookup) -> Self {
        Self {
            site: &config.site,
            navbar: &config.theme.navbar,
            footer: &config.theme.footer,
            prism_theme: &config.theme.prism.theme,
            prism_dark_theme: &config.theme.prism.dark_theme,
            docs,
        }
    }

    fn base_url(&self) -> &str {
        &self.site.base_url
    }

    /// Href for a configured link target.
    fn target_href(&self, target: LinkTarget<'_>) -> String {
        match target {
            LinkTarget::Doc(id) => self
                .docs
                .href(id)
                .unwrap_or_else(|| route_href(self.base_url(), id)),
            LinkTarget::Internal(path) => internal_href(self.base_url(), path),
            LinkTarget::External(url) => url.to_owned(),
        }
    }
}

/// A previous or next page link.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageLink {
    pub label: String,
    pub href: String,
}

/// Links to the neighbouring documents of a page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Pagination {
    pub previous: Option<PageLink>,
    pub next: Option<PageLink>,
}

impl Pagination {
    fn is_empty(&self) -> bool {
        self.previous.is_none() && self.next.is_none()
    }
}

/// Page-specific parts of a page.
#[derive(Debug, Default)]
pub struct PageContent<'a> {
    /// Page title. `None` uses the site title alone.
    pub title: Option<&'a str>,
    /// Meta description. `None` falls back to the site tagline.
    pub description: Option<&'a str>,
    /// Rendered body HTML.
    pub body: &'a str,
    /// Rendered sidebar HTML.
    pub sidebar: Option<&'a str>,
    pub pagination: Option<Pagination>,
}

/// Render a complete HTML document.
#[must_use]
pub fn render_page(ctx: &LayoutContext<'_>, page: &PageContent<'_>) -> String {
    let mut html = String::with_capacity(page.body.len() + 4096);
    render_head(&mut html, ctx, page);
    html.push_str("<body>\n");
    render_navbar(&mut html, ctx);

    html.push_str(r#"<div class="main-wrapper">"#);
    if let Some(sidebar) = page.sidebar {
        let _ = write!(html, r#"<aside class="doc-sidebar">{sidebar}</aside>"#);
    }
    html.push_str(r#"<div class="main-content">"#);
    html.push_str(page.body);
    if let Some(pagination) = page.pagination.as_ref().filter(|p| !p.is_empty()) {
        render_pagination(&mut html, pagination);
    }
    html.push_str("</div></div>\n");

    render_footer(&mut html, ctx);
    html.push_str("</body>\n</html>\n");
    html
}

fn render_head(html: &mut String, ctx: &LayoutContext<'_>, page: &PageContent<'_>) {
    let site_title = ctx.site.title.as_str();
    let title = match page.title {
        Some(title) if title != site_title => format!("{title} | {site_title}"),
        _ => site_title.to_owned(),
    };
    let description = page.description.unwrap_or(ctx.site.tagline.as_str());

    let _ = write!(
        html,
        concat!(
            "<!DOCTYPE html>\n",
            r#"<html lang="en" data-prism-theme="{theme}" data-prism-dark-theme="{dark}">"#,
            "\n<head>\n",
            r#"<meta charset="utf-8">"#,
            "\n",
            r#"<meta name="viewport" content="width=device-width, initial-scale=1">"#,
            "\n<title>{title}</title>\n",
            r#"<meta name="description" content="{description}">"#,
            "\n",
        ),
        theme = escape_html(ctx.prism_theme),
        dark = escape_html(ctx.prism_dark_theme),
        title = escape_html(&title),
        description = escape_html(description),
    );
    if let Some(favicon) = &ctx.site.favicon {
        let href = format!("{}{}", ctx.base_url(), favicon.trim_start_matches('/'));
        let _ = writeln!(html, r#"<link rel="icon" href="{}">"#, escape_html(&href));
    }
    html.push_str("</head>\n");
}

fn render_navbar(html: &mut String, ctx: &LayoutContext<'_>) {
    let brand = ctx.navbar.title.as_deref().unwrap_or(ctx.site.title.as_str());
    let _ = write!(
        html,
        r#"<nav class="navbar"><div class="navbar__inner"><div class="navbar__items"><a class="navbar__brand" href="{}"><b class="navbar__title">{}</b></a>"#,
        escape_html(ctx.base_url()),
        escape_html(brand)
    );
    render_navbar_items(html, ctx, NavbarPosition::Left);
    html.push_str(r#"</div><div class="navbar__items navbar__items--right">"#);
    render_navbar_items(html, ctx, NavbarPosition::Right);
    html.push_str("</div></div></nav>\n");
}

fn render_navbar_items(html: &mut String, ctx: &LayoutContext<'_>, position: NavbarPosition) {
    for item in ctx.navbar.items.iter().filter(|item| item.position == position) {
        let Some(target) = item.target() else {
            continue;
        };
        let _ = write!(
            html,
            r#"<a class="navbar__item navbar__link" href="{}"{}>{}</a>"#,
            escape_html(&ctx.target_href(target)),
            external_attrs(target),
            escape_html(&item.label)
        );
    }
}

/// Extra anchor attributes for links that leave the site.
fn external_attrs(target: LinkTarget<'_>) -> &'static str {
    if matches!(target, LinkTarget::External(_)) {
        r#" target="_blank" rel="noopener noreferrer""#
    } else {
        ""
    }
}

fn render_pagination(html: &mut String, pagination: &Pagination) {
    html.push_str(r#"<nav class="pagination-nav" aria-label="Docs pages">"#);
    for (link, class, sublabel) in [
        (&pagination.previous, "pagination-nav__link--prev", "Previous"),
        (&pagination.next, "pagination-nav__link--next", "Next"),
    ] {
        if let Some(link) = link {
            let _ = write!(
                html,
                r#"<a class="pagination-nav__link {class}" href="{}"><div class="pagination-nav__sublabel">{sublabel}</div><div class="pagination-nav__label">{}</div></a>"#,
                escape_html(&link.href),
                escape_html(&link.label)
            );
        }
    }
    html.push_str("</nav>");
}

fn render_footer(html: &mut String, ctx: &LayoutContext<'_>) {
    let footer = ctx.footer;
    let _ = write!(
        html,
        r#"<footer class="footer footer--{}"><div class="container">"#,
        footer.style.as_str()
    );

    if !footer.links.is_empty() {
        html.push_str(r#"<div class="row footer__links">"#);
        for group in &footer.links {
            let _ = write!(
                html,
                r#"<div class="col footer__col"><div class="footer__title">{}</div><ul class="footer__items">"#,
                escape_html(&group.title)
            );
            for item in &group.items {
                let Some(target) = item.target() else {
                    continue;
                };
                let _ = write!(
                    html,
                    r#"<li class="footer__item"><a class="footer__link-item" href="{}"{}>{}</a></li>"#,
                    escape_html(&ctx.target_href(target)),
                    external_attrs(target),
                    escape_html(&item.label)
                );
            }
            html.push_str("</ul></div>");
        }
        html.push_str("</div>");
    }

    if let Some(copyright) = &footer.copyright {
        let _ = write!(html, r#"<div class="footer__copyright">{copyright}</div>"#);
    }
    html.push_str("</div></footer>\n");
}
