//! `sitemap.xml` generation.

use std::fmt::Write;

use sb_renderer::{escape_html, route_href};

const CHANGE_FREQUENCY: &str = "weekly";
const PRIORITY: &str = "0.5";

/// Render a sitemap listing `routes` under `site_url` + `base_url`.
///
/// Entries are sorted so output doesn't depend on input order.
pub fn render_sitemap<'a, I>(site_url: &str, base_url: &str, routes: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut routes: Vec<&str> = routes.into_iter().collect();
    routes.sort_unstable();
    routes.dedup();

    let origin = site_url.trim_end_matches('/');
    let mut xml = String::from(
        r#"<?xml version="1.0" encoding="UTF-8"?><urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#,
    );
    for route in routes {
        let loc = format!("{origin}{}", route_href(base_url, route));
        let _ = write!(
            xml,
            "<url><loc>{}</loc><changefreq>{CHANGE_FREQUENCY}</changefreq><priority>{PRIORITY}</priority></url>",
            escape_html(&loc)
        );
    }
    xml.push_str("</urlset>");
    xml
}
