//! Routes and hrefs.
//!
//! A route is a page's URL path relative to the site's base URL, without
//! leading or trailing slash: `""` is the landing page and
//! `"fastapi/setting-up"` a chapter. An href is the route prefixed with the
//! base URL, ready to put in an `href` attribute.

/// Route of document `id` below `route_base_path`.
///
/// `index` documents take their directory's route.
///
/// ```
/// use sb_renderer::doc_route;
///
/// assert_eq!(doc_route("", "fastapi/setting-up"), "fastapi/setting-up");
/// assert_eq!(doc_route("docs", "fastapi/index"), "docs/fastapi");
/// assert_eq!(doc_route("", "index"), "");
/// ```
pub fn doc_route(route_base_path: &str, id: &str) -> String {
    let path = if id == "index" {
        ""
    } else {
        id.strip_suffix("/index").unwrap_or(id)
    };
    match (route_base_path.is_empty(), path.is_empty()) {
        (true, _) => path.to_owned(),
        (false, true) => route_base_path.to_owned(),
        (false, false) => format!("{route_base_path}/{path}"),
    }
}

/// Href for a route under `base_url` (which starts and ends with `/`).
pub fn route_href(base_url: &str, route: &str) -> String {
    format!("{base_url}{route}")
}

/// Split an internal link like `/fastapi/setting-up/#models` into its route
/// (`fastapi/setting-up`) and the trailing query or fragment (`#models`).
pub fn split_internal_link(link: &str) -> (&str, &str) {
    let cut = link.find(['#', '?']).unwrap_or(link.len());
    let (path, suffix) = link.split_at(cut);
    (path.trim_matches('/'), suffix)
}

/// Href for a base-relative internal link, keeping its fragment.
pub fn internal_href(base_url: &str, link: &str) -> String {
    let (route, suffix) = split_internal_link(link);
    format!("{}{suffix}", route_href(base_url, route))
}

/// Join relative `path` onto route directory `dir`, folding `.` and `..`.
///
/// A leading `/` makes `path` base-relative. Returns `None` if the path climbs
/// above the site root.
///
/// ```
/// use sb_renderer::resolve_relative;
///
/// assert_eq!(resolve_relative("python-basics", "../fastapi/setting-up").as_deref(), Some("fastapi/setting-up"));
/// assert_eq!(resolve_relative("", ".."), None);
/// ```
pub fn resolve_relative(dir: &str, path: &str) -> Option<String> {
    let mut segments: Vec<&str> = if path.starts_with('/') {
        Vec::new()
    } else {
        dir.split('/').filter(|s| !s.is_empty()).collect()
    };
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop()?;
            }
            other => segments.push(other),
        }
    }
    Some(segments.join("/"))
}

/// Whether `url` leaves the site (has a scheme or is protocol-relative).
pub fn is_external(url: &str) -> bool {
    url.starts_with("//")
        || url
            .split_once(':')
            .is_some_and(|(scheme, _)| {
                !scheme.is_empty()
                    && scheme
                        .chars()
                        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
            })
}
