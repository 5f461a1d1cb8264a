//! Markdown to HTML rendering for book chapters.

use std::collections::{BTreeSet, HashMap};

use pulldown_cmark::{CodeBlockKind, CowStr, Event, HeadingLevel, Options, Parser, Tag, TagEnd};

use crate::components::TipDirective;
use crate::directive::DirectiveProcessor;
use crate::languages::HighlightLanguages;
use crate::route::{is_external, route_href, split_internal_link};

/// Resolves relative links written in one document to routes.
///
/// Implementations are bound to the document being rendered, since relative
/// paths depend on its location.
pub trait LinkResolver {
    /// Route for the markdown file at `path` (no fragment), or `None` if no
    /// such document exists.
    fn resolve_markdown_link(&self, path: &str) -> Option<String>;

    /// Route a relative page or asset path (`setting-up`, `../img/x.png`)
    /// points to from the document's page, or `None` if it leaves the site.
    fn resolve_page_link(&self, path: &str) -> Option<String>;
}

/// How a link was written in the source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkKind {
    /// Relative link to a markdown file.
    Markdown,
    /// Absolute, base-relative page or asset path.
    Page,
}

/// An internal link found while rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedLink {
    pub kind: LinkKind,
    /// Link target as written in the source.
    pub target: String,
    /// Route the link points to. `None` for markdown links that didn't resolve.
    pub route: Option<String>,
}

/// Result of rendering markdown.
#[derive(Clone, Debug)]
pub struct RenderResult {
    pub html: String,
    /// Text of the first H1 heading (if title extraction was enabled).
    pub title: Option<String>,
    /// Internal links, in document order.
    pub links: Vec<RenderedLink>,
    /// Non-fatal problems (unclosed directives, unknown code languages).
    pub warnings: Vec<String>,
}

/// Renders chapter markdown to HTML.
///
/// Container directives are expanded first (`:::tip`), then the text is parsed
/// as GitHub flavored markdown. Headings get slug ids, absolute links and
/// images get the base URL prepended, and relative links and images are
/// rewritten through the [`LinkResolver`].
///
/// ```
/// use sb_renderer::MarkdownRenderer;
///
/// let result = MarkdownRenderer::new()
///     .with_title_extraction()
///     .render("# Variables\n\nSee [setup](/python-basics/intro).");
/// assert_eq!(result.title.as_deref(), Some("Variables"));
/// assert!(result.html.contains(r#"<a href="/python-basics/intro">"#));
/// ```
pub struct MarkdownRenderer<'r> {
    base_url: String,
    resolver: Option<&'r dyn LinkResolver>,
    languages: HighlightLanguages,
    extract_title: bool,
}

impl Default for MarkdownRenderer<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'r> MarkdownRenderer<'r> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            base_url: "/".to_owned(),
            resolver: None,
            languages: HighlightLanguages::default(),
            extract_title: false,
        }
    }

    /// Set the base URL prepended to absolute links (default `/`).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Resolve relative links and images with `resolver`.
    ///
    /// Without a resolver they are left untouched and not reported.
    #[must_use]
    pub fn with_link_resolver(mut self, resolver: &'r dyn LinkResolver) -> Self {
        self.resolver = Some(resolver);
        self
    }

    /// Set the languages enabled for syntax highlighting.
    #[must_use]
    pub fn with_languages(mut self, languages: HighlightLanguages) -> Self {
        self.languages = languages;
        self
    }

    /// Report the first H1 heading as the title. The heading is still rendered.
    #[must_use]
    pub fn with_title_extraction(mut self) -> Self {
        self.extract_title = true;
        self
    }

    fn parser_options() -> Options {
        Options::ENABLE_TABLES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_TASKLISTS
            | Options::ENABLE_GFM
    }

    /// Render `markdown` to HTML.
    #[must_use]
    pub fn render(&self, markdown: &str) -> RenderResult {
        let mut directives = DirectiveProcessor::new().with_container(TipDirective);
        let expanded = directives.process(markdown);
        let mut warnings = directives.warnings().to_vec();

        let mut events: Vec<Event<'_>> =
            Parser::new_ext(&expanded, Self::parser_options()).collect();

        let title = self.extract_title.then(|| first_h1(&events)).flatten();
        assign_heading_ids(&mut events);

        let mut links = Vec::new();
        let mut unknown_languages = BTreeSet::new();
        for event in &mut events {
            match event {
                Event::Start(Tag::Link { dest_url, .. }) => {
                    if let Some((href, link)) = self.rewrite_link(dest_url) {
                        *dest_url = href.into();
                        links.push(link);
                    }
                }
                Event::Start(Tag::Image { dest_url, .. }) => {
                    if let Some((src, link)) = self.rewrite_image(dest_url) {
                        *dest_url = src.into();
                        links.push(link);
                    }
                }
                Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(info))) => {
                    let lang = info.split_whitespace().next().unwrap_or("");
                    if !lang.is_empty() && !self.languages.contains(lang) {
                        unknown_languages.insert(lang.to_owned());
                    }
                }
                _ => {}
            }
        }

        warnings.extend(
            unknown_languages
                .into_iter()
                .map(|lang| format!("code block language `{lang}` is not enabled for highlighting")),
        );

        let mut html = String::with_capacity(markdown.len() * 3 / 2);
        pulldown_cmark::html::push_html(&mut html, events.into_iter());

        RenderResult {
            html,
            title,
            links,
            warnings,
        }
    }

    /// New href and link record for an internal link, or `None` to leave it.
    fn rewrite_link(&self, dest: &str) -> Option<(String, RenderedLink)> {
        if dest.is_empty() || dest.starts_with('#') || is_external(dest) {
            return None;
        }

        if dest.starts_with('/') {
            let (route, suffix) = split_internal_link(dest);
            let href = format!("{}{suffix}", route_href(&self.base_url, route));
            let link = RenderedLink {
                kind: LinkKind::Page,
                target: dest.to_owned(),
                route: Some(route.to_owned()),
            };
            return Some((href, link));
        }

        let cut = dest.find(['#', '?']).unwrap_or(dest.len());
        let (path, suffix) = dest.split_at(cut);
        if path.is_empty() {
            return None;
        }
        let resolver = self.resolver?;

        let (kind, route) = if path.ends_with(".md") {
            (LinkKind::Markdown, resolver.resolve_markdown_link(path))
        } else {
            (LinkKind::Page, resolver.resolve_page_link(path))
        };
        let href = match &route {
            Some(route) => format!("{}{suffix}", route_href(&self.base_url, route)),
            None => dest.to_owned(),
        };
        let link = RenderedLink {
            kind,
            target: dest.to_owned(),
            route,
        };
        Some((href, link))
    }

    /// New `src` and link record for a local image, or `None` to leave it.
    fn rewrite_image(&self, src: &str) -> Option<(String, RenderedLink)> {
        if src.is_empty() || is_external(src) {
            return None;
        }

        let route = if src.starts_with('/') {
            Some(split_internal_link(src).0.to_owned())
        } else {
            self.resolver?.resolve_page_link(split_internal_link(src).0)
        };
        let new_src = match &route {
            Some(route) => route_href(&self.base_url, route),
            None => src.to_owned(),
        };
        let link = RenderedLink {
            kind: LinkKind::Page,
            target: src.to_owned(),
            route,
        };
        Some((new_src, link))
    }
}

/// Plain text of the first H1 heading.
fn first_h1(events: &[Event<'_>]) -> Option<String> {
    let start = events
        .iter()
        .position(|e| matches!(e, Event::Start(Tag::Heading { level: HeadingLevel::H1, .. })))?;
    let text = heading_text(&events[start + 1..]);
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_owned())
}

/// Concatenated text up to the end of the current heading.
fn heading_text(events: &[Event<'_>]) -> String {
    let mut text = String::new();
    for event in events {
        match event {
            Event::End(TagEnd::Heading(_)) => break,
            Event::Text(t) | Event::Code(t) => text.push_str(t),
            _ => {}
        }
    }
    text
}

/// Give every heading without an explicit `{#id}` a unique slug id.
fn assign_heading_ids(events: &mut [Event<'_>]) {
    let mut seen: HashMap<String, usize> = HashMap::new();
    for idx in 0..events.len() {
        let Event::Start(Tag::Heading { id: None, .. }) = &events[idx] else {
            continue;
        };
        let base = slugify(&heading_text(&events[idx + 1..]));
        let count = seen.entry(base.clone()).or_insert(0);
        let slug = if *count == 0 {
            base
        } else {
            format!("{base}-{count}")
        };
        *count += 1;
        if let Event::Start(Tag::Heading { id, .. }) = &mut events[idx] {
            *id = Some(CowStr::from(slug));
        }
    }
}

/// Lowercase, alphanumerics kept, runs of whitespace and dashes become `-`.
pub(crate) fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for c in text.trim().chars() {
        if c.is_alphanumeric() || c == '_' {
            slug.extend(c.to_lowercase());
        } else if (c.is_whitespace() || c == '-') && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    let slug = slug.trim_matches('-');
    if slug.is_empty() {
        "section".to_owned()
    } else {
        slug.to_owned()
    }
}
