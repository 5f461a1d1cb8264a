//! HTML rendering for the Snake Bytes book.
//!
//! - [`MarkdownRenderer`] turns chapter markdown into HTML, expanding
//!   `:::tip` containers and collecting internal links for checking.
//! - [`components`] holds the presentational fragments: tip callout,
//!   feature grid, landing page, sidebar menu and page layout.
//! - [`doc_route`] and [`route_href`] map document ids to routes and
//!   routes to hrefs.
//!
//! # Example
//!
//! ```
//! use sb_renderer::MarkdownRenderer;
//!
//! let result = MarkdownRenderer::new().render(":::tip\nUse `venv`.\n:::\n");
//! assert!(result.html.contains("🐍 Pro Tip</h4>"));
//! assert!(result.html.contains("<p>Use <code>venv</code>.</p>"));
//! ```

pub mod components;
pub mod directive;
mod escape;
mod languages;
mod markdown;
mod route;

pub use escape::escape_html;
pub use languages::{DEFAULT_LANGUAGES, HighlightLanguages};
pub use markdown::{LinkKind, LinkResolver, MarkdownRenderer, RenderResult, RenderedLink};
pub use route::{
    doc_route, internal_href, is_external, resolve_relative, route_href, split_internal_link,
};
