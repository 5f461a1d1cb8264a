//! Tip callout box.

use crate::directive::{ContainerDirective, DirectiveArgs};
use crate::escape::escape_html;

/// Title used when a tip doesn't set one.
pub const DEFAULT_TIP_TITLE: &str = "Pro Tip";

const BOX_STYLE: &str = "background-color:#f0f4f8;border-left:8px solid #3776ab;\
padding:20px;margin:20px 0;border-radius:8px;box-shadow:0 2px 4px rgba(0,0,0,0.1)";
const TITLE_STYLE: &str = "margin-top:0;color:#3776ab";
const BODY_STYLE: &str = "font-size:16px;line-height:1.6";

/// Markup closing a tip opened with [`tip_open`].
pub const TIP_CLOSE: &str = "</div></div>";

/// Opening markup of a tip box, up to and including the body container.
#[must_use]
pub fn tip_open(title: Option<&str>) -> String {
    let title = escape_html(title.unwrap_or(DEFAULT_TIP_TITLE));
    format!(
        r#"<div style="{BOX_STYLE}"><h4 style="{TITLE_STYLE}">🐍 {title}</h4><div style="{BODY_STYLE}">"#
    )
}

/// Render a complete tip box around already rendered `body_html`.
///
/// ```
/// use sb_renderer::components::render_tip;
///
/// let html = render_tip(None, "<p>Use virtual environments.</p>");
/// assert!(html.contains("🐍 Pro Tip</h4>"));
/// assert!(html.contains("<p>Use virtual environments.</p>"));
/// ```
#[must_use]
pub fn render_tip(title: Option<&str>, body_html: &str) -> String {
    format!("{}{body_html}{TIP_CLOSE}", tip_open(title))
}

/// `:::tip` container directive.
///
/// The title comes from the `title` attribute, else the bracket label, else
/// [`DEFAULT_TIP_TITLE`]:
///
/// ```markdown
/// :::tip[Did You Know?]
/// Python type hints can power automatic API documentation in FastAPI!
/// :::
/// ```
pub struct TipDirective;

impl ContainerDirective for TipDirective {
    fn name(&self) -> &'static str {
        "tip"
    }

    fn open(&mut self, args: DirectiveArgs, _line: usize) -> Option<String> {
        let title = args
            .get("title")
            .or_else(|| (!args.label.is_empty()).then_some(args.label.as_str()));
        // Trailing blank line ends the HTML block so the body parses as markdown.
        Some(format!("{}\n", tip_open(title)))
    }

    fn close(&mut self, _line: usize) -> String {
        format!("\n{TIP_CLOSE}")
    }
}
