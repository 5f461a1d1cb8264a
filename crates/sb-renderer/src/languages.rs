//! Code block languages enabled for syntax highlighting.

use std::collections::BTreeSet;

/// Languages the highlighter bundles without any configuration.
pub const DEFAULT_LANGUAGES: &[&str] = &[
    "c",
    "clike",
    "cpp",
    "css",
    "go",
    "graphql",
    "html",
    "javascript",
    "js",
    "jsx",
    "kotlin",
    "markdown",
    "markup",
    "md",
    "objectivec",
    "plaintext",
    "reason",
    "rust",
    "svg",
    "swift",
    "text",
    "ts",
    "tsx",
    "typescript",
    "txt",
    "xml",
];

/// Set of enabled highlight languages (lowercase).
#[derive(Debug, Clone)]
pub struct HighlightLanguages {
    names: BTreeSet<String>,
}

impl HighlightLanguages {
    /// Built-in languages plus `additional`.
    pub fn new<I, S>(additional: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut names: BTreeSet<String> =
            DEFAULT_LANGUAGES.iter().map(|&name| name.to_owned()).collect();
        names.extend(
            additional
                .into_iter()
                .map(|name| name.as_ref().trim().to_ascii_lowercase())
                .filter(|name| !name.is_empty()),
        );
        Self { names }
    }

    /// Whether code tagged `lang` will be highlighted.
    ///
    /// Only the first word of the info string counts, so `python title="x"`
    /// checks `python`.
    #[must_use]
    pub fn contains(&self, lang: &str) -> bool {
        let name = lang.split_whitespace().next().unwrap_or("");
        self.names.contains(&name.to_ascii_lowercase())
    }
}

impl Default for HighlightLanguages {
    fn default() -> Self {
        Self::new(std::iter::empty::<&str>())
    }
}
