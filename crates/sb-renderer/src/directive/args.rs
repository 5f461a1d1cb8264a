//! Directive argument parsing.
//!
//! Parses the `[label]{#id .class key="value"}` part of a directive line.

use std::collections::BTreeMap;

/// Label and attributes of a directive.
///
/// ```
/// use sb_renderer::directive::DirectiveArgs;
///
/// let args = DirectiveArgs::parse("Did You Know?", r#".wide title="Ignored""#);
/// assert_eq!(args.label, "Did You Know?");
/// assert_eq!(args.classes, vec!["wide"]);
/// assert_eq!(args.get("title"), Some("Ignored"));
/// ```
#[derive(Debug, Default, PartialEq, Eq)]
pub struct DirectiveArgs {
    /// Text between brackets (empty if absent).
    pub label: String,
    /// `#id` attribute.
    pub id: Option<String>,
    /// `.class` attributes in order.
    pub classes: Vec<String>,
    /// `key=value` attributes.
    pub attrs: BTreeMap<String, String>,
}

impl DirectiveArgs {
    /// Parse a label and the attribute string found between braces.
    #[must_use]
    pub fn parse(label: &str, attrs: &str) -> Self {
        let mut args = Self {
            label: label.to_owned(),
            ..Self::default()
        };

        let mut rest = attrs.trim();
        while !rest.is_empty() {
            if let Some(tail) = rest.strip_prefix('#') {
                let (word, next) = split_word(tail);
                args.id = Some(word.to_owned());
                rest = next;
            } else if let Some(tail) = rest.strip_prefix('.') {
                let (word, next) = split_word(tail);
                args.classes.push(word.to_owned());
                rest = next;
            } else if let Some((key, value, next)) = parse_key_value(rest) {
                args.attrs.insert(key.to_owned(), value.to_owned());
                rest = next;
            } else {
                // Skip one unrecognised character.
                let skip = rest.chars().next().map_or(1, char::len_utf8);
                rest = &rest[skip..];
            }
            rest = rest.trim_start();
        }

        args
    }

    /// Attribute value by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).map(String::as_str)
    }

    /// Rebuild the `[label]{...}` syntax, for passing unhandled directives through.
    #[must_use]
    pub fn to_syntax(&self) -> String {
        let mut out = String::new();
        if !self.label.is_empty() {
            out.push('[');
            out.push_str(&self.label);
            out.push(']');
        }

        let mut parts = Vec::new();
        if let Some(id) = &self.id {
            parts.push(format!("#{id}"));
        }
        parts.extend(self.classes.iter().map(|c| format!(".{c}")));
        for (key, value) in &self.attrs {
            parts.push(format!(r#"{key}="{}""#, value.replace('"', "\\\"")));
        }

        if !parts.is_empty() {
            out.push('{');
            out.push_str(&parts.join(" "));
            out.push('}');
        }
        out
    }
}

/// Split off a `#id` or `.class` word.
fn split_word(s: &str) -> (&str, &str) {
    let end = s
        .find(|c: char| c.is_whitespace() || c == '.' || c == '#')
        .unwrap_or(s.len());
    (&s[..end], &s[end..])
}

/// Parse `key="value"`, `key='value'` or `key=value`.
///
/// Returns the key, the unquoted value and the remaining input.
fn parse_key_value(s: &str) -> Option<(&str, &str, &str)> {
    let eq = s.find('=')?;
    let key = &s[..eq];
    if key.is_empty()
        || !key
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return None;
    }

    let after = &s[eq + 1..];
    match after.chars().next() {
        Some(quote @ ('"' | '\'')) => {
            let body = &after[1..];
            let close = body.find(quote)?;
            Some((key, &body[..close], &body[close + 1..]))
        }
        Some(_) => {
            let end = after.find(char::is_whitespace).unwrap_or(after.len());
            Some((key, &after[..end], &after[end..]))
        }
        None => Some((key, "", after)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_label_only() {
        let args = DirectiveArgs::parse("Pro Tip", "");
        assert_eq!(args.label, "Pro Tip");
        assert!(args.attrs.is_empty());
        assert!(args.id.is_none());
    }

    #[test]
    fn test_quoted_attributes() {
        let args = DirectiveArgs::parse("", r#"title="Did You Know?" kind='note'"#);
        assert_eq!(args.get("title"), Some("Did You Know?"));
        assert_eq!(args.get("kind"), Some("note"));
    }

    #[test]
    fn test_unquoted_attribute() {
        let args = DirectiveArgs::parse("", "level=2 .a");
        assert_eq!(args.get("level"), Some("2"));
        assert_eq!(args.classes, vec!["a"]);
    }

    #[test]
    fn test_id_and_classes() {
        let args = DirectiveArgs::parse("", "#intro-tip .wide.dark");
        assert_eq!(args.id.as_deref(), Some("intro-tip"));
        assert_eq!(args.classes, vec!["wide", "dark"]);
    }

    #[test]
    fn test_unterminated_quote_is_skipped() {
        let args = DirectiveArgs::parse("", r#"title="oops"#);
        assert!(args.get("title").is_none());
    }

    #[test]
    fn test_to_syntax_is_stable() {
        let args = DirectiveArgs::parse("Hi", r#"#x .y b="2" a="1""#);
        assert_eq!(args.to_syntax(), r#"[Hi]{#x .y a="1" b="2"}"#);
    }

    #[test]
    fn test_to_syntax_empty() {
        assert_eq!(DirectiveArgs::default().to_syntax(), "");
    }
}
