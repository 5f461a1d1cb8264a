//! Container directive line parsing: `:::name[label]{attrs}` and `:::`.

use super::DirectiveArgs;

/// A line that opens or closes a container directive.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum ContainerLine {
    /// `:::name[label]{attrs}`
    Open { name: String, args: DirectiveArgs },
    /// A line of three or more colons.
    Close { colons: usize },
}

/// Parse a whole line as a container directive marker.
///
/// Returns `None` for any other line.
pub(crate) fn parse_container_line(line: &str) -> Option<ContainerLine> {
    let trimmed = line.trim();
    let colons = trimmed.chars().take_while(|&c| c == ':').count();
    if colons < 3 {
        return None;
    }

    let rest = trimmed[colons..].trim_start();
    if rest.is_empty() {
        return Some(ContainerLine::Close { colons });
    }

    let name_end = rest
        .find(|c: char| c == '[' || c == '{' || c.is_whitespace())
        .unwrap_or(rest.len());
    let name = &rest[..name_end];
    if !is_valid_name(name) {
        return None;
    }

    let (label, label_len) = delimited(&rest[name_end..], '[', ']');
    let (attrs, _) = delimited(&rest[name_end + label_len..], '{', '}');

    Some(ContainerLine::Open {
        name: name.to_owned(),
        args: DirectiveArgs::parse(label, attrs),
    })
}

fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
}

/// Take a balanced `open ... close` group from the start of `s`.
///
/// Returns the inner text and the number of bytes consumed, or an empty
/// string and zero when `s` doesn't start with a complete group.
fn delimited(s: &str, open: char, close: char) -> (&str, usize) {
    if !s.starts_with(open) {
        return ("", 0);
    }

    let mut depth = 0usize;
    for (i, c) in s.char_indices() {
        if c == open {
            depth += 1;
        } else if c == close {
            depth -= 1;
            if depth == 0 {
                return (&s[open.len_utf8()..i], i + close.len_utf8());
            }
        }
    }
    ("", 0)
}
