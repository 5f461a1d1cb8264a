//! Markdown documents and their front matter.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::BuildError;

/// YAML block at the top of a document, between `---` lines.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FrontMatter {
    /// Page title, overriding the first heading.
    pub title: Option<String>,
    /// Label used in the sidebar and pagination.
    pub sidebar_label: Option<String>,
    /// Meta description.
    pub description: Option<String>,
}

/// Split `content` into its front matter block (without fences) and the body.
///
/// Content without an opening `---` line, or with an unterminated block, has
/// no front matter.
pub fn split_front_matter(content: &str) -> (Option<&str>, &str) {
    let Some(rest) = content
        .strip_prefix("---\n")
        .or_else(|| content.strip_prefix("---\r\n"))
    else {
        return (None, content);
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == "---" {
            let body = &rest[offset + line.len()..];
            return (Some(&rest[..offset]), body);
        }
        offset += line.len();
    }
    (None, content)
}

/// A markdown document found under the docs directory.
#[derive(Clone, Debug)]
pub struct Document {
    /// Path below the docs directory without `.md`, using `/`.
    pub id: String,
    /// Base-relative URL path.
    pub route: String,
    /// File the document was read from.
    pub source_path: PathBuf,
    pub front_matter: FrontMatter,
    /// Markdown after the front matter.
    pub body: String,
    /// Resolved title. Starts as the front matter title or file stem and is
    /// refined with the first heading once the body is rendered.
    pub title: String,
}

impl Document {
    /// Parse a document's file content.
    pub fn parse(
        id: String,
        route: String,
        source_path: PathBuf,
        content: &str,
    ) -> Result<Self, BuildError> {
        let (block, body) = split_front_matter(content);
        let front_matter = match block {
            Some(block) if !block.trim().is_empty() => serde_yaml::from_str(block).map_err(
                |source| BuildError::FrontMatter {
                    path: source_path.clone(),
                    source,
                },
            )?,
            _ => FrontMatter::default(),
        };

        let title = front_matter
            .title
            .clone()
            .unwrap_or_else(|| file_stem(&source_path));

        Ok(Self {
            id,
            route,
            source_path,
            front_matter,
            body: body.to_owned(),
            title,
        })
    }

    /// Apply the heading title found while rendering. Front matter still wins.
    pub fn set_heading_title(&mut self, heading: Option<String>) {
        if self.front_matter.title.is_none()
            && let Some(heading) = heading
        {
            self.title = heading;
        }
    }

    /// Label for navigation: `sidebar_label`, else the title.
    pub fn label(&self) -> &str {
        self.front_matter
            .sidebar_label
            .as_deref()
            .unwrap_or(self.title.as_str())
    }
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}
