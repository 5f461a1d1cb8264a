//! Discovery of markdown documents under the docs directory.

use std::fs;
use std::path::{Path, PathBuf};

use sb_renderer::doc_route;

use crate::BuildError;
use crate::document::Document;

/// Read every `.md` file below `docs_dir`, sorted by id.
///
/// Hidden entries and entries starting with `_` are skipped, so partials
/// and drafts can live next to chapters. A missing directory yields no
/// documents.
pub fn scan_documents(docs_dir: &Path, route_base_path: &str) -> Result<Vec<Document>, BuildError> {
    if !docs_dir.is_dir() {
        tracing::warn!(path = %docs_dir.display(), "Docs directory not found");
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    walk_dir(docs_dir, docs_dir, &mut files)?;
    files.sort();

    let mut documents = Vec::with_capacity(files.len());
    for (id, path) in files {
        let content = fs::read_to_string(&path).map_err(|e| BuildError::io(&path, e))?;
        let route = doc_route(route_base_path, &id);
        documents.push(Document::parse(id, route, path, &content)?);
    }

    tracing::debug!(document_count = documents.len(), "Docs scan completed");
    Ok(documents)
}

fn walk_dir(base: &Path, current: &Path, files: &mut Vec<(String, PathBuf)>) -> Result<(), BuildError> {
    let entries = fs::read_dir(current).map_err(|e| BuildError::io(current, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| BuildError::io(current, e))?;
        let name = entry.file_name();
        let name = name.to_string_lossy();
        if name.starts_with('.') || name.starts_with('_') {
            continue;
        }

        let path = entry.path();
        if path.is_dir() {
            walk_dir(base, &path, files)?;
        } else if let Some(id) = doc_id(base, &path) {
            files.push((id, path));
        }
    }
    Ok(())
}

/// Document id of a markdown file: its path below `base` without `.md`.
fn doc_id(base: &Path, path: &Path) -> Option<String> {
    if path.extension()? != "md" {
        return None;
    }
    let relative = path.strip_prefix(base).ok()?.with_extension("");
    let id = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/");
    Some(id)
}
