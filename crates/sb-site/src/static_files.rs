//! Files copied verbatim from the static directory.

use std::fs;
use std::path::{Path, PathBuf};

use crate::BuildError;

/// A file below the static directory.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct StaticFile {
    /// Path relative to the static directory, using `/`. Also its URL path.
    pub relative_path: String,
    pub source_path: PathBuf,
}

/// List the files below `static_dir`, sorted by relative path.
///
/// A missing directory yields no files.
pub fn collect_static_files(static_dir: &Path) -> Result<Vec<StaticFile>, BuildError> {
    if !static_dir.is_dir() {
        return Ok(Vec::new());
    }
    let mut files = Vec::new();
    walk_dir(static_dir, static_dir, &mut files)?;
    files.sort();
    Ok(files)
}

fn walk_dir(base: &Path, current: &Path, files: &mut Vec<StaticFile>) -> Result<(), BuildError> {
    let entries = fs::read_dir(current).map_err(|e| BuildError::io(current, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| BuildError::io(current, e))?;
        let path = entry.path();
        if path.is_dir() {
            walk_dir(base, &path, files)?;
        } else if let Ok(relative) = path.strip_prefix(base) {
            let relative_path = relative.to_string_lossy().replace('\\', "/");
            files.push(StaticFile {
                relative_path,
                source_path: path,
            });
        }
    }
    Ok(())
}

/// Copy `files` into `output_dir`, keeping their relative paths.
pub fn copy_static_files(files: &[StaticFile], output_dir: &Path) -> Result<(), BuildError> {
    for file in files {
        let target = output_dir.join(&file.relative_path);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(|e| BuildError::io(parent, e))?;
        }
        fs::copy(&file.source_path, &target).map_err(|e| BuildError::io(&file.source_path, e))?;
    }
    Ok(())
}
