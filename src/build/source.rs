use std::path::{Path, PathBuf};

use super::document::{ContentItem, Document, StaticFile};
use super::paths::{source_path_to_url, static_path_to_url};

// =============================================================================
// Errors
// =============================================================================

#[derive(thiserror::Error, Debug)]
pub enum SourceError {
    #[error("content path does not exist: {0}")]
    PathNotFound(PathBuf),

    #[error("content path is not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("failed to read directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to read directory entry in {path}: {source}")]
    ReadEntry {
        path: PathBuf,
        source: std::io::Error,
    },
}

// =============================================================================
// Content discovery
// =============================================================================

/// Discover all content in the content directory.
///
/// Markdown files become documents; everything else is a static file
/// copied through unchanged. Dotfiles and dot-directories are skipped.
pub fn discover_content(content_dir: &Path) -> Result<Vec<ContentItem>, SourceError> {
    if !content_dir.exists() {
        return Err(SourceError::PathNotFound(content_dir.to_path_buf()));
    }
    if !content_dir.is_dir() {
        return Err(SourceError::NotADirectory(content_dir.to_path_buf()));
    }

    let mut items = Vec::new();
    walk(content_dir, Path::new(""), &mut items)?;

    // Deterministic build order
    items.sort_by(|a, b| item_path(a).cmp(item_path(b)));

    Ok(items)
}

fn item_path(item: &ContentItem) -> &PathBuf {
    match item {
        ContentItem::Document(doc) => &doc.source_path,
        ContentItem::Static(file) => &file.source_path,
    }
}

fn walk(
    root: &Path,
    relative: &Path,
    items: &mut Vec<ContentItem>,
) -> Result<(), SourceError> {
    let dir = root.join(relative);
    let entries = std::fs::read_dir(&dir).map_err(|e| SourceError::ReadDir {
        path: dir.clone(),
        source: e,
    })?;

    for entry in entries {
        let entry = entry.map_err(|e| SourceError::ReadEntry {
            path: dir.clone(),
            source: e,
        })?;

        let name = entry.file_name();
        if name.to_string_lossy().starts_with('.') {
            continue;
        }

        let rel_path = relative.join(&name);
        let path = entry.path();

        if path.is_dir() {
            walk(root, &rel_path, items)?;
        } else if rel_path.extension().and_then(|e| e.to_str()) == Some("md") {
            let url_path = source_path_to_url(&rel_path);
            items.push(ContentItem::Document(Document::new(rel_path, url_path)));
        } else {
            let output_path = static_path_to_url(&rel_path);
            items.push(ContentItem::Static(StaticFile {
                source_path: rel_path,
                output_path,
            }));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_content_dir_is_an_error() {
        let result = discover_content(Path::new("/definitely/not/a/real/path"));
        assert!(matches!(result, Err(SourceError::PathNotFound(_))));
    }
}
