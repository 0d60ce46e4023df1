//! Path and URL conversion utilities.
//!
//! This module handles conversions between:
//! - Source file paths (relative paths within the content directory)
//! - Site-relative output paths (also used as URL paths, e.g. "/projects/my-app.html")
//! - Output file paths (where files are written in the build directory)

use std::path::{Path, PathBuf};

/// Convert a markdown file path to its site-relative output path.
///
/// Pages keep a flat `.html` layout mirroring the content tree; the
/// breadcrumb generator and the landing-page checks key off these paths.
///
/// # Examples
/// ```ignore
/// source_path_to_url("projects/my-app.md") => "/projects/my-app.html"
/// source_path_to_url("index.md") => "/index.html"
/// ```
pub fn source_path_to_url(path: &Path) -> String {
    let path_str = path
        .with_extension("html")
        .to_string_lossy()
        .replace('\\', "/");
    format!("/{path_str}")
}

/// Convert a static file path to its site-relative output path.
///
/// Static files keep their name and extension unchanged.
pub fn static_path_to_url(path: &Path) -> String {
    let path_str = path.to_string_lossy().replace('\\', "/");
    format!("/{path_str}")
}

/// Convert a site-relative output path to a file path in the build directory.
///
/// # Examples
/// ```ignore
/// url_to_output_path("/projects/my-app.html", build_dir) => build_dir/projects/my-app.html
/// url_to_output_path("/index.html", build_dir) => build_dir/index.html
/// ```
pub fn url_to_output_path(url_path: &str, output_dir: &Path) -> PathBuf {
    output_dir.join(url_path.trim_start_matches('/'))
}

/// Get the base path from a config file path (its parent directory).
pub fn base_path_from_config(config_path: &Path) -> PathBuf {
    config_path
        .parent()
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}
