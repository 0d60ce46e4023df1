use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::util::title_case;

// =============================================================================
// Content items (documents and static files)
// =============================================================================

/// A content item discovered in the content directory.
/// Either a markdown document rendered to a page, or a static file copied
/// through unchanged.
#[derive(Debug, Clone)]
pub enum ContentItem {
    /// A markdown document that will be rendered to HTML
    Document(Document),
    /// A static file (CSS, JS, images) copied as-is
    Static(StaticFile),
}

/// A static file that gets copied to the output directory unchanged.
#[derive(Debug, Clone)]
pub struct StaticFile {
    /// Path relative to the content root (e.g., "styles.css")
    pub source_path: PathBuf,
    /// Site-relative output path (e.g., "/styles.css")
    pub output_path: String,
}

// =============================================================================
// Documents
// =============================================================================

/// A markdown document discovered in the content directory.
#[derive(Debug, Clone)]
pub struct Document {
    /// Path relative to the content root (e.g., "projects/my-app.md")
    pub source_path: PathBuf,
    /// Site-relative output path (e.g., "/projects/my-app.html")
    pub url_path: String,
    /// Front matter metadata, if the file carried any
    pub front_matter: FrontMatter,
}

impl Document {
    pub fn new(source_path: PathBuf, url_path: String) -> Self {
        Self {
            source_path,
            url_path,
            front_matter: FrontMatter::default(),
        }
    }

    /// Get the document title, falling back to the title-cased file stem.
    pub fn title(&self) -> String {
        self.front_matter.title.clone().unwrap_or_else(|| {
            self.source_path
                .file_stem()
                .and_then(|s| s.to_str())
                .map(title_case)
                .unwrap_or_else(|| "Untitled".to_string())
        })
    }

    /// Get the description for the page's meta tag. Empty means "use the
    /// title", which the assembler handles.
    pub fn description(&self) -> String {
        self.front_matter.description.clone().unwrap_or_default()
    }
}

/// Front matter metadata parsed from the document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrontMatter {
    /// Page title (overrides the filename-derived title)
    pub title: Option<String>,
    /// Page description for the meta tag
    pub description: Option<String>,
}

/// Result of splitting front matter from markdown content.
#[derive(Debug)]
pub struct ParsedContent {
    /// The parsed front matter (empty if none found)
    pub front_matter: FrontMatter,
    /// The markdown content without the front matter block
    pub content: String,
}

/// Parse front matter from markdown content.
///
/// Front matter is a YAML block delimited by `---` at the start of the file:
///
/// ```markdown
/// ---
/// title: My App
/// description: A little tool
/// ---
///
/// Content starts here
/// ```
///
/// Files without a front matter block pass through untouched. A block that
/// fails to parse is treated as absent, with a warning.
pub fn parse_front_matter(content: &str) -> ParsedContent {
    let content = content.trim_start();

    if !content.starts_with("---") {
        return ParsedContent {
            front_matter: FrontMatter::default(),
            content: content.to_string(),
        };
    }

    let after_opening = &content[3..];
    let Some(closing_pos) = after_opening.find("\n---") else {
        // No closing delimiter, treat entire content as markdown
        return ParsedContent {
            front_matter: FrontMatter::default(),
            content: content.to_string(),
        };
    };

    let yaml_content = after_opening[..closing_pos].trim_start_matches('\n');

    // Skip past "---" + yaml + "\n---"
    let markdown_start = 3 + closing_pos + 4;
    let markdown_content = if markdown_start < content.len() {
        content[markdown_start..].trim_start_matches('\n').to_string()
    } else {
        String::new()
    };

    let front_matter = match serde_yaml::from_str(yaml_content) {
        Ok(fm) => fm,
        Err(e) => {
            eprintln!("Warning: failed to parse front matter: {}", e);
            FrontMatter::default()
        }
    };

    ParsedContent {
        front_matter,
        content: markdown_content,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_title_from_front_matter() {
        let mut doc = Document::new("tech/stack.md".into(), "/tech/stack.html".into());
        doc.front_matter.title = Some("Tech Stack".to_string());
        assert_eq!(doc.title(), "Tech Stack");
    }

    #[test]
    fn test_title_falls_back_to_stem() {
        let doc = Document::new(
            Path::new("projects/my-app.md").to_path_buf(),
            "/projects/my-app.html".to_string(),
        );
        assert_eq!(doc.title(), "My App");
    }

    #[test]
    fn test_parse_front_matter() {
        let parsed = parse_front_matter("---\ntitle: The Full Story\ndescription: Everything\n---\n\n# Hi");
        assert_eq!(parsed.front_matter.title.as_deref(), Some("The Full Story"));
        assert_eq!(parsed.front_matter.description.as_deref(), Some("Everything"));
        assert_eq!(parsed.content, "# Hi");
    }

    #[test]
    fn test_no_front_matter_passes_through() {
        let parsed = parse_front_matter("# Hi\n\ncontent");
        assert!(parsed.front_matter.title.is_none());
        assert_eq!(parsed.content, "# Hi\n\ncontent");
    }

    #[test]
    fn test_unclosed_front_matter_is_treated_as_content() {
        let parsed = parse_front_matter("---\ntitle: nope");
        assert!(parsed.front_matter.title.is_none());
        assert_eq!(parsed.content, "---\ntitle: nope");
    }
}
