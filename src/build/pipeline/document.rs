//! Document types for pipeline processing.

use crate::build::document::Document;

/// A document being processed through the pipeline.
///
/// Wraps the discovered `Document` with mutable state that evolves
/// through pipeline stages:
///
/// 1. Initially: `content` = raw markup source
/// 2. After markup: `content` = HTML fragment (converted + expandables)
/// 3. After tags: `content` = fragment with the tag block appended
/// 4. After page: `output_html` = full HTML document
///
/// `raw` keeps the untouched source text because tag extraction reads the
/// original markup, not the converted fragment.
#[derive(Debug)]
pub struct ProcessingDocument {
    /// The discovered document (metadata and paths)
    pub doc: Document,

    /// The raw source text as read from disk, never modified
    pub raw: String,

    /// Content being processed; starts as a copy of `raw`
    pub content: String,

    /// Final HTML output after page assembly.
    ///
    /// None until the page stage populates it.
    pub output_html: Option<String>,
}

impl ProcessingDocument {
    /// Create a new processing document from a discovered document and its
    /// source text.
    pub fn new(doc: Document, raw: String) -> Self {
        let content = raw.clone();
        Self {
            doc,
            raw,
            content,
            output_html: None,
        }
    }

    /// Get the document's site-relative output path.
    pub fn url_path(&self) -> &str {
        &self.doc.url_path
    }

    /// Get the document title.
    pub fn title(&self) -> String {
        self.doc.title()
    }
}
