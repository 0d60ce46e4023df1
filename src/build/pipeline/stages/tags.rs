//! Tech-tag stage.
//!
//! Extracts the tag list from the *raw* source text (the "Tech Stack Tags"
//! section markers are gone from the converted fragment by now) and appends
//! the rendered tag block to the page content.

use crate::build::pipeline::{PipelineContext, PipelineError, ProcessingDocument, Stage};
use crate::build::tags::{extract_tags, render_tags};

/// Stage that appends the rendered tech-tag block to documents that carry
/// a tags section. Documents without one are left untouched.
pub struct TagsStage;

impl Stage for TagsStage {
    fn name(&self) -> &'static str {
        "tags"
    }

    fn process(
        &self,
        docs: &mut [ProcessingDocument],
        _ctx: &PipelineContext,
    ) -> Result<(), PipelineError> {
        for doc in docs {
            let tags = extract_tags(&doc.raw);
            if !tags.is_empty() {
                doc.content.push('\n');
                doc.content.push_str(&render_tags(&tags));
            }
        }

        Ok(())
    }
}
