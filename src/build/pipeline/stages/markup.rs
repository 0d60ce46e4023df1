//! Markup conversion stage.
//!
//! Converts each document's source text to an HTML fragment and applies
//! the expandable-section post-pass.

use crate::build::expandable::expand_sections;
use crate::build::markup::convert;
use crate::build::pipeline::{PipelineContext, PipelineError, ProcessingDocument, Stage};

/// Stage that converts source markup to HTML.
///
/// Conversion is total: malformed markup passes through as literal text,
/// so this stage never fails. After this stage, `doc.content` contains
/// the converted fragment.
pub struct MarkupStage;

impl Stage for MarkupStage {
    fn name(&self) -> &'static str {
        "markup"
    }

    fn process(
        &self,
        docs: &mut [ProcessingDocument],
        _ctx: &PipelineContext,
    ) -> Result<(), PipelineError> {
        for doc in docs {
            let fragment = convert(&doc.content);
            doc.content = expand_sections(&fragment);
        }

        Ok(())
    }
}
