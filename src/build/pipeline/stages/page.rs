//! Page assembly stage.
//!
//! Wraps each converted fragment in the full page skeleton: header,
//! breadcrumb trail, footer with the injected build date, and the depth
//! indicator on non-landing pages.

use crate::build::page::{PageMetadata, assemble_page};
use crate::build::pipeline::{PipelineContext, PipelineError, ProcessingDocument, Stage};

/// Stage that assembles the complete HTML document.
///
/// After this stage, `doc.output_html` contains the final page.
pub struct PageStage;

impl Stage for PageStage {
    fn name(&self) -> &'static str {
        "page"
    }

    fn process(
        &self,
        docs: &mut [ProcessingDocument],
        ctx: &PipelineContext,
    ) -> Result<(), PipelineError> {
        for doc in docs {
            let meta = PageMetadata {
                title: doc.title(),
                description: doc.doc.description(),
                output_path: doc.doc.url_path.clone(),
            };

            doc.output_html = Some(assemble_page(&doc.content, &meta, ctx.build_date));
        }

        Ok(())
    }
}
