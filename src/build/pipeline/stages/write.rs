//! File writing stage.
//!
//! Writes the final HTML output to the filesystem.

use crate::build::paths::url_to_output_path;
use crate::build::pipeline::{PipelineContext, PipelineError, ProcessingDocument, Stage};

/// Stage that writes assembled documents to the output directory.
///
/// Takes the final HTML from `doc.output_html` and writes it to the
/// matching location under the output directory, creating any necessary
/// parent directories. I/O failures carry the offending path.
pub struct WriteStage;

impl Stage for WriteStage {
    fn name(&self) -> &'static str {
        "write"
    }

    fn process(
        &self,
        docs: &mut [ProcessingDocument],
        ctx: &PipelineContext,
    ) -> Result<(), PipelineError> {
        for doc in docs {
            let html = doc.output_html.as_ref().ok_or_else(|| {
                PipelineError::stage(
                    "write",
                    format!(
                        "document '{}' has no output HTML (was the page stage run?)",
                        doc.url_path()
                    ),
                )
            })?;

            let output_path = url_to_output_path(doc.url_path(), ctx.output_dir);

            if let Some(parent) = output_path.parent() {
                std::fs::create_dir_all(parent).map_err(|e| PipelineError::CreateDir {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }

            std::fs::write(&output_path, html).map_err(|e| PipelineError::Write {
                path: output_path.clone(),
                source: e,
            })?;

            println!("✓ Generated: {}", output_path.display());
        }

        Ok(())
    }
}
