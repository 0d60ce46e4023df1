//! Pipeline error types.

use std::path::PathBuf;

/// Errors that can occur during pipeline processing.
///
/// The converter and assembler are total, so everything here belongs to
/// the I/O edge: failures carry the offending path so the driver can
/// report which document's build aborted.
#[derive(thiserror::Error, Debug)]
pub enum PipelineError {
    #[error("failed to create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("stage '{stage}' failed: {message}")]
    Stage { stage: String, message: String },
}

impl PipelineError {
    /// Create a stage-specific error.
    pub fn stage(stage: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Stage {
            stage: stage.into(),
            message: message.into(),
        }
    }
}
