use std::path::PathBuf;

use chrono::Local;

use crate::config::Config;

use super::document::{ContentItem, parse_front_matter};
use super::paths::url_to_output_path;
use super::pipeline::{Pipeline, PipelineContext, PipelineError, ProcessingDocument};
use super::source::{SourceError, discover_content};

#[derive(thiserror::Error, Debug)]
pub enum BuildError {
    #[error("source error: {0}")]
    Source(#[from] SourceError),

    #[error("pipeline error: {0}")]
    Pipeline(#[from] PipelineError),

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to copy {path}: {source}")]
    Copy {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub struct BuildResult {
    pub output_dir: PathBuf,
    pub documents: usize,
    pub static_files: usize,
}

pub struct Builder {
    config: Config,
    /// Base path for resolving relative paths (typically the config file's directory)
    base_path: PathBuf,
}

impl Builder {
    pub fn new(config: Config, base_path: PathBuf) -> Self {
        Self { config, base_path }
    }

    /// Build the whole site, sequentially, one document at a time.
    ///
    /// A failure reading or writing one document aborts the run; there is
    /// no isolation between documents.
    pub async fn build(&self) -> Result<BuildResult, BuildError> {
        // 1. Discover content -> ContentItem[]
        // 2. Read each document and split off front matter
        // 3. Run the document pipeline (markup -> tags -> page -> write)
        // 4. Copy static files through unchanged

        let content_dir = self.content_dir();
        let items = discover_content(&content_dir)?;

        let doc_count = items
            .iter()
            .filter(|item| matches!(item, ContentItem::Document(_)))
            .count();
        let static_count = items.len() - doc_count;
        println!(
            "Found {} document(s) and {} static file(s) in {}",
            doc_count,
            static_count,
            content_dir.display()
        );

        let output_dir = self.output_dir();
        std::fs::create_dir_all(&output_dir).map_err(|e| BuildError::CreateDir {
            path: output_dir.clone(),
            source: e,
        })?;

        // Read documents and queue them for the pipeline
        let mut docs: Vec<ProcessingDocument> = Vec::new();
        for item in &items {
            if let ContentItem::Document(doc) = item {
                let input_path = content_dir.join(&doc.source_path);
                let raw = std::fs::read_to_string(&input_path).map_err(|e| BuildError::Read {
                    path: input_path.clone(),
                    source: e,
                })?;

                let parsed = parse_front_matter(&raw);
                let mut doc = doc.clone();
                doc.front_matter = parsed.front_matter;

                docs.push(ProcessingDocument::new(doc, parsed.content));
            }
        }

        // The build date is read once here and injected; assembly itself
        // never touches the clock
        let ctx = PipelineContext::new(&output_dir, Local::now().date_naive());
        Pipeline::default_pipeline().run(&mut docs, &ctx)?;

        // Static passthrough: CSS, JS and images are copied as-is
        for item in &items {
            if let ContentItem::Static(file) = item {
                let input_path = content_dir.join(&file.source_path);
                let output_path = url_to_output_path(&file.output_path, &output_dir);

                if let Some(parent) = output_path.parent() {
                    std::fs::create_dir_all(parent).map_err(|e| BuildError::CreateDir {
                        path: parent.to_path_buf(),
                        source: e,
                    })?;
                }
                std::fs::copy(&input_path, &output_path).map_err(|e| BuildError::Copy {
                    path: input_path.clone(),
                    source: e,
                })?;
            }
        }

        Ok(BuildResult {
            output_dir,
            documents: doc_count,
            static_files: static_count,
        })
    }

    /// Get the content directory path, resolved against base_path.
    fn content_dir(&self) -> PathBuf {
        let content = &self.config.site.content;
        if content.is_relative() {
            self.base_path.join(content)
        } else {
            content.clone()
        }
    }

    /// Get the output directory path, resolved against base_path.
    fn output_dir(&self) -> PathBuf {
        let output = &self.config.site.output;
        if output.is_relative() {
            self.base_path.join(output)
        } else {
            output.clone()
        }
    }
}
