//! Pipeline context for sharing state across stages.

use std::path::Path;

use chrono::NaiveDate;

/// Shared context for pipeline stages.
///
/// The build date is read once per build by the driver and injected here,
/// so assembly stays deterministic within a run.
pub struct PipelineContext<'a> {
    /// Directory where output files are written
    pub output_dir: &'a Path,

    /// Calendar date stamped into the page footer
    pub build_date: NaiveDate,
}

impl<'a> PipelineContext<'a> {
    pub fn new(output_dir: &'a Path, build_date: NaiveDate) -> Self {
        Self {
            output_dir,
            build_date,
        }
    }
}
