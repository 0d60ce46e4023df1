//! Default pipeline stages.
//!
//! The standard document processing pipeline consists of:
//!
//! 1. **MarkupStage** - Convert source markup to an HTML fragment
//! 2. **TagsStage** - Extract tech tags from the raw source and append them
//! 3. **PageStage** - Wrap the fragment in the full page skeleton
//! 4. **WriteStage** - Write final HTML to the output directory

mod markup;
mod page;
mod tags;
mod write;

pub use markup::MarkupStage;
pub use page::PageStage;
pub use tags::TagsStage;
pub use write::WriteStage;
