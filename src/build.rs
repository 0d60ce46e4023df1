mod breadcrumbs;
mod builder;
mod document;
mod expandable;
mod markup;
mod page;
mod paths;
pub mod pipeline;
pub mod source;
mod tags;

pub use builder::{BuildError, BuildResult, Builder};
pub use paths::base_path_from_config;
