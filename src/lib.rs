#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod builder;
pub mod config;
pub mod manifest;
pub mod models;
pub mod project;
pub mod selection;

pub use builder::{BuildResult, ManifestBuilder};
pub use config::ProjectConfig;
pub use models::GenerationReport;
pub use project::{DatasetProjectLayout, GenerationContext};
pub use selection::DatasetInclusion;
