//! Manifest generation broken into focused submodules for easier testing.

mod generation;
mod lines;
mod scanning;

pub use generation::generate_dataset_manifests;
pub use lines::PathVariant;
pub use scanning::{collect_label_entries, dataset_directories};
