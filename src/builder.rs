//! Run orchestrator walking a dataset root and regenerating its manifests.

use std::fs;

use crate::manifest::{dataset_directories, generate_dataset_manifests};
use crate::models::GenerationReport;
use crate::project::GenerationContext;
use crate::selection::DatasetInclusion;

/// Generic result type used across the crate.
pub type BuildResult<T> = Result<T, Box<dyn std::error::Error>>;

/// High-level helper for regenerating the manifests of every dataset under a
/// root directory.
pub struct ManifestBuilder {
  context: GenerationContext,
}

impl ManifestBuilder {
  /// Create a builder for the provided generation context.
  pub fn new(context: GenerationContext) -> Self {
    Self { context }
  }

  /// Walk the root and regenerate manifests for each selected dataset.
  ///
  /// The configured root is resolved to an absolute path first; a root that
  /// does not exist is a fatal error. Datasets are processed sequentially in
  /// the filesystem's enumeration order. Directories without a label
  /// directory are recorded as skipped, not treated as errors.
  pub fn run<S: DatasetInclusion>(&self, selection: &S) -> BuildResult<GenerationReport> {
    let root = fs::canonicalize(&self.context.datasets_dir)?;
    let mut report = GenerationReport::default();

    for dataset_dir in dataset_directories(&root)? {
      let dataset_id = dataset_dir
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_default();

      if !selection.is_included(&dataset_id) {
        continue;
      }

      match generate_dataset_manifests(&self.context.layout, &root, &dataset_dir)? {
        Some(record) => report.datasets.push(record),
        None => report.skipped.push(dataset_id),
      }
    }

    Ok(report)
  }
}
