//! Data structures produced while generating dataset manifests.

use std::path::PathBuf;

use serde::Serialize;

/// One label file paired with the image it annotates.
#[derive(Debug, Clone)]
pub struct LabelEntry {
  /// Absolute path of the label file inside the dataset's label directory.
  pub label_path: PathBuf,
  /// Inferred path of the sibling image, directly inside the dataset
  /// directory, sharing the label's base name.
  pub image_path: PathBuf,
}

/// Outcome of regenerating the manifests of a single dataset directory.
#[derive(Debug, Clone, Serialize)]
pub struct DatasetManifestRecord {
  /// Dataset identifier, the directory's base name.
  pub id: String,
  /// Number of label files found, and therefore lines written per manifest.
  pub label_count: usize,
  /// Path of the windows-variant manifest.
  pub windows_manifest: PathBuf,
  /// Path of the linux-variant manifest.
  pub linux_manifest: PathBuf,
}

/// Summary of a whole-root generation run.
#[derive(Debug, Default, Clone, Serialize)]
pub struct GenerationReport {
  /// One record per dataset directory that had a label directory.
  pub datasets: Vec<DatasetManifestRecord>,
  /// Ids of subdirectories skipped because they had no label directory.
  pub skipped: Vec<String>,
}

impl GenerationReport {
  /// Total number of label files across all processed datasets.
  pub fn total_labels(&self) -> usize {
    self.datasets.iter().map(|record| record.label_count).sum()
  }
}
