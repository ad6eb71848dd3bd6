//! Directory scanning utilities for dataset trees.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::models::LabelEntry;
use crate::project::DatasetProjectLayout;

/// List the immediate subdirectories of the dataset root.
///
/// Hidden (dot-prefixed) entries are ignored. The filesystem's enumeration
/// order is preserved; no sorting is applied.
pub fn dataset_directories(root: &Path) -> io::Result<Vec<PathBuf>> {
  let mut directories = Vec::new();

  for entry in fs::read_dir(root)? {
    let entry = entry?;
    if !entry.file_type()?.is_dir() {
      continue;
    }
    if entry.file_name().to_string_lossy().starts_with('.') {
      continue;
    }
    directories.push(entry.path());
  }

  Ok(directories)
}

/// Collect the label files directly inside a dataset's label directory.
///
/// The scan is non-recursive and only considers regular files. Each entry is
/// paired with the image path it implies: the dataset directory joined with
/// the label's base name plus the configured image extension.
pub fn collect_label_entries(
  layout: &DatasetProjectLayout,
  dataset_dir: &Path,
) -> io::Result<Vec<LabelEntry>> {
  let mut entries = Vec::new();

  for entry in fs::read_dir(layout.label_dir(dataset_dir))? {
    let entry = entry?;
    if !entry.file_type()?.is_file() {
      continue;
    }

    let label_path = entry.path();
    let base_name = label_path
      .file_stem()
      .map(|stem| stem.to_string_lossy().to_string())
      .unwrap_or_default();

    entries.push(LabelEntry {
      image_path: layout.image_path(dataset_dir, &base_name),
      label_path,
    });
  }

  Ok(entries)
}
