//! Layout and context types describing a dataset tree being processed.

use std::path::{Path, PathBuf};

use crate::manifest::PathVariant;

/// Filesystem conventions of a labeled dataset tree.
///
/// The layout describes the names this tool looks for rather than any
/// concrete location; pair it with a root directory via [`GenerationContext`].
#[derive(Debug, Clone)]
pub struct DatasetProjectLayout {
  /// Name of the per-dataset directory holding label files.
  pub label_dir_name: String,
  /// Extension of the sibling image inferred for each label file.
  pub image_extension: String,
  /// Stem inserted into generated manifest file names.
  pub manifest_stem: String,
  /// Optional absolute prefix rewritten to a relative marker in manifest
  /// lines. `None` disables the substitution entirely.
  pub strip_prefix: Option<String>,
}

impl DatasetProjectLayout {
  /// Path of a dataset's label directory.
  pub fn label_dir(&self, dataset_dir: &Path) -> PathBuf {
    dataset_dir.join(&self.label_dir_name)
  }

  /// Path of the image a label file with the given base name annotates.
  pub fn image_path(&self, dataset_dir: &Path, base_name: &str) -> PathBuf {
    dataset_dir.join(format!("{}.{}", base_name, self.image_extension))
  }

  /// File name of one manifest variant for the given dataset id.
  pub fn manifest_file_name(&self, dataset_id: &str, variant: PathVariant) -> String {
    format!(
      "{}_{}.{}.txt",
      dataset_id,
      self.manifest_stem,
      variant.tag()
    )
  }
}

/// Everything a [`crate::ManifestBuilder`] needs for one run.
#[derive(Debug, Clone)]
pub struct GenerationContext {
  /// Layout conventions applied to every dataset directory.
  pub layout: DatasetProjectLayout,
  /// Root directory whose immediate subdirectories are the datasets.
  pub datasets_dir: PathBuf,
}

#[cfg(test)]
mod tests {
  use super::*;

  fn layout() -> DatasetProjectLayout {
    DatasetProjectLayout {
      label_dir_name: "Label".into(),
      image_extension: "jpg".into(),
      manifest_stem: "oi_resource".into(),
      strip_prefix: None,
    }
  }

  #[test]
  fn names_manifest_files_per_variant() {
    let layout = layout();
    assert_eq!(
      layout.manifest_file_name("cats", PathVariant::Windows),
      "cats_oi_resource.windows.txt"
    );
    assert_eq!(
      layout.manifest_file_name("cats", PathVariant::Linux),
      "cats_oi_resource.linux.txt"
    );
  }

  #[test]
  fn joins_label_and_image_paths() {
    let layout = layout();
    let dataset = Path::new("/data/cats");
    assert_eq!(layout.label_dir(dataset), Path::new("/data/cats/Label"));
    assert_eq!(
      layout.image_path(dataset, "img001"),
      Path::new("/data/cats/img001.jpg")
    );
  }
}
