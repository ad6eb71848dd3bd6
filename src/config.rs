//! Project configuration loader describing the dataset tree layout.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

use crate::project::DatasetProjectLayout;

const DEFAULT_CONFIG_FILE: &str = "oi_resource.config.json";

/// Discoverable project configuration describing where datasets live and how
/// manifest lines are rendered.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
  /// Root directory whose immediate subdirectories are the datasets.
  pub datasets_dir: String,
  /// Name of the per-dataset directory holding label files.
  pub label_dir_name: String,
  /// Extension of the sibling image inferred for each label file.
  pub image_extension: String,
  /// Stem inserted into generated manifest file names.
  pub manifest_stem: String,
  /// Optional absolute prefix rewritten to a relative marker in manifest
  /// lines. Absent by default, which disables the substitution.
  pub strip_prefix: Option<String>,
  /// Optional JSON file inside the root describing which datasets to process.
  pub datasets_local_path: String,
}

impl Default for ProjectConfig {
  fn default() -> Self {
    Self {
      datasets_dir: "images/open-images".into(),
      label_dir_name: "Label".into(),
      image_extension: "jpg".into(),
      manifest_stem: "oi_resource".into(),
      strip_prefix: None,
      datasets_local_path: "datasets.local.json".into(),
    }
  }
}

impl ProjectConfig {
  /// Attempt to load configuration from the provided directory.
  ///
  /// When the configuration file does not exist or fails to parse we fall
  /// back to default values so downstream callers can continue operating
  /// with sensible assumptions.
  pub fn discover(base_dir: &Path) -> Self {
    let candidate = base_dir.join(DEFAULT_CONFIG_FILE);
    Self::from_path(&candidate).unwrap_or_default()
  }

  /// Read configuration from a specific JSON file, if it parses.
  pub fn from_path(path: &Path) -> Option<Self> {
    let content = fs::read_to_string(path).ok()?;
    serde_json::from_str(&content).ok()
  }

  /// Read configuration from an explicitly requested JSON file.
  ///
  /// Unlike [`ProjectConfig::discover`], a missing or malformed file is an
  /// error here: the caller asked for this exact file.
  pub fn load(path: &Path) -> anyhow::Result<Self> {
    let content = fs::read_to_string(path)
      .with_context(|| format!("configuration not found at {}", path.display()))?;
    let config =
      serde_json::from_str(&content).context("failed to parse project configuration JSON")?;
    Ok(config)
  }

  /// Convert the configuration into the runtime layout description.
  pub fn into_layout(self) -> DatasetProjectLayout {
    DatasetProjectLayout {
      label_dir_name: self.label_dir_name,
      image_extension: self.image_extension,
      manifest_stem: self.manifest_stem,
      strip_prefix: self.strip_prefix,
    }
  }

  /// Root directory resolved against an arbitrary base.
  pub fn datasets_dir_path(&self, base_dir: &Path) -> PathBuf {
    base_dir.join(&self.datasets_dir)
  }

  /// Path to the dataset selection file inside the root.
  pub fn datasets_local_file(&self, root: &Path) -> PathBuf {
    root.join(&self.datasets_local_path)
  }
}
