//! Helpers used to filter which datasets are processed during a run.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Trait describing selection filters applied to dataset directories.
pub trait DatasetInclusion {
  /// Returns `true` when the dataset should be processed.
  fn is_included(&self, dataset_id: &str) -> bool;
}

/// Configuration file layout for selecting which datasets to process.
#[derive(Debug, Default, Deserialize)]
struct DatasetSelectionFile {
  #[serde(default)]
  include: Vec<String>,
  #[serde(default)]
  exclude: Vec<String>,
}

/// Selection helper allowing run-time filtering of dataset directories.
///
/// An absent include list means every dataset is eligible; exclusions always
/// win over inclusions.
#[derive(Debug, Clone, Default)]
pub struct DatasetSelection {
  include: Option<BTreeSet<String>>,
  exclude: BTreeSet<String>,
}

/// Errors that can occur while loading the selection configuration.
#[derive(Debug)]
pub enum DatasetSelectionError {
  /// Failed to read the selection file from disk.
  Io {
    /// Path that caused the error.
    path: PathBuf,
    /// Source I/O error.
    source: std::io::Error,
  },
  /// Failed to parse the JSON selection file.
  Parse {
    /// Path that caused the error.
    path: PathBuf,
    /// Source parse error.
    source: serde_json::Error,
  },
}

impl DatasetSelection {
  /// Load configuration from the selection file if present.
  ///
  /// A missing file yields the default, unfiltered selection.
  pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, DatasetSelectionError> {
    let path = path.as_ref();
    let contents = match fs::read_to_string(path) {
      Ok(contents) => contents,
      Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
        return Ok(Self::default());
      }
      Err(err) => {
        return Err(DatasetSelectionError::Io {
          path: path.to_path_buf(),
          source: err,
        });
      }
    };

    let file: DatasetSelectionFile =
      serde_json::from_str(&contents).map_err(|err| DatasetSelectionError::Parse {
        path: path.to_path_buf(),
        source: err,
      })?;
    Ok(Self::from(file))
  }

  /// Determine whether a dataset should be processed.
  pub fn is_included(&self, dataset_id: &str) -> bool {
    if self.exclude.contains(dataset_id) {
      return false;
    }

    match &self.include {
      Some(include) => include.contains(dataset_id),
      None => true,
    }
  }

  /// Returns true when no filtering rules are active.
  #[cfg(test)]
  fn is_unfiltered(&self) -> bool {
    self.include.is_none() && self.exclude.is_empty()
  }
}

impl DatasetInclusion for DatasetSelection {
  fn is_included(&self, dataset_id: &str) -> bool {
    DatasetSelection::is_included(self, dataset_id)
  }
}

impl From<DatasetSelectionFile> for DatasetSelection {
  fn from(file: DatasetSelectionFile) -> Self {
    let include = normalise_list(file.include);
    let exclude = normalise_list(file.exclude);

    Self {
      include: (!include.is_empty()).then_some(include),
      exclude,
    }
  }
}

impl std::fmt::Display for DatasetSelectionError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Io { path, source } => {
        write!(f, "failed to read {}: {}", path.display(), source)
      }
      Self::Parse { path, source } => {
        write!(f, "failed to parse {}: {}", path.display(), source)
      }
    }
  }
}

impl std::error::Error for DatasetSelectionError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      Self::Io { source, .. } => Some(source),
      Self::Parse { source, .. } => Some(source),
    }
  }
}

/// Convert a list of raw identifiers into a sorted, de-duplicated set.
///
/// Values are trimmed and empty entries are discarded to simplify downstream
/// filtering logic.
fn normalise_list(values: impl IntoIterator<Item = String>) -> BTreeSet<String> {
  values
    .into_iter()
    .map(|value| value.trim().to_string())
    .filter(|value| !value.is_empty())
    .collect()
}
