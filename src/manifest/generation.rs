//! Regenerating the manifest pair for a single dataset directory.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::builder::BuildResult;
use crate::manifest::lines::PathVariant;
use crate::manifest::scanning::collect_label_entries;
use crate::models::DatasetManifestRecord;
use crate::project::DatasetProjectLayout;

/// Regenerate both manifest variants for one dataset directory.
///
/// The caller must have confirmed that `dataset_dir` exists. A dataset
/// without a label directory is skipped silently and yields `Ok(None)`.
/// Stale manifests are deleted first; a deletion failure is reported on
/// stderr and generation continues. Enumeration and write failures
/// propagate.
///
/// Manifests are written into `root_dir`, one line per label file, in the
/// filesystem's enumeration order.
pub fn generate_dataset_manifests(
  layout: &DatasetProjectLayout,
  root_dir: &Path,
  dataset_dir: &Path,
) -> BuildResult<Option<DatasetManifestRecord>> {
  if !layout.label_dir(dataset_dir).is_dir() {
    return Ok(None);
  }

  let Some(dataset_id) = dataset_dir
    .file_name()
    .map(|name| name.to_string_lossy().to_string())
  else {
    return Ok(None);
  };

  let windows_manifest = root_dir.join(layout.manifest_file_name(&dataset_id, PathVariant::Windows));
  let linux_manifest = root_dir.join(layout.manifest_file_name(&dataset_id, PathVariant::Linux));

  remove_stale_manifest(&windows_manifest);
  remove_stale_manifest(&linux_manifest);

  let entries = collect_label_entries(layout, dataset_dir)?;

  if !entries.is_empty() {
    let mut windows = BufWriter::new(fs::File::create(&windows_manifest)?);
    let mut linux = BufWriter::new(fs::File::create(&linux_manifest)?);
    let strip_prefix = layout.strip_prefix.as_deref();

    for entry in &entries {
      let line = format!(
        "{} {}",
        entry.label_path.display(),
        entry.image_path.display()
      );
      writeln!(windows, "{}", PathVariant::Windows.render_line(&line, strip_prefix))?;
      writeln!(linux, "{}", PathVariant::Linux.render_line(&line, strip_prefix))?;
    }

    windows.flush()?;
    linux.flush()?;
  }

  Ok(Some(DatasetManifestRecord {
    id: dataset_id,
    label_count: entries.len(),
    windows_manifest,
    linux_manifest,
  }))
}

/// Delete a manifest left behind by a previous run.
///
/// Failure is reported but never aborts the run; the subsequent write opens
/// the file with truncation, so a lingering file cannot contribute stale
/// lines.
fn remove_stale_manifest(path: &Path) {
  if path.exists() {
    if let Err(err) = fs::remove_file(path) {
      eprintln!(
        "warning: failed to delete existing manifest {}: {}",
        path.display(),
        err
      );
    }
  }
}
