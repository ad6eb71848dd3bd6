use std::fs;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use oi_resource_gen::config::ProjectConfig;
use oi_resource_gen::selection::DatasetSelection;
use oi_resource_gen::{BuildResult, GenerationContext, ManifestBuilder};

#[derive(Parser)]
#[command(name = "oi_resource_gen")]
#[command(version)]
#[command(about = "Regenerate per-platform label/image manifests for a dataset tree")]
struct Cli {
  /// Root directory containing dataset subdirectories (overrides the configured root)
  root: Option<PathBuf>,
  /// Configuration file to load instead of discovering oi_resource.config.json
  #[arg(long, value_name = "FILE")]
  config: Option<PathBuf>,
  /// Absolute prefix rewritten to a relative marker in manifest lines
  #[arg(long, value_name = "PREFIX")]
  strip_prefix: Option<String>,
  /// Write the generation report as prettified JSON to this file
  #[arg(long, value_name = "FILE")]
  summary_json: Option<PathBuf>,
}

fn main() {
  let cli = Cli::parse();

  if let Err(err) = run(cli) {
    eprintln!("error: {err}");
    process::exit(1);
  }
}

fn run(cli: Cli) -> BuildResult<()> {
  let base_dir = std::env::current_dir()?;
  let config = match &cli.config {
    Some(path) => ProjectConfig::load(path)?,
    None => ProjectConfig::discover(&base_dir),
  };

  let root = cli
    .root
    .unwrap_or_else(|| config.datasets_dir_path(&base_dir));
  let selection = DatasetSelection::load_from_path(config.datasets_local_file(&root))?;

  let mut layout = config.into_layout();
  if let Some(prefix) = cli.strip_prefix {
    layout.strip_prefix = Some(prefix);
  }

  println!("Scanning {}...", root.display());

  let builder = ManifestBuilder::new(GenerationContext {
    layout,
    datasets_dir: root,
  });
  let report = builder.run(&selection)?;

  for record in &report.datasets {
    println!("  {}: {} label files", record.id, record.label_count);
  }
  println!(
    "Generated manifests for {} datasets ({} label files); skipped {} directories without labels.",
    report.datasets.len(),
    report.total_labels(),
    report.skipped.len()
  );

  if let Some(path) = cli.summary_json {
    fs::write(&path, serde_json::to_string_pretty(&report)?)?;
    println!("Report written to {}.", path.display());
  }

  Ok(())
}
