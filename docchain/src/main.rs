//! docchain: resolve inherited documentation from JSON hierarchy manifests.
//!
//! Supports two modes:
//!
//! - **stdin mode**: `docchain < hierarchy.json`
//! - **file mode**: `docchain -o docs/api -f json manifests/*.json`

mod manifest;
mod model;
mod render;
mod toc;

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::level_filters::LevelFilter;
use tracing::{debug, warn};

#[derive(Parser)]
#[command(
    name = "docchain",
    about = "Compose inherited documentation across type hierarchies"
)]
struct Cli {
    /// Manifest files (glob patterns and directories supported). If omitted, reads from stdin.
    files: Vec<String>,

    /// Output directory (required when files are given)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Output format: markdown (default), json
    #[arg(short = 'f', long, default_value = "markdown")]
    format: String,

    /// Only render the named types. Can be specified multiple times.
    #[arg(long = "type", value_name = "NAME")]
    types: Vec<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.files.is_empty() {
        return stdin_mode(&cli);
    }

    file_mode(&cli)
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .without_time()
        .with_writer(io::stderr)
        .init();
}

/// stdin mode: read one manifest from stdin, write the rendered result to stdout.
fn stdin_mode(cli: &Cli) -> Result<()> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;

    let renderer = render::create_renderer(&cli.format)?;
    let resolved = manifest::load(&manifest::parse(&input)?)?;
    let doc = model::Document::build(&resolved, &cli.types);
    print!("{}", renderer.render(&doc)?);
    Ok(())
}

/// file mode: process every manifest, write one output file per manifest.
fn file_mode(cli: &Cli) -> Result<()> {
    let output_dir = cli
        .output
        .as_deref()
        .context("--output is required when files are given")?;

    let renderer = render::create_renderer(&cli.format)?;
    let ext = renderer.file_extension();

    fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create output directory: {}", output_dir.display()))?;

    let input_files = expand_globs(&cli.files)?;

    let mut written = 0usize;
    for path in &input_files {
        let resolved = match read_manifest(path) {
            Ok(resolved) => resolved,
            Err(e) => {
                warn!("skipping {}: {:#}", path.display(), e);
                continue;
            }
        };

        let doc = model::Document::build(&resolved, &cli.types);
        let name = derive_output_name(path);
        let out_path = output_dir.join(format!("{}.{}", name, ext));

        fs::write(&out_path, renderer.render(&doc)?)
            .with_context(|| format!("failed to write {}", out_path.display()))?;
        debug!("wrote {}", out_path.display());
        written += 1;
    }

    if written == 0 {
        anyhow::bail!("no manifests processed");
    }
    Ok(())
}

fn read_manifest(path: &Path) -> Result<manifest::Resolved> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    manifest::load(&manifest::parse(&content)?)
}

/// File extensions recognized as manifests.
const SUPPORTED_EXTENSIONS: &[&str] = &["json"];

/// Expand glob patterns into a list of real file paths.
/// Also handles bare directory paths by scanning for manifests.
fn expand_globs(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in patterns {
        let path = Path::new(pattern);
        if path.is_file() {
            files.push(path.to_path_buf());
            continue;
        }
        // If it's a directory, scan for manifests (non-recursive)
        if path.is_dir() {
            let entries = fs::read_dir(path)
                .with_context(|| format!("failed to read directory: {}", path.display()))?;
            for entry in entries.flatten() {
                let p = entry.path();
                if p.is_file() {
                    if let Some(ext) = p.extension().and_then(|e| e.to_str()) {
                        if SUPPORTED_EXTENSIONS.contains(&ext) {
                            files.push(p);
                        }
                    }
                }
            }
            continue;
        }
        let matches: Vec<_> = glob::glob(pattern)
            .with_context(|| format!("invalid glob pattern: {}", pattern))?
            .filter_map(|r| r.ok())
            .filter(|p| p.is_file())
            .collect();
        if matches.is_empty() {
            warn!("no files matched: {}", pattern);
        }
        files.extend(matches);
    }
    // Sort for deterministic output
    files.sort();
    files.dedup();
    Ok(files)
}

/// Derive the output file name (without extension) from a manifest path.
/// "manifests/shapes.json" → "shapes"
fn derive_output_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_name_from_json() {
        assert_eq!(derive_output_name(Path::new("manifests/shapes.json")), "shapes");
        assert_eq!(derive_output_name(Path::new("shapes.json")), "shapes");
    }

    #[test]
    fn output_name_no_extension() {
        assert_eq!(derive_output_name(Path::new("hierarchy")), "hierarchy");
    }

    #[test]
    fn expand_directory_picks_manifests() {
        let dir = tempfile::TempDir::new().unwrap();
        fs::write(dir.path().join("b.json"), "{}").unwrap();
        fs::write(dir.path().join("a.json"), "{}").unwrap();
        fs::write(dir.path().join("notes.txt"), "").unwrap();
        let files = expand_globs(&[dir.path().to_string_lossy().to_string()]).unwrap();
        let names: Vec<String> = files.iter().map(|p| derive_output_name(p)).collect();
        assert_eq!(names, vec!["a", "b"]);
    }
}
