//! Theme generation pipeline: collect, convert once, render, write.

use std::fs;
use std::path::{Path, PathBuf};

use crate::args::Args;
use crate::collect::collect_colors;
use crate::convert::{ConversionCache, ConvertColors, SwiftConverter};
use crate::palette::{self, SchemeName};
use crate::template;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Default location of the bundled conversion script, relative to the
/// working directory.
pub const DEFAULT_CONVERTER_SCRIPT: &str = "scripts/convert-color.swift";

/// What: Run theme generation for every requested scheme variant.
///
/// Inputs:
/// - `args`: Parsed command-line arguments (variant filter, output directory,
///   converter script override, dry-run).
///
/// Output:
/// - `Ok(())` once every requested variant has been produced.
///
/// # Errors
/// - Returns `Err` for an unknown variant name, a failed conversion batch, a
///   missed color at render time, or an output write failure. The first
///   failing variant aborts the run.
pub fn run(args: &Args) -> Result<()> {
    let variants = requested_variants(&args.variant)?;
    let script = args
        .converter
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONVERTER_SCRIPT));
    let converter = SwiftConverter::new(script);
    for name in variants {
        generate_variant(name, &converter, &args.out_dir, args.dry_run)?;
    }
    Ok(())
}

/// Resolve the `--variant` filter to concrete scheme names; empty means all.
fn requested_variants(filter: &[String]) -> Result<Vec<SchemeName>> {
    if filter.is_empty() {
        return Ok(SchemeName::ALL.to_vec());
    }
    let mut names = Vec::with_capacity(filter.len());
    for raw in filter {
        names.push(raw.parse::<SchemeName>()?);
    }
    Ok(names)
}

/// What: Produce one variant's theme document.
///
/// Inputs:
/// - `name`: Scheme variant to generate.
/// - `converter`: Conversion capability; invoked exactly once per call.
/// - `out_dir`: Target directory for the `.xccolortheme` file.
/// - `dry_run`: Render without writing when set.
///
/// Output:
/// - `Ok(())` after the document is written (or rendered, in dry-run mode).
///
/// Details:
/// - Each call owns a fresh [`ConversionCache`]; nothing is shared between
///   variants. Collection runs strictly before conversion, conversion
///   strictly before the first template lookup.
///
/// # Errors
/// - Propagates conversion failures and output I/O errors; either aborts
///   this variant with no partial file written.
pub fn generate_variant(
    name: SchemeName,
    converter: &dyn ConvertColors,
    out_dir: &Path,
    dry_run: bool,
) -> Result<()> {
    let scheme = palette::scheme(name);
    let keys = collect_colors(&scheme);
    tracing::debug!(variant = %name, colors = keys.len(), "collected scheme colors");

    let mut cache = ConversionCache::new();
    cache.convert_all(&keys, converter)?;

    let document = template::render(&scheme, &cache)?;
    let path = out_dir.join(format!("{}.xccolortheme", name.title()));
    if dry_run {
        tracing::info!(path = %path.display(), "dry run; not writing");
        return Ok(());
    }
    fs::write(&path, document)?;
    tracing::info!(path = %path.display(), "updated theme");
    Ok(())
}
