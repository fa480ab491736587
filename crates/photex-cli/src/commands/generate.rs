//! Generate command implementation
//!
//! Decodes the input image, runs the synthesis pipeline, and writes the
//! selected maps as deterministic PNG files.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use anyhow::{Context, Result};
use colored::Colorize;
use photex_core::png::{self, PngConfig};
use photex_core::{synthesize, MapKind, MapSet};

use super::json_output::{error_codes, GenerateOutput, GeneratedMap, JsonError};
use crate::decode;

/// Run the generate command
///
/// # Arguments
/// * `input` - Path to the input image (PNG, JPEG, or WebP)
/// * `out_dir` - Output directory for the generated maps
/// * `maps` - Optional comma-separated subset of map kinds to write
/// * `json_output` - Whether to output machine-readable JSON diagnostics
///
/// # Returns
/// Exit code: 0 success, 1 input error, 2 generation/export error
pub fn run(input: &str, out_dir: &str, maps: Option<&str>, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(input, out_dir, maps)
    } else {
        run_human(input, out_dir, maps)
    }
}

/// Run generate with human-readable (colored) output
fn run_human(input: &str, out_dir: &str, maps: Option<&str>) -> Result<ExitCode> {
    let start = Instant::now();

    let kinds = select_kinds(maps).map_err(|message| anyhow::anyhow!(message))?;

    println!("{} {}", "Generating from:".cyan().bold(), input);
    println!("{} {}", "Output directory:".cyan().bold(), out_dir);

    let raster = decode::load_raster(Path::new(input))?;
    println!(
        "{} {} x {}",
        "Resolution:".dimmed(),
        raster.width,
        raster.height
    );

    let set = match synthesize(&raster) {
        Ok(set) => set,
        Err(e) => {
            println!("\n{} {}", "GENERATION FAILED".red().bold(), e);
            return Ok(ExitCode::from(2));
        }
    };

    match write_maps(&set, &kinds, out_dir, &file_stem(input)) {
        Ok(written) => {
            for (kind, path, hash) in &written {
                println!(
                    "  {} {} ({})",
                    kind.as_str().green(),
                    path.display(),
                    &hash[..16]
                );
            }
            println!(
                "\n{} Generated {} map(s) in {}ms",
                "SUCCESS".green().bold(),
                written.len(),
                start.elapsed().as_millis()
            );
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            println!("\n{} {:#}", "GENERATION FAILED".red().bold(), e);
            Ok(ExitCode::from(2))
        }
    }
}

/// Run generate with machine-readable JSON output
fn run_json(input: &str, out_dir: &str, maps: Option<&str>) -> Result<ExitCode> {
    let kinds = match select_kinds(maps) {
        Ok(kinds) => kinds,
        Err(message) => {
            return emit_failure(input, 0, 0, error_codes::UNKNOWN_MAP, &message, 1);
        }
    };

    let raster = match decode::load_raster(Path::new(input)) {
        Ok(raster) => raster,
        Err(e) => {
            return emit_failure(input, 0, 0, error_codes::DECODE, &format!("{:#}", e), 1);
        }
    };
    let (width, height) = (raster.width, raster.height);

    let set = match synthesize(&raster) {
        Ok(set) => set,
        Err(e) => {
            return emit_failure(
                input,
                width,
                height,
                error_codes::INVALID_INPUT,
                &e.to_string(),
                2,
            );
        }
    };

    match write_maps(&set, &kinds, out_dir, &file_stem(input)) {
        Ok(written) => {
            let output = GenerateOutput {
                ok: true,
                input: input.to_string(),
                width,
                height,
                maps: written
                    .into_iter()
                    .map(|(kind, path, hash)| GeneratedMap {
                        map: kind.as_str().to_string(),
                        path: path.to_string_lossy().into_owned(),
                        hash,
                    })
                    .collect(),
                errors: vec![],
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => emit_failure(
            input,
            width,
            height,
            error_codes::EXPORT,
            &format!("{:#}", e),
            2,
        ),
    }
}

fn emit_failure(
    input: &str,
    width: u32,
    height: u32,
    code: &str,
    message: &str,
    exit: u8,
) -> Result<ExitCode> {
    let output = GenerateOutput {
        ok: false,
        input: input.to_string(),
        width,
        height,
        maps: vec![],
        errors: vec![JsonError::new(code, message)],
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(ExitCode::from(exit))
}

/// Parse the `--maps` list, defaulting to all map kinds.
fn select_kinds(maps: Option<&str>) -> Result<Vec<MapKind>, String> {
    let Some(list) = maps else {
        return Ok(MapKind::ALL.to_vec());
    };

    let mut kinds = Vec::new();
    for part in list.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let kind: MapKind = part.parse()?;
        if !kinds.contains(&kind) {
            kinds.push(kind);
        }
    }
    if kinds.is_empty() {
        return Err("--maps must name at least one map".to_string());
    }
    Ok(kinds)
}

/// Encode and write the selected maps, returning (kind, path, hash) per file.
fn write_maps(
    set: &MapSet,
    kinds: &[MapKind],
    out_dir: &str,
    stem: &str,
) -> Result<Vec<(MapKind, PathBuf, String)>> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output directory: {}", out_dir))?;

    let config = PngConfig::default();
    let mut written = Vec::with_capacity(kinds.len());
    for &kind in kinds {
        let (data, hash) = png::write_rgba_to_vec_with_hash(set.get(kind), &config)
            .with_context(|| format!("Failed to encode {} map", kind))?;

        let path = Path::new(out_dir).join(format!("{}_{}.png", stem, kind.as_str()));
        fs::write(&path, &data)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        written.push((kind, path, hash));
    }
    Ok(written)
}

fn file_stem(input: &str) -> String {
    Path::new(input)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "map".to_string())
}
