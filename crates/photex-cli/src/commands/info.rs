//! Info command implementation
//!
//! Prints the decoded dimensions of an input image without generating maps.

use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;

use super::json_output::{error_codes, InfoOutput, JsonError};
use crate::decode;

/// Run the info command
///
/// # Returns
/// Exit code: 0 success, 1 input error
pub fn run(input: &str, json_output: bool) -> Result<ExitCode> {
    if json_output {
        return run_json(input);
    }

    let raster = decode::load_raster(Path::new(input))?;

    println!("{} {}", "Input:".cyan().bold(), input);
    println!(
        "{} {} x {}",
        "Resolution:".dimmed(),
        raster.width,
        raster.height
    );
    println!(
        "{} {}",
        "Pixels:".dimmed(),
        raster.width as u64 * raster.height as u64
    );

    Ok(ExitCode::SUCCESS)
}

fn run_json(input: &str) -> Result<ExitCode> {
    let output = match decode::load_raster(Path::new(input)) {
        Ok(raster) => InfoOutput {
            ok: true,
            input: input.to_string(),
            width: raster.width,
            height: raster.height,
            errors: vec![],
        },
        Err(e) => InfoOutput {
            ok: false,
            input: input.to_string(),
            width: 0,
            height: 0,
            errors: vec![JsonError::new(error_codes::DECODE, format!("{:#}", e))],
        },
    };

    let exit = if output.ok { 0 } else { 1 };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(ExitCode::from(exit))
}

#[cfg(test)]
mod tests {
    use super::*;
    use photex_core::png::{write_rgba, PngConfig};
    use photex_core::RasterBuffer;

    #[test]
    fn reports_dimensions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.png");
        write_rgba(&RasterBuffer::new(7, 3), &path, &PngConfig::default()).unwrap();

        assert!(run(path.to_str().unwrap(), false).is_ok());
        assert!(run(path.to_str().unwrap(), true).is_ok());
    }

    #[test]
    fn missing_input_errors_in_human_mode() {
        assert!(run("/nonexistent/input.png", false).is_err());
        // JSON mode reports the failure in-band instead.
        assert!(run("/nonexistent/input.png", true).is_ok());
    }
}
