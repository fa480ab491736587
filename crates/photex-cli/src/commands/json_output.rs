//! JSON output types for machine-readable CLI output.
//!
//! These types back the `--json` flag on the `generate` and `info` commands
//! so that scripts and other tools can parse CLI output programmatically.

use serde::{Deserialize, Serialize};

/// Error codes for CLI operations.
///
/// These codes are stable and can be used for programmatic error handling.
pub mod error_codes {
    /// Input image could not be read or decoded
    pub const DECODE: &str = "CLI_001";
    /// Input buffer rejected by the pipeline (zero area)
    pub const INVALID_INPUT: &str = "CLI_002";
    /// PNG encoding or file write error
    pub const EXPORT: &str = "CLI_003";
    /// Unknown map kind in --maps
    pub const UNKNOWN_MAP: &str = "CLI_004";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001")
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// One generated map file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedMap {
    /// Map kind name (basecolor, normal, roughness, displacement, ao)
    pub map: String,
    /// Path of the written PNG
    pub path: String,
    /// BLAKE3 hash of the PNG bytes
    pub hash: String,
}

/// Output of the `generate --json` command.
#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateOutput {
    /// Whether generation succeeded
    pub ok: bool,
    /// Input image path
    pub input: String,
    /// Input width in pixels (0 when decoding failed)
    pub width: u32,
    /// Input height in pixels (0 when decoding failed)
    pub height: u32,
    /// Generated map files
    pub maps: Vec<GeneratedMap>,
    /// Errors, empty on success
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<JsonError>,
}

/// Output of the `info --json` command.
#[derive(Debug, Serialize, Deserialize)]
pub struct InfoOutput {
    /// Whether the image could be decoded
    pub ok: bool,
    /// Input image path
    pub input: String,
    /// Width in pixels (0 when decoding failed)
    pub width: u32,
    /// Height in pixels (0 when decoding failed)
    pub height: u32,
    /// Errors, empty on success
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<JsonError>,
}
