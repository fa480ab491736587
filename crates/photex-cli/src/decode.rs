//! Input image decoding.

use std::path::Path;

use anyhow::{Context, Result};
use photex_core::RasterBuffer;

/// Decode a supported image file (PNG, JPEG, WebP) into an RGBA8 raster
/// buffer.
///
/// The pipeline assumes RGBA8, row-major, top-down; conversion through the
/// `image` crate normalizes any other decoded layout.
pub fn load_raster(path: &Path) -> Result<RasterBuffer> {
    let img = image::open(path)
        .with_context(|| format!("Failed to decode image: {}", path.display()))?;
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();

    RasterBuffer::from_rgba8(width, height, rgba.into_raw())
        .context("decoded image byte length does not match its dimensions")
}
