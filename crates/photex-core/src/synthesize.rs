//! Pipeline entry point for material map synthesis.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::maps::{AoGenerator, DisplacementGenerator, NormalGenerator, RoughnessGenerator};
use crate::raster::RasterBuffer;

/// Errors from map synthesis.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SynthesizeError {
    #[error("input buffer must be at least 1x1, got {width}x{height}")]
    InvalidInput { width: u32, height: u32 },
}

/// The material map types produced by the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MapKind {
    BaseColor,
    Normal,
    Roughness,
    Displacement,
    Ao,
}

impl MapKind {
    /// All map kinds in presentation order.
    pub const ALL: [MapKind; 5] = [
        MapKind::BaseColor,
        MapKind::Normal,
        MapKind::Roughness,
        MapKind::Displacement,
        MapKind::Ao,
    ];

    /// Stable name, used as the output file suffix.
    pub fn as_str(&self) -> &'static str {
        match self {
            MapKind::BaseColor => "basecolor",
            MapKind::Normal => "normal",
            MapKind::Roughness => "roughness",
            MapKind::Displacement => "displacement",
            MapKind::Ao => "ao",
        }
    }
}

impl fmt::Display for MapKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MapKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "basecolor" | "base" => Ok(MapKind::BaseColor),
            "normal" => Ok(MapKind::Normal),
            "roughness" => Ok(MapKind::Roughness),
            "displacement" => Ok(MapKind::Displacement),
            "ao" => Ok(MapKind::Ao),
            other => Err(format!(
                "unknown map kind: {} (expected basecolor, normal, roughness, displacement, or ao)",
                other
            )),
        }
    }
}

/// Parameter bundle for a full synthesis run.
///
/// `Default` carries the stock constants; callers may override any
/// generator per call.
#[derive(Debug, Clone, Copy, Default)]
pub struct SynthesisParams {
    pub normal: NormalGenerator,
    pub roughness: RoughnessGenerator,
    pub displacement: DisplacementGenerator,
    pub ao: AoGenerator,
}

/// The synthesized material map set.
///
/// All buffers share the input's dimensions. `base` is the diffuse input
/// passed through unchanged.
#[derive(Debug, Clone)]
pub struct MapSet {
    pub base: RasterBuffer,
    pub normal: RasterBuffer,
    pub roughness: RasterBuffer,
    pub displacement: RasterBuffer,
    pub ao: RasterBuffer,
}

impl MapSet {
    /// Look up a map by kind.
    pub fn get(&self, kind: MapKind) -> &RasterBuffer {
        match kind {
            MapKind::BaseColor => &self.base,
            MapKind::Normal => &self.normal,
            MapKind::Roughness => &self.roughness,
            MapKind::Displacement => &self.displacement,
            MapKind::Ao => &self.ao,
        }
    }
}

/// Synthesize the full material map set with the default parameters.
pub fn synthesize(input: &RasterBuffer) -> Result<MapSet, SynthesizeError> {
    synthesize_with(input, &SynthesisParams::default())
}

/// Synthesize the full material map set with explicit parameters.
///
/// Zero-area input is rejected before any transform runs; either all maps
/// are produced or none are. The transforms are pure functions of the input
/// buffer, so repeated calls yield byte-identical output.
pub fn synthesize_with(
    input: &RasterBuffer,
    params: &SynthesisParams,
) -> Result<MapSet, SynthesizeError> {
    if input.is_empty() {
        return Err(SynthesizeError::InvalidInput {
            width: input.width,
            height: input.height,
        });
    }
    debug_assert_eq!(
        input.data.len(),
        (input.width as usize) * (input.height as usize) * 4
    );

    Ok(MapSet {
        base: input.clone(),
        normal: params.normal.generate(input),
        roughness: params.roughness.generate(input),
        displacement: params.displacement.generate(input),
        ao: params.ao.generate(input),
    })
}
