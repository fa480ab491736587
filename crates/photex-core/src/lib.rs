//! Photex Map Synthesis Core
//!
//! This crate derives a set of PBR material maps (normal, roughness,
//! displacement, and ambient occlusion) from a single diffuse color image
//! using deterministic neighborhood image-processing kernels. All output is
//! byte-identical given the same input buffer and parameters.
//!
//! # Pipeline
//!
//! - **Normal**: Sobel gradients over unweighted luminance, encoded as a
//!   tangent-space normal map
//! - **Roughness**: local intensity variance blended with inverted brightness
//! - **Displacement**: weighted grayscale conversion plus a contrast curve
//! - **AO**: divergence between the image and a blurred copy, blended with
//!   inverted brightness, floor-clamped so occlusion never goes fully black
//!
//! Every kernel samples through the same edge-clamped boundary policy, so a
//! 1x1 input still produces well-defined maps. The four transforms are
//! independent pure functions over an immutable input buffer.
//!
//! # Example
//!
//! ```no_run
//! use photex_core::{synthesize, RasterBuffer};
//!
//! let input = RasterBuffer::from_rgba8(2, 2, vec![128; 16]).unwrap();
//! let maps = synthesize(&input).unwrap();
//! assert_eq!(maps.normal.width, input.width);
//! ```
//!
//! # Determinism
//!
//! There is no randomness, time dependence, or global state anywhere in the
//! pipeline; determinism holds without a seed. The PNG writer uses fixed
//! compression settings so exported files are byte-identical as well.

pub mod blur;
pub mod maps;
pub mod png;
pub mod raster;
pub mod synthesize;

// Re-export main types for convenience
pub use maps::{AoGenerator, DisplacementGenerator, NormalGenerator, RoughnessGenerator};
pub use png::{PngConfig, PngError};
pub use raster::RasterBuffer;
pub use synthesize::{
    synthesize, synthesize_with, MapKind, MapSet, SynthesisParams, SynthesizeError,
};
