//! Normal map generator.

use crate::raster::RasterBuffer;

// Sobel operators for gradient
// Gx = | -1  0  1 |    Gy = | -1 -2 -1 |
//      | -2  0  2 |         |  0  0  0 |
//      | -1  0  1 |
const SOBEL_X: [f64; 9] = [-1.0, 0.0, 1.0, -2.0, 0.0, 2.0, -1.0, 0.0, 1.0];
const SOBEL_Y: [f64; 9] = [-1.0, -2.0, -1.0, 0.0, 0.0, 0.0, 1.0, 2.0, 1.0];

/// Normal map generator.
///
/// Estimates surface gradients from the luminance of the diffuse image with
/// Sobel kernels and encodes them as a tangent-space normal map.
#[derive(Debug, Clone, Copy)]
pub struct NormalGenerator {
    /// Gradient scale factor.
    pub strength: f64,
    /// Additive depth term under the square root; keeps the Z component
    /// strictly positive for any input.
    pub z_base: f64,
}

impl NormalGenerator {
    /// Create a new generator with the default constants.
    pub fn new() -> Self {
        Self {
            strength: 3.0,
            z_base: 40000.0,
        }
    }

    /// Set the gradient scale factor.
    pub fn with_strength(mut self, strength: f64) -> Self {
        self.strength = strength;
        self
    }

    /// Generate a normal map from a diffuse image.
    ///
    /// The output has the same dimensions as the input. A featureless input
    /// encodes the flat normal `(128, 128, 255)`.
    pub fn generate(&self, input: &RasterBuffer) -> RasterBuffer {
        let width = input.width;
        let height = input.height;
        // sqrt(z_base), so a zero gradient encodes B = 255 exactly.
        let flat_z = self.z_base.sqrt();
        let mut out = RasterBuffer::new(width, height);

        for y in 0..height {
            for x in 0..width {
                let mut gx = 0.0;
                let mut gy = 0.0;

                for ky in -1i32..=1 {
                    for kx in -1i32..=1 {
                        let lum = input.luminance_clamped(x as i32 + kx, y as i32 + ky);
                        let k = ((ky + 1) * 3 + (kx + 1)) as usize;
                        gx += lum * SOBEL_X[k];
                        gy += lum * SOBEL_Y[k];
                    }
                }

                let nx = -(gx * self.strength);
                let ny = -(gy * self.strength);
                let nz = (nx * nx + ny * ny + self.z_base).sqrt();

                // nz >= |nx|, |ny| and nz >= flat_z, so every ratio is in
                // [-1, 1] and no clamp is needed before quantization.
                let r = ((nx / nz * 0.5 + 0.5) * 255.0).round() as u8;
                let g = ((ny / nz * 0.5 + 0.5) * 255.0).round() as u8;
                let b = ((flat_z / nz * 0.5 + 0.5) * 255.0).round() as u8;

                out.set(x, y, [r, g, b, 255]);
            }
        }

        out
    }
}

impl Default for NormalGenerator {
    fn default() -> Self {
        Self::new()
    }
}
