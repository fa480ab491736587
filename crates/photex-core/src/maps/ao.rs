//! Ambient occlusion map generator.

use crate::blur::gaussian_blur;
use crate::raster::RasterBuffer;

/// AO map generator.
///
/// Works on a blurred copy of the input: pixels whose smoothed luminance
/// diverges from their surroundings sit on edges and crevices and receive
/// more occlusion. The result is blended with inverted brightness and
/// contrast-stretched with a raised floor, so occlusion never goes fully
/// black.
#[derive(Debug, Clone, Copy)]
pub struct AoGenerator {
    /// Gaussian sigma of the smoothing pre-pass.
    pub blur_sigma: f64,
    /// Half-width of the sampling window (2 gives a 5x5 window).
    pub radius: i32,
    /// Scale applied to the mean absolute luminance difference.
    pub occlusion_scale: f64,
    /// Weight of the occlusion term in the blend.
    pub occlusion_weight: f64,
    /// Weight of the inverted-brightness term in the blend.
    pub brightness_weight: f64,
    /// Contrast factor applied about the 128 midpoint.
    pub contrast: f64,
    /// Lower bound after the contrast stretch. Must not exceed 255.
    pub floor: f64,
}

impl AoGenerator {
    /// Create a new generator with the default constants.
    pub fn new() -> Self {
        Self {
            blur_sigma: 1.0,
            radius: 2,
            occlusion_scale: 1.5,
            occlusion_weight: 0.7,
            brightness_weight: 0.3,
            contrast: 1.2,
            floor: 100.0,
        }
    }

    /// Set the smoothing sigma.
    pub fn with_blur_sigma(mut self, sigma: f64) -> Self {
        self.blur_sigma = sigma;
        self
    }

    /// Set the occlusion floor.
    pub fn with_floor(mut self, floor: f64) -> Self {
        self.floor = floor;
        self
    }

    /// Generate a grayscale AO map from a diffuse image.
    pub fn generate(&self, input: &RasterBuffer) -> RasterBuffer {
        let width = input.width;
        let height = input.height;

        // Internal intermediate; never exposed to the caller.
        let blurred = gaussian_blur(input, self.blur_sigma);

        let mut out = RasterBuffer::new(width, height);
        for y in 0..height {
            for x in 0..width {
                let center = blurred.luminance(x, y);

                // Mean absolute divergence over the window, center excluded.
                let mut total = 0.0;
                let mut count = 0u32;
                for ky in -self.radius..=self.radius {
                    for kx in -self.radius..=self.radius {
                        if kx == 0 && ky == 0 {
                            continue;
                        }
                        let sample = blurred.luminance_clamped(x as i32 + kx, y as i32 + ky);
                        total += (sample - center).abs();
                        count += 1;
                    }
                }
                let avg_diff = if count > 0 { total / count as f64 } else { 0.0 };

                let ao = 255.0 - avg_diff * self.occlusion_scale;

                let brightness = input.luminance(x, y);
                let ao = (self.occlusion_weight * ao
                    + (255.0 - brightness) * self.brightness_weight)
                    .clamp(0.0, 255.0);

                let ao = ((ao - 128.0) * self.contrast + 128.0).clamp(self.floor, 255.0);

                let value = ao.round() as u8;
                out.set(x, y, [value, value, value, 255]);
            }
        }

        out
    }
}

impl Default for AoGenerator {
    fn default() -> Self {
        Self::new()
    }
}
