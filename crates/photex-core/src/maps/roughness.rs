//! Roughness map generator.

use crate::raster::RasterBuffer;

/// Roughness map generator.
///
/// Infers roughness from two cues: local intensity variance (textured
/// surfaces scatter light) and inverted brightness (darker areas tend to be
/// rougher), blended 60/40 by default.
#[derive(Debug, Clone, Copy)]
pub struct RoughnessGenerator {
    /// Divisor applied to the RMS deviation of the 3x3 window.
    pub variance_divisor: f64,
    /// Weight of the variance term in the blend.
    pub variance_weight: f64,
    /// Weight of the inverted-brightness term in the blend.
    pub brightness_weight: f64,
}

impl RoughnessGenerator {
    /// Create a new generator with the default constants.
    pub fn new() -> Self {
        Self {
            variance_divisor: 16.0,
            variance_weight: 0.6,
            brightness_weight: 0.4,
        }
    }

    /// Set the blend weights (variance, inverted brightness).
    pub fn with_weights(mut self, variance: f64, brightness: f64) -> Self {
        self.variance_weight = variance;
        self.brightness_weight = brightness;
        self
    }

    /// Generate a grayscale roughness map from a diffuse image.
    pub fn generate(&self, input: &RasterBuffer) -> RasterBuffer {
        let width = input.width;
        let height = input.height;
        let mut out = RasterBuffer::new(width, height);

        for y in 0..height {
            for x in 0..width {
                let center = input.luminance(x, y);

                // RMS deviation over the 3x3 window, center included.
                let mut total = 0.0;
                for ky in -1i32..=1 {
                    for kx in -1i32..=1 {
                        let sample = input.luminance_clamped(x as i32 + kx, y as i32 + ky);
                        total += (sample - center) * (sample - center);
                    }
                }
                let variance = (total / 9.0).sqrt() / self.variance_divisor;

                let v = variance * self.variance_weight
                    + ((255.0 - center) / 255.0) * self.brightness_weight;
                let v = v.clamp(0.0, 1.0);

                let value = (v * 255.0).round() as u8;
                out.set(x, y, [value, value, value, 255]);
            }
        }

        out
    }
}

impl Default for RoughnessGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_gray_has_only_brightness_term() {
        let input = RasterBuffer::filled(5, 5, [128, 128, 128, 255]);
        let roughness = RoughnessGenerator::new().generate(&input);

        // Variance is zero everywhere; (255-128)/255 * 0.4 * 255 = 50.8.
        for y in 0..5 {
            for x in 0..5 {
                assert_eq!(roughness.get(x, y), [51, 51, 51, 255]);
            }
        }
    }

    #[test]
    fn white_input_is_smooth() {
        let input = RasterBuffer::filled(4, 4, [255, 255, 255, 255]);
        let roughness = RoughnessGenerator::new().generate(&input);
        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(roughness.get(x, y), [0, 0, 0, 255]);
            }
        }
    }

    #[test]
    fn black_input_is_fully_rough() {
        let input = RasterBuffer::filled(4, 4, [0, 0, 0, 255]);
        let roughness = RoughnessGenerator::new().generate(&input);
        for y in 0..4 {
            for x in 0..4 {
                // No variance, full inverted-brightness: 0.4 * 255 = 102.
                assert_eq!(roughness.get(x, y), [102, 102, 102, 255]);
            }
        }
    }

    #[test]
    fn contrast_raises_roughness_above_uniform() {
        // A checkerboard cell sees maximal local variance; its roughness
        // must exceed that of a uniform input at the same brightness.
        let mut checker = RasterBuffer::new(4, 4);
        for y in 0..4 {
            for x in 0..4 {
                let v = if (x + y) % 2 == 0 { 0 } else { 255 };
                checker.set(x, y, [v, v, v, 255]);
            }
        }
        let uniform = RasterBuffer::filled(4, 4, [128, 128, 128, 255]);

        let generator = RoughnessGenerator::new();
        let rough_checker = generator.generate(&checker);
        let rough_uniform = generator.generate(&uniform);

        assert!(rough_checker.get(1, 1)[0] > rough_uniform.get(1, 1)[0]);
    }

    #[test]
    fn output_is_grayscale_with_opaque_alpha() {
        let mut input = RasterBuffer::new(3, 3);
        input.set(1, 1, [250, 20, 77, 255]);
        let roughness = RoughnessGenerator::new().generate(&input);

        for y in 0..3 {
            for x in 0..3 {
                let [r, g, b, a] = roughness.get(x, y);
                assert_eq!(r, g);
                assert_eq!(g, b);
                assert_eq!(a, 255);
            }
        }
    }
}
