//! Displacement map generator.

use crate::raster::RasterBuffer;

// ITU-R BT.601 luma weights.
const LUMA_R: f64 = 0.299;
const LUMA_G: f64 = 0.587;
const LUMA_B: f64 = 0.114;

/// Displacement map generator.
///
/// Purely per-pixel: weighted grayscale conversion followed by a contrast
/// stretch about the 128 midpoint. The only transform with no neighborhood.
#[derive(Debug, Clone, Copy)]
pub struct DisplacementGenerator {
    /// Contrast factor applied about the midpoint.
    pub contrast: f64,
}

impl DisplacementGenerator {
    /// Create a new generator with the default constants.
    pub fn new() -> Self {
        Self { contrast: 1.2 }
    }

    /// Set the contrast factor.
    pub fn with_contrast(mut self, contrast: f64) -> Self {
        self.contrast = contrast;
        self
    }

    /// Generate a grayscale displacement map from a diffuse image.
    pub fn generate(&self, input: &RasterBuffer) -> RasterBuffer {
        let width = input.width;
        let height = input.height;
        let mut out = RasterBuffer::new(width, height);

        for y in 0..height {
            for x in 0..width {
                let [r, g, b, _] = input.get(x, y);
                let gray =
                    (LUMA_R * r as f64 + LUMA_G * g as f64 + LUMA_B * b as f64).round();
                let gray = ((gray - 128.0) * self.contrast + 128.0).clamp(0.0, 255.0);

                let value = gray.round() as u8;
                out.set(x, y, [value, value, value, 255]);
            }
        }

        out
    }
}

impl Default for DisplacementGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn midpoint_is_a_fixed_point() {
        let input = RasterBuffer::filled(3, 3, [128, 128, 128, 255]);
        let displacement = DisplacementGenerator::new().generate(&input);
        for y in 0..3 {
            for x in 0..3 {
                assert_eq!(displacement.get(x, y), [128, 128, 128, 255]);
            }
        }
    }

    #[test]
    fn contrast_stretch_matches_known_values() {
        // gray 200 -> (200-128)*1.2+128 = 214.4 -> 214
        let bright = RasterBuffer::filled(1, 1, [200, 200, 200, 255]);
        assert_eq!(
            DisplacementGenerator::new().generate(&bright).get(0, 0),
            [214, 214, 214, 255]
        );

        // gray 50 -> (50-128)*1.2+128 = 34.4 -> 34
        let dark = RasterBuffer::filled(1, 1, [50, 50, 50, 255]);
        assert_eq!(
            DisplacementGenerator::new().generate(&dark).get(0, 0),
            [34, 34, 34, 255]
        );
    }

    #[test]
    fn extremes_saturate() {
        let white = RasterBuffer::filled(1, 1, [255, 255, 255, 255]);
        assert_eq!(
            DisplacementGenerator::new().generate(&white).get(0, 0),
            [255, 255, 255, 255]
        );

        let black = RasterBuffer::filled(1, 1, [0, 0, 0, 255]);
        assert_eq!(
            DisplacementGenerator::new().generate(&black).get(0, 0),
            [0, 0, 0, 255]
        );
    }

    #[test]
    fn monotone_in_input_luminance() {
        let generator = DisplacementGenerator::new();
        let mut last = 0u8;
        for v in [10u8, 60, 110, 160, 210, 250] {
            let input = RasterBuffer::filled(1, 1, [v, v, v, 255]);
            let out = generator.generate(&input).get(0, 0)[0];
            assert!(
                out >= last,
                "displacement not monotone: {} -> {} after {}",
                v,
                out,
                last
            );
            last = out;
        }
    }

    #[test]
    fn weighted_conversion_favors_green() {
        let generator = DisplacementGenerator::new();
        let green = generator
            .generate(&RasterBuffer::filled(1, 1, [0, 200, 0, 255]))
            .get(0, 0)[0];
        let blue = generator
            .generate(&RasterBuffer::filled(1, 1, [0, 0, 200, 255]))
            .get(0, 0)[0];
        assert!(green > blue);
    }
}
