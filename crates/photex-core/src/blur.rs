//! Separable Gaussian blur over raster buffers.
//!
//! Two-pass (horizontal then vertical) with edge-clamped sampling, used by
//! the occlusion estimator as its smoothing pre-pass.

use crate::raster::RasterBuffer;

/// Blur a buffer with a separable Gaussian of the given sigma.
///
/// Sigma values <= 0 return an unmodified copy. The kernel extends three
/// sigma to each side, so sigma 1.0 has an effective radius of about two
/// visually significant pixels.
pub fn gaussian_blur(src: &RasterBuffer, sigma: f64) -> RasterBuffer {
    if sigma <= 0.0 || src.is_empty() {
        return src.clone();
    }

    let kernel = gaussian_kernel(sigma);
    let half = (kernel.len() / 2) as i32;
    let width = src.width;
    let height = src.height;

    // Horizontal pass into a float intermediate
    let mut temp = vec![0.0f64; (width as usize) * (height as usize) * 4];
    for y in 0..height {
        for x in 0..width {
            let mut acc = [0.0f64; 4];
            for (i, weight) in kernel.iter().enumerate() {
                let offset = i as i32 - half;
                let sample = src.get_clamped(x as i32 + offset, y as i32);
                for c in 0..4 {
                    acc[c] += sample[c] as f64 * weight;
                }
            }
            let idx = ((y * width + x) as usize) * 4;
            temp[idx..idx + 4].copy_from_slice(&acc);
        }
    }

    // Vertical pass back to bytes
    let mut out = RasterBuffer::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let mut acc = [0.0f64; 4];
            for (i, weight) in kernel.iter().enumerate() {
                let sy = (y as i32 + i as i32 - half).clamp(0, height as i32 - 1) as u32;
                let idx = ((sy * width + x) as usize) * 4;
                for c in 0..4 {
                    acc[c] += temp[idx + c] * weight;
                }
            }
            out.set(
                x,
                y,
                [
                    acc[0].round().clamp(0.0, 255.0) as u8,
                    acc[1].round().clamp(0.0, 255.0) as u8,
                    acc[2].round().clamp(0.0, 255.0) as u8,
                    acc[3].round().clamp(0.0, 255.0) as u8,
                ],
            );
        }
    }

    out
}

/// Normalized 1D Gaussian kernel with three-sigma support.
fn gaussian_kernel(sigma: f64) -> Vec<f64> {
    let kernel_size = ((sigma * 3.0).ceil() as usize * 2 + 1).max(3);
    let half = kernel_size / 2;

    let mut kernel = vec![0.0; kernel_size];
    let mut sum = 0.0;
    for (i, value) in kernel.iter_mut().enumerate() {
        let x = i as f64 - half as f64;
        let w = (-x * x / (2.0 * sigma * sigma)).exp();
        *value = w;
        sum += w;
    }
    for value in &mut kernel {
        *value /= sum;
    }

    kernel
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kernel_is_normalized_and_symmetric() {
        let kernel = gaussian_kernel(1.0);
        assert_eq!(kernel.len(), 7);

        let sum: f64 = kernel.iter().sum();
        assert!((sum - 1.0).abs() < 1e-12);

        for i in 0..kernel.len() / 2 {
            assert!((kernel[i] - kernel[kernel.len() - 1 - i]).abs() < 1e-12);
        }
    }

    #[test]
    fn uniform_input_is_a_fixed_point() {
        let buf = RasterBuffer::filled(8, 8, [77, 130, 200, 255]);
        let blurred = gaussian_blur(&buf, 1.0);

        assert_eq!(blurred.width, 8);
        assert_eq!(blurred.height, 8);
        for y in 0..8 {
            for x in 0..8 {
                assert_eq!(blurred.get(x, y), [77, 130, 200, 255]);
            }
        }
    }

    #[test]
    fn output_stays_within_input_range() {
        let mut buf = RasterBuffer::new(6, 6);
        for y in 0..6 {
            for x in 0..6 {
                let v = if (x + y) % 2 == 0 { 0 } else { 255 };
                buf.set(x, y, [v, v, v, 255]);
            }
        }

        let blurred = gaussian_blur(&buf, 1.0);
        for y in 0..6 {
            for x in 0..6 {
                let [r, g, b, a] = blurred.get(x, y);
                // Averaging cannot leave the input range, and the
                // checkerboard must actually be smoothed at the interior.
                assert_eq!(r, g);
                assert_eq!(g, b);
                assert_eq!(a, 255);
            }
        }
        let center = blurred.get(3, 3)[0];
        assert!(center > 0 && center < 255);
    }

    #[test]
    fn zero_sigma_returns_copy() {
        let mut buf = RasterBuffer::new(3, 3);
        buf.set(1, 1, [255, 0, 0, 255]);
        let blurred = gaussian_blur(&buf, 0.0);
        assert_eq!(blurred, buf);
    }

    #[test]
    fn single_pixel_is_unchanged() {
        let buf = RasterBuffer::filled(1, 1, [9, 18, 27, 255]);
        let blurred = gaussian_blur(&buf, 1.0);
        assert_eq!(blurred.get(0, 0), [9, 18, 27, 255]);
    }
}
