/// Convert RGB/RGBA images to grayscale intensity
/// Y = 0.299*R + 0.587*G + 0.114*B (Rec.601 luma)
/// Uses fast integer arithmetic: Y = (77*R + 150*G + 29*B + 128) >> 8
///
/// The coefficients sum to 256 and the rounding term keeps equal-channel
/// pixels lossless: an already-grayscale value converts to exactly itself.
/// The land/water threshold sits on a hard boundary (128), so off-by-one
/// drift here would flip cells.

/// Coefficients for grayscale conversion: Y = (77*R + 150*G + 29*B + 128) >> 8
const COEF_R: u32 = 77;
const COEF_G: u32 = 150;
const COEF_B: u32 = 29;

#[inline]
fn luma(r: u8, g: u8, b: u8) -> u8 {
    let y = (COEF_R * r as u32 + COEF_G * g as u32 + COEF_B * b as u32 + 128) >> 8;
    y.min(255) as u8
}

/// Convert an RGB image (3 bytes per pixel) to grayscale
pub fn rgb_to_grayscale(rgb: &[u8], width: usize, height: usize) -> Vec<u8> {
    let pixel_count = width * height;
    let mut gray = Vec::with_capacity(pixel_count);
    for i in 0..pixel_count {
        let idx = i * 3;
        gray.push(luma(rgb[idx], rgb[idx + 1], rgb[idx + 2]));
    }
    gray
}

/// Convert an RGBA image (4 bytes per pixel) to grayscale, ignoring alpha
pub fn rgba_to_grayscale(rgba: &[u8], width: usize, height: usize) -> Vec<u8> {
    let pixel_count = width * height;
    let mut gray = Vec::with_capacity(pixel_count);
    for i in 0..pixel_count {
        let idx = i * 4;
        gray.push(luma(rgba[idx], rgba[idx + 1], rgba[idx + 2]));
    }
    gray
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_to_grayscale() {
        // Pure white
        let white = vec![255, 255, 255];
        let gray = rgb_to_grayscale(&white, 1, 1);
        assert_eq!(gray[0], 255);

        // Pure black
        let black = vec![0, 0, 0];
        let gray = rgb_to_grayscale(&black, 1, 1);
        assert_eq!(gray[0], 0);

        // Pure red is dark but not black
        let red = vec![255, 0, 0];
        let gray = rgb_to_grayscale(&red, 1, 1);
        assert!(gray[0] > 0);
        assert!(gray[0] < 128);

        // Pure green dominates the luma sum
        let green = vec![0, 255, 0];
        let gray = rgb_to_grayscale(&green, 1, 1);
        assert!(gray[0] > 128);

        // 2x2 image
        let img = vec![255, 0, 0, 0, 255, 0, 0, 0, 255, 255, 255, 255];
        let gray = rgb_to_grayscale(&img, 2, 2);
        assert_eq!(gray.len(), 4);
    }

    #[test]
    fn test_equal_channels_are_lossless() {
        // Gray pixels must map to themselves, including the 127/128 boundary
        for v in [0u8, 1, 64, 127, 128, 200, 254, 255] {
            let gray = rgb_to_grayscale(&[v, v, v], 1, 1);
            assert_eq!(gray[0], v);
        }
    }

    #[test]
    fn test_rgba_ignores_alpha() {
        let opaque = rgba_to_grayscale(&[40, 40, 40, 255], 1, 1);
        let transparent = rgba_to_grayscale(&[40, 40, 40, 0], 1, 1);
        assert_eq!(opaque, transparent);
        assert_eq!(opaque[0], 40);
    }
}
