use image::imageops::{self, FilterType};
use image::{DynamicImage, GenericImageView, GrayImage};

use crate::error::ConvertError;
use crate::models::VoxelGrid;
use crate::utils::grayscale::{rgb_to_grayscale, rgba_to_grayscale};

/// Fixed land/water threshold: intensities below this are land
///
/// A design constant, not configurable. Exactly 128 maps to water.
pub const LAND_THRESHOLD: u8 = 128;

/// Convert a decoded image into a land/water grid, downscaling to fit
/// `map_size`.
///
/// # Arguments
/// * `img` - Decoded image in any color mode
/// * `map_size` - Upper bound on either output dimension (must be >= 1)
///
/// # Returns
/// A grid whose dimensions match the processed image exactly
pub fn image_to_grid(img: &DynamicImage, map_size: u32) -> Result<VoxelGrid, ConvertError> {
    if map_size == 0 {
        return Err(ConvertError::InvalidMapSize { map_size });
    }

    // Step 1: Convert to grayscale
    let gray = to_gray(img);

    // Step 2: Downscale if either dimension exceeds the map size
    let gray = fit_to_map_size(gray, map_size)?;

    // Step 3: Threshold into the grid
    Ok(threshold(&gray))
}

fn to_gray(img: &DynamicImage) -> GrayImage {
    let (width, height) = img.dimensions();
    let gray = match img {
        DynamicImage::ImageRgba8(rgba) => {
            rgba_to_grayscale(rgba.as_raw(), width as usize, height as usize)
        }
        _ => {
            let rgb = img.to_rgb8();
            rgb_to_grayscale(rgb.as_raw(), width as usize, height as usize)
        }
    };
    GrayImage::from_raw(width, height, gray).expect("grayscale buffer matches image dimensions")
}

/// Downscale with a uniform scale factor so that neither dimension exceeds
/// `map_size`; target dimensions are floored to integers.
fn fit_to_map_size(gray: GrayImage, map_size: u32) -> Result<GrayImage, ConvertError> {
    let (width, height) = gray.dimensions();
    if width <= map_size && height <= map_size {
        return Ok(gray);
    }

    let ratio = (map_size as f64 / width as f64).min(map_size as f64 / height as f64);
    let new_width = (width as f64 * ratio) as u32;
    let new_height = (height as f64 * ratio) as u32;
    if new_width == 0 || new_height == 0 {
        return Err(ConvertError::DegenerateResize {
            width,
            height,
            map_size,
        });
    }

    Ok(imageops::resize(&gray, new_width, new_height, FilterType::Lanczos3))
}

fn threshold(gray: &GrayImage) -> VoxelGrid {
    let (width, height) = gray.dimensions();
    let mut grid = VoxelGrid::new(width as usize, height as usize);
    for (x, y, pixel) in gray.enumerate_pixels() {
        if pixel[0] < LAND_THRESHOLD {
            grid.set(x as usize, y as usize, true);
        }
    }
    grid
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    fn gray_image(pixels: &[&[u8]]) -> GrayImage {
        let height = pixels.len() as u32;
        let width = pixels[0].len() as u32;
        GrayImage::from_fn(width, height, |x, y| {
            Luma([pixels[y as usize][x as usize]])
        })
    }

    #[test]
    fn test_threshold_boundary() {
        let img = gray_image(&[&[127, 128]]);
        let grid = threshold(&img);
        assert!(grid.get(0, 0), "127 is land");
        assert!(!grid.get(1, 0), "exactly 128 is water");
    }

    #[test]
    fn test_no_resize_within_map_size() {
        let img = GrayImage::from_pixel(50, 40, Luma([200]));
        let resized = fit_to_map_size(img, 100).unwrap();
        assert_eq!(resized.dimensions(), (50, 40));
    }

    #[test]
    fn test_downscale_preserves_aspect() {
        let img = GrayImage::from_pixel(400, 300, Luma([0]));
        let resized = fit_to_map_size(img, 100).unwrap();
        assert_eq!(resized.dimensions(), (100, 75));
    }

    #[test]
    fn test_downscale_portrait() {
        let img = GrayImage::from_pixel(300, 400, Luma([0]));
        let resized = fit_to_map_size(img, 100).unwrap();
        assert_eq!(resized.dimensions(), (75, 100));
    }

    #[test]
    fn test_degenerate_resize_rejected() {
        let img = GrayImage::from_pixel(1000, 1, Luma([0]));
        let result = fit_to_map_size(img, 100);
        assert!(matches!(
            result,
            Err(ConvertError::DegenerateResize {
                width: 1000,
                height: 1,
                map_size: 100,
            })
        ));
    }

    #[test]
    fn test_row_major_order() {
        let img = gray_image(&[&[0, 255, 255], &[255, 0, 255]]);
        let grid = threshold(&img);
        let row0: Vec<u8> = grid.row(0).collect();
        let row1: Vec<u8> = grid.row(1).collect();
        assert_eq!(row0, vec![1, 0, 0]);
        assert_eq!(row1, vec![0, 1, 0]);
    }

    #[test]
    fn test_colored_input_uses_luma() {
        // Red is dark (luma 77 -> land), green is bright (luma 150 -> water)
        let mut rgb = image::RgbImage::new(2, 1);
        rgb.put_pixel(0, 0, image::Rgb([255, 0, 0]));
        rgb.put_pixel(1, 0, image::Rgb([0, 255, 0]));
        let grid = image_to_grid(&DynamicImage::ImageRgb8(rgb), 10).unwrap();
        assert!(grid.get(0, 0));
        assert!(!grid.get(1, 0));
    }
}
