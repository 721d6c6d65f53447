//! VoxelMap - convert black & white raster images into voxel map data
//!
//! A single linear pipeline: decode an image, convert it to grayscale,
//! downscale it to fit a maximum map size, threshold every pixel into
//! land/water, and serialize the resulting grid as a table literal consumed
//! by the map generator script.

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Conversion pipeline (grayscale, resize, threshold)
pub mod convert;
/// Error types for the conversion pipeline
pub mod error;
/// Core data structures (VoxelGrid, Conversion)
pub mod models;
/// Map-data text serialization
pub mod serialize;
/// Shared helpers for the CLI and tests
pub mod tools;
/// Utility functions (grayscale, number formatting)
pub mod utils;

pub use convert::{LAND_THRESHOLD, image_to_grid};
pub use error::ConvertError;
pub use models::{Conversion, VoxelGrid};

use image::DynamicImage;
use serialize::write_map_data;

/// Convert raw image bytes (PNG/JPEG/BMP, anything `image` decodes) into a
/// voxel map.
///
/// # Arguments
/// * `bytes` - Encoded image bytes
/// * `map_size` - Upper bound on either output dimension
///
/// # Returns
/// The land/water grid, the serialized map data text, and the voxel count
pub fn convert(bytes: &[u8], map_size: u32) -> Result<Conversion, ConvertError> {
    let img = image::load_from_memory(bytes)?;
    convert_image(&img, map_size)
}

/// Convert an already-decoded image into a voxel map.
///
/// Deterministic for identical input image and map size; either the whole
/// grid is produced or an error is returned, never a partial result.
pub fn convert_image(img: &DynamicImage, map_size: u32) -> Result<Conversion, ConvertError> {
    let grid = image_to_grid(img, map_size)?;
    let (map_data, voxel_count) = write_map_data(&grid);
    Ok(Conversion {
        grid,
        map_data,
        voxel_count,
    })
}
