use thiserror::Error;

/// Errors produced by the conversion pipeline.
///
/// Every variant is terminal for the conversion attempt: the pipeline is a
/// pure computation, so retrying with unchanged input cannot succeed.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The input bytes could not be decoded as an image
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    /// The requested map size is zero
    #[error("invalid map size {map_size}: must be at least 1")]
    InvalidMapSize {
        /// The rejected map size
        map_size: u32,
    },

    /// Downscaling floored one of the target dimensions to zero
    #[error(
        "cannot fit {width}x{height} image into map size {map_size}: a target dimension rounds to zero"
    )]
    DegenerateResize {
        /// Source image width
        width: u32,
        /// Source image height
        height: u32,
        /// The requested map size
        map_size: u32,
    },
}
