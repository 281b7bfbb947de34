//! Drawing surface errors

use crate::image::ImageId;
use thiserror::Error;

/// Errors reported by a [`DrawContext`](crate::DrawContext)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DrawError {
    /// Pixel buffer does not match the declared dimensions
    #[error("Invalid image data: {width}x{height} RGBA buffer has {len} bytes")]
    InvalidImage { width: u32, height: u32, len: usize },

    /// The host cannot hold any more images
    #[error("Image capacity exhausted ({0} images)")]
    ImageCapacity(usize),

    /// Handle does not refer to an uploaded image
    #[error("Unknown image: {0:?}")]
    UnknownImage(ImageId),
}

/// Result type for drawing operations
pub type Result<T> = std::result::Result<T, DrawError>;
