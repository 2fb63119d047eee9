//! Image loading boundary
//!
//! Decoding lives outside the core pipeline, which only ever sees a
//! `PixelBuffer`. This module is the bridge for callers that start from
//! files: it decodes standard formats via the `image` crate and hands
//! back an owned RGBA buffer. Used by the CLI and integration tests; the
//! analysis code never calls it.

use crate::buffer::PixelBuffer;
use crate::error::{AnalysisError, Result};
use image::RgbaImage;
use std::path::Path;

/// File extensions the loader accepts without attempting content sniffing
const SUPPORTED_EXTENSIONS: [&str; 9] = [
    "jpg", "jpeg", "png", "gif", "webp", "tiff", "tif", "bmp", "qoi",
];

/// Check whether a path carries a supported image extension
pub fn has_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| SUPPORTED_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Load an image file and decode it into an RGBA pixel buffer
///
/// # Arguments
///
/// * `path` - Path to the image file
///
/// # Errors
///
/// Returns `AnalysisError::ImageLoadError` if the file cannot be read or
/// decoded, or `AnalysisError::InvalidDimensions` for a zero-sized image.
pub fn load_pixel_buffer(path: &Path) -> Result<PixelBuffer> {
    let image = image::open(path).map_err(|e| {
        AnalysisError::image_load(format!("could not decode '{}'", path.display()), e)
    })?;
    from_rgba_image(image.to_rgba8())
}

/// Convert an already-decoded RGBA image into a pixel buffer
///
/// # Errors
///
/// Returns `AnalysisError::InvalidDimensions` for a zero-sized image.
pub fn from_rgba_image(image: RgbaImage) -> Result<PixelBuffer> {
    let (width, height) = image.dimensions();
    PixelBuffer::new(width, height, image.into_raw())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_extensions() {
        assert!(has_supported_extension(Path::new("photo.jpg")));
        assert!(has_supported_extension(Path::new("photo.PNG")));
        assert!(!has_supported_extension(Path::new("notes.txt")));
        assert!(!has_supported_extension(Path::new("no_extension")));
    }

    #[test]
    fn test_missing_file_yields_load_error() {
        let result = load_pixel_buffer(Path::new("nonexistent_file.png"));
        assert!(matches!(result, Err(AnalysisError::ImageLoadError { .. })));
    }

    #[test]
    fn test_from_rgba_image() {
        let image = RgbaImage::from_pixel(4, 3, image::Rgba([10, 20, 30, 255]));
        let buffer = from_rgba_image(image).unwrap();

        assert_eq!(buffer.width(), 4);
        assert_eq!(buffer.height(), 3);
        let pixel = buffer.pixel_at(3, 2).unwrap();
        assert_eq!(pixel.rgb(), [10, 20, 30]);
    }
}
