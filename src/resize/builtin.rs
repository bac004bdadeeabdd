use std::path::Path;

use crate::resize::{ResizeError, Resizer};

/// In-process resize engine backed by the `image` crate.
///
/// Decodes the source once per invocation and writes a Lanczos3-resampled
/// square PNG. Works on any platform, unlike [`super::SipsResizer`].
pub struct ImageResizer;

impl Resizer for ImageResizer {
    fn resize(&self, source: &Path, pixel_size: u32, dest: &Path) -> Result<(), ResizeError> {
        let img = image::open(source).map_err(|e| ResizeError::Image {
            reason: format!("failed to load '{}': {}", source.display(), e),
        })?;

        let resized = img.resize_exact(pixel_size, pixel_size, image::imageops::FilterType::Lanczos3);

        resized.save(dest).map_err(|e| ResizeError::Image {
            reason: format!("failed to save '{}': {}", dest.display(), e),
        })?;

        Ok(())
    }
}
