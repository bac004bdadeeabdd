use std::path::Path;

use crate::iconset::{IconSetError, MANIFEST_FILENAME};
use crate::utils::file_ops::list_files;
use crate::utils::manifest::Manifest;

/// Verify an existing icon set directory against its own `Contents.json`.
///
/// Checks that every manifest entry points at an existing file with the
/// advertised square pixel dimensions, and that the directory contains no
/// files beyond the manifest and the images it lists. Returns the number
/// of verified images.
pub fn run(dir: &Path) -> Result<usize, IconSetError> {
    let manifest_path = dir.join(MANIFEST_FILENAME);
    let manifest = Manifest::load(&manifest_path).map_err(|e| IconSetError::ManifestError {
        reason: e.to_string(),
    })?;

    for entry in &manifest.images {
        let expected = entry.pixel_size().ok_or_else(|| IconSetError::ManifestError {
            reason: format!(
                "malformed size/scale for '{}': '{}' @ '{}'",
                entry.filename, entry.size, entry.scale
            ),
        })?;

        let path = dir.join(&entry.filename);
        if !path.exists() {
            return Err(IconSetError::MissingImage {
                file: entry.filename.clone(),
            });
        }

        let (width, height) =
            image::image_dimensions(&path).map_err(|e| IconSetError::UnreadableImage {
                file: entry.filename.clone(),
                reason: e.to_string(),
            })?;

        if width != expected || height != expected {
            return Err(IconSetError::WrongDimensions {
                file: entry.filename.clone(),
                expected: format!("{}x{}", expected, expected),
                actual: format!("{}x{}", width, height),
            });
        }
    }

    // The generator owns the directory, so anything it didn't produce is a
    // defect.
    let files = list_files(dir).map_err(|e| IconSetError::ManifestError {
        reason: e.to_string(),
    })?;
    for file in files {
        if file == MANIFEST_FILENAME {
            continue;
        }
        if !manifest.images.iter().any(|e| e.filename == file) {
            return Err(IconSetError::UnexpectedFile { file });
        }
    }

    Ok(manifest.images.len())
}
