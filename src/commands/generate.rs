use std::path::{Path, PathBuf};

use crate::iconset::sizes::MAC_ICON_SIZES;
use crate::iconset::{IconSetError, MANIFEST_FILENAME, Progress};
use crate::resize::Resizer;
use crate::utils::file_ops::reset_dir;
use crate::utils::manifest::Manifest;

/// Outcome of a generation run.
///
/// A run with failed entries is still a successful run; the manifest simply
/// omits those entries.
#[derive(Debug)]
pub struct GenerateSummary {
    /// Filenames written and recorded in the manifest, in table order.
    pub written: Vec<String>,
    /// Filenames that failed, with the resize error detail.
    pub failed: Vec<(String, String)>,
    pub manifest_path: PathBuf,
}

/// Generate a macOS icon set from a source image.
///
/// Workflow:
/// 1. Require the source image to exist (no side effects otherwise)
/// 2. Delete and recreate the output directory
/// 3. Resize the source into each slot of the fixed size table, skipping
///    slots whose resize invocation fails
/// 4. Write `Contents.json` listing the slots that succeeded
///
/// `progress` is invoked once per slot with the outcome.
pub fn run<F>(
    source: &Path,
    output_dir: &Path,
    resizer: &dyn Resizer,
    mut progress: F,
) -> Result<GenerateSummary, IconSetError>
where
    F: FnMut(Progress),
{
    if !source.exists() {
        return Err(IconSetError::SourceNotFound {
            path: source.to_path_buf(),
        });
    }

    reset_dir(output_dir).map_err(|e| IconSetError::PrepareOutputDir {
        path: output_dir.to_path_buf(),
        reason: e.to_string(),
    })?;

    let mut manifest = Manifest::new();
    let mut written = Vec::new();
    let mut failed = Vec::new();

    for spec in MAC_ICON_SIZES {
        let filename = spec.filename();
        let dest = output_dir.join(&filename);

        match resizer.resize(source, spec.pixel_size(), &dest) {
            Ok(()) => {
                manifest.images.push(spec.manifest_entry());
                progress(Progress::Generated {
                    filename: filename.clone(),
                });
                written.push(filename);
            }
            Err(e) => {
                let reason = e.to_string();
                progress(Progress::Failed {
                    filename: filename.clone(),
                    reason: reason.clone(),
                });
                failed.push((filename, reason));
            }
        }
    }

    let manifest_path = output_dir.join(MANIFEST_FILENAME);
    manifest.save(&manifest_path).map_err(|e| IconSetError::WriteManifest {
        path: manifest_path.clone(),
        reason: e.to_string(),
    })?;

    Ok(GenerateSummary {
        written,
        failed,
        manifest_path,
    })
}
