pub mod sizes;

use std::fmt;
use std::path::PathBuf;

/// Name of the manifest file written into every generated icon set.
pub const MANIFEST_FILENAME: &str = "Contents.json";

/// Error type for icon set operations.
///
/// Per-image resize failures are not represented here: they are recovered
/// locally during generation (the entry is omitted from the manifest) and
/// surfaced through [`Progress::Failed`] events instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconSetError {
    SourceNotFound { path: PathBuf },
    PrepareOutputDir { path: PathBuf, reason: String },
    WriteManifest { path: PathBuf, reason: String },
    UnknownEngine { name: String },
    ManifestError { reason: String },
    MissingImage { file: String },
    UnreadableImage { file: String, reason: String },
    WrongDimensions { file: String, expected: String, actual: String },
    UnexpectedFile { file: String },
}

impl fmt::Display for IconSetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IconSetError::SourceNotFound { path } => {
                write!(f, "source image not found at '{}'", path.display())
            }
            IconSetError::PrepareOutputDir { path, reason } => {
                write!(
                    f,
                    "failed to prepare output directory '{}': {}",
                    path.display(),
                    reason
                )
            }
            IconSetError::WriteManifest { path, reason } => {
                write!(f, "failed to write manifest '{}': {}", path.display(), reason)
            }
            IconSetError::UnknownEngine { name } => {
                write!(f, "unknown resize engine '{}'", name)
            }
            IconSetError::ManifestError { reason } => {
                write!(f, "manifest error: {}", reason)
            }
            IconSetError::MissingImage { file } => {
                write!(f, "image '{}' is listed in the manifest but missing", file)
            }
            IconSetError::UnreadableImage { file, reason } => {
                write!(f, "failed to read dimensions of '{}': {}", file, reason)
            }
            IconSetError::WrongDimensions { file, expected, actual } => {
                write!(
                    f,
                    "wrong dimensions for '{}': expected {}, got {}",
                    file, expected, actual
                )
            }
            IconSetError::UnexpectedFile { file } => {
                write!(f, "unexpected file '{}' in icon set directory", file)
            }
        }
    }
}

impl std::error::Error for IconSetError {}

/// Progress event emitted while generating an icon set.
#[derive(Debug, Clone)]
pub enum Progress {
    /// One image was resized and recorded in the manifest.
    Generated { filename: String },
    /// One resize invocation failed; the entry is skipped.
    Failed { filename: String, reason: String },
}
