pub mod builtin;
pub mod sips;

use std::fmt;
use std::path::Path;

use crate::iconset::IconSetError;

pub use builtin::ImageResizer;
pub use sips::SipsResizer;

/// A resize capability: render `source` as a square PNG of `pixel_size`
/// pixels at `dest`.
///
/// Scaling is exact (aspect-distorting for non-square input); resampling
/// policy is owned by the engine.
pub trait Resizer {
    fn resize(&self, source: &Path, pixel_size: u32, dest: &Path) -> Result<(), ResizeError>;
}

/// Error type for a single resize invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResizeError {
    /// The external tool could not be started at all.
    Launch { tool: String, reason: String },
    /// The external tool ran but exited unsuccessfully.
    ToolFailed { tool: String, detail: String },
    /// The in-process engine failed to decode or encode the image.
    Image { reason: String },
}

impl fmt::Display for ResizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResizeError::Launch { tool, reason } => {
                write!(f, "failed to launch '{}': {}", tool, reason)
            }
            ResizeError::ToolFailed { tool, detail } => {
                write!(f, "'{}' failed: {}", tool, detail)
            }
            ResizeError::Image { reason } => {
                write!(f, "image error: {}", reason)
            }
        }
    }
}

impl std::error::Error for ResizeError {}

/// Look up a resize engine by name.
///
/// Accepts "image" (alias "builtin") for the in-process engine and "sips"
/// for the macOS command-line tool.
pub fn from_name(name: &str) -> Result<Box<dyn Resizer>, IconSetError> {
    match name.to_lowercase().as_str() {
        "image" | "builtin" => Ok(Box::new(ImageResizer)),
        "sips" => Ok(Box::new(SipsResizer)),
        _ => Err(IconSetError::UnknownEngine {
            name: name.to_string(),
        }),
    }
}
