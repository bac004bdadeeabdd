use std::path::Path;
use std::process::Command;

use crate::resize::{ResizeError, Resizer};

const SIPS: &str = "sips";

/// Resize engine that shells out to the macOS `sips` tool.
///
/// Invoked as `sips -z <px> <px> <source> --out <dest>`; the call blocks
/// until the tool exits. Tool stdout is discarded, stderr is carried into
/// the error detail on failure.
pub struct SipsResizer;

impl Resizer for SipsResizer {
    fn resize(&self, source: &Path, pixel_size: u32, dest: &Path) -> Result<(), ResizeError> {
        let size = pixel_size.to_string();

        let output = Command::new(SIPS)
            .arg("-z")
            .arg(&size)
            .arg(&size)
            .arg(source)
            .arg("--out")
            .arg(dest)
            .output()
            .map_err(|e| ResizeError::Launch {
                tool: SIPS.to_string(),
                reason: e.to_string(),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let detail = if stderr.is_empty() {
                output.status.to_string()
            } else {
                format!("{} ({})", stderr, output.status)
            };
            return Err(ResizeError::ToolFailed {
                tool: SIPS.to_string(),
                detail,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    // Passes whether or not sips is installed: without the tool the launch
    // fails, with it the missing source makes sips exit non-zero.
    #[test]
    fn missing_source_errors() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("missing.png");
        let dest = dir.path().join("out.png");

        let result = SipsResizer.resize(&source, 16, &dest);

        assert!(result.is_err());
    }
}
