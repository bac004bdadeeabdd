use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

/// One image slot in `Contents.json`.
///
/// Field order matches the asset catalog wire format; all four fields are
/// plain interpolated strings (`"16x16"`, `"mac"`, `"icon_16x16@2x.png"`,
/// `"2x"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageEntry {
    pub size: String,
    pub idiom: String,
    pub filename: String,
    pub scale: String,
}

impl ImageEntry {
    /// Pixel dimension the referenced file should have, derived from the
    /// `"BxB"` size and `"Nx"` scale strings. `None` if either string is
    /// malformed.
    pub fn pixel_size(&self) -> Option<u32> {
        let base: u32 = self.size.split_once('x')?.0.parse().ok()?;
        let scale: u32 = self.scale.strip_suffix('x')?.parse().ok()?;
        Some(base * scale)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestInfo {
    pub version: u32,
    pub author: String,
}

/// The `Contents.json` manifest of a generated icon set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub images: Vec<ImageEntry>,
    pub info: ManifestInfo,
}

impl Manifest {
    /// An empty manifest with the fixed asset catalog info block.
    pub fn new() -> Self {
        Manifest {
            images: Vec::new(),
            info: ManifestInfo {
                version: 1,
                author: "xcode".to_string(),
            },
        }
    }

    pub fn load(path: &Path) -> io::Result<Manifest> {
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Serialize with 2-space indentation and write to `path`, overwriting.
    pub fn save(&self, path: &Path) -> io::Result<()> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(path, content)
    }
}

impl Default for Manifest {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn sample_entry() -> ImageEntry {
        ImageEntry {
            size: "16x16".to_string(),
            idiom: "mac".to_string(),
            filename: "icon_16x16@1x.png".to_string(),
            scale: "1x".to_string(),
        }
    }

    #[test]
    fn new_manifest_has_fixed_info() {
        let manifest = Manifest::new();
        assert!(manifest.images.is_empty());
        assert_eq!(manifest.info.version, 1);
        assert_eq!(manifest.info.author, "xcode");
    }

    #[test]
    fn roundtrip_serialization() {
        let mut manifest = Manifest::new();
        manifest.images.push(sample_entry());
        manifest.images.push(ImageEntry {
            size: "512x512".to_string(),
            idiom: "mac".to_string(),
            filename: "icon_512x512@2x.png".to_string(),
            scale: "2x".to_string(),
        });

        let temp_file = NamedTempFile::new().unwrap();
        manifest.save(temp_file.path()).unwrap();

        let loaded = Manifest::load(temp_file.path()).unwrap();
        assert_eq!(manifest, loaded);
    }

    #[test]
    fn save_writes_exact_wire_format() {
        let mut manifest = Manifest::new();
        manifest.images.push(sample_entry());

        let temp_file = NamedTempFile::new().unwrap();
        manifest.save(temp_file.path()).unwrap();

        let content = fs::read_to_string(temp_file.path()).unwrap();
        let expected = r#"{
  "images": [
    {
      "size": "16x16",
      "idiom": "mac",
      "filename": "icon_16x16@1x.png",
      "scale": "1x"
    }
  ],
  "info": {
    "version": 1,
    "author": "xcode"
  }
}"#;
        assert_eq!(content, expected);
    }

    #[test]
    fn load_from_json_string() {
        let json = r#"{
            "images": [
                {
                    "size": "32x32",
                    "idiom": "mac",
                    "filename": "icon_32x32@2x.png",
                    "scale": "2x"
                }
            ],
            "info": {"version": 1, "author": "xcode"}
        }"#;

        let temp_file = NamedTempFile::new().unwrap();
        fs::write(temp_file.path(), json).unwrap();

        let manifest = Manifest::load(temp_file.path()).unwrap();
        assert_eq!(manifest.images.len(), 1);
        assert_eq!(manifest.images[0].filename, "icon_32x32@2x.png");
        assert_eq!(manifest.info.version, 1);
    }

    #[test]
    fn load_missing_file_returns_error() {
        let result = Manifest::load(Path::new("/nonexistent/Contents.json"));
        assert!(result.is_err());
    }

    #[test]
    fn load_malformed_json_returns_error() {
        let temp_file = NamedTempFile::new().unwrap();
        fs::write(temp_file.path(), "not valid json").unwrap();

        let result = Manifest::load(temp_file.path());
        assert!(result.is_err());
    }

    #[test]
    fn pixel_size_combines_base_and_scale() {
        let mut entry = sample_entry();
        assert_eq!(entry.pixel_size(), Some(16));

        entry.size = "512x512".to_string();
        entry.scale = "2x".to_string();
        assert_eq!(entry.pixel_size(), Some(1024));
    }

    #[test]
    fn pixel_size_rejects_malformed_strings() {
        let mut entry = sample_entry();
        entry.size = "sixteen".to_string();
        assert_eq!(entry.pixel_size(), None);

        let mut entry = sample_entry();
        entry.scale = "2".to_string();
        assert_eq!(entry.pixel_size(), None);
    }
}
