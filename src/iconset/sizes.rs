//! The fixed size table for a macOS application icon set.

use crate::utils::manifest::ImageEntry;

/// One slot in the icon set: a logical size, a display scale factor, and
/// the platform idiom tag the asset catalog expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeSpec {
    /// Logical size in points (the icon is square).
    pub base: u32,
    /// Display scale multiplier (1 for standard, 2 for retina).
    pub scale: u32,
    /// Asset catalog idiom tag.
    pub idiom: &'static str,
}

/// The 10 slots of a macOS `.appiconset`, in manifest order.
pub const MAC_ICON_SIZES: &[SizeSpec] = &[
    SizeSpec { base: 16, scale: 1, idiom: "mac" },
    SizeSpec { base: 16, scale: 2, idiom: "mac" },
    SizeSpec { base: 32, scale: 1, idiom: "mac" },
    SizeSpec { base: 32, scale: 2, idiom: "mac" },
    SizeSpec { base: 128, scale: 1, idiom: "mac" },
    SizeSpec { base: 128, scale: 2, idiom: "mac" },
    SizeSpec { base: 256, scale: 1, idiom: "mac" },
    SizeSpec { base: 256, scale: 2, idiom: "mac" },
    SizeSpec { base: 512, scale: 1, idiom: "mac" },
    SizeSpec { base: 512, scale: 2, idiom: "mac" },
];

impl SizeSpec {
    /// Actual pixel dimensions of the rendered file.
    pub fn pixel_size(&self) -> u32 {
        self.base * self.scale
    }

    /// File name this slot is rendered to, e.g. `icon_32x32@2x.png`.
    pub fn filename(&self) -> String {
        format!("icon_{}x{}@{}x.png", self.base, self.base, self.scale)
    }

    /// Manifest entry describing this slot's rendered file.
    pub fn manifest_entry(&self) -> ImageEntry {
        ImageEntry {
            size: format!("{}x{}", self.base, self.base),
            idiom: self.idiom.to_string(),
            filename: self.filename(),
            scale: format!("{}x", self.scale),
        }
    }
}
