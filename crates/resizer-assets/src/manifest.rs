//! iOS asset-catalog manifest (`Contents.json`)
//!
//! ```json
//! {
//!   "info": { "version": 1, "author": "xcode" },
//!   "images": [
//!     { "idiom": "universal", "scale": "2x", "filename": "icon@2x.png" }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};

/// Name of the manifest file inside an `.imageset` folder.
pub const MANIFEST_FILE_NAME: &str = "Contents.json";

const MANIFEST_VERSION: u32 = 1;
const MANIFEST_AUTHOR: &str = "xcode";
const IMAGE_IDIOM: &str = "universal";

/// One image written for a bucket.
#[derive(Debug, Clone, PartialEq)]
pub struct ManifestEntry {
    pub label: String,
    pub scale: f64,
    pub filename: String,
}

/// Serialized manifest document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetCatalogManifest {
    pub info: ManifestInfo,
    #[serde(default)]
    pub images: Vec<ManifestImage>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestInfo {
    pub version: u32,
    pub author: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestImage {
    pub idiom: String,
    /// Scale as written by Xcode, e.g. `"2x"`
    pub scale: String,
    pub filename: String,
}

impl AssetCatalogManifest {
    /// Parse a manifest document.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Pretty-printed JSON document.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Collects entries in encounter order and turns them into a manifest.
#[derive(Debug, Clone, Default)]
pub struct ManifestBuilder {
    entries: Vec<ManifestEntry>,
}

impl ManifestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: ManifestEntry) {
        self.entries.push(entry);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Build the document: one image per entry, in order.
    pub fn build(&self) -> AssetCatalogManifest {
        AssetCatalogManifest {
            info: ManifestInfo {
                version: MANIFEST_VERSION,
                author: MANIFEST_AUTHOR.to_string(),
            },
            images: self
                .entries
                .iter()
                .map(|e| ManifestImage {
                    idiom: IMAGE_IDIOM.to_string(),
                    scale: format_scale(e.scale),
                    filename: e.filename.clone(),
                })
                .collect(),
        }
    }
}

/// `2.0` -> `"2x"`, `1.5` -> `"1.5x"`
fn format_scale(scale: f64) -> String {
    format!("{}x", scale)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(label: &str, scale: f64, filename: &str) -> ManifestEntry {
        ManifestEntry {
            label: label.to_string(),
            scale,
            filename: filename.to_string(),
        }
    }

    #[test]
    fn test_build_keeps_order() {
        let mut builder = ManifestBuilder::new();
        builder.push(entry("@1x", 1.0, "icon.png"));
        builder.push(entry("@3x", 3.0, "icon@3x.png"));
        builder.push(entry("@2x", 2.0, "icon@2x.png"));

        let manifest = builder.build();
        assert_eq!(manifest.info.version, 1);
        assert_eq!(manifest.info.author, "xcode");
        let pairs: Vec<(&str, &str)> = manifest
            .images
            .iter()
            .map(|i| (i.scale.as_str(), i.filename.as_str()))
            .collect();
        assert_eq!(
            pairs,
            [("1x", "icon.png"), ("3x", "icon@3x.png"), ("2x", "icon@2x.png")]
        );
        assert!(manifest.images.iter().all(|i| i.idiom == "universal"));
    }

    #[test]
    fn test_json_shape() {
        let mut builder = ManifestBuilder::new();
        builder.push(entry("@2x", 2.0, "icon@2x.png"));
        let json = builder.build().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["info"]["version"], 1);
        assert_eq!(value["info"]["author"], "xcode");
        assert_eq!(value["images"][0]["idiom"], "universal");
        assert_eq!(value["images"][0]["scale"], "2x");
        assert_eq!(value["images"][0]["filename"], "icon@2x.png");
    }

    #[test]
    fn test_empty_builder() {
        let builder = ManifestBuilder::new();
        assert!(builder.is_empty());
        assert!(builder.build().images.is_empty());
    }

    #[test]
    fn test_fractional_scale() {
        assert_eq!(format_scale(1.5), "1.5x");
        assert_eq!(format_scale(3.0), "3x");
    }
}
