//! Output directory layout
//!
//! ```text
//! <root>/PNG/Android/drawable-<bucket>/<name>.png
//! <root>/PNG/iOS/<bucket>/<name><suffix>.png
//! <root>/PNG/iOS/Images.xcassets/<name>.imageset/<name><suffix>.png
//! <root>/PNG/iOS/Images.xcassets/<name>.imageset/Contents.json
//! ```

use crate::catalog::{Platform, ScaleTarget};
use crate::manifest::MANIFEST_FILE_NAME;
use std::path::{Path, PathBuf};

const PNG_DIR: &str = "PNG";
const ANDROID_DIR: &str = "Android";
const IOS_DIR: &str = "iOS";
const ASSET_CATALOG_DIR: &str = "Images.xcassets";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    root: PathBuf,
}

impl OutputLayout {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    /// Layout rooted next to `source`.
    pub fn beside(source: &Path) -> Self {
        match source.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => Self::new(parent),
            _ => Self::new("."),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn platform_dir(&self, platform: Platform) -> PathBuf {
        let name = match platform {
            Platform::Android => ANDROID_DIR,
            Platform::Ios => IOS_DIR,
        };
        self.root.join(PNG_DIR).join(name)
    }

    /// Folder holding every output of one bucket.
    pub fn target_dir(&self, target: &ScaleTarget) -> PathBuf {
        self.platform_dir(target.platform).join(target.folder_name())
    }

    pub fn target_path(&self, target: &ScaleTarget, file_name: &str) -> PathBuf {
        self.target_dir(target).join(file_name)
    }

    /// `.imageset` folder of `base` inside the asset catalog.
    pub fn image_set_dir(&self, base: &str) -> PathBuf {
        self.platform_dir(Platform::Ios)
            .join(ASSET_CATALOG_DIR)
            .join(format!("{}.imageset", base))
    }

    pub fn manifest_path(&self, base: &str) -> PathBuf {
        self.image_set_dir(base).join(MANIFEST_FILE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::DensityCatalog;

    #[test]
    fn test_paths() {
        let catalog = DensityCatalog::standard();
        let layout = OutputLayout::beside(Path::new("/work/art/icon.png"));
        assert_eq!(layout.root(), Path::new("/work/art"));
        assert_eq!(
            layout.target_path(catalog.find("xhdpi").unwrap(), "icon.png"),
            Path::new("/work/art/PNG/Android/drawable-xhdpi/icon.png")
        );
        assert_eq!(
            layout.target_path(catalog.find("@2x").unwrap(), "icon@2x.png"),
            Path::new("/work/art/PNG/iOS/2x/icon@2x.png")
        );
        assert_eq!(
            layout.manifest_path("icon"),
            Path::new("/work/art/PNG/iOS/Images.xcassets/icon.imageset/Contents.json")
        );
    }

    #[test]
    fn test_bare_file_name_uses_cwd() {
        let layout = OutputLayout::beside(Path::new("icon.png"));
        assert_eq!(layout.root(), Path::new("."));
    }
}
