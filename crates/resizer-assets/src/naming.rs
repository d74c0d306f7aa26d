//! Source names and output file names

use crate::catalog::ScaleTarget;
use crate::error::{AssetError, AssetResult};

/// File name ending that marks an Android 9-patch source.
pub const NINE_PATCH_SUFFIX: &str = ".9.png";

/// How a source image is processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceMode {
    /// Resample the whole image
    Standard,
    /// Treat the outer ring as 9-patch markers
    NinePatch,
}

impl SourceMode {
    /// Detect the mode from a source file name.
    ///
    /// The suffix match is case-sensitive.
    pub fn detect(file_name: &str) -> Self {
        if file_name.ends_with(NINE_PATCH_SUFFIX) {
            SourceMode::NinePatch
        } else {
            SourceMode::Standard
        }
    }
}

/// Normalized resource name for a source file name.
///
/// Drops the last extension, replaces `-` and spaces with `_`, lowercases,
/// and prefixes a leading ASCII digit with `_`. Only the last extension is
/// dropped, so `button.9.png` keeps its `.9` and outputs stay 9-patches.
///
/// ```
/// use resizer_assets::naming::base_name;
///
/// assert_eq!(base_name("Ic Launcher-Big.png").unwrap(), "ic_launcher_big");
/// assert_eq!(base_name("1 My Photo-1.png").unwrap(), "_1_my_photo_1");
/// assert!(base_name(".png").is_err());
/// ```
///
/// # Errors
///
/// Returns [`AssetError::InvalidName`] if nothing remains once the
/// extension is gone.
pub fn base_name(file_name: &str) -> AssetResult<String> {
    let stem = match file_name.rfind('.') {
        Some(dot) => &file_name[..dot],
        None => file_name,
    };
    if stem.is_empty() {
        return Err(AssetError::InvalidName(file_name.to_string()));
    }

    let mut name: String = stem
        .chars()
        .map(|c| if c == '-' || c == ' ' { '_' } else { c })
        .collect::<String>()
        .to_lowercase();
    if name.starts_with(|c: char| c.is_ascii_digit()) {
        name.insert(0, '_');
    }
    Ok(name)
}

/// Output file name of `base` for one bucket, e.g. `icon@2x.png`.
pub fn output_file_name(base: &str, target: &ScaleTarget) -> String {
    format!("{}{}.png", base, target.file_suffix())
}
