//! Density buckets
//!
//! The catalog is a fixed, ordered table of scale targets. Enabling or
//! disabling a bucket yields a new catalog value; once resolved, a catalog
//! is only ever read, and can be shared freely between jobs.

use crate::error::{AssetError, AssetResult};
use std::fmt;

/// Target platform of a density bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Android,
    Ios,
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Android => f.write_str("Android"),
            Platform::Ios => f.write_str("iOS"),
        }
    }
}

/// One density bucket.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleTarget {
    pub platform: Platform,
    /// Bucket label, e.g. `"xhdpi"` or `"@2x"`
    pub label: &'static str,
    /// Scale factor relative to a 1.0 (mdpi / @1x) asset
    pub scale: f64,
    pub active: bool,
}

impl ScaleTarget {
    const fn new(platform: Platform, label: &'static str, scale: f64, active: bool) -> Self {
        Self {
            platform,
            label,
            scale,
            active,
        }
    }

    /// Whether the pipeline produces an output for this bucket.
    pub fn is_processed(&self) -> bool {
        self.active && self.scale != 0.0
    }

    /// Whether `name` designates this bucket.
    ///
    /// iOS labels match with or without their leading `@`.
    pub fn matches(&self, name: &str) -> bool {
        self.label.eq_ignore_ascii_case(name)
            || self
                .label
                .trim_start_matches('@')
                .eq_ignore_ascii_case(name)
    }

    /// Name of the per-bucket output folder.
    pub fn folder_name(&self) -> String {
        match self.platform {
            Platform::Android => format!("drawable-{}", self.label),
            Platform::Ios => self.label.trim_start_matches('@').to_string(),
        }
    }

    /// Suffix appended to the base name of output files.
    ///
    /// Only iOS buckets other than 1x carry one (`@2x`, `@3x`).
    pub fn file_suffix(&self) -> &'static str {
        match self.platform {
            Platform::Ios if self.scale != 1.0 => self.label,
            _ => "",
        }
    }
}

impl fmt::Display for ScaleTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.platform, self.label)
    }
}

const STANDARD: [ScaleTarget; 9] = [
    ScaleTarget::new(Platform::Android, "ldpi", 0.75, false),
    ScaleTarget::new(Platform::Android, "mdpi", 1.0, true),
    ScaleTarget::new(Platform::Android, "hdpi", 1.5, true),
    ScaleTarget::new(Platform::Android, "xhdpi", 2.0, true),
    ScaleTarget::new(Platform::Android, "xxhdpi", 3.0, true),
    ScaleTarget::new(Platform::Android, "xxxhdpi", 4.0, true),
    ScaleTarget::new(Platform::Ios, "@1x", 1.0, true),
    ScaleTarget::new(Platform::Ios, "@2x", 2.0, true),
    ScaleTarget::new(Platform::Ios, "@3x", 3.0, true),
];

/// Ordered table of density buckets.
#[derive(Debug, Clone, PartialEq)]
pub struct DensityCatalog {
    targets: Vec<ScaleTarget>,
}

impl Default for DensityCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl DensityCatalog {
    /// The standard Android and iOS buckets; everything but ldpi is active.
    pub fn standard() -> Self {
        Self {
            targets: STANDARD.to_vec(),
        }
    }

    /// Every bucket, in catalog order.
    pub fn targets(&self) -> &[ScaleTarget] {
        &self.targets
    }

    /// Buckets the pipeline processes, in catalog order.
    pub fn active(&self) -> impl Iterator<Item = &ScaleTarget> + '_ {
        self.targets.iter().filter(|t| t.is_processed())
    }

    /// Look up a bucket by label.
    pub fn find(&self, name: &str) -> Option<&ScaleTarget> {
        self.targets.iter().find(|t| t.matches(name))
    }

    /// Copy of this catalog with one bucket switched on or off.
    ///
    /// # Errors
    ///
    /// Returns [`AssetError::UnknownBucket`] if no bucket matches `name`.
    pub fn with_active(&self, name: &str, active: bool) -> AssetResult<Self> {
        let mut targets = self.targets.clone();
        let target = targets
            .iter_mut()
            .find(|t| t.matches(name))
            .ok_or_else(|| AssetError::UnknownBucket(name.to_string()))?;
        target.active = active;
        Ok(Self { targets })
    }

    /// Apply a list of overrides in order; later entries win.
    pub fn with_overrides<'a, I>(&self, overrides: I) -> AssetResult<Self>
    where
        I: IntoIterator<Item = (&'a str, bool)>,
    {
        overrides
            .into_iter()
            .try_fold(self.clone(), |catalog, (name, active)| {
                catalog.with_active(name, active)
            })
    }
}
