//! Run configuration
//!
//! Settings can live in a `resizer.config.json` next to the sources. Every
//! field is optional; command-line flags take precedence over the file.
//!
//! ```json
//! {
//!   "source_density": 4.0,
//!   "output": "build/assets",
//!   "ios_catalog": true,
//!   "enable": ["ldpi"],
//!   "disable": ["@1x"]
//! }
//! ```

use resizer_assets::{AssetResult, DensityCatalog};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name looked up next to the first source.
pub const DEFAULT_CONFIG_FILE: &str = "resizer.config.json";

/// Errors loading a configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ResizerConfig {
    /// Density the sources were drawn at (1.0 = mdpi / @1x)
    pub source_density: f64,
    /// Output root; outputs go next to each source when unset
    pub output: Option<PathBuf>,
    /// Write `Contents.json` manifests for iOS image sets
    pub ios_catalog: bool,
    /// Buckets to switch on
    pub enable: Vec<String>,
    /// Buckets to switch off (applied after `enable`)
    pub disable: Vec<String>,
    /// Worker threads; defaults to the available parallelism
    pub jobs: Option<usize>,
}

impl Default for ResizerConfig {
    fn default() -> Self {
        Self {
            source_density: 1.0,
            output: None,
            ios_catalog: false,
            enable: Vec::new(),
            disable: Vec::new(),
            jobs: None,
        }
    }
}

impl ResizerConfig {
    /// Load `resizer.config.json` from `dir`, if there is one.
    ///
    /// A missing file is not an error; a present but broken one is.
    pub fn discover(dir: &Path) -> Result<Option<Self>, ConfigError> {
        let candidate = dir.join(DEFAULT_CONFIG_FILE);
        if !candidate.is_file() {
            return Ok(None);
        }
        Self::from_path(&candidate).map(Some)
    }

    /// Read configuration from a specific JSON file.
    ///
    /// A relative `output` is taken relative to the file's directory.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config: Self =
            serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        if let Some(dir) = path.parent() {
            config.output = config.output.map(|out| dir.join(out));
        }
        Ok(config)
    }

    /// Resolve the catalog: standard buckets, then the file's overrides,
    /// then `enable` and `disable` from the command line.
    pub fn catalog(&self, enable: &[String], disable: &[String]) -> AssetResult<DensityCatalog> {
        let mut overrides: Vec<(&str, bool)> = Vec::new();
        for (buckets, on) in [
            (self.enable.as_slice(), true),
            (self.disable.as_slice(), false),
            (enable, true),
            (disable, false),
        ] {
            overrides.extend(buckets.iter().map(|b| (b.as_str(), on)));
        }
        DensityCatalog::standard().with_overrides(overrides)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use resizer_assets::AssetError;

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: ResizerConfig = serde_json::from_str(r#"{ "ios_catalog": true }"#).unwrap();
        assert!(config.ios_catalog);
        assert_eq!(config.source_density, 1.0);
        assert!(config.output.is_none());
    }

    #[test]
    fn test_discover() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(ResizerConfig::discover(tmp.path()).unwrap().is_none());

        fs::write(
            tmp.path().join(DEFAULT_CONFIG_FILE),
            r#"{ "source_density": 3.0, "disable": ["@1x"] }"#,
        )
        .unwrap();
        let config = ResizerConfig::discover(tmp.path()).unwrap().unwrap();
        assert_eq!(config.source_density, 3.0);
        assert_eq!(config.disable, ["@1x"]);
    }

    #[test]
    fn test_output_relative_to_config_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join(DEFAULT_CONFIG_FILE);
        fs::write(&path, r#"{ "output": "build/assets" }"#).unwrap();
        let config = ResizerConfig::discover(tmp.path()).unwrap().unwrap();
        assert_eq!(config.output, Some(tmp.path().join("build/assets")));

        let abs = tmp.path().join("abs-out");
        fs::write(&path, format!(r#"{{ "output": {:?} }}"#, abs.display().to_string())).unwrap();
        let config = ResizerConfig::from_path(&path).unwrap();
        assert_eq!(config.output, Some(abs));
    }

    #[test]
    fn test_broken_file_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("bad.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            ResizerConfig::from_path(&path),
            Err(ConfigError::Parse { .. })
        ));
        assert!(matches!(
            ResizerConfig::from_path(&tmp.path().join("missing.json")),
            Err(ConfigError::Read { .. })
        ));
    }

    #[test]
    fn test_catalog_overrides() {
        let config = ResizerConfig {
            enable: vec!["ldpi".into()],
            disable: vec!["xxxhdpi".into()],
            ..Default::default()
        };
        let catalog = config
            .catalog(&["xxxhdpi".to_string()], &["2x".to_string()])
            .unwrap();
        let active: Vec<_> = catalog.active().map(|t| t.label).collect();
        // Command-line enable wins over the file's disable
        assert_eq!(
            active,
            ["ldpi", "mdpi", "hdpi", "xhdpi", "xxhdpi", "xxxhdpi", "@1x", "@3x"]
        );

        let err = config.catalog(&["retina".to_string()], &[]).unwrap_err();
        assert!(matches!(err, AssetError::UnknownBucket(_)));
    }
}
