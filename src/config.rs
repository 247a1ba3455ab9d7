//! Driver configuration
//!
//! Loaded from TOML; every field is optional:
//!
//! ```toml
//! output_dir = "output"
//! files_per_section_count = 10
//! min_section_count = 0
//! max_section_count = 255
//! write_manifest = true
//! ```

use crate::error::{CorpusError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Files materialized per section count unless configured otherwise
pub const DEFAULT_FILES_PER_SECTION_COUNT: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunnerConfig {
    /// Directory receiving the corpus files
    pub output_dir: PathBuf,

    /// Cap on files pulled for each section count
    pub files_per_section_count: usize,

    pub min_section_count: u8,

    pub max_section_count: u8,

    /// Write `manifest.json` alongside the corpus
    pub write_manifest: bool,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("output"),
            files_per_section_count: DEFAULT_FILES_PER_SECTION_COUNT,
            min_section_count: 0,
            max_section_count: u8::MAX,
            write_manifest: true,
        }
    }
}

impl RunnerConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_section_count > self.max_section_count {
            return Err(CorpusError::InvalidConfig(format!(
                "min_section_count ({}) exceeds max_section_count ({})",
                self.min_section_count, self.max_section_count
            )));
        }
        Ok(())
    }

    /// Section counts visited by the driver, in order
    pub fn section_counts(&self) -> std::ops::RangeInclusive<u8> {
        self.min_section_count..=self.max_section_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RunnerConfig::default();
        assert_eq!(config.output_dir, PathBuf::from("output"));
        assert_eq!(config.files_per_section_count, 10);
        assert_eq!(config.section_counts().count(), 256);
        assert!(config.write_manifest);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = RunnerConfig::from_toml_str("files_per_section_count = 3\n").unwrap();
        assert_eq!(config.files_per_section_count, 3);
        assert_eq!(config.max_section_count, 255);
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = RunnerConfig {
            output_dir: PathBuf::from("corpus"),
            files_per_section_count: 2,
            min_section_count: 1,
            max_section_count: 4,
            write_manifest: false,
        };
        let text = config.to_toml_string().unwrap();
        assert_eq!(RunnerConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_invalid_range_rejected() {
        let err = RunnerConfig::from_toml_str("min_section_count = 5\nmax_section_count = 2\n")
            .unwrap_err();
        assert!(matches!(err, CorpusError::InvalidConfig(_)));
    }

    #[test]
    fn test_out_of_range_count_is_toml_error() {
        let err = RunnerConfig::from_toml_str("max_section_count = 300\n").unwrap_err();
        assert!(matches!(err, CorpusError::TomlError(_)));
    }
}
