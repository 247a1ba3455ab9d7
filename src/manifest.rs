//! Inventory of a generated corpus
//!
//! Written as `manifest.json` next to the corpus files so consumers can check
//! what was materialized without re-running the enumeration:
//!
//! ```text
//! output/
//! ├── manifest.json
//! ├── file_0_sec_0.bin
//! ├── file_1_sec_0.bin
//! └── ...
//! ```

use crate::error::{CorpusError, Result};
use crate::tlv::MAGIC;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Manifest format version
pub const MANIFEST_VERSION: &str = "1.0.0";

/// Corpus manifest structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpusManifest {
    /// Manifest format version
    pub format_version: String,

    /// File magic, hex-encoded as written on disk
    pub magic: String,

    /// Files in the corpus, in generation order
    #[serde(default)]
    pub files: Vec<CorpusEntry>,
}

/// File entry in manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusEntry {
    /// File name relative to the output directory
    pub path: String,

    pub section_count: u8,

    /// Position within its section count's enumeration
    pub index: usize,

    pub size: u64,

    /// SHA-256 of the file bytes
    pub sha256: String,
}

impl CorpusManifest {
    pub fn new() -> Self {
        Self {
            format_version: MANIFEST_VERSION.to_string(),
            magic: hex::encode(MAGIC.to_le_bytes()),
            files: Vec::new(),
        }
    }

    /// Add a file entry to the manifest
    pub fn add_file(&mut self, path: String, section_count: u8, index: usize, data: &[u8]) {
        let sha256 = hex::encode(Sha256::digest(data));
        self.files.push(CorpusEntry {
            path,
            section_count,
            index,
            size: data.len() as u64,
            sha256,
        });
    }

    /// Entries generated for one section count
    pub fn files_for(&self, section_count: u8) -> impl Iterator<Item = &CorpusEntry> {
        self.files
            .iter()
            .filter(move |e| e.section_count == section_count)
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> Result<Vec<u8>> {
        serde_json::to_vec_pretty(self).map_err(CorpusError::from)
    }

    /// Parse from JSON
    pub fn from_json(data: &[u8]) -> Result<Self> {
        serde_json::from_slice(data).map_err(CorpusError::from)
    }
}

impl Default for CorpusManifest {
    fn default() -> Self {
        Self::new()
    }
}
