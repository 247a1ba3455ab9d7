//! Destinations for generated files
//!
//! The enumerator never touches storage. The driving loop hands each file to a
//! [`Persister`], which owns naming and any I/O. Storage errors are fatal for the
//! file in question and propagate to the caller; nothing is retried.

use crate::error::Result;
use crate::manifest::CorpusManifest;
use std::fs;
use std::path::{Path, PathBuf};

/// Manifest file name inside the output directory
pub const MANIFEST_FILE: &str = "manifest.json";

/// Receives completed files from the driving loop
pub trait Persister {
    /// Store one file; `index` counts from 0 within each section count
    fn persist(&mut self, file: &[u8], section_count: u8, index: usize) -> Result<()>;

    /// Called once after the last file
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

/// File name for the `index`-th file with `section_count` sections
pub fn file_name(section_count: u8, index: usize) -> String {
    format!("file_{}_sec_{}.bin", section_count, index)
}

/// Writes one `.bin` file per generated file into a directory
pub struct DirectoryPersister {
    root: PathBuf,
    manifest: Option<CorpusManifest>,
}

impl DirectoryPersister {
    /// Create the persister, creating `root` if it does not exist
    pub fn create<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root)?;
        Ok(Self {
            root,
            manifest: None,
        })
    }

    /// Record every file and write `manifest.json` on finish
    pub fn with_manifest(mut self) -> Self {
        self.manifest = Some(CorpusManifest::new());
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn manifest(&self) -> Option<&CorpusManifest> {
        self.manifest.as_ref()
    }
}

impl Persister for DirectoryPersister {
    fn persist(&mut self, file: &[u8], section_count: u8, index: usize) -> Result<()> {
        let name = file_name(section_count, index);
        let path = self.root.join(&name);
        fs::write(&path, file)?;
        tracing::debug!(path = %path.display(), size = file.len(), "wrote corpus file");

        if let Some(manifest) = self.manifest.as_mut() {
            manifest.add_file(name, section_count, index, file);
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if let Some(manifest) = &self.manifest {
            let path = self.root.join(MANIFEST_FILE);
            fs::write(&path, manifest.to_json()?)?;
            tracing::info!(path = %path.display(), files = manifest.files.len(), "wrote manifest");
        }
        Ok(())
    }
}

/// One file held by [`MemoryPersister`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredFile {
    pub section_count: u8,
    pub index: usize,
    pub bytes: Vec<u8>,
}

/// Keeps generated files in memory
#[derive(Debug, Default)]
pub struct MemoryPersister {
    files: Vec<StoredFile>,
    finished: bool,
}

impl MemoryPersister {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn files(&self) -> &[StoredFile] {
        &self.files
    }

    pub fn into_files(self) -> Vec<StoredFile> {
        self.files
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl Persister for MemoryPersister {
    fn persist(&mut self, file: &[u8], section_count: u8, index: usize) -> Result<()> {
        self.files.push(StoredFile {
            section_count,
            index,
            bytes: file.to_vec(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.finished = true;
        Ok(())
    }
}
