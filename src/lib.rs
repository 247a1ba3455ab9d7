//! tlv-corpus: exhaustive enumeration of TLV container files
//!
//! Produces every byte-exact file of a fixed-header Tag-Length-Value format in a
//! deterministic order, for use as a ground-truth corpus when fuzzing or
//! conformance-testing a TLV parser.
//!
//! File layout:
//! - 4-byte magic `0xFEE1900D` (little-endian: `0D 90 E1 FE`)
//! - 1-byte section count
//! - sections of `tag` (1 byte), `length` (1 byte), `value` (`length` bytes)
//!
//! # Example
//!
//! ```no_run
//! use tlv_corpus::CorpusGenerator;
//!
//! let mut generator = CorpusGenerator::new();
//!
//! // First ten files with a single section
//! for file in generator.generate_all(1)?.take(10) {
//!     let file = file?;
//!     println!("{} bytes", file.len());
//! }
//! # Ok::<(), tlv_corpus::error::CorpusError>(())
//! ```

// Core modules
pub mod config;
pub mod error;
pub mod generator;
pub mod manifest;
pub mod persist;
pub mod runner;
pub mod tlv;

// Re-export commonly used types
pub use config::RunnerConfig;
pub use error::{CorpusError, Result};
pub use generator::CorpusGenerator;
pub use manifest::{CorpusEntry, CorpusManifest};
pub use persist::{DirectoryPersister, MemoryPersister, Persister, StoredFile};
pub use runner::{RunSummary, Runner};
pub use tlv::{
    encode_file, enumerate, Enumerator, FileAssembler, FileHeader, Section, SharedBuffer,
    TagLength, TagLengthCatalog, HEADER_SIZE, MAGIC, MAGIC_BYTES, MAX_FILE_SIZE,
};
