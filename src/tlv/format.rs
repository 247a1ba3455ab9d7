use crate::error::{CorpusError, Result};
use std::io::{Read, Write};

/// Magic number: 0xFEE1900D, stored little-endian on disk
pub const MAGIC: u32 = 0xFEE1_900D;

/// On-disk magic bytes: 0D 90 E1 FE
pub const MAGIC_BYTES: [u8; 4] = MAGIC.to_le_bytes();

/// Header size in bytes (magic + section count)
pub const HEADER_SIZE: usize = 5;

/// Bytes spent on tag and length before each value
pub const SECTION_OVERHEAD: usize = 2;

/// Section count is a single byte
pub const MAX_SECTIONS: usize = u8::MAX as usize;

/// Length is a single byte
pub const MAX_VALUE_LENGTH: usize = u8::MAX as usize;

/// Largest possible file: 255 sections, each with a 255-byte value
pub const MAX_FILE_SIZE: usize = max_file_size(MAX_SECTIONS);

/// Upper bound on the size of any file with `section_count` sections
pub const fn max_file_size(section_count: usize) -> usize {
    HEADER_SIZE + section_count * (SECTION_OVERHEAD + MAX_VALUE_LENGTH)
}

/// A single Tag-Length-Value section
///
/// Fields are private so the length byte always matches the value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    tag: u8,
    length: u8,
    value: Vec<u8>,
}

impl Section {
    /// Create a section; `value` must not exceed 255 bytes
    pub fn new(tag: u8, value: Vec<u8>) -> Result<Self> {
        let length = u8::try_from(value.len()).map_err(|_| {
            CorpusError::InvalidSection(format!(
                "value too long: {} bytes (max {})",
                value.len(),
                MAX_VALUE_LENGTH
            ))
        })?;
        Ok(Self { tag, length, value })
    }

    pub fn tag(&self) -> u8 {
        self.tag
    }

    /// Value length as stored in the length byte
    pub fn length(&self) -> u8 {
        self.length
    }

    pub fn value(&self) -> &[u8] {
        &self.value
    }

    /// Bytes this section occupies on disk
    pub fn encoded_len(&self) -> usize {
        SECTION_OVERHEAD + self.value.len()
    }

    /// Write tag, length and value
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<()> {
        writer.write_all(&[self.tag, self.length])?;
        writer.write_all(&self.value)?;
        Ok(())
    }
}

/// File header at the beginning of every corpus file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileHeader {
    pub section_count: u8,
}

impl FileHeader {
    pub fn new(section_count: u8) -> Self {
        Self { section_count }
    }

    /// Encoded header bytes
    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut bytes = [0u8; HEADER_SIZE];
        bytes[..4].copy_from_slice(&MAGIC_BYTES);
        bytes[4] = self.section_count;
        bytes
    }

    /// Write header to a writer
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<()> {
        writer.write_all(&self.to_bytes())?;
        Ok(())
    }

    /// Read header from a reader
    pub fn read_from<R: Read>(mut reader: R) -> Result<Self> {
        let mut magic = [0u8; 4];
        reader.read_exact(&mut magic)?;

        if magic != MAGIC_BYTES {
            return Err(CorpusError::InvalidMagic);
        }

        let mut count = [0u8; 1];
        reader.read_exact(&mut count)?;

        Ok(Self {
            section_count: count[0],
        })
    }

    /// Size of a file with this header and the given sections
    pub fn file_size(&self, sections: &[Section]) -> usize {
        HEADER_SIZE + sections.iter().map(Section::encoded_len).sum::<usize>()
    }
}

/// Encode a complete file from explicit sections
pub fn encode_file(sections: &[Section]) -> Result<Vec<u8>> {
    let count = u8::try_from(sections.len()).map_err(|_| {
        CorpusError::InvalidSection(format!(
            "too many sections: {} (max {})",
            sections.len(),
            MAX_SECTIONS
        ))
    })?;

    let header = FileHeader::new(count);
    let mut buf = Vec::with_capacity(header.file_size(sections));
    header.write_to(&mut buf)?;
    for section in sections {
        section.write_to(&mut buf)?;
    }
    Ok(buf)
}
