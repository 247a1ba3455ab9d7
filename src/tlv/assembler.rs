use crate::error::Result;
use crate::tlv::buffer::SharedBuffer;
use crate::tlv::format::{FileHeader, HEADER_SIZE};

/// Seeds the fixed file header into a [`SharedBuffer`] before enumeration
pub struct FileAssembler;

impl FileAssembler {
    /// Write magic and section count at offset 0.
    ///
    /// Returns the offset where the first section begins.
    pub fn write_header(buffer: &mut SharedBuffer, section_count: u8) -> Result<usize> {
        let header = FileHeader::new(section_count);
        buffer.write_at(0, &header.to_bytes())?;
        Ok(HEADER_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tlv::format::MAGIC_BYTES;

    #[test]
    fn test_write_header() {
        let mut buffer = SharedBuffer::new();
        let offset = FileAssembler::write_header(&mut buffer, 3).unwrap();
        assert_eq!(offset, HEADER_SIZE);

        let header = buffer.snapshot(HEADER_SIZE).unwrap();
        assert_eq!(&header[..4], &MAGIC_BYTES);
        assert_eq!(header[4], 3);
    }

    #[test]
    fn test_rewrite_header_overwrites_count() {
        let mut buffer = SharedBuffer::new();
        FileAssembler::write_header(&mut buffer, 255).unwrap();
        FileAssembler::write_header(&mut buffer, 0).unwrap();
        assert_eq!(buffer.as_slice()[4], 0);
    }
}
