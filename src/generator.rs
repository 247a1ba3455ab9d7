use crate::error::Result;
use crate::tlv::{enumerate, Enumerator, FileAssembler, SharedBuffer, TagLengthCatalog};

/// Owns the reusable buffer and hands out one traversal at a time
///
/// `generate_all` borrows the generator mutably, so a second traversal cannot
/// start while a previous [`Enumerator`] is still alive.
pub struct CorpusGenerator {
    catalog: &'static TagLengthCatalog,
    buffer: SharedBuffer,
}

impl CorpusGenerator {
    pub fn new() -> Self {
        Self {
            catalog: TagLengthCatalog::shared(),
            buffer: SharedBuffer::new(),
        }
    }

    /// Every file with exactly `section_count` sections, lazily, in enumeration order
    pub fn generate_all(&mut self, section_count: u8) -> Result<Enumerator<'_>> {
        let start = FileAssembler::write_header(&mut self.buffer, section_count)?;
        Ok(enumerate(&mut self.buffer, self.catalog, section_count, start))
    }
}

impl Default for CorpusGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tlv::MAGIC_BYTES;

    #[test]
    fn test_generate_all_writes_header() {
        let mut generator = CorpusGenerator::new();
        let first = generator.generate_all(2).unwrap().next().unwrap().unwrap();
        assert_eq!(&first[..4], &MAGIC_BYTES);
        assert_eq!(first[4], 2);
        assert_eq!(&first[5..], &[0, 0, 0, 0]);
    }

    #[test]
    fn test_traversals_reuse_buffer() {
        let mut generator = CorpusGenerator::new();

        // Leave a long file behind, then start a shorter traversal
        let long: Vec<_> = generator
            .generate_all(1)
            .unwrap()
            .take(300)
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(long[299].len(), 5 + 2 + 2);

        let files: Vec<_> = generator
            .generate_all(0)
            .unwrap()
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(files, vec![vec![0x0D, 0x90, 0xE1, 0xFE, 0]]);
    }
}
