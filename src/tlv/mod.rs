mod assembler;
mod buffer;
mod catalog;
mod enumerator;
mod format;

pub use assembler::FileAssembler;
pub use buffer::SharedBuffer;
pub use catalog::{TagLength, TagLengthCatalog, CATALOG_SIZE};
pub use enumerator::{enumerate, Enumerator};
pub use format::{
    encode_file, max_file_size, FileHeader, Section, HEADER_SIZE, MAGIC, MAGIC_BYTES,
    MAX_FILE_SIZE, MAX_SECTIONS, MAX_VALUE_LENGTH, SECTION_OVERHEAD,
};
