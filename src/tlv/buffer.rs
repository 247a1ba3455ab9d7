use crate::error::{CorpusError, Result};
use crate::tlv::format::MAX_FILE_SIZE;

/// Fixed-capacity scratch buffer reused for every file of a traversal
///
/// Allocated once at [`MAX_FILE_SIZE`] bytes and never resized. Files leave the
/// buffer only through [`SharedBuffer::snapshot`], which copies.
pub struct SharedBuffer {
    bytes: Box<[u8]>,
}

impl SharedBuffer {
    pub fn new() -> Self {
        Self {
            bytes: vec![0u8; MAX_FILE_SIZE].into_boxed_slice(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.bytes.len()
    }

    /// Overwrite bytes starting at `offset`
    pub fn write_at(&mut self, offset: usize, data: &[u8]) -> Result<()> {
        let end = self.check_range(offset, data.len())?;
        self.bytes[offset..end].copy_from_slice(data);
        Ok(())
    }

    /// Independent copy of bytes `[0, upto)`
    pub fn snapshot(&self, upto: usize) -> Result<Vec<u8>> {
        self.check_range(0, upto)?;
        Ok(self.bytes[..upto].to_vec())
    }

    /// Mutable view of `[offset, offset + len)`, used to step value odometers in place
    pub(crate) fn slice_mut(&mut self, offset: usize, len: usize) -> Result<&mut [u8]> {
        let end = self.check_range(offset, len)?;
        Ok(&mut self.bytes[offset..end])
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    fn check_range(&self, offset: usize, len: usize) -> Result<usize> {
        match offset.checked_add(len) {
            Some(end) if end <= self.bytes.len() => Ok(end),
            _ => {
                tracing::warn!(offset, len, capacity = self.bytes.len(), "buffer overrun");
                Err(CorpusError::BufferOverrun {
                    offset,
                    len,
                    capacity: self.bytes.len(),
                })
            }
        }
    }
}

impl Default for SharedBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity() {
        let buffer = SharedBuffer::new();
        assert_eq!(buffer.capacity(), 65540);
        assert!(buffer.as_slice().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_write_and_snapshot() {
        let mut buffer = SharedBuffer::new();
        buffer.write_at(2, &[1, 2, 3]).unwrap();
        assert_eq!(buffer.snapshot(6).unwrap(), vec![0, 0, 1, 2, 3, 0]);
        assert!(buffer.snapshot(0).unwrap().is_empty());
    }

    #[test]
    fn test_snapshot_is_independent() {
        let mut buffer = SharedBuffer::new();
        buffer.write_at(0, &[9, 9]).unwrap();
        let snap = buffer.snapshot(2).unwrap();
        buffer.write_at(0, &[1, 1]).unwrap();
        assert_eq!(snap, vec![9, 9]);
    }

    #[test]
    fn test_write_at_end_of_capacity() {
        let mut buffer = SharedBuffer::new();
        buffer.write_at(MAX_FILE_SIZE - 2, &[0xAB, 0xCD]).unwrap();
        assert_eq!(buffer.snapshot(MAX_FILE_SIZE).unwrap().len(), MAX_FILE_SIZE);
    }

    #[test]
    fn test_overrun_rejected() {
        let mut buffer = SharedBuffer::new();
        let err = buffer.write_at(MAX_FILE_SIZE - 1, &[1, 2]).unwrap_err();
        assert!(matches!(
            err,
            CorpusError::BufferOverrun {
                offset,
                len: 2,
                capacity: MAX_FILE_SIZE,
            } if offset == MAX_FILE_SIZE - 1
        ));

        // Nothing written on failure
        assert_eq!(buffer.as_slice()[MAX_FILE_SIZE - 1], 0);

        assert!(buffer.snapshot(MAX_FILE_SIZE + 1).is_err());
        assert!(buffer.write_at(usize::MAX, &[1]).is_err());
    }
}
