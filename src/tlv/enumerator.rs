//! Depth-first enumeration of every file with a fixed number of sections
//!
//! The enumerator walks the cross product of sections in lexicographic order:
//! section 0 is the outermost loop, and within a section the catalog order
//! (tag, then length) is followed by the value bytes counted like an odometer.
//!
//! # State
//!
//! One [`Frame`] per filled section records where the section starts and which
//! catalog entry it currently holds. The value bytes are not tracked separately:
//! they live in the [`SharedBuffer`] and are stepped in place. Deeper sections only
//! write at higher offsets, so a section's value survives while its descendants
//! are enumerated.
//!
//! Each completed file is copied out of the buffer before it is yielded, so
//! callers may keep every file while enumeration continues.

use crate::error::{CorpusError, Result};
use crate::tlv::buffer::SharedBuffer;
use crate::tlv::catalog::{TagLength, TagLengthCatalog};
use crate::tlv::format::SECTION_OVERHEAD;
use std::iter::FusedIterator;

#[derive(Debug, Clone, Copy)]
struct Frame {
    /// Offset of the tag byte
    offset: usize,
    /// Index into the catalog
    cursor: usize,
    length: usize,
}

impl Frame {
    fn value_offset(&self) -> usize {
        self.offset + SECTION_OVERHEAD
    }

    fn end(&self) -> usize {
        self.value_offset() + self.length
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Start,
    Running,
    Done,
}

/// Lazy, pull-based iterator over every file with `section_count` sections
///
/// Holds the buffer exclusively for its lifetime. Dropping the iterator is the
/// only cancellation needed; the buffer contents are then simply stale.
pub struct Enumerator<'a> {
    buffer: &'a mut SharedBuffer,
    catalog: &'a TagLengthCatalog,
    section_count: usize,
    start_offset: usize,
    frames: Vec<Frame>,
    state: State,
    emitted: u64,
}

/// Enumerate files into `buffer`, filling sections from `start_offset`.
///
/// The header must already be in place (see
/// [`FileAssembler`](crate::tlv::FileAssembler)); every yielded file is
/// `buffer[0..end]` at the moment the last section was filled.
pub fn enumerate<'a>(
    buffer: &'a mut SharedBuffer,
    catalog: &'a TagLengthCatalog,
    section_count: u8,
    start_offset: usize,
) -> Enumerator<'a> {
    Enumerator {
        buffer,
        catalog,
        section_count: section_count as usize,
        start_offset,
        frames: Vec::with_capacity(section_count as usize),
        state: State::Start,
        emitted: 0,
    }
}

impl<'a> Enumerator<'a> {
    pub fn section_count(&self) -> usize {
        self.section_count
    }

    /// Number of files yielded so far
    pub fn emitted(&self) -> u64 {
        self.emitted
    }

    fn entry(&self, cursor: usize) -> Result<TagLength> {
        self.catalog.get(cursor).ok_or_else(|| {
            CorpusError::Internal(format!("Catalog cursor {} out of range", cursor))
        })
    }

    /// Write catalog entry `cursor` at `offset` with an all-zero value
    fn write_entry(&mut self, offset: usize, cursor: usize) -> Result<Frame> {
        let entry = self.entry(cursor)?;
        self.buffer.write_at(offset, &entry.to_bytes())?;

        let frame = Frame {
            offset,
            cursor,
            length: entry.length as usize,
        };
        if frame.length > 0 {
            self.buffer
                .slice_mut(frame.value_offset(), frame.length)?
                .fill(0);
        }
        Ok(frame)
    }

    /// Fill every remaining section with its first choice
    fn descend(&mut self) -> Result<()> {
        while self.frames.len() < self.section_count {
            let offset = self.end_offset();
            let frame = self.write_entry(offset, 0)?;
            self.frames.push(frame);
        }
        Ok(())
    }

    /// Step the deepest section that still has a successor.
    ///
    /// Returns false once every section is exhausted.
    fn advance(&mut self) -> Result<bool> {
        while let Some(&frame) = self.frames.last() {
            if frame.length > 0 {
                let value = self.buffer.slice_mut(frame.value_offset(), frame.length)?;
                if increment_odometer(value) {
                    return Ok(true);
                }
            }

            let next = frame.cursor + 1;
            if next < self.catalog.len() {
                let stepped = self.write_entry(frame.offset, next)?;
                if let Some(last) = self.frames.last_mut() {
                    *last = stepped;
                }
                return Ok(true);
            }

            self.frames.pop();
        }
        Ok(false)
    }

    fn end_offset(&self) -> usize {
        self.frames
            .last()
            .map(Frame::end)
            .unwrap_or(self.start_offset)
    }

    fn step(&mut self) -> Result<Option<Vec<u8>>> {
        let more = match self.state {
            State::Done => return Ok(None),
            State::Start => {
                self.state = State::Running;
                true
            }
            State::Running => self.advance()?,
        };

        if !more {
            return Ok(None);
        }

        self.descend()?;
        let file = self.buffer.snapshot(self.end_offset())?;
        Ok(Some(file))
    }
}

impl<'a> Iterator for Enumerator<'a> {
    type Item = Result<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.step() {
            Ok(Some(file)) => {
                self.emitted += 1;
                Some(Ok(file))
            }
            Ok(None) => {
                self.state = State::Done;
                None
            }
            Err(e) => {
                self.state = State::Done;
                Some(Err(e))
            }
        }
    }
}

impl<'a> FusedIterator for Enumerator<'a> {}

/// Advance a big-endian byte counter by one.
///
/// Returns false on rollover, leaving every byte at zero.
fn increment_odometer(value: &mut [u8]) -> bool {
    for byte in value.iter_mut().rev() {
        if *byte == u8::MAX {
            *byte = 0;
        } else {
            *byte += 1;
            return true;
        }
    }
    false
}
