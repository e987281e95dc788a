//! Sequential walk over the chunks of a PNG buffer.
//!
//! [`ChunkIter`] validates the signature up front and then yields each chunk
//! in file order, stopping after IEND. Bytes past IEND are ignored, matching
//! how image viewers treat trailing data.

use crate::chunk::{
    is_png, ChunkHeader, PngChunk, CHUNK_OVERHEAD, IEND, MAX_CHUNK_LENGTH, PNG_SIGNATURE,
};
use crate::{BinaryReader, Error, Result};

/// Iterator over the chunks of a PNG buffer.
///
/// Yields `Result<PngChunk>` so a malformed chunk surfaces as an error item
/// rather than silently ending the walk. The iterator fuses after IEND, after
/// an error, or when the buffer is exhausted.
#[derive(Debug, Clone)]
pub struct ChunkIter<'a> {
    data: &'a [u8],
    pos: usize,
    done: bool,
}

impl<'a> ChunkIter<'a> {
    /// Create an iterator over `data`, checking the PNG signature first.
    pub fn new(data: &'a [u8]) -> Result<Self> {
        if !is_png(data) {
            return Err(Error::InvalidSignature {
                actual: data[..data.len().min(PNG_SIGNATURE.len())].to_vec(),
            });
        }
        Ok(Self {
            data,
            pos: PNG_SIGNATURE.len(),
            done: false,
        })
    }

    fn read_next(&mut self) -> Result<Option<PngChunk<'a>>> {
        let mut reader = BinaryReader::new_at(self.data, self.pos);
        if reader.is_empty() {
            // Ran out exactly on a chunk boundary without seeing IEND.
            return Ok(None);
        }

        let offset = self.pos;
        let available = reader.remaining();
        if available < CHUNK_OVERHEAD {
            return Err(Error::TruncatedChunk {
                offset,
                needed: CHUNK_OVERHEAD,
                available,
            });
        }

        let header: ChunkHeader = reader.read_struct()?;
        let length = header.length.get() as usize;
        if length > MAX_CHUNK_LENGTH {
            return Err(Error::ChunkTooLarge { length });
        }
        if length > available - CHUNK_OVERHEAD {
            return Err(Error::TruncatedChunk {
                offset,
                needed: CHUNK_OVERHEAD.saturating_add(length),
                available,
            });
        }

        let data = reader.read_bytes(length)?;
        let crc = reader.read_u32()?;
        self.pos = reader.position();

        Ok(Some(PngChunk {
            offset,
            length: header.length.get(),
            chunk_type: header.chunk_type,
            data,
            crc,
        }))
    }
}

impl<'a> Iterator for ChunkIter<'a> {
    type Item = Result<PngChunk<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.read_next() {
            Ok(Some(chunk)) => {
                if chunk.is_type(IEND) {
                    self.done = true;
                }
                Some(Ok(chunk))
            }
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

/// Find the first chunk of the given type, walking from the start.
pub fn find_chunk(data: &[u8], chunk_type: [u8; 4]) -> Result<Option<PngChunk<'_>>> {
    for chunk in ChunkIter::new(data)? {
        let chunk = chunk?;
        if chunk.is_type(chunk_type) {
            return Ok(Some(chunk));
        }
    }
    Ok(None)
}
