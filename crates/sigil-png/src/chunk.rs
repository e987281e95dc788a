//! PNG chunk structures and chunk-level encoding.

use zerocopy::byteorder::{BigEndian, U32};
use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

use crate::{crc, Error, Result};

/// The 8-byte signature at the start of every PNG file.
pub const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

/// Bytes a chunk occupies beyond its data: length (4) + type (4) + CRC (4).
pub const CHUNK_OVERHEAD: usize = 12;

/// Maximum chunk data length allowed by the PNG specification (2^31 - 1).
pub const MAX_CHUNK_LENGTH: usize = 0x7FFF_FFFF;

/// Image header chunk type.
pub const IHDR: [u8; 4] = *b"IHDR";

/// Image data chunk type.
pub const IDAT: [u8; 4] = *b"IDAT";

/// Image trailer chunk type.
pub const IEND: [u8; 4] = *b"IEND";

/// Uncompressed text chunk type.
pub const TEXT: [u8; 4] = *b"tEXt";

/// Fixed-size prefix of a chunk on the wire: data length and type code.
#[derive(Debug, Clone, Copy, FromBytes, IntoBytes, Immutable, KnownLayout)]
#[repr(C)]
pub struct ChunkHeader {
    /// Length of the data field in bytes.
    pub length: U32<BigEndian>,
    /// Four-byte chunk type code.
    pub chunk_type: [u8; 4],
}

/// A parsed chunk borrowing its data from the underlying buffer.
#[derive(Debug, Clone, Copy)]
pub struct PngChunk<'a> {
    /// Byte offset of the chunk's length field in the file.
    pub offset: usize,
    /// Length of the data field.
    pub length: u32,
    /// Four-byte chunk type code.
    pub chunk_type: [u8; 4],
    /// The chunk's data field.
    pub data: &'a [u8],
    /// CRC stored after the data field.
    pub crc: u32,
}

impl<'a> PngChunk<'a> {
    /// Check whether this chunk has the given type code.
    #[inline]
    pub fn is_type(&self, chunk_type: [u8; 4]) -> bool {
        self.chunk_type == chunk_type
    }

    /// The chunk type as a string, with non-ASCII bytes replaced.
    pub fn type_str(&self) -> String {
        String::from_utf8_lossy(&self.chunk_type).into_owned()
    }

    /// Total bytes the chunk occupies in the file.
    #[inline]
    pub const fn total_size(&self) -> usize {
        self.length as usize + CHUNK_OVERHEAD
    }

    /// Byte offset just past the chunk's CRC field.
    #[inline]
    pub const fn end_offset(&self) -> usize {
        self.offset + self.total_size()
    }

    /// Recompute the CRC over the type and data fields.
    pub fn compute_crc(&self) -> u32 {
        chunk_crc(self.chunk_type, self.data)
    }

    /// Check the stored CRC against a fresh computation.
    pub fn crc_valid(&self) -> bool {
        self.crc == self.compute_crc()
    }
}

/// CRC over the chunk type followed by the chunk data, per the PNG spec.
fn chunk_crc(chunk_type: [u8; 4], data: &[u8]) -> u32 {
    let mut crc = crc::Crc32::new();
    crc.update(&chunk_type);
    crc.update(data);
    crc.finalize()
}

/// Check whether a buffer starts with the PNG signature.
#[inline]
pub fn is_png(data: &[u8]) -> bool {
    data.len() >= PNG_SIGNATURE.len() && data[..PNG_SIGNATURE.len()] == PNG_SIGNATURE
}

/// Append a fully framed chunk to an output buffer.
///
/// Writes the big-endian length, the type code, the data, and the computed
/// CRC. Fails if the data exceeds [`MAX_CHUNK_LENGTH`].
pub fn append_chunk(out: &mut Vec<u8>, chunk_type: [u8; 4], data: &[u8]) -> Result<()> {
    if data.len() > MAX_CHUNK_LENGTH {
        return Err(Error::ChunkTooLarge { length: data.len() });
    }
    out.extend_from_slice(&(data.len() as u32).to_be_bytes());
    out.extend_from_slice(&chunk_type);
    out.extend_from_slice(data);
    out.extend_from_slice(&chunk_crc(chunk_type, data).to_be_bytes());
    Ok(())
}
