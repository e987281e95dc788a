//! PNG container plumbing for Sigil.
//!
//! This crate reads and edits PNGs at the chunk level without decoding any
//! pixel data:
//!
//! - [`ChunkIter`] - Walk the chunks of a PNG buffer in file order
//! - [`PngChunk`] - A parsed chunk borrowing from the underlying buffer
//! - [`crc`] - The CRC-32 used by PNG chunk checksums
//! - [`append_chunk`] - Frame a chunk onto an output buffer
//! - [`BinaryReader`] - Zero-copy big-endian reading from byte slices

mod chunk;
mod error;
mod reader;
mod walker;

pub mod crc;

pub use chunk::{
    append_chunk, is_png, ChunkHeader, PngChunk, CHUNK_OVERHEAD, IDAT, IEND, IHDR,
    MAX_CHUNK_LENGTH, PNG_SIGNATURE, TEXT,
};
pub use error::{Error, Result};
pub use reader::BinaryReader;
pub use walker::{find_chunk, ChunkIter};
