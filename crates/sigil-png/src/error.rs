//! Error types for sigil-png.

use thiserror::Error;

/// Error type for PNG container operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Buffer does not start with the PNG signature.
    #[error("not a PNG: bad signature {actual:02x?}")]
    InvalidSignature { actual: Vec<u8> },

    /// Chunk extends past the end of the buffer.
    #[error("truncated chunk at offset {offset}: needed {needed} bytes but only {available} remain")]
    TruncatedChunk {
        offset: usize,
        needed: usize,
        available: usize,
    },

    /// End of buffer reached while reading.
    #[error("unexpected end of buffer: needed {needed} bytes but only {available} available")]
    UnexpectedEof { needed: usize, available: usize },

    /// Declared chunk length exceeds what the PNG format allows.
    #[error("chunk data length {length} exceeds the PNG limit of 2^31-1 bytes")]
    ChunkTooLarge { length: usize },
}

/// Result type alias using the PNG Error type.
pub type Result<T> = std::result::Result<T, Error>;
