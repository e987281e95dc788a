//! Error types for report sealing and verification.

use thiserror::Error;

/// Errors that can occur when embedding or verifying report metadata.
#[derive(Debug, Error)]
pub enum Error {
    /// PNG container error.
    #[error("{0}")]
    Png(#[from] sigil_png::Error),

    /// The PNG has no IEND chunk to insert before.
    #[error("PNG has no IEND chunk")]
    MissingIend,

    /// A text chunk payload is missing its keyword separator.
    #[error("text chunk payload has no NUL keyword separator")]
    MissingSeparator,

    /// The verification payload after the keyword is not valid metadata JSON.
    #[error("malformed verification payload: {0}")]
    MalformedPayload(serde_json::Error),

    /// Metadata could not be serialized to JSON.
    #[error("failed to serialize metadata: {0}")]
    Serialize(serde_json::Error),
}

/// Result type for report operations.
pub type Result<T> = std::result::Result<T, Error>;
