//! Verification of sealed report PNGs.

use serde::Serialize;
use sigil_png::{ChunkIter, TEXT};

use crate::{codec, ParseMetadata, Result};

/// Outcome of verifying a PNG buffer.
///
/// Structural failures (bad signature, truncation, malformed payload) are
/// reported through the error channel instead; every verdict here is a
/// successful classification of a walkable PNG.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Verdict {
    /// Valid PNG, but it carries no verification chunk.
    NotVerifiable,
    /// The recomputed hash matches the embedded one.
    Authentic {
        metadata: ParseMetadata,
        hash: String,
    },
    /// The recomputed hash differs from what the record claims.
    Tampered {
        metadata: ParseMetadata,
        /// Hash embedded in the record at export time.
        expected: String,
        /// Hash recomputed from the record's current contents.
        actual: String,
    },
}

/// Classify an untrusted buffer as authentic, tampered, or not verifiable.
///
/// Walks the chunks from the signature forward and decodes the first text
/// chunk carrying our keyword; later duplicates are ignored. The stored and
/// recomputed hashes are compared case-insensitively.
pub fn verify_image(data: &[u8]) -> Result<Verdict> {
    for chunk in ChunkIter::new(data)? {
        let chunk = chunk?;
        if !chunk.is_type(TEXT) {
            continue;
        }
        let metadata = match codec::decode(chunk.data)? {
            Some(metadata) => metadata,
            None => continue,
        };

        let actual = metadata.compute_hash()?;
        return Ok(if metadata.hash.eq_ignore_ascii_case(&actual) {
            Verdict::Authentic {
                hash: actual,
                metadata,
            }
        } else {
            Verdict::Tampered {
                expected: metadata.hash.clone(),
                actual,
                metadata,
            }
        });
    }
    Ok(Verdict::NotVerifiable)
}
