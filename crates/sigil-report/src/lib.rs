//! Tamper-evident metadata for combat-report PNG exports.
//!
//! A rendered report image gets one extra `tEXt` chunk carrying the parse
//! metadata (players, timestamps, totals) plus a SHA-256 over the fields
//! that matter. Anyone can later re-open the file and check whether the
//! statistics still match what was exported.
//!
//! # Chunk layout
//!
//! The chunk data is `"BPSR-Verification" + 0x00 + JSON(metadata)`. The
//! hash inside the JSON covers only `{timestamp, duration, players}` in
//! declaration order, so the record can carry its own digest.
//!
//! # Example
//!
//! ```
//! use sigil_report::{embed_metadata, verify_image, ParseMetadata, Verdict};
//!
//! // A minimal PNG standing in for a rendered report image.
//! let mut png = sigil_png::PNG_SIGNATURE.to_vec();
//! sigil_png::append_chunk(&mut png, sigil_png::IHDR, &[0, 0, 0, 1, 0, 0, 0, 1, 8, 0, 0, 0, 0])?;
//! sigil_png::append_chunk(&mut png, sigil_png::IEND, &[])?;
//!
//! let metadata = ParseMetadata::new(
//!     "2025-11-02T18:45:12.000Z".into(),
//!     280,
//!     vec![],
//!     "1.4.2".into(),
//! )?;
//!
//! let sealed = embed_metadata(&png, &metadata)?;
//! assert!(matches!(verify_image(&sealed)?, Verdict::Authentic { .. }));
//! # Ok::<(), sigil_report::Error>(())
//! ```

mod embed;
mod error;
mod metadata;
mod verify;

pub mod codec;

pub use embed::embed_metadata;
pub use error::{Error, Result};
pub use metadata::{ParseMetadata, PlayerRecord};
pub use verify::{verify_image, Verdict};

// Re-export the keyword so callers can recognize the chunk without
// depending on the codec module directly.
pub use codec::VERIFICATION_KEYWORD;
