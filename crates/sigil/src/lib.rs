//! Sigil - tamper-evident PNG sealing and verification library.
//!
//! This crate provides a unified interface to the Sigil library ecosystem
//! for sealing combat-report PNG exports and verifying them later.
//!
//! # Crates
//!
//! - [`sigil_png`] - PNG chunk walking, CRC-32, and chunk-level editing
//! - [`sigil_report`] - Metadata record, embedding, and verification
//!
//! # Example
//!
//! ```no_run
//! use sigil::prelude::*;
//!
//! let png = std::fs::read("report.png")?;
//!
//! let metadata = ParseMetadata::new(
//!     "2025-11-02T18:45:12.000Z".into(),
//!     280,
//!     vec![],
//!     "1.4.2".into(),
//! )?;
//!
//! let sealed = embed_metadata(&png, &metadata)?;
//! std::fs::write("report.sealed.png", &sealed)?;
//!
//! match verify_image(&sealed)? {
//!     Verdict::Authentic { .. } => println!("authentic"),
//!     Verdict::Tampered { .. } => println!("tampered"),
//!     Verdict::NotVerifiable => println!("not sealed"),
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// Re-export all sub-crates
pub use sigil_png as png;
pub use sigil_report as report;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use sigil_png::{append_chunk, crc, is_png, BinaryReader, ChunkIter, PngChunk};
    pub use sigil_report::{
        embed_metadata, verify_image, ParseMetadata, PlayerRecord, Verdict,
    };
}

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
