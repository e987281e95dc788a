//! Embedding a verification chunk into a finished PNG.

use sigil_png::{append_chunk, find_chunk, CHUNK_OVERHEAD, IEND, TEXT};

use crate::{codec, Error, ParseMetadata, Result};

/// Return a copy of `png` with a verification chunk spliced in before IEND.
///
/// The input is never modified. The new chunk becomes the last chunk before
/// the trailer, so the output keeps the original IHDR/IDAT/IEND ordering and
/// stays decodable by any PNG reader. Fails with [`Error::MissingIend`] when
/// the walk finds no trailer to insert before.
pub fn embed_metadata(png: &[u8], metadata: &ParseMetadata) -> Result<Vec<u8>> {
    let iend = find_chunk(png, IEND)?.ok_or(Error::MissingIend)?;
    let payload = codec::encode(metadata)?;

    let mut out = Vec::with_capacity(png.len() + CHUNK_OVERHEAD + payload.len());
    out.extend_from_slice(&png[..iend.offset]);
    append_chunk(&mut out, TEXT, &payload)?;
    out.extend_from_slice(&png[iend.offset..]);
    Ok(out)
}
