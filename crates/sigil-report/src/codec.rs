//! Encoding and decoding of the verification chunk payload.
//!
//! The payload is the data segment of one `tEXt` chunk: the keyword, a NUL
//! separator, then the record as JSON. tEXt nominally carries Latin-1, but
//! the JSON here is UTF-8; decoders that only care about the keyword treat
//! the rest as opaque bytes, which is all we need.

use memchr::memchr;

use crate::{Error, ParseMetadata, Result};

/// Keyword identifying the verification chunk among other text chunks.
pub const VERIFICATION_KEYWORD: &str = "BPSR-Verification";

/// Encode a record into the data segment of a verification chunk.
pub fn encode(metadata: &ParseMetadata) -> Result<Vec<u8>> {
    let json = serde_json::to_vec(metadata).map_err(Error::Serialize)?;
    let mut payload = Vec::with_capacity(VERIFICATION_KEYWORD.len() + 1 + json.len());
    payload.extend_from_slice(VERIFICATION_KEYWORD.as_bytes());
    payload.push(0);
    payload.extend_from_slice(&json);
    Ok(payload)
}

/// Decode the data segment of a `tEXt` chunk.
///
/// Returns `Ok(None)` when the keyword belongs to someone else, so callers
/// can skip foreign text chunks without failing the walk. Fails when the
/// separator is missing or when our keyword is followed by invalid JSON.
pub fn decode(data: &[u8]) -> Result<Option<ParseMetadata>> {
    let separator = memchr(0, data).ok_or(Error::MissingSeparator)?;
    if &data[..separator] != VERIFICATION_KEYWORD.as_bytes() {
        return Ok(None);
    }
    let metadata =
        serde_json::from_slice(&data[separator + 1..]).map_err(Error::MalformedPayload)?;
    Ok(Some(metadata))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PlayerRecord;
    use serde_json::Number;

    fn sample_metadata() -> ParseMetadata {
        ParseMetadata::new(
            "2025-11-02T18:45:12.000Z".into(),
            280,
            vec![PlayerRecord {
                name: "Alice".into(),
                dps: Number::from(15230),
                damage: Number::from(4_265_000),
                profession: "Stormblade".into(),
            }],
            "1.4.2".into(),
        )
        .unwrap()
    }

    #[test]
    fn test_encode_layout() {
        let payload = encode(&sample_metadata()).unwrap();

        assert!(payload.starts_with(b"BPSR-Verification\0"));
        let json = &payload[VERIFICATION_KEYWORD.len() + 1..];
        assert_eq!(json[0], b'{');
        assert!(!json.contains(&0));
    }

    #[test]
    fn test_decode_round_trip() {
        let metadata = sample_metadata();
        let payload = encode(&metadata).unwrap();

        let decoded = decode(&payload).unwrap().unwrap();
        assert_eq!(decoded, metadata);
    }

    #[test]
    fn test_foreign_keyword_is_not_ours() {
        assert!(decode(b"Comment\0created with gimp").unwrap().is_none());
        assert!(decode(b"Software\0").unwrap().is_none());
        // Exact keyword match only; prefixes and extensions are foreign.
        assert!(decode(b"BPSR-Verification2\0{}").unwrap().is_none());
        assert!(decode(b"BPSR\0{}").unwrap().is_none());
    }

    #[test]
    fn test_missing_separator() {
        let err = decode(b"no separator here").unwrap_err();
        assert!(matches!(err, Error::MissingSeparator));

        let err = decode(b"").unwrap_err();
        assert!(matches!(err, Error::MissingSeparator));
    }

    #[test]
    fn test_matched_keyword_with_bad_json() {
        let err = decode(b"BPSR-Verification\0not json at all").unwrap_err();
        assert!(matches!(err, Error::MalformedPayload(_)));

        // Valid JSON but the wrong shape is also malformed.
        let err = decode(b"BPSR-Verification\0[1,2,3]").unwrap_err();
        assert!(matches!(err, Error::MalformedPayload(_)));
    }

    #[test]
    fn test_unknown_fields_tolerated() {
        let metadata = sample_metadata();
        let mut value = serde_json::to_value(&metadata).unwrap();
        value["exporter"] = "bpsr-meter".into();

        let mut payload = b"BPSR-Verification\0".to_vec();
        payload.extend_from_slice(value.to_string().as_bytes());

        let decoded = decode(&payload).unwrap().unwrap();
        assert_eq!(decoded.hash, metadata.hash);
    }
}
