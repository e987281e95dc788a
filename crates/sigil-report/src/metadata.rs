//! The metadata record embedded in sealed report PNGs.

use serde::{Deserialize, Serialize};
use serde_json::Number;
use sha2::{Digest, Sha256};

use crate::{Error, Result};

/// Per-player statistics line in a combat report.
///
/// `dps` and `damage` are kept as [`Number`] rather than `f64` so a value
/// written as `10` re-serializes as `10` and not `10.0`. Hash comparison
/// depends on the JSON re-encoding byte-for-byte matching what was hashed
/// at export time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub name: String,
    pub dps: Number,
    pub damage: Number,
    pub profession: String,
}

/// The full record carried by a sealed PNG.
///
/// Field declaration order is the canonical JSON key order. `hash` covers
/// only `{timestamp, duration, players}`; it excludes itself and `version`
/// so the record can carry its own digest without circularity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParseMetadata {
    /// SHA-256 of the hashed subset, 64 lowercase hex characters.
    pub hash: String,
    /// ISO-8601 export timestamp.
    pub timestamp: String,
    /// Encounter duration in seconds.
    pub duration: u64,
    /// Player lines in display order.
    pub players: Vec<PlayerRecord>,
    /// Version of the exporting application.
    pub version: String,
}

/// The subset of fields the hash is computed over, in canonical key order.
#[derive(Serialize)]
struct HashedFields<'a> {
    timestamp: &'a str,
    duration: u64,
    players: &'a [PlayerRecord],
}

impl ParseMetadata {
    /// Build a record and fill in its hash.
    pub fn new(
        timestamp: String,
        duration: u64,
        players: Vec<PlayerRecord>,
        version: String,
    ) -> Result<Self> {
        let mut metadata = Self {
            hash: String::new(),
            timestamp,
            duration,
            players,
            version,
        };
        metadata.hash = metadata.compute_hash()?;
        Ok(metadata)
    }

    /// Compute the SHA-256 of the canonical JSON of the hashed subset.
    ///
    /// The stored `hash` field does not participate, so this can be called
    /// on a decoded record and compared against what the record claims.
    pub fn compute_hash(&self) -> Result<String> {
        let subset = HashedFields {
            timestamp: &self.timestamp,
            duration: self.duration,
            players: &self.players,
        };
        let canonical = serde_json::to_vec(&subset).map_err(Error::Serialize)?;
        Ok(hex::encode(Sha256::digest(&canonical)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_players() -> Vec<PlayerRecord> {
        vec![
            PlayerRecord {
                name: "Alice".into(),
                dps: Number::from(15230),
                damage: Number::from(4_265_000),
                profession: "Stormblade".into(),
            },
            PlayerRecord {
                name: "Bob".into(),
                dps: Number::from_f64(9875.5).unwrap(),
                damage: Number::from(2_765_140),
                profession: "Frost Mage".into(),
            },
        ]
    }

    #[test]
    fn test_new_fills_hash() {
        let metadata = ParseMetadata::new(
            "2025-11-02T18:45:12.000Z".into(),
            280,
            sample_players(),
            "1.4.2".into(),
        )
        .unwrap();

        assert_eq!(metadata.hash.len(), 64);
        assert!(metadata.hash.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(metadata.hash, metadata.hash.to_lowercase());
        assert_eq!(metadata.hash, metadata.compute_hash().unwrap());
    }

    #[test]
    fn test_hash_is_deterministic() {
        let build = || {
            ParseMetadata::new(
                "2025-11-02T18:45:12.000Z".into(),
                280,
                sample_players(),
                "1.4.2".into(),
            )
            .unwrap()
        };
        assert_eq!(build().hash, build().hash);
    }

    #[test]
    fn test_hash_ignores_hash_and_version() {
        let mut metadata = ParseMetadata::new(
            "2025-11-02T18:45:12.000Z".into(),
            280,
            sample_players(),
            "1.4.2".into(),
        )
        .unwrap();
        let original = metadata.hash.clone();

        metadata.hash = "0".repeat(64);
        metadata.version = "9.9.9".into();
        assert_eq!(metadata.compute_hash().unwrap(), original);
    }

    #[test]
    fn test_hash_covers_players() {
        let base = ParseMetadata::new(
            "2025-11-02T18:45:12.000Z".into(),
            280,
            sample_players(),
            "1.4.2".into(),
        )
        .unwrap();

        let mut changed = base.clone();
        changed.players[0].dps = Number::from(15231);
        assert_ne!(changed.compute_hash().unwrap(), base.hash);

        let mut changed = base.clone();
        changed.duration = 281;
        assert_ne!(changed.compute_hash().unwrap(), base.hash);

        let mut changed = base.clone();
        changed.timestamp = "2025-11-02T18:45:13.000Z".into();
        assert_ne!(changed.compute_hash().unwrap(), base.hash);
    }

    #[test]
    fn test_integer_stats_stay_integers() {
        let metadata = ParseMetadata::new(
            "2025-11-02T18:45:12.000Z".into(),
            280,
            vec![PlayerRecord {
                name: "Alice".into(),
                dps: Number::from(10),
                damage: Number::from(2800),
                profession: "Stormblade".into(),
            }],
            "1.4.2".into(),
        )
        .unwrap();

        let json = serde_json::to_string(&metadata).unwrap();
        assert!(json.contains("\"dps\":10,"));
        assert!(!json.contains("10.0"));

        // Decoding and re-hashing reproduces the same digest.
        let decoded: ParseMetadata = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded.compute_hash().unwrap(), metadata.hash);
    }

    #[test]
    fn test_canonical_key_order() {
        let metadata = ParseMetadata::new(
            "2025-11-02T18:45:12.000Z".into(),
            280,
            sample_players(),
            "1.4.2".into(),
        )
        .unwrap();

        let json = serde_json::to_string(&metadata).unwrap();
        let hash_pos = json.find("\"hash\"").unwrap();
        let timestamp_pos = json.find("\"timestamp\"").unwrap();
        let duration_pos = json.find("\"duration\"").unwrap();
        let players_pos = json.find("\"players\"").unwrap();
        let version_pos = json.find("\"version\"").unwrap();

        assert!(hash_pos < timestamp_pos);
        assert!(timestamp_pos < duration_pos);
        assert!(duration_pos < players_pos);
        assert!(players_pos < version_pos);
    }
}
