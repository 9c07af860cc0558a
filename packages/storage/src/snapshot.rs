// ABOUTME: Snapshot encoding and decoding for the full application state
// ABOUTME: Lenient decode for stored data, strict decode for imports, gzip helpers

use learnpath_core::AppState;
use serde_json::Value;
use tracing::debug;

use crate::{StorageError, StorageResult};

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Serialize the whole state as pretty JSON
pub fn encode_snapshot(state: &AppState) -> StorageResult<Vec<u8>> {
    Ok(serde_json::to_vec_pretty(state)?)
}

/// Decode a stored snapshot. Missing fields are back-filled and invariants repaired.
pub fn decode_snapshot(data: &[u8]) -> StorageResult<AppState> {
    let data = maybe_decompress(data)?;
    let mut state: AppState = serde_json::from_slice(&data)?;
    state.normalize();
    debug!(
        "Decoded snapshot with {} roadmaps, {} XP",
        state.roadmaps.len(),
        state.total_xp
    );
    Ok(state)
}

/// Decode user-supplied import data. Requires non-null `roadmaps` and `categories`.
pub fn decode_import(data: &[u8]) -> StorageResult<AppState> {
    let data = maybe_decompress(data)?;
    let value: Value = serde_json::from_slice(&data)
        .map_err(|e| StorageError::InvalidFormat(format!("not valid JSON: {}", e)))?;

    for field in ["roadmaps", "categories"] {
        match value.get(field) {
            Some(Value::Array(_)) => {}
            Some(Value::Null) | None => {
                return Err(StorageError::InvalidFormat(format!(
                    "missing '{}' collection",
                    field
                )))
            }
            Some(_) => {
                return Err(StorageError::InvalidFormat(format!(
                    "'{}' must be a list",
                    field
                )))
            }
        }
    }

    let mut state: AppState =
        serde_json::from_value(value).map_err(|e| StorageError::InvalidFormat(e.to_string()))?;
    state.normalize();
    Ok(state)
}

pub fn is_compressed(data: &[u8]) -> bool {
    data.starts_with(&GZIP_MAGIC)
}

pub fn compress_data(data: &[u8]) -> StorageResult<Vec<u8>> {
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(data)
        .map_err(|e| StorageError::Compression(e.to_string()))?;
    encoder
        .finish()
        .map_err(|e| StorageError::Compression(e.to_string()))
}

pub fn decompress_data(data: &[u8]) -> StorageResult<Vec<u8>> {
    use flate2::read::GzDecoder;
    use std::io::Read;

    let mut decoder = GzDecoder::new(data);
    let mut decompressed = Vec::new();
    decoder
        .read_to_end(&mut decompressed)
        .map_err(|e| StorageError::Compression(e.to_string()))?;
    Ok(decompressed)
}

fn maybe_decompress(data: &[u8]) -> StorageResult<Vec<u8>> {
    if is_compressed(data) {
        debug!("Snapshot is gzip-compressed");
        decompress_data(data)
    } else {
        Ok(data.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};
    use pretty_assertions::assert_eq;

    fn now() -> DateTime<Utc> {
        "2024-05-01T10:00:00Z".parse().unwrap()
    }

    #[test]
    fn test_encode_decode_preserves_state() {
        let state = AppState::seeded(now());
        let bytes = encode_snapshot(&state).unwrap();
        assert_eq!(decode_snapshot(&bytes).unwrap(), state);
        assert_eq!(decode_import(&bytes).unwrap(), state);
    }

    #[test]
    fn test_compressed_import() {
        let state = AppState::seeded(now());
        let compressed = compress_data(&encode_snapshot(&state).unwrap()).unwrap();

        assert!(is_compressed(&compressed));
        assert_eq!(decode_import(&compressed).unwrap(), state);
    }

    #[test]
    fn test_lenient_decode_backfills() {
        let state = decode_snapshot(br#"{ "totalXP": 2500 }"#).unwrap();
        assert_eq!(state.total_xp, 2500);
        assert_eq!(state.level, 3);
        assert!(!state.categories.is_empty());
    }

    #[test]
    fn test_import_requires_collections() {
        let missing = decode_import(br#"{ "roadmaps": [] }"#);
        assert!(matches!(missing, Err(StorageError::InvalidFormat(_))));

        let null = decode_import(br#"{ "roadmaps": null, "categories": [] }"#);
        assert!(matches!(null, Err(StorageError::InvalidFormat(_))));

        let wrong_type = decode_import(br#"{ "roadmaps": {}, "categories": [] }"#);
        assert!(matches!(wrong_type, Err(StorageError::InvalidFormat(_))));

        let garbage = decode_import(b"not json at all");
        assert!(matches!(garbage, Err(StorageError::InvalidFormat(_))));
    }

    #[test]
    fn test_import_minimal_document() {
        let state = decode_import(br#"{ "roadmaps": [], "categories": [] }"#).unwrap();
        assert!(state.roadmaps.is_empty());
        assert!(state.categories.is_empty());
        assert_eq!(state.quests.len(), 8);
        assert_eq!(state.level, 1);
    }

    #[test]
    fn test_decode_repairs_activity_log() {
        let entries: Vec<Value> = (0..120)
            .map(|i| {
                serde_json::json!({
                    "id": format!("log-{}", i),
                    "type": "step_completed",
                    "title": "Step",
                    "description": "Earned 50 XP",
                    "xp": 50,
                    "timestamp": "2024-05-01T10:00:00Z"
                })
            })
            .collect();
        let doc = serde_json::json!({ "activityLog": entries });

        let state = decode_snapshot(doc.to_string().as_bytes()).unwrap();
        assert_eq!(state.activity_log.len(), 100);
    }
}
