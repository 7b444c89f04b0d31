//! Serializing domain values to/from cache bytes.
//!
//! Cache values are stored as JSON so they stay human-readable when
//! inspecting a Redis instance or a dumped memory cache.

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

/// Errors that can occur during cache serialization/deserialization.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SerializationError {
    #[error("Failed to serialize: {0}")]
    SerializeFailed(String),
    #[error("Failed to deserialize: {0}")]
    DeserializeFailed(String),
}

/// Serializes a value to JSON cache bytes.
pub fn to_cache_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>, SerializationError> {
    serde_json::to_vec(value).map_err(|e| SerializationError::SerializeFailed(e.to_string()))
}

/// Deserializes JSON cache bytes back into a value.
pub fn from_cache_bytes<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, SerializationError> {
    serde_json::from_slice(bytes).map_err(|e| SerializationError::DeserializeFailed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::{Shift, ShiftRole};
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    fn test_shift() -> Shift {
        let start = Utc.with_ymd_and_hms(2024, 6, 15, 9, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 6, 15, 17, 0, 0).unwrap();
        Shift::new("Day shift", start, end)
            .with_id(Uuid::parse_str("550e8400-e29b-41d4-a716-446655440000").unwrap())
            .with_staff(Uuid::nil(), ShiftRole::Supervisor)
    }

    #[test]
    fn test_roundtrip_shift() {
        let shift = test_shift();
        let bytes = to_cache_bytes(&shift).expect("serialize should succeed");
        let back: Shift = from_cache_bytes(&bytes).expect("deserialize should succeed");
        assert_eq!(shift, back);
    }

    #[test]
    fn test_roundtrip_shift_vec() {
        let shifts = vec![test_shift(), test_shift().with_id(Uuid::nil())];
        let bytes = to_cache_bytes(&shifts).unwrap();
        let back: Vec<Shift> = from_cache_bytes(&bytes).unwrap();
        assert_eq!(shifts, back);
    }

    #[test]
    fn test_empty_vec_is_json_array() {
        let shifts: Vec<Shift> = vec![];
        let bytes = to_cache_bytes(&shifts).unwrap();
        assert_eq!(bytes, b"[]");
    }

    #[test]
    fn test_deserialize_malformed_bytes() {
        let result: Result<Shift, _> = from_cache_bytes(b"not valid json");
        assert!(matches!(
            result.unwrap_err(),
            SerializationError::DeserializeFailed(_)
        ));
    }
}
