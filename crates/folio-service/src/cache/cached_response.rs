//! Serialized form of a cached HTTP response.

use folio_core::FolioResult;
use serde::{Deserialize, Serialize};

/// A response captured on a cache miss and replayed on later hits.
///
/// Stored as JSON with the body as a base64 string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachedResponse {
    pub status: u16,
    #[serde(with = "base64_body")]
    pub body: Vec<u8>,
    pub content_type: String,
}

impl CachedResponse {
    #[must_use]
    pub fn new(status: u16, body: Vec<u8>, content_type: impl Into<String>) -> Self {
        Self {
            status,
            body,
            content_type: content_type.into(),
        }
    }

    /// Returns true if a response with this status may be cached.
    #[must_use]
    pub const fn is_cacheable(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Encodes the entry as stored in the cache.
    pub fn encode(&self) -> FolioResult<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Decodes a stored entry.
    pub fn decode(bytes: &[u8]) -> FolioResult<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }
}

mod base64_body {
    use base64::{engine::general_purpose::STANDARD, Engine as _};
    use serde::{de::Error as _, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(body: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(body))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        STANDARD.decode(encoded).map_err(D::Error::custom)
    }
}
