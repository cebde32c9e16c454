//! Response cache store trait.

use async_trait::async_trait;
use folio_core::FolioResult;
use std::time::Duration;

/// Byte-oriented key/value store with per-entry expiry.
#[async_trait]
pub trait ResponseCacheStore: Send + Sync {
    /// Looks up a key.
    ///
    /// `Ok(None)` is a miss. An `Err` is a backend fault, which callers
    /// must not confuse with absence.
    async fn get(&self, key: &str) -> FolioResult<Option<Vec<u8>>>;

    /// Stores `value` under `key`, expiring after `ttl`.
    async fn set(&self, key: &str, value: &[u8], ttl: Duration) -> FolioResult<()>;

    /// Returns false if the store drops every write.
    fn is_enabled(&self) -> bool {
        true
    }
}
