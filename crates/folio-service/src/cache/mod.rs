//! Storage side of the HTTP response cache.
//!
//! The store is a plain byte-oriented key/value interface with per-entry
//! expiry. Entries are never invalidated; they live until their TTL runs out.

mod cached_response;
mod redis_response_cache;
mod response_cache_store;

pub use cached_response::CachedResponse;
pub use redis_response_cache::RedisResponseCache;
pub use response_cache_store::ResponseCacheStore;
