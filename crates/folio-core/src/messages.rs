//! Client-facing message texts shared by every layer.

/// Success message for every 2xx envelope.
pub const SUCCESS: &str = "Success";

/// The article id path segment could not be extracted.
pub const INVALID_ARTICLE_ID: &str = "Unable to assert article id";

/// The request body could not be read.
pub const UNREADABLE_BODY: &str = "Unable to read request body";

/// The request body is not valid JSON for the target type.
pub const UNMARSHAL_BODY: &str = "Unable to unmarshal request body";

/// Generic text for any relational store failure.
pub const DATA_SOURCE: &str = "DataSource error";

/// Lookup by id matched no row.
pub const ARTICLE_NOT_FOUND: &str = "No article found for specified id";

/// A cache entry exists but does not decode.
pub const MALFORMED_CACHE_ENTRY: &str = "Unable to unmarshal cached response";

/// Fallback for errors that carry no client-safe text.
pub const INTERNAL: &str = "Internal Server Error";
