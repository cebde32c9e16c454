//! HTTP middleware.

mod logging;
mod recorder;
mod response_cache;

pub use logging::logging_middleware;
pub use recorder::ResponseRecorder;
pub use response_cache::{cache_key, response_cache_middleware};
