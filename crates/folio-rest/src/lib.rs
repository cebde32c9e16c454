//! # Folio REST
//!
//! REST API layer using Axum: the article endpoints, health checks and the
//! read-path response cache.

pub mod controllers;
pub mod extractors;
pub mod middleware;
pub mod responses;
pub mod router;
pub mod state;

pub use router::*;
pub use state::*;
