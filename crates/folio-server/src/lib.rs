//! # Folio Server
//!
//! Process bootstrap: configuration, logging, explicit wiring of the
//! article stack and the HTTP server lifecycle.

pub mod app;
pub mod startup;
pub mod telemetry;

pub use app::*;
