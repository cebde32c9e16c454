//! # Folio Core
//!
//! Core types and error definitions shared by every Folio crate: the
//! article entity, pagination, the unified error type and the client-facing
//! message texts.

pub mod article;
pub mod error;
pub mod messages;
pub mod pagination;
pub mod result;
pub mod validation;

pub use article::*;
pub use error::*;
pub use pagination::*;
pub use result::*;
pub use validation::*;
