//! # Folio Service
//!
//! Article use cases and the storage side of the HTTP response cache.

pub mod article_service;
pub mod cache;
pub mod dto;
pub mod r#impl;

pub use article_service::*;
pub use cache::*;
pub use dto::*;
pub use r#impl::ArticleServiceImpl;
