//! Custom Axum extractors.

mod article_id;
mod pagination;
mod validated;

pub use article_id::*;
pub use pagination::*;
pub use validated::*;
