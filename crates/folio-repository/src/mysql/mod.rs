//! MySQL data source implementations.

mod article_data_source;

pub use article_data_source::*;
