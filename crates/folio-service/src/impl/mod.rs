//! Article service implementations.

pub mod article_service_impl;

pub use article_service_impl::ArticleServiceImpl;
