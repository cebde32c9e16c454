//! Data Transfer Objects (DTOs).

mod article_dto;

pub use article_dto::*;
