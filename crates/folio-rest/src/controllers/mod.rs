//! REST API controllers.

pub mod article_controller;
pub mod health_controller;
