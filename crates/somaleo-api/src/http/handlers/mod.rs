//! HTTP request handlers.

pub mod curriculum;
pub mod health;
pub mod tutor;
