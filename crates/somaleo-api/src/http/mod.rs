//! HTTP/REST API layer for Somaleo.
//!
//! Axum-based API serving tutor questions, session history, and
//! curriculum metadata, with permissive CORS for browser clients.

pub mod cors;
pub mod error;
pub mod handlers;
pub mod router;
