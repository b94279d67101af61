//! Shared domain types for Somaleo.
//!
//! This crate contains the types used across the tutor backend: the
//! model-context messages sent upstream, the delivered-history records
//! returned to clients, configuration, and the error enums.
//!
//! Zero infrastructure dependencies -- only serde, chrono, thiserror.

pub mod config;
pub mod error;
pub mod history;
pub mod llm;
