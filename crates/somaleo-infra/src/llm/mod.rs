//! Chat-completion client implementations.
//!
//! Contains concrete implementations of the [`ChatClient`] trait defined in
//! `somaleo-core`.
//!
//! [`ChatClient`]: somaleo_core::llm::client::ChatClient

pub mod openrouter;
