//! Infrastructure layer for Somaleo.
//!
//! Contains implementations of the ports defined in `somaleo-core`: the
//! OpenRouter chat-completion client and the in-memory history store, plus
//! the environment credential reader and the TOML config loader.

pub mod config;
pub mod history;
pub mod llm;
pub mod secret;
