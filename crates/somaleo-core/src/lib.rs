//! Business logic and port definitions for Somaleo.
//!
//! This crate defines the traits (chat-completion client, history store)
//! that the infrastructure layer implements, and the conversation logic
//! built on them. It depends only on `somaleo-types` -- never on
//! `somaleo-infra` or any HTTP crate.

pub mod agent;
pub mod curriculum;
pub mod history;
pub mod llm;
pub mod tutor;

#[cfg(test)]
pub(crate) mod testing;
