//! Conversation agents.
//!
//! - `Agent`: one transcript plus the client that replays it upstream
//! - `AgentRegistry`: lazily created agents keyed by session id
//! - `prompt`: the curriculum-constrained system prompt

pub mod conversation;
pub mod prompt;
pub mod registry;
