//! Chat-completion client abstraction.

pub mod client;
