//! Credential lookup.
//!
//! The upstream API key is only ever read from the environment.

pub mod env;

pub use env::read_api_key;
