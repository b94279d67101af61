//! Delivered-history persistence abstraction.
//!
//! Defines the `HistoryStore` trait that the infrastructure layer
//! implements for per-session message records.

pub mod store;
