//! Tutor request flow: history bookkeeping around agent calls.

pub mod service;
