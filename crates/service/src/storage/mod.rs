//! Storage implementations for the service layer.
//!
//! State is volatile: every store lives for the process lifetime and starts empty.

pub mod collection_store;
