//! Model store tests
//!
//! Tests for:
//! - Kind hierarchy
//! - Containment and reference editing
//! - The read-only view contract

pub mod tests_store;
