//! Find/replace tests
//!
//! Tests for:
//! - Scope selection
//! - Matching modes across fields
//! - Bulk replacement

pub mod tests_replace;
