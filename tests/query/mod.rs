//! Query layer tests
//!
//! Tests for:
//! - Realized physical links
//! - Inherited signals and root resolution
//! - Registry resolution, overrides, and batch execution
//! - Live reads through a shared model host

pub mod tests_inherited_signals;
