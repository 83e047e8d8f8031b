//! A registry built once and shared across tests.

use capella::QueryRegistry;
use capella::query::capella_queries;
use once_cell::sync::Lazy;

/// The built-in catalog, frozen.
pub static CATALOG: Lazy<QueryRegistry> = Lazy::new(|| capella_queries().freeze());
