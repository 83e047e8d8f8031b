//! Find and replace over element names, summaries, and descriptions.
//!
//! Matching is a pure function of [`SearchOptions`]; nothing is captured
//! from ambient state. [`preview`] reports what would change, and
//! [`replace_all`] applies the change to a [`Model`](crate::model::Model).

mod engine;
mod error;
mod matcher;
mod options;

pub use engine::{ImpactReport, preview, replace_all, scope_elements};
pub use error::SearchError;
pub use matcher::{MatchMode, Matcher};
pub use options::{SearchFields, SearchOptions, SearchScope};
