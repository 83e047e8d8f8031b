//! Ambient parameters passed through to queries.

use indexmap::IndexMap;
use smol_str::SmolStr;

/// Key of the "include generated elements" flag.
pub const INCLUDE_GENERATED: &str = "includeGenerated";

/// A single context parameter value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContextValue {
    Bool(bool),
    Int(i64),
    Text(SmolStr),
}

impl From<bool> for ContextValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for ContextValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<&str> for ContextValue {
    fn from(v: &str) -> Self {
        Self::Text(v.into())
    }
}

/// Opaque bag of parameters. Queries borrow it for one call and keep nothing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryContext {
    params: IndexMap<SmolStr, ContextValue>,
}

impl QueryContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a parameter, replacing any previous value.
    pub fn with(mut self, key: impl Into<SmolStr>, value: impl Into<ContextValue>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&ContextValue> {
        self.params.get(key)
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        match self.params.get(key)? {
            ContextValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Whether generated elements should be part of results. Defaults to `false`.
    pub fn include_generated(&self) -> bool {
        self.get_bool(INCLUDE_GENERATED).unwrap_or(false)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ContextValue)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v))
    }
}
