//! Find/replace options.

use crate::model::{Attribute, ElementId};

/// Which text attributes are searched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchFields {
    pub name: bool,
    pub summary: bool,
    pub description: bool,
}

impl Default for SearchFields {
    fn default() -> Self {
        Self {
            name: true,
            summary: false,
            description: false,
        }
    }
}

impl SearchFields {
    /// Search every attribute.
    pub fn all() -> Self {
        Self {
            name: true,
            summary: true,
            description: true,
        }
    }

    pub fn contains(&self, attribute: Attribute) -> bool {
        match attribute {
            Attribute::Name => self.name,
            Attribute::Summary => self.summary,
            Attribute::Description => self.description,
        }
    }

    /// Enabled attributes, in name/summary/description order.
    pub fn enabled(self) -> impl Iterator<Item = Attribute> {
        Attribute::ALL.into_iter().filter(move |a| self.contains(*a))
    }
}

/// The elements a search looks at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchScope {
    /// Everything contained by the given root, the root included.
    WholeModel(ElementId),
    /// Everything contained by each selected element, selections included.
    Selection(Vec<ElementId>),
}

/// Options for one find/replace run.
#[derive(Debug, Clone)]
pub struct SearchOptions {
    pub find: String,
    pub replace: String,
    pub case_sensitive: bool,
    /// `*` and `?` act as wildcards and the pattern must match the whole value.
    pub wildcards: bool,
    /// Match whole space-separated words of the pattern as a sequence.
    pub whole_expression: bool,
    pub fields: SearchFields,
    pub scope: SearchScope,
}

impl SearchOptions {
    /// Case-insensitive literal search of names within `scope`.
    pub fn new(find: impl Into<String>, scope: SearchScope) -> Self {
        Self {
            find: find.into(),
            replace: String::new(),
            case_sensitive: false,
            wildcards: false,
            whole_expression: false,
            fields: SearchFields::default(),
            scope,
        }
    }

    pub fn with_replace(mut self, replace: impl Into<String>) -> Self {
        self.replace = replace.into();
        self
    }

    pub fn case_sensitive(mut self, value: bool) -> Self {
        self.case_sensitive = value;
        self
    }

    pub fn wildcards(mut self, value: bool) -> Self {
        self.wildcards = value;
        self
    }

    pub fn whole_expression(mut self, value: bool) -> Self {
        self.whole_expression = value;
        self
    }

    pub fn with_fields(mut self, fields: SearchFields) -> Self {
        self.fields = fields;
        self
    }
}
