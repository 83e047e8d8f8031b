//! Text matching rules for find/replace.
//!
//! Mode precedence: wildcards, then whole expression, then literal.

use regex::{NoExpand, Regex, RegexBuilder};

use super::{SearchError, SearchOptions};

/// How the find text is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// `*` and `?` wildcards, anchored to the whole value.
    Wildcard,
    /// Space-separated word sequence.
    WholeExpression,
    /// Plain substring.
    Literal,
}

/// A compiled find pattern. Pure: every input is explicit.
#[derive(Debug, Clone)]
pub struct Matcher {
    mode: MatchMode,
    case_sensitive: bool,
    /// Compiled form for wildcard and literal modes.
    regex: Option<Regex>,
    /// Pattern words for whole-expression mode.
    words: Vec<String>,
    empty: bool,
}

impl Matcher {
    /// Compile `find` for the mode selected by the flags.
    ///
    /// An empty whole-expression pattern has no words and matches nothing.
    pub fn new(
        find: &str,
        case_sensitive: bool,
        wildcards: bool,
        whole_expression: bool,
    ) -> Result<Self, SearchError> {
        let mode = if wildcards {
            MatchMode::Wildcard
        } else if whole_expression {
            MatchMode::WholeExpression
        } else {
            MatchMode::Literal
        };
        let source = match mode {
            MatchMode::Wildcard => Some(format!("(?s)^{}$", wildcard_to_regex(find))),
            MatchMode::Literal => Some(regex::escape(find)),
            MatchMode::WholeExpression => None,
        };
        let regex = source
            .map(|src| {
                RegexBuilder::new(&src)
                    .case_insensitive(!case_sensitive)
                    .build()
                    .map_err(|e| SearchError::invalid_pattern(find, e))
            })
            .transpose()?;
        Ok(Self {
            mode,
            case_sensitive,
            regex,
            words: split_words(find).into_iter().map(str::to_string).collect(),
            empty: find.is_empty(),
        })
    }

    pub fn from_options(options: &SearchOptions) -> Result<Self, SearchError> {
        Self::new(
            &options.find,
            options.case_sensitive,
            options.wildcards,
            options.whole_expression,
        )
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Whether `value` matches. A missing value never matches.
    pub fn matches(&self, value: Option<&str>) -> bool {
        value.is_some_and(|v| self.is_match(v))
    }

    pub fn is_match(&self, value: &str) -> bool {
        match (&self.regex, self.mode) {
            (_, MatchMode::WholeExpression) => self.word_run_at(&split_words(value), 0).is_some(),
            (Some(regex), _) => regex.is_match(value),
            (None, _) => false,
        }
    }

    /// Rewrite `value`, inserting `replacement` literally.
    ///
    /// Wildcard mode replaces the whole value, whole-expression mode each
    /// matching word run, literal mode each occurrence. An empty literal
    /// pattern leaves the value unchanged.
    pub fn replace(&self, value: &str, replacement: &str) -> String {
        match self.mode {
            MatchMode::Wildcard => {
                if self.is_match(value) {
                    replacement.to_string()
                } else {
                    value.to_string()
                }
            }
            MatchMode::Literal => match &self.regex {
                Some(regex) if !self.empty => regex.replace_all(value, NoExpand(replacement)).into_owned(),
                _ => value.to_string(),
            },
            MatchMode::WholeExpression => self.replace_words(value, replacement),
        }
    }

    fn replace_words(&self, value: &str, replacement: &str) -> String {
        // every token is kept so unmatched spacing survives the join
        let words: Vec<&str> = value.split(' ').collect();
        let mut out: Vec<&str> = Vec::with_capacity(words.len());
        let mut i = 0;
        while i < words.len() {
            match self.word_run_at(&words, i) {
                Some(start) if start == i => {
                    out.push(replacement);
                    i += self.words.len();
                }
                _ => {
                    out.push(words[i]);
                    i += 1;
                }
            }
        }
        out.join(" ")
    }

    /// Start of the first run of pattern words at or after `from`.
    fn word_run_at(&self, words: &[&str], from: usize) -> Option<usize> {
        let n = self.words.len();
        if n == 0 || n > words.len() {
            return None;
        }
        (from..=words.len() - n).find(|&start| {
            words[start..start + n]
                .iter()
                .zip(&self.words)
                .all(|(w, p)| self.word_eq(w, p))
        })
    }

    fn word_eq(&self, a: &str, b: &str) -> bool {
        if self.case_sensitive {
            a == b
        } else {
            a.to_lowercase() == b.to_lowercase()
        }
    }
}

/// Split on single spaces, dropping trailing empty words.
fn split_words(text: &str) -> Vec<&str> {
    let mut words: Vec<&str> = text.split(' ').collect();
    while words.last().is_some_and(|w| w.is_empty()) {
        words.pop();
    }
    words
}

/// Translate `*`/`?` wildcards into a regex body. `\*`, `\?` and `\\` are
/// literal escapes.
fn wildcard_to_regex(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() + 8);
    let mut chars = pattern.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '*' => out.push_str(".*"),
            '?' => out.push('.'),
            '\\' if matches!(chars.peek(), Some('*' | '?' | '\\')) => {
                if let Some(escaped) = chars.next() {
                    out.push_str(&regex::escape(&escaped.to_string()));
                }
            }
            other => out.push_str(&regex::escape(&other.to_string())),
        }
    }
    out
}
