use std::borrow::Cow;
use std::fmt;

/// A single line belonging to a section.
///
/// Semantic entries are `key=value` pairs. Everything else found in a
/// section body (comments, blank lines, lines without `=`) is kept as a raw
/// entry whose key is the whole original line and whose value is empty, so
/// writing it back reproduces the input verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    key: String,
    value: String,
    semantic: bool,
}

impl Entry {
    /// Create a semantic `key=value` entry
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            semantic: true,
        }
    }

    /// Create a non-semantic entry preserving `line` exactly
    pub fn raw(line: impl Into<String>) -> Self {
        Self {
            key: line.into(),
            value: String::new(),
            semantic: false,
        }
    }

    /// Split a semantic line at its first `=`.
    ///
    /// Returns `None` when the line has no `=` at all.
    pub fn split(line: &str) -> Option<Self> {
        line.split_once('=').map(|(key, value)| Self::new(key, value))
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_semantic(&self) -> bool {
        self.semantic
    }

    /// Replace the value. Overwriting always makes the entry semantic.
    pub fn overwrite(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.semantic = true;
    }

    /// Append `value` to the existing value, joined by `separator`.
    ///
    /// An empty existing value is replaced outright, so no leading
    /// separator is ever produced.
    pub fn append(&mut self, value: &str, separator: &str) {
        if self.value.is_empty() {
            self.value = value.to_string();
        } else {
            self.value.push_str(separator);
            self.value.push_str(value);
        }
        self.semantic = true;
    }

    /// Whether any `separator`-delimited piece of the value equals `value`
    /// once spaces are removed from the piece.
    pub fn has_value(&self, value: &str, separator: &str) -> bool {
        self.value
            .split(separator)
            .any(|piece| piece.chars().filter(|&c| c != ' ').eq(value.chars()))
    }

    /// Reconstruct the source line for this entry (without terminator)
    pub fn line(&self) -> Cow<'_, str> {
        if self.semantic {
            Cow::Owned(format!("{}={}", self.key, self.value))
        } else {
            Cow::Borrowed(&self.key)
        }
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.line())
    }
}
