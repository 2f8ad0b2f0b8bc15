use std::borrow::Cow;
use std::fmt;

use super::{Format, Section};

/// Root of a parsed INI source.
///
/// Lines before the first section header are kept verbatim in `header`.
/// Sections are stored in file order and exclusively own their entries, so
/// handles returned by [`Document::section_mut`] and
/// [`Section::entry_mut`](super::Section::entry_mut) edit the document in place.
///
/// ```rust
/// # use iniloom_engine::Document;
/// let mut doc = Document::parse_str("; settings\n[core]\neditor=vim\n");
///
/// doc.append_entry("core", "editor", "nano").unwrap();
///
/// assert_eq!(doc.to_text(), "; settings\n[core]\neditor=vim,nano\n");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub(crate) header: Vec<String>,
    pub(crate) sections: Vec<Section>,
    pub(crate) format: Format,
}

impl Document {
    /// Empty document with default formatting
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty document using `format` for separators and line endings
    pub fn with_format(format: Format) -> Self {
        Self {
            format,
            ..Self::default()
        }
    }

    pub fn format(&self) -> &Format {
        &self.format
    }

    pub fn set_format(&mut self, format: Format) {
        self.format = format;
    }

    /// Raw lines that appeared before the first section
    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// First section named `name`
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.name() == name)
    }

    /// Mutable handle to the first section named `name`
    pub fn section_mut(&mut self, name: &str) -> Option<&mut Section> {
        self.sections.iter_mut().find(|s| s.name() == name)
    }

    /// Every output line in order, without terminators.
    ///
    /// Header lines come first, then each section header followed by its
    /// entries.
    pub fn lines(&self) -> impl Iterator<Item = Cow<'_, str>> {
        let header = self.header.iter().map(|line| Cow::Borrowed(line.as_str()));
        let body = self.sections.iter().flat_map(|section| {
            std::iter::once(Cow::Owned(format!("[{}]", section.name())))
                .chain(section.entries().iter().map(|entry| entry.line()))
        });
        header.chain(body)
    }

    /// Serialize to a string, terminating every line with the configured
    /// line ending
    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let terminator = self.format.line_ending.as_str();
        for line in self.lines() {
            f.write_str(&line)?;
            f.write_str(terminator)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LineEnding;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_document_serializes_to_nothing() {
        let doc = Document::new();
        assert_eq!(doc.section_count(), 0);
        assert_eq!(doc.to_text(), "");
    }

    #[test]
    fn test_lines_cover_header_sections_and_entries() {
        let mut doc = Document::new();
        doc.header.push("# top".to_string());
        let mut section = Section::new("a");
        section.add("k", "v");
        section.add_raw("");
        doc.sections.push(section);

        let lines: Vec<_> = doc.lines().collect();
        assert_eq!(lines, vec!["# top", "[a]", "k=v", ""]);
    }

    #[test]
    fn test_crlf_line_ending() {
        let mut doc = Document::with_format(Format::default().with_line_ending(LineEnding::CrLf));
        let mut section = Section::new("a");
        section.add("k", "v");
        section.add_raw("; note");
        doc.sections.push(section);

        assert_eq!(doc.to_text(), "[a]\r\nk=v\r\n; note\r\n");
    }

    #[test]
    fn test_repeated_lookup_returns_same_section() {
        let doc = Document::parse_str("[a]\nk=v\n");
        let first = doc.section("a").unwrap();
        let second = doc.section("a").unwrap();
        assert!(std::ptr::eq(first, second));
        assert!(std::ptr::eq(
            first.entry("k").unwrap(),
            second.entry("k").unwrap()
        ));
    }
}
