use std::sync::OnceLock;

use regex::Regex;

/// What a single input line is, judged without any surrounding context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass {
    /// `[name]` header; carries the parsed section name
    SectionHeader(String),
    /// Body line with a `key=value` pair
    Semantic,
    /// Comment, blank or `=`-free body line kept verbatim
    Raw,
}

/// Classifies individual lines for the parse phase.
pub struct IniLineClassifier;

impl IniLineClassifier {
    pub fn classify(&self, line: &str) -> LineClass {
        if is_section_header(line) {
            // Outer whitespace of any kind is not part of the name
            LineClass::SectionHeader(parse_section_name(line.trim()))
        } else if is_semantic_line(line) {
            LineClass::Semantic
        } else {
            LineClass::Raw
        }
    }
}

/// Whether `line` opens a section: optional leading whitespace, `[`, anything, `]`.
pub fn is_section_header(line: &str) -> bool {
    static SECTION_REGEX: OnceLock<Regex> = OnceLock::new();
    let section_regex =
        SECTION_REGEX.get_or_init(|| Regex::new(r"^\s*\[.*\]").expect("Invalid section regex"));
    section_regex.is_match(line)
}

/// Section name of a header line: every `[`, `]` and space is deleted.
///
/// This removes spaces anywhere in the line, not just at the edges, so
/// `" [ti tle] "` yields `"title"`.
pub fn parse_section_name(line: &str) -> String {
    line.chars()
        .filter(|c| !matches!(c, '[' | ']' | ' '))
        .collect()
}

/// Whether a body line holds a `key=value` pair.
///
/// Empty lines, lines starting with `;` or `#`, and lines without `=` are not
/// semantic.
pub fn is_semantic_line(line: &str) -> bool {
    !line.is_empty() && !line.starts_with([';', '#']) && line.contains('=')
}
