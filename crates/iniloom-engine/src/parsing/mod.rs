pub mod builder;
pub mod classify;

pub use builder::DocumentBuilder;
pub use classify::{
    IniLineClassifier, LineClass, is_section_header, is_semantic_line, parse_section_name,
};

use crate::models::{Document, Format};

/// Parse a sequence of lines into a document.
///
/// Parsing never fails: anything that is neither a header nor a `key=value`
/// pair is preserved as a raw line.
pub fn parse_document<I, S>(lines: I, format: Format) -> Document
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut builder = DocumentBuilder::new(format);
    for line in lines {
        builder.push(line.as_ref());
    }
    builder.finish()
}

impl Document {
    /// Parse in-memory text. Both `\n` and `\r\n` terminate lines.
    pub fn parse_str(text: &str) -> Self {
        Self::parse_str_with_format(text, Format::default())
    }

    pub fn parse_str_with_format(text: &str, format: Format) -> Self {
        parse_document(text.lines(), format)
    }
}
