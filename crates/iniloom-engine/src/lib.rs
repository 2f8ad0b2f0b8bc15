pub mod editing;
pub mod io;
pub mod models;
pub mod parsing;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use editing::{Cmd, EditError};
pub use io::{IoError, load_text, read_file, write_file};
pub use models::{Document, Entry, Format, LineEnding, Section};
pub use parsing::{is_section_header, is_semantic_line, parse_document, parse_section_name};

/// Any failure raised while loading, editing or saving a document
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Edit(#[from] EditError),
    #[error(transparent)]
    Io(#[from] IoError),
}
