//! Structured edits over a parsed [`Document`](crate::models::Document).
//!
//! Every operation checks its preconditions before touching the document,
//! so a failed call leaves it exactly as it was.

pub mod commands;
pub mod operations;

pub use commands::Cmd;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditError {
    #[error("section [{0}] already exists")]
    DuplicateSection(String),
    #[error("section [{0}] not found")]
    SectionNotFound(String),
    #[error("entry [{section}]/{key} not found")]
    EntryNotFound { section: String, key: String },
}
