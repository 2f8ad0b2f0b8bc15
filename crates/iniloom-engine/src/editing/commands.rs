use super::EditError;
use crate::models::Document;

/// A single structured edit, applied with [`Document::apply`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    AddSection {
        name: String,
    },
    AddEntry {
        section: String,
        key: String,
        value: String,
    },
    ModifyEntry {
        section: String,
        key: String,
        value: String,
    },
    AppendEntry {
        section: String,
        key: String,
        value: String,
    },
}

impl Document {
    /// Apply a command. Either the whole edit happens or nothing changes.
    pub fn apply(&mut self, cmd: &Cmd) -> Result<(), EditError> {
        match cmd {
            Cmd::AddSection { name } => self.add_section(name).map(|_| ()),
            Cmd::AddEntry {
                section,
                key,
                value,
            } => self.add_entry(section, key, value),
            Cmd::ModifyEntry {
                section,
                key,
                value,
            } => self.modify_entry(section, key, value),
            Cmd::AppendEntry {
                section,
                key,
                value,
            } => self.append_entry(section, key, value),
        }
    }
}
