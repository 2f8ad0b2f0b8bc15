use super::EditError;
use crate::models::{Document, Entry, Section};

impl Document {
    /// Append a new empty section.
    ///
    /// Fails if a section with exactly this name already exists.
    pub fn add_section(&mut self, name: &str) -> Result<&mut Section, EditError> {
        if self.section(name).is_some() {
            return Err(EditError::DuplicateSection(name.to_string()));
        }
        log::debug!("adding section [{name}]");
        self.sections.push(Section::new(name));
        let last = self.sections.len() - 1;
        Ok(&mut self.sections[last])
    }

    /// Append a `key=value` entry to `section`. Duplicate keys are allowed.
    pub fn add_entry(&mut self, section: &str, key: &str, value: &str) -> Result<(), EditError> {
        let target = self.existing_section(section)?;
        target.add(key, value);
        log::trace!("added [{section}]/{key}");
        Ok(())
    }

    /// Overwrite the value of the first entry matching `key`
    pub fn modify_entry(&mut self, section: &str, key: &str, value: &str) -> Result<(), EditError> {
        self.existing_entry(section, key)?.overwrite(value);
        log::trace!("modified [{section}]/{key}");
        Ok(())
    }

    /// Append `value` to the first entry matching `key`, joined by the
    /// document's separator
    pub fn append_entry(&mut self, section: &str, key: &str, value: &str) -> Result<(), EditError> {
        let separator = self.format.separator.clone();
        self.existing_entry(section, key)?.append(value, &separator);
        log::trace!("appended to [{section}]/{key}");
        Ok(())
    }

    /// Whether the entry's separator-delimited value contains `value`.
    ///
    /// A missing section or key is simply `false`.
    pub fn has_value(&self, section: &str, key: &str, value: &str) -> bool {
        self.section(section)
            .and_then(|s| s.entry(key))
            .is_some_and(|entry| entry.has_value(value, &self.format.separator))
    }

    fn existing_section(&mut self, name: &str) -> Result<&mut Section, EditError> {
        self.section_mut(name)
            .ok_or_else(|| EditError::SectionNotFound(name.to_string()))
    }

    fn existing_entry(&mut self, section: &str, key: &str) -> Result<&mut Entry, EditError> {
        self.existing_section(section)?
            .entry_mut(key)
            .ok_or_else(|| EditError::EntryNotFound {
                section: section.to_string(),
                key: key.to_string(),
            })
    }
}
