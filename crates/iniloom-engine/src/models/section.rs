use super::Entry;

/// An ordered group of entries under one `[name]` header.
///
/// Duplicate keys are allowed; lookups return the first match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Section {
    name: String,
    entries: Vec<Entry>,
}

impl Section {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First entry whose key equals `key`
    pub fn entry(&self, key: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.key() == key)
    }

    /// Mutable handle to the first entry whose key equals `key`
    pub fn entry_mut(&mut self, key: &str) -> Option<&mut Entry> {
        self.entries.iter_mut().find(|e| e.key() == key)
    }

    /// Append a semantic entry. Existing entries with the same key are kept.
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Entry {
        self.push(Entry::new(key, value))
    }

    /// Append a line that is preserved verbatim
    pub fn add_raw(&mut self, line: impl Into<String>) -> &mut Entry {
        self.push(Entry::raw(line))
    }

    pub(crate) fn push(&mut self, entry: Entry) -> &mut Entry {
        self.entries.push(entry);
        let last = self.entries.len() - 1;
        &mut self.entries[last]
    }
}
