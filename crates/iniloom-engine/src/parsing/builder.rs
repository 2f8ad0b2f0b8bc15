use super::classify::{IniLineClassifier, LineClass};
use crate::models::{Document, Entry, Format, Section};

/// Builds a [`Document`] one line at a time.
///
/// Sections and entries are appended eagerly, so [`DocumentBuilder::finish`]
/// only hands the document over.
pub struct DocumentBuilder {
    classifier: IniLineClassifier,
    doc: Document,
}

impl DocumentBuilder {
    pub fn new(format: Format) -> Self {
        Self {
            classifier: IniLineClassifier,
            doc: Document::with_format(format),
        }
    }

    pub fn push(&mut self, line: &str) {
        match self.classifier.classify(line) {
            LineClass::SectionHeader(name) => self.doc.sections.push(Section::new(name)),
            class => match self.doc.sections.last_mut() {
                Some(section) => {
                    let entry = match class {
                        LineClass::Semantic => Entry::split(line),
                        _ => None,
                    };
                    section.push(entry.unwrap_or_else(|| Entry::raw(line)));
                }
                None => self.doc.header.push(line.to_string()),
            },
        }
    }

    pub fn finish(self) -> Document {
        log::debug!(
            "parsed {} header lines and {} sections",
            self.doc.header.len(),
            self.doc.sections.len()
        );
        self.doc
    }
}
