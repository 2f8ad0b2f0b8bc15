use crate::models::{Document, Format};
use crate::parsing::DocumentBuilder;
use std::fs;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Document {
    /// Parse every line produced by `reader`, propagating read failures
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, IoError> {
        Self::from_reader_with_format(reader, Format::default())
    }

    pub fn from_reader_with_format<R: BufRead>(reader: R, format: Format) -> Result<Self, IoError> {
        let mut builder = DocumentBuilder::new(format);
        for line in reader.lines() {
            builder.push(&line?);
        }
        Ok(builder.finish())
    }

    /// Write every line to `writer` followed by the configured line ending
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<(), IoError> {
        let terminator = self.format.line_ending.as_str();
        for line in self.lines() {
            writer.write_all(line.as_bytes())?;
            writer.write_all(terminator.as_bytes())?;
        }
        writer.flush()?;
        Ok(())
    }
}

/// Parse an in-memory INI text
pub fn load_text(text: &str) -> Document {
    Document::parse_str(text)
}

/// Read and parse an INI file
pub fn read_file(path: &Path) -> Result<Document, IoError> {
    read_file_with_format(path, Format::default())
}

pub fn read_file_with_format(path: &Path, format: Format) -> Result<Document, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    let file = fs::File::open(path)?;
    let doc = Document::from_reader_with_format(BufReader::new(file), format)?;
    log::debug!("loaded {} sections from {}", doc.section_count(), path.display());
    Ok(doc)
}

/// Serialize `doc` to `path`, creating parent directories as needed
pub fn write_file(path: &Path, doc: &Document) -> Result<(), IoError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut writer = BufWriter::new(fs::File::create(path)?);
    doc.write_to(&mut writer)?;
    log::debug!("wrote {} sections to {}", doc.section_count(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{create_test_dir, create_test_file};
    use std::io::Cursor;

    #[test]
    fn test_read_file_success() {
        let dir = create_test_dir();
        let path = create_test_file(&dir, "app.ini", "; app\n[main]\nname=demo\n");

        let doc = read_file(&path).unwrap();
        assert_eq!(doc.header(), ["; app"]);
        assert_eq!(doc.section("main").unwrap().entry("name").unwrap().value(), "demo");
    }

    #[test]
    fn test_read_file_not_found() {
        let dir = create_test_dir();
        let result = read_file(&dir.path().join("missing.ini"));
        assert!(matches!(result, Err(IoError::NotFound(_))));
    }

    #[test]
    fn test_write_file_creates_parent_directories() {
        let dir = create_test_dir();
        let path = dir.path().join("nested/deeper/out.ini");
        let doc = load_text("[a]\nk=v\n");

        write_file(&path, &doc).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "[a]\nk=v\n");
    }

    #[test]
    fn test_write_file_overwrites_existing() {
        let dir = create_test_dir();
        let path = create_test_file(&dir, "existing.ini", "[old]\n");

        let mut doc = read_file(&path).unwrap();
        doc.add_section("new").unwrap();
        write_file(&path, &doc).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "[old]\n[new]\n");
    }

    #[test]
    fn test_from_reader_accepts_crlf() {
        let doc = Document::from_reader(Cursor::new("[a]\r\nk=v\r\n")).unwrap();
        assert_eq!(doc.to_text(), "[a]\nk=v\n");
    }

    #[test]
    fn test_from_reader_propagates_invalid_utf8() {
        let result = Document::from_reader(Cursor::new(vec![b'[', 0xFF, b']', b'\n']));
        assert!(matches!(result, Err(IoError::Io(_))));
    }

    #[test]
    fn test_from_reader_stops_at_first_failing_line() {
        struct FailingSource {
            served: bool,
        }

        impl std::io::Read for FailingSource {
            fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
                Err(std::io::Error::other("device gone"))
            }
        }

        impl BufRead for FailingSource {
            fn fill_buf(&mut self) -> std::io::Result<&[u8]> {
                if self.served {
                    Err(std::io::Error::other("device gone"))
                } else {
                    Ok(b"[a]\nk=v\n")
                }
            }

            fn consume(&mut self, _amt: usize) {
                self.served = true;
            }
        }

        let result = Document::from_reader(FailingSource { served: false });
        let err = result.unwrap_err();
        assert!(matches!(err, IoError::Io(_)));
        assert!(err.to_string().contains("device gone"));
    }

    #[test]
    fn test_write_to_propagates_sink_failure() {
        struct FailingSink;

        impl Write for FailingSink {
            fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::other("disk full"))
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let doc = load_text("[a]\n");
        let result = doc.write_to(&mut FailingSink);
        assert!(result.unwrap_err().to_string().contains("disk full"));
    }
}
