pub mod document;
pub mod entry;
pub mod format;
pub mod section;

pub use document::Document;
pub use entry::Entry;
pub use format::{Format, LineEnding};
pub use section::Section;
