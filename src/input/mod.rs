pub mod file_filter;
pub mod text_reader;

pub use file_filter::{known_mime_type, FileFilter};
pub use text_reader::{AcquiredText, SourceKind, TextReader, TextSource};
