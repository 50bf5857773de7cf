use crate::config::InputConfig;
use crate::error::{Result, StenoWordsError};
use crate::input::file_filter::{known_mime_type, FileFilter};
use clipboard_rs::{Clipboard, ClipboardContext, ContentFormat};
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::{Path, PathBuf};

/// Where the raw text comes from. The three routes converge on one
/// [`AcquiredText`] value so the rest of the pipeline never cares which
/// route produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextSource {
    File(PathBuf),
    Stdin,
    Clipboard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    File,
    Stdin,
    Clipboard,
}

impl SourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::File => "file",
            SourceKind::Stdin => "stdin",
            SourceKind::Clipboard => "clipboard",
        }
    }
}

#[derive(Debug, Clone)]
pub struct AcquiredText {
    pub text: String,
    pub file_name: Option<String>,
    pub kind: SourceKind,
    pub bytes_read: u64,
    pub mime_type: Option<&'static str>,
}

pub struct TextReader {
    filter: FileFilter,
}

impl TextReader {
    pub fn new(config: &InputConfig) -> Self {
        Self {
            filter: FileFilter::new(config),
        }
    }

    pub fn acquire(&self, source: &TextSource) -> Result<AcquiredText> {
        match source {
            TextSource::File(path) => self.read_file(path),
            TextSource::Stdin => self.read_stdin(),
            TextSource::Clipboard => self.read_clipboard(),
        }
    }

    fn read_file(&self, path: &Path) -> Result<AcquiredText> {
        // Type check happens before any data is read
        if !self.filter.is_text_file(path) {
            return Err(StenoWordsError::InvalidFileType {
                path: path.display().to_string(),
            });
        }

        let metadata = std::fs::metadata(path)?;

        if !metadata.is_file() {
            return Err(StenoWordsError::InvalidPath {
                path: path.display().to_string(),
            });
        }

        if !self.filter.is_size_allowed(metadata.len()) {
            return Err(StenoWordsError::FileTooLarge {
                size: metadata.len(),
                max_size: self.filter.max_file_size(),
            });
        }

        let bytes = std::fs::read(path)?;
        let bytes_read = bytes.len() as u64;
        let text = decode_text(&bytes);

        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned());
        let mime_type = path
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(known_mime_type);

        Ok(AcquiredText {
            text,
            file_name,
            kind: SourceKind::File,
            bytes_read,
            mime_type,
        })
    }

    fn read_stdin(&self) -> Result<AcquiredText> {
        let mut bytes = Vec::new();
        std::io::stdin().lock().read_to_end(&mut bytes)?;

        let bytes_read = bytes.len() as u64;
        let text = decode_text(&bytes);

        Ok(AcquiredText {
            text,
            file_name: None,
            kind: SourceKind::Stdin,
            bytes_read,
            mime_type: None,
        })
    }

    fn read_clipboard(&self) -> Result<AcquiredText> {
        let ctx =
            ClipboardContext::new().map_err(|e| StenoWordsError::ClipboardUnavailable {
                message: e.to_string(),
            })?;

        // A clipboard without text is not an error; it degrades to an
        // empty result downstream
        let text = if ctx.has(ContentFormat::Text) {
            ctx.get_text()
                .map_err(|e| StenoWordsError::ClipboardUnavailable {
                    message: e.to_string(),
                })?
        } else {
            String::new()
        };

        let bytes_read = text.len() as u64;

        Ok(AcquiredText {
            text,
            file_name: Some("pasted_text.txt".to_string()),
            kind: SourceKind::Clipboard,
            bytes_read,
            mime_type: Some("text/plain"),
        })
    }
}

/// Lenient UTF-8 decode: invalid sequences become replacement characters,
/// and a leading byte order mark (common in Windows-saved UTF-8) is not
/// part of the text and is dropped.
fn decode_text(bytes: &[u8]) -> String {
    let text = String::from_utf8_lossy(bytes);
    match text.strip_prefix('\u{feff}') {
        Some(stripped) => stripped.to_string(),
        None => text.into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_reader(max_file_size: u64) -> TextReader {
        let config = InputConfig {
            extensions: vec!["txt".to_string(), "md".to_string()],
            max_file_size,
        };
        TextReader::new(&config)
    }

    #[test]
    fn test_read_valid_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("suggestions.txt");
        std::fs::write(&path, "hello|world\nfoo|bar").unwrap();

        let reader = test_reader(1024);
        let acquired = reader.acquire(&TextSource::File(path)).unwrap();

        assert_eq!(acquired.text, "hello|world\nfoo|bar");
        assert_eq!(acquired.file_name.as_deref(), Some("suggestions.txt"));
        assert_eq!(acquired.kind, SourceKind::File);
        assert_eq!(acquired.bytes_read, 19);
        assert_eq!(acquired.mime_type, Some("text/plain"));
    }

    #[test]
    fn test_rejects_unsupported_extension() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("image.png");
        std::fs::write(&path, "not really an image").unwrap();

        let reader = test_reader(1024);
        let result = reader.acquire(&TextSource::File(path));

        assert!(matches!(
            result,
            Err(StenoWordsError::InvalidFileType { .. })
        ));
    }

    #[test]
    fn test_type_check_precedes_read() {
        // A nonexistent path with a rejected extension fails on type,
        // never reaching the filesystem
        let reader = test_reader(1024);
        let result = reader.acquire(&TextSource::File(PathBuf::from("/no/such/file.exe")));

        assert!(matches!(
            result,
            Err(StenoWordsError::InvalidFileType { .. })
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let reader = test_reader(1024);
        let result = reader.acquire(&TextSource::File(PathBuf::from("/no/such/file.txt")));

        assert!(matches!(result, Err(StenoWordsError::Io(_))));
    }

    #[test]
    fn test_directory_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let dir_path = temp_dir.path().join("folder.txt");
        std::fs::create_dir(&dir_path).unwrap();

        let reader = test_reader(1024);
        let result = reader.acquire(&TextSource::File(dir_path));

        assert!(matches!(result, Err(StenoWordsError::InvalidPath { .. })));
    }

    #[test]
    fn test_oversize_file_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("big.txt");
        std::fs::write(&path, "x".repeat(64)).unwrap();

        let reader = test_reader(16);
        let result = reader.acquire(&TextSource::File(path));

        assert!(matches!(
            result,
            Err(StenoWordsError::FileTooLarge { size: 64, max_size: 16 })
        ));
    }

    #[test]
    fn test_invalid_utf8_is_decoded_leniently() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("mangled.txt");
        std::fs::write(&path, [b'a', 0xff, b'|', b'x']).unwrap();

        let reader = test_reader(1024);
        let acquired = reader.acquire(&TextSource::File(path)).unwrap();

        assert_eq!(acquired.text, "a\u{fffd}|x");
        assert_eq!(acquired.bytes_read, 4);
    }

    #[test]
    fn test_leading_bom_is_dropped_on_decode() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("windows.txt");
        std::fs::write(&path, b"\xEF\xBB\xBFhello|world\n").unwrap();

        let reader = test_reader(1024);
        let acquired = reader.acquire(&TextSource::File(path)).unwrap();

        assert_eq!(acquired.text, "hello|world\n");
        // bytes_read reports raw input size, BOM included
        assert_eq!(acquired.bytes_read, 15);
    }

    #[test]
    fn test_bom_is_only_dropped_at_the_start() {
        assert_eq!(decode_text(b"\xEF\xBB\xBFa|b"), "a|b");
        assert_eq!(decode_text("a\u{feff}b|c".as_bytes()), "a\u{feff}b|c");
        assert_eq!(decode_text("\u{feff}\u{feff}x".as_bytes()), "\u{feff}x");
    }

    #[test]
    fn test_mime_type_follows_extension() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("notes.md");
        std::fs::write(&path, "a|b").unwrap();

        let reader = test_reader(1024);
        let acquired = reader.acquire(&TextSource::File(path)).unwrap();
        assert_eq!(acquired.mime_type, Some("text/markdown"));
    }

    #[test]
    fn test_allowed_extension_without_mime_mapping() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("script.py");
        std::fs::write(&path, "a|b").unwrap();

        let config = InputConfig {
            extensions: vec!["py".to_string()],
            max_file_size: 1024,
        };
        let reader = TextReader::new(&config);
        let acquired = reader.acquire(&TextSource::File(path)).unwrap();
        assert_eq!(acquired.mime_type, None);
    }

    #[test]
    fn test_source_kind_labels() {
        assert_eq!(SourceKind::File.as_str(), "file");
        assert_eq!(SourceKind::Stdin.as_str(), "stdin");
        assert_eq!(SourceKind::Clipboard.as_str(), "clipboard");
    }
}
