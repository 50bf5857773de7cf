use crate::config::InputConfig;
use std::path::Path;

pub struct FileFilter {
    text_extensions: Vec<String>,
    max_file_size: u64,
}

impl FileFilter {
    pub fn new(config: &InputConfig) -> Self {
        Self {
            text_extensions: config
                .extensions
                .iter()
                .map(|ext| ext.to_lowercase())
                .collect(),
            max_file_size: config.max_file_size,
        }
    }

    pub fn is_text_file(&self, path: &Path) -> bool {
        match path.extension().and_then(|s| s.to_str()) {
            Some(extension) => {
                let ext_lower = extension.to_lowercase();
                self.text_extensions.contains(&ext_lower)
            }
            // Extensionless files have no type signal to accept them by
            None => false,
        }
    }

    pub fn is_size_allowed(&self, size: u64) -> bool {
        size <= self.max_file_size
    }

    pub fn max_file_size(&self) -> u64 {
        self.max_file_size
    }
}

impl Default for FileFilter {
    fn default() -> Self {
        let config = InputConfig::default();
        Self::new(&config)
    }
}

/// Well-known MIME type for a file extension, recorded in reports. Extensions
/// outside the table are still readable text files; they just report nothing.
pub fn known_mime_type(extension: &str) -> Option<&'static str> {
    match extension.to_lowercase().as_str() {
        "txt" | "log" => Some("text/plain"),
        "md" => Some("text/markdown"),
        "csv" => Some("text/csv"),
        "json" => Some("application/json"),
        "html" => Some("text/html"),
        "css" => Some("text/css"),
        "js" => Some("text/javascript"),
        "xml" => Some("text/xml"),
        _ => None,
    }
}
