use thiserror::Error;

#[derive(Error, Debug)]
pub enum StenoWordsError {
    #[error("IO operation failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Not a supported text file: {path}")]
    InvalidFileType { path: String },

    #[error("Clipboard unavailable: {message}")]
    ClipboardUnavailable { message: String },

    #[error("File too large: {size} bytes (max: {max_size} bytes)")]
    FileTooLarge { size: u64, max_size: u64 },

    #[error("Output file already exists: {path}")]
    OutputFileExists { path: String },

    #[error("Path validation failed: {path}")]
    InvalidPath { path: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("No input provided")]
    NoInput,
}

pub trait UserFriendlyError {
    fn user_message(&self) -> String;
    fn suggestion(&self) -> Option<String>;
}

impl UserFriendlyError for StenoWordsError {
    fn user_message(&self) -> String {
        match self {
            StenoWordsError::Io(err) => {
                format!("Reading or writing failed: {}", err)
            }
            StenoWordsError::InvalidFileType { path } => {
                format!("Not a supported text file: {}", path)
            }
            StenoWordsError::ClipboardUnavailable { message } => {
                format!("Clipboard unavailable: {}", message)
            }
            StenoWordsError::FileTooLarge { size, max_size } => {
                format!(
                    "Input file too large: {} (maximum allowed: {})",
                    format_bytes(*size),
                    format_bytes(*max_size)
                )
            }
            StenoWordsError::OutputFileExists { path } => {
                format!("Output file already exists: {}", path)
            }
            StenoWordsError::InvalidPath { path } => {
                format!("Invalid file path: {}", path)
            }
            StenoWordsError::Config { message } => {
                format!("Configuration error: {}", message)
            }
            StenoWordsError::NoInput => "No input provided".to_string(),
        }
    }

    fn suggestion(&self) -> Option<String> {
        match self {
            StenoWordsError::InvalidFileType { .. } => Some(
                "Choose a plain text file (.txt, .md, .csv, .json, ...) or extend the allow-list with --formats (e.g., --formats txt,tsv,dict).".to_string()
            ),
            StenoWordsError::ClipboardUnavailable { .. } => Some(
                "Select and copy the printed result manually, or pipe text through stdin instead of using the clipboard.".to_string()
            ),
            StenoWordsError::FileTooLarge { .. } => Some(
                "Increase the maximum file size limit with --max-size or split the input into smaller files.".to_string()
            ),
            StenoWordsError::OutputFileExists { .. } => Some(
                "Use --force to overwrite the existing file, or choose a different directory with --output.".to_string()
            ),
            StenoWordsError::Config { .. } => Some(
                "Check your configuration file syntax and ensure all required fields are present.".to_string()
            ),
            StenoWordsError::NoInput => Some(
                "Pass a file path, pipe text on stdin, or use --paste to read from the clipboard.".to_string()
            ),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, StenoWordsError>;

fn format_bytes(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB"];
    let mut size = bytes as f64;
    let mut unit_index = 0;

    while size >= 1024.0 && unit_index < UNITS.len() - 1 {
        size /= 1024.0;
        unit_index += 1;
    }

    if unit_index == 0 {
        format!("{} {}", bytes, UNITS[unit_index])
    } else {
        format!("{:.1} {}", size, UNITS[unit_index])
    }
}
