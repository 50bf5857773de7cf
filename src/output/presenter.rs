use crate::config::OutputConfig;
use crate::error::{Result, StenoWordsError};
use clipboard_rs::{Clipboard, ClipboardContext};
use std::fs;
use std::path::PathBuf;

/// What to do with the result after extraction, as requested on the
/// command line.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputActions {
    pub save: bool,
    pub copy: bool,
    pub force: bool,
}

pub struct ResultPresenter {
    base_directory: PathBuf,
    file_prefix: String,
    force_overwrite: bool,
}

impl ResultPresenter {
    pub fn new(config: &OutputConfig) -> Self {
        Self {
            base_directory: config.base_directory.clone(),
            file_prefix: config.file_prefix.clone(),
            force_overwrite: false,
        }
    }

    pub fn with_force_overwrite(mut self, force: bool) -> Self {
        self.force_overwrite = force;
        self
    }

    /// Name of the saved result file for a given input name, e.g.
    /// `notes.txt` becomes `processed_notes.txt`. Inputs without a name
    /// (piped text) fall back to `processed_result.txt`.
    pub fn output_file_name(&self, original_name: Option<&str>) -> String {
        let base = match original_name {
            Some(name) => sanitize_file_name(name),
            None => "result.txt".to_string(),
        };
        format!("{}{}", self.file_prefix, base)
    }

    pub fn save(&self, result: &str, original_name: Option<&str>) -> Result<PathBuf> {
        if !self.base_directory.exists() {
            fs::create_dir_all(&self.base_directory).map_err(StenoWordsError::Io)?;
        }

        let destination = self.base_directory.join(self.output_file_name(original_name));

        if destination.exists() && !self.force_overwrite {
            return Err(StenoWordsError::OutputFileExists {
                path: destination.display().to_string(),
            });
        }

        fs::write(&destination, result).map_err(StenoWordsError::Io)?;

        Ok(destination)
    }

    pub fn copy_to_clipboard(&self, result: &str) -> Result<()> {
        let ctx =
            ClipboardContext::new().map_err(|e| StenoWordsError::ClipboardUnavailable {
                message: e.to_string(),
            })?;

        ctx.set_text(result.to_string())
            .map_err(|e| StenoWordsError::ClipboardUnavailable {
                message: e.to_string(),
            })?;

        Ok(())
    }
}

pub fn sanitize_file_name(name: &str) -> String {
    let mut sanitized = String::new();

    for ch in name.chars() {
        match ch {
            // Replace invalid filesystem characters
            '<' | '>' | ':' | '"' | '|' | '?' | '*' | '/' | '\\' => sanitized.push('_'),
            // Keep valid characters
            c if c.is_alphanumeric() || c == '-' || c == '.' || c == '_' => sanitized.push(c),
            // Replace other characters with underscore
            _ => sanitized.push('_'),
        }
    }

    // Ensure it doesn't start or end with dots, spaces, or underscores
    let sanitized = sanitized.trim_matches(|c| c == '.' || c == ' ' || c == '_');

    // Ensure it's not empty and not too long
    if sanitized.is_empty() {
        "result.txt".to_string()
    } else if sanitized.chars().count() > 100 {
        sanitized.chars().take(100).collect()
    } else {
        sanitized.to_string()
    }
}
