use crate::error::{Result, StenoWordsError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const DEFAULT_MAX_FILE_SIZE: u64 = 50 * 1024 * 1024;
const DEFAULT_FILE_PREFIX: &str = "processed_";

/// Extensions accepted when no --formats override is given.
const DEFAULT_EXTENSIONS: &[&str] = &[
    "txt", "md", "csv", "json", "log", "xml", "html", "css", "js", "py", "java", "cpp", "c",
    "php",
];

/// File names tried in order when no --config path is given.
const CONFIG_FILE_CANDIDATES: &[&str] = &[
    "stenowords.toml",
    "stenowords.config.toml",
    ".stenowords.toml",
];

/// Runtime settings, read from a TOML file and merged with CLI overrides.
/// Every field is required in the file; a partial file is an error.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    pub input: InputConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InputConfig {
    pub extensions: Vec<String>,
    pub max_file_size: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    pub base_directory: PathBuf,
    pub file_prefix: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            extensions: DEFAULT_EXTENSIONS.iter().map(|ext| ext.to_string()).collect(),
            max_file_size: DEFAULT_MAX_FILE_SIZE,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            base_directory: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            file_prefix: DEFAULT_FILE_PREFIX.to_string(),
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(config_error(format!(
                "configuration file not found: {}",
                path.display()
            )));
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|e| config_error(format!("could not read {}: {}", path.display(), e)))?;

        toml::from_str(&raw)
            .map_err(|e| config_error(format!("could not parse {}: {}", path.display(), e)))
    }

    /// Load an explicit path, or try the default locations and fall back
    /// to built-in defaults when none exists.
    pub fn load_with_defaults<P: AsRef<Path>>(config_path: Option<P>) -> Result<Self> {
        if let Some(path) = config_path {
            return Self::load_from_file(path);
        }

        match CONFIG_FILE_CANDIDATES
            .iter()
            .copied()
            .find(|name| Path::new(name).is_file())
        {
            Some(found) => Self::load_from_file(found),
            None => Ok(Self::default()),
        }
    }

    pub fn merge_with_cli_args(&mut self, cli_args: &CliOverrides) {
        if let Some(ref formats) = cli_args.formats {
            self.input.extensions = parse_format_list(formats);
        }

        if let Some(max_size) = cli_args.max_file_size {
            self.input.max_file_size = max_size;
        }

        if let Some(ref output_dir) = cli_args.output_dir {
            self.output.base_directory = output_dir.clone();
        }
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let rendered = toml::to_string_pretty(self)
            .map_err(|e| config_error(format!("could not serialize configuration: {}", e)))?;

        std::fs::write(path.as_ref(), rendered)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.input.extensions.is_empty() {
            return Err(config_error("no file extensions are configured"));
        }

        if self.input.max_file_size == 0 {
            return Err(config_error("max_file_size must be greater than zero"));
        }

        if self.output.file_prefix.contains(['/', '\\']) {
            return Err(config_error(
                "file_prefix must not contain path separators",
            ));
        }

        // An empty parent means a bare relative path like "." and is fine.
        if let Some(parent) = self.output.base_directory.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                return Err(config_error(format!(
                    "parent of the output directory does not exist: {}",
                    parent.display()
                )));
            }
        }

        Ok(())
    }
}

/// Comma-separated extension list from the CLI, normalized to bare
/// lowercase extensions ("  .TXT, tsv" becomes ["txt", "tsv"]).
fn parse_format_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|part| part.trim().trim_start_matches('.').to_lowercase())
        .filter(|ext| !ext.is_empty())
        .collect()
}

fn config_error(message: impl Into<String>) -> StenoWordsError {
    StenoWordsError::Config {
        message: message.into(),
    }
}

#[derive(Debug, Default)]
pub struct CliOverrides {
    pub formats: Option<String>,
    pub max_file_size: Option<u64>,
    pub output_dir: Option<PathBuf>,
}

impl CliOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_formats(mut self, formats: Option<String>) -> Self {
        self.formats = formats;
        self
    }

    pub fn with_max_file_size(mut self, max_size: Option<u64>) -> Self {
        self.max_file_size = max_size;
        self
    }

    pub fn with_output_dir(mut self, output_dir: Option<PathBuf>) -> Self {
        self.output_dir = output_dir;
        self
    }
}
