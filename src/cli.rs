use crate::config::{CliOverrides, Config};
use crate::error::{Result, StenoWordsError};
use crate::input::TextSource;
use crate::output::OutputActions;
use crate::ui::OutputMode;
use clap::{Parser, ValueEnum};
use std::io::IsTerminal;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "stenowords")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Extract steno words from pipe-delimited suggestion files")]
#[command(
    long_about = "StenoWords reads steno|definition suggestion text from a file, a pipe, or \
                       the clipboard, keeps the text before the first pipe of every line, strips \
                       the {, } and ^ markers, and joins the cleaned words with pipes."
)]
#[command(before_help = "🚀 StenoWords - Steno Suggestion Extraction Tool")]
#[command(after_help = "EXAMPLES:\n  \
    stenowords suggestions.txt\n  \
    stenowords suggestions.txt --save --output results\n  \
    cat suggestions.txt | stenowords --copy\n  \
    stenowords --paste --save\n  \
    stenowords suggestions.txt --output-format json --quiet\n\n\
    Lines without a pipe are skipped; only the text before the first pipe is kept.")]
pub struct Cli {
    /// Input text file ("-" reads from stdin)
    pub input: Option<PathBuf>,

    /// Read input from the system clipboard instead of a file
    #[arg(long, conflicts_with = "input")]
    pub paste: bool,

    /// Copy the result to the system clipboard
    #[arg(short, long)]
    pub copy: bool,

    /// Save the result to processed_<name> in the output directory
    #[arg(short, long)]
    pub save: bool,

    /// Output directory for saved results
    #[arg(short, long)]
    pub output: Option<String>,

    /// Accepted file extensions (comma-separated)
    #[arg(
        short,
        long,
        help = "File extensions to accept (e.g., txt,md,csv,json)"
    )]
    pub formats: Option<String>,

    /// Maximum input file size
    #[arg(long, value_parser = parse_size_string, help = "Maximum input file size (e.g., 500KB, 50MB, or plain bytes)")]
    pub max_size: Option<u64>,

    /// Configuration file path
    #[arg(long, help = "Path to TOML configuration file")]
    pub config: Option<PathBuf>,

    /// Output format for results
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub output_format: OutputFormat,

    /// Verbose output level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (print only the result)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Force overwrite of an existing saved result file
    #[arg(long, help = "Overwrite an existing processed_<name> file")]
    pub force: bool,

    /// Generate sample configuration file
    #[arg(long, help = "Generate a sample configuration file")]
    pub generate_config: bool,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable colored output
    Human,
    /// JSON formatted output
    Json,
    /// Plain text output
    Plain,
}

impl Cli {
    pub fn load_config(&self) -> Result<Config> {
        let mut config = Config::load_with_defaults(self.config.as_ref())?;

        let overrides = self.create_cli_overrides();
        config.merge_with_cli_args(&overrides);
        config.validate()?;

        Ok(config)
    }

    pub fn create_cli_overrides(&self) -> CliOverrides {
        let output_dir = self.output.as_ref().map(|o| {
            if o.contains('/') || o.contains('\\') {
                PathBuf::from(o)
            } else {
                std::env::current_dir().unwrap_or_default().join(o)
            }
        });

        CliOverrides::new()
            .with_formats(self.formats.clone())
            .with_max_file_size(self.max_size)
            .with_output_dir(output_dir)
    }

    /// Resolves the three input routes. A bare invocation reads stdin when
    /// something is piped in and is a `NoInput` error on an interactive
    /// terminal.
    pub fn text_source(&self) -> Result<TextSource> {
        if self.paste {
            return Ok(TextSource::Clipboard);
        }

        match &self.input {
            Some(path) if path.as_os_str() == "-" => Ok(TextSource::Stdin),
            Some(path) => Ok(TextSource::File(path.clone())),
            None => {
                if std::io::stdin().is_terminal() {
                    Err(StenoWordsError::NoInput)
                } else {
                    Ok(TextSource::Stdin)
                }
            }
        }
    }

    pub fn output_actions(&self) -> OutputActions {
        OutputActions {
            save: self.save,
            copy: self.copy,
            force: self.force,
        }
    }

    pub fn output_mode(&self) -> OutputMode {
        match self.output_format {
            OutputFormat::Human => OutputMode::Human,
            OutputFormat::Json => OutputMode::Json,
            OutputFormat::Plain => OutputMode::Plain,
        }
    }
}

pub fn parse_size_string(s: &str) -> std::result::Result<u64, String> {
    let s = s.trim().to_lowercase();

    let (number_str, multiplier) = if s.ends_with("kb") || s.ends_with("k") {
        (s.trim_end_matches("kb").trim_end_matches("k"), 1024)
    } else if s.ends_with("mb") || s.ends_with("m") {
        (s.trim_end_matches("mb").trim_end_matches("m"), 1024 * 1024)
    } else if s.ends_with("gb") || s.ends_with("g") {
        (
            s.trim_end_matches("gb").trim_end_matches("g"),
            1024 * 1024 * 1024,
        )
    } else if s.ends_with("b") {
        (s.trim_end_matches("b"), 1)
    } else {
        (s.as_str(), 1)
    };

    let number: f64 = number_str
        .parse()
        .map_err(|_| format!("Invalid number format: {}", number_str))?;

    if number < 0.0 {
        return Err("Size cannot be negative".to_string());
    }

    Ok((number * multiplier as f64) as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_cli() -> Cli {
        Cli {
            input: None,
            paste: false,
            copy: false,
            save: false,
            output: None,
            formats: None,
            max_size: None,
            config: None,
            output_format: OutputFormat::Human,
            verbose: 0,
            quiet: false,
            force: false,
            generate_config: false,
        }
    }

    #[test]
    fn test_parse_size_string() {
        assert_eq!(parse_size_string("10").unwrap(), 10);
        assert_eq!(parse_size_string("10KB").unwrap(), 10 * 1024);
        assert_eq!(parse_size_string("5MB").unwrap(), 5 * 1024 * 1024);
        assert_eq!(parse_size_string("1GB").unwrap(), 1024 * 1024 * 1024);

        assert!(parse_size_string("invalid").is_err());
        assert!(parse_size_string("-5MB").is_err());
    }

    #[test]
    fn test_file_input_source() {
        let mut cli = test_cli();
        cli.input = Some(PathBuf::from("suggestions.txt"));

        assert_eq!(
            cli.text_source().unwrap(),
            TextSource::File(PathBuf::from("suggestions.txt"))
        );
    }

    #[test]
    fn test_dash_reads_stdin() {
        let mut cli = test_cli();
        cli.input = Some(PathBuf::from("-"));

        assert_eq!(cli.text_source().unwrap(), TextSource::Stdin);
    }

    #[test]
    fn test_paste_reads_clipboard() {
        let mut cli = test_cli();
        cli.paste = true;

        assert_eq!(cli.text_source().unwrap(), TextSource::Clipboard);
    }

    #[test]
    fn test_output_actions_mapping() {
        let mut cli = test_cli();
        cli.save = true;
        cli.force = true;

        let actions = cli.output_actions();
        assert!(actions.save);
        assert!(!actions.copy);
        assert!(actions.force);
    }

    #[test]
    fn test_overrides_pass_parsed_size_through() {
        let mut cli = test_cli();
        cli.max_size = Some(512 * 1024);

        let overrides = cli.create_cli_overrides();
        assert_eq!(overrides.max_file_size, Some(512 * 1024));
    }

    #[test]
    fn test_bare_output_name_lands_in_current_directory() {
        let mut cli = test_cli();
        cli.output = Some("results".to_string());

        let overrides = cli.create_cli_overrides();
        let dir = overrides.output_dir.unwrap();
        assert!(dir.ends_with("results"));
        assert!(dir.is_absolute());
    }

    #[test]
    fn test_output_path_with_separator_is_kept() {
        let mut cli = test_cli();
        cli.output = Some("out/results".to_string());

        let overrides = cli.create_cli_overrides();
        assert_eq!(overrides.output_dir.unwrap(), PathBuf::from("out/results"));
    }

    #[test]
    fn test_output_mode_mapping() {
        let mut cli = test_cli();
        assert_eq!(cli.output_mode(), OutputMode::Human);

        cli.output_format = OutputFormat::Json;
        assert_eq!(cli.output_mode(), OutputMode::Json);

        cli.output_format = OutputFormat::Plain;
        assert_eq!(cli.output_mode(), OutputMode::Plain);
    }
}
