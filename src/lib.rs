pub mod cli;
pub mod config;
pub mod error;
pub mod extractor;
pub mod input;
pub mod output;
pub mod ui;

// Public API re-exports
pub use cli::{Cli, OutputFormat};
pub use config::{CliOverrides, Config, InputConfig, OutputConfig};
pub use error::{Result, StenoWordsError, UserFriendlyError};

// Core functionality re-exports
pub use extractor::{extract, extract_entries, Extraction, ExtractionStats};
pub use input::{AcquiredText, FileFilter, SourceKind, TextReader, TextSource};
pub use output::{OutputActions, ProcessingReport, ResultPresenter, SourceInfo};
pub use ui::{OutputFormatter, OutputMode, ProgressManager};

use chrono::Utc;
use std::path::Path;
use std::time::Instant;

/// Main library interface: wires input acquisition, extraction, and
/// presentation into one pipeline run.
pub struct StenoWords {
    config: Config,
    output_formatter: OutputFormatter,
    progress_manager: ProgressManager,
}

impl StenoWords {
    /// Create a new StenoWords instance with the provided configuration
    pub fn new(config: Config, output_mode: OutputMode, verbose: u8, quiet: bool) -> Self {
        let output_formatter = OutputFormatter::new(output_mode, verbose, quiet);
        let progress_manager = ProgressManager::new(!quiet);

        Self {
            config,
            output_formatter,
            progress_manager,
        }
    }

    /// Create StenoWords instance from CLI arguments
    pub fn from_cli(cli_args: &Cli) -> Result<Self> {
        let config = cli_args.load_config()?;

        Ok(Self::new(
            config,
            cli_args.output_mode(),
            cli_args.verbose,
            cli_args.quiet,
        ))
    }

    /// Run one acquire-extract-present pass over the given source.
    pub fn process(
        &self,
        source: &TextSource,
        actions: &OutputActions,
    ) -> Result<ProcessingReport> {
        let started = Instant::now();

        self.output_formatter
            .start_operation(processing_message(source));

        let spinner = self.progress_manager.create_spinner("Reading input");
        let acquired = match self.acquire_text(source) {
            Ok(acquired) => acquired,
            Err(error) => {
                spinner.finish_and_clear();
                self.progress_manager.clear();
                return Err(error);
            }
        };

        self.progress_manager.suspend(|| {
            self.output_formatter.debug(&format!(
                "Read {} bytes from {}",
                acquired.bytes_read,
                acquired.kind.as_str()
            ));
        });

        spinner.set_message("Extracting entries");
        let extraction = extractor::extract_entries(&acquired.text);

        ui::progress::finish_progress_with_summary(
            &spinner,
            &format!("Extracted {} entries", extraction.stats.entries_extracted),
            started.elapsed(),
        );

        self.output_formatter.success(success_message(acquired.kind));

        self.present_result(acquired, extraction, actions, started)
    }

    fn acquire_text(&self, source: &TextSource) -> Result<AcquiredText> {
        let reader = TextReader::new(&self.config.input);
        reader.acquire(source)
    }

    fn present_result(
        &self,
        acquired: AcquiredText,
        extraction: Extraction,
        actions: &OutputActions,
        started: Instant,
    ) -> Result<ProcessingReport> {
        let mut warnings = Vec::new();

        if extraction.is_empty() {
            let message = "No entries were extracted from the input";
            self.output_formatter.warning(message);
            warnings.push(message.to_string());
        }

        let result = extraction.result();
        let presenter =
            ResultPresenter::new(&self.config.output).with_force_overwrite(actions.force);

        let saved_to = if actions.save {
            let path = presenter.save(&result, acquired.file_name.as_deref())?;
            self.output_formatter.success("File saved successfully!");
            self.output_formatter
                .info(&format!("Saved to {}", path.display()));
            Some(path)
        } else {
            None
        };

        let copied_to_clipboard = if actions.copy {
            match presenter.copy_to_clipboard(&result) {
                Ok(()) => {
                    self.output_formatter.success("Content copied to clipboard!");
                    true
                }
                Err(error) => {
                    // Copy failures downgrade to a warning; the printed
                    // result stays available for manual selection
                    self.output_formatter.print_user_friendly_error(&error);
                    warnings.push(error.user_message());
                    false
                }
            }
        } else {
            false
        };

        Ok(ProcessingReport {
            source: SourceInfo::from(&acquired),
            stats: extraction.stats,
            result,
            saved_to,
            copied_to_clipboard,
            processed_at: Utc::now(),
            duration: started.elapsed(),
            warnings,
        })
    }

    /// Write a sample configuration file holding the built-in defaults.
    pub fn generate_sample_config<P: AsRef<Path>>(output_path: P) -> Result<()> {
        Config::default().save_to_file(output_path)
    }

    /// Get configuration reference
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get output formatter reference
    pub fn output_formatter(&self) -> &OutputFormatter {
        &self.output_formatter
    }

    /// Handle error with user-friendly output
    pub fn handle_error(&self, error: &StenoWordsError) {
        self.output_formatter.print_user_friendly_error(error);
    }
}

fn processing_message(source: &TextSource) -> &'static str {
    match source {
        TextSource::File(_) => "Processing file...",
        TextSource::Stdin => "Processing input...",
        TextSource::Clipboard => "Processing pasted text...",
    }
}

fn success_message(kind: SourceKind) -> &'static str {
    match kind {
        SourceKind::File => "File processed successfully!",
        SourceKind::Stdin => "Input processed successfully!",
        SourceKind::Clipboard => "Pasted text processed successfully!",
    }
}
