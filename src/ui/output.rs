use crate::error::{StenoWordsError, UserFriendlyError};
use crate::extractor::ExtractionStats;
use crate::output::ProcessingReport;
use console::{style, Emoji, Term};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputMode {
    Human,
    Json,
    Plain,
}

/// Message severity, carrying the symbols and styling each level renders
/// with in human mode and the label it gets elsewhere.
#[derive(Debug, Clone, Copy)]
enum Level {
    Success,
    Error,
    Warning,
    Info,
}

impl Level {
    fn emoji(self) -> Emoji<'static, 'static> {
        match self {
            Level::Success => Emoji("✅ ", "✓ "),
            Level::Error => Emoji("❌ ", "✗ "),
            Level::Warning => Emoji("⚠️  ", "! "),
            Level::Info => Emoji("ℹ️  ", "i "),
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            Level::Success => "✓",
            Level::Error => "✗",
            Level::Warning => "!",
            Level::Info => "i",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Level::Success => "success",
            Level::Error => "error",
            Level::Warning => "warning",
            Level::Info => "info",
        }
    }

    fn paint(self, message: &str) -> console::StyledObject<&str> {
        match self {
            Level::Success => style(message).green().bold(),
            Level::Error => style(message).red().bold(),
            Level::Warning => style(message).yellow().bold(),
            Level::Info => style(message).cyan(),
        }
    }

    fn to_stderr(self) -> bool {
        matches!(self, Level::Error)
    }
}

pub struct OutputFormatter {
    mode: OutputMode,
    use_colors: bool,
    verbose_level: u8,
    quiet: bool,
}

impl OutputFormatter {
    pub fn new(mode: OutputMode, verbose: u8, quiet: bool) -> Self {
        let use_colors =
            mode == OutputMode::Human && !quiet && Term::stdout().features().colors_supported();

        Self {
            mode,
            use_colors,
            verbose_level: if quiet { 0 } else { verbose },
            quiet,
        }
    }

    pub fn success(&self, message: &str) {
        self.emit(Level::Success, 0, message);
    }

    // Errors bypass verbosity gating; even --quiet runs report failures
    pub fn error(&self, message: &str) {
        self.render(Level::Error, message);
    }

    pub fn warning(&self, message: &str) {
        self.emit(Level::Warning, 1, message);
    }

    pub fn info(&self, message: &str) {
        self.emit(Level::Info, 1, message);
    }

    pub fn debug(&self, message: &str) {
        if !self.visible(2) {
            return;
        }
        match self.mode {
            OutputMode::Human => {
                if self.use_colors {
                    println!("  {}", style(message).dim());
                } else {
                    println!("  DEBUG: {}", message);
                }
            }
            OutputMode::Json => self.json_status("debug", message),
            OutputMode::Plain => println!("DEBUG: {}", message),
        }
    }

    pub fn start_operation(&self, operation: &str) {
        if !self.visible(0) {
            return;
        }
        match self.mode {
            OutputMode::Human => {
                if self.use_colors {
                    println!("{}{}", Emoji("🚀 ", "> "), style(operation).bold());
                } else {
                    println!("> {}", operation);
                }
            }
            OutputMode::Json => self.json_status("operation_start", operation),
            OutputMode::Plain => println!("STARTING: {}", operation),
        }
    }

    pub fn print_user_friendly_error(&self, error: &StenoWordsError) {
        self.error(&error.user_message());

        let Some(suggestion) = error.suggestion() else {
            return;
        };
        match self.mode {
            OutputMode::Human => {
                eprintln!();
                if self.use_colors {
                    eprintln!(
                        "{}{}",
                        Level::Info.emoji(),
                        style(&format!("Suggestion: {}", suggestion)).cyan()
                    );
                } else {
                    eprintln!("Suggestion: {}", suggestion);
                }
            }
            OutputMode::Json => self.json_line(&serde_json::json!({
                "type": "suggestion",
                "message": suggestion,
            })),
            OutputMode::Plain => eprintln!("SUGGESTION: {}", suggestion),
        }
    }

    // Final report rendering. The result string itself always reaches
    // stdout so it stays selectable and pipeable.
    pub fn print_processing_report(&self, report: &ProcessingReport) {
        match self.mode {
            OutputMode::Human => self.print_human_report(report),
            OutputMode::Json => {
                let rendered =
                    serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string());
                println!("{}", rendered);
            }
            OutputMode::Plain => self.print_plain_report(report),
        }
    }

    fn visible(&self, min_verbosity: u8) -> bool {
        !self.quiet && self.verbose_level >= min_verbosity
    }

    fn emit(&self, level: Level, min_verbosity: u8, message: &str) {
        if self.visible(min_verbosity) {
            self.render(level, message);
        }
    }

    fn render(&self, level: Level, message: &str) {
        let line = match self.mode {
            OutputMode::Human => {
                if self.use_colors {
                    format!("{}{}", level.emoji(), level.paint(message))
                } else {
                    format!("{} {}", level.symbol(), message)
                }
            }
            OutputMode::Json => {
                self.json_status(level.label(), message);
                return;
            }
            OutputMode::Plain => {
                format!("{}: {}", level.label().to_ascii_uppercase(), message)
            }
        };

        if level.to_stderr() {
            eprintln!("{}", line);
        } else {
            println!("{}", line);
        }
    }

    fn json_status(&self, level: &str, message: &str) {
        self.json_line(&serde_json::json!({
            "type": "message",
            "level": level,
            "message": message,
            "timestamp": chrono::Utc::now().to_rfc3339(),
        }));
    }

    fn json_line(&self, value: &serde_json::Value) {
        println!(
            "{}",
            serde_json::to_string(value).unwrap_or_else(|_| "{}".to_string())
        );
    }

    fn print_human_report(&self, report: &ProcessingReport) {
        if self.quiet {
            println!("{}", report.result);
            return;
        }

        println!();
        if self.use_colors {
            println!(
                "{}{}",
                Emoji("✨ ", "* "),
                style("Extraction Result").bold().cyan()
            );
        } else {
            println!("=== Extraction Result ===");
        }
        println!();
        println!("{}", report.result);
        println!();
        self.rule();

        let source = match &report.source.file_name {
            Some(name) => format!(
                "{} ({}, {})",
                name,
                report.source.kind.as_str(),
                format_bytes(report.source.bytes_read)
            ),
            None => format!(
                "{} ({})",
                report.source.kind.as_str(),
                format_bytes(report.source.bytes_read)
            ),
        };
        println!("  Source:            {}", source);
        println!(
            "  Entries extracted: {}",
            self.accent(report.stats.entries_extracted.to_string())
        );
        println!("  Lines skipped:     {}", skipped_display(&report.stats));
        println!(
            "  Duration:          {}",
            self.accent(format_duration(report.duration))
        );

        if let Some(ref path) = report.saved_to {
            println!("  Saved to:          {}", path.display());
        }
        if report.copied_to_clipboard {
            println!("  Copied:            to clipboard");
        }

        if !report.warnings.is_empty() {
            println!();
            println!("  Warnings:");
            for warning in &report.warnings {
                println!("    - {}", warning);
            }
        }

        self.rule();
    }

    fn print_plain_report(&self, report: &ProcessingReport) {
        println!("{}", report.result);

        if self.quiet {
            return;
        }

        println!("ENTRIES: {}", report.stats.entries_extracted);
        println!("SKIPPED: {}", report.stats.lines_skipped());
        println!("DURATION: {:?}", report.duration);
        if let Some(ref path) = report.saved_to {
            println!("SAVED: {}", path.display());
        }
        if report.copied_to_clipboard {
            println!("COPIED: clipboard");
        }
        for warning in &report.warnings {
            println!("WARNING: {}", warning);
        }
    }

    fn rule(&self) {
        if self.use_colors {
            println!("{}", style("─".repeat(60)).dim());
        } else {
            println!("{}", "-".repeat(60));
        }
    }

    fn accent(&self, text: String) -> String {
        if self.use_colors {
            style(text).cyan().bold().to_string()
        } else {
            text
        }
    }
}

fn skipped_display(stats: &ExtractionStats) -> String {
    let total = stats.lines_skipped();
    if total == 0 {
        "0".to_string()
    } else {
        format!(
            "{} ({} blank, {} without '|', {} emptied)",
            total, stats.blank_lines, stats.lines_without_pipe, stats.entries_dropped
        )
    }
}

fn format_bytes(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    let size = bytes as f64;

    if size < KB {
        format!("{} B", bytes)
    } else if size < KB * KB {
        format!("{:.1} KB", size / KB)
    } else if size < KB * KB * KB {
        format!("{:.1} MB", size / (KB * KB))
    } else {
        format!("{:.1} GB", size / (KB * KB * KB))
    }
}

fn format_duration(duration: Duration) -> String {
    match duration.as_secs() {
        0 => format!("{}ms", duration.as_millis()),
        s if s < 60 => format!("{}s", s),
        s => format!("{}m {}s", s / 60, s % 60),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visibility_thresholds() {
        let formatter = OutputFormatter::new(OutputMode::Plain, 1, false);
        assert!(formatter.visible(0));
        assert!(formatter.visible(1));
        assert!(!formatter.visible(2));
    }

    #[test]
    fn test_quiet_suppresses_every_level() {
        let formatter = OutputFormatter::new(OutputMode::Human, 2, true);
        assert_eq!(formatter.verbose_level, 0);
        assert!(formatter.quiet);
        assert!(!formatter.visible(0));
    }

    #[test]
    fn test_byte_rendering() {
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(1024), "1.0 KB");
        assert_eq!(format_bytes(1536), "1.5 KB");
        assert_eq!(format_bytes(1048576), "1.0 MB");
        assert_eq!(format_bytes(1073741824), "1.0 GB");
    }

    #[test]
    fn test_duration_rendering() {
        assert_eq!(format_duration(Duration::from_millis(0)), "0ms");
        assert_eq!(format_duration(Duration::from_millis(500)), "500ms");
        assert_eq!(format_duration(Duration::from_secs(30)), "30s");
        assert_eq!(format_duration(Duration::from_secs(90)), "1m 30s");
        assert_eq!(format_duration(Duration::from_secs(3661)), "61m 1s");
    }

    #[test]
    fn test_skipped_line_breakdown() {
        let mut stats = ExtractionStats::default();
        assert_eq!(skipped_display(&stats), "0");

        stats.blank_lines = 1;
        stats.lines_without_pipe = 2;
        stats.entries_dropped = 1;
        assert_eq!(
            skipped_display(&stats),
            "4 (1 blank, 2 without '|', 1 emptied)"
        );
    }
}
