use clap::Parser;
use std::process;
use stenowords::{
    Cli, OutputFormatter, OutputMode, StenoWords, StenoWordsError, UserFriendlyError,
};

fn main() {
    let exit_code = run();
    process::exit(exit_code);
}

fn run() -> i32 {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Handle special commands first
    if cli.generate_config {
        return handle_generate_config(&cli);
    }

    // Create StenoWords instance
    let app = match StenoWords::from_cli(&cli) {
        Ok(app) => app,
        Err(e) => {
            print_startup_error(&e);
            return 1;
        }
    };

    let source = match cli.text_source() {
        Ok(source) => source,
        Err(e) => {
            app.handle_error(&e);
            return exit_code_for(&e);
        }
    };

    // Execute main processing workflow
    match app.process(&source, &cli.output_actions()) {
        Ok(report) => {
            // Display final report based on output format
            app.output_formatter().print_processing_report(&report);

            // Return appropriate exit code
            if report.has_warnings() {
                2 // Success with warnings
            } else {
                0 // Success
            }
        }
        Err(e) => {
            app.handle_error(&e);
            exit_code_for(&e)
        }
    }
}

// Map error types to appropriate exit codes
fn exit_code_for(error: &StenoWordsError) -> i32 {
    match error {
        StenoWordsError::NoInput => 3,
        StenoWordsError::InvalidFileType { .. } => 4,
        StenoWordsError::Io(_) => 5,
        StenoWordsError::FileTooLarge { .. } => 6,
        StenoWordsError::ClipboardUnavailable { .. } => 7,
        StenoWordsError::OutputFileExists { .. } => 8,
        StenoWordsError::InvalidPath { .. } => 9,
        _ => 1, // General error
    }
}

fn handle_generate_config(cli: &Cli) -> i32 {
    let config_path = cli
        .config
        .as_ref()
        .map(|p| p.to_string_lossy().to_string())
        .unwrap_or_else(|| "stenowords.toml".to_string());

    match StenoWords::generate_sample_config(&config_path) {
        Ok(()) => {
            println!("Generated sample configuration file: {}", config_path);
            println!("\nTo use this configuration:");
            println!("  stenowords <input-file> --config {}", config_path);
            println!("\nEdit the file to customize settings for your needs.");
            0
        }
        Err(e) => {
            eprintln!("Failed to generate configuration file: {}", e.user_message());
            if let Some(suggestion) = e.suggestion() {
                eprintln!("Suggestion: {}", suggestion);
            }
            1
        }
    }
}

fn print_startup_error(error: &StenoWordsError) {
    // Create a basic formatter for startup errors
    let formatter = OutputFormatter::new(OutputMode::Human, 0, false);
    formatter.print_user_friendly_error(error);
}
