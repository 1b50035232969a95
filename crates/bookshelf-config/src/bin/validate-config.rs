//! Config validation CLI tool
//!
//! Validates a bookshelf configuration file and reports any errors.

use bookshelf_config::ConfigError;
use bookshelf_util::default_config_path;
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    let config_path = match args.get(1) {
        Some(path) => PathBuf::from(path),
        None => {
            let default_path = default_config_path();
            eprintln!("Usage: validate-config [config-file]");
            eprintln!();
            eprintln!("Validates a bookshelf configuration file.");
            eprintln!();
            eprintln!("Example:");
            eprintln!("  validate-config {}", default_path.display());
            return ExitCode::from(2);
        }
    };

    if !config_path.exists() {
        eprintln!("Error: Configuration file not found: {}", config_path.display());
        return ExitCode::from(1);
    }

    match bookshelf_config::load_config(&config_path) {
        Ok(settings) => {
            println!("✓ Configuration is valid");
            println!();
            println!("Summary:");
            println!("  Config version: {}", bookshelf_config::CURRENT_CONFIG_VERSION);
            println!("  Library file: {}", settings.library.library_path().display());
            println!("  Earliest year: {}", settings.catalog.min_year());
            println!("  Top authors shown: {}", settings.top_authors);
            println!();
            println!("Genres ({}):", settings.catalog.genres().len());
            for genre in settings.catalog.genres() {
                println!("  - {}", genre);
            }

            ExitCode::SUCCESS
        }
        Err(ConfigError::ValidationFailed { errors }) => {
            eprintln!("✗ Configuration validation failed");
            eprintln!();
            eprintln!("Validation errors ({}):", errors.len());
            for err in errors {
                eprintln!("  - {}", err);
            }
            ExitCode::from(1)
        }
        Err(e) => {
            eprintln!("✗ Configuration validation failed");
            eprintln!();
            eprintln!("{e}");
            ExitCode::from(1)
        }
    }
}
