use std::path::PathBuf;
use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "coursediff")]
#[command(version)]
#[command(about = "Turn detected course-content changes into push-notification messages")]
#[command(long_about = "coursediff reads a JSON array of course change sets, groups each course's changed files by module kind, and prints the resulting notification messages (title, body, optional link) for a push-notification channel.")]
pub struct Cli {
    /// JSON file with course changes
    #[arg(value_name = "FILE", help = "Input JSON file (defaults to stdin)")]
    pub input: Option<PathBuf>,

    /// Optional TOML configuration
    #[arg(short, long, value_name = "TOML", help = "Configuration file")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Output format
    #[arg(long, default_value = "json", help = "Output format")]
    pub output: OutputFormat,

    /// Skip courses that fail to render instead of aborting
    #[arg(long, help = "Log and skip courses with malformed entries")]
    pub skip_invalid: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// JSON array of messages for scripting
    Json,
    /// Plain text blocks
    Text,
    /// Compact single-line format
    Compact,
}

impl Cli {
    pub fn setup_logging(&self) {
        let level = if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        };

        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false)
            .init();
    }

    pub fn validate(&self) -> Result<(), String> {
        if let Some(input) = &self.input {
            if !input.is_file() {
                return Err(format!("Input file does not exist: {}", input.display()));
            }
        }

        if let Some(config) = &self.config {
            if !config.is_file() {
                return Err(format!("Config file does not exist: {}", config.display()));
            }
        }

        Ok(())
    }
}

impl Default for Cli {
    fn default() -> Self {
        Self {
            input: None,
            config: None,
            verbose: false,
            output: OutputFormat::Json,
            skip_invalid: false,
        }
    }
}
