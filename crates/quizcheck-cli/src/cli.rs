//! Command-line argument parsing.

use crate::config::{Config, OutputFormat};
use clap::{ArgAction, Parser};
use quizcheck_extractor::ParseStrategy;
use std::path::PathBuf;

/// quizcheck - Check the question numbering of a quiz page.
#[derive(Debug, Parser)]
#[command(name = "quizcheck")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// HTML document containing the quiz array
    #[arg(default_value = "index.html")]
    pub path: PathBuf,

    /// Name of the `const` array declaration
    #[arg(short, long, env = "QUIZCHECK_ARRAY")]
    pub array: Option<String>,

    /// Quoted key holding each entry's number
    #[arg(long, env = "QUIZCHECK_FIELD")]
    pub field: Option<String>,

    /// How entries are read from the array
    #[arg(short, long, value_enum)]
    pub strategy: Option<StrategyArg>,

    /// Number of entries the array is expected to hold
    #[arg(short, long)]
    pub expect: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Plain report lines (default)
    Text,
    /// Table format
    Table,
    /// JSON format
    Json,
}

/// Parse strategy options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum StrategyArg {
    /// Scan the array text for labeled fields
    Scan,
    /// Parse the array as JSON, scanning when it is not valid JSON
    Structured,
}

impl Cli {
    /// Apply command-line overrides on top of a loaded configuration.
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(array) = &self.array {
            config.extractor.array_name = array.clone();
        }
        if let Some(field) = &self.field {
            config.extractor.field_name = field.clone();
        }
        if let Some(strategy) = self.strategy {
            config.extractor.strategy = strategy.into();
        }
        if let Some(format) = self.format {
            config.settings.format = format.into();
        }
        if self.no_color {
            config.settings.color = false;
        }
    }

    /// Default log filter directive for the requested verbosity.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

impl From<CliFormat> for OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Text => OutputFormat::Text,
            CliFormat::Table => OutputFormat::Table,
            CliFormat::Json => OutputFormat::Json,
        }
    }
}

impl From<StrategyArg> for ParseStrategy {
    fn from(strategy: StrategyArg) -> Self {
        match strategy {
            StrategyArg::Scan => ParseStrategy::Scan,
            StrategyArg::Structured => ParseStrategy::Structured,
        }
    }
}
