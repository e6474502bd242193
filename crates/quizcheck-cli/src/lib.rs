//! quizcheck CLI library.
//!
//! This library provides the core functionality for the quizcheck command-line
//! interface, including configuration management, the numbering check, and
//! output formatting.

pub mod check;
pub mod cli;
pub mod config;
pub mod error;
pub mod output;

pub use check::{run_check, CheckOutcome};
pub use cli::Cli;
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
