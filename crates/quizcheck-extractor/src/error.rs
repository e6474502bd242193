//! Error types for the Extractor

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during extraction
///
/// A missing array or an array without entries is not an error; those are
/// reported through [`crate::Extraction`].
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// Input document could not be read
    #[error("{}: {source}", .path.display())]
    Io {
        /// Path that was being read
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// A locator pattern failed to compile
    #[error("Invalid pattern: {0}")]
    InvalidPattern(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<regex::Error> for ExtractorError {
    fn from(e: regex::Error) -> Self {
        ExtractorError::InvalidPattern(e.to_string())
    }
}
