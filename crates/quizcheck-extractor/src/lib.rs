//! quizcheck Extractor
//!
//! Reads the quiz dataset embedded in an HTML document and checks that its
//! entries are numbered consecutively.
//!
//! # Overview
//!
//! The quiz page declares its questions as a JavaScript array literal,
//! `const quizData = [ ... ];`, where each entry carries a
//! `"question_number"`. Authoring mistakes show up as skipped or repeated
//! numbers. The Extractor finds the array, reads the numbers, and the
//! sequence analysis reports the range and every non-consecutive jump.
//!
//! # Architecture
//!
//! ```text
//! Document → Extractor → Extraction → analyze_sequence → SequenceReport
//! ```
//!
//! A document without the array, or an array without numbered entries, is a
//! normal [`Extraction`] variant rather than an error.
//!
//! # Example Usage
//!
//! ```no_run
//! use quizcheck_extractor::{analyze_sequence, Extraction, Extractor};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let extractor = Extractor::default_config()?;
//!
//! if let Extraction::Found(numbers) = extractor.extract_file("index.html")? {
//!     if let Some(report) = analyze_sequence(&numbers) {
//!         println!("{} entries, {} to {}", report.count(), report.min, report.max);
//!         for gap in &report.gaps {
//!             println!("gap: {}", gap);
//!         }
//!     }
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod extractor;
mod parser;
mod sequence;
mod types;


pub use config::{ExtractorConfig, ParseStrategy};
pub use error::ExtractorError;
pub use extractor::Extractor;
pub use parser::parse_structured;
pub use sequence::{analyze_sequence, find_gaps};
pub use types::{ExpectedCheck, Extraction, Gap, GapKind, SequenceReport};
