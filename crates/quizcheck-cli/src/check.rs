//! The numbering check.

use crate::error::Result;
use quizcheck_extractor::{
    analyze_sequence, ExpectedCheck, Extraction, Extractor, ExtractorConfig, SequenceReport,
};
use std::path::Path;
use tracing::info;

/// Outcome of checking one document.
#[derive(Debug, Clone, PartialEq)]
pub enum CheckOutcome {
    /// Entries were found and analysed
    Report {
        /// Sequence analysis
        report: SequenceReport,
        /// Comparison against `--expect`, when given
        expected: Option<ExpectedCheck>,
    },

    /// The array declaration is missing
    ArrayNotFound {
        /// Declaration name that was searched for
        array_name: String,
    },

    /// The array holds no numbered entries
    NoEntries {
        /// Field name that was searched for
        field_name: String,
    },
}

/// Check the numbering of the quiz array in the document at `path`.
pub fn run_check(
    path: &Path,
    config: &ExtractorConfig,
    expect: Option<usize>,
) -> Result<CheckOutcome> {
    let extractor = Extractor::new(config.clone())?;
    let extraction = extractor.extract_file(path)?;
    Ok(evaluate(extraction, config, expect))
}

/// Turn an extraction into a check outcome.
pub fn evaluate(
    extraction: Extraction,
    config: &ExtractorConfig,
    expect: Option<usize>,
) -> CheckOutcome {
    let numbers = match extraction {
        Extraction::Found(numbers) => numbers,
        Extraction::ArrayNotFound => {
            return CheckOutcome::ArrayNotFound {
                array_name: config.array_name.clone(),
            }
        }
        Extraction::NoEntries => {
            return CheckOutcome::NoEntries {
                field_name: config.field_name.clone(),
            }
        }
    };

    let Some(report) = analyze_sequence(&numbers) else {
        return CheckOutcome::NoEntries {
            field_name: config.field_name.clone(),
        };
    };

    info!(
        "{} entries numbered {} to {}, {} gap(s)",
        report.count(),
        report.min,
        report.max,
        report.gaps.len()
    );

    let expected = expect.map(|n| report.check_expected(n));
    CheckOutcome::Report { report, expected }
}
