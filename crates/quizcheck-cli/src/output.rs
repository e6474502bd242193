//! Output formatting for the CLI.

use crate::check::CheckOutcome;
use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use quizcheck_extractor::{ExpectedCheck, SequenceReport};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a check outcome.
    pub fn format_outcome(&self, outcome: &CheckOutcome) -> Result<String> {
        match self.format {
            OutputFormat::Text => Ok(self.format_text(outcome)),
            OutputFormat::Table => Ok(self.format_table(outcome)),
            OutputFormat::Json => self.format_json(outcome),
        }
    }

    /// Format an outcome as report lines.
    fn format_text(&self, outcome: &CheckOutcome) -> String {
        let (report, expected) = match outcome {
            CheckOutcome::Report { report, expected } => (report, expected),
            _ => return self.format_miss(outcome),
        };

        let mut lines = vec![
            format!("Total question objects found: {}", report.count()),
            format!("Question numbers range: {} to {}", report.min, report.max),
        ];

        if report.gaps.is_empty() {
            lines.push(self.colorize("No gaps found in question numbering", "green"));
        } else {
            let gaps = format!("Gaps found: [{}]", report.gap_strings().join(", "));
            lines.push(self.colorize(&gaps, "yellow"));
        }

        lines.push(format!(
            "Expected array length should be: {}",
            report.expected_len()
        ));

        if let Some(check) = expected {
            lines.push(self.expected_line(check));
        }

        lines.join("\n")
    }

    /// Format an outcome as a summary table.
    fn format_table(&self, outcome: &CheckOutcome) -> String {
        let (report, expected) = match outcome {
            CheckOutcome::Report { report, expected } => (report, expected),
            _ => return self.format_miss(outcome),
        };

        let gaps = if report.gaps.is_empty() {
            "none".to_string()
        } else {
            report.gap_strings().join(", ")
        };

        let mut builder = Builder::default();
        builder.push_record(["Check", "Result"]);
        builder.push_record(["Entries".to_string(), report.count().to_string()]);
        builder.push_record([
            "Range".to_string(),
            format!("{} to {}", report.min, report.max),
        ]);
        builder.push_record(["Gaps".to_string(), gaps]);
        builder.push_record(["Duplicates".to_string(), report.duplicate_count().to_string()]);
        builder.push_record(["Missing numbers".to_string(), report.missing_count().to_string()]);
        builder.push_record(["Expected length".to_string(), report.expected_len().to_string()]);
        if let Some(check) = expected {
            let status = if check.matches() { "matches" } else { "MISMATCH" };
            builder.push_record([
                "Expected count".to_string(),
                format!("{} ({})", check.expected, status),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Format an outcome as JSON.
    fn format_json(&self, outcome: &CheckOutcome) -> Result<String> {
        let value = match outcome {
            CheckOutcome::Report { report, expected } => report_json(report, expected.as_ref()),
            CheckOutcome::ArrayNotFound { array_name } => serde_json::json!({
                "status": "array_not_found",
                "array_name": array_name,
            }),
            CheckOutcome::NoEntries { field_name } => serde_json::json!({
                "status": "no_entries",
                "field_name": field_name,
            }),
        };

        Ok(serde_json::to_string_pretty(&value)?)
    }

    /// The single line printed when the array or its entries are missing.
    fn format_miss(&self, outcome: &CheckOutcome) -> String {
        match outcome {
            CheckOutcome::ArrayNotFound { array_name } => {
                format!("Could not find {} array", array_name)
            }
            CheckOutcome::NoEntries { field_name } => {
                format!("No {} entries found", field_name)
            }
            CheckOutcome::Report { .. } => String::new(),
        }
    }

    fn expected_line(&self, check: &ExpectedCheck) -> String {
        if check.matches() {
            self.colorize(&format!("Expected count matches: {}", check.expected), "green")
        } else {
            self.colorize(
                &format!(
                    "Expected count mismatch: expected {}, found {}",
                    check.expected, check.found
                ),
                "red",
            )
        }
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("Error: {}", message), "red")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

fn report_json(report: &SequenceReport, expected: Option<&ExpectedCheck>) -> serde_json::Value {
    let gaps: Vec<serde_json::Value> = report
        .gaps
        .iter()
        .map(|gap| {
            let mut value = serde_json::json!({
                "low": gap.low,
                "high": gap.high,
                "display": gap.to_string(),
            });
            if let (Some(obj), Ok(serde_json::Value::Object(kind))) =
                (value.as_object_mut(), serde_json::to_value(gap.kind()))
            {
                obj.extend(kind);
            }
            value
        })
        .collect();

    serde_json::json!({
        "status": "found",
        "count": report.count(),
        "min": report.min,
        "max": report.max,
        "gaps": gaps,
        "duplicates": report.duplicate_count(),
        "missing": report.missing_count(),
        "expected_len": report.expected_len(),
        "expected": expected,
    })
}
