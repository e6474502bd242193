//! Core Extractor implementation

use crate::config::{ExtractorConfig, ParseStrategy};
use crate::error::ExtractorError;
use crate::parser::parse_structured;
use crate::types::Extraction;
use regex::Regex;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// The Extractor locates the quiz array in a document and reads its
/// entry numbers
#[derive(Debug, Clone)]
pub struct Extractor {
    config: ExtractorConfig,
    array_pattern: Regex,
    field_pattern: Regex,
}

impl Extractor {
    /// Create a new Extractor, compiling the locator patterns for the
    /// configured array and field names
    pub fn new(config: ExtractorConfig) -> Result<Self, ExtractorError> {
        config.validate().map_err(ExtractorError::Config)?;

        let array_pattern = Regex::new(&format!(
            r"(?s)const\s+{}\s*=\s*\[(.*?)\];",
            regex::escape(&config.array_name)
        ))?;
        let field_pattern = Regex::new(&format!(
            r#""{}"\s*:\s*(\d+)"#,
            regex::escape(&config.field_name)
        ))?;

        Ok(Self {
            config,
            array_pattern,
            field_pattern,
        })
    }

    /// Create an Extractor for the default `quizData` / `question_number` layout
    pub fn default_config() -> Result<Self, ExtractorError> {
        Self::new(ExtractorConfig::default())
    }

    /// Configuration in use
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Read a document from disk and extract its entry numbers
    pub fn extract_file(&self, path: impl AsRef<Path>) -> Result<Extraction, ExtractorError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ExtractorError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        info!("Read {} ({} bytes)", path.display(), text.len());
        Ok(self.extract(&text))
    }

    /// Extract entry numbers from document text
    pub fn extract(&self, text: &str) -> Extraction {
        let Some(segment) = self.locate_array(text) else {
            debug!("No '{}' declaration found", self.config.array_name);
            return Extraction::ArrayNotFound;
        };
        debug!(
            "Located '{}' array segment ({} bytes)",
            self.config.array_name,
            segment.len()
        );

        let numbers = match self.config.strategy {
            ParseStrategy::Structured => {
                parse_structured(segment, &self.config.field_name)
                    .unwrap_or_else(|| self.scan_numbers(segment))
            }
            ParseStrategy::Scan => self.scan_numbers(segment),
        };

        if numbers.is_empty() {
            Extraction::NoEntries
        } else {
            Extraction::Found(numbers)
        }
    }

    /// Find the text between the array's opening `[` and the first `];`
    pub fn locate_array<'a>(&self, text: &'a str) -> Option<&'a str> {
        self.array_pattern
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    /// Digit runs of every labeled field occurrence in a segment, in order
    pub fn field_occurrences<'a>(&self, segment: &'a str) -> Vec<&'a str> {
        self.field_pattern
            .captures_iter(segment)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str())
            .collect()
    }

    /// Scan a segment for labeled occurrences and convert them to numbers
    fn scan_numbers(&self, segment: &str) -> Vec<u64> {
        self.field_occurrences(segment)
            .into_iter()
            .filter_map(|digits| match digits.parse::<u64>() {
                Ok(number) => Some(number),
                Err(e) => {
                    warn!("Dropping '{}' value {}: {}", self.config.field_name, digits, e);
                    None
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> Extractor {
        Extractor::default_config().unwrap()
    }

    #[test]
    fn test_locate_array_spans_lines() {
        let text = "<script>\nconst quizData = [\n  {\"question_number\": 1}\n];\n</script>";
        let segment = extractor().locate_array(text).unwrap();
        assert!(segment.contains("\"question_number\": 1"));
    }

    #[test]
    fn test_locate_array_is_non_greedy() {
        let text = "const quizData = [1];\nconst other = [2];";
        assert_eq!(extractor().locate_array(text), Some("1"));
    }

    #[test]
    fn test_locate_array_requires_declaration_name() {
        let text = "const quizDataBackup = [1];";
        assert!(extractor().locate_array(text).is_none());
        let text = "let quizData = [1];";
        assert!(extractor().locate_array(text).is_none());
    }

    #[test]
    fn test_field_occurrences_allow_whitespace() {
        let segment = r#"{"question_number":1},{"question_number":   22}"#;
        assert_eq!(extractor().field_occurrences(segment), vec!["1", "22"]);
    }

    #[test]
    fn test_field_occurrences_ignore_other_keys() {
        let segment = r#"{"question_numbers": 1, "number": 2, question_number: 3}"#;
        assert!(extractor().field_occurrences(segment).is_empty());
    }

    #[test]
    fn test_overflowing_value_is_dropped() {
        let text = r#"const quizData = [{"question_number": 99999999999999999999999}, {"question_number": 4}];"#;
        assert_eq!(extractor().extract(text), Extraction::Found(vec![4]));
    }

    #[test]
    fn test_all_values_dropped_is_no_entries() {
        let text = r#"const quizData = [{"question_number": 99999999999999999999999}];"#;
        assert_eq!(extractor().extract(text), Extraction::NoEntries);
    }

    #[test]
    fn test_custom_names_are_escaped() {
        let config = ExtractorConfig {
            array_name: "data.v2".to_string(),
            field_name: "id(1)".to_string(),
            ..Default::default()
        };
        let extractor = Extractor::new(config).unwrap();
        let text = r#"const data.v2 = [{"id(1)": 7}]; const dataXv2 = [{"id(1)": 8}];"#;
        assert_eq!(extractor.extract(text), Extraction::Found(vec![7]));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = ExtractorConfig {
            array_name: String::new(),
            ..Default::default()
        };
        assert!(matches!(
            Extractor::new(config),
            Err(ExtractorError::Config(_))
        ));
    }
}
