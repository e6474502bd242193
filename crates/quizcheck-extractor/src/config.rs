//! Configuration for the Extractor

use serde::{Deserialize, Serialize};

/// How numbered entries are read out of the array segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParseStrategy {
    /// Scan the segment text for labeled field occurrences
    #[default]
    Scan,
    /// Parse the segment as a JSON array, falling back to `Scan` when it
    /// is not valid JSON
    Structured,
}

/// Configuration for the Extractor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Name of the `const` declaration holding the array literal
    pub array_name: String,

    /// Quoted key whose integer value numbers each entry
    pub field_name: String,

    /// Entry parsing strategy
    pub strategy: ParseStrategy,
}

impl ExtractorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.array_name.trim().is_empty() {
            return Err("array_name must not be empty".to_string());
        }
        if self.field_name.trim().is_empty() {
            return Err("field_name must not be empty".to_string());
        }
        if self.field_name.contains('"') {
            return Err("field_name must not contain quotes".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            array_name: "quizData".to_string(),
            field_name: "question_number".to_string(),
            strategy: ParseStrategy::Scan,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ExtractorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.array_name, "quizData");
        assert_eq!(config.field_name, "question_number");
        assert_eq!(config.strategy, ParseStrategy::Scan);
    }

    #[test]
    fn test_empty_array_name_rejected() {
        let config = ExtractorConfig {
            array_name: "  ".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_field_name_rejected() {
        let config = ExtractorConfig {
            field_name: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_quoted_field_name_rejected() {
        let config = ExtractorConfig {
            field_name: "\"id\"".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = ExtractorConfig {
            array_name: "questions".to_string(),
            field_name: "id".to_string(),
            strategy: ParseStrategy::Structured,
        };
        let toml_str = config.to_toml().unwrap();
        let parsed = ExtractorConfig::from_toml(&toml_str).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let parsed = ExtractorConfig::from_toml(r#"strategy = "structured""#).unwrap();
        assert_eq!(parsed.array_name, "quizData");
        assert_eq!(parsed.strategy, ParseStrategy::Structured);
    }

    #[test]
    fn test_unknown_strategy_rejected() {
        assert!(ExtractorConfig::from_toml(r#"strategy = "fuzzy""#).is_err());
    }
}
