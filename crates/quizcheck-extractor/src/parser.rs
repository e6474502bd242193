//! Structured parsing of the array segment as JSON

use serde_json::Value;
use tracing::{debug, warn};

/// Parse an array segment (the text between `[` and `];`) as a JSON array
/// and read `field` from each top-level object
///
/// Returns `None` when the segment is not valid JSON, so the caller can fall
/// back to scanning. Entries without a usable integer `field` are skipped.
pub fn parse_structured(segment: &str, field: &str) -> Option<Vec<u64>> {
    let wrapped = format!("[{}]", segment);
    let entries: Vec<Value> = match serde_json::from_str(&wrapped) {
        Ok(entries) => entries,
        Err(e) => {
            debug!("Array segment is not valid JSON ({}), falling back to scan", e);
            return None;
        }
    };

    let mut numbers = Vec::with_capacity(entries.len());
    for (idx, entry) in entries.iter().enumerate() {
        match entry_number(entry, field) {
            Ok(number) => numbers.push(number),
            Err(e) => warn!("Skipping entry {}: {}", idx, e),
        }
    }

    Some(numbers)
}

/// Read the numbering field from a single entry
fn entry_number(entry: &Value, field: &str) -> Result<u64, String> {
    let obj = entry
        .as_object()
        .ok_or_else(|| "entry is not a JSON object".to_string())?;

    let value = obj
        .get(field)
        .ok_or_else(|| format!("missing '{}'", field))?;

    value
        .as_u64()
        .ok_or_else(|| format!("'{}' is not a non-negative integer: {}", field, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_segment() {
        let segment = r#"
            {"question_number": 2, "question": "b"},
            {"question_number": 1, "question": "a"}
        "#;
        let numbers = parse_structured(segment, "question_number").unwrap();
        assert_eq!(numbers, vec![2, 1]);
    }

    #[test]
    fn test_parse_empty_segment() {
        let numbers = parse_structured("\n  \n", "question_number").unwrap();
        assert!(numbers.is_empty());
    }

    #[test]
    fn test_trailing_comma_is_not_json() {
        let segment = r#"{"question_number": 1},"#;
        assert!(parse_structured(segment, "question_number").is_none());
    }

    #[test]
    fn test_unquoted_keys_are_not_json() {
        let segment = r#"{ question_number: 1 }"#;
        assert!(parse_structured(segment, "question_number").is_none());
    }

    #[test]
    fn test_nested_fields_are_ignored() {
        let segment = r#"
            {"question_number": 1, "related": {"question_number": 99}},
            {"question_number": 2}
        "#;
        let numbers = parse_structured(segment, "question_number").unwrap();
        assert_eq!(numbers, vec![1, 2]);
    }

    #[test]
    fn test_partial_success() {
        let segment = r#"
            {"question_number": 1},
            {"question": "no number"},
            {"question_number": "3"},
            {"question_number": -4},
            "not an object",
            {"question_number": 5}
        "#;
        let numbers = parse_structured(segment, "question_number").unwrap();
        assert_eq!(numbers, vec![1, 5]);
    }

    #[test]
    fn test_entry_number_errors() {
        let entry = serde_json::json!({"id": 1.5});
        assert!(entry_number(&entry, "id").is_err());
        assert!(entry_number(&serde_json::json!([]), "id").is_err());
        assert_eq!(entry_number(&serde_json::json!({"id": 7}), "id"), Ok(7));
    }
}
