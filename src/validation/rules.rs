//! Persisted rules file validation
//!
//! Rule files are authored and exchanged by users, so the importer cannot
//! trust their shape. Validation is pure and total: it either returns the
//! parsed rule set or an error whose message names the offending field and
//! index.

use crate::domain::{PersistedRule, ValidationError};
use serde_json::Value;

/// Upper bound on rules per file
pub const MAX_RULES: usize = 1000;

const ALLOWED_FIELDS: &[&str] = &[
    "userDefinedSensitiveDataPattern",
    "userDefinedTemporaryPlaceholder",
];

/// Validates the format of a persisted rules JSON file
///
/// The expected shape is a bare, non-empty array of rule objects:
///
/// ```json
/// [
///     {
///         "userDefinedSensitiveDataPattern": "Hulk Hogan",
///         "userDefinedTemporaryPlaceholder": "Max Mustermann"
///     }
/// ]
/// ```
///
/// Checks, in order: the input parses as JSON; the root is an array (an
/// object wrapper such as `{"rules": [...]}` is rejected); the array is
/// non-empty and holds at most [`MAX_RULES`] entries; every element is an
/// object carrying only the two allowed fields, each a non-empty string.
///
/// # Errors
///
/// Returns a [`ValidationError`] with a descriptive, field- and
/// index-qualified message on the first violation.
pub fn validate_rules_json(input: &str) -> Result<Vec<PersistedRule>, ValidationError> {
    let raw: Value =
        serde_json::from_str(input).map_err(|e| ValidationError::Syntax(e.to_string()))?;

    let Some(entries) = raw.as_array() else {
        return Err(ValidationError::Structure(
            "Expected an array of rules.".to_string(),
        ));
    };

    if entries.is_empty() {
        return Err(ValidationError::Structure(
            "'rules' array must contain at least one rule.".to_string(),
        ));
    }

    if entries.len() > MAX_RULES {
        return Err(ValidationError::TooManyRules(MAX_RULES));
    }

    let mut rules = Vec::with_capacity(entries.len());

    for (index, entry) in entries.iter().enumerate() {
        let Some(fields) = entry.as_object() else {
            return Err(ValidationError::Rule {
                index,
                reason: "Each rule must be an object.".to_string(),
            });
        };

        if fields.keys().any(|key| !ALLOWED_FIELDS.contains(&key.as_str())) {
            return Err(ValidationError::Rule {
                index,
                reason: "Unexpected fields detected.".to_string(),
            });
        }

        let pattern = require_non_empty_string(fields, "userDefinedSensitiveDataPattern", index)?;
        let placeholder =
            require_non_empty_string(fields, "userDefinedTemporaryPlaceholder", index)?;

        rules.push(PersistedRule {
            sensitive_data_pattern: pattern,
            temporary_placeholder: placeholder,
        });
    }

    Ok(rules)
}

fn require_non_empty_string(
    fields: &serde_json::Map<String, Value>,
    name: &str,
    index: usize,
) -> Result<String, ValidationError> {
    match fields.get(name).and_then(Value::as_str) {
        Some(value) if !value.trim().is_empty() => Ok(value.to_string()),
        _ => Err(ValidationError::Rule {
            index,
            reason: format!("\"{name}\" must be a non-empty string."),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = r#"[
        {
            "userDefinedSensitiveDataPattern": "Hulk Hogan",
            "userDefinedTemporaryPlaceholder": "Max Mustermann"
        },
        {
            "userDefinedSensitiveDataPattern": "hulk.hogan@gmail.com",
            "userDefinedTemporaryPlaceholder": "max.mustermann@example.com"
        }
    ]"#;

    #[test]
    fn test_valid_rules_parse() {
        let rules = validate_rules_json(VALID).unwrap();
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0].sensitive_data_pattern, "Hulk Hogan");
        assert_eq!(rules[1].temporary_placeholder, "max.mustermann@example.com");
    }

    #[test]
    fn test_rejects_non_json() {
        let err = validate_rules_json("not json").unwrap_err();
        assert!(matches!(err, ValidationError::Syntax(_)));
    }

    #[test]
    fn test_rejects_object_wrapper() {
        let err = validate_rules_json(r#"{"rules": []}"#).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid JSON structure: Expected an array of rules."
        );
    }

    #[test]
    fn test_rejects_empty_array() {
        let err = validate_rules_json("[]").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid JSON structure: 'rules' array must contain at least one rule."
        );
    }

    #[test]
    fn test_rejects_too_many_rules() {
        let one = r#"{"userDefinedSensitiveDataPattern":"a","userDefinedTemporaryPlaceholder":"b"}"#;
        let many = format!("[{}]", vec![one; MAX_RULES + 1].join(","));
        let err = validate_rules_json(&many).unwrap_err();
        assert_eq!(err.to_string(), "Too many rules: The limit is 1000 rules.");
    }

    #[test]
    fn test_rejects_non_object_entry() {
        let err = validate_rules_json(r#"["just a string"]"#).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid rule at index 0: Each rule must be an object."
        );
    }

    #[test]
    fn test_rejects_unexpected_fields() {
        let json = r#"[{
            "userDefinedSensitiveDataPattern": "a",
            "userDefinedTemporaryPlaceholder": "b",
            "extra": true
        }]"#;
        let err = validate_rules_json(json).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid rule at index 0: Unexpected fields detected."
        );
    }

    #[test]
    fn test_rejects_missing_pattern() {
        let json = r#"[{"userDefinedTemporaryPlaceholder": "b"}]"#;
        let err = validate_rules_json(json).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid rule at index 0: \"userDefinedSensitiveDataPattern\" must be a non-empty string."
        );
    }

    #[test]
    fn test_rejects_blank_placeholder() {
        let json = r#"[{
            "userDefinedSensitiveDataPattern": "a",
            "userDefinedTemporaryPlaceholder": "   "
        }]"#;
        let err = validate_rules_json(json).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid rule at index 0: \"userDefinedTemporaryPlaceholder\" must be a non-empty string."
        );
    }

    #[test]
    fn test_error_index_points_at_offender() {
        let json = r#"[
            {"userDefinedSensitiveDataPattern": "a", "userDefinedTemporaryPlaceholder": "b"},
            {"userDefinedSensitiveDataPattern": "", "userDefinedTemporaryPlaceholder": "d"}
        ]"#;
        let err = validate_rules_json(json).unwrap_err();
        assert!(err.to_string().starts_with("Invalid rule at index 1:"));
    }
}
