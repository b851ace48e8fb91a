//! Rule domain model
//!
//! A rule pairs a sensitive-data pattern with the placeholder expression
//! used to replace whatever the pattern detects. Rule order is semantically
//! significant: rules apply sequentially, and each rule's output text is the
//! input to the next.

use serde::{Deserialize, Serialize};

/// A masking rule as used by the engine
///
/// The JSON field names are the external contract shared with every
/// frontend that produces rule files; don't rename them.
///
/// # Examples
///
/// ```
/// use cloak::domain::Rule;
///
/// let rule = Rule::new("{email}", "{email}");
/// assert!(rule.id.is_none());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Rule {
    /// System-assigned identifier; stripped before persistence
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Pattern detecting sensitive data: a smart matcher (`{email}`),
    /// a regular expression, or a literal string
    #[serde(rename = "userDefinedSensitiveDataPattern")]
    pub sensitive_data_pattern: String,

    /// Replacement expression: a fixed value or a smart expression
    /// such as `{date(1990,2000,'YYYY-MM-DD')}`
    #[serde(rename = "userDefinedTemporaryPlaceholder")]
    pub temporary_placeholder: String,
}

impl Rule {
    /// Creates a rule without an id
    pub fn new(pattern: impl Into<String>, placeholder: impl Into<String>) -> Self {
        Self {
            id: None,
            sensitive_data_pattern: pattern.into(),
            temporary_placeholder: placeholder.into(),
        }
    }
}

/// A rule in its persisted form: no id, only the two user-defined fields
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PersistedRule {
    /// Pattern for identifying sensitive data
    #[serde(rename = "userDefinedSensitiveDataPattern")]
    pub sensitive_data_pattern: String,

    /// Placeholder used for pseudonymization
    #[serde(rename = "userDefinedTemporaryPlaceholder")]
    pub temporary_placeholder: String,
}

impl From<PersistedRule> for Rule {
    fn from(persisted: PersistedRule) -> Self {
        Self {
            id: None,
            sensitive_data_pattern: persisted.sensitive_data_pattern,
            temporary_placeholder: persisted.temporary_placeholder,
        }
    }
}

/// A persisted prompt, validated on import
///
/// Prompts are not consumed by the masking engine itself; the validator
/// guards the import boundary so a malformed prompt library is rejected
/// before it reaches any store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PersistedPrompt {
    /// Optional id carried over from an earlier export
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Short human-readable description
    pub description: String,

    /// The prompt text itself
    pub prompt: String,

    /// Free-form comment, may be empty
    pub comment: String,

    /// Target platforms, each a non-empty string
    pub platforms: Vec<String>,

    /// Tags, each a non-empty string
    pub tags: Vec<String>,

    /// Favorite flag
    #[serde(rename = "isFavorite")]
    pub is_favorite: bool,

    /// Creation timestamp, ISO-8601
    #[serde(rename = "createdAt")]
    pub created_at: String,

    /// Last-update timestamp, ISO-8601
    #[serde(rename = "updatedAt")]
    pub updated_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_json_field_names() {
        let rule = Rule::new("MyFirstName", "Max");
        let json = serde_json::to_value(&rule).unwrap();
        assert_eq!(json["userDefinedSensitiveDataPattern"], "MyFirstName");
        assert_eq!(json["userDefinedTemporaryPlaceholder"], "Max");
        assert!(json.get("id").is_none());
    }

    #[test]
    fn test_rule_deserializes_without_id() {
        let json = r#"{
            "userDefinedSensitiveDataPattern": "{email}",
            "userDefinedTemporaryPlaceholder": "{email}"
        }"#;
        let rule: Rule = serde_json::from_str(json).unwrap();
        assert_eq!(rule.id, None);
        assert_eq!(rule.sensitive_data_pattern, "{email}");
    }

    #[test]
    fn test_persisted_rule_into_rule() {
        let persisted = PersistedRule {
            sensitive_data_pattern: "0511/3333333".to_string(),
            temporary_placeholder: "0851/4711".to_string(),
        };
        let rule: Rule = persisted.into();
        assert_eq!(rule.sensitive_data_pattern, "0511/3333333");
        assert!(rule.id.is_none());
    }
}
