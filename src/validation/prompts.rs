//! Persisted prompts file validation
//!
//! Same import boundary as the rules validator, with a wider field set:
//! prompts carry descriptions, platform/tag lists, a favorite flag and
//! ISO-8601 timestamps.

use crate::domain::{PersistedPrompt, ValidationError};
use chrono::DateTime;
use serde_json::Value;

/// Upper bound on prompts per file
pub const MAX_PROMPTS: usize = 1000;

const ALLOWED_FIELDS: &[&str] = &[
    "id",
    "description",
    "prompt",
    "comment",
    "platforms",
    "tags",
    "isFavorite",
    "createdAt",
    "updatedAt",
];

/// Validates the format of a persisted prompts JSON file
///
/// The expected shape is a bare, non-empty array of prompt objects. Checks,
/// in order: the input parses as JSON; the root is an array (not an object
/// wrapper); the array is non-empty and holds at most [`MAX_PROMPTS`]
/// entries; every element is an object carrying only allowed fields, with
/// `description` and `prompt` non-empty strings, `comment` a string,
/// `platforms` and `tags` arrays of non-empty strings, `isFavorite` a
/// boolean, and `createdAt`/`updatedAt` valid ISO date strings.
///
/// # Errors
///
/// Returns a [`ValidationError`] with a descriptive, field- and
/// index-qualified message on the first violation.
pub fn validate_prompts_json(input: &str) -> Result<Vec<PersistedPrompt>, ValidationError> {
    let raw: Value =
        serde_json::from_str(input).map_err(|e| ValidationError::Syntax(e.to_string()))?;

    let Some(entries) = raw.as_array() else {
        return Err(ValidationError::Structure(
            "Expected an array of prompts.".to_string(),
        ));
    };

    if entries.is_empty() {
        return Err(ValidationError::Structure(
            "'prompts' array must contain at least one prompt.".to_string(),
        ));
    }

    if entries.len() > MAX_PROMPTS {
        return Err(ValidationError::TooManyPrompts(MAX_PROMPTS));
    }

    let mut prompts = Vec::with_capacity(entries.len());

    for (index, entry) in entries.iter().enumerate() {
        let Some(fields) = entry.as_object() else {
            return Err(ValidationError::Prompt {
                index,
                reason: "Each prompt must be an object.".to_string(),
            });
        };

        if fields.keys().any(|key| !ALLOWED_FIELDS.contains(&key.as_str())) {
            return Err(ValidationError::Prompt {
                index,
                reason: "Unexpected fields detected.".to_string(),
            });
        }

        let description = require_non_empty_string(fields, "description", index)?;
        let prompt = require_non_empty_string(fields, "prompt", index)?;

        let Some(comment) = fields.get("comment").and_then(Value::as_str) else {
            return Err(ValidationError::Prompt {
                index,
                reason: "\"comment\" must be a string.".to_string(),
            });
        };

        let platforms = require_string_array(fields, "platforms", index)?;
        let tags = require_string_array(fields, "tags", index)?;

        let Some(is_favorite) = fields.get("isFavorite").and_then(Value::as_bool) else {
            return Err(ValidationError::Prompt {
                index,
                reason: "\"isFavorite\" must be a boolean.".to_string(),
            });
        };

        let created_at = require_iso_date(fields, "createdAt", index)?;
        let updated_at = require_iso_date(fields, "updatedAt", index)?;

        prompts.push(PersistedPrompt {
            id: fields.get("id").and_then(Value::as_i64),
            description,
            prompt,
            comment: comment.to_string(),
            platforms,
            tags,
            is_favorite,
            created_at,
            updated_at,
        });
    }

    Ok(prompts)
}

fn require_non_empty_string(
    fields: &serde_json::Map<String, Value>,
    name: &str,
    index: usize,
) -> Result<String, ValidationError> {
    match fields.get(name).and_then(Value::as_str) {
        Some(value) if !value.trim().is_empty() => Ok(value.to_string()),
        _ => Err(ValidationError::Prompt {
            index,
            reason: format!("\"{name}\" must be a non-empty string."),
        }),
    }
}

fn require_string_array(
    fields: &serde_json::Map<String, Value>,
    name: &str,
    index: usize,
) -> Result<Vec<String>, ValidationError> {
    let Some(values) = fields.get(name).and_then(Value::as_array) else {
        return Err(ValidationError::Prompt {
            index,
            reason: format!("\"{name}\" must be an array of strings."),
        });
    };

    let mut strings = Vec::with_capacity(values.len());
    for value in values {
        let Some(s) = value.as_str() else {
            return Err(ValidationError::Prompt {
                index,
                reason: format!("\"{name}\" must be an array of strings."),
            });
        };
        if s.trim().is_empty() {
            return Err(ValidationError::Prompt {
                index,
                reason: format!("\"{name}\" must not contain empty strings."),
            });
        }
        strings.push(s.to_string());
    }

    Ok(strings)
}

fn require_iso_date(
    fields: &serde_json::Map<String, Value>,
    name: &str,
    index: usize,
) -> Result<String, ValidationError> {
    match fields.get(name).and_then(Value::as_str) {
        Some(value) if DateTime::parse_from_rfc3339(value).is_ok() => Ok(value.to_string()),
        _ => Err(ValidationError::Prompt {
            index,
            reason: format!("\"{name}\" must be a valid ISO date string."),
        }),
    }
}
