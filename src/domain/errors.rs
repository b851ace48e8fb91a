//! Domain error types
//!
//! This module defines the error hierarchy for Cloak. All errors are
//! domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main Cloak error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum CloakError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Rule compilation errors (bad smart matcher, runaway regex)
    #[error("Pattern error: {0}")]
    Pattern(#[from] PatternError),

    /// Persisted rule/prompt format errors
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

/// Errors raised while compiling or executing a rule's matcher
///
/// Unknown smart matchers are configuration bugs and surface at engine
/// construction; execution errors can only come from pathological
/// user-supplied regexes hitting the backtracking limit.
#[derive(Debug, Error)]
pub enum PatternError {
    /// The `{name}` pattern names no built-in smart matcher
    #[error("Unknown smart matcher: {0}")]
    UnknownSmartMatcher(String),

    /// A built-in matcher regex failed to compile
    #[error("Failed to compile matcher for pattern '{pattern}': {message}")]
    Compile { pattern: String, message: String },

    /// Matcher execution failed (e.g. backtracking limit exceeded)
    #[error("Matcher execution failed: {0}")]
    Execution(String),
}

/// Errors raised by the persisted rules/prompts format validators
///
/// Messages are field- and index-qualified so the caller can surface them
/// to the end user verbatim when rejecting an import.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Input is not parseable JSON
    #[error("Invalid JSON format: {0}")]
    Syntax(String),

    /// Root structure is not what the format requires
    #[error("Invalid JSON structure: {0}")]
    Structure(String),

    /// Rule array exceeds the element limit
    #[error("Too many rules: The limit is {0} rules.")]
    TooManyRules(usize),

    /// Prompt array exceeds the element limit
    #[error("Too many prompts: The limit is {0} prompts.")]
    TooManyPrompts(usize),

    /// A single rule failed a field check
    #[error("Invalid rule at index {index}: {reason}")]
    Rule { index: usize, reason: String },

    /// A single prompt failed a field check
    #[error("Invalid prompt at index {index}: {reason}")]
    Prompt { index: usize, reason: String },
}

// Conversion from std::io::Error
impl From<std::io::Error> for CloakError {
    fn from(err: std::io::Error) -> Self {
        CloakError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for CloakError {
    fn from(err: serde_json::Error) -> Self {
        CloakError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for CloakError {
    fn from(err: toml::de::Error) -> Self {
        CloakError::Configuration(format!("TOML parse error: {err}"))
    }
}
