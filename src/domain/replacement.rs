//! Replacement log models
//!
//! The replacement log is the engine's only record of what was substituted;
//! replaying it in reverse is what makes masking reversible. Entries are
//! append-only and owned exclusively by one engine instance.

use serde::{Deserialize, Serialize};

/// Classification of a logged replacement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReplacementKind {
    /// Replacement of user-defined sensitive data
    #[serde(rename = "sensitive data")]
    SensitiveData,
}

/// One recorded substitution: the original text and the fake value it became
///
/// Insertion order equals the chronological order of first-time replacement;
/// unmasking walks the log newest-first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplacementLogEntry {
    /// The matched substring, exactly as it appeared (case preserved)
    pub original: String,

    /// The synthetic value chosen for it
    pub fake: String,

    /// Entry classification
    pub kind: ReplacementKind,
}

impl ReplacementLogEntry {
    /// Creates a sensitive-data log entry
    pub fn sensitive(original: impl Into<String>, fake: impl Into<String>) -> Self {
        Self {
            original: original.into(),
            fake: fake.into(),
            kind: ReplacementKind::SensitiveData,
        }
    }
}
