//! Format validators for persisted rule and prompt files
//!
//! These guard the import boundary: externally supplied JSON is either
//! returned as a parsed, well-formed structure or rejected with an error
//! message precise enough to show to the end user. Both validators are
//! pure (no I/O) and total (always terminate).

pub mod prompts;
pub mod rules;

pub use prompts::{validate_prompts_json, MAX_PROMPTS};
pub use rules::{validate_rules_json, MAX_RULES};
