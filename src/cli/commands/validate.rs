//! Validate command implementation
//!
//! Validates a persisted rules or prompts JSON file and reports the result
//! in a form suitable for direct display to the user.

use crate::validation::{validate_prompts_json, validate_rules_json};
use clap::Args;

/// Arguments for the validate command
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Path to the JSON file to validate
    pub file: String,

    /// Validate a prompts file instead of a rules file
    #[arg(long)]
    pub prompts: bool,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> anyhow::Result<i32> {
        let kind = if self.prompts { "prompts" } else { "rules" };
        tracing::debug!(file = %self.file, kind, "Validating file");

        println!("🔍 Validating {} file: {}", kind, self.file);
        println!();

        let contents = match std::fs::read_to_string(&self.file) {
            Ok(contents) => contents,
            Err(e) => {
                println!("❌ Failed to read file");
                println!("   Error: {e}");
                return Ok(2);
            }
        };

        let result = if self.prompts {
            validate_prompts_json(&contents).map(|prompts| prompts.len())
        } else {
            validate_rules_json(&contents).map(|rules| rules.len())
        };

        match result {
            Ok(count) => {
                println!("✅ File is valid: {count} {kind}");
                Ok(0)
            }
            Err(e) => {
                println!("❌ Validation failed");
                println!("   Error: {e}");
                Ok(2)
            }
        }
    }
}
