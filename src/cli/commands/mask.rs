//! Mask command implementation
//!
//! Reads a rules file and input text, prints the masked text to stdout.
//! The replacement log can be inspected on stderr, and the round trip can
//! be verified in place since the engine instance is still alive.

use super::{load_rules, read_input};
use crate::anonymization::AnonymizationEngine;
use crate::config::load_config_or_default;
use anyhow::Context;
use clap::Args;

/// Arguments for the mask command
#[derive(Args, Debug)]
pub struct MaskArgs {
    /// Path to the rules JSON file (falls back to rules.path from the
    /// configuration file)
    #[arg(short, long)]
    pub rules: Option<String>,

    /// Input text file; reads stdin when omitted
    #[arg(short, long)]
    pub input: Option<String>,

    /// Print the replacement log as JSON to stderr
    #[arg(long)]
    pub show_log: bool,

    /// Unmask the output again and verify it matches the trimmed input
    #[arg(long)]
    pub verify_roundtrip: bool,
}

impl MaskArgs {
    /// Execute the mask command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::debug!(config_path, "Running mask command");

        let config = load_config_or_default(config_path)?;
        let Some(rules) = load_rules(self.rules.as_deref(), config.rules.path.as_deref())? else {
            return Ok(2);
        };

        let mut engine = AnonymizationEngine::new(rules).context("Failed to compile rules")?;

        let input = read_input(self.input.as_deref())?;
        let masked = engine.mask(&input)?;
        println!("{masked}");

        if self.show_log {
            let log = serde_json::to_string_pretty(engine.replacement_log())
                .context("Failed to serialize replacement log")?;
            eprintln!("{log}");
        }

        if self.verify_roundtrip {
            let restored = engine.unmask(&masked);
            if restored == input.trim() {
                eprintln!("✅ Round trip verified");
            } else {
                eprintln!("❌ Round trip mismatch");
                return Ok(1);
            }
        }

        Ok(0)
    }
}
