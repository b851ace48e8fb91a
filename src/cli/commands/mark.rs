//! Mark command implementation
//!
//! Annotates sensitive spans with sentinel tags instead of replacing them.
//! With `--segments` the output is the parsed segment list as JSON, which
//! is what UI layers consume to highlight sensitive runs.

use super::{load_rules, read_input};
use crate::anonymization::{split_sensitive_segments, AnonymizationEngine};
use crate::config::load_config_or_default;
use anyhow::Context;
use clap::Args;

/// Arguments for the mark command
#[derive(Args, Debug)]
pub struct MarkArgs {
    /// Path to the rules JSON file (falls back to rules.path from the
    /// configuration file)
    #[arg(short, long)]
    pub rules: Option<String>,

    /// Input text file; reads stdin when omitted
    #[arg(short, long)]
    pub input: Option<String>,

    /// Print the parsed segment list as JSON instead of tagged text
    #[arg(long)]
    pub segments: bool,
}

impl MarkArgs {
    /// Execute the mark command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::debug!(config_path, "Running mark command");

        let config = load_config_or_default(config_path)?;
        let Some(rules) = load_rules(self.rules.as_deref(), config.rules.path.as_deref())? else {
            return Ok(2);
        };

        let engine = AnonymizationEngine::new(rules).context("Failed to compile rules")?;

        let input = read_input(self.input.as_deref())?;
        let marked = engine.mark(&input)?;

        if self.segments {
            let segments = split_sensitive_segments(&marked);
            let json = serde_json::to_string_pretty(&segments)
                .context("Failed to serialize segments")?;
            println!("{json}");
        } else {
            println!("{marked}");
        }

        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_mark_command_with_files() {
        let mut rules = NamedTempFile::new().unwrap();
        rules
            .write_all(
                br#"[{
                "userDefinedSensitiveDataPattern": "MyFirstName",
                "userDefinedTemporaryPlaceholder": "Max"
            }]"#,
            )
            .unwrap();
        rules.flush().unwrap();

        let mut input = NamedTempFile::new().unwrap();
        input.write_all(b"MyFirstName is here").unwrap();
        input.flush().unwrap();

        let args = MarkArgs {
            rules: Some(rules.path().to_string_lossy().into_owned()),
            input: Some(input.path().to_string_lossy().into_owned()),
            segments: false,
        };

        let code = args.execute("nonexistent.toml").unwrap();
        assert_eq!(code, 0);
    }
}
