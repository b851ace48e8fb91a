//! CLI command implementations

pub mod mark;
pub mod mask;
pub mod validate;

use crate::domain::Rule;
use crate::validation::validate_rules_json;
use anyhow::Context;
use std::io::Read;

/// Reads the input text from a file, or from stdin when no path is given
pub(crate) fn read_input(path: Option<&str>) -> anyhow::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file {path}")),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read from stdin")?;
            Ok(buffer)
        }
    }
}

/// Loads and validates a rules file, reporting problems CLI-style
///
/// Returns `Ok(None)` (after printing the reason) when the file is missing
/// or malformed, so commands can exit with the validation error code
/// instead of aborting.
pub(crate) fn load_rules(
    explicit_path: Option<&str>,
    config_path: Option<&str>,
) -> anyhow::Result<Option<Vec<Rule>>> {
    let Some(path) = explicit_path.or(config_path) else {
        println!("❌ No rules file given");
        println!("   Pass --rules <FILE> or set rules.path in the configuration file");
        return Ok(None);
    };

    let contents =
        std::fs::read_to_string(path).with_context(|| format!("Failed to read rules file {path}"))?;

    match validate_rules_json(&contents) {
        Ok(persisted) => Ok(Some(persisted.into_iter().map(Rule::from).collect())),
        Err(e) => {
            println!("❌ Invalid rules file: {path}");
            println!("   Error: {e}");
            Ok(None)
        }
    }
}
