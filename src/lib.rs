// Cloak - Reversible masking of sensitive data in text
// Copyright (c) 2025 Cloak Contributors
// Licensed under the MIT License

//! # Cloak - rule-driven, reversible masking of sensitive data
//!
//! Cloak detects sensitive substrings in arbitrary text using an ordered
//! set of user-defined rules, replaces each with a deterministically
//! chosen, collision-free synthetic value, and can restore the original
//! text exactly from an in-memory replacement log.
//!
//! ## Overview
//!
//! This library provides the core functionality for:
//! - **Masking** text with literal, regex and smart-matcher rules
//! - **Unmasking** masked text from the session's replacement log
//! - **Marking** sensitive spans non-destructively with sentinel tags
//! - **Validating** persisted rule and prompt files on import
//!
//! ## Architecture
//!
//! Cloak follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`anonymization`] - Pattern compilation, expression evaluation, engine
//! - [`validation`] - Persisted rules/prompts format validators
//! - [`domain`] - Core domain types and errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust
//! use cloak::anonymization::AnonymizationEngine;
//! use cloak::domain::Rule;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let rules = vec![
//!         Rule::new("Marten Solbeck", "Max Mustermann"),
//!         Rule::new("{email}", "{email}"),
//!     ];
//!
//!     let mut engine = AnonymizationEngine::new(rules)?;
//!
//!     let masked = engine.mask("Marten Solbeck, contact: marten@solbeck.example.org")?;
//!     assert!(!masked.contains("Marten Solbeck"));
//!
//!     let restored = engine.unmask(&masked);
//!     assert_eq!(restored, "Marten Solbeck, contact: marten@solbeck.example.org");
//!     Ok(())
//! }
//! ```
//!
//! ## Rules
//!
//! A rule pairs a sensitive-data pattern with a placeholder expression.
//! Patterns come in three kinds, tried in order:
//!
//! 1. **Smart matchers** - `{email}`, `{iban}`, `{ipv4}`,
//!    `{creditcardnumber}`: built-in detectors bundling a regex and a
//!    validator
//! 2. **Regular expressions** - any pattern that compiles as a regex is
//!    used verbatim
//! 3. **Literal strings** - everything else matches literally
//!
//! All matchers are word-boundary-safe: `MyFirstName` matches next to
//! punctuation but not inside `MyFirstNamei` or `MyFirstName123`.
//!
//! Placeholder expressions may embed smart expressions that expand to
//! synthetic data at replacement time:
//!
//! ```text
//! {email}                        a random email address
//! {email('company.com')}         with a fixed provider
//! {date(1990,2000,'YYYY-MM-DD')} a random date in a year range
//! {iban('DE')}                   a German IBAN with valid check digits
//! {word(12)}                     a pronounceable random string
//! ```
//!
//! ## Error Handling
//!
//! Cloak uses the [`domain::CloakError`] type for all errors:
//!
//! ```rust,no_run
//! use cloak::domain::CloakError;
//!
//! fn example() -> Result<(), CloakError> {
//!     // Errors are automatically converted using the ? operator
//!     let config = cloak::config::load_config("cloak.toml")?;
//!     Ok(())
//! }
//! ```
//!
//! ## Logging
//!
//! Cloak uses structured logging with the `tracing` crate:
//!
//! ```rust,no_run
//! use tracing::{info, warn};
//!
//! info!("Starting masking run");
//! warn!(expression = "unknownname", "Unknown expression encountered");
//! ```

pub mod anonymization;
pub mod cli;
pub mod config;
pub mod domain;
pub mod logging;
pub mod validation;
