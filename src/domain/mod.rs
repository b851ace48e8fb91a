//! Domain models and types for Cloak.
//!
//! This module contains the core domain models shared across the crate:
//!
//! - **Rules** ([`Rule`], [`PersistedRule`], [`PersistedPrompt`])
//! - **Replacement log** ([`ReplacementLogEntry`], [`ReplacementKind`])
//! - **Error types** ([`CloakError`], [`PatternError`], [`ValidationError`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, CloakError>`]:
//!
//! ```rust
//! use cloak::domain::{CloakError, Result};
//!
//! fn example() -> Result<()> {
//!     // Errors are automatically converted using the ? operator
//!     let config = cloak::config::load_config("cloak.toml")?;
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod replacement;
pub mod result;
pub mod rule;

// Re-export commonly used types for convenience
pub use errors::{CloakError, PatternError, ValidationError};
pub use replacement::{ReplacementKind, ReplacementLogEntry};
pub use result::Result;
pub use rule::{PersistedPrompt, PersistedRule, Rule};
