//! Anonymization module for Cloak
//!
//! This module provides rule-driven detection and reversible masking of
//! sensitive data in free text.
//!
//! # Architecture
//!
//! The pipeline consists of:
//! - **Pattern compilation**: smart matchers, user regexes and literals
//!   compiled into word-boundary-safe matchers
//! - **Expression evaluation**: `{name(args)}` placeholders expanded into
//!   synthetic values
//! - **Engine**: sequential rule application with a replacement log,
//!   deduplication and collision-free placeholder assignment
//! - **Markup**: sentinel tags for the non-destructive mark operation
//!
//! # Usage
//!
//! ```rust,ignore
//! use cloak::anonymization::AnonymizationEngine;
//!
//! let mut engine = AnonymizationEngine::new(rules)?;
//! let masked = engine.mask(text)?;
//! let restored = engine.unmask(&masked);
//! ```

pub mod engine;
pub mod expression;
pub mod hashing;
pub mod markup;
pub mod pattern;

// Re-export main types
pub use engine::AnonymizationEngine;
pub use markup::{split_sensitive_segments, Segment, SENSITIVE_CLOSE_TAG, SENSITIVE_OPEN_TAG};
pub use pattern::{CompiledRule, PatternKind, SmartMatcher};
