//! Rule-driven masking engine
//!
//! This module provides the core [`AnonymizationEngine`] that applies an
//! ordered rule set to text, producing masked, unmasked or marked output.
//!
//! # Architecture
//!
//! The engine coordinates three components:
//! - **Pattern compiler**: turns each rule into matching tools at
//!   construction ([`CompiledRule`])
//! - **Expression evaluator**: realizes placeholder expressions into
//!   concrete synthetic values per match
//! - **Session state**: the replacement log, deduplication map and
//!   used-values set that make masking deterministic and reversible
//!
//! # Examples
//!
//! ```
//! use cloak::anonymization::AnonymizationEngine;
//! use cloak::domain::Rule;
//!
//! # fn example() -> cloak::domain::Result<()> {
//! let rules = vec![
//!     Rule::new("Marten Solbeck", "Max Mustermann"),
//!     Rule::new("{email}", "{email}"),
//! ];
//! let mut engine = AnonymizationEngine::new(rules)?;
//!
//! let masked = engine.mask("Marten Solbeck, m@x.com")?;
//! assert!(!masked.contains("Marten Solbeck"));
//!
//! let restored = engine.unmask(&masked);
//! assert_eq!(restored, "Marten Solbeck, m@x.com");
//! # Ok(())
//! # }
//! ```

use crate::anonymization::expression;
use crate::anonymization::hashing::{hex_hash, is_letters_only, readable_hash};
use crate::anonymization::markup::wrap_sensitive;
use crate::anonymization::pattern::CompiledRule;
use crate::domain::{CloakError, PatternError, ReplacementLogEntry, Result, Rule};
use std::collections::{HashMap, HashSet};

/// Attempt budget for the fake-value uniqueness loop
const MAX_GENERATION_ATTEMPTS: u32 = 10;

/// Length of the deterministic disambiguation suffix
const SUFFIX_LENGTH: usize = 8;

/// Per-session mutable state: one conceptual piece, owned by the engine
///
/// - `log`: append-only record of (original, fake) pairs, in first-time
///   replacement order
/// - `map`: case-sensitive hash of an original substring -> its fake value
/// - `used`: every fake value ever emitted by this instance
#[derive(Debug, Default)]
struct SessionState {
    log: Vec<ReplacementLogEntry>,
    map: HashMap<String, String>,
    used: HashSet<String>,
}

impl SessionState {
    /// Returns the fake value for a matched substring, generating and
    /// recording a new one on first sight
    fn replacement_for(
        &mut self,
        original: &str,
        pass_input: &str,
        produced: &str,
        rule: &CompiledRule,
    ) -> String {
        let lookup_key = hex_hash(original);

        if let Some(existing) = self.map.get(&lookup_key) {
            return existing.clone();
        }

        let fake = self.unique_placeholder(original, pass_input, produced, rule);
        self.map.insert(lookup_key, fake.clone());
        self.log.push(ReplacementLogEntry::sensitive(original, fake.as_str()));
        fake
    }

    /// Generates a fake value that collides with neither earlier fakes nor
    /// the surrounding text
    ///
    /// Regenerates up to [`MAX_GENERATION_ATTEMPTS`] times; if the candidate
    /// still collides, disambiguates deterministically with a suffix derived
    /// from a hash of the original: readable for alphabetic-only candidates,
    /// `_`-separated hex otherwise.
    fn unique_placeholder(
        &mut self,
        original: &str,
        pass_input: &str,
        produced: &str,
        rule: &CompiledRule,
    ) -> String {
        let mut candidate = expression::expand(rule.placeholder());
        let mut attempts = 0;

        while self.used.contains(&candidate)
            || pass_input.contains(candidate.as_str())
            || produced.contains(candidate.as_str())
        {
            candidate = expression::expand(rule.placeholder());
            attempts += 1;
            if attempts >= MAX_GENERATION_ATTEMPTS {
                candidate = if is_letters_only(&candidate) {
                    format!("{candidate}{}", readable_hash(original, SUFFIX_LENGTH))
                } else {
                    format!("{candidate}_{}", &hex_hash(original)[..SUFFIX_LENGTH])
                };
                break;
            }
        }

        self.used.insert(candidate.clone());
        candidate
    }
}

/// A span matched during marking
#[derive(Debug)]
struct SpanMatch {
    start: usize,
    end: usize,
    text: String,
}

/// Rule-driven, reversible masking engine
///
/// Detects sensitive substrings using the rule set supplied at
/// construction, replaces each with a deterministically chosen, collision
/// free synthetic value, and can restore the original text from its
/// in-memory replacement log.
///
/// # Sessions
///
/// One engine instance is one logical session: the same original substring
/// always maps to the same fake value for the instance's lifetime, across
/// repeated [`mask`](Self::mask) calls, and [`unmask`](Self::unmask) only
/// reverses replacements this instance performed. State is never persisted.
///
/// # Concurrency
///
/// Fully synchronous; all state is private to the instance. Concurrent
/// masking of independent texts requires independent engine instances.
pub struct AnonymizationEngine {
    compiled_rules: Vec<CompiledRule>,
    state: SessionState,
}

impl AnonymizationEngine {
    /// Creates an engine for the given ordered rule set
    ///
    /// Rules are compiled up front, so configuration bugs surface here
    /// rather than mid-mask.
    ///
    /// # Errors
    ///
    /// Returns an error if any rule names an unknown smart matcher or its
    /// matcher fails to compile.
    ///
    /// # Examples
    ///
    /// ```
    /// use cloak::anonymization::AnonymizationEngine;
    /// use cloak::domain::Rule;
    ///
    /// let engine = AnonymizationEngine::new(vec![Rule::new("{email}", "{email}")]);
    /// assert!(engine.is_ok());
    ///
    /// let engine = AnonymizationEngine::new(vec![Rule::new("{year}", "1999")]);
    /// assert!(engine.is_err());
    /// ```
    pub fn new(rules: Vec<Rule>) -> Result<Self> {
        let compiled_rules = rules
            .iter()
            .map(CompiledRule::compile)
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(Self {
            compiled_rules,
            state: SessionState::default(),
        })
    }

    /// Masks sensitive data in the given text
    ///
    /// The text is trimmed once, then each rule runs as a full pass over
    /// the previous pass's output; later rules can match placeholders
    /// produced by earlier rules. Ordering-significant composition is
    /// intentional.
    ///
    /// Matches that fail a smart matcher's semantic check are preserved
    /// unchanged. Repeated occurrences of the same original substring
    /// (exact case) reuse the same fake value, including across separate
    /// `mask` calls on this instance.
    ///
    /// # Errors
    ///
    /// Returns an error only if a user-supplied regex exceeds the
    /// backtracking limit during scanning.
    pub fn mask(&mut self, text: &str) -> Result<String> {
        let mut masked = text.trim().to_string();

        let Self {
            compiled_rules,
            state,
        } = self;

        for rule in compiled_rules.iter() {
            masked = Self::apply_rule(rule, state, &masked)?;
        }

        tracing::debug!(replacements = state.log.len(), "Masking pass complete");
        Ok(masked)
    }

    /// One full rule pass: scan, validate, replace
    fn apply_rule(rule: &CompiledRule, state: &mut SessionState, text: &str) -> Result<String> {
        let mut out = String::with_capacity(text.len());
        let mut last_end = 0;

        for found in rule.matcher().find_iter(text) {
            let found =
                found.map_err(|e| CloakError::Pattern(PatternError::Execution(e.to_string())))?;

            out.push_str(&text[last_end..found.start()]);
            let candidate = found.as_str();

            if rule.is_valid(candidate) {
                let fake = state.replacement_for(candidate, text, &out, rule);
                out.push_str(&fake);
            } else {
                tracing::debug!(candidate, "Match not rated sensitive");
                out.push_str(candidate);
            }

            last_end = found.end();
        }
        out.push_str(&text[last_end..]);

        Ok(out)
    }

    /// Restores original text by reversing the logged replacements
    ///
    /// Walks the replacement log newest-first and substitutes every
    /// occurrence of each fake value with its original, so replacements
    /// built on top of earlier placeholders unwind correctly.
    ///
    /// This is a best-effort inverse: text altered outside this engine's
    /// own replacements, or a fake value that coincidentally occurs
    /// elsewhere, cannot be distinguished and will also be reverted.
    pub fn unmask(&self, masked: &str) -> String {
        let mut original = masked.to_string();

        for entry in self.state.log.iter().rev() {
            original = original.replace(&entry.fake, &entry.original);
        }

        original
    }

    /// Annotates sensitive spans without replacing them
    ///
    /// Unlike masking, marking scans all rules against the same unmodified
    /// text in a single pass, so the annotations reflect the original
    /// content rather than intermediate replacements. Overlapping matches
    /// resolve leftmost-first; ties go to the earlier rule. Matched spans
    /// are wrapped in the sentinel tag pair.
    ///
    /// # Errors
    ///
    /// Returns an error only if a user-supplied regex exceeds the
    /// backtracking limit during scanning.
    pub fn mark(&self, text: &str) -> Result<String> {
        let trimmed = text.trim();

        // collect validated matches from every rule against the same text
        let mut matches: Vec<SpanMatch> = Vec::new();
        for rule in &self.compiled_rules {
            for found in rule.matcher().find_iter(trimmed) {
                let found = found
                    .map_err(|e| CloakError::Pattern(PatternError::Execution(e.to_string())))?;
                if rule.is_valid(found.as_str()) {
                    matches.push(SpanMatch {
                        start: found.start(),
                        end: found.end(),
                        text: found.as_str().to_string(),
                    });
                }
            }
        }

        // leftmost-first overlap resolution; stable sort keeps rule order on ties
        matches.sort_by_key(|m| m.start);
        let mut kept: Vec<SpanMatch> = Vec::new();
        let mut last_end = 0;
        for m in matches {
            if m.start >= last_end {
                last_end = m.end;
                kept.push(m);
            }
        }

        // splice in descending start order so earlier offsets stay valid
        let mut marked = trimmed.to_string();
        for m in kept.iter().rev() {
            marked.replace_range(m.start..m.end, &wrap_sensitive(&m.text));
        }

        Ok(marked)
    }

    /// The replacement log recorded so far, oldest first
    pub fn replacement_log(&self) -> &[ReplacementLogEntry] {
        &self.state.log
    }

    /// Number of rules this engine applies
    pub fn rule_count(&self) -> usize {
        self.compiled_rules.len()
    }
}
