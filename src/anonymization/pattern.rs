//! Pattern compilation: turning a rule into matching tools
//!
//! A rule's sensitive-data pattern is one of three kinds, decided in
//! priority order: a smart matcher token (`{email}`), a valid regular
//! expression, or a literal string. Whatever the kind, the final matcher is
//! wrapped in non-word lookaround so matches must sit on word boundaries:
//! `MyFirstName` matches in `!MyFirstName!` but not inside `MyFirstNamei`
//! or `MyFirstName123`.

use crate::domain::{PatternError, Rule};
use fancy_regex::Regex;

// Matcher bodies for the built-in smart matchers.
const EMAIL_PATTERN: &str = r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}";
const IBAN_PATTERN: &str = r"\b[a-zA-Z]{2}[0-9]{2}(?:[ ]?[a-zA-Z0-9]{4}){4}(?:[ ]?[0-9]{1,3})?\b";
const IPV4_PATTERN: &str =
    r"\b((25[0-5]|2[0-4][0-9]|1[0-9]{2}|[1-9]?[0-9])\.){3}(25[0-5]|2[0-4][0-9]|1[0-9]{2}|[1-9]?[0-9])\b";
const CREDIT_CARD_PATTERN: &str = r"\b(?:\d{4}[ -]?){3}\d{4}\b";

/// Built-in smart matchers: named detectors bundling a regex and a validator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmartMatcher {
    /// Email addresses, validated with an RFC-ish syntactic check
    Email,
    /// IBANs
    Iban,
    /// IPv4 addresses
    Ipv4,
    /// Credit card numbers
    CreditCardNumber,
}

impl SmartMatcher {
    /// Resolves a smart matcher name, e.g. the `email` in `{email}`
    ///
    /// An unknown name is a configuration bug in the rule set and fails
    /// compilation outright.
    fn parse(name: &str) -> Result<Self, PatternError> {
        match name {
            "email" => Ok(Self::Email),
            "iban" => Ok(Self::Iban),
            "ipv4" => Ok(Self::Ipv4),
            "creditcardnumber" => Ok(Self::CreditCardNumber),
            _ => Err(PatternError::UnknownSmartMatcher(name.to_string())),
        }
    }

    fn pattern(self) -> &'static str {
        match self {
            Self::Email => EMAIL_PATTERN,
            Self::Iban => IBAN_PATTERN,
            Self::Ipv4 => IPV4_PATTERN,
            Self::CreditCardNumber => CREDIT_CARD_PATTERN,
        }
    }
}

/// How a rule's pattern was interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternKind {
    /// `{name}` smart matcher
    Smart(SmartMatcher),
    /// The pattern string compiled as a regex and is used verbatim
    Regex,
    /// The pattern is matched as an escaped literal
    Literal,
}

/// A rule compiled into its matching tools
///
/// Bundles the word-boundary-wrapped candidate matcher, the validator
/// (implied by [`PatternKind`]) and the rule's placeholder expression. The
/// placeholder stays unevaluated here; the engine expands it per match.
#[derive(Debug)]
pub struct CompiledRule {
    matcher: Regex,
    kind: PatternKind,
    placeholder: String,
}

impl CompiledRule {
    /// Compiles a rule's pattern into matching tools
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::UnknownSmartMatcher`] for `{name}` patterns
    /// naming no built-in matcher, or [`PatternError::Compile`] if the
    /// wrapped matcher fails to compile.
    pub fn compile(rule: &Rule) -> Result<Self, PatternError> {
        let pattern = rule.sensitive_data_pattern.as_str();

        let (body, kind) = if pattern.len() >= 2 && pattern.starts_with('{') && pattern.ends_with('}')
        {
            let smart = SmartMatcher::parse(&pattern[1..pattern.len() - 1])?;
            (smart.pattern().to_string(), PatternKind::Smart(smart))
        } else if Regex::new(pattern).is_ok() {
            (pattern.to_string(), PatternKind::Regex)
        } else {
            (regex::escape(pattern), PatternKind::Literal)
        };

        // (?<!\w) rejects a preceding word character, (?!\w) a following one
        let wrapped = format!(r"(?<!\w)(?:{body})(?!\w)");
        let matcher = Regex::new(&wrapped).map_err(|e| PatternError::Compile {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })?;

        Ok(Self {
            matcher,
            kind,
            placeholder: rule.temporary_placeholder.clone(),
        })
    }

    /// The word-boundary-wrapped candidate matcher
    pub fn matcher(&self) -> &Regex {
        &self.matcher
    }

    /// How the pattern was interpreted
    pub fn kind(&self) -> PatternKind {
        self.kind
    }

    /// The rule's placeholder expression, unevaluated
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Confirms that a candidate match really is sensitive data
    ///
    /// Only the email smart matcher carries a semantic check; every other
    /// kind accepts all candidates the regex produced.
    pub fn is_valid(&self, candidate: &str) -> bool {
        match self.kind {
            PatternKind::Smart(SmartMatcher::Email) => is_rfc_email(candidate),
            _ => true,
        }
    }
}

/// RFC-ish email syntax check
///
/// Deliberately stricter than the candidate regex: exactly one `@`, a local
/// part of permitted characters without leading/trailing/double dots, and a
/// dotted domain whose final label is an alphabetic TLD of length >= 2.
fn is_rfc_email(candidate: &str) -> bool {
    let Some((local, domain)) = candidate.split_once('@') else {
        return false;
    };
    if domain.contains('@') {
        return false;
    }

    if local.is_empty()
        || local.len() > 64
        || local.starts_with('.')
        || local.ends_with('.')
        || local.contains("..")
    {
        return false;
    }
    let local_chars_ok = local.chars().all(|c| {
        c.is_ascii_alphanumeric() || "!#$%&'*+-/=?^_`{|}~.".contains(c)
    });
    if !local_chars_ok {
        return false;
    }

    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return false;
    }
    for label in &labels {
        if label.is_empty() || label.starts_with('-') || label.ends_with('-') {
            return false;
        }
        if !label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return false;
        }
    }
    let tld = labels[labels.len() - 1];
    tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic())
}
