//! Placeholder expression evaluation
//!
//! Placeholder strings may embed smart expressions in curly braces, e.g.
//! `{date(1990,2000,'YYYY-MM-DD')}` or `My id is {word(12)}`. This module
//! expands every such span into a concrete synthetic value and leaves
//! everything else untouched.
//!
//! Unknown expression names do not raise errors: they degrade to a visible
//! `{ERROR: Unknown expression '…'}` marker so a single bad rule cannot
//! abort a whole masking run.

pub mod generators;

use regex::Regex;
use std::sync::OnceLock;

/// A parsed expression argument: a quoted string or a bare integer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Arg {
    /// Double- or single-quoted string argument
    Str(String),
    /// Bare integer argument
    Int(i64),
}

fn span_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\{([^{}]+)\}").expect("span regex is valid"))
}

fn call_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(\w+)(\((.*?)\))?$").expect("call regex is valid"))
}

fn arg_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#""([^"]*)"|'([^']*)'|(\d+)"#).expect("arg regex is valid"))
}

/// Expands every non-nested `{…}` span in the input
///
/// Each span is parsed as `name` or `name(args)` and dispatched to a
/// generator. A span whose content is not a function call is replaced by
/// its trimmed content; text outside braces passes through unchanged.
///
/// # Examples
///
/// ```
/// use cloak::anonymization::expression::expand;
///
/// let expanded = expand("born on {date(1990,2000)}");
/// assert!(expanded.starts_with("born on 19") || expanded.starts_with("born on 20"));
///
/// // no expressions, nothing happens
/// assert_eq!(expand("Max Mustermann"), "Max Mustermann");
/// ```
pub fn expand(input: &str) -> String {
    span_regex()
        .replace_all(input, |caps: &regex::Captures<'_>| {
            evaluate_expression(&caps[1])
        })
        .into_owned()
}

/// Evaluates the inner text of a single `{…}` span
fn evaluate_expression(expression: &str) -> String {
    let expression = expression.trim();

    if let Some(caps) = call_regex().captures(expression) {
        let name = &caps[1];
        let raw_args = caps.get(3).map_or("", |m| m.as_str());
        return dispatch(name, &parse_args(raw_args));
    }

    // not a recognized function call, keep the content as a literal
    expression.to_string()
}

/// Parses an argument list, tolerating free-form separators
///
/// Recognizes double-quoted strings, single-quoted strings and bare
/// integers; anything else is dropped silently.
fn parse_args(raw: &str) -> Vec<Arg> {
    let mut args = Vec::new();

    for caps in arg_regex().captures_iter(raw) {
        if let Some(m) = caps.get(1) {
            args.push(Arg::Str(m.as_str().trim().to_string()));
        } else if let Some(m) = caps.get(2) {
            args.push(Arg::Str(m.as_str().trim().to_string()));
        } else if let Some(m) = caps.get(3) {
            if let Ok(value) = m.as_str().parse::<i64>() {
                args.push(Arg::Int(value));
            }
        }
    }

    args.retain(|arg| !matches!(arg, Arg::Str(s) if s.is_empty()));
    args
}

/// Dispatches an expression name (case-insensitive) to its generator
fn dispatch(name: &str, args: &[Arg]) -> String {
    match name.to_lowercase().as_str() {
        "loremipsum" => generators::lorem_ipsum(),
        "city" => generators::random_city(),
        "date" => generators::random_date(args),
        "futuredate" => generators::random_future_date(args),
        "pastdate" => generators::random_past_date(args),
        "iso2" => generators::random_iso2(),
        "iso3" => generators::random_iso3(),
        "number" => generators::random_number(args),
        "phonenumber" => generators::random_phone_number(),
        "word" | "id" | "token" | "key" | "value" => generators::readable_random_string(args),
        "ipv4" => generators::random_ipv4(),
        "email" => generators::random_email(args),
        "currency" => generators::random_currency(),
        "price" => generators::random_price(args),
        "creditcardnumber" => generators::credit_card_number(args),
        "cvc" => generators::cvc(),
        "iban" => generators::iban(args),
        unknown => {
            tracing::warn!(expression = unknown, "Unknown expression encountered");
            format!("{{ERROR: Unknown expression '{unknown}'}}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_leaves_plain_text_untouched() {
        assert_eq!(expand("Max Mustermann"), "Max Mustermann");
        assert_eq!(expand(""), "");
    }

    #[test]
    fn test_expand_strips_braces_from_non_calls() {
        assert_eq!(expand("{not a function}"), "not a function");
    }

    #[test]
    fn test_expand_unknown_expression_marker() {
        assert_eq!(
            expand("{frobnicate}"),
            "{ERROR: Unknown expression 'frobnicate'}"
        );
    }

    #[test]
    fn test_expand_case_insensitive_dispatch() {
        let value = expand("{NUMBER(5,5)}");
        assert_eq!(value, "5");
    }

    #[test]
    fn test_expand_embedded_in_text() {
        let value = expand("the answer is {number(7,7)}!");
        assert_eq!(value, "the answer is 7!");
    }

    #[test]
    fn test_expand_multiple_spans() {
        let value = expand("{number(1,1)}-{number(2,2)}");
        assert_eq!(value, "1-2");
    }

    #[test]
    fn test_expand_call_without_parens() {
        let value = expand("{cvc}");
        assert_eq!(value.len(), 3);
        assert!(value.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_parse_args_mixed() {
        let args = parse_args("1990, 2000, 'YYYY-MM-DD'");
        assert_eq!(
            args,
            vec![
                Arg::Int(1990),
                Arg::Int(2000),
                Arg::Str("YYYY-MM-DD".to_string())
            ]
        );
    }

    #[test]
    fn test_parse_args_double_quotes() {
        let args = parse_args(r#""USD""#);
        assert_eq!(args, vec![Arg::Str("USD".to_string())]);
    }

    #[test]
    fn test_parse_args_drops_garbage() {
        let args = parse_args("foo, %, 12");
        assert_eq!(args, vec![Arg::Int(12)]);
    }

    #[test]
    fn test_parse_args_drops_empty_strings() {
        let args = parse_args("'', \"\", 3");
        assert_eq!(args, vec![Arg::Int(3)]);
    }

    #[test]
    fn test_parse_args_empty() {
        assert!(parse_args("").is_empty());
    }

    #[test]
    fn test_word_aliases_dispatch() {
        for alias in ["word", "id", "token", "key", "value"] {
            let value = expand(&format!("{{{alias}(6)}}"));
            assert_eq!(value.chars().count(), 6, "alias {alias} length mismatch");
        }
    }
}
