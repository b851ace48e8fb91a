//! Marking behavior: non-destructive annotation and segment parsing

use cloak::anonymization::{split_sensitive_segments, AnonymizationEngine};
use cloak::domain::Rule;

fn test_rules() -> Vec<Rule> {
    vec![
        Rule::new("MyFirstName", "Max"),
        Rule::new("MyLastName", "Mustermann"),
        Rule::new("{email}", "{email}"),
    ]
}

fn engine() -> AnonymizationEngine {
    AnonymizationEngine::new(test_rules()).expect("test rules must compile")
}

#[test]
fn test_mark_single_match() {
    let marked = engine().mark("MyFirstName is here").unwrap();
    assert_eq!(marked, "<sensitive>MyFirstName</sensitive> is here");
}

#[test]
fn test_mark_preserves_original_after_tag_removal() {
    let original = "MyFirstName is here";
    let marked = engine().mark(original).unwrap();
    let stripped = marked.replace("<sensitive>", "").replace("</sensitive>", "");
    assert_eq!(stripped, original);
}

#[test]
fn test_mark_multiple_rules() {
    let marked = engine().mark("MyFirstName knows MyLastName").unwrap();
    assert_eq!(
        marked,
        "<sensitive>MyFirstName</sensitive> knows <sensitive>MyLastName</sensitive>"
    );
}

#[test]
fn test_mark_scans_original_text_not_masked_text() {
    // marking never substitutes, so smart matchers see the original email
    let marked = engine().mark("mail: john.doe@example.com.").unwrap();
    assert_eq!(
        marked,
        "mail: <sensitive>john.doe@example.com</sensitive>."
    );
}

#[test]
fn test_mark_skips_invalid_smart_candidates() {
    let marked = engine().mark("mail: user..name@example.com").unwrap();
    assert_eq!(marked, "mail: user..name@example.com");
}

#[test]
fn test_mark_trims_input() {
    let marked = engine().mark("  MyFirstName  ").unwrap();
    assert_eq!(marked, "<sensitive>MyFirstName</sensitive>");
}

#[test]
fn test_mark_no_matches() {
    let marked = engine().mark("nothing to see").unwrap();
    assert_eq!(marked, "nothing to see");
}

#[test]
fn test_mark_repeated_occurrences() {
    let marked = engine().mark("MyFirstName and MyFirstName").unwrap();
    assert_eq!(
        marked,
        "<sensitive>MyFirstName</sensitive> and <sensitive>MyFirstName</sensitive>"
    );
}

#[test]
fn test_mark_overlapping_matches_keep_leftmost() {
    let rules = vec![Rule::new("alpha beta", "x"), Rule::new("beta gamma", "y")];
    let engine = AnonymizationEngine::new(rules).unwrap();
    let marked = engine.mark("alpha beta gamma").unwrap();
    assert_eq!(marked, "<sensitive>alpha beta</sensitive> gamma");
}

#[test]
fn test_mark_tie_goes_to_earlier_rule() {
    let rules = vec![Rule::new("alpha beta", "x"), Rule::new("alpha", "y")];
    let engine = AnonymizationEngine::new(rules).unwrap();
    let marked = engine.mark("alpha beta").unwrap();
    assert_eq!(marked, "<sensitive>alpha beta</sensitive>");
}

#[test]
fn test_segments_from_marked_text() {
    let marked = engine().mark("MyFirstName knows MyLastName").unwrap();
    let segments = split_sensitive_segments(&marked);

    let flags: Vec<bool> = segments.iter().map(|s| s.sensitive).collect();
    assert_eq!(flags, vec![true, false, true]);
    assert_eq!(segments[0].text, "MyFirstName");
    assert_eq!(segments[1].text, " knows ");
    assert_eq!(segments[2].text, "MyLastName");
}

#[test]
fn test_segments_reassemble_to_original() {
    let original = "MyFirstName knows MyLastName and john.doe@example.com";
    let marked = engine().mark(original).unwrap();
    let joined: String = split_sensitive_segments(&marked)
        .iter()
        .map(|s| s.text.as_str())
        .collect();
    assert_eq!(joined, original);
}

#[test]
fn test_segments_trailing_text_is_plain() {
    let segments = split_sensitive_segments("<sensitive>a</sensitive> trailing");
    assert_eq!(segments.len(), 2);
    assert!(!segments[1].sensitive);
    assert_eq!(segments[1].text, " trailing");
}
