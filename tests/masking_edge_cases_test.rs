//! Edge cases: collisions with existing text, long inputs, rule-order
//! composition and round-trip behavior

use cloak::anonymization::AnonymizationEngine;
use cloak::domain::Rule;

fn test_rules() -> Vec<Rule> {
    vec![
        Rule::new("MyFirstName", "Max"),
        Rule::new("MyLastName", "Mustermann"),
        Rule::new("MyTopSecretProjectName", "Project Phoenix"),
        Rule::new("{email}", "{email}"),
    ]
}

fn engine() -> AnonymizationEngine {
    AnonymizationEngine::new(test_rules()).expect("test rules must compile")
}

#[test]
fn test_long_string_with_many_occurrences() {
    let original = format!(
        "{}{}{}",
        "MyFirstName ".repeat(1000),
        "MyLastName ".repeat(100),
        "MyCountry ".repeat(10)
    );
    let mut engine = engine();
    let masked = engine.mask(&original).unwrap();

    assert!(!masked.contains("MyFirstName"));
    assert!(!masked.contains("MyLastName"));
    assert!(masked.contains("MyCountry"));
    // one log entry per distinct original, not per occurrence
    assert_eq!(engine.replacement_log().len(), 2);
    assert_eq!(engine.unmask(&masked), original.trim());
}

#[test]
fn test_placeholder_colliding_with_text_is_disambiguated() {
    let original = "MyFirstName MyLastName is a friend of Max.";
    let mut engine = engine();
    let masked = engine.mask(original).unwrap();

    // "Max" appears in the source, so the first rule's fake value gets a
    // readable suffix while the literal "Max." stays untouched
    assert!(masked.ends_with("Mustermann is a friend of Max."));
    let fake = &engine.replacement_log()[0].fake;
    assert_ne!(fake, "Max");
    assert!(fake.starts_with("Max"));
    assert_eq!(fake.len(), 11);
    assert!(masked.starts_with(fake.as_str()));

    assert_eq!(engine.unmask(&masked), original);
}

#[test]
fn test_both_placeholders_colliding_are_disambiguated() {
    let original = "MyFirstName MyLastName is a friend of Max Mustermann.";
    let mut engine = engine();
    let masked = engine.mask(original).unwrap();

    assert!(masked.ends_with("is a friend of Max Mustermann."));
    let first_fake = &engine.replacement_log()[0].fake;
    let second_fake = &engine.replacement_log()[1].fake;
    assert!(first_fake.starts_with("Max") && first_fake.len() > 3);
    assert!(second_fake.starts_with("Mustermann") && second_fake.len() > 10);

    assert_eq!(engine.unmask(&masked), original);
}

#[test]
fn test_disambiguation_is_deterministic() {
    let original = "MyFirstName is a friend of Max.";
    let mut first_engine = engine();
    let mut second_engine = engine();
    let first = first_engine.mask(original).unwrap();
    let second = second_engine.mask(original).unwrap();
    // the suffix derives from a hash of the original, not from randomness
    assert_eq!(first, second);
}

#[test]
fn test_string_with_all_rule_kinds() {
    let original =
        "MyFirstName MyLastName born in 1990, email: MyEmail@secret.com, phone: MyMobilePhoneNumber";
    let mut engine = engine();
    let masked = engine.mask(original).unwrap();

    assert!(!masked.contains("MyFirstName"));
    assert!(!masked.contains("MyLastName"));
    assert!(masked.contains("1990"));
    assert!(!masked.contains("MyEmail@secret.com"));
    assert!(masked.contains("MyMobilePhoneNumber"));
    assert_eq!(engine.unmask(&masked), original.trim());
}

#[test]
fn test_multiple_emails_get_distinct_fakes() {
    let original =
        "Contact us at info@example.com or support@example.com. Call +491634567890 or +499876543210";
    let mut engine = engine();
    let masked = engine.mask(original).unwrap();

    assert!(!masked.contains("info@example.com"));
    assert!(!masked.contains("support@example.com"));
    assert!(masked.contains("+491634567890"));
    assert!(masked.contains("+499876543210"));

    assert_eq!(engine.replacement_log().len(), 2);
    let first_fake = &engine.replacement_log()[0].fake;
    let second_fake = &engine.replacement_log()[1].fake;
    assert_ne!(first_fake, second_fake);

    assert_eq!(engine.unmask(&masked), original.trim());
}

#[test]
fn test_mixed_sensitive_and_placeholder_text() {
    let original = "MyFirstName is Max and MyLastName is Mustermann.";
    let mut engine = engine();
    let masked = engine.mask(original).unwrap();
    // "Max" and "Mustermann" already occur, so the fakes must differ
    assert_ne!(masked, "Max is Max and Mustermann is Mustermann.");
    assert_eq!(engine.unmask(&masked), original);
}

#[test]
fn test_rule_order_composition() {
    // rule 1 rewrites the name, rule 2 independently re-randomizes the email
    let rules = vec![
        Rule::new("Marten Solbeck", "Max Mustermann"),
        Rule::new("{email}", "{email}"),
    ];
    let mut engine = AnonymizationEngine::new(rules).unwrap();
    let original = "Marten Solbeck, m@x.com";
    let masked = engine.mask(original).unwrap();

    assert!(masked.starts_with("Max Mustermann, "));
    assert!(!masked.contains("m@x.com"));
    assert_eq!(engine.replacement_log().len(), 2);
    assert_eq!(engine.unmask(&masked), original);
}

#[test]
fn test_later_rule_can_match_earlier_placeholder() {
    // the first rule emits an email placeholder, the second rule masks it
    // again: sequential composition is ordering-significant by design
    let rules = vec![
        Rule::new("CONTACT", "m@x.com"),
        Rule::new("{email}", "{email}"),
    ];
    let mut engine = AnonymizationEngine::new(rules).unwrap();
    let original = "reach me at CONTACT";
    let masked = engine.mask(original).unwrap();

    assert!(!masked.contains("CONTACT"));
    assert!(!masked.contains("m@x.com"));
    // unwinding the log in reverse order restores the original text
    assert_eq!(engine.unmask(&masked), original);
}

#[test]
fn test_session_state_spans_mask_calls() {
    let mut engine = engine();
    let first = engine.mask("MyFirstName").unwrap();
    let second = engine.mask("once more: MyFirstName").unwrap();
    assert_eq!(second, format!("once more: {first}"));
}

#[test]
fn test_roundtrip_across_assorted_inputs() {
    let inputs = [
        "",
        "no sensitive data at all",
        "MyFirstName",
        "  MyFirstName MyLastName  ",
        "MyEmail@secret.com and MyEmail@secret.com",
        "MyFirstName!MyLastName?MyTopSecretProjectName",
        "Max Mustermann already here, MyFirstName too",
    ];

    for original in inputs {
        let mut engine = engine();
        let masked = engine.mask(original).unwrap();
        assert_eq!(
            engine.unmask(&masked),
            original.trim(),
            "round trip failed for {original:?}"
        );
    }
}
