use pretty_assertions::assert_eq;
use strategy_pdf::input::parse_document;
use strategy_pdf::{Error, Section};

#[test]
fn bare_array_takes_the_given_title() {
    let raw = r#"[{"title": "Thesis", "content": "Long banks"}]"#;
    let (title, sections) = parse_document(raw, Some("SX7E".into())).unwrap();
    assert_eq!(title, "SX7E");
    assert_eq!(sections, vec![Section::new("Thesis", "Long banks")]);
}

#[test]
fn document_object_carries_its_own_title() {
    let raw = r#"{
        "title": "Rates Outlook",
        "sections": [
            {"title": "Thesis", "content": "Curve steepens"},
            {"title": "Note", "content": "Call Friday", "isHighlighted": true}
        ]
    }"#;
    let (title, sections) = parse_document(raw, None).unwrap();
    assert_eq!(title, "Rates Outlook");
    assert_eq!(
        sections,
        vec![
            Section::new("Thesis", "Curve steepens"),
            Section::highlighted("Note", "Call Friday"),
        ]
    );
}

#[test]
fn explicit_title_overrides_the_file() {
    let raw = r#"{"title": "From file", "sections": []}"#;
    let (title, sections) = parse_document(raw, Some("From flag".into())).unwrap();
    assert_eq!(title, "From flag");
    assert!(sections.is_empty());
}

#[test]
fn missing_title_is_rejected() {
    let array = r#"[{"title": "Thesis", "content": "x"}]"#;
    assert!(matches!(parse_document(array, None), Err(Error::Input(_))));

    let untitled = r#"{"sections": [{"title": "Thesis", "content": "x"}]}"#;
    assert!(matches!(parse_document(untitled, None), Err(Error::Input(_))));
}

#[test]
fn malformed_json_is_a_json_error() {
    assert!(matches!(parse_document("[{", Some("T".into())), Err(Error::Json(_))));
    assert!(matches!(
        parse_document(r#"{"title": "T"}"#, None),
        Err(Error::Json(_))
    ));
}
