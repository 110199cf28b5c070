mod common;

use pretty_assertions::assert_eq;
use strategy_pdf::Section;
use strategy_pdf::export::{StrategyInput, strategy_sections, title_from_key};

#[test]
fn analysis_keys_become_titles() {
    assert_eq!(title_from_key("risk_assessment"), "Risk Assessment");
    assert_eq!(title_from_key("price_target_range"), "Price Target Range");
    assert_eq!(title_from_key("summary"), "Summary");
    assert_eq!(title_from_key(""), "");
}

#[test]
fn export_orders_inputs_then_analysis_then_notes() {
    let input = StrategyInput {
        strategy_text: "Long European banks".into(),
        position_text: "Outperform over 12 months".into(),
        target: "+15%".into(),
    };
    let analysis = vec![
        ("market_context".to_string(), "Rates are peaking.".to_string()),
        ("risks".to_string(), "Credit losses.".to_string()),
    ];
    let notes = vec![("Client note".to_string(), "Discussed on call.".to_string())];

    let sections = strategy_sections(&input, &analysis, &notes);
    let titles: Vec<&str> = sections.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Strategy Thesis",
            "Target Outlook",
            "Price Target",
            "Market Context",
            "Risks",
            "Client note",
        ]
    );
    assert_eq!(sections[2], Section::new("Price Target", "+15%"));
    assert!(sections[..5].iter().all(|s| !s.is_highlighted));
    assert!(sections[5].is_highlighted);

    let doc = common::layout("SX7E", &sections);
    assert_eq!(doc.page_count(), 1);
    assert_eq!(common::count_text(&doc, "Market Context"), 1);
}

#[test]
fn sections_deserialize_from_camel_case_json() {
    let json = r#"[
        {"title": "Thesis", "content": "Body"},
        {"title": "Note", "content": "Mine", "isHighlighted": true},
        {"title": "Legacy", "content": "Old", "isCustom": true}
    ]"#;
    let sections: Vec<Section> = serde_json::from_str(json).unwrap();
    assert_eq!(
        sections,
        vec![
            Section::new("Thesis", "Body"),
            Section::highlighted("Note", "Mine"),
            Section::highlighted("Legacy", "Old"),
        ]
    );
}
