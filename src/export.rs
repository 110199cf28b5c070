//! Builds the section list for a strategy export: the user's own inputs
//! first, then one section per analysis entry.

use crate::model::Section;

/// What the user entered when creating the strategy.
#[derive(Clone, Debug, Default, serde::Deserialize)]
pub struct StrategyInput {
    pub strategy_text: String,
    pub position_text: String,
    pub target: String,
}

/// Turn an analysis key such as `risk_assessment` into `Risk Assessment`.
pub fn title_from_key(key: &str) -> String {
    key.replace('_', " ")
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Sections in export order. `analysis` keeps the caller's ordering;
/// `notes` are appended as highlighted sections.
pub fn strategy_sections(
    input: &StrategyInput,
    analysis: &[(String, String)],
    notes: &[(String, String)],
) -> Vec<Section> {
    let mut sections = vec![
        Section::new("Strategy Thesis", input.strategy_text.as_str()),
        Section::new("Target Outlook", input.position_text.as_str()),
        Section::new("Price Target", input.target.as_str()),
    ];
    sections.extend(
        analysis
            .iter()
            .map(|(key, content)| Section::new(title_from_key(key), content.as_str())),
    );
    sections.extend(
        notes
            .iter()
            .map(|(title, content)| Section::highlighted(title.as_str(), content.as_str())),
    );
    sections
}
