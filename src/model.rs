use serde::Deserialize;

/// One titled block of text to render. `content` may contain `\n`, each of
/// which forces a line break before wrapping.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub title: String,
    pub content: String,
    #[serde(default, alias = "isCustom")]
    pub is_highlighted: bool,
}

impl Section {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Section {
            title: title.into(),
            content: content.into(),
            is_highlighted: false,
        }
    }

    /// A section rendered inside the note box.
    pub fn highlighted(title: impl Into<String>, content: impl Into<String>) -> Self {
        Section {
            is_highlighted: true,
            ..Section::new(title, content)
        }
    }
}

/// DeviceRGB color with components in 0.0..=1.0.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgb(pub f32, pub f32, pub f32);
