//! JSON document descriptions accepted by the command-line tool.

use serde::Deserialize;

use crate::error::Error;
use crate::model::Section;

/// Either a bare array of sections or an object carrying a title too.
#[derive(Deserialize)]
#[serde(untagged)]
enum InputFile {
    Sections(Vec<Section>),
    Document {
        title: Option<String>,
        sections: Vec<Section>,
    },
}

/// Parse `raw` into a title and its sections. `title_override` wins over a
/// title found in the file; with neither, the input is rejected.
pub fn parse_document(raw: &str, title_override: Option<String>) -> Result<(String, Vec<Section>), Error> {
    let (file_title, sections) = match serde_json::from_str::<InputFile>(raw)? {
        InputFile::Sections(sections) => (None, sections),
        InputFile::Document { title, sections } => (title, sections),
    };
    let title = title_override
        .or(file_title)
        .ok_or_else(|| Error::Input("no title given in the input file or with --title".into()))?;
    log::debug!("parsed \"{title}\" with {} sections", sections.len());
    Ok((title, sections))
}
