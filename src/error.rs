use thiserror::Error;

/// Errors surfaced by document generation. A failed render produces no output.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The logo bytes could not be decoded as a PNG or JPEG image.
    #[error("logo could not be decoded: {0}")]
    Logo(String),

    /// A well-formed input document is missing a required field, such as the title.
    #[error("invalid input: {0}")]
    Input(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
