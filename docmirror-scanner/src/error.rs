use crate::identifier::IdentifierError;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors. Any of these aborts the whole run; files already written stay on disk.
#[derive(Error, Debug)]
pub enum MirrorError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Failed to decode document from {url}: {source}")]
    DecodeError {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Document from {url} has no identifier")]
    MissingIdentifier { url: String },

    #[error(transparent)]
    MalformedIdentifier(#[from] IdentifierError),

    #[error("IO error at {}: {source}", .path.display())]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, MirrorError>;
