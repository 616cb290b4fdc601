//! Maps opaque document identifiers (`doc://A/B/C`) onto output file locations.

use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DOC_SCHEME: &str = "doc://";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("malformed identifier: {identifier:?}")]
pub struct IdentifierError {
    pub identifier: String,
}

/// Where a document lands, relative to the output root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocPath {
    /// Every segment but the last. Empty for single-segment identifiers.
    pub directory: PathBuf,
    pub file_name: String,
}

impl DocPath {
    /// `<directory>/<file_name>.json`, relative to the output root.
    pub fn relative_file(&self) -> PathBuf {
        self.directory.join(format!("{}.json", self.file_name))
    }

    pub fn file_path(&self, root: &Path) -> PathBuf {
        root.join(self.relative_file())
    }
}

/// Split `doc://<segments>/<leaf>` into a directory and a leaf name.
///
/// One trailing slash is tolerated. Empty, `.` and `..` segments are rejected
/// so that no identifier can point outside the output root.
pub fn parse_identifier(identifier: &str) -> Result<DocPath, IdentifierError> {
    let malformed = || IdentifierError {
        identifier: identifier.to_string(),
    };

    let rest = identifier.strip_prefix(DOC_SCHEME).ok_or_else(malformed)?;
    let rest = rest.strip_suffix('/').unwrap_or(rest);
    if rest.is_empty() {
        return Err(malformed());
    }

    let segments: Vec<&str> = rest.split('/').collect();
    if segments
        .iter()
        .any(|s| s.is_empty() || *s == "." || *s == "..")
    {
        return Err(malformed());
    }

    let (leaf, parents) = segments.split_last().ok_or_else(malformed)?;
    Ok(DocPath {
        directory: parents.iter().collect(),
        file_name: leaf.to_string(),
    })
}
