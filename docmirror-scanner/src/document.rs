use crate::error::{MirrorError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::collections::BTreeMap;

/// The parts of a documentation page the traversal cares about.
///
/// Everything else in the body is carried through untouched via [`DecodedDocument`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub identifier: DocumentIdentifier,
    /// Keyed by reference id. A `BTreeMap` so references are followed in key order.
    #[serde(default)]
    pub references: BTreeMap<String, Reference>,
    #[serde(default, rename = "abstract")]
    pub abstract_: Vec<Value>,
    #[serde(default, rename = "topicSections")]
    pub topic_sections: Vec<TopicSection>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DocumentIdentifier {
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Reference {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub identifier: String,
    /// Relative to the API base URL, without the `.json` suffix.
    /// Media references carry no url and are not followed.
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TopicSection {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub identifiers: Vec<String>,
}

/// A fetched body decoded twice over: typed for traversal, raw for output.
#[derive(Debug, Clone)]
pub struct DecodedDocument {
    pub document: Document,
    raw: Value,
}

impl DecodedDocument {
    pub fn decode(url: &str, body: &[u8]) -> Result<Self> {
        let decode_error = |source| MirrorError::DecodeError {
            url: url.to_string(),
            source,
        };

        let raw: Value = serde_json::from_slice(body).map_err(decode_error)?;
        let document = Document::deserialize(&raw).map_err(decode_error)?;
        Ok(Self { document, raw })
    }

    pub fn identifier(&self) -> Option<&str> {
        self.document.identifier.url.as_deref()
    }

    /// The original body re-indented with tabs. Key order is preserved.
    pub fn pretty_body(&self) -> serde_json::Result<Vec<u8>> {
        prettify(&self.raw)
    }
}

pub fn prettify(value: &Value) -> serde_json::Result<Vec<u8>> {
    let mut out = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(b"\t"));
    value.serialize(&mut serializer)?;
    Ok(out)
}
