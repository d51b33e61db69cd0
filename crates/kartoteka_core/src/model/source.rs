//! Source records: the bibliographic origins other entities reference.

use serde::{Deserialize, Serialize};

/// Read model for one source row, addressed by its unique title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRecord {
    pub title: String,
    /// Serialized as `type` to match the storage column.
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub link: Option<String>,
    pub content: Option<String>,
    pub contributor: Option<String>,
}

/// Draft for inserting a new source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewSource {
    pub title: String,
    pub kind: Option<String>,
    pub link: Option<String>,
    pub content: Option<String>,
    pub contributor: Option<String>,
}

/// Field-level source update; `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourcePatch {
    pub kind: Option<String>,
    pub link: Option<String>,
    pub content: Option<String>,
    pub contributor: Option<String>,
}

/// How a text points at its source: nothing, an existing row by natural
/// key, or a brand-new source created inline during the text operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SourceSelection {
    #[default]
    None,
    Existing(String),
    Create(NewSource),
}
