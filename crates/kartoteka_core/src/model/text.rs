//! Text records: dated writings with an optional source.

use crate::model::source::SourceSelection;
use serde::{Deserialize, Serialize};

/// Read model for one text row. `source` carries the resolved source
/// title, or the reference-not-found sentinel when absent or dangling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextRecord {
    pub name: String,
    pub content: Option<String>,
    pub date: String,
    pub source: String,
}

/// Draft for inserting a new text. The source choice may create a brand
/// new source inline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewText {
    pub name: String,
    pub content: Option<String>,
    pub date: String,
    pub source: SourceSelection,
}

/// Field-level text update; `None` keeps the stored value. Selecting
/// `SourceSelection::None` also keeps the stored reference: the merge is
/// a coalesce, so "no source" cannot be reinstated once set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextPatch {
    pub content: Option<String>,
    pub date: Option<String>,
    pub source: Option<SourceSelection>,
}
