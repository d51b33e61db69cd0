//! Event records: dated happenings backed by a source.

use serde::{Deserialize, Serialize};

/// Read model for one event row. `source` carries the resolved source
/// title, or the reference-not-found sentinel when the row is dangling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    pub name: String,
    pub date: String,
    pub description: Option<String>,
    pub source: String,
}

/// Draft for inserting a new event. `date` is the raw operator string;
/// `source` is the natural key of an existing source (required).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewEvent {
    pub name: String,
    pub date: String,
    pub description: Option<String>,
    pub source: String,
}

/// Field-level event update; `None` keeps the stored value. A supplied
/// `source` must resolve to an existing source title.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventPatch {
    pub date: Option<String>,
    pub description: Option<String>,
    pub source: Option<String>,
}
