//! Interaction records: a person's documented contact, backed by a source.

use serde::{Deserialize, Serialize};

/// Read model for one interaction row. `person` and `source` carry the
/// resolved surname/title, or the sentinel when dangling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionRecord {
    pub description: Option<String>,
    pub person: String,
    pub source: String,
}

/// Draft for inserting a new interaction. `person` and `source` are
/// natural keys of existing rows; both references are required.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewInteraction {
    pub description: Option<String>,
    pub person: String,
    pub source: String,
}

/// Field-level interaction update; `None` keeps the stored value.
/// Descriptions are not unique, so an update touches every match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InteractionPatch {
    pub description: Option<String>,
    pub person: Option<String>,
    pub source: Option<String>,
}
