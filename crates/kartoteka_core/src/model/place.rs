//! Place records: named locations pinned to a coordinate and a source.

use serde::{Deserialize, Serialize};

/// Read model for one place row. Latitude/longitude come from the
/// referenced coordinate; both are `None` when that row is dangling.
/// `source` carries the resolved title or the sentinel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceRecord {
    pub name: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub source: String,
}

/// Draft for inserting a new place. `coordinate` and `source` are natural
/// keys of existing rows; both references are required.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewPlace {
    pub name: String,
    pub coordinate: String,
    pub source: String,
}

/// Field-level place update; `None` keeps the stored value. Places may be
/// renamed; supplied references must resolve.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlacePatch {
    pub name: Option<String>,
    pub coordinate: Option<String>,
    pub source: Option<String>,
}
