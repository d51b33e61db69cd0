//! Coordinate records: named or anonymous latitude/longitude pairs.

use serde::{Deserialize, Serialize};

/// Read model for one coordinate row. Only named rows are addressable
/// through the selection protocol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoordinateRecord {
    pub latitude: f64,
    pub longitude: f64,
    pub name: Option<String>,
}

/// Draft for inserting a coordinate pair. Latitude and longitude arrive as
/// raw operator strings and are validated by the repository.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewCoordinate {
    pub latitude: String,
    pub longitude: String,
    pub name: Option<String>,
}

/// Field-level coordinate update; `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoordinatePatch {
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub name: Option<String>,
}
