//! Person records, addressed by unique surname.

use serde::{Deserialize, Serialize};

/// Read model for one person row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonRecord {
    pub surname: String,
    pub name: Option<String>,
    pub patronymic: Option<String>,
    /// ISO `YYYY-MM-DD`, validated on the way in.
    pub date_of_birth: Option<String>,
    pub biography: Option<String>,
}

/// Draft for inserting a new person. The date of birth is the raw operator
/// string; empty means "no value".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewPerson {
    pub surname: String,
    pub name: Option<String>,
    pub patronymic: Option<String>,
    pub date_of_birth: Option<String>,
    pub biography: Option<String>,
}

/// Field-level person update; `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonPatch {
    pub name: Option<String>,
    pub patronymic: Option<String>,
    pub date_of_birth: Option<String>,
    pub biography: Option<String>,
}
