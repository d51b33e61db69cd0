//! Core record store for the kartoteka card index.
//! This crate is the single source of truth for validation and
//! referential-integrity rules over the seven record tables.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod select;
pub mod validate;

pub use db::{open_db, open_db_in_memory, DbError, DbResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::coordinate::{CoordinatePatch, CoordinateRecord, NewCoordinate};
pub use model::event::{EventPatch, EventRecord, NewEvent};
pub use model::interaction::{InteractionPatch, InteractionRecord, NewInteraction};
pub use model::person::{NewPerson, PersonPatch, PersonRecord};
pub use model::place::{NewPlace, PlacePatch, PlaceRecord};
pub use model::source::{NewSource, SourcePatch, SourceRecord, SourceSelection};
pub use model::text::{NewText, TextPatch, TextRecord};
pub use model::REFERENCE_NOT_FOUND;
pub use repo::coordinate_repo::{CoordinateRepository, SqliteCoordinateRepository};
pub use repo::event_repo::{EventRepository, SqliteEventRepository};
pub use repo::interaction_repo::{InteractionRepository, SqliteInteractionRepository};
pub use repo::person_repo::{PersonRepository, SqlitePersonRepository};
pub use repo::place_repo::{PlaceRepository, SqlitePlaceRepository};
pub use repo::source_repo::{SourceRepository, SqliteSourceRepository};
pub use repo::text_repo::{SqliteTextRepository, TextRepository};
pub use repo::{RepoError, RepoResult};
pub use select::KeyChoice;
pub use validate::{
    days_in_month, is_leap_year, validate_date, validate_float, validate_optional_date,
    ValidationError,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
