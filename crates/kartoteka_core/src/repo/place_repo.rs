//! Place repository contract and SQLite implementation.
//!
//! # Responsibility
//! - CRUD over `places`, addressed by unique name; a place requires both
//!   a coordinate and a source at creation.
//!
//! # Invariants
//! - Both references resolve before the INSERT runs; a failed lookup
//!   aborts with `ReferenceNotFound` and writes nothing.
//! - Dangling references keep the row visible: the coordinate side reads
//!   back as `None` latitude/longitude, the source side as the sentinel.

use crate::model::place::{NewPlace, PlacePatch, PlaceRecord};
use crate::repo::{
    collect_keys, ensure_table, map_constraint_error, resolve_coordinate_id, resolve_source_id,
    resolved_or_sentinel, RepoResult,
};
use rusqlite::{params, Connection, Row};

const PLACE_COLUMNS: &[&str] = &["id", "name", "coordinate_id", "source_id"];

const PLACE_SELECT_SQL: &str = "SELECT
    places.name,
    coordinates.latitude AS latitude,
    coordinates.longitude AS longitude,
    sources.title AS source_title
FROM places
LEFT JOIN coordinates ON places.coordinate_id = coordinates.id
LEFT JOIN sources ON places.source_id = sources.id";

/// Repository interface for place CRUD operations.
pub trait PlaceRepository {
    fn list_all(&self) -> RepoResult<Vec<PlaceRecord>>;
    fn list_keys(&self) -> RepoResult<Vec<String>>;
    fn find_by_key(&self, name: &str) -> RepoResult<Option<PlaceRecord>>;
    fn add(&self, place: &NewPlace) -> RepoResult<i64>;
    fn update(&self, name: &str, patch: &PlacePatch) -> RepoResult<bool>;
    fn delete(&self, name: &str) -> RepoResult<bool>;
}

/// SQLite-backed place repository.
pub struct SqlitePlaceRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqlitePlaceRepository<'conn> {
    /// Constructs a repository after verifying the `places` table shape.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_table(conn, "places", PLACE_COLUMNS)?;
        Ok(Self { conn })
    }
}

impl PlaceRepository for SqlitePlaceRepository<'_> {
    fn list_all(&self) -> RepoResult<Vec<PlaceRecord>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{PLACE_SELECT_SQL} ORDER BY places.name;"))?;
        let mut rows = stmt.query([])?;
        let mut records = Vec::new();
        while let Some(row) = rows.next()? {
            records.push(parse_place_row(row)?);
        }
        Ok(records)
    }

    fn list_keys(&self) -> RepoResult<Vec<String>> {
        collect_keys(self.conn, "SELECT name FROM places ORDER BY name;")
    }

    fn find_by_key(&self, name: &str) -> RepoResult<Option<PlaceRecord>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{PLACE_SELECT_SQL} WHERE places.name = ?1;"))?;
        let mut rows = stmt.query([name])?;
        match rows.next()? {
            Some(row) => Ok(Some(parse_place_row(row)?)),
            None => Ok(None),
        }
    }

    fn add(&self, place: &NewPlace) -> RepoResult<i64> {
        let coordinate_id = resolve_coordinate_id(self.conn, &place.coordinate)?;
        let source_id = resolve_source_id(self.conn, &place.source)?;
        self.conn
            .execute(
                "INSERT INTO places (name, coordinate_id, source_id)
                 VALUES (?1, ?2, ?3);",
                params![place.name.as_str(), coordinate_id, source_id],
            )
            .map_err(|err| map_constraint_error("place", &place.name, err))?;
        Ok(self.conn.last_insert_rowid())
    }

    fn update(&self, name: &str, patch: &PlacePatch) -> RepoResult<bool> {
        let coordinate_id = match patch.coordinate.as_deref() {
            Some(coordinate) => Some(resolve_coordinate_id(self.conn, coordinate)?),
            None => None,
        };
        let source_id = match patch.source.as_deref() {
            Some(title) => Some(resolve_source_id(self.conn, title)?),
            None => None,
        };
        let changed = self
            .conn
            .execute(
                "UPDATE places
                 SET
                    name = COALESCE(?1, name),
                    coordinate_id = COALESCE(?2, coordinate_id),
                    source_id = COALESCE(?3, source_id)
                 WHERE name = ?4;",
                params![patch.name.as_deref(), coordinate_id, source_id, name],
            )
            .map_err(|err| {
                map_constraint_error("place", patch.name.as_deref().unwrap_or(name), err)
            })?;
        Ok(changed > 0)
    }

    fn delete(&self, name: &str) -> RepoResult<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM places WHERE name = ?1;", [name])?;
        Ok(changed > 0)
    }
}

fn parse_place_row(row: &Row<'_>) -> RepoResult<PlaceRecord> {
    Ok(PlaceRecord {
        name: row.get("name")?,
        latitude: row.get("latitude")?,
        longitude: row.get("longitude")?,
        source: resolved_or_sentinel(row.get("source_title")?),
    })
}
