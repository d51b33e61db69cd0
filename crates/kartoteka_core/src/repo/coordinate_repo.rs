//! Coordinate repository contract and SQLite implementation.
//!
//! # Responsibility
//! - CRUD over `coordinates`; latitude/longitude arrive as raw operator
//!   strings and are validated here before any mutation.
//!
//! # Invariants
//! - Only named rows participate in key listing and lookup; anonymous
//!   pairs are reachable through `list_all` alone.
//! - `update` may rename; a rename collision surfaces as `DuplicateKey`.

use crate::model::coordinate::{CoordinatePatch, CoordinateRecord, NewCoordinate};
use crate::repo::{collect_keys, ensure_table, map_constraint_error, RepoResult};
use crate::validate::validate_float;
use rusqlite::{params, Connection, Row};

const COORDINATE_COLUMNS: &[&str] = &["id", "latitude", "longitude", "name"];

/// Repository interface for coordinate CRUD operations.
pub trait CoordinateRepository {
    fn list_all(&self) -> RepoResult<Vec<CoordinateRecord>>;
    fn list_keys(&self) -> RepoResult<Vec<String>>;
    fn find_by_key(&self, name: &str) -> RepoResult<Option<CoordinateRecord>>;
    fn add(&self, coordinate: &NewCoordinate) -> RepoResult<i64>;
    fn update(&self, name: &str, patch: &CoordinatePatch) -> RepoResult<bool>;
    fn delete(&self, name: &str) -> RepoResult<bool>;
}

/// SQLite-backed coordinate repository.
pub struct SqliteCoordinateRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteCoordinateRepository<'conn> {
    /// Constructs a repository after verifying the `coordinates` table shape.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_table(conn, "coordinates", COORDINATE_COLUMNS)?;
        Ok(Self { conn })
    }
}

impl CoordinateRepository for SqliteCoordinateRepository<'_> {
    fn list_all(&self) -> RepoResult<Vec<CoordinateRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT latitude, longitude, name
             FROM coordinates
             ORDER BY latitude;",
        )?;
        let mut rows = stmt.query([])?;
        let mut records = Vec::new();
        while let Some(row) = rows.next()? {
            records.push(parse_coordinate_row(row)?);
        }
        Ok(records)
    }

    fn list_keys(&self) -> RepoResult<Vec<String>> {
        collect_keys(
            self.conn,
            "SELECT name FROM coordinates WHERE name IS NOT NULL ORDER BY name;",
        )
    }

    fn find_by_key(&self, name: &str) -> RepoResult<Option<CoordinateRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT latitude, longitude, name
             FROM coordinates
             WHERE name = ?1;",
        )?;
        let mut rows = stmt.query([name])?;
        match rows.next()? {
            Some(row) => Ok(Some(parse_coordinate_row(row)?)),
            None => Ok(None),
        }
    }

    fn add(&self, coordinate: &NewCoordinate) -> RepoResult<i64> {
        let latitude = validate_float("latitude", &coordinate.latitude)?;
        let longitude = validate_float("longitude", &coordinate.longitude)?;
        let key = coordinate
            .name
            .clone()
            .unwrap_or_else(|| format!("{latitude}, {longitude}"));
        self.conn
            .execute(
                "INSERT INTO coordinates (latitude, longitude, name)
                 VALUES (?1, ?2, ?3);",
                params![latitude, longitude, coordinate.name.as_deref()],
            )
            .map_err(|err| map_constraint_error("coordinate", &key, err))?;
        Ok(self.conn.last_insert_rowid())
    }

    fn update(&self, name: &str, patch: &CoordinatePatch) -> RepoResult<bool> {
        let latitude = match patch.latitude.as_deref() {
            Some(raw) => Some(validate_float("latitude", raw)?),
            None => None,
        };
        let longitude = match patch.longitude.as_deref() {
            Some(raw) => Some(validate_float("longitude", raw)?),
            None => None,
        };
        let changed = self
            .conn
            .execute(
                "UPDATE coordinates
                 SET
                    latitude = COALESCE(?1, latitude),
                    longitude = COALESCE(?2, longitude),
                    name = COALESCE(?3, name)
                 WHERE name = ?4;",
                params![latitude, longitude, patch.name.as_deref(), name],
            )
            .map_err(|err| {
                map_constraint_error("coordinate", patch.name.as_deref().unwrap_or(name), err)
            })?;
        Ok(changed > 0)
    }

    fn delete(&self, name: &str) -> RepoResult<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM coordinates WHERE name = ?1;", [name])?;
        Ok(changed > 0)
    }
}

fn parse_coordinate_row(row: &Row<'_>) -> RepoResult<CoordinateRecord> {
    Ok(CoordinateRecord {
        latitude: row.get("latitude")?,
        longitude: row.get("longitude")?,
        name: row.get("name")?,
    })
}
