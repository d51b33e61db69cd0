//! Event repository contract and SQLite implementation.
//!
//! # Responsibility
//! - CRUD over `events`, addressed by unique name; every event is backed
//!   by a source resolved at write time.
//!
//! # Invariants
//! - The date validator runs before the source lookup, and both run
//!   before any mutation.
//! - Deleting a source later leaves the event row in place; reads then
//!   carry the reference-not-found sentinel instead of dropping the row.

use crate::model::event::{EventPatch, EventRecord, NewEvent};
use crate::repo::{
    collect_keys, ensure_table, map_constraint_error, resolve_source_id, resolved_or_sentinel,
    RepoResult,
};
use crate::validate::{validate_date, validate_optional_date};
use rusqlite::{params, Connection, Row};

const EVENT_COLUMNS: &[&str] = &["id", "name", "date", "description", "source_id"];

const EVENT_SELECT_SQL: &str = "SELECT
    events.name,
    events.date,
    events.description,
    sources.title AS source_title
FROM events
LEFT JOIN sources ON events.source_id = sources.id";

/// Repository interface for event CRUD operations.
pub trait EventRepository {
    fn list_all(&self) -> RepoResult<Vec<EventRecord>>;
    fn list_keys(&self) -> RepoResult<Vec<String>>;
    fn find_by_key(&self, name: &str) -> RepoResult<Option<EventRecord>>;
    fn add(&self, event: &NewEvent) -> RepoResult<i64>;
    fn update(&self, name: &str, patch: &EventPatch) -> RepoResult<bool>;
    fn delete(&self, name: &str) -> RepoResult<bool>;
}

/// SQLite-backed event repository.
pub struct SqliteEventRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteEventRepository<'conn> {
    /// Constructs a repository after verifying the `events` table shape.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_table(conn, "events", EVENT_COLUMNS)?;
        Ok(Self { conn })
    }
}

impl EventRepository for SqliteEventRepository<'_> {
    fn list_all(&self) -> RepoResult<Vec<EventRecord>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{EVENT_SELECT_SQL} ORDER BY events.date;"))?;
        let mut rows = stmt.query([])?;
        let mut records = Vec::new();
        while let Some(row) = rows.next()? {
            records.push(parse_event_row(row)?);
        }
        Ok(records)
    }

    fn list_keys(&self) -> RepoResult<Vec<String>> {
        collect_keys(self.conn, "SELECT name FROM events ORDER BY name;")
    }

    fn find_by_key(&self, name: &str) -> RepoResult<Option<EventRecord>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{EVENT_SELECT_SQL} WHERE events.name = ?1;"))?;
        let mut rows = stmt.query([name])?;
        match rows.next()? {
            Some(row) => Ok(Some(parse_event_row(row)?)),
            None => Ok(None),
        }
    }

    fn add(&self, event: &NewEvent) -> RepoResult<i64> {
        let date = validate_date(&event.date)?;
        let source_id = resolve_source_id(self.conn, &event.source)?;
        self.conn
            .execute(
                "INSERT INTO events (name, date, description, source_id)
                 VALUES (?1, ?2, ?3, ?4);",
                params![
                    event.name.as_str(),
                    date,
                    event.description.as_deref(),
                    source_id,
                ],
            )
            .map_err(|err| map_constraint_error("event", &event.name, err))?;
        Ok(self.conn.last_insert_rowid())
    }

    fn update(&self, name: &str, patch: &EventPatch) -> RepoResult<bool> {
        let date = match patch.date.as_deref() {
            Some(raw) => validate_optional_date(raw)?,
            None => None,
        };
        let source_id = match patch.source.as_deref() {
            Some(title) => Some(resolve_source_id(self.conn, title)?),
            None => None,
        };
        let changed = self.conn.execute(
            "UPDATE events
             SET
                date = COALESCE(?1, date),
                description = COALESCE(?2, description),
                source_id = COALESCE(?3, source_id)
             WHERE name = ?4;",
            params![date.as_deref(), patch.description.as_deref(), source_id, name],
        )?;
        Ok(changed > 0)
    }

    fn delete(&self, name: &str) -> RepoResult<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM events WHERE name = ?1;", [name])?;
        Ok(changed > 0)
    }
}

fn parse_event_row(row: &Row<'_>) -> RepoResult<EventRecord> {
    Ok(EventRecord {
        name: row.get("name")?,
        date: row.get("date")?,
        description: row.get("description")?,
        source: resolved_or_sentinel(row.get("source_title")?),
    })
}
