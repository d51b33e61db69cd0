//! Interaction repository contract and SQLite implementation.
//!
//! # Responsibility
//! - CRUD over `interactions`: documented contacts between a person and a
//!   source, addressed by description.
//!
//! # Invariants
//! - Person and source resolve before the INSERT runs.
//! - Descriptions are not unique; update and delete touch every match.

use crate::model::interaction::{InteractionPatch, InteractionRecord, NewInteraction};
use crate::repo::{
    collect_keys, ensure_table, resolve_person_id, resolve_source_id, resolved_or_sentinel,
    RepoResult,
};
use rusqlite::{params, Connection, Row};

const INTERACTION_COLUMNS: &[&str] = &["id", "description", "person_id", "source_id"];

const INTERACTION_SELECT_SQL: &str = "SELECT
    interactions.description,
    persons.surname AS person_surname,
    sources.title AS source_title
FROM interactions
LEFT JOIN persons ON interactions.person_id = persons.id
LEFT JOIN sources ON interactions.source_id = sources.id";

/// Repository interface for interaction CRUD operations.
pub trait InteractionRepository {
    fn list_all(&self) -> RepoResult<Vec<InteractionRecord>>;
    fn list_keys(&self) -> RepoResult<Vec<String>>;
    fn find_by_key(&self, description: &str) -> RepoResult<Option<InteractionRecord>>;
    fn add(&self, interaction: &NewInteraction) -> RepoResult<i64>;
    fn update(&self, description: &str, patch: &InteractionPatch) -> RepoResult<bool>;
    fn delete(&self, description: &str) -> RepoResult<bool>;
}

/// SQLite-backed interaction repository.
pub struct SqliteInteractionRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteInteractionRepository<'conn> {
    /// Constructs a repository after verifying the `interactions` table shape.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_table(conn, "interactions", INTERACTION_COLUMNS)?;
        Ok(Self { conn })
    }
}

impl InteractionRepository for SqliteInteractionRepository<'_> {
    fn list_all(&self) -> RepoResult<Vec<InteractionRecord>> {
        let mut stmt = self.conn.prepare(&format!(
            "{INTERACTION_SELECT_SQL} ORDER BY interactions.description;"
        ))?;
        let mut rows = stmt.query([])?;
        let mut records = Vec::new();
        while let Some(row) = rows.next()? {
            records.push(parse_interaction_row(row)?);
        }
        Ok(records)
    }

    fn list_keys(&self) -> RepoResult<Vec<String>> {
        collect_keys(
            self.conn,
            "SELECT description FROM interactions
             WHERE description IS NOT NULL
             ORDER BY description;",
        )
    }

    fn find_by_key(&self, description: &str) -> RepoResult<Option<InteractionRecord>> {
        let mut stmt = self.conn.prepare(&format!(
            "{INTERACTION_SELECT_SQL} WHERE interactions.description = ?1;"
        ))?;
        let mut rows = stmt.query([description])?;
        match rows.next()? {
            Some(row) => Ok(Some(parse_interaction_row(row)?)),
            None => Ok(None),
        }
    }

    fn add(&self, interaction: &NewInteraction) -> RepoResult<i64> {
        let person_id = resolve_person_id(self.conn, &interaction.person)?;
        let source_id = resolve_source_id(self.conn, &interaction.source)?;
        self.conn.execute(
            "INSERT INTO interactions (description, person_id, source_id)
             VALUES (?1, ?2, ?3);",
            params![interaction.description.as_deref(), person_id, source_id],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    fn update(&self, description: &str, patch: &InteractionPatch) -> RepoResult<bool> {
        let person_id = match patch.person.as_deref() {
            Some(surname) => Some(resolve_person_id(self.conn, surname)?),
            None => None,
        };
        let source_id = match patch.source.as_deref() {
            Some(title) => Some(resolve_source_id(self.conn, title)?),
            None => None,
        };
        let changed = self.conn.execute(
            "UPDATE interactions
             SET
                description = COALESCE(?1, description),
                person_id = COALESCE(?2, person_id),
                source_id = COALESCE(?3, source_id)
             WHERE description = ?4;",
            params![patch.description.as_deref(), person_id, source_id, description],
        )?;
        Ok(changed > 0)
    }

    fn delete(&self, description: &str) -> RepoResult<bool> {
        let changed = self.conn.execute(
            "DELETE FROM interactions WHERE description = ?1;",
            [description],
        )?;
        Ok(changed > 0)
    }
}

fn parse_interaction_row(row: &Row<'_>) -> RepoResult<InteractionRecord> {
    Ok(InteractionRecord {
        description: row.get("description")?,
        person: resolved_or_sentinel(row.get("person_surname")?),
        source: resolved_or_sentinel(row.get("source_title")?),
    })
}
