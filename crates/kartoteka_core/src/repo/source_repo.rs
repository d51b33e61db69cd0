//! Source repository contract and SQLite implementation.
//!
//! # Responsibility
//! - CRUD over `sources`, addressed by unique title.
//! - Supply rowids for the entities that reference a source.
//!
//! # Invariants
//! - `update` merges by coalesce; the title itself is never rewritten.
//! - Uniqueness violations surface as `DuplicateKey`, not store errors.

use crate::model::source::{NewSource, SourcePatch, SourceRecord};
use crate::repo::{collect_keys, ensure_table, map_constraint_error, RepoResult};
use rusqlite::{params, Connection, Row};

const SOURCE_COLUMNS: &[&str] = &["id", "title", "type", "link", "content", "contributor"];

/// Repository interface for source CRUD operations.
pub trait SourceRepository {
    fn list_all(&self) -> RepoResult<Vec<SourceRecord>>;
    fn list_keys(&self) -> RepoResult<Vec<String>>;
    fn find_by_key(&self, title: &str) -> RepoResult<Option<SourceRecord>>;
    fn add(&self, source: &NewSource) -> RepoResult<i64>;
    fn update(&self, title: &str, patch: &SourcePatch) -> RepoResult<bool>;
    fn delete(&self, title: &str) -> RepoResult<bool>;
}

/// SQLite-backed source repository.
pub struct SqliteSourceRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteSourceRepository<'conn> {
    /// Constructs a repository after verifying the `sources` table shape.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_table(conn, "sources", SOURCE_COLUMNS)?;
        Ok(Self { conn })
    }
}

impl SourceRepository for SqliteSourceRepository<'_> {
    fn list_all(&self) -> RepoResult<Vec<SourceRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT title, type, link, content, contributor
             FROM sources
             ORDER BY title;",
        )?;
        let mut rows = stmt.query([])?;
        let mut records = Vec::new();
        while let Some(row) = rows.next()? {
            records.push(parse_source_row(row)?);
        }
        Ok(records)
    }

    fn list_keys(&self) -> RepoResult<Vec<String>> {
        collect_keys(self.conn, "SELECT title FROM sources ORDER BY title;")
    }

    fn find_by_key(&self, title: &str) -> RepoResult<Option<SourceRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT title, type, link, content, contributor
             FROM sources
             WHERE title = ?1;",
        )?;
        let mut rows = stmt.query([title])?;
        match rows.next()? {
            Some(row) => Ok(Some(parse_source_row(row)?)),
            None => Ok(None),
        }
    }

    fn add(&self, source: &NewSource) -> RepoResult<i64> {
        self.conn
            .execute(
                "INSERT INTO sources (title, type, link, content, contributor)
                 VALUES (?1, ?2, ?3, ?4, ?5);",
                params![
                    source.title.as_str(),
                    source.kind.as_deref(),
                    source.link.as_deref(),
                    source.content.as_deref(),
                    source.contributor.as_deref(),
                ],
            )
            .map_err(|err| map_constraint_error("source", &source.title, err))?;
        Ok(self.conn.last_insert_rowid())
    }

    fn update(&self, title: &str, patch: &SourcePatch) -> RepoResult<bool> {
        let changed = self.conn.execute(
            "UPDATE sources
             SET
                type = COALESCE(?1, type),
                link = COALESCE(?2, link),
                content = COALESCE(?3, content),
                contributor = COALESCE(?4, contributor)
             WHERE title = ?5;",
            params![
                patch.kind.as_deref(),
                patch.link.as_deref(),
                patch.content.as_deref(),
                patch.contributor.as_deref(),
                title,
            ],
        )?;
        Ok(changed > 0)
    }

    fn delete(&self, title: &str) -> RepoResult<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM sources WHERE title = ?1;", [title])?;
        Ok(changed > 0)
    }
}

fn parse_source_row(row: &Row<'_>) -> RepoResult<SourceRecord> {
    Ok(SourceRecord {
        title: row.get("title")?,
        kind: row.get("type")?,
        link: row.get("link")?,
        content: row.get("content")?,
        contributor: row.get("contributor")?,
    })
}
