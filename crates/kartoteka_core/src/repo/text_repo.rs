//! Text repository contract and SQLite implementation.
//!
//! # Responsibility
//! - CRUD over `texts`, addressed by unique name; the source reference is
//!   optional and may be created inline during add/update.
//!
//! # Invariants
//! - The date validator runs before the source selection resolves, and
//!   both run before the text mutation.
//! - Inline source creation is a nested source add: its failure aborts
//!   the text operation, while its success is an independently committed
//!   write (there is no spanning transaction).

use crate::model::source::SourceSelection;
use crate::model::text::{NewText, TextPatch, TextRecord};
use crate::repo::source_repo::{SourceRepository, SqliteSourceRepository};
use crate::repo::{
    collect_keys, ensure_table, map_constraint_error, resolve_source_id, resolved_or_sentinel,
    RepoResult,
};
use crate::validate::{validate_date, validate_optional_date};
use rusqlite::{params, Connection, Row};

const TEXT_COLUMNS: &[&str] = &["id", "name", "content", "date", "source_id"];

const TEXT_SELECT_SQL: &str = "SELECT
    texts.name,
    texts.content,
    texts.date,
    sources.title AS source_title
FROM texts
LEFT JOIN sources ON texts.source_id = sources.id";

/// Repository interface for text CRUD operations.
pub trait TextRepository {
    fn list_all(&self) -> RepoResult<Vec<TextRecord>>;
    fn list_keys(&self) -> RepoResult<Vec<String>>;
    fn find_by_key(&self, name: &str) -> RepoResult<Option<TextRecord>>;
    fn add(&self, text: &NewText) -> RepoResult<i64>;
    fn update(&self, name: &str, patch: &TextPatch) -> RepoResult<bool>;
    fn delete(&self, name: &str) -> RepoResult<bool>;
}

/// SQLite-backed text repository.
pub struct SqliteTextRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteTextRepository<'conn> {
    /// Constructs a repository after verifying the `texts` table shape.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_table(conn, "texts", TEXT_COLUMNS)?;
        Ok(Self { conn })
    }

    fn resolve_selection(&self, selection: &SourceSelection) -> RepoResult<Option<i64>> {
        match selection {
            SourceSelection::None => Ok(None),
            SourceSelection::Existing(title) => resolve_source_id(self.conn, title).map(Some),
            SourceSelection::Create(source) => {
                let sources = SqliteSourceRepository::try_new(self.conn)?;
                sources.add(source).map(Some)
            }
        }
    }
}

impl TextRepository for SqliteTextRepository<'_> {
    fn list_all(&self) -> RepoResult<Vec<TextRecord>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{TEXT_SELECT_SQL} ORDER BY texts.date;"))?;
        let mut rows = stmt.query([])?;
        let mut records = Vec::new();
        while let Some(row) = rows.next()? {
            records.push(parse_text_row(row)?);
        }
        Ok(records)
    }

    fn list_keys(&self) -> RepoResult<Vec<String>> {
        collect_keys(self.conn, "SELECT name FROM texts ORDER BY name;")
    }

    fn find_by_key(&self, name: &str) -> RepoResult<Option<TextRecord>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{TEXT_SELECT_SQL} WHERE texts.name = ?1;"))?;
        let mut rows = stmt.query([name])?;
        match rows.next()? {
            Some(row) => Ok(Some(parse_text_row(row)?)),
            None => Ok(None),
        }
    }

    fn add(&self, text: &NewText) -> RepoResult<i64> {
        let date = validate_date(&text.date)?;
        let source_id = self.resolve_selection(&text.source)?;
        self.conn
            .execute(
                "INSERT INTO texts (name, content, date, source_id)
                 VALUES (?1, ?2, ?3, ?4);",
                params![
                    text.name.as_str(),
                    text.content.as_deref(),
                    date,
                    source_id,
                ],
            )
            .map_err(|err| map_constraint_error("text", &text.name, err))?;
        Ok(self.conn.last_insert_rowid())
    }

    fn update(&self, name: &str, patch: &TextPatch) -> RepoResult<bool> {
        let date = match patch.date.as_deref() {
            Some(raw) => validate_optional_date(raw)?,
            None => None,
        };
        // `SourceSelection::None` resolves to NULL, which the coalesce
        // ignores: a stored reference cannot be cleared, only re-pointed.
        let source_id = match patch.source.as_ref() {
            Some(selection) => self.resolve_selection(selection)?,
            None => None,
        };
        let changed = self.conn.execute(
            "UPDATE texts
             SET
                content = COALESCE(?1, content),
                date = COALESCE(?2, date),
                source_id = COALESCE(?3, source_id)
             WHERE name = ?4;",
            params![patch.content.as_deref(), date.as_deref(), source_id, name],
        )?;
        Ok(changed > 0)
    }

    fn delete(&self, name: &str) -> RepoResult<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM texts WHERE name = ?1;", [name])?;
        Ok(changed > 0)
    }
}

fn parse_text_row(row: &Row<'_>) -> RepoResult<TextRecord> {
    Ok(TextRecord {
        name: row.get("name")?,
        content: row.get("content")?,
        date: row.get("date")?,
        source: resolved_or_sentinel(row.get("source_title")?),
    })
}
