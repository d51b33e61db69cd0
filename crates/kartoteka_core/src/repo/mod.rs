//! Repository layer: one contract plus SQLite implementation per entity.
//!
//! # Responsibility
//! - Define CRUD contracts addressed by natural keys.
//! - Keep SQL details inside the persistence boundary.
//! - Share the error taxonomy and foreign-key resolution helpers.
//!
//! # Invariants
//! - Write paths validate operator input before any SQL mutation.
//! - Required references resolve before the enclosing INSERT/UPDATE runs.
//! - Missing rows are semantic results (`None`, `false`), not errors.
//! - Repositories never print; display text belongs to the shell.

use crate::db::DbError;
use crate::model::REFERENCE_NOT_FOUND;
use crate::validate::ValidationError;
use rusqlite::Connection;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod coordinate_repo;
pub mod event_repo;
pub mod interaction_repo;
pub mod person_repo;
pub mod place_repo;
pub mod source_repo;
pub mod text_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error taxonomy the shell can branch on.
#[derive(Debug)]
pub enum RepoError {
    /// Malformed operator input; nothing was written.
    Validation(ValidationError),
    /// A selected related entity does not resolve to an existing row.
    ReferenceNotFound { entity: &'static str, key: String },
    /// An insert (or rename) collided with a natural-key uniqueness rule.
    DuplicateKey { entity: &'static str, key: String },
    /// Connection readiness failures at repository construction.
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
    /// Any other backing-store failure, underlying message preserved.
    Db(DbError),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::ReferenceNotFound { entity, key } => {
                write!(f, "referenced {entity} not found: `{key}`")
            }
            Self::DuplicateKey { entity, key } => {
                write!(f, "{entity} with key `{key}` already exists")
            }
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` is missing from the database")
            }
            Self::MissingRequiredColumn { table, column } => {
                write!(
                    f,
                    "required column `{table}.{column}` is missing from the database"
                )
            }
            Self::Db(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValidationError> for RepoError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Maps a constraint violation on a natural key to `DuplicateKey`; every
/// other failure passes through as a store error.
pub(crate) fn map_constraint_error(
    entity: &'static str,
    key: &str,
    err: rusqlite::Error,
) -> RepoError {
    match err {
        rusqlite::Error::SqliteFailure(failure, _)
            if failure.code == rusqlite::ErrorCode::ConstraintViolation =>
        {
            RepoError::DuplicateKey {
                entity,
                key: key.to_string(),
            }
        }
        other => other.into(),
    }
}

/// Verifies a required table and its columns exist on this connection.
pub(crate) fn ensure_table(
    conn: &Connection,
    table: &'static str,
    columns: &[&'static str],
) -> RepoResult<()> {
    if !table_exists(conn, table)? {
        return Err(RepoError::MissingRequiredTable(table));
    }

    for &column in columns {
        if !table_has_column(conn, table, column)? {
            return Err(RepoError::MissingRequiredColumn { table, column });
        }
    }

    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> RepoResult<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let current: String = row.get(1)?;
        if current == column {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Collects one ordered key column, the listing the selection protocol
/// resolves indices against.
pub(crate) fn collect_keys(conn: &Connection, sql: &str) -> RepoResult<Vec<String>> {
    let mut stmt = conn.prepare(sql)?;
    let mut rows = stmt.query([])?;
    let mut keys = Vec::new();
    while let Some(row) = rows.next()? {
        keys.push(row.get(0)?);
    }
    Ok(keys)
}

/// Resolves a source title to its rowid or aborts with `ReferenceNotFound`.
pub(crate) fn resolve_source_id(conn: &Connection, title: &str) -> RepoResult<i64> {
    lookup_id(conn, "SELECT id FROM sources WHERE title = ?1;", "source", title)
}

/// Resolves a coordinate name to its rowid or aborts with `ReferenceNotFound`.
pub(crate) fn resolve_coordinate_id(conn: &Connection, name: &str) -> RepoResult<i64> {
    lookup_id(
        conn,
        "SELECT id FROM coordinates WHERE name = ?1;",
        "coordinate",
        name,
    )
}

/// Resolves a person surname to its rowid or aborts with `ReferenceNotFound`.
pub(crate) fn resolve_person_id(conn: &Connection, surname: &str) -> RepoResult<i64> {
    lookup_id(
        conn,
        "SELECT id FROM persons WHERE surname = ?1;",
        "person",
        surname,
    )
}

fn lookup_id(
    conn: &Connection,
    sql: &str,
    entity: &'static str,
    key: &str,
) -> RepoResult<i64> {
    let mut stmt = conn.prepare(sql)?;
    let mut rows = stmt.query([key])?;
    match rows.next()? {
        Some(row) => Ok(row.get(0)?),
        None => Err(RepoError::ReferenceNotFound {
            entity,
            key: key.to_string(),
        }),
    }
}

/// Display value for a resolved reference, or the sentinel when dangling.
pub(crate) fn resolved_or_sentinel(value: Option<String>) -> String {
    value.unwrap_or_else(|| REFERENCE_NOT_FOUND.to_string())
}
