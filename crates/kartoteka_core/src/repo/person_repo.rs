//! Person repository contract and SQLite implementation.
//!
//! # Responsibility
//! - CRUD over `persons`, addressed by unique surname.
//!
//! # Invariants
//! - A supplied date of birth passes the date validator before any
//!   mutation; empty input is "no value", not an error.

use crate::model::person::{NewPerson, PersonPatch, PersonRecord};
use crate::repo::{collect_keys, ensure_table, map_constraint_error, RepoResult};
use crate::validate::validate_optional_date;
use rusqlite::{params, Connection, Row};

const PERSON_COLUMNS: &[&str] = &[
    "id",
    "surname",
    "name",
    "patronymic",
    "date_of_birth",
    "biography",
];

/// Repository interface for person CRUD operations.
pub trait PersonRepository {
    fn list_all(&self) -> RepoResult<Vec<PersonRecord>>;
    fn list_keys(&self) -> RepoResult<Vec<String>>;
    fn find_by_key(&self, surname: &str) -> RepoResult<Option<PersonRecord>>;
    fn add(&self, person: &NewPerson) -> RepoResult<i64>;
    fn update(&self, surname: &str, patch: &PersonPatch) -> RepoResult<bool>;
    fn delete(&self, surname: &str) -> RepoResult<bool>;
}

/// SQLite-backed person repository.
pub struct SqlitePersonRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqlitePersonRepository<'conn> {
    /// Constructs a repository after verifying the `persons` table shape.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_table(conn, "persons", PERSON_COLUMNS)?;
        Ok(Self { conn })
    }
}

impl PersonRepository for SqlitePersonRepository<'_> {
    fn list_all(&self) -> RepoResult<Vec<PersonRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT surname, name, patronymic, date_of_birth, biography
             FROM persons
             ORDER BY surname;",
        )?;
        let mut rows = stmt.query([])?;
        let mut records = Vec::new();
        while let Some(row) = rows.next()? {
            records.push(parse_person_row(row)?);
        }
        Ok(records)
    }

    fn list_keys(&self) -> RepoResult<Vec<String>> {
        collect_keys(self.conn, "SELECT surname FROM persons ORDER BY surname;")
    }

    fn find_by_key(&self, surname: &str) -> RepoResult<Option<PersonRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT surname, name, patronymic, date_of_birth, biography
             FROM persons
             WHERE surname = ?1;",
        )?;
        let mut rows = stmt.query([surname])?;
        match rows.next()? {
            Some(row) => Ok(Some(parse_person_row(row)?)),
            None => Ok(None),
        }
    }

    fn add(&self, person: &NewPerson) -> RepoResult<i64> {
        let date_of_birth = match person.date_of_birth.as_deref() {
            Some(raw) => validate_optional_date(raw)?,
            None => None,
        };
        self.conn
            .execute(
                "INSERT INTO persons (surname, name, patronymic, date_of_birth, biography)
                 VALUES (?1, ?2, ?3, ?4, ?5);",
                params![
                    person.surname.as_str(),
                    person.name.as_deref(),
                    person.patronymic.as_deref(),
                    date_of_birth.as_deref(),
                    person.biography.as_deref(),
                ],
            )
            .map_err(|err| map_constraint_error("person", &person.surname, err))?;
        Ok(self.conn.last_insert_rowid())
    }

    fn update(&self, surname: &str, patch: &PersonPatch) -> RepoResult<bool> {
        let date_of_birth = match patch.date_of_birth.as_deref() {
            Some(raw) => validate_optional_date(raw)?,
            None => None,
        };
        let changed = self.conn.execute(
            "UPDATE persons
             SET
                name = COALESCE(?1, name),
                patronymic = COALESCE(?2, patronymic),
                date_of_birth = COALESCE(?3, date_of_birth),
                biography = COALESCE(?4, biography)
             WHERE surname = ?5;",
            params![
                patch.name.as_deref(),
                patch.patronymic.as_deref(),
                date_of_birth.as_deref(),
                patch.biography.as_deref(),
                surname,
            ],
        )?;
        Ok(changed > 0)
    }

    fn delete(&self, surname: &str) -> RepoResult<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM persons WHERE surname = ?1;", [surname])?;
        Ok(changed > 0)
    }
}

fn parse_person_row(row: &Row<'_>) -> RepoResult<PersonRecord> {
    Ok(PersonRecord {
        surname: row.get("surname")?,
        name: row.get("name")?,
        patronymic: row.get("patronymic")?,
        date_of_birth: row.get("date_of_birth")?,
        biography: row.get("biography")?,
    })
}
