//! Shared fixtures: the reference schema and seeded rows.
//!
//! The schema is owned by the database file in production; tests create it
//! here so repositories have something to verify against.

#![allow(dead_code)]

use kartoteka_core::{
    open_db_in_memory, CoordinateRepository, NewCoordinate, NewPerson, NewSource,
    PersonRepository, SourceRepository, SqliteCoordinateRepository, SqlitePersonRepository,
    SqliteSourceRepository,
};
use rusqlite::Connection;

pub const SCHEMA: &str = "
CREATE TABLE sources (
    id INTEGER PRIMARY KEY,
    title TEXT NOT NULL UNIQUE,
    type TEXT,
    link TEXT,
    content TEXT,
    contributor TEXT
);
CREATE TABLE coordinates (
    id INTEGER PRIMARY KEY,
    latitude REAL NOT NULL,
    longitude REAL NOT NULL,
    name TEXT UNIQUE
);
CREATE TABLE persons (
    id INTEGER PRIMARY KEY,
    surname TEXT NOT NULL UNIQUE,
    name TEXT,
    patronymic TEXT,
    date_of_birth TEXT,
    biography TEXT
);
CREATE TABLE events (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL UNIQUE,
    date TEXT NOT NULL,
    description TEXT,
    source_id INTEGER NOT NULL
);
CREATE TABLE texts (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL UNIQUE,
    content TEXT,
    date TEXT NOT NULL,
    source_id INTEGER
);
CREATE TABLE places (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL UNIQUE,
    coordinate_id INTEGER NOT NULL,
    source_id INTEGER NOT NULL
);
CREATE TABLE interactions (
    id INTEGER PRIMARY KEY,
    description TEXT,
    person_id INTEGER NOT NULL,
    source_id INTEGER NOT NULL
);
";

/// Opens an in-memory store carrying the reference schema.
pub fn open_store() -> Connection {
    let conn = open_db_in_memory().expect("open in-memory store");
    conn.execute_batch(SCHEMA).expect("load reference schema");
    conn
}

pub fn seed_source(conn: &Connection, title: &str) -> i64 {
    let repo = SqliteSourceRepository::try_new(conn).expect("sources table ready");
    repo.add(&NewSource {
        title: title.to_string(),
        kind: Some("chronicle".to_string()),
        ..NewSource::default()
    })
    .expect("insert source")
}

pub fn seed_coordinate(conn: &Connection, name: &str, latitude: &str, longitude: &str) -> i64 {
    let repo = SqliteCoordinateRepository::try_new(conn).expect("coordinates table ready");
    repo.add(&NewCoordinate {
        latitude: latitude.to_string(),
        longitude: longitude.to_string(),
        name: Some(name.to_string()),
    })
    .expect("insert coordinate")
}

pub fn seed_person(conn: &Connection, surname: &str) -> i64 {
    let repo = SqlitePersonRepository::try_new(conn).expect("persons table ready");
    repo.add(&NewPerson {
        surname: surname.to_string(),
        name: Some("Nikolai".to_string()),
        ..NewPerson::default()
    })
    .expect("insert person")
}
