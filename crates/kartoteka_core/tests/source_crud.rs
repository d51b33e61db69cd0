mod common;

use common::open_store;
use kartoteka_core::{
    NewSource, RepoError, SourcePatch, SourceRepository, SqliteSourceRepository,
};
use rusqlite::Connection;

#[test]
fn add_then_find_round_trips_every_field() {
    let conn = open_store();
    let repo = SqliteSourceRepository::try_new(&conn).unwrap();

    let source = NewSource {
        title: "Primary Chronicle".to_string(),
        kind: Some("manuscript".to_string()),
        link: Some("https://example.org/pvl".to_string()),
        content: Some("Tale of Bygone Years".to_string()),
        contributor: Some("Karamzin".to_string()),
    };
    repo.add(&source).unwrap();

    let record = repo.find_by_key("Primary Chronicle").unwrap().unwrap();
    assert_eq!(record.title, source.title);
    assert_eq!(record.kind, source.kind);
    assert_eq!(record.link, source.link);
    assert_eq!(record.content, source.content);
    assert_eq!(record.contributor, source.contributor);
}

#[test]
fn find_by_key_returns_none_for_unknown_title() {
    let conn = open_store();
    let repo = SqliteSourceRepository::try_new(&conn).unwrap();

    assert!(repo.find_by_key("Lost Codex").unwrap().is_none());
}

#[test]
fn duplicate_title_is_reported_distinctly() {
    let conn = open_store();
    let repo = SqliteSourceRepository::try_new(&conn).unwrap();

    repo.add(&NewSource {
        title: "Annals".to_string(),
        ..NewSource::default()
    })
    .unwrap();

    let err = repo
        .add(&NewSource {
            title: "Annals".to_string(),
            ..NewSource::default()
        })
        .unwrap_err();
    assert!(matches!(
        err,
        RepoError::DuplicateKey {
            entity: "source",
            ref key
        } if key == "Annals"
    ));
}

#[test]
fn partial_update_keeps_unsupplied_fields() {
    let conn = open_store();
    let repo = SqliteSourceRepository::try_new(&conn).unwrap();

    repo.add(&NewSource {
        title: "Letters".to_string(),
        kind: Some("correspondence".to_string()),
        link: Some("https://example.org/letters".to_string()),
        content: None,
        contributor: Some("Soloviev".to_string()),
    })
    .unwrap();

    let modified = repo
        .update(
            "Letters",
            &SourcePatch {
                link: Some("https://archive.example.org/letters".to_string()),
                ..SourcePatch::default()
            },
        )
        .unwrap();
    assert!(modified);

    let record = repo.find_by_key("Letters").unwrap().unwrap();
    assert_eq!(record.kind.as_deref(), Some("correspondence"));
    assert_eq!(
        record.link.as_deref(),
        Some("https://archive.example.org/letters")
    );
    assert_eq!(record.content, None);
    assert_eq!(record.contributor.as_deref(), Some("Soloviev"));
}

#[test]
fn update_unknown_title_reports_nothing_modified() {
    let conn = open_store();
    let repo = SqliteSourceRepository::try_new(&conn).unwrap();

    let modified = repo
        .update(
            "Lost Codex",
            &SourcePatch {
                kind: Some("myth".to_string()),
                ..SourcePatch::default()
            },
        )
        .unwrap();
    assert!(!modified);
}

#[test]
fn delete_removes_the_row_and_missing_keys_are_not_errors() {
    let conn = open_store();
    let repo = SqliteSourceRepository::try_new(&conn).unwrap();

    repo.add(&NewSource {
        title: "Annals".to_string(),
        ..NewSource::default()
    })
    .unwrap();

    assert!(repo.delete("Annals").unwrap());
    assert!(repo.find_by_key("Annals").unwrap().is_none());
    assert!(!repo.delete("Annals").unwrap());
}

#[test]
fn listing_is_ordered_by_title() {
    let conn = open_store();
    let repo = SqliteSourceRepository::try_new(&conn).unwrap();

    for title in ["Letters", "Annals", "Chronicle"] {
        repo.add(&NewSource {
            title: title.to_string(),
            ..NewSource::default()
        })
        .unwrap();
    }

    let titles: Vec<_> = repo
        .list_all()
        .unwrap()
        .into_iter()
        .map(|record| record.title)
        .collect();
    assert_eq!(titles, ["Annals", "Chronicle", "Letters"]);
    assert_eq!(repo.list_keys().unwrap(), titles);
}

#[test]
fn repository_rejects_connection_without_sources_table() {
    let conn = Connection::open_in_memory().unwrap();

    let result = SqliteSourceRepository::try_new(&conn);
    assert!(matches!(
        result,
        Err(RepoError::MissingRequiredTable("sources"))
    ));
}

#[test]
fn repository_rejects_connection_missing_required_column() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(
        "CREATE TABLE sources (
            id INTEGER PRIMARY KEY,
            title TEXT NOT NULL UNIQUE,
            type TEXT,
            link TEXT,
            content TEXT
        );",
    )
    .unwrap();

    let result = SqliteSourceRepository::try_new(&conn);
    assert!(matches!(
        result,
        Err(RepoError::MissingRequiredColumn {
            table: "sources",
            column: "contributor"
        })
    ));
}
