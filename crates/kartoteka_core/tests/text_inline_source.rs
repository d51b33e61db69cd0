mod common;

use common::{open_store, seed_source};
use kartoteka_core::{
    NewSource, NewText, RepoError, SourceRepository, SourceSelection, SqliteSourceRepository,
    SqliteTextRepository, TextPatch, TextRepository, REFERENCE_NOT_FOUND,
};

fn draft(name: &str, source: SourceSelection) -> NewText {
    NewText {
        name: name.to_string(),
        content: Some("fragment".to_string()),
        date: "1905-01-22".to_string(),
        source,
    }
}

#[test]
fn add_without_a_source_reads_back_with_the_sentinel() {
    let conn = open_store();
    let repo = SqliteTextRepository::try_new(&conn).unwrap();

    repo.add(&draft("Petition", SourceSelection::None)).unwrap();

    let record = repo.find_by_key("Petition").unwrap().unwrap();
    assert_eq!(record.date, "1905-01-22");
    assert_eq!(record.source, REFERENCE_NOT_FOUND);
}

#[test]
fn add_with_an_existing_source_resolves_it() {
    let conn = open_store();
    seed_source(&conn, "Workers' Gazette");
    let repo = SqliteTextRepository::try_new(&conn).unwrap();

    repo.add(&draft(
        "Petition",
        SourceSelection::Existing("Workers' Gazette".to_string()),
    ))
    .unwrap();

    let record = repo.find_by_key("Petition").unwrap().unwrap();
    assert_eq!(record.source, "Workers' Gazette");
}

#[test]
fn add_with_an_unknown_source_aborts_before_insertion() {
    let conn = open_store();
    let repo = SqliteTextRepository::try_new(&conn).unwrap();

    let err = repo
        .add(&draft(
            "Petition",
            SourceSelection::Existing("Lost Codex".to_string()),
        ))
        .unwrap_err();
    assert!(matches!(err, RepoError::ReferenceNotFound { entity: "source", .. }));
    assert!(repo.list_all().unwrap().is_empty());
}

#[test]
fn inline_creation_inserts_the_source_and_links_it() {
    let conn = open_store();
    let repo = SqliteTextRepository::try_new(&conn).unwrap();

    repo.add(&draft(
        "Petition",
        SourceSelection::Create(NewSource {
            title: "Workers' Gazette".to_string(),
            kind: Some("newspaper".to_string()),
            ..NewSource::default()
        }),
    ))
    .unwrap();

    let record = repo.find_by_key("Petition").unwrap().unwrap();
    assert_eq!(record.source, "Workers' Gazette");

    let sources = SqliteSourceRepository::try_new(&conn).unwrap();
    let created = sources.find_by_key("Workers' Gazette").unwrap().unwrap();
    assert_eq!(created.kind.as_deref(), Some("newspaper"));
}

#[test]
fn inline_duplicate_title_aborts_the_text_insert() {
    let conn = open_store();
    seed_source(&conn, "Workers' Gazette");
    let repo = SqliteTextRepository::try_new(&conn).unwrap();

    let err = repo
        .add(&draft(
            "Petition",
            SourceSelection::Create(NewSource {
                title: "Workers' Gazette".to_string(),
                ..NewSource::default()
            }),
        ))
        .unwrap_err();
    assert!(matches!(err, RepoError::DuplicateKey { entity: "source", .. }));
    assert!(repo.list_all().unwrap().is_empty());
}

#[test]
fn an_inline_source_commit_survives_a_later_text_failure() {
    let conn = open_store();
    let repo = SqliteTextRepository::try_new(&conn).unwrap();

    repo.add(&draft("Petition", SourceSelection::None)).unwrap();

    // Same text name again: the nested source add commits on its own, then
    // the text insert collides.
    let err = repo
        .add(&draft(
            "Petition",
            SourceSelection::Create(NewSource {
                title: "Workers' Gazette".to_string(),
                ..NewSource::default()
            }),
        ))
        .unwrap_err();
    assert!(matches!(err, RepoError::DuplicateKey { entity: "text", .. }));

    let sources = SqliteSourceRepository::try_new(&conn).unwrap();
    assert!(sources.find_by_key("Workers' Gazette").unwrap().is_some());
}

#[test]
fn update_with_the_no_source_choice_keeps_the_stored_reference() {
    let conn = open_store();
    seed_source(&conn, "Workers' Gazette");
    let repo = SqliteTextRepository::try_new(&conn).unwrap();

    repo.add(&draft(
        "Petition",
        SourceSelection::Existing("Workers' Gazette".to_string()),
    ))
    .unwrap();

    let modified = repo
        .update(
            "Petition",
            &TextPatch {
                source: Some(SourceSelection::None),
                ..TextPatch::default()
            },
        )
        .unwrap();
    assert!(modified);

    let record = repo.find_by_key("Petition").unwrap().unwrap();
    assert_eq!(record.source, "Workers' Gazette");
}

#[test]
fn update_can_create_a_source_inline_and_re_point() {
    let conn = open_store();
    seed_source(&conn, "Workers' Gazette");
    let repo = SqliteTextRepository::try_new(&conn).unwrap();

    repo.add(&draft(
        "Petition",
        SourceSelection::Existing("Workers' Gazette".to_string()),
    ))
    .unwrap();

    repo.update(
        "Petition",
        &TextPatch {
            source: Some(SourceSelection::Create(NewSource {
                title: "Senate Records".to_string(),
                ..NewSource::default()
            })),
            ..TextPatch::default()
        },
    )
    .unwrap();

    let record = repo.find_by_key("Petition").unwrap().unwrap();
    assert_eq!(record.source, "Senate Records");
}

#[test]
fn partial_update_keeps_unsupplied_fields() {
    let conn = open_store();
    let repo = SqliteTextRepository::try_new(&conn).unwrap();

    repo.add(&draft("Petition", SourceSelection::None)).unwrap();

    repo.update(
        "Petition",
        &TextPatch {
            content: Some("revised fragment".to_string()),
            ..TextPatch::default()
        },
    )
    .unwrap();

    let record = repo.find_by_key("Petition").unwrap().unwrap();
    assert_eq!(record.content.as_deref(), Some("revised fragment"));
    assert_eq!(record.date, "1905-01-22");
}

#[test]
fn delete_by_name_reports_removal() {
    let conn = open_store();
    let repo = SqliteTextRepository::try_new(&conn).unwrap();

    repo.add(&draft("Petition", SourceSelection::None)).unwrap();

    assert!(repo.delete("Petition").unwrap());
    assert!(repo.find_by_key("Petition").unwrap().is_none());
    assert!(!repo.delete("Petition").unwrap());
}
