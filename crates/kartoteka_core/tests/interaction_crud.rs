mod common;

use common::{open_store, seed_person, seed_source};
use kartoteka_core::{
    InteractionPatch, InteractionRepository, NewInteraction, PersonRepository, RepoError,
    SqliteInteractionRepository, SqlitePersonRepository, REFERENCE_NOT_FOUND,
};

fn draft(description: &str, person: &str, source: &str) -> NewInteraction {
    NewInteraction {
        description: Some(description.to_string()),
        person: person.to_string(),
        source: source.to_string(),
    }
}

#[test]
fn add_resolves_person_and_source() {
    let conn = open_store();
    seed_person(&conn, "Volkov");
    seed_source(&conn, "Diary of 1899");
    let repo = SqliteInteractionRepository::try_new(&conn).unwrap();

    repo.add(&draft("Met in Tver", "Volkov", "Diary of 1899"))
        .unwrap();

    let record = repo.find_by_key("Met in Tver").unwrap().unwrap();
    assert_eq!(record.person, "Volkov");
    assert_eq!(record.source, "Diary of 1899");
}

#[test]
fn add_with_unknown_person_aborts_before_insertion() {
    let conn = open_store();
    seed_source(&conn, "Diary of 1899");
    let repo = SqliteInteractionRepository::try_new(&conn).unwrap();

    let err = repo
        .add(&draft("Met in Tver", "Volkov", "Diary of 1899"))
        .unwrap_err();
    assert!(matches!(
        err,
        RepoError::ReferenceNotFound {
            entity: "person",
            ref key
        } if key == "Volkov"
    ));
    assert!(repo.list_all().unwrap().is_empty());
}

#[test]
fn deleting_the_person_leaves_a_sentinel_not_a_missing_row() {
    let conn = open_store();
    seed_person(&conn, "Volkov");
    seed_source(&conn, "Diary of 1899");
    let repo = SqliteInteractionRepository::try_new(&conn).unwrap();

    repo.add(&draft("Met in Tver", "Volkov", "Diary of 1899"))
        .unwrap();

    let persons = SqlitePersonRepository::try_new(&conn).unwrap();
    assert!(persons.delete("Volkov").unwrap());

    let records = repo.list_all().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].person, REFERENCE_NOT_FOUND);
    assert_eq!(records[0].source, "Diary of 1899");
}

#[test]
fn update_re_points_the_person_reference() {
    let conn = open_store();
    seed_person(&conn, "Volkov");
    seed_person(&conn, "Orlova");
    seed_source(&conn, "Diary of 1899");
    let repo = SqliteInteractionRepository::try_new(&conn).unwrap();

    repo.add(&draft("Met in Tver", "Volkov", "Diary of 1899"))
        .unwrap();

    let modified = repo
        .update(
            "Met in Tver",
            &InteractionPatch {
                person: Some("Orlova".to_string()),
                ..InteractionPatch::default()
            },
        )
        .unwrap();
    assert!(modified);

    let record = repo.find_by_key("Met in Tver").unwrap().unwrap();
    assert_eq!(record.person, "Orlova");
    assert_eq!(record.source, "Diary of 1899");
}

#[test]
fn update_with_unknown_source_aborts_and_keeps_the_row() {
    let conn = open_store();
    seed_person(&conn, "Volkov");
    seed_source(&conn, "Diary of 1899");
    let repo = SqliteInteractionRepository::try_new(&conn).unwrap();

    repo.add(&draft("Met in Tver", "Volkov", "Diary of 1899"))
        .unwrap();

    let err = repo
        .update(
            "Met in Tver",
            &InteractionPatch {
                source: Some("Lost Codex".to_string()),
                ..InteractionPatch::default()
            },
        )
        .unwrap_err();
    assert!(matches!(err, RepoError::ReferenceNotFound { entity: "source", .. }));

    let record = repo.find_by_key("Met in Tver").unwrap().unwrap();
    assert_eq!(record.source, "Diary of 1899");
}

#[test]
fn delete_by_description_removes_every_match() {
    let conn = open_store();
    seed_person(&conn, "Volkov");
    seed_source(&conn, "Diary of 1899");
    let repo = SqliteInteractionRepository::try_new(&conn).unwrap();

    repo.add(&draft("Met in Tver", "Volkov", "Diary of 1899"))
        .unwrap();
    repo.add(&draft("Met in Tver", "Volkov", "Diary of 1899"))
        .unwrap();

    assert!(repo.delete("Met in Tver").unwrap());
    assert!(repo.list_all().unwrap().is_empty());
    assert!(!repo.delete("Met in Tver").unwrap());
}

#[test]
fn key_listing_excludes_undescribed_interactions() {
    let conn = open_store();
    seed_person(&conn, "Volkov");
    seed_source(&conn, "Diary of 1899");
    let repo = SqliteInteractionRepository::try_new(&conn).unwrap();

    repo.add(&NewInteraction {
        description: None,
        person: "Volkov".to_string(),
        source: "Diary of 1899".to_string(),
    })
    .unwrap();
    repo.add(&draft("Met in Tver", "Volkov", "Diary of 1899"))
        .unwrap();

    assert_eq!(repo.list_keys().unwrap(), ["Met in Tver"]);
    assert_eq!(repo.list_all().unwrap().len(), 2);
}
