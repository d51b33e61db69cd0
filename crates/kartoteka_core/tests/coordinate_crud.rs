mod common;

use common::open_store;
use kartoteka_core::{
    CoordinatePatch, CoordinateRepository, NewCoordinate, RepoError, SqliteCoordinateRepository,
    ValidationError,
};

#[test]
fn add_rejects_non_numeric_input_and_writes_nothing() {
    let conn = open_store();
    let repo = SqliteCoordinateRepository::try_new(&conn).unwrap();

    let err = repo
        .add(&NewCoordinate {
            latitude: "north".to_string(),
            longitude: "37.6173".to_string(),
            name: Some("Moscow".to_string()),
        })
        .unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(ValidationError::NotNumeric {
            field: "latitude",
            ..
        })
    ));
    assert!(repo.list_all().unwrap().is_empty());
}

#[test]
fn add_then_find_round_trips_the_parsed_pair() {
    let conn = open_store();
    let repo = SqliteCoordinateRepository::try_new(&conn).unwrap();

    repo.add(&NewCoordinate {
        latitude: "55.7558".to_string(),
        longitude: "37.6173".to_string(),
        name: Some("Moscow".to_string()),
    })
    .unwrap();

    let record = repo.find_by_key("Moscow").unwrap().unwrap();
    assert_eq!(record.latitude, 55.7558);
    assert_eq!(record.longitude, 37.6173);
    assert_eq!(record.name.as_deref(), Some("Moscow"));
}

#[test]
fn key_listing_excludes_anonymous_pairs() {
    let conn = open_store();
    let repo = SqliteCoordinateRepository::try_new(&conn).unwrap();

    repo.add(&NewCoordinate {
        latitude: "59.9343".to_string(),
        longitude: "30.3351".to_string(),
        name: Some("Petersburg".to_string()),
    })
    .unwrap();
    repo.add(&NewCoordinate {
        latitude: "0".to_string(),
        longitude: "0".to_string(),
        name: None,
    })
    .unwrap();

    assert_eq!(repo.list_keys().unwrap(), ["Petersburg"]);
    assert_eq!(repo.list_all().unwrap().len(), 2);
}

#[test]
fn listing_is_ordered_by_latitude() {
    let conn = open_store();
    let repo = SqliteCoordinateRepository::try_new(&conn).unwrap();

    repo.add(&NewCoordinate {
        latitude: "59.9343".to_string(),
        longitude: "30.3351".to_string(),
        name: Some("Petersburg".to_string()),
    })
    .unwrap();
    repo.add(&NewCoordinate {
        latitude: "55.7558".to_string(),
        longitude: "37.6173".to_string(),
        name: Some("Moscow".to_string()),
    })
    .unwrap();

    let names: Vec<_> = repo
        .list_all()
        .unwrap()
        .into_iter()
        .map(|record| record.name)
        .collect();
    assert_eq!(
        names,
        [Some("Moscow".to_string()), Some("Petersburg".to_string())]
    );
}

#[test]
fn partial_update_keeps_unsupplied_fields_and_validates_supplied_ones() {
    let conn = open_store();
    let repo = SqliteCoordinateRepository::try_new(&conn).unwrap();

    repo.add(&NewCoordinate {
        latitude: "55.7558".to_string(),
        longitude: "37.6173".to_string(),
        name: Some("Moscow".to_string()),
    })
    .unwrap();

    let err = repo
        .update(
            "Moscow",
            &CoordinatePatch {
                longitude: Some("east".to_string()),
                ..CoordinatePatch::default()
            },
        )
        .unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));

    let modified = repo
        .update(
            "Moscow",
            &CoordinatePatch {
                longitude: Some("37.62".to_string()),
                ..CoordinatePatch::default()
            },
        )
        .unwrap();
    assert!(modified);

    let record = repo.find_by_key("Moscow").unwrap().unwrap();
    assert_eq!(record.latitude, 55.7558);
    assert_eq!(record.longitude, 37.62);
}

#[test]
fn rename_moves_the_natural_key() {
    let conn = open_store();
    let repo = SqliteCoordinateRepository::try_new(&conn).unwrap();

    repo.add(&NewCoordinate {
        latitude: "55.7558".to_string(),
        longitude: "37.6173".to_string(),
        name: Some("Moskva".to_string()),
    })
    .unwrap();

    let modified = repo
        .update(
            "Moskva",
            &CoordinatePatch {
                name: Some("Moscow".to_string()),
                ..CoordinatePatch::default()
            },
        )
        .unwrap();
    assert!(modified);
    assert!(repo.find_by_key("Moskva").unwrap().is_none());
    assert!(repo.find_by_key("Moscow").unwrap().is_some());
}

#[test]
fn rename_collision_is_a_duplicate_key() {
    let conn = open_store();
    let repo = SqliteCoordinateRepository::try_new(&conn).unwrap();

    for (name, latitude) in [("Moscow", "55.7558"), ("Petersburg", "59.9343")] {
        repo.add(&NewCoordinate {
            latitude: latitude.to_string(),
            longitude: "30.0".to_string(),
            name: Some(name.to_string()),
        })
        .unwrap();
    }

    let err = repo
        .update(
            "Petersburg",
            &CoordinatePatch {
                name: Some("Moscow".to_string()),
                ..CoordinatePatch::default()
            },
        )
        .unwrap_err();
    assert!(matches!(
        err,
        RepoError::DuplicateKey {
            entity: "coordinate",
            ref key
        } if key == "Moscow"
    ));
}

#[test]
fn delete_by_name_reports_removal() {
    let conn = open_store();
    let repo = SqliteCoordinateRepository::try_new(&conn).unwrap();

    repo.add(&NewCoordinate {
        latitude: "55.7558".to_string(),
        longitude: "37.6173".to_string(),
        name: Some("Moscow".to_string()),
    })
    .unwrap();

    assert!(repo.delete("Moscow").unwrap());
    assert!(!repo.delete("Moscow").unwrap());
    assert!(repo.find_by_key("Moscow").unwrap().is_none());
}
