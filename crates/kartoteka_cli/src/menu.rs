//! Entity submenus driving the record store repositories.
//!
//! Every flow follows the same shape: show the ordered key list, accept a
//! 1-based index or a literal key, and report the typed error reason when
//! an operation fails. Nothing here touches SQL.

use crate::input::{prompt, prompt_optional};
use kartoteka_core::select::resolve_key;
use kartoteka_core::{
    CoordinatePatch, CoordinateRecord, CoordinateRepository, EventPatch, EventRepository,
    InteractionPatch, InteractionRepository, NewCoordinate, NewEvent, NewInteraction, NewPerson,
    NewPlace, NewSource, NewText, PersonPatch, PersonRepository, PlacePatch, PlaceRecord,
    PlaceRepository, RepoResult, SourcePatch, SourceRepository, SourceSelection,
    SqliteCoordinateRepository, SqliteEventRepository, SqliteInteractionRepository,
    SqlitePersonRepository, SqlitePlaceRepository, SqliteSourceRepository, SqliteTextRepository,
    TextPatch, TextRepository, REFERENCE_NOT_FOUND,
};
use rusqlite::Connection;

/// Top-level menu loop; returns when the operator quits.
pub fn main_menu(conn: &Connection) {
    loop {
        println!();
        println!("Menu");
        println!("1. Sources");
        println!("2. Coordinates");
        println!("3. Persons");
        println!("4. Events");
        println!("5. Texts");
        println!("6. Places");
        println!("7. Interactions");
        println!("0. Quit");
        match prompt("> ").as_str() {
            "0" => {
                println!("Bye.");
                return;
            }
            "1" => sources_menu(conn),
            "2" => coordinates_menu(conn),
            "3" => persons_menu(conn),
            "4" => events_menu(conn),
            "5" => texts_menu(conn),
            "6" => places_menu(conn),
            "7" => interactions_menu(conn),
            _ => println!("Choose 0-7."),
        }
    }
}

// --- shared helpers ---

fn print_numbered(keys: &[String]) {
    for (position, key) in keys.iter().enumerate() {
        println!("{}. {key}", position + 1);
    }
}

fn shown(value: Option<&str>) -> &str {
    value.unwrap_or("not set")
}

/// Shows an ordered key list and resolves index-or-key input against it.
fn select_key(
    keys: RepoResult<Vec<String>>,
    empty_message: &str,
    prompt_label: &str,
) -> Option<String> {
    let keys = match keys {
        Ok(keys) => keys,
        Err(err) => {
            println!("error: {err}");
            return None;
        }
    };
    if keys.is_empty() {
        println!("{empty_message}");
        return None;
    }
    println!();
    print_numbered(&keys);
    Some(resolve_key(&prompt(prompt_label), &keys))
}

fn source_keys(conn: &Connection) -> Option<Vec<String>> {
    match SqliteSourceRepository::try_new(conn).and_then(|repo| repo.list_keys()) {
        Ok(keys) => Some(keys),
        Err(err) => {
            println!("error: {err}");
            None
        }
    }
}

fn coordinate_keys(conn: &Connection) -> Option<Vec<String>> {
    match SqliteCoordinateRepository::try_new(conn).and_then(|repo| repo.list_keys()) {
        Ok(keys) => Some(keys),
        Err(err) => {
            println!("error: {err}");
            None
        }
    }
}

fn person_keys(conn: &Connection) -> Option<Vec<String>> {
    match SqlitePersonRepository::try_new(conn).and_then(|repo| repo.list_keys()) {
        Ok(keys) => Some(keys),
        Err(err) => {
            println!("error: {err}");
            None
        }
    }
}

fn read_new_source() -> NewSource {
    println!("\nNew source");
    NewSource {
        title: prompt("> Title: "),
        kind: prompt_optional("> Type (Enter to skip): "),
        link: prompt_optional("> Link (Enter to skip): "),
        content: prompt_optional("> Content (Enter to skip): "),
        contributor: prompt_optional("> Contributor (Enter to skip): "),
    }
}

fn parse_source_selection(input: &str, keys: &[String]) -> SourceSelection {
    match input {
        "0" => SourceSelection::None,
        "-1" => SourceSelection::Create(read_new_source()),
        other => SourceSelection::Existing(resolve_key(other, keys)),
    }
}

// --- sources ---

fn sources_menu(conn: &Connection) {
    let repo = match SqliteSourceRepository::try_new(conn) {
        Ok(repo) => repo,
        Err(err) => {
            println!("error: {err}");
            return;
        }
    };
    loop {
        println!("\nSources");
        println!("1. List all");
        println!("2. Find by title");
        println!("3. Add");
        println!("4. Update");
        println!("5. Delete");
        println!("0. Back");
        match prompt("> ").as_str() {
            "0" => return,
            "1" => sources_list(&repo),
            "2" => sources_find(&repo),
            "3" => sources_add(&repo),
            "4" => sources_update(&repo),
            "5" => sources_delete(&repo),
            _ => println!("Choose 0-5."),
        }
    }
}

fn print_source(record: &kartoteka_core::SourceRecord) {
    println!(
        "Title: {}, Type: {}, Link: {}, Content: {}, Contributor: {}",
        record.title,
        shown(record.kind.as_deref()),
        shown(record.link.as_deref()),
        shown(record.content.as_deref()),
        shown(record.contributor.as_deref()),
    );
}

fn sources_list(repo: &SqliteSourceRepository) {
    println!("\nSources:");
    match repo.list_all() {
        Ok(records) if records.is_empty() => println!("No sources."),
        Ok(records) => {
            for record in &records {
                print_source(record);
            }
        }
        Err(err) => println!("error: {err}"),
    }
}

fn sources_find(repo: &SqliteSourceRepository) {
    let Some(title) = select_key(repo.list_keys(), "No sources.", "Enter a number or a title: ")
    else {
        return;
    };
    match repo.find_by_key(&title) {
        Ok(Some(record)) => print_source(&record),
        Ok(None) => println!("Source not found."),
        Err(err) => println!("error: {err}"),
    }
}

fn sources_add(repo: &SqliteSourceRepository) {
    let source = read_new_source();
    match repo.add(&source) {
        Ok(_) => println!("Source added."),
        Err(err) => println!("error: {err}"),
    }
}

fn sources_update(repo: &SqliteSourceRepository) {
    let Some(title) = select_key(repo.list_keys(), "No sources.", "Enter a number or a title: ")
    else {
        return;
    };
    let patch = SourcePatch {
        kind: prompt_optional("> New type (Enter to keep): "),
        link: prompt_optional("> New link (Enter to keep): "),
        content: prompt_optional("> New content (Enter to keep): "),
        contributor: prompt_optional("> New contributor (Enter to keep): "),
    };
    match repo.update(&title, &patch) {
        Ok(true) => println!("Source updated."),
        Ok(false) => println!("Source not found."),
        Err(err) => println!("error: {err}"),
    }
}

fn sources_delete(repo: &SqliteSourceRepository) {
    let Some(title) = select_key(repo.list_keys(), "No sources.", "Enter a number or a title: ")
    else {
        return;
    };
    match repo.delete(&title) {
        Ok(true) => println!("Source deleted."),
        Ok(false) => println!("Source not found."),
        Err(err) => println!("error: {err}"),
    }
}

// --- coordinates ---

fn coordinates_menu(conn: &Connection) {
    let repo = match SqliteCoordinateRepository::try_new(conn) {
        Ok(repo) => repo,
        Err(err) => {
            println!("error: {err}");
            return;
        }
    };
    loop {
        println!("\nCoordinates");
        println!("1. List all");
        println!("2. Find by name");
        println!("3. Add");
        println!("4. Update");
        println!("5. Delete");
        println!("0. Back");
        match prompt("> ").as_str() {
            "0" => return,
            "1" => coordinates_list(&repo),
            "2" => coordinates_find(&repo),
            "3" => coordinates_add(&repo),
            "4" => coordinates_update(&repo),
            "5" => coordinates_delete(&repo),
            _ => println!("Choose 0-5."),
        }
    }
}

fn print_coordinate(record: &CoordinateRecord) {
    println!(
        "Latitude: {}, Longitude: {}, Name: {}",
        record.latitude,
        record.longitude,
        shown(record.name.as_deref()),
    );
}

fn coordinates_list(repo: &SqliteCoordinateRepository) {
    println!("\nCoordinates:");
    match repo.list_all() {
        Ok(records) if records.is_empty() => println!("No coordinates."),
        Ok(records) => {
            for record in &records {
                print_coordinate(record);
            }
        }
        Err(err) => println!("error: {err}"),
    }
}

fn coordinates_find(repo: &SqliteCoordinateRepository) {
    let Some(name) = select_key(
        repo.list_keys(),
        "No named coordinates.",
        "Enter a number or a name: ",
    ) else {
        return;
    };
    match repo.find_by_key(&name) {
        Ok(Some(record)) => print_coordinate(&record),
        Ok(None) => println!("Coordinates not found."),
        Err(err) => println!("error: {err}"),
    }
}

fn coordinates_add(repo: &SqliteCoordinateRepository) {
    println!("\nNew coordinates");
    let coordinate = NewCoordinate {
        latitude: prompt("> Latitude: "),
        longitude: prompt("> Longitude: "),
        name: prompt_optional("> Name (Enter to skip): "),
    };
    match repo.add(&coordinate) {
        Ok(_) => println!("Coordinates added."),
        Err(err) => println!("error: {err}"),
    }
}

fn coordinates_update(repo: &SqliteCoordinateRepository) {
    let Some(name) = select_key(
        repo.list_keys(),
        "No named coordinates.",
        "Enter a number or a name: ",
    ) else {
        return;
    };
    let patch = CoordinatePatch {
        latitude: prompt_optional("> New latitude (Enter to keep): "),
        longitude: prompt_optional("> New longitude (Enter to keep): "),
        name: prompt_optional("> New name (Enter to keep): "),
    };
    match repo.update(&name, &patch) {
        Ok(true) => println!("Coordinates updated."),
        Ok(false) => println!("Coordinates not found."),
        Err(err) => println!("error: {err}"),
    }
}

fn coordinates_delete(repo: &SqliteCoordinateRepository) {
    let Some(name) = select_key(
        repo.list_keys(),
        "No named coordinates.",
        "Enter a number or a name: ",
    ) else {
        return;
    };
    match repo.delete(&name) {
        Ok(true) => println!("Coordinates deleted."),
        Ok(false) => println!("Coordinates not found."),
        Err(err) => println!("error: {err}"),
    }
}

// --- persons ---

fn persons_menu(conn: &Connection) {
    let repo = match SqlitePersonRepository::try_new(conn) {
        Ok(repo) => repo,
        Err(err) => {
            println!("error: {err}");
            return;
        }
    };
    loop {
        println!("\nPersons");
        println!("1. List all");
        println!("2. Find by surname");
        println!("3. Add");
        println!("4. Update");
        println!("5. Delete");
        println!("0. Back");
        match prompt("> ").as_str() {
            "0" => return,
            "1" => persons_list(&repo),
            "2" => persons_find(&repo),
            "3" => persons_add(&repo),
            "4" => persons_update(&repo),
            "5" => persons_delete(&repo),
            _ => println!("Choose 0-5."),
        }
    }
}

fn print_person(record: &kartoteka_core::PersonRecord) {
    println!(
        "Surname: {}, Name: {}, Patronymic: {}, Date of birth: {}, Biography: {}",
        record.surname,
        shown(record.name.as_deref()),
        shown(record.patronymic.as_deref()),
        shown(record.date_of_birth.as_deref()),
        shown(record.biography.as_deref()),
    );
}

fn persons_list(repo: &SqlitePersonRepository) {
    println!("\nPersons:");
    match repo.list_all() {
        Ok(records) if records.is_empty() => println!("No persons."),
        Ok(records) => {
            for record in &records {
                print_person(record);
            }
        }
        Err(err) => println!("error: {err}"),
    }
}

fn persons_find(repo: &SqlitePersonRepository) {
    let Some(surname) = select_key(repo.list_keys(), "No persons.", "Enter a number or a surname: ")
    else {
        return;
    };
    match repo.find_by_key(&surname) {
        Ok(Some(record)) => print_person(&record),
        Ok(None) => println!("Person not found."),
        Err(err) => println!("error: {err}"),
    }
}

fn persons_add(repo: &SqlitePersonRepository) {
    println!("\nNew person");
    let person = NewPerson {
        surname: prompt("> Surname: "),
        name: prompt_optional("> Name (Enter to skip): "),
        patronymic: prompt_optional("> Patronymic (Enter to skip): "),
        date_of_birth: prompt_optional("> Date of birth (YYYY-MM-DD, Enter to skip): "),
        biography: prompt_optional("> Biography (Enter to skip): "),
    };
    match repo.add(&person) {
        Ok(_) => println!("Person added."),
        Err(err) => println!("error: {err}"),
    }
}

fn persons_update(repo: &SqlitePersonRepository) {
    let Some(surname) = select_key(repo.list_keys(), "No persons.", "Enter a number or a surname: ")
    else {
        return;
    };
    let patch = PersonPatch {
        name: prompt_optional("> New name (Enter to keep): "),
        patronymic: prompt_optional("> New patronymic (Enter to keep): "),
        date_of_birth: prompt_optional("> New date of birth (YYYY-MM-DD, Enter to keep): "),
        biography: prompt_optional("> New biography (Enter to keep): "),
    };
    match repo.update(&surname, &patch) {
        Ok(true) => println!("Person updated."),
        Ok(false) => println!("Person not found."),
        Err(err) => println!("error: {err}"),
    }
}

fn persons_delete(repo: &SqlitePersonRepository) {
    let Some(surname) = select_key(repo.list_keys(), "No persons.", "Enter a number or a surname: ")
    else {
        return;
    };
    match repo.delete(&surname) {
        Ok(true) => println!("Person deleted."),
        Ok(false) => println!("Person not found."),
        Err(err) => println!("error: {err}"),
    }
}

// --- events ---

fn events_menu(conn: &Connection) {
    let repo = match SqliteEventRepository::try_new(conn) {
        Ok(repo) => repo,
        Err(err) => {
            println!("error: {err}");
            return;
        }
    };
    loop {
        println!("\nEvents");
        println!("1. List all");
        println!("2. Find by name");
        println!("3. Add");
        println!("4. Update");
        println!("5. Delete");
        println!("0. Back");
        match prompt("> ").as_str() {
            "0" => return,
            "1" => events_list(&repo),
            "2" => events_find(&repo),
            "3" => events_add(conn, &repo),
            "4" => events_update(conn, &repo),
            "5" => events_delete(&repo),
            _ => println!("Choose 0-5."),
        }
    }
}

fn print_event(record: &kartoteka_core::EventRecord) {
    println!(
        "Name: {}, Date: {}, Description: {}, Source: {}",
        record.name,
        record.date,
        shown(record.description.as_deref()),
        record.source,
    );
}

fn events_list(repo: &SqliteEventRepository) {
    println!("\nEvents:");
    match repo.list_all() {
        Ok(records) if records.is_empty() => println!("No events."),
        Ok(records) => {
            for record in &records {
                print_event(record);
            }
        }
        Err(err) => println!("error: {err}"),
    }
}

fn events_find(repo: &SqliteEventRepository) {
    let Some(name) = select_key(repo.list_keys(), "No events.", "Enter a number or a name: ")
    else {
        return;
    };
    match repo.find_by_key(&name) {
        Ok(Some(record)) => print_event(&record),
        Ok(None) => println!("Event not found."),
        Err(err) => println!("error: {err}"),
    }
}

fn events_add(conn: &Connection, repo: &SqliteEventRepository) {
    println!("\nNew event");
    let name = prompt("> Name: ");
    let date = prompt("> Date (YYYY-MM-DD): ");
    let description = prompt_optional("> Description (Enter to skip): ");
    let Some(keys) = source_keys(conn) else { return };
    if keys.is_empty() {
        println!("No sources.");
        return;
    }
    println!("\nSources:");
    print_numbered(&keys);
    let source = resolve_key(&prompt("Enter a number or a title: "), &keys);
    match repo.add(&NewEvent {
        name,
        date,
        description,
        source,
    }) {
        Ok(_) => println!("Event added."),
        Err(err) => println!("error: {err}"),
    }
}

fn events_update(conn: &Connection, repo: &SqliteEventRepository) {
    let Some(name) = select_key(repo.list_keys(), "No events.", "Enter a number or a name: ")
    else {
        return;
    };
    let date = prompt_optional("> New date (YYYY-MM-DD, Enter to keep): ");
    let description = prompt_optional("> New description (Enter to keep): ");
    let Some(keys) = source_keys(conn) else { return };
    let source = if keys.is_empty() {
        None
    } else {
        println!("\nSources:");
        print_numbered(&keys);
        let input = prompt("Enter a number or a title (Enter to keep): ");
        if input.is_empty() {
            None
        } else {
            Some(resolve_key(&input, &keys))
        }
    };
    match repo.update(
        &name,
        &EventPatch {
            date,
            description,
            source,
        },
    ) {
        Ok(true) => println!("Event updated."),
        Ok(false) => println!("Event not found."),
        Err(err) => println!("error: {err}"),
    }
}

fn events_delete(repo: &SqliteEventRepository) {
    let Some(name) = select_key(repo.list_keys(), "No events.", "Enter a number or a name: ")
    else {
        return;
    };
    match repo.delete(&name) {
        Ok(true) => println!("Event deleted."),
        Ok(false) => println!("Event not found."),
        Err(err) => println!("error: {err}"),
    }
}

// --- texts ---

fn texts_menu(conn: &Connection) {
    let repo = match SqliteTextRepository::try_new(conn) {
        Ok(repo) => repo,
        Err(err) => {
            println!("error: {err}");
            return;
        }
    };
    loop {
        println!("\nTexts");
        println!("1. List all");
        println!("2. Find by name");
        println!("3. Add");
        println!("4. Update");
        println!("5. Delete");
        println!("0. Back");
        match prompt("> ").as_str() {
            "0" => return,
            "1" => texts_list(&repo),
            "2" => texts_find(&repo),
            "3" => texts_add(conn, &repo),
            "4" => texts_update(conn, &repo),
            "5" => texts_delete(&repo),
            _ => println!("Choose 0-5."),
        }
    }
}

fn print_text(record: &kartoteka_core::TextRecord) {
    println!(
        "Name: {}, Date: {}, Content: {}, Source: {}",
        record.name,
        record.date,
        shown(record.content.as_deref()),
        record.source,
    );
}

fn texts_list(repo: &SqliteTextRepository) {
    println!("\nTexts:");
    match repo.list_all() {
        Ok(records) if records.is_empty() => println!("No texts."),
        Ok(records) => {
            for record in &records {
                print_text(record);
            }
        }
        Err(err) => println!("error: {err}"),
    }
}

fn texts_find(repo: &SqliteTextRepository) {
    let Some(name) = select_key(repo.list_keys(), "No texts.", "Enter a number or a name: ")
    else {
        return;
    };
    match repo.find_by_key(&name) {
        Ok(Some(record)) => print_text(&record),
        Ok(None) => println!("Text not found."),
        Err(err) => println!("error: {err}"),
    }
}

fn show_source_choices(keys: &[String]) {
    println!("\nSources:");
    println!("0. No source");
    print_numbered(keys);
    println!("-1. Create a new source");
}

fn texts_add(conn: &Connection, repo: &SqliteTextRepository) {
    println!("\nNew text");
    let name = prompt("> Name: ");
    let content = prompt_optional("> Content (Enter to skip): ");
    let date = prompt("> Date (YYYY-MM-DD): ");
    let Some(keys) = source_keys(conn) else { return };
    show_source_choices(&keys);
    let input = prompt("Enter a number, a title, 0 or -1: ");
    let source = parse_source_selection(&input, &keys);
    match repo.add(&NewText {
        name,
        content,
        date,
        source,
    }) {
        Ok(_) => println!("Text added."),
        Err(err) => println!("error: {err}"),
    }
}

fn texts_update(conn: &Connection, repo: &SqliteTextRepository) {
    let Some(name) = select_key(repo.list_keys(), "No texts.", "Enter a number or a name: ")
    else {
        return;
    };
    let content = prompt_optional("> New content (Enter to keep): ");
    let date = prompt_optional("> New date (YYYY-MM-DD, Enter to keep): ");
    let Some(keys) = source_keys(conn) else { return };
    show_source_choices(&keys);
    let input = prompt("Enter a number, a title, 0 or -1 (Enter to keep): ");
    let source = if input.is_empty() {
        None
    } else {
        Some(parse_source_selection(&input, &keys))
    };
    match repo.update(
        &name,
        &TextPatch {
            content,
            date,
            source,
        },
    ) {
        Ok(true) => println!("Text updated."),
        Ok(false) => println!("Text not found."),
        Err(err) => println!("error: {err}"),
    }
}

fn texts_delete(repo: &SqliteTextRepository) {
    let Some(name) = select_key(repo.list_keys(), "No texts.", "Enter a number or a name: ")
    else {
        return;
    };
    match repo.delete(&name) {
        Ok(true) => println!("Text deleted."),
        Ok(false) => println!("Text not found."),
        Err(err) => println!("error: {err}"),
    }
}

// --- places ---

fn places_menu(conn: &Connection) {
    let repo = match SqlitePlaceRepository::try_new(conn) {
        Ok(repo) => repo,
        Err(err) => {
            println!("error: {err}");
            return;
        }
    };
    loop {
        println!("\nPlaces");
        println!("1. List all");
        println!("2. Find by name");
        println!("3. Add");
        println!("4. Update");
        println!("5. Delete");
        println!("0. Back");
        match prompt("> ").as_str() {
            "0" => return,
            "1" => places_list(&repo),
            "2" => places_find(&repo),
            "3" => places_add(conn, &repo),
            "4" => places_update(conn, &repo),
            "5" => places_delete(&repo),
            _ => println!("Choose 0-5."),
        }
    }
}

fn print_place(record: &PlaceRecord) {
    let coordinates = match (record.latitude, record.longitude) {
        (Some(latitude), Some(longitude)) => format!("{latitude}, {longitude}"),
        _ => REFERENCE_NOT_FOUND.to_string(),
    };
    println!(
        "Name: {}, Coordinates: {coordinates}, Source: {}",
        record.name, record.source,
    );
}

fn places_list(repo: &SqlitePlaceRepository) {
    println!("\nPlaces:");
    match repo.list_all() {
        Ok(records) if records.is_empty() => println!("No places."),
        Ok(records) => {
            for record in &records {
                print_place(record);
            }
        }
        Err(err) => println!("error: {err}"),
    }
}

fn places_find(repo: &SqlitePlaceRepository) {
    let Some(name) = select_key(repo.list_keys(), "No places.", "Enter a number or a name: ")
    else {
        return;
    };
    match repo.find_by_key(&name) {
        Ok(Some(record)) => print_place(&record),
        Ok(None) => println!("Place not found."),
        Err(err) => println!("error: {err}"),
    }
}

fn places_add(conn: &Connection, repo: &SqlitePlaceRepository) {
    println!("\nNew place");
    let name = prompt("> Name: ");
    let Some(coordinates) = coordinate_keys(conn) else { return };
    if coordinates.is_empty() {
        println!("No named coordinates.");
        return;
    }
    println!("\nCoordinates:");
    print_numbered(&coordinates);
    let coordinate = resolve_key(&prompt("Enter a number or a name: "), &coordinates);
    let Some(sources) = source_keys(conn) else { return };
    if sources.is_empty() {
        println!("No sources.");
        return;
    }
    println!("\nSources:");
    print_numbered(&sources);
    let source = resolve_key(&prompt("Enter a number or a title: "), &sources);
    match repo.add(&NewPlace {
        name,
        coordinate,
        source,
    }) {
        Ok(_) => println!("Place added."),
        Err(err) => println!("error: {err}"),
    }
}

fn places_update(conn: &Connection, repo: &SqlitePlaceRepository) {
    let Some(name) = select_key(repo.list_keys(), "No places.", "Enter a number or a name: ")
    else {
        return;
    };
    let new_name = prompt_optional("> New name (Enter to keep): ");
    let Some(coordinates) = coordinate_keys(conn) else { return };
    let coordinate = if coordinates.is_empty() {
        None
    } else {
        println!("\nCoordinates:");
        print_numbered(&coordinates);
        let input = prompt("Enter a number or a name (Enter to keep): ");
        if input.is_empty() {
            None
        } else {
            Some(resolve_key(&input, &coordinates))
        }
    };
    let Some(sources) = source_keys(conn) else { return };
    let source = if sources.is_empty() {
        None
    } else {
        println!("\nSources:");
        print_numbered(&sources);
        let input = prompt("Enter a number or a title (Enter to keep): ");
        if input.is_empty() {
            None
        } else {
            Some(resolve_key(&input, &sources))
        }
    };
    match repo.update(
        &name,
        &PlacePatch {
            name: new_name,
            coordinate,
            source,
        },
    ) {
        Ok(true) => println!("Place updated."),
        Ok(false) => println!("Place not found."),
        Err(err) => println!("error: {err}"),
    }
}

fn places_delete(repo: &SqlitePlaceRepository) {
    let Some(name) = select_key(repo.list_keys(), "No places.", "Enter a number or a name: ")
    else {
        return;
    };
    match repo.delete(&name) {
        Ok(true) => println!("Place deleted."),
        Ok(false) => println!("Place not found."),
        Err(err) => println!("error: {err}"),
    }
}

// --- interactions ---

fn interactions_menu(conn: &Connection) {
    let repo = match SqliteInteractionRepository::try_new(conn) {
        Ok(repo) => repo,
        Err(err) => {
            println!("error: {err}");
            return;
        }
    };
    loop {
        println!("\nInteractions");
        println!("1. List all");
        println!("2. Find by description");
        println!("3. Add");
        println!("4. Update");
        println!("5. Delete");
        println!("0. Back");
        match prompt("> ").as_str() {
            "0" => return,
            "1" => interactions_list(&repo),
            "2" => interactions_find(&repo),
            "3" => interactions_add(conn, &repo),
            "4" => interactions_update(conn, &repo),
            "5" => interactions_delete(&repo),
            _ => println!("Choose 0-5."),
        }
    }
}

fn print_interaction(record: &kartoteka_core::InteractionRecord) {
    println!(
        "Description: {}, Person: {}, Source: {}",
        shown(record.description.as_deref()),
        record.person,
        record.source,
    );
}

fn interactions_list(repo: &SqliteInteractionRepository) {
    println!("\nInteractions:");
    match repo.list_all() {
        Ok(records) if records.is_empty() => println!("No interactions."),
        Ok(records) => {
            for record in &records {
                print_interaction(record);
            }
        }
        Err(err) => println!("error: {err}"),
    }
}

fn interactions_find(repo: &SqliteInteractionRepository) {
    let Some(description) = select_key(
        repo.list_keys(),
        "No described interactions.",
        "Enter a number or a description: ",
    ) else {
        return;
    };
    match repo.find_by_key(&description) {
        Ok(Some(record)) => print_interaction(&record),
        Ok(None) => println!("Interaction not found."),
        Err(err) => println!("error: {err}"),
    }
}

fn interactions_add(conn: &Connection, repo: &SqliteInteractionRepository) {
    println!("\nNew interaction");
    let description = prompt_optional("> Description (Enter to skip): ");
    let Some(persons) = person_keys(conn) else { return };
    if persons.is_empty() {
        println!("No persons.");
        return;
    }
    println!("\nPersons:");
    print_numbered(&persons);
    let person = resolve_key(&prompt("Enter a number or a surname: "), &persons);
    let Some(sources) = source_keys(conn) else { return };
    if sources.is_empty() {
        println!("No sources.");
        return;
    }
    println!("\nSources:");
    print_numbered(&sources);
    let source = resolve_key(&prompt("Enter a number or a title: "), &sources);
    match repo.add(&NewInteraction {
        description,
        person,
        source,
    }) {
        Ok(_) => println!("Interaction added."),
        Err(err) => println!("error: {err}"),
    }
}

fn interactions_update(conn: &Connection, repo: &SqliteInteractionRepository) {
    let Some(description) = select_key(
        repo.list_keys(),
        "No described interactions.",
        "Enter a number or a description: ",
    ) else {
        return;
    };
    let new_description = prompt_optional("> New description (Enter to keep): ");
    let Some(persons) = person_keys(conn) else { return };
    let person = if persons.is_empty() {
        None
    } else {
        println!("\nPersons:");
        print_numbered(&persons);
        let input = prompt("Enter a number or a surname (Enter to keep): ");
        if input.is_empty() {
            None
        } else {
            Some(resolve_key(&input, &persons))
        }
    };
    let Some(sources) = source_keys(conn) else { return };
    let source = if sources.is_empty() {
        None
    } else {
        println!("\nSources:");
        print_numbered(&sources);
        let input = prompt("Enter a number or a title (Enter to keep): ");
        if input.is_empty() {
            None
        } else {
            Some(resolve_key(&input, &sources))
        }
    };
    match repo.update(
        &description,
        &InteractionPatch {
            description: new_description,
            person,
            source,
        },
    ) {
        Ok(true) => println!("Interaction updated."),
        Ok(false) => println!("Interaction not found."),
        Err(err) => println!("error: {err}"),
    }
}

fn interactions_delete(repo: &SqliteInteractionRepository) {
    let Some(description) = select_key(
        repo.list_keys(),
        "No described interactions.",
        "Enter a number or a description: ",
    ) else {
        return;
    };
    match repo.delete(&description) {
        Ok(true) => println!("Interaction deleted."),
        Ok(false) => println!("Interaction not found."),
        Err(err) => println!("error: {err}"),
    }
}
