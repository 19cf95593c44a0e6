use campus_core::db::open_db_in_memory;
use campus_core::{
    pos_service, Campus, CrudRepository, DomainModel, Pos, PosType, RepoError,
    SqlitePosRepository, ValidationError,
};

fn schmelzpunkt() -> Pos {
    let mut pos = Pos::new("Schmelzpunkt", PosType::Cafe, Campus::Altstadt).with_address(
        "Hauptstraße",
        "90",
        69117,
        "Heidelberg",
    );
    pos.description = "Great waffles".to_string();
    pos
}

fn bakery() -> Pos {
    Pos::new("Backhaus", PosType::Bakery, Campus::Inf).with_address(
        "Im Neuenheimer Feld",
        "304",
        69120,
        "Heidelberg",
    )
}

#[test]
fn upsert_without_id_assigns_id_and_timestamps() {
    let conn = open_db_in_memory().unwrap();
    let service = pos_service(&conn);

    let saved = service.upsert(schmelzpunkt()).unwrap();

    assert_eq!(saved.id(), Some(1));
    assert!(saved.created_at.is_some());
    assert!(saved.updated_at.is_some());
    assert_eq!(saved.name, "Schmelzpunkt");
    assert_eq!(saved.description, "Great waffles");
    assert_eq!(service.get_by_id(&1).unwrap(), saved);
}

#[test]
fn upsert_with_id_updates_existing_row() {
    let conn = open_db_in_memory().unwrap();
    let service = pos_service(&conn);

    let mut saved = service.upsert(schmelzpunkt()).unwrap();
    saved.campus = Campus::Bergheim;
    saved.pos_type = PosType::Cafeteria;
    let updated = service.upsert(saved.clone()).unwrap();

    assert_eq!(updated.id, saved.id);
    assert_eq!(updated.campus, Campus::Bergheim);
    assert_eq!(updated.pos_type, PosType::Cafeteria);
    assert_eq!(updated.created_at, saved.created_at);
    assert_eq!(service.get_all().unwrap(), vec![updated]);
}

#[test]
fn upsert_with_unknown_id_is_not_found() {
    let conn = open_db_in_memory().unwrap();
    let service = pos_service(&conn);

    let mut ghost = schmelzpunkt();
    ghost.set_id(Some(42));
    let err = service.upsert(ghost).unwrap_err();

    assert!(matches!(
        err,
        RepoError::NotFound { entity_type: "Pos", ref id } if id == "42"
    ));
    assert!(service.get_all().unwrap().is_empty());
}

#[test]
fn duplicate_name_is_reported_with_field() {
    let conn = open_db_in_memory().unwrap();
    let service = pos_service(&conn);
    service.upsert(schmelzpunkt()).unwrap();

    let err = service.upsert(schmelzpunkt()).unwrap_err();

    match err {
        RepoError::Duplicate(duplicate) => {
            assert_eq!(duplicate.entity_type, "Pos");
            assert_eq!(duplicate.field, "name");
            assert!(duplicate.cause.contains("UNIQUE"));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(service.get_all().unwrap().len(), 1);
}

#[test]
fn renaming_onto_existing_name_is_duplicate() {
    let conn = open_db_in_memory().unwrap();
    let service = pos_service(&conn);
    service.upsert(schmelzpunkt()).unwrap();
    let mut other = service.upsert(bakery()).unwrap();

    other.name = "Schmelzpunkt".to_string();
    let err = service.upsert(other).unwrap_err();

    assert!(err.is_duplicate());
}

#[test]
fn invalid_entity_is_rejected_before_sql() {
    let conn = open_db_in_memory().unwrap();
    let service = pos_service(&conn);

    let mut pos = schmelzpunkt();
    pos.city = String::new();
    let err = service.upsert(pos).unwrap_err();

    assert!(matches!(
        err,
        RepoError::Validation(ValidationError::BlankField("city"))
    ));
}

#[test]
fn get_all_lists_in_id_order() {
    let conn = open_db_in_memory().unwrap();
    let service = pos_service(&conn);
    service.upsert(schmelzpunkt()).unwrap();
    service.upsert(bakery()).unwrap();

    let names: Vec<String> = service
        .get_all()
        .unwrap()
        .into_iter()
        .map(|pos| pos.name)
        .collect();

    assert_eq!(names, vec!["Schmelzpunkt", "Backhaus"]);
}

#[test]
fn delete_removes_row_and_missing_id_is_not_found() {
    let conn = open_db_in_memory().unwrap();
    let service = pos_service(&conn);
    let saved = service.upsert(schmelzpunkt()).unwrap();
    let id = saved.id().unwrap();

    service.delete(&id).unwrap();

    assert!(service.get_by_id(&id).unwrap_err().is_not_found());
    assert!(service.delete(&id).unwrap_err().is_not_found());
}

#[test]
fn clear_removes_everything_and_restarts_ids() {
    let conn = open_db_in_memory().unwrap();
    let service = pos_service(&conn);
    service.upsert(schmelzpunkt()).unwrap();
    service.upsert(bakery()).unwrap();

    service.clear().unwrap();
    assert!(service.get_all().unwrap().is_empty());

    let fresh = service.upsert(bakery()).unwrap();
    assert_eq!(fresh.id(), Some(1));
}

#[test]
fn find_by_name_reads_through_repository() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePosRepository::new(&conn);
    let saved = repo.upsert(bakery()).unwrap();

    assert_eq!(repo.find_by_name("Backhaus").unwrap(), Some(saved));
    assert_eq!(repo.find_by_name("Nowhere").unwrap(), None);
}

#[test]
fn corrupted_enum_value_is_invalid_data() {
    let conn = open_db_in_memory().unwrap();
    let service = pos_service(&conn);
    let saved = service.upsert(bakery()).unwrap();

    conn.execute_batch("PRAGMA ignore_check_constraints = ON;")
        .unwrap();
    conn.execute(
        "UPDATE pos SET campus = 'mars' WHERE id = ?1;",
        [saved.id().unwrap()],
    )
    .unwrap();

    let err = service.get_by_id(&saved.id().unwrap()).unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(ref message) if message.contains("mars")));
}
