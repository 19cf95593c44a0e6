use campus_core::db::open_db_in_memory;
use campus_core::{user_service, DomainModel, RepoError, SqliteUserRepository, User};

fn jane() -> User {
    User::new("jane_doe", "jane.doe@uni-heidelberg.de", "Jane", "Doe")
}

fn max() -> User {
    User::new("max.mustermann", "max@uni-heidelberg.de", "Max", "Mustermann")
}

#[test]
fn create_then_update_user() {
    let conn = open_db_in_memory().unwrap();
    let service = user_service(&conn);

    let mut saved = service.upsert(jane()).unwrap();
    assert_eq!(saved.id(), Some(1));

    saved.last_name = "Roe".to_string();
    let updated = service.upsert(saved).unwrap();

    assert_eq!(updated.last_name, "Roe");
    assert_eq!(service.get_all().unwrap(), vec![updated]);
}

#[test]
fn duplicate_login_and_email_name_their_columns() {
    let conn = open_db_in_memory().unwrap();
    let service = user_service(&conn);
    service.upsert(jane()).unwrap();

    let mut same_login = max();
    same_login.login_name = "jane_doe".to_string();
    let err = service.upsert(same_login).unwrap_err();
    assert!(matches!(
        err,
        RepoError::Duplicate(ref duplicate)
            if duplicate.entity_type == "User" && duplicate.field == "login_name"
    ));

    let mut same_email = max();
    same_email.email_address = "jane.doe@uni-heidelberg.de".to_string();
    let err = service.upsert(same_email).unwrap_err();
    assert!(matches!(
        err,
        RepoError::Duplicate(ref duplicate) if duplicate.field == "email_address"
    ));
}

#[test]
fn update_of_deleted_user_is_not_found() {
    let conn = open_db_in_memory().unwrap();
    let service = user_service(&conn);
    let saved = service.upsert(jane()).unwrap();
    service.delete(&saved.id().unwrap()).unwrap();

    let err = service.upsert(saved).unwrap_err();

    assert!(err.is_not_found());
    assert!(service.get_all().unwrap().is_empty());
}

#[test]
fn clear_resets_users_and_ids() {
    let conn = open_db_in_memory().unwrap();
    let service = user_service(&conn);
    service.upsert(jane()).unwrap();
    service.upsert(max()).unwrap();

    service.clear().unwrap();
    let again = service.upsert(max()).unwrap();

    assert_eq!(again.id(), Some(1));
}

#[test]
fn find_by_login_name_returns_stored_user() {
    let conn = open_db_in_memory().unwrap();
    let service = user_service(&conn);
    let saved = service.upsert(max()).unwrap();

    let repo = SqliteUserRepository::new(&conn);
    assert_eq!(
        repo.find_by_login_name("max.mustermann").unwrap(),
        Some(saved)
    );
    assert_eq!(repo.find_by_login_name("nobody").unwrap(), None);
}
