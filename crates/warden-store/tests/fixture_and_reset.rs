//! Fixture loading from disk and password resets committed into the store.

use std::io::Write;

use pretty_assertions::assert_eq;
use warden_auth::{Argon2Credentials, CredentialStore, PasswordResetForm, ResetError, UserDirectory};
use warden_store::MemoryStore;
use warden_store::error::StoreError;

fn credentials() -> Box<dyn CredentialStore> {
    Box::new(Argon2Credentials::with_params(8, 1, 1).unwrap())
}

const FIXTURE: &str = r#"{
  "users": [
    {"id": "10", "name": "Ana", "last_name": "Rojas", "email": "ana@parques.example",
     "role": "resource_guard", "initial_password": "inicio-10"},
    {"id": "11", "name": "Luis", "last_name": "Mora", "email": "luis@parques.example",
     "role": "coordinator", "initial_password": "inicio-11"}
  ],
  "metrics": [
    {"id": "m-1", "name": "Patrols", "description": "", "category": "activities",
     "target": 30.0, "actual": 28.0, "unit": "patrols", "period": "monthly",
     "guard_id": "10", "start_date": "2024-03-01", "end_date": "2024-03-31"}
  ],
  "activities": [
    {"id": "act-1", "status": "completed", "guard_id": "10"}
  ]
}"#;

fn write_fixture(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn loads_fixture_from_json_file() {
    let file = write_fixture(FIXTURE);
    let store = MemoryStore::from_fixture_path(file.path(), credentials()).unwrap();

    assert_eq!(store.users().len(), 2);
    assert_eq!(store.metrics()[0].guard_id.as_deref(), Some("10"));
    assert_eq!(store.activities().len(), 1);
    assert!(store.verify_credential("10", "inicio-10").unwrap());
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");
    let err = MemoryStore::from_fixture_path(&path, credentials()).unwrap_err();
    assert!(matches!(err, StoreError::Io { .. }));
}

#[test]
fn unknown_role_in_fixture_is_parse_error() {
    let file = write_fixture(&FIXTURE.replace("\"coordinator\"", "\"ranger\""));
    let err = MemoryStore::from_fixture_path(file.path(), credentials()).unwrap_err();
    assert!(matches!(err, StoreError::Parse(_)));
}

#[test]
fn coordinator_resets_guard_password_in_store() {
    let mut store = MemoryStore::seeded(credentials()).unwrap();
    let actor = store.user("3").cloned();
    let target = store.user("1").cloned();
    let mut form = PasswordResetForm::new("nueva-clave", "nueva-clave");

    let receipt = form
        .submit(&mut store, actor.as_ref(), target.as_ref())
        .unwrap();

    assert_eq!(receipt.display_name, "Carlos Vega");
    assert!(store.verify_credential("1", "nueva-clave").unwrap());
    assert!(!store.verify_credential("1", "guardia-1").unwrap());
    assert!(form.new_password.is_empty());
}

#[test]
fn reset_after_external_deletion_reports_user_not_found() {
    let mut store = MemoryStore::seeded(credentials()).unwrap();
    let actor = store.user("4").cloned();
    let target = store.user("2").cloned();
    store.remove_user("2");

    let mut form = PasswordResetForm::new("abcdef", "abcdef");
    let err = form
        .submit(&mut store, actor.as_ref(), target.as_ref())
        .unwrap_err();

    assert_eq!(err, ResetError::UserNotFound("2".into()));
    assert_eq!(form.error.as_deref(), Some("User 2 no longer exists"));
}

#[test]
fn administrator_password_is_untouched_by_reset() {
    let mut store = MemoryStore::seeded(credentials()).unwrap();
    let actor = store.user("4").cloned();

    let mut form = PasswordResetForm::new("abcdef", "abcdef");
    let err = form
        .submit(&mut store, actor.as_ref(), actor.as_ref())
        .unwrap_err();

    assert_eq!(err, ResetError::ForbiddenTarget);
    assert!(store.verify_credential("4", "admin-4").unwrap());
}
