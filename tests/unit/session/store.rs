use super::*;

use crate::session::model::Stage;

#[test]
fn open_rejects_a_second_session_for_the_same_user() {
    let store = SessionStore::new();
    store.open(UserId(1), ChatId(10)).unwrap();
    assert!(matches!(
        store.open(UserId(1), ChatId(10)),
        Err(CartelloError::SessionConflict)
    ));
    // the first session is untouched by the rejected attempt
    let handle = store.get(UserId(1)).unwrap();
    assert_eq!(handle.lock().stage, Stage::TemplateSelection);
}

#[test]
fn distinct_users_are_independent() {
    let store = SessionStore::new();
    store.open(UserId(1), ChatId(10)).unwrap();
    store.open(UserId(2), ChatId(10)).unwrap();
    assert!(store.is_active(UserId(1)));
    assert!(store.is_active(UserId(2)));
}

#[test]
fn remove_is_idempotent_and_reopens() {
    let store = SessionStore::new();
    store.open(UserId(1), ChatId(10)).unwrap();
    store.remove(UserId(1));
    store.remove(UserId(1));
    assert!(store.get(UserId(1)).is_none());
    store.open(UserId(1), ChatId(10)).unwrap();
}

#[test]
fn detached_handles_stay_usable_after_remove() {
    let store = SessionStore::new();
    let handle = store.open(UserId(1), ChatId(10)).unwrap();
    store.remove(UserId(1));
    // an in-flight event finishes its work on the detached session
    handle.lock().stage = Stage::TemplateSelection;
    assert!(!store.is_active(UserId(1)));
}
