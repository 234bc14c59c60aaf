use super::*;

use crate::foundation::core::UserId;

#[test]
fn paths_are_deterministic_per_user() {
    let ws = Workspace::new("/tmp/cartello-test");
    assert!(ws.background_path(UserId(7)).ends_with("bg_7.png"));
    assert!(ws.output_path(UserId(7)).ends_with("7.png"));
    assert_ne!(ws.output_path(UserId(7)), ws.output_path(UserId(8)));
    assert_ne!(ws.background_path(UserId(7)), ws.output_path(UserId(7)));
}

#[test]
fn cleanup_removes_both_files_and_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let ws = Workspace::new(dir.path());
    let user = UserId(3);

    std::fs::write(ws.background_path(user), b"bg").unwrap();
    std::fs::write(ws.output_path(user), b"out").unwrap();

    ws.cleanup(user);
    assert!(!ws.background_path(user).exists());
    assert!(!ws.output_path(user).exists());

    // absent files are fine
    ws.cleanup(user);
}

#[test]
fn ensure_creates_the_root() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("nested/work");
    let ws = Workspace::new(&root);
    ws.ensure().unwrap();
    assert!(root.is_dir());
}
