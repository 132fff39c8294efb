//! Directory validator behavior

mod common;

use common::{DATA_TEMP_DIR, DATA_TESTS_DIR, is_root};
use logcfg::config::paths::{PathError, readable_dir, writable_dir};
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_readable_dir_returns_path_unchanged() {
    let result = readable_dir(DATA_TESTS_DIR).unwrap();
    assert_eq!(result, PathBuf::from(DATA_TESTS_DIR));
}

#[test]
fn test_writable_dir_returns_path_unchanged() {
    let result = writable_dir(DATA_TEMP_DIR).unwrap();
    assert_eq!(result, PathBuf::from(DATA_TEMP_DIR));
}

#[test]
fn test_readable_dir_rejects_missing_path() {
    let err = readable_dir("data/does_not_exist/").unwrap_err();
    assert_eq!(
        err,
        PathError::NotADirectory("data/does_not_exist/".to_string())
    );
    assert!(err.to_string().contains("not a valid directory"));
}

#[test]
fn test_writable_dir_rejects_missing_path() {
    let err = writable_dir("data/does_not_exist/").unwrap_err();
    assert_eq!(
        err,
        PathError::NotADirectory("data/does_not_exist/".to_string())
    );
}

#[test]
fn test_validators_reject_plain_file() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("plain.txt");
    fs::write(&file, "contents").unwrap();

    let arg = file.to_str().unwrap();
    assert_eq!(
        readable_dir(arg).unwrap_err(),
        PathError::NotADirectory(arg.to_string())
    );
    assert_eq!(
        writable_dir(arg).unwrap_err(),
        PathError::NotADirectory(arg.to_string())
    );
}

#[test]
fn test_readable_dir_rejects_unreadable_directory() {
    // access(2) always succeeds for root
    if is_root() {
        return;
    }

    let dir = TempDir::new().unwrap();
    let locked = dir.path().join("locked");
    fs::create_dir(&locked).unwrap();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    let arg = locked.to_str().unwrap().to_string();
    let err = readable_dir(&arg).unwrap_err();
    assert_eq!(err, PathError::NotReadable(arg));
    assert!(err.to_string().contains("not a readable directory"));

    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
}

#[test]
fn test_writable_dir_rejects_read_only_directory() {
    if is_root() {
        return;
    }

    let dir = TempDir::new().unwrap();
    let read_only = dir.path().join("read_only");
    fs::create_dir(&read_only).unwrap();
    fs::set_permissions(&read_only, fs::Permissions::from_mode(0o555)).unwrap();

    let arg = read_only.to_str().unwrap().to_string();
    let err = writable_dir(&arg).unwrap_err();
    assert_eq!(err, PathError::NotWritable(arg.clone()));
    assert!(err.to_string().contains("not a writable directory"));

    // Still listable, so the read probe passes
    assert_eq!(readable_dir(&arg).unwrap(), PathBuf::from(&arg));

    fs::set_permissions(&read_only, fs::Permissions::from_mode(0o755)).unwrap();
}

#[test]
fn test_validators_are_idempotent() {
    assert_eq!(
        readable_dir(DATA_TESTS_DIR).unwrap(),
        readable_dir(DATA_TESTS_DIR).unwrap()
    );
    assert_eq!(
        writable_dir(DATA_TEMP_DIR).unwrap(),
        writable_dir(DATA_TEMP_DIR).unwrap()
    );
    assert_eq!(
        readable_dir("data/does_not_exist/").unwrap_err(),
        readable_dir("data/does_not_exist/").unwrap_err()
    );
}
