//! Tests for the exception store (each test uses its own temp dir).

use super::ExceptionManager;
use std::fs;

#[test]
fn open_missing_file_is_empty_and_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("exceptions.json");
    let manager = ExceptionManager::open(&path);
    assert!(manager.is_empty());
    assert!(!path.exists(), "opening must not create the file");
}

#[test]
fn open_non_object_or_invalid_json_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("exceptions.json");

    fs::write(&path, "\"not an object\"").unwrap();
    assert!(ExceptionManager::open(&path).is_empty());

    fs::write(&path, "{ \"a\": ").unwrap();
    assert!(ExceptionManager::open(&path).is_empty());
}

#[test]
fn add_then_get_reports_new_and_overwrite() {
    let dir = tempfile::tempdir().unwrap();
    let mut manager = ExceptionManager::open(dir.path().join("exceptions.json"));

    assert!(manager.add("k", "v").unwrap());
    assert_eq!(manager.get("k"), Some("v"));

    assert!(!manager.add("k", "v2").unwrap(), "repeated key is not new");
    assert_eq!(manager.get("k"), Some("v2"));
    assert_eq!(manager.len(), 1);
}

#[test]
fn add_persists_immediately() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("exceptions.json");
    let mut manager = ExceptionManager::open(&path);
    manager.add("timeout", "Request timed out").unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(text, "{\n    \"timeout\": \"Request timed out\"\n}");
}

#[test]
fn remove_missing_key_leaves_file_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("exceptions.json");
    let mut manager = ExceptionManager::open(&path);
    manager.add("a", "1").unwrap();
    let before = fs::read_to_string(&path).unwrap();

    assert!(!manager.remove("missing").unwrap());
    assert_eq!(manager.keys(), vec!["a".to_string()]);
    assert_eq!(fs::read_to_string(&path).unwrap(), before);
}

#[test]
fn remove_existing_key_saves() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("exceptions.json");
    let mut manager = ExceptionManager::open(&path);
    manager.add("a", "1").unwrap();
    manager.add("b", "2").unwrap();

    assert!(manager.remove("a").unwrap());
    assert!(!manager.contains("a"));
    let reopened = ExceptionManager::open(&path);
    assert_eq!(reopened.keys(), vec!["b".to_string()]);
}

#[test]
fn get_all_is_a_copy() {
    let dir = tempfile::tempdir().unwrap();
    let mut manager = ExceptionManager::open(dir.path().join("exceptions.json"));
    manager.add("a", "1").unwrap();

    let mut copy = manager.get_all();
    copy.insert("b".to_string(), serde_json::json!("2"));
    copy.shift_remove("a");

    assert_eq!(manager.get("a"), Some("1"));
    assert!(manager.get("b").is_none());
}

#[test]
fn save_then_reload_reproduces_mapping() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("exceptions.json");
    let mut manager = ExceptionManager::open(&path);
    manager.add("not_found", "Listing not found").unwrap();
    manager.add("unicode", "Սխալ").unwrap();
    manager.add("blocked", "Access denied").unwrap();

    let reopened = ExceptionManager::open(&path);
    assert_eq!(reopened.get_all(), manager.get_all());
    assert_eq!(reopened.keys(), manager.keys());
}

#[test]
fn non_string_values_are_kept_as_is() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("exceptions.json");
    fs::write(&path, r#"{"zeta": 404, "alpha": "a", "nested": {"x": true}}"#).unwrap();

    let mut manager = ExceptionManager::open(&path);
    assert!(manager.contains("zeta"));
    assert_eq!(manager.get("zeta"), None, "non-string value has no message");
    assert_eq!(manager.get_value("zeta"), Some(&serde_json::json!(404)));
    assert_eq!(manager.get("alpha"), Some("a"));

    manager.add("new", "v").unwrap();
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "{\n    \"zeta\": 404,\n    \"alpha\": \"a\",\n    \"nested\": {\n        \"x\": true\n    },\n    \"new\": \"v\"\n}"
    );
}

#[test]
fn keys_follow_document_then_insertion_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("exceptions.json");
    fs::write(&path, r#"{"zeta": 404, "alpha": "a"}"#).unwrap();

    let mut manager = ExceptionManager::open(&path);
    assert_eq!(manager.keys(), vec!["zeta".to_string(), "alpha".to_string()]);

    manager.add("beta", "b").unwrap();
    manager.add("zeta", "overwritten").unwrap();
    assert_eq!(
        manager.keys(),
        vec!["zeta".to_string(), "alpha".to_string(), "beta".to_string()]
    );

    assert!(manager.remove("zeta").unwrap());
    assert_eq!(manager.keys(), vec!["alpha".to_string(), "beta".to_string()]);
    assert_eq!(ExceptionManager::open(&path).keys(), manager.keys());
}

#[test]
fn load_discards_unsaved_changes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("exceptions.json");
    let mut manager = ExceptionManager::open(&path);
    manager.add("a", "1").unwrap();

    fs::write(&path, r#"{"b": "2"}"#).unwrap();
    manager.load();
    assert_eq!(manager.keys(), vec!["b".to_string()]);
}
