//! Integration tests for `JsonFileStore`.

use talktoswami_core::error::DomainError;
use talktoswami_core::store::PreferenceStore;
use talktoswami_storage::json_file_store::JsonFileStore;

// --- get ---

#[tokio::test]
async fn test_get_returns_none_when_file_is_missing() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("prefs.json"));

    let value = store.get("selectedLanguage").await.unwrap();

    assert!(value.is_none());
}

#[tokio::test]
async fn test_get_returns_storage_error_for_corrupt_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.json");
    std::fs::write(&path, "not json at all").unwrap();
    let store = JsonFileStore::new(&path);

    let result = store.get("selectedLanguage").await;

    assert!(matches!(result, Err(DomainError::Storage(_))));
}

#[tokio::test]
async fn test_get_accepts_numeric_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.json");
    std::fs::write(&path, r#"{"selectedFontSize": 24}"#).unwrap();
    let store = JsonFileStore::new(&path);

    let value = store.get("selectedFontSize").await.unwrap();

    assert_eq!(value.as_deref(), Some("24"));
}

// --- set + get round-trip ---

#[tokio::test]
async fn test_set_then_get_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("prefs.json"));

    store.set("selectedLanguage", "hindi").await.unwrap();

    assert_eq!(
        store.get("selectedLanguage").await.unwrap().as_deref(),
        Some("hindi")
    );
}

#[tokio::test]
async fn test_set_keeps_other_keys() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("prefs.json"));

    store.set("selectedLanguage", "tamil").await.unwrap();
    store.set("selectedFontSize", "16").await.unwrap();

    assert_eq!(
        store.get("selectedLanguage").await.unwrap().as_deref(),
        Some("tamil")
    );
    assert_eq!(
        store.get("selectedFontSize").await.unwrap().as_deref(),
        Some("16")
    );
}

#[tokio::test]
async fn test_values_survive_a_new_store_instance() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.json");

    JsonFileStore::new(&path)
        .set("selectedFontSize", "20")
        .await
        .unwrap();
    let reopened = JsonFileStore::new(&path);

    assert_eq!(
        reopened.get("selectedFontSize").await.unwrap().as_deref(),
        Some("20")
    );
}

#[tokio::test]
async fn test_set_creates_missing_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("deeper").join("prefs.json");
    let store = JsonFileStore::new(&path);

    store.set("selectedLanguage", "german").await.unwrap();

    assert!(path.exists());
    assert!(!path.with_extension("json.tmp").exists());
}

#[tokio::test]
async fn test_set_replaces_corrupt_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.json");
    std::fs::write(&path, "[1, 2, 3]").unwrap();
    let store = JsonFileStore::new(&path);

    store.set("selectedLanguage", "english").await.unwrap();

    assert_eq!(
        store.get("selectedLanguage").await.unwrap().as_deref(),
        Some("english")
    );
}
